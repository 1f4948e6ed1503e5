//! Data model for one-dimensional (bar) and two-dimensional (plate) cutting stock problems.
//!
//! The crate holds everything that is not a placement decision: item definitions and their
//! expansion into physical units, bars and plates with their free space bookkeeping,
//! solutions with aggregate statistics, and the external (serializable) representation.
//! The heuristics that decide where units go live in the `cutopt` crate.

/// Variant independent entities
pub mod entities;

/// Axis-aligned geometry used by the plate variant
pub mod geometry;

/// The problem variants: linear stock (bars) and rectangular stock (plates)
pub mod probs;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::CutError;

#[doc(inline)]
pub use error::Result;
