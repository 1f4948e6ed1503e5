/// Entities to model the rectangular cutting stock problem
pub mod entities;

/// Importing and exporting plate instances and solutions
pub mod io;

/// Utilities for the plate variant
pub mod util;
