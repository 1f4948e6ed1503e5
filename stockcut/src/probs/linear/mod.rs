/// Entities to model the linear cutting stock problem
pub mod entities;

/// Importing and exporting linear instances and solutions
pub mod io;

/// Utilities for the linear variant
pub mod util;
