mod bar;
mod heuristic;
mod instance;
mod solution;

#[doc(inline)]
pub use bar::{Bar, Cut};

#[doc(inline)]
pub use heuristic::FitHeuristic;

#[doc(inline)]
pub use instance::{LinearInstance, LinearItem, LinearUnit};

#[doc(inline)]
pub use solution::LinearSolution;
