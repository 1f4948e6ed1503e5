mod instance;
mod plate;
mod solution;
mod strategy;

#[doc(inline)]
pub use instance::{PlateInstance, RectItem, RectUnit};

#[doc(inline)]
pub use plate::{PlacedRect, Plate};

#[doc(inline)]
pub use solution::PlateSolution;

#[doc(inline)]
pub use strategy::PlacementStrategy;
