mod unit;

#[doc(inline)]
pub use unit::UnitId;
