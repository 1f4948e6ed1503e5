mod export;
mod import;

/// External (serializable) representations of linear instances and solutions
pub mod ext_repr;

#[doc(inline)]
pub use export::export;

#[doc(inline)]
pub use import::import;
