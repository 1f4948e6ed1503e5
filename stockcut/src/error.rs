//! Error types shared by both problem variants.

use thiserror::Error;

/// Errors surfaced to the caller before any packing takes place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CutError {
    /// Stock dimensions or generator parameters violate a validation rule.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A piece exceeds the stock in every allowed orientation.
    #[error("item {item} ({size}) can never be cut from stock of {stock}")]
    UnplaceableItem {
        item: String,
        size: String,
        stock: String,
    },

    /// Nothing is left to optimize once invalid items are filtered out.
    #[error("no valid items to optimize")]
    EmptyInput,
}

/// Result type for `stockcut` operations.
pub type Result<T> = std::result::Result<T, CutError>;
