/// Linear stock: pieces of a given length cut from bars of a fixed length
pub mod linear;

/// Rectangular stock: axis-aligned pieces cut from plates of a fixed width and height
pub mod plate;
