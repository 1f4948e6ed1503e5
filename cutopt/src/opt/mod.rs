/// Greedy first/best/worst-fit optimizer for linear stock
pub mod linear;

/// Scanline and free-rectangle best-fit optimizer for plates
pub mod plate;
