//! Rasterisation into RGBA pixel buffers

/// Pixel buffer and rectangle primitives
pub mod canvas;
/// Module-pattern drawing shared by the linear symbologies
pub mod pattern;
/// QR symbol painter
pub mod qr;

pub use canvas::{BLACK, Canvas, PixelBuffer, WHITE, rgba};
pub use qr::render_qr;
