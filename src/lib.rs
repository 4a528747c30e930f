//! RustQR Gen - QR Code and linear barcode generator
//!
//! Turns input strings into symbols rendered straight into an RGBA pixel
//! buffer. QR codes are encoded in numeric mode at any of the four error
//! correction levels; EAN-13, ITF-14 and Code 128 are drawn from their
//! pattern tables.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Render options and environment defaults
pub mod config;
pub(crate) mod debug;
/// QR code encoding modules (Reed-Solomon, tables, placement, masking)
pub mod encoder;
/// Error type shared by every encoder
pub mod error;
/// Linear symbologies (EAN-13, ITF-14, Code 128)
pub mod linear;
/// Core data structures (QrCode, BitMatrix, SymbolMatrix, etc.)
pub mod models;
/// Pixel buffer, canvas and the QR painter
pub mod render;
/// Symbology selection
pub mod symbology;
/// Image export and inspection helpers
pub mod tools;

pub use config::RenderOptions;
pub use encoder::qr_encoder::QrEncoder;
pub use error::{EncodeError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, Module, QrCode, SymbolMatrix, Version};
pub use render::PixelBuffer;
pub use symbology::Symbology;

use encoder::gf256::Gf256;

/// Encode a string of digits as a QR code
///
/// # Arguments
/// * `data` - ASCII digits `0`-`9`
/// * `ec_level` - Error correction level
///
/// # Errors
/// `InvalidDigit` for any other character, `CapacityExceeded` when the
/// digits do not fit version 40 at `ec_level`.
///
/// # Example
/// ```
/// use rust_qr_gen::{ECLevel, encode};
///
/// let qr = encode("01234567", ECLevel::M).unwrap();
/// assert_eq!(qr.version.number(), 1);
/// ```
pub fn encode(data: &str, ec_level: ECLevel) -> Result<QrCode> {
    QrEncoder::encode(data, ec_level)
}

/// Encode digits and paint the QR code into a pixel buffer
///
/// The buffer is `2 * quiet_zone + size * module` pixels on each side, with
/// a 4-module quiet zone and 4 px modules scaled by `options.dpr`.
pub fn render_qr_code(data: &str, options: &RenderOptions) -> Result<PixelBuffer> {
    Symbology::Qr.render(data, options)
}

/// Render `data` with any supported symbology
pub fn render(symbology: Symbology, data: &str, options: &RenderOptions) -> Result<PixelBuffer> {
    symbology.render(data, options)
}

/// Encoder holding the options applied to every request
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    options: RenderOptions,
}

impl Encoder {
    /// Create an encoder with options from the environment
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create an encoder with explicit options
    pub fn with_options(options: RenderOptions) -> Self {
        // Warm the shared GF(256) tables
        Gf256::init();
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Encode digits as a QR code at the configured EC level
    pub fn encode(&self, data: &str) -> Result<QrCode> {
        QrEncoder::encode(data, self.options.ec_level)
    }

    /// Render `data` with `symbology`
    pub fn render(&self, symbology: Symbology, data: &str) -> Result<PixelBuffer> {
        symbology.render(data, &self.options)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        let qr = encode("", ECLevel::H).unwrap();
        assert_eq!(qr.version, Version::MIN);
        assert_eq!(qr.data_codewords.len(), 9);
    }

    #[test]
    fn test_render_qr_code_idempotent() {
        let options = RenderOptions::new(2, ECLevel::Q);
        let first = render_qr_code("3141592653589793", &options).unwrap();
        let second = render_qr_code("3141592653589793", &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encoder_uses_options() {
        let encoder = Encoder::with_options(RenderOptions::new(1, ECLevel::H));
        let qr = encoder.encode("8").unwrap();
        assert_eq!(qr.error_correction, ECLevel::H);
        let buffer = encoder.render(Symbology::Qr, "8").unwrap();
        assert_eq!(buffer.width, 2 * 16 + 21 * 4);
        assert_eq!(
            render(Symbology::Qr, "8", encoder.options()).unwrap(),
            buffer
        );
    }
}
