use crate::models::{QrCode, SymbolMatrix};
use crate::render::PixelBuffer;
use image::RgbaImage;
use std::path::Path;

/// Wrap a pixel buffer as an `image` RGBA image.
pub fn to_rgba_image(buffer: &PixelBuffer) -> Option<RgbaImage> {
    RgbaImage::from_raw(buffer.width, buffer.height, buffer.to_rgba_bytes())
}

/// Write a pixel buffer to disk; the format follows the file extension.
pub fn save_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), image::ImageError> {
    let image = to_rgba_image(buffer).ok_or_else(|| {
        image::ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch,
        ))
    })?;
    image.save(path)
}

/// Two characters per module, dark as `##`, light as spaces, with a
/// `quiet_zone`-module border.
pub fn matrix_to_ascii(matrix: &SymbolMatrix, quiet_zone: usize) -> String {
    let size = matrix.size();
    let side = size + 2 * quiet_zone;
    let mut out = String::with_capacity(side * (2 * side + 1));
    for y in 0..side {
        for x in 0..side {
            let dark = (quiet_zone..quiet_zone + size).contains(&x)
                && (quiet_zone..quiet_zone + size).contains(&y)
                && matrix.is_dark(x - quiet_zone, y - quiet_zone);
            out.push_str(if dark { "##" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Summary of an encoded QR code.
#[derive(Debug, Clone)]
pub struct QrSummary {
    /// Version number (1-40).
    pub version: u8,
    /// Side length in modules.
    pub size: usize,
    /// Error correction level letter.
    pub ec_level: String,
    /// Chosen mask id.
    pub mask: u8,
    /// Penalty per mask id.
    pub penalties: [u32; 8],
    /// Data codeword count.
    pub data_codewords: usize,
    /// Data + EC codeword count.
    pub total_codewords: usize,
    /// Share of dark modules.
    pub dark_ratio: f32,
}

/// Collect the numbers `qrgen inspect` prints.
pub fn summarize(qr: &QrCode) -> QrSummary {
    let size = qr.size();
    QrSummary {
        version: qr.version.number(),
        size,
        ec_level: qr.error_correction.to_string(),
        mask: qr.mask_pattern.id(),
        penalties: qr.penalties,
        data_codewords: qr.data_codewords.len(),
        total_codewords: qr.codewords.len(),
        dark_ratio: qr.matrix.dark_count() as f32 / (size * size) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::qr_encoder::QrEncoder;
    use crate::models::ECLevel;
    use crate::render::{BLACK, WHITE};

    #[test]
    fn test_rgba_image_conversion() {
        let buffer = PixelBuffer {
            width: 2,
            height: 1,
            pixels: vec![BLACK, WHITE],
        };
        let image = to_rgba_image(&buffer).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_ascii_dimensions() {
        let qr = QrEncoder::encode("42", ECLevel::M).unwrap();
        let ascii = matrix_to_ascii(&qr.matrix, 2);
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines.iter().all(|l| l.len() == 50));
        assert!(lines[0].trim().is_empty());
        // top-left finder corner
        assert!(lines[2][4..6].eq("##"));
    }

    #[test]
    fn test_summary() {
        let qr = QrEncoder::encode("0123456789", ECLevel::Q).unwrap();
        let summary = summarize(&qr);
        assert_eq!(summary.version, 1);
        assert_eq!(summary.size, 21);
        assert_eq!(summary.ec_level, "Q");
        assert_eq!(summary.data_codewords, 13);
        assert_eq!(summary.total_codewords, 26);
        assert!(summary.dark_ratio > 0.0 && summary.dark_ratio < 1.0);
    }
}
