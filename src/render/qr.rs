//! QR symbol painter: white background, quiet zone, one square per dark
//! module.

use super::canvas::{BLACK, Canvas, PixelBuffer, WHITE};
use crate::config::{QR_MODULE_SIZE, QR_QUIET_ZONE_MODULES, RenderOptions};
use crate::models::QrCode;

/// Pixel geometry of a rendered QR symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrLayout {
    pub module_size: u32,
    pub quiet_zone: u32,
    pub side: u32,
}

impl QrLayout {
    pub fn new(modules: usize, options: &RenderOptions) -> Self {
        let module_size = options.scale(QR_MODULE_SIZE);
        let quiet_zone = QR_QUIET_ZONE_MODULES * module_size;
        Self {
            module_size,
            quiet_zone,
            side: quiet_zone * 2 + modules as u32 * module_size,
        }
    }
}

/// Paint `qr` into a new square pixel buffer
pub fn render_qr(qr: &QrCode, options: &RenderOptions) -> PixelBuffer {
    let size = qr.size();
    let layout = QrLayout::new(size, options);
    let mut canvas = Canvas::new(layout.side, layout.side, WHITE);
    let module = layout.module_size as i64;
    let origin = layout.quiet_zone as i64;

    for y in 0..size {
        for x in 0..size {
            if qr.is_dark(x, y) {
                canvas.fill_rect(
                    origin + x as i64 * module,
                    origin + y as i64 * module,
                    module,
                    module,
                    BLACK,
                );
            }
        }
    }
    canvas.into_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::qr_encoder::QrEncoder;
    use crate::models::ECLevel;

    #[test]
    fn test_dimensions_scale_with_dpr() {
        let qr = QrEncoder::encode("123456", ECLevel::M).unwrap();
        for dpr in 1..=4 {
            let options = RenderOptions::new(dpr, ECLevel::M);
            let buffer = render_qr(&qr, &options);
            let expected = 2 * 4 * 4 * dpr + 21 * 4 * dpr;
            assert_eq!(buffer.width, expected);
            assert_eq!(buffer.height, expected);
            assert_eq!(buffer.pixels.len(), (expected * expected) as usize);
        }
    }

    #[test]
    fn test_modules_map_to_pixels() {
        let qr = QrEncoder::encode("0", ECLevel::L).unwrap();
        let options = RenderOptions::new(2, ECLevel::L);
        let buffer = render_qr(&qr, &options);
        let layout = QrLayout::new(qr.size(), &options);
        // quiet zone is white
        assert_eq!(buffer.pixel(0, 0), Some(WHITE));
        assert_eq!(buffer.pixel(layout.quiet_zone - 1, layout.quiet_zone), Some(WHITE));
        for y in 0..qr.size() {
            for x in 0..qr.size() {
                let px = layout.quiet_zone + x as u32 * layout.module_size + 1;
                let py = layout.quiet_zone + y as u32 * layout.module_size + 1;
                let expected = if qr.is_dark(x, y) { BLACK } else { WHITE };
                assert_eq!(buffer.pixel(px, py), Some(expected));
            }
        }
    }
}
