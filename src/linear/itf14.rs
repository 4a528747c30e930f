use super::digits_with_check;
use crate::config::{BAR_HEIGHT, HORIZONTAL_QUIET_ZONE_MODULES, RenderOptions, VERTICAL_QUIET_ZONE};
use crate::error::Result;
use crate::render::canvas::{BLACK, Canvas, PixelBuffer, WHITE};

const SYMBOLOGY: &str = "ITF-14";
const DATA_LEN: usize = 13;

/// Narrow bar width in pixels at dpr 1
const NARROW_BAR: u32 = 4;
/// Narrow space width in pixels at dpr 1
const NARROW_SPACE: u32 = 6;

/// Interleaved 2 of 5 widths per digit, `W` = wide
const WIDTHS: [&[u8; 5]; 10] = [
    b"nnWWn", b"WnnnW", b"nWnnW", b"WWnnn", b"nnWnW", b"WnWnn", b"nWWnn", b"nnnWW", b"WnnWn",
    b"nWnWn",
];

/// Width multiplier of one element
fn element_units(width: u8) -> u32 {
    if width == b'W' { 2 } else { 1 }
}

/// One bar or space, in narrow units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub bar: bool,
    pub units: u32,
}

/// Start, digit pairs (first digit on bars, second on spaces), stop
pub fn elements(digits: &[u8]) -> Vec<Element> {
    let bar = |units| Element { bar: true, units };
    let space = |units| Element { bar: false, units };

    let mut out = vec![bar(1), space(1), bar(1), space(1)];
    for pair in digits.chunks_exact(2) {
        let bars = WIDTHS[pair[0] as usize];
        let spaces = WIDTHS[pair[1] as usize];
        for (&b, &s) in bars.iter().zip(spaces.iter()) {
            out.push(bar(element_units(b)));
            out.push(space(element_units(s)));
        }
    }
    out.extend([bar(2), space(1), bar(1)]);
    out
}

/// Validate `data` and return the 14 digits, check digit last
pub fn digits(data: &str) -> Result<Vec<u8>> {
    digits_with_check(data, SYMBOLOGY, DATA_LEN, "13 or 14")
}

/// Render an ITF-14 symbol. Accepts 13 digits, or 14 when the last one is
/// a correct check digit.
pub fn render(data: &str, options: &RenderOptions) -> Result<PixelBuffer> {
    let digits = digits(data)?;
    let narrow_bar = options.scale(NARROW_BAR);
    let narrow_space = options.scale(NARROW_SPACE);
    let bar_height = options.scale(BAR_HEIGHT);
    let quiet_x = HORIZONTAL_QUIET_ZONE_MODULES * narrow_space;
    let quiet_y = options.scale(VERTICAL_QUIET_ZONE);

    let elements = elements(&digits);
    let pixel_width = |e: &Element| e.units * if e.bar { narrow_bar } else { narrow_space };
    let content: u32 = elements.iter().map(pixel_width).sum();

    let mut canvas = Canvas::new(content + 2 * quiet_x, bar_height + 2 * quiet_y, WHITE);
    let mut x = quiet_x as i64;
    for element in &elements {
        let w = pixel_width(element) as i64;
        if element.bar {
            canvas.fill_rect(x, quiet_y as i64, w, bar_height as i64, BLACK);
        }
        x += w;
    }
    Ok(canvas.into_buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ECLevel;

    #[test]
    fn test_check_digit_appended() {
        assert_eq!(
            digits("1540014128876").unwrap(),
            vec![1, 5, 4, 0, 0, 1, 4, 1, 2, 8, 8, 7, 6, 3]
        );
        assert!(digits("15400141288763").is_ok());
        assert!(digits("15400141288764").is_err());
    }

    #[test]
    fn test_element_layout() {
        let digits = digits("1540014128876").unwrap();
        let elements = elements(&digits);
        // 4 start + 7 pairs * 10 + 3 stop
        assert_eq!(elements.len(), 77);
        // every digit has exactly two wide elements
        let wide_bars = elements[4..74].iter().filter(|e| e.bar && e.units == 2).count();
        let wide_spaces = elements[4..74].iter().filter(|e| !e.bar && e.units == 2).count();
        assert_eq!(wide_bars, 14);
        assert_eq!(wide_spaces, 14);
        // first pair "15": bars from 1 (WnnnW), spaces from 5 (WnWnn)
        let first: Vec<u32> = elements[4..14].iter().map(|e| e.units).collect();
        assert_eq!(first, vec![2, 2, 1, 1, 1, 2, 1, 1, 2, 1]);
    }

    #[test]
    fn test_render_dimensions() {
        for dpr in [1, 3] {
            let options = RenderOptions::new(dpr, ECLevel::M);
            let buffer = render("1540014128876", &options).unwrap();
            let n_bar = 4 * dpr;
            let n_space = 6 * dpr;
            let content = (2 * n_bar + 2 * n_space)
                + 7 * (2 * 2 * n_bar + 3 * n_bar)
                + 7 * (2 * 2 * n_space + 3 * n_space)
                + (2 * n_bar + n_space + n_bar);
            assert_eq!(buffer.width, content + 2 * 10 * n_space);
            assert_eq!(buffer.height, 160 * dpr + 60 * dpr);
            // first start bar sits right after the quiet zone
            assert_eq!(buffer.pixel(10 * n_space, 30 * dpr), Some(BLACK));
            assert_eq!(buffer.pixel(10 * n_space - 1, 30 * dpr), Some(WHITE));
        }
    }
}
