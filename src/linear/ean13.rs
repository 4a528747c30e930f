use super::{LinearMetrics, digits_with_check};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::render::canvas::{Canvas, PixelBuffer, WHITE};
use crate::render::pattern::draw_pattern;

const SYMBOLOGY: &str = "EAN-13";
const DATA_LEN: usize = 12;
const GROUP_LEN: usize = 6;
/// Total width in modules, guards included
pub const TOTAL_MODULES: u32 = 95;

const START_GUARD: &str = "101";
const CENTER_GUARD: &str = "01010";
const END_GUARD: &str = "101";

/// Guard bars extend this fraction below the data bars
const GUARD_EXTRA_HEIGHT: f32 = 0.15;

/// Left-group L/G choice keyed by the first digit
const PARITY_PATTERNS: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    L,
    G,
    R,
}

/// L, G and R module patterns per digit
const ENCODING_TABLE: [[&str; 3]; 10] = [
    ["0001101", "0100111", "1110010"],
    ["0011001", "0110011", "1100110"],
    ["0010011", "0011011", "1101100"],
    ["0111101", "0100001", "1000010"],
    ["0100011", "0011101", "1011100"],
    ["0110001", "0111001", "1001110"],
    ["0101111", "0000101", "1010000"],
    ["0111011", "0010001", "1000100"],
    ["0110111", "0001001", "1001000"],
    ["0001011", "0010111", "1110100"],
];

fn encode_digit(digit: u8, encoding: Encoding) -> &'static str {
    let column = match encoding {
        Encoding::L => 0,
        Encoding::G => 1,
        Encoding::R => 2,
    };
    ENCODING_TABLE[digit as usize][column]
}

/// One drawable run of modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub pattern: &'static str,
    /// Guards are drawn taller than data bars
    pub guard: bool,
}

impl Segment {
    fn guard(pattern: &'static str) -> Self {
        Self {
            pattern,
            guard: true,
        }
    }

    fn data(pattern: &'static str) -> Self {
        Self {
            pattern,
            guard: false,
        }
    }
}

/// Validate `data` and return the 13 digits, check digit last
pub fn digits(data: &str) -> Result<Vec<u8>> {
    digits_with_check(data, SYMBOLOGY, DATA_LEN, "12 or 13")
}

/// Left to right segments for 13 validated digits. The first digit is
/// implied by the parity of the left group.
pub fn segments(digits: &[u8]) -> Vec<Segment> {
    let parity = PARITY_PATTERNS[digits[0] as usize].as_bytes();
    let mut out = Vec::with_capacity(2 * GROUP_LEN + 3);

    out.push(Segment::guard(START_GUARD));
    for (i, &digit) in digits[1..=GROUP_LEN].iter().enumerate() {
        let encoding = if parity[i] == b'G' {
            Encoding::G
        } else {
            Encoding::L
        };
        out.push(Segment::data(encode_digit(digit, encoding)));
    }
    out.push(Segment::guard(CENTER_GUARD));
    for &digit in &digits[GROUP_LEN + 1..] {
        out.push(Segment::data(encode_digit(digit, Encoding::R)));
    }
    out.push(Segment::guard(END_GUARD));
    out
}

/// Render an EAN-13 symbol. Accepts 12 digits, or 13 when the last one is
/// a correct check digit.
pub fn render(data: &str, options: &RenderOptions) -> Result<PixelBuffer> {
    let digits = digits(data)?;
    let metrics = LinearMetrics::new(options);
    let guard_height =
        metrics.bar_height + (metrics.bar_height as f32 * GUARD_EXTRA_HEIGHT).round() as u32;

    let width = TOTAL_MODULES * metrics.module_width + 2 * metrics.horizontal_quiet_zone;
    let height = guard_height + 2 * metrics.vertical_quiet_zone;
    let mut canvas = Canvas::new(width, height, WHITE);

    let mut x = metrics.horizontal_quiet_zone as i64;
    let y = metrics.vertical_quiet_zone as i64;
    for segment in segments(&digits) {
        let bar_height = if segment.guard {
            guard_height
        } else {
            metrics.bar_height
        };
        x += draw_pattern(
            &mut canvas,
            segment.pattern,
            x,
            y,
            metrics.module_width as i64,
            bar_height as i64,
        );
    }
    Ok(canvas.into_buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ECLevel;
    use crate::render::canvas::BLACK;

    fn modules(data: &str) -> String {
        segments(&digits(data).unwrap())
            .iter()
            .map(|s| s.pattern)
            .collect()
    }

    #[test]
    fn test_known_module_string() {
        // 4006381333931
        let expected = concat!(
            "101",
            "0001101", "0100111", "0101111", "0111101", "0001001", "0110011",
            "01010",
            "1000010", "1000010", "1000010", "1110100", "1000010", "1100110",
            "101"
        );
        assert_eq!(modules("400638133393"), expected);
        assert_eq!(expected.len(), TOTAL_MODULES as usize);
    }

    #[test]
    fn test_all_leading_digits_have_95_modules() {
        for first in 0..10u8 {
            let data = format!("{first}12345678901");
            assert_eq!(modules(&data).len(), 95);
        }
    }

    #[test]
    fn test_render_dimensions_and_guards() {
        let options = RenderOptions::new(1, ECLevel::M);
        let buffer = render("590123412345", &options).unwrap();
        assert_eq!(buffer.width, 95 * 4 + 2 * 40);
        assert_eq!(buffer.height, 184 + 60);

        // start guard runs into the extra height
        let guard_x = 40;
        assert_eq!(buffer.pixel(guard_x, 30 + 170), Some(BLACK));
        // "9" in L code has a bar at its sixth module; data bars stop short
        let data_bar_x = 40 + (3 + 5) * 4;
        assert_eq!(buffer.pixel(data_bar_x, 30 + 150), Some(BLACK));
        assert_eq!(buffer.pixel(data_bar_x, 30 + 170), Some(WHITE));
        assert_eq!(buffer.pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn test_render_rejects_bad_input() {
        let options = RenderOptions::new(1, ECLevel::M);
        assert!(render("5901234123458", &options).is_err());
        assert!(render("59012341234", &options).is_err());
        assert!(render("5901234123457", &options).is_ok());
    }
}
