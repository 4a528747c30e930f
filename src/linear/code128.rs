//! Code 128 with automatic A/B/C code set selection.
//!
//! Caret keywords insert symbols that cannot be typed: `^NUL`..`^US` and
//! `^DEL` for control characters, `^FNC1`..`^FNC4` for function codes.

use super::LinearMetrics;
use crate::config::RenderOptions;
use crate::debug::debug_enabled;
use crate::error::{EncodeError, Result};
use crate::render::canvas::{BLACK, Canvas, PixelBuffer, WHITE};
use crate::render::pattern::draw_pattern;

const SYMBOLOGY: &str = "Code 128";
/// Longest accepted input, in characters
pub const MAX_INPUT_LEN: usize = 255;

const MODULES_PER_SYMBOL: u32 = 11;
const TERMINATION_BAR_MODULES: u32 = 2;
const CHECKSUM_MODULO: u32 = 103;
const CONTROL_OFFSET: u8 = 64;

const CODE_A: u8 = 101;
const CODE_B: u8 = 100;
const CODE_C: u8 = 99;
const FNC1: u8 = 102;
const FNC2: u8 = 97;
const FNC3: u8 = 96;
const FNC4_A: u8 = 101;
const FNC4_B: u8 = 100;
const SHIFT: u8 = 98;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;
const STOP: u8 = 106;

/// Bar/space modules of every symbol value 0..=106
const PATTERN_WIDTHS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100",
    "10001001100", "10011001000", "10011000100", "10001100100", "11001001000",
    "11001000100", "11000100100", "10110011100", "10011011100", "10011001110",
    "10111001100", "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110", "11101001100",
    "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000",
    "10001000110", "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110", "10001101110",
    "10111011000", "10111000110", "10001110110", "11101110110", "11010001110",
    "11000101110", "11011101000", "11011100010", "11011101110", "11101011000",
    "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100",
    "10010110000", "10010000110", "10000101100", "10000100110", "10110010000",
    "10110000100", "10011010000", "10011000010", "10000110100", "10000110010",
    "11000010010", "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100", "10011110100",
    "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110",
    "10111101000", "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110", "11010000100", "11010010000",
    "11010011100", "11000111010",
];

/// Active code set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSet {
    /// Upper case, digits, punctuation and control characters
    A,
    /// Upper and lower case, digits, punctuation
    B,
    /// Digit pairs
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordValue {
    Symbol(u8),
    /// Depends on the code set it lands in
    Fnc4,
}

#[derive(Debug, Clone, Copy)]
struct Keyword {
    key: &'static str,
    value: KeywordValue,
    /// Code set the symbol only exists in, `None` when valid everywhere
    code_set: Option<CodeSet>,
}

const fn control(key: &'static str, value: u8) -> Keyword {
    Keyword {
        key,
        value: KeywordValue::Symbol(value),
        code_set: Some(CodeSet::A),
    }
}

const fn function(key: &'static str, value: KeywordValue) -> Keyword {
    Keyword {
        key,
        value,
        code_set: None,
    }
}

/// Matched in order, first hit wins
static KEYWORDS: [Keyword; 37] = [
    control("NUL", 64),
    control("SOH", 65),
    control("STX", 66),
    control("ETX", 67),
    control("EOT", 68),
    control("ENQ", 69),
    control("ACK", 70),
    control("BEL", 71),
    control("BS", 72),
    control("HT", 73),
    control("LF", 74),
    control("VT", 75),
    control("FF", 76),
    control("CR", 77),
    control("SO", 78),
    control("SI", 79),
    control("DLE", 80),
    control("DC1", 81),
    control("DC2", 82),
    control("DC3", 83),
    control("DC4", 84),
    control("NAK", 85),
    control("SYN", 86),
    control("ETB", 87),
    control("CAN", 88),
    control("EM", 89),
    control("SUB", 90),
    control("ESC", 91),
    control("FS", 92),
    control("GS", 93),
    control("RS", 94),
    control("US", 95),
    Keyword {
        key: "DEL",
        value: KeywordValue::Symbol(95),
        code_set: Some(CodeSet::B),
    },
    function("FNC1", KeywordValue::Symbol(FNC1)),
    function("FNC2", KeywordValue::Symbol(FNC2)),
    function("FNC3", KeywordValue::Symbol(FNC3)),
    function("FNC4", KeywordValue::Fnc4),
];

fn is_control(c: u8) -> bool {
    c <= 31
}

fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Composes symbol values from ASCII input, one step per call.
struct Composer<'a> {
    input: &'a [u8],
    pos: usize,
    code_set: CodeSet,
    symbols: Vec<u8>,
}

impl<'a> Composer<'a> {
    fn new(input: &'a [u8]) -> Self {
        let mut composer = Self {
            input,
            pos: 0,
            code_set: CodeSet::B,
            symbols: Vec::with_capacity(input.len() + 4),
        };
        if composer.digits_ahead(4) {
            composer.switch(CodeSet::C, START_C);
        } else if composer.keyword_at(0).is_some_and(|k| k.code_set == Some(CodeSet::A)) {
            composer.switch(CodeSet::A, START_A);
        } else {
            composer.switch(CodeSet::B, START_B);
        }
        composer
    }

    fn push(&mut self, value: u8) {
        self.symbols.push(value);
    }

    fn switch(&mut self, code_set: CodeSet, symbol: u8) {
        self.push(symbol);
        self.code_set = code_set;
    }

    fn digits_ahead(&self, count: usize) -> bool {
        self.input
            .get(self.pos..self.pos + count)
            .is_some_and(|s| s.iter().all(u8::is_ascii_digit))
    }

    fn keyword_at(&self, pos: usize) -> Option<&'static Keyword> {
        let rest = self.input.get(pos..)?.strip_prefix(b"^")?;
        KEYWORDS.iter().find(|k| rest.starts_with(k.key.as_bytes()))
    }

    fn run(mut self) -> Vec<u8> {
        while self.pos < self.input.len() {
            if self.parse_keyword() {
                continue;
            }
            match self.code_set {
                CodeSet::A => self.step_a(),
                CodeSet::B => self.step_b(),
                CodeSet::C => self.step_c(),
            }
        }
        self.symbols
    }

    fn parse_keyword(&mut self) -> bool {
        let Some(keyword) = self.keyword_at(self.pos) else {
            return false;
        };
        match (keyword.code_set, self.code_set) {
            (Some(CodeSet::A), CodeSet::B | CodeSet::C) => self.switch(CodeSet::A, CODE_A),
            (Some(CodeSet::B), CodeSet::A | CodeSet::C) => self.switch(CodeSet::B, CODE_B),
            // FNC2-4 have no code set C value
            (None, CodeSet::C) if keyword.value != KeywordValue::Symbol(FNC1) => {
                self.switch(CodeSet::B, CODE_B)
            }
            _ => {}
        }
        let value = match (keyword.value, self.code_set) {
            (KeywordValue::Symbol(value), _) => value,
            (KeywordValue::Fnc4, CodeSet::A) => FNC4_A,
            (KeywordValue::Fnc4, _) => FNC4_B,
        };
        self.push(value);
        self.pos += 1 + keyword.key.len();
        true
    }

    fn step_a(&mut self) {
        if self.digits_ahead(4) {
            self.switch(CodeSet::C, CODE_C);
            return;
        }
        let c = self.input[self.pos];
        if is_lower(c) {
            if self.input.get(self.pos + 1).copied().is_some_and(is_lower) {
                self.switch(CodeSet::B, CODE_B);
            } else {
                self.push(SHIFT);
            }
            self.push(c - b' ');
            self.pos += 1;
        } else if (b' '..=b'_').contains(&c) {
            self.push(c - b' ');
            self.pos += 1;
        } else if is_control(c) {
            self.push(c + CONTROL_OFFSET);
            self.pos += 1;
        } else {
            // '`', '{'..DEL only exist in B
            self.switch(CodeSet::B, CODE_B);
        }
    }

    fn step_b(&mut self) {
        if self.digits_ahead(4) {
            self.switch(CodeSet::C, CODE_C);
            return;
        }
        let c = self.input[self.pos];
        if is_control(c) {
            if self.input.get(self.pos + 1).copied().is_some_and(is_control) {
                self.switch(CodeSet::A, CODE_A);
            } else {
                self.push(SHIFT);
            }
            self.push(c + CONTROL_OFFSET);
        } else {
            self.push(c - b' ');
        }
        self.pos += 1;
    }

    fn step_c(&mut self) {
        if !self.digits_ahead(2) {
            self.switch(CodeSet::B, CODE_B);
            return;
        }
        let tens = self.input[self.pos] - b'0';
        let ones = self.input[self.pos + 1] - b'0';
        self.push(tens * 10 + ones);
        self.pos += 2;
    }
}

/// Start symbol plus Σ value·position, mod 103
pub fn checksum(symbols: &[u8]) -> u8 {
    let sum: u32 = symbols
        .iter()
        .enumerate()
        .map(|(i, &v)| v as u32 * (i as u32).max(1))
        .sum();
    (sum % CHECKSUM_MODULO) as u8
}

/// Full symbol sequence: start, data, checksum, stop
pub fn symbols(data: &str) -> Result<Vec<u8>> {
    if let Some((position, character)) = data.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(EncodeError::UnsupportedCharacter {
            position,
            character,
        });
    }
    if data.len() > MAX_INPUT_LEN {
        return Err(EncodeError::InvalidLength {
            symbology: SYMBOLOGY,
            expected: "at most 255",
            actual: data.len(),
        });
    }

    let mut symbols = Composer::new(data.as_bytes()).run();
    symbols.push(checksum(&symbols));
    symbols.push(STOP);

    if debug_enabled() {
        eprintln!("[DEBUG] Code 128 symbols: {:?}", symbols);
    }
    Ok(symbols)
}

/// Render a Code 128 symbol
pub fn render(data: &str, options: &RenderOptions) -> Result<PixelBuffer> {
    let symbols = symbols(data)?;
    let metrics = LinearMetrics::new(options);
    let total_modules = symbols.len() as u32 * MODULES_PER_SYMBOL + TERMINATION_BAR_MODULES;

    let width = total_modules * metrics.module_width + 2 * metrics.horizontal_quiet_zone;
    let height = metrics.bar_height + 2 * metrics.vertical_quiet_zone;
    let mut canvas = Canvas::new(width, height, WHITE);

    let module = metrics.module_width as i64;
    let bar_height = metrics.bar_height as i64;
    let mut x = metrics.horizontal_quiet_zone as i64;
    let y = metrics.vertical_quiet_zone as i64;
    for &value in &symbols {
        x += draw_pattern(&mut canvas, PATTERN_WIDTHS[value as usize], x, y, module, bar_height);
    }
    canvas.fill_rect(x, y, TERMINATION_BAR_MODULES as i64 * module, bar_height, BLACK);
    Ok(canvas.into_buffer())
}
