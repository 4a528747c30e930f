//! Table-driven linear symbologies: EAN-13, ITF-14 and Code 128.

/// Code 128 with automatic code set selection
pub mod code128;
/// EAN-13 retail barcode
pub mod ean13;
/// ITF-14 shipping container barcode
pub mod itf14;

use crate::config::{
    BAR_HEIGHT, HORIZONTAL_QUIET_ZONE_MODULES, MODULE_WIDTH, RenderOptions, VERTICAL_QUIET_ZONE,
};
use crate::error::{EncodeError, Result};

/// Pixel metrics shared by the linear encoders, already scaled by dpr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearMetrics {
    pub module_width: u32,
    pub bar_height: u32,
    pub vertical_quiet_zone: u32,
    pub horizontal_quiet_zone: u32,
}

impl LinearMetrics {
    pub fn new(options: &RenderOptions) -> Self {
        let module_width = options.scale(MODULE_WIDTH);
        Self {
            module_width,
            bar_height: options.scale(BAR_HEIGHT),
            vertical_quiet_zone: options.scale(VERTICAL_QUIET_ZONE),
            horizontal_quiet_zone: HORIZONTAL_QUIET_ZONE_MODULES * module_width,
        }
    }
}

/// Mod-10 complement check digit. Weights alternate starting with
/// `odd_weight` on the rightmost digit.
pub fn mod10_complement(digits: &[u8], odd_weight: u32, even_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| d as u32 * if i % 2 == 0 { odd_weight } else { even_weight })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Digit values of a fixed-length numeric symbology with optional check
/// digit. The returned vector always ends with the (computed) check digit.
pub(crate) fn digits_with_check(
    data: &str,
    symbology: &'static str,
    data_len: usize,
    expected: &'static str,
) -> Result<Vec<u8>> {
    if let Some((position, character)) = data.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(EncodeError::InvalidDigit {
            position,
            character,
        });
    }
    let mut digits: Vec<u8> = data.bytes().map(|b| b - b'0').collect();
    if digits.len() != data_len && digits.len() != data_len + 1 {
        return Err(EncodeError::InvalidLength {
            symbology,
            expected,
            actual: digits.len(),
        });
    }

    let check = mod10_complement(&digits[..data_len], 3, 1);
    match digits.get(data_len) {
        Some(&supplied) if supplied != check => Err(EncodeError::ChecksumMismatch {
            symbology,
            expected: check,
            actual: supplied,
        }),
        Some(_) => Ok(digits),
        None => {
            digits.push(check);
            Ok(digits)
        }
    }
}
