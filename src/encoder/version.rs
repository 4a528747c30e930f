//! Version selection for numeric-mode content and the 18-bit version info
//! word carried by versions 7-40.

use crate::encoder::tables::{self, CapacityEntry};
use crate::models::{ECLevel, Version};

/// Mode indicator width
pub const MODE_BITS: usize = 4;

/// Character count indicator width for numeric mode
pub fn numeric_cci_bits(version: Version) -> usize {
    match version.number() {
        1..=9 => 10,
        10..=26 => 12,
        _ => 14,
    }
}

/// Bits needed for `len` digits: 10 per full group of three, 7 or 4 for a
/// trailing group of two or one.
pub fn numeric_content_bits(len: usize) -> usize {
    let tail = match len % 3 {
        2 => 7,
        1 => 4,
        _ => 0,
    };
    (len / 3) * 10 + tail
}

/// Selected version and the count indicator width that goes with it
#[derive(Debug, Clone, Copy)]
pub struct VersionChoice {
    pub capacity: &'static CapacityEntry,
    pub cci_bits: usize,
}

impl VersionChoice {
    pub fn version(&self) -> Version {
        self.capacity.version()
    }
}

/// Smallest version at `ec_level` whose data capacity holds mode indicator,
/// count indicator and `content_bits`. `None` when even version 40 is too
/// small.
pub fn select_version(content_bits: usize, ec_level: ECLevel) -> Option<VersionChoice> {
    tables::entries_for(ec_level).find_map(|capacity| {
        let cci_bits = numeric_cci_bits(capacity.version());
        let required = MODE_BITS + cci_bits + content_bits;
        (required <= capacity.data_bits()).then_some(VersionChoice { capacity, cci_bits })
    })
}

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
    const GENERATOR: u32 = 0x1F25;

    /// Version number in the top 6 bits, BCH remainder in the low 12
    pub fn encode(version: Version) -> u32 {
        let data = version.number() as u32;
        let mut rem = data;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * Self::GENERATOR);
        }
        (data << 12) | (rem & 0xFFF)
    }

    /// True when `codeword` is divisible by the generator
    pub fn check(codeword: u32) -> bool {
        let mut remainder = codeword & 0x3FFFF;
        for shift in (12..18).rev() {
            if remainder & (1 << shift) != 0 {
                remainder ^= Self::GENERATOR << (shift - 12);
            }
        }
        remainder == 0
    }
}
