/// Format information: EC level + mask id, BCH(15,5) coded, stored twice
use crate::models::{ECLevel, MaskPattern, SymbolMatrix};

/// Format info is 15 bits (5 data + 10 ECC)
/// Located at fixed positions around the finder patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
    const GENERATOR: u16 = 0x537;
    /// XOR mask applied so the word is never all zero
    const XOR_MASK: u16 = 0x5412;

    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// 15-bit masked format word, bit 14 first
    pub fn bits(&self) -> u16 {
        Self::encode(self.ec_level, self.mask_pattern)
    }

    /// Encode EC level and mask into the masked 15-bit word
    pub fn encode(ec_level: ECLevel, mask_pattern: MaskPattern) -> u16 {
        let data = ((ec_level.format_bits() as u16) << 3) | mask_pattern.id() as u16;
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * Self::GENERATOR);
        }
        ((data << 10) | (rem & 0x3FF)) ^ Self::XOR_MASK
    }

    /// True when the unmasked word is a BCH(15,5) codeword
    pub fn check(codeword: u16) -> bool {
        let mut remainder = (codeword ^ Self::XOR_MASK) & 0x7FFF;
        for shift in (10..15).rev() {
            if remainder & (1 << shift) != 0 {
                remainder ^= Self::GENERATOR << (shift - 10);
            }
        }
        remainder == 0
    }

    /// Nearest valid format word within the 3-bit correction radius
    pub fn decode(codeword: u16) -> Option<Self> {
        let (distance, info) = ECLevel::ALL
            .iter()
            .flat_map(|&ec| MaskPattern::ALL.iter().map(move |&mask| Self::new(ec, mask)))
            .map(|info| ((info.bits() ^ codeword).count_ones(), info))
            .min_by_key(|(distance, _)| *distance)?;
        (distance <= 3).then_some(info)
    }

    /// Read the copy next to the top-left finder back out of a finished matrix
    pub fn read(matrix: &SymbolMatrix) -> Option<Self> {
        let (primary, _) = format_positions(matrix.size());
        let bits = primary
            .iter()
            .enumerate()
            .filter(|&(_, &(x, y))| matrix.is_dark(x, y))
            .fold(0u16, |acc, (i, _)| acc | (1 << i));
        Self::decode(bits)
    }

    /// Write both copies of the format word
    pub fn draw(&self, matrix: &mut SymbolMatrix) {
        let bits = self.bits();
        let (primary, secondary) = format_positions(matrix.size());
        for (i, (&(x1, y1), &(x2, y2))) in primary.iter().zip(secondary.iter()).enumerate() {
            let dark = (bits >> i) & 1 == 1;
            matrix.set(x1, y1, dark);
            matrix.set(x2, y2, dark);
        }
    }
}

/// (x, y) of format bit `i` (bit 0 = least significant) for both copies
pub fn format_positions(size: usize) -> ([(usize, usize); 15], [(usize, usize); 15]) {
    let mut primary = [(0, 0); 15];
    let mut secondary = [(0, 0); 15];

    // Column 8 going down, skipping the timing row, then row 8 going left
    for (i, slot) in primary.iter_mut().enumerate().take(6) {
        *slot = (8, i);
    }
    primary[6] = (8, 7);
    primary[7] = (8, 8);
    primary[8] = (7, 8);
    for (i, slot) in primary.iter_mut().enumerate().skip(9) {
        *slot = (14 - i, 8);
    }

    // Row 8 under the top-right finder, then column 8 beside the bottom-left
    for (i, slot) in secondary.iter_mut().enumerate().take(8) {
        *slot = (size - 1 - i, 8);
    }
    for (i, slot) in secondary.iter_mut().enumerate().skip(8) {
        *slot = (8, size - 15 + i);
    }

    (primary, secondary)
}
