/// Zigzag traversal of the data region and codeword placement
use crate::encoder::function_mask::FunctionMask;
use crate::models::{MaskPattern, SymbolMatrix};

/// Walks every non-reserved module in placement order: column pairs from
/// the right edge, alternating upward and downward sweeps, right column of
/// the pair before the left one, column 6 skipped.
#[derive(Debug, Clone)]
pub struct ZigZagCursor<'a> {
    function: &'a FunctionMask,
    /// Right-hand column of the current pair
    col: usize,
    /// Steps taken in the current vertical sweep
    step: usize,
    /// 0 = right column, 1 = left column
    side: usize,
    upward: bool,
    finished: bool,
}

impl<'a> ZigZagCursor<'a> {
    pub fn new(function: &'a FunctionMask) -> Self {
        let size = function.size();
        Self {
            function,
            col: size - 1,
            step: 0,
            side: 0,
            upward: true,
            finished: false,
        }
    }

    /// Rewind to the bottom-right corner
    pub fn restart(&mut self) {
        *self = Self::new(self.function);
    }

    fn advance(&mut self) {
        self.side += 1;
        if self.side < 2 {
            return;
        }
        self.side = 0;
        self.step += 1;
        if self.step < self.function.size() {
            return;
        }
        self.step = 0;
        self.upward = !self.upward;
        if self.col <= 1 {
            self.finished = true;
            return;
        }
        self.col -= 2;
        if self.col == 6 {
            self.col = 5;
        }
    }
}

impl Iterator for ZigZagCursor<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.function.size();
        while !self.finished {
            let x = self.col - self.side;
            let y = if self.upward {
                size - 1 - self.step
            } else {
                self.step
            };
            self.advance();
            if !self.function.is_function(x, y) {
                return Some((x, y));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for ZigZagCursor<'_> {}

/// Bit `index` of a codeword stream, most significant bit of each byte first
fn codeword_bit(codewords: &[u8], index: usize) -> bool {
    codewords
        .get(index / 8)
        .is_some_and(|byte| (byte >> (7 - index % 8)) & 1 == 1)
}

/// Write every data module: codeword bits XOR mask, remainder modules past
/// the end of the stream carry the mask value alone.
pub fn place_codewords(
    matrix: &mut SymbolMatrix,
    function: &FunctionMask,
    codewords: &[u8],
    mask: MaskPattern,
) {
    for (index, (x, y)) in ZigZagCursor::new(function).enumerate() {
        let dark = codeword_bit(codewords, index) ^ mask.is_masked(y, x);
        matrix.set(x, y, dark);
    }
}

/// Undo the mask and read `count` codewords back in placement order
pub fn read_codewords(
    matrix: &SymbolMatrix,
    function: &FunctionMask,
    mask: MaskPattern,
    count: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; count];
    for (index, (x, y)) in ZigZagCursor::new(function).take(count * 8).enumerate() {
        if matrix.is_dark(x, y) ^ mask.is_masked(y, x) {
            out[index / 8] |= 0x80 >> (index % 8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::builder::draw_function_patterns;
    use crate::models::{BitMatrix, Version};

    #[test]
    fn test_cursor_starts_bottom_right() {
        let function = FunctionMask::new(Version::MIN);
        let first: Vec<_> = ZigZagCursor::new(&function).take(6).collect();
        assert_eq!(first, vec![(20, 20), (19, 20), (20, 19), (19, 19), (20, 18), (19, 18)]);
    }

    #[test]
    fn test_cursor_turns_at_top() {
        let function = FunctionMask::new(Version::MIN);
        // 12 rows of the rightmost pair are free (rows 9..=20)
        let coords: Vec<_> = ZigZagCursor::new(&function).skip(22).take(4).collect();
        assert_eq!(coords, vec![(20, 9), (19, 9), (18, 9), (17, 9)]);
    }

    #[test]
    fn test_cursor_covers_data_modules_exactly_once() {
        for n in [1, 2, 7, 21, 40] {
            let version = Version::new(n).unwrap();
            let function = FunctionMask::new(version);
            let mut seen = BitMatrix::square(version.size());
            let mut count = 0;
            for (x, y) in ZigZagCursor::new(&function) {
                assert_ne!(x, 6, "timing column visited");
                assert!(!function.is_function(x, y));
                assert!(!seen.get(x, y), "({x}, {y}) visited twice");
                seen.set(x, y, true);
                count += 1;
            }
            assert_eq!(count, function.data_modules_count());
        }
    }

    #[test]
    fn test_cursor_restart() {
        let function = FunctionMask::new(Version::new(3).unwrap());
        let mut cursor = ZigZagCursor::new(&function);
        let first: Vec<_> = cursor.by_ref().take(40).collect();
        cursor.restart();
        let again: Vec<_> = cursor.by_ref().take(40).collect();
        assert_eq!(first, again);
        assert_eq!(cursor.by_ref().count() + 40, function.data_modules_count());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_place_and_read_back() {
        let version = Version::new(2).unwrap();
        let function = FunctionMask::new(version);
        let codewords: Vec<u8> = (0..44u8).map(|i| i.wrapping_mul(37) ^ 0x5A).collect();
        for mask in MaskPattern::ALL {
            let mut matrix = draw_function_patterns(version);
            place_codewords(&mut matrix, &function, &codewords, mask);
            assert_eq!(read_codewords(&matrix, &function, mask, codewords.len()), codewords);
        }
    }

    #[test]
    fn test_remainder_modules_follow_mask() {
        // version 2 has 359 data modules, 7 of them remainder bits
        let version = Version::new(2).unwrap();
        let function = FunctionMask::new(version);
        let mut matrix = draw_function_patterns(version);
        let mask = MaskPattern::Pattern1;
        place_codewords(&mut matrix, &function, &[0u8; 44], mask);
        for (x, y) in ZigZagCursor::new(&function).skip(352) {
            assert_eq!(matrix.is_dark(x, y), mask.is_masked(y, x));
        }
    }
}
