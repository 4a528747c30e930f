//! Fixed-pattern pass of the matrix builder: finder, separator, timing,
//! alignment, version info and the dark module. Format info is written
//! later, once per mask candidate.

use crate::encoder::function_mask::alignment_pattern_centers;
use crate::encoder::version::VersionInfo;
use crate::models::{SymbolMatrix, Version};

/// Grid with every fixed pattern drawn; format and data modules stay unset.
pub fn draw_function_patterns(version: Version) -> SymbolMatrix {
    let size = version.size();
    let mut matrix = SymbolMatrix::new(size);

    // Full timing lines first, the finders overwrite both ends
    for i in 0..size {
        matrix.set(6, i, i % 2 == 0);
        matrix.set(i, 6, i % 2 == 0);
    }

    draw_finder(&mut matrix, 3, 3);
    draw_finder(&mut matrix, size - 4, 3);
    draw_finder(&mut matrix, 3, size - 4);

    for (cx, cy) in alignment_pattern_centers(version) {
        draw_alignment(&mut matrix, cx, cy);
    }

    if version.has_version_info() {
        draw_version_info(&mut matrix, version);
    }

    matrix.set(8, size - 8, true);
    matrix
}

/// 7x7 finder centred on (cx, cy) plus its one-module light separator,
/// clipped to the grid.
fn draw_finder(matrix: &mut SymbolMatrix, cx: usize, cy: usize) {
    let size = matrix.size() as isize;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let x = cx as isize + dx;
            let y = cy as isize + dy;
            if !(0..size).contains(&x) || !(0..size).contains(&y) {
                continue;
            }
            let dist = dx.abs().max(dy.abs());
            matrix.set(x as usize, y as usize, dist != 2 && dist != 4);
        }
    }
}

/// 5x5 alignment pattern: dark ring, light ring, dark centre
fn draw_alignment(matrix: &mut SymbolMatrix, cx: usize, cy: usize) {
    for dy in -2isize..=2 {
        for dx in -2isize..=2 {
            let dark = dx.abs().max(dy.abs()) != 1;
            matrix.set(
                (cx as isize + dx) as usize,
                (cy as isize + dy) as usize,
                dark,
            );
        }
    }
}

/// Both 6x3 version info blocks, bit 0 nearest the finder corner
fn draw_version_info(matrix: &mut SymbolMatrix, version: Version) {
    let size = matrix.size();
    let bits = VersionInfo::encode(version);
    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        let a = size - 11 + i % 3;
        let b = i / 3;
        matrix.set(a, b, dark);
        matrix.set(b, a, dark);
    }
}

/// Read the top-right version block back out
pub fn read_version_info(matrix: &SymbolMatrix) -> u32 {
    let size = matrix.size();
    (0..18)
        .filter(|&i| matrix.is_dark(size - 11 + i % 3, i / 3))
        .fold(0u32, |acc, i| acc | (1 << i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_mask::FunctionMask;
    use crate::models::Module;

    fn version(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_finder_rings() {
        let matrix = draw_function_patterns(version(1));
        // outer ring, light ring, core
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(6, 0));
        assert!(!matrix.is_dark(1, 1));
        assert!(!matrix.is_dark(5, 3));
        assert!(matrix.is_dark(3, 3));
        assert!(matrix.is_dark(2, 4));
        // separator
        assert_eq!(matrix.module(7, 0), Module::Light);
        assert_eq!(matrix.module(0, 7), Module::Light);
        assert_eq!(matrix.module(13, 7), Module::Light);
        assert_eq!(matrix.module(7, 13), Module::Light);
        // top-right and bottom-left finders
        assert!(matrix.is_dark(20, 0));
        assert!(matrix.is_dark(17, 3));
        assert!(matrix.is_dark(0, 20));
    }

    #[test]
    fn test_timing_between_finders() {
        let matrix = draw_function_patterns(version(2));
        for i in 8..17 {
            assert_eq!(matrix.is_dark(i, 6), i % 2 == 0);
            assert_eq!(matrix.is_dark(6, i), i % 2 == 0);
        }
    }

    #[test]
    fn test_alignment_and_dark_module() {
        let matrix = draw_function_patterns(version(2));
        assert!(matrix.is_dark(18, 18));
        assert!(!matrix.is_dark(17, 18));
        assert!(matrix.is_dark(16, 16));
        assert!(matrix.is_dark(8, 25 - 8));
    }

    #[test]
    fn test_only_format_and_data_left_unset() {
        for n in [1, 6, 7, 14, 40] {
            let v = version(n);
            let matrix = draw_function_patterns(v);
            let mask = FunctionMask::new(v);
            let size = v.size();
            let mut unset_function = 0;
            for y in 0..size {
                for x in 0..size {
                    let unset = matrix.module(x, y) == Module::Unset;
                    if mask.is_function(x, y) {
                        if unset {
                            unset_function += 1;
                        }
                    } else {
                        assert!(unset, "data module ({x}, {y}) written in version {n}");
                    }
                }
            }
            // the two 15-bit format strips
            assert_eq!(unset_function, 30);
        }
    }

    #[test]
    fn test_version_info_blocks() {
        let v = version(7);
        let matrix = draw_function_patterns(v);
        let word = read_version_info(&matrix);
        assert_eq!(word, 0x07C94);
        assert!(VersionInfo::check(word));
        let size = v.size();
        for i in 0..18 {
            let a = size - 11 + i % 3;
            let b = i / 3;
            assert_eq!(matrix.is_dark(a, b), matrix.is_dark(b, a));
        }
    }
}
