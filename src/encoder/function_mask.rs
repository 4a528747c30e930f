use crate::models::{BitMatrix, Version};

/// Alignment pattern center coordinates, indexed by version - 1
const ALIGNMENT_POSITIONS: [&[usize]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    ALIGNMENT_POSITIONS[version.number() as usize - 1]
}

/// Alignment pattern centers as (x, y), skipping the three that would sit
/// on a finder pattern.
pub fn alignment_pattern_centers(version: Version) -> Vec<(usize, usize)> {
    let align = alignment_pattern_positions(version);
    let size = version.size();
    let mut centers = Vec::with_capacity(align.len() * align.len());
    for &cy in align {
        for &cx in align {
            let in_tl = cx <= 8 && cy <= 8;
            let in_tr = cx >= size - 9 && cy <= 8;
            let in_bl = cx <= 8 && cy >= size - 9;
            if !(in_tl || in_tr || in_bl) {
                centers.push((cx, cy));
            }
        }
    }
    centers
}

/// Function module mask for a specific QR version.
/// true = reserved (function module), false = data module.
#[derive(Debug, Clone)]
pub struct FunctionMask {
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut mask = BitMatrix::square(size);

        // Finder patterns + separators (8x8 areas)
        Self::mark_finder_area(&mut mask, 0, 0);
        Self::mark_finder_area(&mut mask, size - 7, 0);
        Self::mark_finder_area(&mut mask, 0, size - 7);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            mask.set(6, i, true);
            mask.set(i, 6, true);
        }

        for (cx, cy) in alignment_pattern_centers(version) {
            Self::mark_rect(&mut mask, cx - 2, cy - 2, 5, 5);
        }

        // Format info areas
        for i in 0..9 {
            if i != 6 {
                mask.set(8, i, true);
                mask.set(i, 8, true);
            }
        }
        for i in 0..8 {
            mask.set(size - 1 - i, 8, true);
            mask.set(8, size - 1 - i, true);
        }

        // Dark module
        mask.set(8, size - 8, true);

        if version.has_version_info() {
            Self::mark_rect(&mut mask, size - 11, 0, 3, 6);
            Self::mark_rect(&mut mask, 0, size - 11, 6, 3);
        }

        Self { mask, version }
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }

    fn mark_finder_area(mask: &mut BitMatrix, x: usize, y: usize) {
        let size = mask.width();
        let start_x = x.saturating_sub(1);
        let start_y = y.saturating_sub(1);
        let end_x = (x + 8).min(size);
        let end_y = (y + 8).min(size);
        Self::mark_rect(mask, start_x, start_y, end_x - start_x, end_y - start_y);
    }

    fn mark_rect(mask: &mut BitMatrix, x: usize, y: usize, width: usize, height: usize) {
        for yy in y..y + height {
            for xx in x..x + width {
                mask.set(xx, yy, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_alignment_positions_follow_spacing_rule() {
        for version in Version::all().skip(1) {
            let pos = alignment_pattern_positions(version);
            let n = version.number() as usize;
            assert_eq!(pos.len(), n / 7 + 2);
            assert_eq!(pos[0], 6);
            assert_eq!(*pos.last().unwrap(), version.size() - 7);
            // Interior spacing is uniform and even
            let steps: Vec<usize> = pos[1..].windows(2).map(|w| w[1] - w[0]).collect();
            assert!(steps.windows(2).all(|w| w[0] == w[1]), "v{version}");
            assert!(steps.iter().all(|s| s % 2 == 0));
        }
        assert!(alignment_pattern_positions(v(1)).is_empty());
    }

    #[test]
    fn test_alignment_centers_skip_finders() {
        assert!(alignment_pattern_centers(v(1)).is_empty());
        assert_eq!(alignment_pattern_centers(v(2)), vec![(18, 18)]);
        // 3x3 grid minus three finder corners
        assert_eq!(alignment_pattern_centers(v(7)).len(), 6);
        assert_eq!(alignment_pattern_centers(v(40)).len(), 46);
    }

    #[test]
    fn test_data_module_counts() {
        assert_eq!(FunctionMask::new(v(1)).data_modules_count(), 208);
        assert_eq!(FunctionMask::new(v(2)).data_modules_count(), 359);
        assert_eq!(FunctionMask::new(v(7)).data_modules_count(), 1568);
        assert_eq!(FunctionMask::new(v(40)).data_modules_count(), 29648);
    }

    #[test]
    fn test_reserved_regions() {
        let func = FunctionMask::new(v(7));
        let size = func.size();
        assert_eq!(size, 45);
        assert!(func.is_function(0, 0));
        assert!(func.is_function(7, 7));
        assert!(func.is_function(size - 8, 7));
        assert!(func.is_function(8, size - 8));
        assert!(func.is_function(size - 11, 5));
        assert!(func.is_function(5, size - 11));
        assert!(func.is_function(6, 20));
        assert!(func.is_function(22, 22));
        assert!(!func.is_function(9, 9));
        assert!(!func.is_function(size - 1, size - 1));
        assert!(!FunctionMask::new(v(6)).is_function(30, 0));
    }
}
