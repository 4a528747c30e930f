use super::BitMatrix;

/// State of one QR module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// Light (white) module
    Light,
    /// Dark (black) module
    Dark,
    /// Nothing written yet
    Unset,
}

/// Square module grid: one plane of values plus one plane recording which
/// cells have been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    values: BitMatrix,
    assigned: BitMatrix,
}

impl SymbolMatrix {
    /// Empty grid with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            values: BitMatrix::square(size),
            assigned: BitMatrix::square(size),
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.values.width()
    }

    /// Module state at column `x`, row `y`
    pub fn module(&self, x: usize, y: usize) -> Module {
        if !self.assigned.get(x, y) {
            Module::Unset
        } else if self.values.get(x, y) {
            Module::Dark
        } else {
            Module::Light
        }
    }

    /// True for dark modules; unset modules read as light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.values.get(x, y)
    }

    /// Write a module
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        self.values.set(x, y, dark);
        self.assigned.set(x, y, true);
    }

    /// Count of dark modules
    pub fn dark_count(&self) -> usize {
        self.values.count_ones()
    }

    /// True once every module has been written
    pub fn is_complete(&self) -> bool {
        let size = self.size();
        self.assigned.count_ones() == size * size
    }

    /// Dark/light plane
    pub fn values(&self) -> &BitMatrix {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_states() {
        let mut matrix = SymbolMatrix::new(21);
        assert_eq!(matrix.module(0, 0), Module::Unset);
        assert!(!matrix.is_dark(0, 0));

        matrix.set(0, 0, true);
        matrix.set(1, 0, false);
        assert_eq!(matrix.module(0, 0), Module::Dark);
        assert_eq!(matrix.module(1, 0), Module::Light);
        assert_eq!(matrix.dark_count(), 1);
        assert!(!matrix.is_complete());

        for y in 0..21 {
            for x in 0..21 {
                matrix.set(x, y, false);
            }
        }
        assert!(matrix.is_complete());
        assert_eq!(matrix.dark_count(), 0);
    }
}
