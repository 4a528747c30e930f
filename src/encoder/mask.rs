//! Mask candidate construction and the four penalty rules used to pick one.

use rayon::prelude::*;

use crate::config;
use crate::debug::debug_enabled;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::placement::place_codewords;
use crate::models::{BitMatrix, ECLevel, MaskPattern, SymbolMatrix};

const RUN_MIN: usize = 5;
const RUN_BASE: u32 = 3;
const BLOCK_PENALTY: u32 = 3;
const FINDER_LIKE_PENALTY: u32 = 40;
const BALANCE_PENALTY: u32 = 40;
const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// Per-rule penalty of one matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyBreakdown {
    pub runs: u32,
    pub blocks: u32,
    pub finder_like: u32,
    pub balance: u32,
}

impl PenaltyBreakdown {
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// One evaluated mask: the fully drawn matrix and its score
#[derive(Debug, Clone)]
pub struct MaskCandidate {
    pub pattern: MaskPattern,
    pub matrix: SymbolMatrix,
    pub penalty: PenaltyBreakdown,
}

/// Outcome of the eight-way search
#[derive(Debug, Clone)]
pub struct MaskSelection {
    pub best: MaskCandidate,
    /// Total penalty per mask id
    pub penalties: [u32; 8],
}

/// (number of lines, modules per line) for rows or columns
fn line_shape(values: &BitMatrix, horizontal: bool) -> (usize, usize) {
    if horizontal {
        (values.height(), values.width())
    } else {
        (values.width(), values.height())
    }
}

/// Module `i` of row or column `line`
#[inline]
fn line_module(values: &BitMatrix, horizontal: bool, line: usize, i: usize) -> bool {
    if horizontal {
        values.get(i, line)
    } else {
        values.get(line, i)
    }
}

/// Rule 1: each run of five or more same-colored modules
pub fn penalty_runs(values: &BitMatrix) -> u32 {
    let mut penalty = 0;
    for horizontal in [true, false] {
        let (lines, len) = line_shape(values, horizontal);
        if len == 0 {
            continue;
        }
        for line in 0..lines {
            let mut run_color = line_module(values, horizontal, line, 0);
            let mut run_len = 1;
            for i in 1..len {
                let color = line_module(values, horizontal, line, i);
                if color == run_color {
                    run_len += 1;
                    continue;
                }
                if run_len >= RUN_MIN {
                    penalty += RUN_BASE + (run_len - RUN_MIN) as u32;
                }
                run_color = color;
                run_len = 1;
            }
            if run_len >= RUN_MIN {
                penalty += RUN_BASE + (run_len - RUN_MIN) as u32;
            }
        }
    }
    penalty
}

/// Rule 2: every 2x2 block of one color, overlaps included
pub fn penalty_blocks(values: &BitMatrix) -> u32 {
    let mut penalty = 0;
    for y in 0..values.height().saturating_sub(1) {
        for x in 0..values.width().saturating_sub(1) {
            let color = values.get(x, y);
            if values.get(x + 1, y) == color
                && values.get(x, y + 1) == color
                && values.get(x + 1, y + 1) == color
            {
                penalty += BLOCK_PENALTY;
            }
        }
    }
    penalty
}

/// Rule 3: 1:1:3:1:1 finder look-alikes with four light modules on either
/// side. Out-of-bounds counts as light.
pub fn penalty_finder_like(values: &BitMatrix) -> u32 {
    let light_span = |horizontal: bool, line: usize, from: isize| {
        let (_, len) = line_shape(values, horizontal);
        (from..from + 4).all(|i| {
            i < 0 || i >= len as isize || !line_module(values, horizontal, line, i as usize)
        })
    };

    let mut penalty = 0;
    for horizontal in [true, false] {
        let (lines, len) = line_shape(values, horizontal);
        if len < FINDER_LIKE.len() {
            continue;
        }
        for line in 0..lines {
            for start in 0..=len - FINDER_LIKE.len() {
                let matches = FINDER_LIKE
                    .iter()
                    .enumerate()
                    .all(|(k, &dark)| line_module(values, horizontal, line, start + k) == dark);
                if !matches {
                    continue;
                }
                let start = start as isize;
                if light_span(horizontal, line, start - 4) || light_span(horizontal, line, start + 7)
                {
                    penalty += FINDER_LIKE_PENALTY;
                }
            }
        }
    }
    penalty
}

/// Rule 4: distance of the dark share from 50%, in 5% steps
pub fn penalty_balance(values: &BitMatrix) -> u32 {
    let total = values.width() * values.height();
    if total == 0 {
        return 0;
    }
    let percent = (values.count_ones() * 100 / total) as i64;
    let prev = percent / 5 * 5;
    let next = prev + 5;
    let steps = (prev - 50).abs().min((next - 50).abs()) / 5;
    BALANCE_PENALTY * steps as u32
}

/// All four rules over the finished matrix
pub fn evaluate(matrix: &SymbolMatrix) -> PenaltyBreakdown {
    let values = matrix.values();
    PenaltyBreakdown {
        runs: penalty_runs(values),
        blocks: penalty_blocks(values),
        finder_like: penalty_finder_like(values),
        balance: penalty_balance(values),
    }
}

/// Draw format info and masked codewords onto a copy of the fixed-pattern
/// grid.
pub fn apply_mask(
    skeleton: &SymbolMatrix,
    function: &FunctionMask,
    codewords: &[u8],
    ec_level: ECLevel,
    pattern: MaskPattern,
) -> SymbolMatrix {
    let mut matrix = skeleton.clone();
    FormatInfo::new(ec_level, pattern).draw(&mut matrix);
    place_codewords(&mut matrix, function, codewords, pattern);
    matrix
}

fn build_candidate(
    skeleton: &SymbolMatrix,
    function: &FunctionMask,
    codewords: &[u8],
    ec_level: ECLevel,
    pattern: MaskPattern,
) -> MaskCandidate {
    let matrix = apply_mask(skeleton, function, codewords, ec_level, pattern);
    let penalty = evaluate(&matrix);
    MaskCandidate {
        pattern,
        matrix,
        penalty,
    }
}

/// Score all eight masks and keep the cheapest; the lowest id wins ties.
pub fn select_mask(
    skeleton: &SymbolMatrix,
    function: &FunctionMask,
    codewords: &[u8],
    ec_level: ECLevel,
) -> MaskSelection {
    let build = |&pattern: &MaskPattern| {
        build_candidate(skeleton, function, codewords, ec_level, pattern)
    };
    let mut candidates: Vec<MaskCandidate> = if config::parallel_mask_evaluation() {
        MaskPattern::ALL.par_iter().map(build).collect()
    } else {
        MaskPattern::ALL.iter().map(build).collect()
    };

    let mut penalties = [0u32; 8];
    for candidate in &candidates {
        penalties[candidate.pattern.id() as usize] = candidate.penalty.total();
        if debug_enabled() {
            eprintln!(
                "[DEBUG] mask {}: runs={} blocks={} finder_like={} balance={} total={}",
                candidate.pattern.id(),
                candidate.penalty.runs,
                candidate.penalty.blocks,
                candidate.penalty.finder_like,
                candidate.penalty.balance,
                candidate.penalty.total()
            );
        }
    }

    let best_index = candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| candidate.penalty.total())
        .map_or(0, |(index, _)| index);
    let best = candidates.swap_remove(best_index);

    if debug_enabled() {
        eprintln!(
            "[DEBUG] selected mask {} (penalty {})",
            best.pattern.id(),
            best.penalty.total()
        );
    }

    MaskSelection { best, penalties }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::builder::draw_function_patterns;
    use crate::models::Version;

    fn matrix_from_rows(rows: &[&str]) -> BitMatrix {
        let mut m = BitMatrix::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                m.set(x, y, c == '1');
            }
        }
        m
    }

    #[test]
    fn test_runs() {
        // one light row of 7 (3 + 2) and six alternating rows
        let mut m = BitMatrix::square(7);
        for y in 1..7 {
            for x in 0..7 {
                m.set(x, y, (x + y) % 2 == 0);
            }
        }
        // columns alternate below row 0, so no vertical runs
        assert_eq!(penalty_runs(&m), 5);
    }

    #[test]
    fn test_runs_all_light() {
        // 5x5 all light: 5 rows + 5 columns of length 5
        let m = BitMatrix::square(5);
        assert_eq!(penalty_runs(&m), 10 * 3);
    }

    #[test]
    fn test_blocks_overlap() {
        // 3x3 solid: four overlapping 2x2 blocks
        let m = BitMatrix::square(3);
        assert_eq!(penalty_blocks(&m), 12);
        let checker = matrix_from_rows(&["010", "101", "010"]);
        assert_eq!(penalty_blocks(&checker), 0);
    }

    #[test]
    fn test_finder_like_with_light_margin() {
        let mut m = BitMatrix::square(11);
        // row 0: 1011101 then four light modules
        for (x, &dark) in FINDER_LIKE.iter().enumerate() {
            m.set(x, 0, dark);
        }
        // break up the other rows and all columns
        for y in 1..11 {
            for x in 0..11 {
                m.set(x, y, (x * 7 + y * 3) % 5 == 0);
            }
        }
        let base = penalty_finder_like(&m);
        assert!(base >= FINDER_LIKE_PENALTY);

        // pattern shifted so neither side has four light modules
        let mut crowded = m.clone();
        crowded.set(8, 0, true);
        let row_only = |matrix: &BitMatrix| {
            let mut row = BitMatrix::new(11, 1);
            for x in 0..11 {
                row.set(x, 0, matrix.get(x, 0));
            }
            row
        };
        assert_eq!(penalty_finder_like(&row_only(&m)), 40);
        // left margin is out of bounds, so still counted
        assert_eq!(penalty_finder_like(&row_only(&crowded)), 40);
    }

    #[test]
    fn test_finder_like_needs_one_light_side() {
        let row = matrix_from_rows(&["1101011101011"]);
        assert_eq!(penalty_finder_like(&row), 0);
        let row = matrix_from_rows(&["0000101110100001"]);
        assert_eq!(penalty_finder_like(&row), 40);
    }

    #[test]
    fn test_balance() {
        let mut m = BitMatrix::new(10, 10);
        assert_eq!(penalty_balance(&m), 40 * 9);
        for x in 0..10 {
            for y in 0..5 {
                m.set(x, y, true);
            }
        }
        assert_eq!(penalty_balance(&m), 0);
        // 44% dark: 40 and 45 are the neighbouring steps
        for x in 0..6 {
            m.set(x, 0, false);
        }
        assert_eq!(m.count_ones(), 44);
        assert_eq!(penalty_balance(&m), 40);
    }

    #[test]
    fn test_selection_is_deterministic_and_minimal() {
        let version = Version::new(3).unwrap();
        let function = FunctionMask::new(version);
        let skeleton = draw_function_patterns(version);
        let codewords: Vec<u8> = (0..70u8).map(|i| i.wrapping_mul(91).rotate_left(3)).collect();

        let first = select_mask(&skeleton, &function, &codewords, ECLevel::L);
        let second = select_mask(&skeleton, &function, &codewords, ECLevel::L);
        assert_eq!(first.best.pattern, second.best.pattern);
        assert_eq!(first.penalties, second.penalties);
        assert!(first.best.matrix.is_complete());

        let min = *first.penalties.iter().min().unwrap();
        let lowest_id = first.penalties.iter().position(|&p| p == min).unwrap();
        assert_eq!(first.best.pattern.id() as usize, lowest_id);
        assert_eq!(first.best.penalty.total(), min);

        for pattern in MaskPattern::ALL {
            let matrix = apply_mask(&skeleton, &function, &codewords, ECLevel::L, pattern);
            assert_eq!(evaluate(&matrix).total(), first.penalties[pattern.id() as usize]);
        }
    }
}
