//! Static QR capacity table (ISO/IEC 18004, Model 2): data codeword counts
//! and Reed-Solomon block layout for every (version, EC level) pair.

use crate::models::{ECLevel, Version};

/// Upper bound on data codewords (version 40-L)
pub const MAX_DATA_CODEWORDS: usize = 2956;
/// Upper bound on total codewords (version 40)
pub const MAX_TOTAL_CODEWORDS: usize = 3706;
/// Upper bound on Reed-Solomon blocks (version 40-H)
pub const MAX_BLOCKS: usize = 81;
/// Upper bound on EC codewords per block
pub const MAX_EC_CODEWORDS_PER_BLOCK: usize = 30;

/// One group of equally sized Reed-Solomon blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    /// Number of blocks in the group
    pub blocks: usize,
    /// Total codewords per block (c)
    pub codewords_per_block: usize,
    /// Data codewords per block (k)
    pub data_per_block: usize,
}

impl BlockGroup {
    const fn new(blocks: usize, codewords_per_block: usize, data_per_block: usize) -> Self {
        Self {
            blocks,
            codewords_per_block,
            data_per_block,
        }
    }

    /// EC codewords per block (c - k)
    pub fn ec_per_block(&self) -> usize {
        self.codewords_per_block - self.data_per_block
    }
}

/// Shape of a single block: data length and EC length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec {
    pub data_len: usize,
    pub ec_len: usize,
}

/// Capacity row for one (version, EC level)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityEntry {
    version: u8,
    pub ec_level: ECLevel,
    /// Data codewords available for the bitstream
    pub data_codewords: usize,
    pub group1: BlockGroup,
    /// Second group of blocks, one codeword longer, when the layout has one
    pub group2: Option<BlockGroup>,
}

impl CapacityEntry {
    pub fn version(&self) -> Version {
        Version::new(self.version).unwrap_or(Version::MIN)
    }

    /// Data capacity in bits
    pub fn data_bits(&self) -> usize {
        self.data_codewords * 8
    }

    pub fn block_count(&self) -> usize {
        self.group1.blocks + self.group2.map_or(0, |g| g.blocks)
    }

    /// Data + EC codewords over all blocks
    pub fn total_codewords(&self) -> usize {
        self.groups()
            .map(|g| g.blocks * g.codewords_per_block)
            .sum()
    }

    /// Group 1 then group 2 (if present)
    pub fn groups(&self) -> impl Iterator<Item = &BlockGroup> {
        std::iter::once(&self.group1).chain(self.group2.as_ref())
    }

    /// Every block in transmission order: all of group 1, then group 2
    pub fn blocks(&self) -> impl Iterator<Item = BlockSpec> + '_ {
        self.groups().flat_map(|g| {
            std::iter::repeat_n(
                BlockSpec {
                    data_len: g.data_per_block,
                    ec_len: g.ec_per_block(),
                },
                g.blocks,
            )
        })
    }
}

const fn row(
    version: u8,
    ec_level: ECLevel,
    data_codewords: usize,
    group1: BlockGroup,
    group2: Option<BlockGroup>,
) -> CapacityEntry {
    CapacityEntry {
        version,
        ec_level,
        data_codewords,
        group1,
        group2,
    }
}

/// Ordered by version, then L, M, Q, H
static VERSION_CAPACITIES: [CapacityEntry; 160] = [
    row(1, ECLevel::L, 19, BlockGroup::new(1, 26, 19), None),
    row(1, ECLevel::M, 16, BlockGroup::new(1, 26, 16), None),
    row(1, ECLevel::Q, 13, BlockGroup::new(1, 26, 13), None),
    row(1, ECLevel::H, 9, BlockGroup::new(1, 26, 9), None),
    row(2, ECLevel::L, 34, BlockGroup::new(1, 44, 34), None),
    row(2, ECLevel::M, 28, BlockGroup::new(1, 44, 28), None),
    row(2, ECLevel::Q, 22, BlockGroup::new(1, 44, 22), None),
    row(2, ECLevel::H, 16, BlockGroup::new(1, 44, 16), None),
    row(3, ECLevel::L, 55, BlockGroup::new(1, 70, 55), None),
    row(3, ECLevel::M, 44, BlockGroup::new(1, 70, 44), None),
    row(3, ECLevel::Q, 34, BlockGroup::new(2, 35, 17), None),
    row(3, ECLevel::H, 26, BlockGroup::new(2, 35, 13), None),
    row(4, ECLevel::L, 80, BlockGroup::new(1, 100, 80), None),
    row(4, ECLevel::M, 64, BlockGroup::new(2, 50, 32), None),
    row(4, ECLevel::Q, 48, BlockGroup::new(2, 50, 24), None),
    row(4, ECLevel::H, 36, BlockGroup::new(4, 25, 9), None),
    row(5, ECLevel::L, 108, BlockGroup::new(1, 134, 108), None),
    row(5, ECLevel::M, 86, BlockGroup::new(2, 67, 43), None),
    row(5, ECLevel::Q, 62, BlockGroup::new(2, 33, 15), Some(BlockGroup::new(2, 34, 16))),
    row(5, ECLevel::H, 46, BlockGroup::new(2, 33, 11), Some(BlockGroup::new(2, 34, 12))),
    row(6, ECLevel::L, 136, BlockGroup::new(2, 86, 68), None),
    row(6, ECLevel::M, 108, BlockGroup::new(4, 43, 27), None),
    row(6, ECLevel::Q, 76, BlockGroup::new(4, 43, 19), None),
    row(6, ECLevel::H, 60, BlockGroup::new(4, 43, 15), None),
    row(7, ECLevel::L, 156, BlockGroup::new(2, 98, 78), None),
    row(7, ECLevel::M, 124, BlockGroup::new(4, 49, 31), None),
    row(7, ECLevel::Q, 88, BlockGroup::new(2, 32, 14), Some(BlockGroup::new(4, 33, 15))),
    row(7, ECLevel::H, 66, BlockGroup::new(4, 39, 13), Some(BlockGroup::new(1, 40, 14))),
    row(8, ECLevel::L, 194, BlockGroup::new(2, 121, 97), None),
    row(8, ECLevel::M, 154, BlockGroup::new(2, 60, 38), Some(BlockGroup::new(2, 61, 39))),
    row(8, ECLevel::Q, 110, BlockGroup::new(4, 40, 18), Some(BlockGroup::new(2, 41, 19))),
    row(8, ECLevel::H, 86, BlockGroup::new(4, 40, 14), Some(BlockGroup::new(2, 41, 15))),
    row(9, ECLevel::L, 232, BlockGroup::new(2, 146, 116), None),
    row(9, ECLevel::M, 182, BlockGroup::new(3, 58, 36), Some(BlockGroup::new(2, 59, 37))),
    row(9, ECLevel::Q, 132, BlockGroup::new(4, 36, 16), Some(BlockGroup::new(4, 37, 17))),
    row(9, ECLevel::H, 100, BlockGroup::new(4, 36, 12), Some(BlockGroup::new(4, 37, 13))),
    row(10, ECLevel::L, 274, BlockGroup::new(2, 86, 68), Some(BlockGroup::new(2, 87, 69))),
    row(10, ECLevel::M, 216, BlockGroup::new(4, 69, 43), Some(BlockGroup::new(1, 70, 44))),
    row(10, ECLevel::Q, 154, BlockGroup::new(6, 43, 19), Some(BlockGroup::new(2, 44, 20))),
    row(10, ECLevel::H, 122, BlockGroup::new(6, 43, 15), Some(BlockGroup::new(2, 44, 16))),
    row(11, ECLevel::L, 324, BlockGroup::new(4, 101, 81), None),
    row(11, ECLevel::M, 254, BlockGroup::new(1, 80, 50), Some(BlockGroup::new(4, 81, 51))),
    row(11, ECLevel::Q, 180, BlockGroup::new(4, 50, 22), Some(BlockGroup::new(4, 51, 23))),
    row(11, ECLevel::H, 140, BlockGroup::new(3, 36, 12), Some(BlockGroup::new(8, 37, 13))),
    row(12, ECLevel::L, 370, BlockGroup::new(2, 116, 92), Some(BlockGroup::new(2, 117, 93))),
    row(12, ECLevel::M, 290, BlockGroup::new(6, 58, 36), Some(BlockGroup::new(2, 59, 37))),
    row(12, ECLevel::Q, 206, BlockGroup::new(4, 46, 20), Some(BlockGroup::new(6, 47, 21))),
    row(12, ECLevel::H, 158, BlockGroup::new(7, 42, 14), Some(BlockGroup::new(4, 43, 15))),
    row(13, ECLevel::L, 428, BlockGroup::new(4, 133, 107), None),
    row(13, ECLevel::M, 334, BlockGroup::new(8, 59, 37), Some(BlockGroup::new(1, 60, 38))),
    row(13, ECLevel::Q, 244, BlockGroup::new(8, 44, 20), Some(BlockGroup::new(4, 45, 21))),
    row(13, ECLevel::H, 180, BlockGroup::new(12, 33, 11), Some(BlockGroup::new(4, 34, 12))),
    row(14, ECLevel::L, 461, BlockGroup::new(3, 145, 115), Some(BlockGroup::new(1, 146, 116))),
    row(14, ECLevel::M, 365, BlockGroup::new(4, 64, 40), Some(BlockGroup::new(5, 65, 41))),
    row(14, ECLevel::Q, 261, BlockGroup::new(11, 36, 16), Some(BlockGroup::new(5, 37, 17))),
    row(14, ECLevel::H, 197, BlockGroup::new(11, 36, 12), Some(BlockGroup::new(5, 37, 13))),
    row(15, ECLevel::L, 523, BlockGroup::new(5, 109, 87), Some(BlockGroup::new(1, 110, 88))),
    row(15, ECLevel::M, 415, BlockGroup::new(5, 65, 41), Some(BlockGroup::new(5, 66, 42))),
    row(15, ECLevel::Q, 295, BlockGroup::new(5, 54, 24), Some(BlockGroup::new(7, 55, 25))),
    row(15, ECLevel::H, 223, BlockGroup::new(11, 36, 12), Some(BlockGroup::new(7, 37, 13))),
    row(16, ECLevel::L, 589, BlockGroup::new(5, 122, 98), Some(BlockGroup::new(1, 123, 99))),
    row(16, ECLevel::M, 453, BlockGroup::new(7, 73, 45), Some(BlockGroup::new(3, 74, 46))),
    row(16, ECLevel::Q, 325, BlockGroup::new(15, 43, 19), Some(BlockGroup::new(2, 44, 20))),
    row(16, ECLevel::H, 253, BlockGroup::new(3, 45, 15), Some(BlockGroup::new(13, 46, 16))),
    row(17, ECLevel::L, 647, BlockGroup::new(1, 135, 107), Some(BlockGroup::new(5, 136, 108))),
    row(17, ECLevel::M, 507, BlockGroup::new(10, 74, 46), Some(BlockGroup::new(1, 75, 47))),
    row(17, ECLevel::Q, 367, BlockGroup::new(1, 50, 22), Some(BlockGroup::new(15, 51, 23))),
    row(17, ECLevel::H, 283, BlockGroup::new(2, 42, 14), Some(BlockGroup::new(17, 43, 15))),
    row(18, ECLevel::L, 721, BlockGroup::new(5, 150, 120), Some(BlockGroup::new(1, 151, 121))),
    row(18, ECLevel::M, 563, BlockGroup::new(9, 69, 43), Some(BlockGroup::new(4, 70, 44))),
    row(18, ECLevel::Q, 397, BlockGroup::new(17, 50, 22), Some(BlockGroup::new(1, 51, 23))),
    row(18, ECLevel::H, 313, BlockGroup::new(2, 42, 14), Some(BlockGroup::new(19, 43, 15))),
    row(19, ECLevel::L, 795, BlockGroup::new(3, 141, 113), Some(BlockGroup::new(4, 142, 114))),
    row(19, ECLevel::M, 627, BlockGroup::new(3, 70, 44), Some(BlockGroup::new(11, 71, 45))),
    row(19, ECLevel::Q, 445, BlockGroup::new(17, 47, 21), Some(BlockGroup::new(4, 48, 22))),
    row(19, ECLevel::H, 341, BlockGroup::new(9, 39, 13), Some(BlockGroup::new(16, 40, 14))),
    row(20, ECLevel::L, 861, BlockGroup::new(3, 135, 107), Some(BlockGroup::new(5, 136, 108))),
    row(20, ECLevel::M, 669, BlockGroup::new(3, 67, 41), Some(BlockGroup::new(13, 68, 42))),
    row(20, ECLevel::Q, 485, BlockGroup::new(15, 54, 24), Some(BlockGroup::new(5, 55, 25))),
    row(20, ECLevel::H, 385, BlockGroup::new(15, 43, 15), Some(BlockGroup::new(10, 44, 16))),
    row(21, ECLevel::L, 932, BlockGroup::new(4, 144, 116), Some(BlockGroup::new(4, 145, 117))),
    row(21, ECLevel::M, 757, BlockGroup::new(17, 68, 42), Some(BlockGroup::new(1, 69, 43))),
    row(21, ECLevel::Q, 512, BlockGroup::new(17, 50, 22), Some(BlockGroup::new(6, 51, 23))),
    row(21, ECLevel::H, 406, BlockGroup::new(19, 46, 16), Some(BlockGroup::new(6, 47, 17))),
    row(22, ECLevel::L, 1006, BlockGroup::new(2, 139, 111), Some(BlockGroup::new(7, 140, 112))),
    row(22, ECLevel::M, 782, BlockGroup::new(17, 74, 46), None),
    row(22, ECLevel::Q, 568, BlockGroup::new(7, 54, 24), Some(BlockGroup::new(16, 55, 25))),
    row(22, ECLevel::H, 442, BlockGroup::new(34, 37, 13), None),
    row(23, ECLevel::L, 1094, BlockGroup::new(4, 151, 121), Some(BlockGroup::new(5, 152, 122))),
    row(23, ECLevel::M, 860, BlockGroup::new(4, 75, 47), Some(BlockGroup::new(14, 76, 48))),
    row(23, ECLevel::Q, 614, BlockGroup::new(11, 54, 24), Some(BlockGroup::new(16, 55, 25))),
    row(23, ECLevel::H, 464, BlockGroup::new(16, 45, 15), Some(BlockGroup::new(14, 46, 16))),
    row(24, ECLevel::L, 1174, BlockGroup::new(6, 147, 117), Some(BlockGroup::new(4, 148, 118))),
    row(24, ECLevel::M, 914, BlockGroup::new(6, 73, 45), Some(BlockGroup::new(14, 74, 46))),
    row(24, ECLevel::Q, 664, BlockGroup::new(11, 54, 24), Some(BlockGroup::new(16, 55, 25))),
    row(24, ECLevel::H, 514, BlockGroup::new(30, 46, 16), Some(BlockGroup::new(2, 47, 17))),
    row(25, ECLevel::L, 1276, BlockGroup::new(8, 132, 106), Some(BlockGroup::new(4, 133, 107))),
    row(25, ECLevel::M, 1000, BlockGroup::new(8, 75, 47), Some(BlockGroup::new(13, 76, 48))),
    row(25, ECLevel::Q, 718, BlockGroup::new(7, 54, 24), Some(BlockGroup::new(22, 55, 25))),
    row(25, ECLevel::H, 538, BlockGroup::new(22, 45, 15), Some(BlockGroup::new(13, 46, 16))),
    row(26, ECLevel::L, 1370, BlockGroup::new(10, 142, 114), Some(BlockGroup::new(2, 143, 115))),
    row(26, ECLevel::M, 1062, BlockGroup::new(19, 74, 46), Some(BlockGroup::new(4, 75, 47))),
    row(26, ECLevel::Q, 754, BlockGroup::new(28, 50, 22), Some(BlockGroup::new(6, 51, 23))),
    row(26, ECLevel::H, 596, BlockGroup::new(33, 46, 16), Some(BlockGroup::new(4, 47, 17))),
    row(27, ECLevel::L, 1468, BlockGroup::new(8, 152, 122), Some(BlockGroup::new(4, 153, 123))),
    row(27, ECLevel::M, 1128, BlockGroup::new(22, 73, 45), Some(BlockGroup::new(3, 74, 46))),
    row(27, ECLevel::Q, 808, BlockGroup::new(8, 53, 23), Some(BlockGroup::new(26, 54, 24))),
    row(27, ECLevel::H, 628, BlockGroup::new(12, 45, 15), Some(BlockGroup::new(28, 46, 16))),
    row(28, ECLevel::L, 1531, BlockGroup::new(3, 147, 117), Some(BlockGroup::new(10, 148, 118))),
    row(28, ECLevel::M, 1193, BlockGroup::new(3, 73, 45), Some(BlockGroup::new(23, 74, 46))),
    row(28, ECLevel::Q, 871, BlockGroup::new(4, 54, 24), Some(BlockGroup::new(31, 55, 25))),
    row(28, ECLevel::H, 661, BlockGroup::new(11, 45, 15), Some(BlockGroup::new(31, 46, 16))),
    row(29, ECLevel::L, 1631, BlockGroup::new(7, 146, 116), Some(BlockGroup::new(7, 147, 117))),
    row(29, ECLevel::M, 1267, BlockGroup::new(21, 73, 45), Some(BlockGroup::new(7, 74, 46))),
    row(29, ECLevel::Q, 911, BlockGroup::new(1, 53, 23), Some(BlockGroup::new(37, 54, 24))),
    row(29, ECLevel::H, 701, BlockGroup::new(19, 45, 15), Some(BlockGroup::new(26, 46, 16))),
    row(30, ECLevel::L, 1735, BlockGroup::new(5, 145, 115), Some(BlockGroup::new(10, 146, 116))),
    row(30, ECLevel::M, 1373, BlockGroup::new(19, 75, 47), Some(BlockGroup::new(10, 76, 48))),
    row(30, ECLevel::Q, 985, BlockGroup::new(15, 54, 24), Some(BlockGroup::new(25, 55, 25))),
    row(30, ECLevel::H, 745, BlockGroup::new(23, 45, 15), Some(BlockGroup::new(25, 46, 16))),
    row(31, ECLevel::L, 1843, BlockGroup::new(13, 145, 115), Some(BlockGroup::new(3, 146, 116))),
    row(31, ECLevel::M, 1455, BlockGroup::new(2, 74, 46), Some(BlockGroup::new(29, 75, 47))),
    row(31, ECLevel::Q, 1033, BlockGroup::new(42, 54, 24), Some(BlockGroup::new(1, 55, 25))),
    row(31, ECLevel::H, 793, BlockGroup::new(23, 45, 15), Some(BlockGroup::new(28, 46, 16))),
    row(32, ECLevel::L, 1955, BlockGroup::new(17, 145, 115), None),
    row(32, ECLevel::M, 1541, BlockGroup::new(10, 74, 46), Some(BlockGroup::new(23, 75, 47))),
    row(32, ECLevel::Q, 1115, BlockGroup::new(10, 54, 24), Some(BlockGroup::new(35, 55, 25))),
    row(32, ECLevel::H, 845, BlockGroup::new(19, 45, 15), Some(BlockGroup::new(35, 46, 16))),
    row(33, ECLevel::L, 2071, BlockGroup::new(17, 145, 115), Some(BlockGroup::new(1, 146, 116))),
    row(33, ECLevel::M, 1631, BlockGroup::new(14, 74, 46), Some(BlockGroup::new(21, 75, 47))),
    row(33, ECLevel::Q, 1171, BlockGroup::new(29, 54, 24), Some(BlockGroup::new(19, 55, 25))),
    row(33, ECLevel::H, 901, BlockGroup::new(11, 45, 15), Some(BlockGroup::new(46, 46, 16))),
    row(34, ECLevel::L, 2191, BlockGroup::new(13, 145, 115), Some(BlockGroup::new(6, 146, 116))),
    row(34, ECLevel::M, 1725, BlockGroup::new(14, 74, 46), Some(BlockGroup::new(23, 75, 47))),
    row(34, ECLevel::Q, 1231, BlockGroup::new(44, 54, 24), Some(BlockGroup::new(7, 55, 25))),
    row(34, ECLevel::H, 961, BlockGroup::new(59, 46, 16), Some(BlockGroup::new(1, 47, 17))),
    row(35, ECLevel::L, 2306, BlockGroup::new(12, 151, 121), Some(BlockGroup::new(7, 152, 122))),
    row(35, ECLevel::M, 1812, BlockGroup::new(12, 75, 47), Some(BlockGroup::new(26, 76, 48))),
    row(35, ECLevel::Q, 1286, BlockGroup::new(39, 54, 24), Some(BlockGroup::new(14, 55, 25))),
    row(35, ECLevel::H, 986, BlockGroup::new(22, 45, 15), Some(BlockGroup::new(41, 46, 16))),
    row(36, ECLevel::L, 2434, BlockGroup::new(6, 151, 121), Some(BlockGroup::new(14, 152, 122))),
    row(36, ECLevel::M, 1914, BlockGroup::new(6, 75, 47), Some(BlockGroup::new(34, 76, 48))),
    row(36, ECLevel::Q, 1354, BlockGroup::new(46, 54, 24), Some(BlockGroup::new(10, 55, 25))),
    row(36, ECLevel::H, 1054, BlockGroup::new(2, 45, 15), Some(BlockGroup::new(64, 46, 16))),
    row(37, ECLevel::L, 2566, BlockGroup::new(17, 152, 122), Some(BlockGroup::new(4, 153, 123))),
    row(37, ECLevel::M, 1992, BlockGroup::new(29, 74, 46), Some(BlockGroup::new(14, 75, 47))),
    row(37, ECLevel::Q, 1426, BlockGroup::new(49, 54, 24), Some(BlockGroup::new(10, 55, 25))),
    row(37, ECLevel::H, 1096, BlockGroup::new(24, 45, 15), Some(BlockGroup::new(46, 46, 16))),
    row(38, ECLevel::L, 2702, BlockGroup::new(4, 152, 122), Some(BlockGroup::new(18, 153, 123))),
    row(38, ECLevel::M, 2102, BlockGroup::new(13, 74, 46), Some(BlockGroup::new(32, 75, 47))),
    row(38, ECLevel::Q, 1502, BlockGroup::new(48, 54, 24), Some(BlockGroup::new(14, 55, 25))),
    row(38, ECLevel::H, 1142, BlockGroup::new(42, 45, 15), Some(BlockGroup::new(32, 46, 16))),
    row(39, ECLevel::L, 2812, BlockGroup::new(20, 147, 117), Some(BlockGroup::new(4, 148, 118))),
    row(39, ECLevel::M, 2216, BlockGroup::new(40, 75, 47), Some(BlockGroup::new(7, 76, 48))),
    row(39, ECLevel::Q, 1582, BlockGroup::new(43, 54, 24), Some(BlockGroup::new(22, 55, 25))),
    row(39, ECLevel::H, 1222, BlockGroup::new(10, 45, 15), Some(BlockGroup::new(67, 46, 16))),
    row(40, ECLevel::L, 2956, BlockGroup::new(19, 148, 118), Some(BlockGroup::new(6, 149, 119))),
    row(40, ECLevel::M, 2334, BlockGroup::new(18, 75, 47), Some(BlockGroup::new(31, 76, 48))),
    row(40, ECLevel::Q, 1666, BlockGroup::new(34, 54, 24), Some(BlockGroup::new(34, 55, 25))),
    row(40, ECLevel::H, 1276, BlockGroup::new(20, 45, 15), Some(BlockGroup::new(61, 46, 16))),
];

/// Look up the capacity row for a version and level
pub fn lookup(version: Version, ec_level: ECLevel) -> Option<&'static CapacityEntry> {
    let level = ECLevel::ALL.iter().position(|&l| l == ec_level)?;
    let entry = VERSION_CAPACITIES.get((version.number() as usize - 1) * 4 + level)?;
    (entry.version == version.number() && entry.ec_level == ec_level).then_some(entry)
}

/// All rows for one level in ascending version order
pub fn entries_for(ec_level: ECLevel) -> impl Iterator<Item = &'static CapacityEntry> {
    VERSION_CAPACITIES
        .iter()
        .filter(move |entry| entry.ec_level == ec_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_mask::FunctionMask;

    fn entry(version: u8, level: ECLevel) -> &'static CapacityEntry {
        lookup(Version::new(version).unwrap(), level).unwrap()
    }

    #[test]
    fn test_lookup() {
        let e = entry(1, ECLevel::M);
        assert_eq!(e.data_codewords, 16);
        assert_eq!(e.group1, BlockGroup::new(1, 26, 16));
        assert!(e.group2.is_none());

        let e = entry(5, ECLevel::Q);
        assert_eq!(e.data_codewords, 62);
        assert_eq!(e.group2, Some(BlockGroup::new(2, 34, 16)));
        assert_eq!(e.block_count(), 4);

        let e = entry(40, ECLevel::H);
        assert_eq!(e.block_count(), MAX_BLOCKS);
        assert_eq!(e.version().number(), 40);
    }

    #[test]
    fn test_table_is_self_consistent() {
        let mut rows = 0;
        for level in ECLevel::ALL {
            let mut prev = 0;
            for (i, e) in entries_for(level).enumerate() {
                rows += 1;
                assert_eq!(e.version as usize, i + 1);
                assert!(e.data_codewords > prev, "capacity must grow with version");
                prev = e.data_codewords;

                let data_sum: usize = e.blocks().map(|b| b.data_len).sum();
                assert_eq!(data_sum, e.data_codewords, "v{} {}", e.version, level);
                assert!(e.data_codewords <= MAX_DATA_CODEWORDS);
                assert!(e.total_codewords() <= MAX_TOTAL_CODEWORDS);
                assert!(e.blocks().all(|b| b.ec_len <= MAX_EC_CODEWORDS_PER_BLOCK));

                if let Some(g2) = e.group2 {
                    assert!(g2.blocks > 0);
                    assert_eq!(g2.data_per_block, e.group1.data_per_block + 1);
                    assert_eq!(g2.ec_per_block(), e.group1.ec_per_block());
                }
            }
        }
        assert_eq!(rows, 160);
    }

    #[test]
    fn test_total_codewords_fill_the_grid() {
        for version in Version::all() {
            let data_modules = FunctionMask::new(version).data_modules_count();
            for level in ECLevel::ALL {
                let e = lookup(version, level).unwrap();
                assert_eq!(e.total_codewords(), data_modules / 8, "v{version} {level}");
            }
        }
    }
}
