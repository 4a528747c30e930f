/// Block splitting, per-block EC generation and codeword interleaving
use crate::encoder::reed_solomon::GeneratorPolynomial;
use crate::encoder::tables::CapacityEntry;

/// One Reed-Solomon block: a slice of the data stream and its EC codewords
#[derive(Debug, Clone)]
pub struct RsBlock<'a> {
    pub data: &'a [u8],
    pub ec: Vec<u8>,
}

/// Split `data_codewords` into the group 1 / group 2 blocks of `capacity`
/// and compute every block's EC codewords.
pub fn build_blocks<'a>(data_codewords: &'a [u8], capacity: &CapacityEntry) -> Vec<RsBlock<'a>> {
    let mut blocks = Vec::with_capacity(capacity.block_count());
    let mut offset = 0;
    for group in capacity.groups() {
        // Both groups share the EC length, but build per group to stay general
        let generator = GeneratorPolynomial::new(group.ec_per_block());
        for _ in 0..group.blocks {
            let end = (offset + group.data_per_block).min(data_codewords.len());
            let data = &data_codewords[offset..end];
            blocks.push(RsBlock {
                data,
                ec: generator.encode_block(data),
            });
            offset = end;
        }
    }
    blocks
}

/// Column-major read of data codewords then EC codewords across blocks.
/// Shorter blocks drop out once their column range is exhausted.
pub fn interleave(blocks: &[RsBlock<'_>]) -> Vec<u8> {
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ec.len()).sum();
    let mut out = Vec::with_capacity(total);

    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    for col in 0..max_data {
        out.extend(blocks.iter().filter_map(|b| b.data.get(col)));
    }

    let max_ec = blocks.iter().map(|b| b.ec.len()).max().unwrap_or(0);
    for col in 0..max_ec {
        out.extend(blocks.iter().filter_map(|b| b.ec.get(col)));
    }

    debug_assert_eq!(out.len(), total);
    out
}

/// Final codeword sequence for a composed data stream
pub fn interleaved_codewords(data_codewords: &[u8], capacity: &CapacityEntry) -> Vec<u8> {
    interleave(&build_blocks(data_codewords, capacity))
}
