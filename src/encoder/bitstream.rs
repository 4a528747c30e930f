/// Numeric-mode bitstream composition
use crate::encoder::version::{MODE_BITS, VersionChoice};
use crate::error::{EncodeError, Result};

const NUMERIC_MODE_INDICATOR: u32 = 0b0001;
const MAX_TERMINATOR_BITS: usize = 4;
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Append-only bit sequence packed MSB-first into bytes
#[derive(Debug, Clone, Default)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            len: 0,
        }
    }

    /// Number of bits written so far (the cursor)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            if self.len % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Read back one bit
    pub fn bit(&self, index: usize) -> bool {
        index < self.len && (self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reject anything outside '0'..='9'
pub fn validate_digits(data: &str) -> Result<()> {
    match data.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(EncodeError::InvalidDigit {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Composes the padded data codewords for a digit string.
pub struct NumericEncoder;

impl NumericEncoder {
    /// Mode indicator, count, digit groups, terminator, bit padding and pad
    /// codewords, filling exactly `choice.capacity.data_codewords` bytes.
    ///
    /// `digits` must already be validated and fit `choice`.
    pub fn compose(digits: &[u8], choice: &VersionChoice) -> BitStream {
        let target_codewords = choice.capacity.data_codewords;
        let capacity_bits = target_codewords * 8;
        let mut stream = BitStream::with_capacity(target_codewords);

        stream.append_bits(NUMERIC_MODE_INDICATOR, MODE_BITS);
        stream.append_bits(digits.len() as u32, choice.cci_bits);
        Self::append_digit_groups(&mut stream, digits);

        let terminator = capacity_bits.saturating_sub(stream.len()).min(MAX_TERMINATOR_BITS);
        stream.append_bits(0, terminator);

        let padding = (8 - stream.len() % 8) % 8;
        stream.append_bits(0, padding);

        let pad_needed = target_codewords.saturating_sub(stream.len() / 8);
        for pad in PAD_CODEWORDS.iter().cycle().take(pad_needed) {
            stream.append_bits(*pad as u32, 8);
        }

        debug_assert_eq!(stream.len(), capacity_bits);
        stream
    }

    fn append_digit_groups(stream: &mut BitStream, digits: &[u8]) {
        for group in digits.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            let bits = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            stream.append_bits(value, bits);
        }
    }
}
