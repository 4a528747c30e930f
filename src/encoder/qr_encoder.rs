use crate::debug::debug_enabled;
use crate::encoder::bitstream::{NumericEncoder, validate_digits};
use crate::encoder::builder::draw_function_patterns;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::interleave::interleaved_codewords;
use crate::encoder::mask::select_mask;
use crate::encoder::version::{numeric_content_bits, select_version};
/// Main QR code encoder - wires the pipeline together
use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, QrCode};

/// Numeric-mode QR encoder
pub struct QrEncoder;

impl QrEncoder {
    /// Encode a string of ASCII digits at the requested EC level
    pub fn encode(data: &str, ec_level: ECLevel) -> Result<QrCode> {
        validate_digits(data)?;
        let digits = data.as_bytes();

        let choice = select_version(numeric_content_bits(digits.len()), ec_level).ok_or(
            EncodeError::CapacityExceeded {
                digits: digits.len(),
                ec_level,
            },
        )?;
        let version = choice.version();
        let capacity = choice.capacity;

        if debug_enabled() {
            eprintln!(
                "[DEBUG] QrEncoder: {} digits -> version {} ({}), {} data codewords, {} blocks",
                digits.len(),
                version,
                ec_level,
                capacity.data_codewords,
                capacity.block_count()
            );
        }

        let data_codewords = NumericEncoder::compose(digits, &choice).into_bytes();
        let codewords = interleaved_codewords(&data_codewords, capacity);

        if debug_enabled() {
            eprintln!(
                "[DEBUG] QrEncoder: {} codewords after interleaving",
                codewords.len()
            );
        }

        let function = FunctionMask::new(version);
        let skeleton = draw_function_patterns(version);
        let selection = select_mask(&skeleton, &function, &codewords, ec_level);

        Ok(QrCode {
            version,
            error_correction: ec_level,
            mask_pattern: selection.best.pattern,
            matrix: selection.best.matrix,
            data_codewords,
            codewords,
            penalties: selection.penalties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::builder::read_version_info;
    use crate::encoder::format::FormatInfo;
    use crate::encoder::placement::read_codewords;
    use crate::encoder::version::VersionInfo;
    use crate::models::{Module, Version};

    #[test]
    fn test_encode_small_numeric() {
        let qr = QrEncoder::encode("01234567", ECLevel::M).unwrap();
        assert_eq!(qr.version, Version::MIN);
        assert_eq!(qr.size(), 21);
        assert_eq!(qr.data_codewords.len(), 16);
        assert_eq!(qr.codewords.len(), 26);
        assert_eq!(
            &qr.data_codewords[..6],
            &[0x10, 0x20, 0x0C, 0x56, 0x61, 0x80]
        );
        assert!(qr.matrix.is_complete());
    }

    #[test]
    fn test_every_module_is_written() {
        for (data, level) in [("", ECLevel::L), ("9", ECLevel::H), ("31415926535", ECLevel::Q)] {
            let qr = QrEncoder::encode(data, level).unwrap();
            let size = qr.size();
            for y in 0..size {
                for x in 0..size {
                    assert_ne!(qr.matrix.module(x, y), Module::Unset);
                }
            }
        }
    }

    #[test]
    fn test_codewords_read_back() {
        let data: String = (0..600).map(|i| char::from(b'0' + (i * 7 % 10) as u8)).collect();
        for level in ECLevel::ALL {
            let qr = QrEncoder::encode(&data, level).unwrap();
            let function = FunctionMask::new(qr.version);
            let read = read_codewords(&qr.matrix, &function, qr.mask_pattern, qr.codewords.len());
            assert_eq!(read, qr.codewords);
        }
    }

    #[test]
    fn test_format_and_version_info_written() {
        let data = "1".repeat(300);
        let qr = QrEncoder::encode(&data, ECLevel::H).unwrap();
        assert!(qr.version.has_version_info());
        let info = FormatInfo::read(&qr.matrix).unwrap();
        assert_eq!(info.ec_level, ECLevel::H);
        assert_eq!(info.mask_pattern, qr.mask_pattern);
        assert_eq!(read_version_info(&qr.matrix), VersionInfo::encode(qr.version));
    }

    #[test]
    fn test_penalties_pick_lowest() {
        let qr = QrEncoder::encode("8675309", ECLevel::L).unwrap();
        let min = *qr.penalties.iter().min().unwrap();
        assert_eq!(qr.penalties[qr.mask_pattern.id() as usize], min);
        let first = qr.penalties.iter().position(|&p| p == min).unwrap();
        assert_eq!(qr.mask_pattern.id() as usize, first);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(
            QrEncoder::encode("12a4", ECLevel::M).unwrap_err(),
            EncodeError::InvalidDigit {
                position: 2,
                character: 'a'
            }
        );
        let too_long = "0".repeat(3058);
        assert_eq!(
            QrEncoder::encode(&too_long, ECLevel::H).unwrap_err(),
            EncodeError::CapacityExceeded {
                digits: 3058,
                ec_level: ECLevel::H
            }
        );
    }
}
