//! Render options and process-wide defaults read from the environment.

use std::sync::OnceLock;

use crate::models::ECLevel;

/// Smallest device pixel ratio
pub const MIN_DPR: u32 = 1;
/// Largest device pixel ratio
pub const MAX_DPR: u32 = 4;

/// Linear barcode module width in pixels at dpr 1
pub const MODULE_WIDTH: u32 = 4;
/// Linear barcode bar height in pixels at dpr 1
pub const BAR_HEIGHT: u32 = 160;
/// Space above and below linear barcodes in pixels at dpr 1
pub const VERTICAL_QUIET_ZONE: u32 = 30;
/// Space left and right of linear barcodes, in modules
pub const HORIZONTAL_QUIET_ZONE_MODULES: u32 = 10;
/// QR quiet zone on every side, in modules
pub const QR_QUIET_ZONE_MODULES: u32 = 4;
/// QR module side in pixels at dpr 1
pub const QR_MODULE_SIZE: u32 = 4;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static DEFAULT_DPR: OnceLock<u32> = OnceLock::new();

/// `QR_DPR`, clamped to 1..=4
pub fn default_dpr() -> u32 {
    *DEFAULT_DPR.get_or_init(|| parse_env_u32("QR_DPR", 1).clamp(MIN_DPR, MAX_DPR))
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// `QR_EC_LEVEL` letter, `M` when unset or unparseable
pub fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| {
        std::env::var("QR_EC_LEVEL")
            .ok()
            .and_then(|v| ECLevel::from_letter(&v))
            .unwrap_or(ECLevel::M)
    })
}

static PARALLEL_MASK_EVALUATION: OnceLock<bool> = OnceLock::new();

/// `QR_PARALLEL_MASKS=0` scores the eight masks sequentially
pub(crate) fn parallel_mask_evaluation() -> bool {
    *PARALLEL_MASK_EVALUATION.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

/// Per-request rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Device pixel ratio, always within 1..=4
    pub dpr: u32,
    /// QR error correction level
    pub ec_level: ECLevel,
}

impl RenderOptions {
    pub fn new(dpr: u32, ec_level: ECLevel) -> Self {
        Self {
            dpr: dpr.clamp(MIN_DPR, MAX_DPR),
            ec_level,
        }
    }

    /// Replace the pixel ratio, clamped to 1..=4
    pub fn with_dpr(mut self, dpr: u32) -> Self {
        self.dpr = dpr.clamp(MIN_DPR, MAX_DPR);
        self
    }

    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Scale a dpr-1 pixel length
    pub fn scale(&self, px: u32) -> u32 {
        px * self.dpr
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(default_dpr(), default_ec_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpr_is_clamped() {
        assert_eq!(RenderOptions::new(0, ECLevel::L).dpr, 1);
        assert_eq!(RenderOptions::new(9, ECLevel::L).dpr, 4);
        let options = RenderOptions::new(2, ECLevel::H).with_dpr(3);
        assert_eq!(options.dpr, 3);
        assert_eq!(options.ec_level, ECLevel::H);
        assert_eq!(options.scale(QR_MODULE_SIZE), 12);
        assert_eq!(options.with_dpr(100).dpr, MAX_DPR);
    }

    #[test]
    fn test_defaults_are_in_range() {
        let options = RenderOptions::default();
        assert!((MIN_DPR..=MAX_DPR).contains(&options.dpr));
        assert_eq!(options.ec_level, default_ec_level());
    }
}
