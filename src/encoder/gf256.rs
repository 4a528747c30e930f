//! GF(256) arithmetic for QR Reed-Solomon codes.
//!
//! Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D), primitive element 2.
//! The antilog table is doubled to 512 entries so `mul` never reduces mod 255.

use std::sync::OnceLock;

const PRIMITIVE_POLY: u16 = 0x11D;

/// Log / antilog tables, built once per process
pub struct Gf256Tables {
    log: [u8; 256],
    antilog: [u8; 512],
}

impl Gf256Tables {
    fn build() -> Self {
        let mut log = [0u8; 256];
        let mut antilog = [0u8; 512];
        let mut x: u16 = 1;
        for i in 0..255 {
            antilog[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        for i in 255..512 {
            antilog[i] = antilog[i - 255];
        }
        Self { log, antilog }
    }
}

static TABLES: OnceLock<Gf256Tables> = OnceLock::new();

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// Build the shared tables. Repeated calls are no-ops.
    pub fn init() {
        Self::tables();
    }

    fn tables() -> &'static Gf256Tables {
        TABLES.get_or_init(Gf256Tables::build)
    }

    /// alpha^i, for i in 0..512
    pub fn exp(i: usize) -> u8 {
        Self::tables().antilog[i % 512]
    }

    /// Discrete log of a nonzero element (`log(0)` is defined as 0)
    pub fn log(x: u8) -> u8 {
        Self::tables().log[x as usize]
    }

    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = Self::tables();
        t.antilog[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }
}
