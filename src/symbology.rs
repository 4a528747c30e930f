use std::fmt;
use std::str::FromStr;

use crate::config::RenderOptions;
use crate::encoder::qr_encoder::QrEncoder;
use crate::error::Result;
use crate::linear::{code128, ean13, itf14};
use crate::render::{PixelBuffer, render_qr};

/// Supported symbologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// QR Code, numeric mode
    Qr,
    /// EAN-13
    Ean13,
    /// ITF-14
    Itf14,
    /// Code 128
    Code128,
}

impl Symbology {
    /// Every symbology
    pub const ALL: [Symbology; 4] = [
        Symbology::Qr,
        Symbology::Ean13,
        Symbology::Itf14,
        Symbology::Code128,
    ];

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Symbology::Qr => "QR Code",
            Symbology::Ean13 => "EAN-13",
            Symbology::Itf14 => "ITF-14",
            Symbology::Code128 => "Code 128",
        }
    }

    /// Longest input accepted, in characters
    pub fn max_input_length(&self) -> usize {
        match self {
            // version 40-L numeric capacity
            Symbology::Qr => 7089,
            Symbology::Ean13 => 13,
            Symbology::Itf14 => 14,
            Symbology::Code128 => code128::MAX_INPUT_LEN,
        }
    }

    /// Encode and rasterise `data`
    pub fn render(&self, data: &str, options: &RenderOptions) -> Result<PixelBuffer> {
        match self {
            Symbology::Qr => {
                let qr = QrEncoder::encode(data, options.ec_level)?;
                Ok(render_qr(&qr, options))
            }
            Symbology::Ean13 => ean13::render(data, options),
            Symbology::Itf14 => itf14::render(data, options),
            Symbology::Code128 => code128::render(data, options),
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = String;

    /// Accepts `qr`, `ean-13`, `itf-14`, `code-128` (case and dashes ignored)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "qr" | "qrcode" => Ok(Symbology::Qr),
            "ean13" => Ok(Symbology::Ean13),
            "itf14" => Ok(Symbology::Itf14),
            "code128" => Ok(Symbology::Code128),
            _ => Err(format!("unknown symbology: {s}")),
        }
    }
}
