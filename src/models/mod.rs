pub mod matrix;
pub mod qr_code;
pub mod symbol;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};
pub use symbol::{Module, SymbolMatrix};
