//! QR code encoding modules
//!
//! This module contains the numeric-mode encoding pipeline:
//! - GF(256) arithmetic and Reed-Solomon error correction
//! - Capacity tables and version selection
//! - Bitstream composition and block interleaving
//! - Matrix construction, zigzag placement and mask selection

/// Numeric-mode bitstream composition
pub mod bitstream;
/// Fixed patterns (finder, timing, alignment, version info)
pub mod builder;
/// Format information (EC level + mask id)
pub mod format;
/// Function module mask builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// GF(256) log/antilog tables
pub mod gf256;
/// Reed-Solomon block split and interleaving
pub mod interleave;
/// Mask penalty rules and mask selection
pub mod mask;
/// Zigzag traversal and codeword placement
pub mod placement;
/// Main QR encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction encoder
pub mod reed_solomon;
/// Capacity table (data codewords and block structure per version/level)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;
