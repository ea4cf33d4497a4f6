//! Field masking shared by the encoder and the colour codec.
//!
//! Inputs are signed and unbounded; each helper keeps only the bits of its
//! field width, so negative values pack as their two's complement pattern.

pub(crate) fn low_byte(value: i64) -> u8 {
    (value & 0xff) as u8
}

pub(crate) fn pack_u16_be(value: i64) -> [u8; 2] {
    [low_byte(value >> 8), low_byte(value)]
}

pub(crate) fn pack_u24_be(value: i64) -> [u8; 3] {
    [low_byte(value >> 16), low_byte(value >> 8), low_byte(value)]
}

/// Renders a value as an unpadded `0x` token (`0x0`, `0xff`, `0x12c`).
pub(crate) fn hex_token(value: impl std::fmt::LowerHex) -> String {
    format!("{:#x}", value)
}
