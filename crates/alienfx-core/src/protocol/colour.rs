//! Colour packing shared by the colour commands.
//!
//! Packing takes integers and yields bytes; unpacking yields hex text for
//! display and is never fed back into packing.

use serde::Serialize;

use super::common::{hex_token, low_byte};

/// Colour as supplied by callers; each channel is truncated to 8 bits on packing.
///
/// # Examples
/// ```
/// use alienfx_core::{Colour, pack_colour};
///
/// assert_eq!(pack_colour(Colour::new(255, 0, 0x180)), [0xff, 0x00, 0x80]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colour {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl Colour {
    pub const fn new(red: i64, green: i64, blue: i64) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb> for Colour {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.red.into(), rgb.green.into(), rgb.blue.into())
    }
}

/// Colour as it sits on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let [red, green, blue] = bytes;
        Self { red, green, blue }
    }
}

impl From<Colour> for Rgb {
    fn from(colour: Colour) -> Self {
        Self::from_bytes(pack_colour(colour))
    }
}

/// Hex text tokens for one colour, in red, green, blue order.
pub type ColourText = (String, String, String);

pub fn pack_colour(colour: Colour) -> [u8; 3] {
    [
        low_byte(colour.red),
        low_byte(colour.green),
        low_byte(colour.blue),
    ]
}

pub fn pack_colour_pair(colour1: Colour, colour2: Colour) -> [u8; 6] {
    let [r1, g1, b1] = pack_colour(colour1);
    let [r2, g2, b2] = pack_colour(colour2);
    [r1, g1, b1, r2, g2, b2]
}

pub fn unpack_colour(bytes: &[u8; 3]) -> ColourText {
    (hex_token(bytes[0]), hex_token(bytes[1]), hex_token(bytes[2]))
}

pub fn unpack_colour_pair(bytes: &[u8; 6]) -> [ColourText; 2] {
    [
        unpack_colour(&[bytes[0], bytes[1], bytes[2]]),
        unpack_colour(&[bytes[3], bytes[4], bytes[5]]),
    ]
}
