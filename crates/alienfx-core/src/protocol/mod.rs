//! AlienFX command packet codec.
//!
//! The module follows a layered structure:
//! - `layout`: byte offsets and widths (source of truth)
//! - `reader`: bounds-checked byte access
//! - `encoder`: one constructor per command, masking every field
//! - `decoder`: opcode dispatch to text renderers
//! - `command`: typed commands parsed through `reader`
//! - `colour`: colour packing shared by encoder and decoder
//!
//! Everything here is pure; names come from an injected
//! [`Controller`](crate::Controller).

pub mod colour;
pub mod command;
pub(crate) mod common;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod opcode;
pub mod packet;
pub mod reader;

pub use colour::{
    Colour, ColourText, Rgb, pack_colour, pack_colour_pair, unpack_colour, unpack_colour_pair,
};
pub use command::Command;
pub use decoder::decode;
pub use encoder::*;
pub use error::PacketError;
pub use opcode::{Opcode, StatusCode};
pub use packet::CommandPacket;
