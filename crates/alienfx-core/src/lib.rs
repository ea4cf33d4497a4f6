//! Codec for the 12-byte AlienFX lighting controller command protocol.
//!
//! Encoding turns a semantic command into the exact bytes the controller
//! expects; decoding turns raw bytes back into a diagnostic line for logs.
//! Both directions are pure functions. Encoding masks every field to its
//! wire width instead of rejecting out-of-range input, and decoding always
//! produces text, even for packets of the wrong length or with an unknown
//! opcode.
//!
//! Wire format:
//! - byte 0: packet marker `0x02`
//! - byte 1: opcode (see [`Opcode`])
//! - bytes 2..12: command payload, zero padded
//!
//! Zone, reset-type and state names are resolved by an injected
//! [`Controller`]; [`NameTable`] is a JSON-configured implementation.
//!
//! # Examples
//! ```
//! use alienfx_core::{Colour, NameTable, decode, make_cmd_set_colour};
//!
//! let names = NameTable::new().with_zone(0x010203, "Logo");
//! let packet = make_cmd_set_colour(1, 0x010203, Colour::new(255, 0, 128));
//! assert_eq!(
//!     decode(packet.as_ref(), &names),
//!     "SET_COLOUR: BLOCK: 1, ZONE: Logo, (0xff,0x0,0x80)"
//! );
//! ```

mod controller;
pub mod protocol;

pub use controller::{Controller, NameTable, NamesError};
pub use protocol::layout::{PACKET_LENGTH, PACKET_MARKER};
pub use protocol::{
    Colour, ColourText, Command, CommandPacket, Opcode, PacketError, Rgb, StatusCode, decode,
    make_cmd_get_status, make_cmd_loop_block_end, make_cmd_reset, make_cmd_save,
    make_cmd_save_next, make_cmd_set_blink_colour, make_cmd_set_colour, make_cmd_set_morph_colour,
    make_cmd_set_speed, make_cmd_transmit_execute, pack_colour, pack_colour_pair, unpack_colour,
    unpack_colour_pair,
};
