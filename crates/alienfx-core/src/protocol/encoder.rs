//! Packet constructors, one per command.
//!
//! Each starts from `[0x02, opcode, 0, ...]` and overwrites only its own
//! fields. Values wider than their field are truncated, never rejected.

use super::colour::{Colour, pack_colour, pack_colour_pair};
use super::common::{low_byte, pack_u16_be, pack_u24_be};
use super::layout;
use super::opcode::Opcode;
use super::packet::CommandPacket;

fn encoded(packet: CommandPacket) -> CommandPacket {
    tracing::trace!(packet = %packet.to_hex(), "encoded command packet");
    packet
}

fn colour_target(opcode: Opcode, block: i64, zone: i64) -> CommandPacket {
    CommandPacket::template(opcode)
        .with_u8(layout::BLOCK_OFFSET, low_byte(block))
        .with_bytes(layout::ZONE_RANGE, &pack_u24_be(zone))
}

/// Blend `zone` of `block` from `colour1` to `colour2`.
pub fn make_cmd_set_morph_colour(
    block: i64,
    zone: i64,
    colour1: Colour,
    colour2: Colour,
) -> CommandPacket {
    let colours = pack_colour_pair(colour1, colour2);
    encoded(
        colour_target(Opcode::SetMorphColour, block, zone)
            .with_bytes(layout::COLOUR_PAIR_RANGE, &colours),
    )
}

/// Blink `zone` of `block` in `colour`.
pub fn make_cmd_set_blink_colour(block: i64, zone: i64, colour: Colour) -> CommandPacket {
    encoded(
        colour_target(Opcode::SetBlinkColour, block, zone)
            .with_bytes(layout::COLOUR_RANGE, &pack_colour(colour)),
    )
}

/// Set `zone` of `block` to a steady `colour`.
///
/// # Examples
/// ```
/// use alienfx_core::{Colour, make_cmd_set_colour};
///
/// let packet = make_cmd_set_colour(1, 0x010203, Colour::new(255, 0, 128));
/// assert_eq!(packet.as_bytes(), &[0x02, 0x03, 1, 1, 2, 3, 255, 0, 128, 0, 0, 0]);
/// ```
pub fn make_cmd_set_colour(block: i64, zone: i64, colour: Colour) -> CommandPacket {
    encoded(
        colour_target(Opcode::SetColour, block, zone)
            .with_bytes(layout::COLOUR_RANGE, &pack_colour(colour)),
    )
}

pub fn make_cmd_loop_block_end() -> CommandPacket {
    encoded(CommandPacket::template(Opcode::LoopBlockEnd))
}

pub fn make_cmd_transmit_execute() -> CommandPacket {
    encoded(CommandPacket::template(Opcode::TransmitExecute))
}

pub fn make_cmd_get_status() -> CommandPacket {
    encoded(CommandPacket::template(Opcode::GetStatus))
}

pub fn make_cmd_reset(reset_type: i64) -> CommandPacket {
    encoded(
        CommandPacket::template(Opcode::Reset)
            .with_u8(layout::RESET_TYPE_OFFSET, low_byte(reset_type)),
    )
}

/// Store the commands that follow under `state`.
pub fn make_cmd_save_next(state: i64) -> CommandPacket {
    encoded(
        CommandPacket::template(Opcode::SaveNext).with_u8(layout::STATE_OFFSET, low_byte(state)),
    )
}

pub fn make_cmd_save() -> CommandPacket {
    encoded(CommandPacket::template(Opcode::Save))
}

/// Speed is stored as a 16-bit big-endian value.
pub fn make_cmd_set_speed(speed: i64) -> CommandPacket {
    encoded(
        CommandPacket::template(Opcode::SetSpeed)
            .with_bytes(layout::SPEED_RANGE, &pack_u16_be(speed)),
    )
}
