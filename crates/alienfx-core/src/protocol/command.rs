//! Typed view of the ten commands.
//!
//! Field values are stored as they sit on the wire, so a [`Command`] always
//! re-encodes to the packet it was parsed from.

use serde::Serialize;

use super::colour::{Colour, Rgb};
use super::encoder;
use super::error::PacketError;
use super::layout;
use super::opcode::Opcode;
use super::packet::CommandPacket;
use super::reader::PacketReader;

/// A decoded command with its wire-width fields.
///
/// # Examples
/// ```
/// use alienfx_core::{Command, make_cmd_set_speed};
///
/// let packet = make_cmd_set_speed(300);
/// let command = Command::parse(&packet)?;
/// assert_eq!(command, Command::SetSpeed { speed: 300 });
/// assert_eq!(command.to_packet(), packet);
/// # Ok::<(), alienfx_core::PacketError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    SetMorphColour {
        block: u8,
        zone: u32,
        colour1: Rgb,
        colour2: Rgb,
    },
    SetBlinkColour {
        block: u8,
        zone: u32,
        colour: Rgb,
    },
    SetColour {
        block: u8,
        zone: u32,
        colour: Rgb,
    },
    LoopBlockEnd,
    TransmitExecute,
    GetStatus,
    Reset {
        reset_type: u8,
    },
    SaveNext {
        state: u8,
    },
    Save,
    SetSpeed {
        speed: u16,
    },
}

impl Command {
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::SetMorphColour { .. } => Opcode::SetMorphColour,
            Command::SetBlinkColour { .. } => Opcode::SetBlinkColour,
            Command::SetColour { .. } => Opcode::SetColour,
            Command::LoopBlockEnd => Opcode::LoopBlockEnd,
            Command::TransmitExecute => Opcode::TransmitExecute,
            Command::GetStatus => Opcode::GetStatus,
            Command::Reset { .. } => Opcode::Reset,
            Command::SaveNext { .. } => Opcode::SaveNext,
            Command::Save => Opcode::Save,
            Command::SetSpeed { .. } => Opcode::SetSpeed,
        }
    }

    pub fn parse(packet: &CommandPacket) -> Result<Self, PacketError> {
        let reader = PacketReader::new(packet.as_ref());

        let code = reader.read_opcode()?;
        let opcode = Opcode::from_byte(code).ok_or(PacketError::UnknownOpcode { value: code })?;

        let command = match opcode {
            Opcode::SetMorphColour => Command::SetMorphColour {
                block: reader.read_u8(layout::BLOCK_OFFSET)?,
                zone: reader.read_u24_be(layout::ZONE_RANGE)?,
                colour1: Rgb::from_bytes(reader.read_array(layout::COLOUR_RANGE)?),
                colour2: Rgb::from_bytes(
                    reader.read_array(layout::COLOUR_RANGE.end..layout::COLOUR_PAIR_RANGE.end)?,
                ),
            },
            Opcode::SetBlinkColour => Command::SetBlinkColour {
                block: reader.read_u8(layout::BLOCK_OFFSET)?,
                zone: reader.read_u24_be(layout::ZONE_RANGE)?,
                colour: Rgb::from_bytes(reader.read_array(layout::COLOUR_RANGE)?),
            },
            Opcode::SetColour => Command::SetColour {
                block: reader.read_u8(layout::BLOCK_OFFSET)?,
                zone: reader.read_u24_be(layout::ZONE_RANGE)?,
                colour: Rgb::from_bytes(reader.read_array(layout::COLOUR_RANGE)?),
            },
            Opcode::LoopBlockEnd => Command::LoopBlockEnd,
            Opcode::TransmitExecute => Command::TransmitExecute,
            Opcode::GetStatus => Command::GetStatus,
            Opcode::Reset => Command::Reset {
                reset_type: reader.read_u8(layout::RESET_TYPE_OFFSET)?,
            },
            Opcode::SaveNext => Command::SaveNext {
                state: reader.read_u8(layout::STATE_OFFSET)?,
            },
            Opcode::Save => Command::Save,
            Opcode::SetSpeed => Command::SetSpeed {
                speed: reader.read_u16_be(layout::SPEED_RANGE)?,
            },
        };
        Ok(command)
    }

    pub fn to_packet(&self) -> CommandPacket {
        match *self {
            Command::SetMorphColour {
                block,
                zone,
                colour1,
                colour2,
            } => encoder::make_cmd_set_morph_colour(
                block.into(),
                zone.into(),
                Colour::from(colour1),
                Colour::from(colour2),
            ),
            Command::SetBlinkColour {
                block,
                zone,
                colour,
            } => encoder::make_cmd_set_blink_colour(block.into(), zone.into(), colour.into()),
            Command::SetColour {
                block,
                zone,
                colour,
            } => encoder::make_cmd_set_colour(block.into(), zone.into(), colour.into()),
            Command::LoopBlockEnd => encoder::make_cmd_loop_block_end(),
            Command::TransmitExecute => encoder::make_cmd_transmit_execute(),
            Command::GetStatus => encoder::make_cmd_get_status(),
            Command::Reset { reset_type } => encoder::make_cmd_reset(reset_type.into()),
            Command::SaveNext { state } => encoder::make_cmd_save_next(state.into()),
            Command::Save => encoder::make_cmd_save(),
            Command::SetSpeed { speed } => encoder::make_cmd_set_speed(speed.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::encoder::*;

    #[test]
    fn parse_set_morph_colour() {
        let packet =
            make_cmd_set_morph_colour(4, 0x00_10_00, Colour::new(1, 2, 3), Colour::new(4, 5, 6));
        let command = Command::parse(&packet).unwrap();
        assert_eq!(
            command,
            Command::SetMorphColour {
                block: 4,
                zone: 0x1000,
                colour1: Rgb {
                    red: 1,
                    green: 2,
                    blue: 3
                },
                colour2: Rgb {
                    red: 4,
                    green: 5,
                    blue: 6
                },
            }
        );
    }

    #[test]
    fn parse_holds_masked_values() {
        let packet = make_cmd_set_colour(0x1ff, -1, Colour::new(-1, 256, 0x42));
        let command = Command::parse(&packet).unwrap();
        assert_eq!(
            command,
            Command::SetColour {
                block: 0xff,
                zone: 0xff_ffff,
                colour: Rgb {
                    red: 0xff,
                    green: 0,
                    blue: 0x42
                },
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_opcode() {
        let bytes = [0x02, 0x0a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let packet = CommandPacket::try_from(&bytes[..]).unwrap();
        let err = Command::parse(&packet).unwrap_err();
        assert_eq!(err, PacketError::UnknownOpcode { value: 0x0a });
    }

    #[test]
    fn every_command_re_encodes_to_its_packet() {
        let packets = [
            make_cmd_set_morph_colour(1, 0x020304, Colour::new(9, 8, 7), Colour::new(6, 5, 4)),
            make_cmd_set_blink_colour(2, 0x000001, Colour::new(0xff, 0, 0)),
            make_cmd_set_colour(3, 0x000002, Colour::new(0, 0xff, 0)),
            make_cmd_loop_block_end(),
            make_cmd_transmit_execute(),
            make_cmd_get_status(),
            make_cmd_reset(3),
            make_cmd_save_next(1),
            make_cmd_save(),
            make_cmd_set_speed(0xbeef),
        ];
        for packet in packets {
            let command = Command::parse(&packet).unwrap();
            assert_eq!(command.opcode(), packet.opcode().unwrap());
            assert_eq!(command.to_packet(), packet);
        }
    }

    #[test]
    fn serializes_with_command_tag() {
        let value = serde_json::to_value(Command::Reset { reset_type: 3 }).unwrap();
        assert_eq!(value, serde_json::json!({"command": "RESET", "reset_type": 3}));

        let value = serde_json::to_value(Command::Save).unwrap();
        assert_eq!(value, serde_json::json!({"command": "SAVE"}));
    }
}
