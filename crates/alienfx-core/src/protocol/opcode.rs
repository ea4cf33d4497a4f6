use serde::Serialize;

/// Command opcodes carried in byte 1 of every packet.
///
/// The set is closed; any other byte value is an unknown command.
///
/// # Examples
/// ```
/// use alienfx_core::Opcode;
///
/// assert_eq!(Opcode::from_byte(0x0e), Some(Opcode::SetSpeed));
/// assert_eq!(Opcode::SetSpeed.name(), "SET_SPEED");
/// assert_eq!(Opcode::from_byte(0x0a), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Opcode {
    SetMorphColour,
    SetBlinkColour,
    SetColour,
    LoopBlockEnd,
    TransmitExecute,
    GetStatus,
    Reset,
    SaveNext,
    Save,
    SetSpeed,
}

impl Opcode {
    /// Every opcode in wire order.
    pub const ALL: [Opcode; 10] = [
        Opcode::SetMorphColour,
        Opcode::SetBlinkColour,
        Opcode::SetColour,
        Opcode::LoopBlockEnd,
        Opcode::TransmitExecute,
        Opcode::GetStatus,
        Opcode::Reset,
        Opcode::SaveNext,
        Opcode::Save,
        Opcode::SetSpeed,
    ];

    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Opcode::SetMorphColour),
            0x02 => Some(Opcode::SetBlinkColour),
            0x03 => Some(Opcode::SetColour),
            0x04 => Some(Opcode::LoopBlockEnd),
            0x05 => Some(Opcode::TransmitExecute),
            0x06 => Some(Opcode::GetStatus),
            0x07 => Some(Opcode::Reset),
            0x08 => Some(Opcode::SaveNext),
            0x09 => Some(Opcode::Save),
            0x0e => Some(Opcode::SetSpeed),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Opcode::SetMorphColour => 0x01,
            Opcode::SetBlinkColour => 0x02,
            Opcode::SetColour => 0x03,
            Opcode::LoopBlockEnd => 0x04,
            Opcode::TransmitExecute => 0x05,
            Opcode::GetStatus => 0x06,
            Opcode::Reset => 0x07,
            Opcode::SaveNext => 0x08,
            Opcode::Save => 0x09,
            Opcode::SetSpeed => 0x0e,
        }
    }

    /// Name token used in decoded text.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::SetMorphColour => "SET_MORPH_COLOUR",
            Opcode::SetBlinkColour => "SET_BLINK_COLOUR",
            Opcode::SetColour => "SET_COLOUR",
            Opcode::LoopBlockEnd => "LOOP_BLOCK_END",
            Opcode::TransmitExecute => "TRANSMIT_EXECUTE",
            Opcode::GetStatus => "GET_STATUS",
            Opcode::Reset => "RESET",
            Opcode::SaveNext => "SAVE_NEXT",
            Opcode::Save => "SAVE",
            Opcode::SetSpeed => "SET_SPEED",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Status bytes reported by the device in reply to `GET_STATUS`.
///
/// Documented for callers; the codec itself never encodes or decodes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Ready,
    Busy,
    UnknownCommand,
}

impl StatusCode {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x10 => Some(StatusCode::Ready),
            0x11 => Some(StatusCode::Busy),
            0x12 => Some(StatusCode::UnknownCommand),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            StatusCode::Ready => 0x10,
            StatusCode::Busy => 0x11,
            StatusCode::UnknownCommand => 0x12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Ready => "READY",
            StatusCode::Busy => "BUSY",
            StatusCode::UnknownCommand => "UNKNOWN_COMMAND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Opcode, StatusCode};

    #[test]
    fn opcode_codes_round_trip() {
        for opcode in Opcode::ALL {
            assert_eq!(Opcode::from_byte(opcode.code()), Some(opcode));
        }
    }

    #[test]
    fn opcode_gaps_are_unknown() {
        for value in [0x00, 0x0a, 0x0b, 0x0c, 0x0d, 0x0f, 0x10, 0xff] {
            assert_eq!(Opcode::from_byte(value), None, "value {value:#x}");
        }
    }

    #[test]
    fn opcode_serializes_as_wire_name() {
        let value = serde_json::to_value(Opcode::SetMorphColour).unwrap();
        assert_eq!(value, "SET_MORPH_COLOUR");
    }

    #[test]
    fn status_codes() {
        assert_eq!(StatusCode::from_byte(0x10), Some(StatusCode::Ready));
        assert_eq!(StatusCode::from_byte(0x11), Some(StatusCode::Busy));
        assert_eq!(StatusCode::from_byte(0x12), Some(StatusCode::UnknownCommand));
        assert_eq!(StatusCode::from_byte(0x13), None);
        assert_eq!(StatusCode::Busy.code(), 0x11);
        assert_eq!(StatusCode::UnknownCommand.name(), "UNKNOWN_COMMAND");
    }
}
