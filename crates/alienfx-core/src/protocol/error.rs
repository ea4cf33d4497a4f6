use thiserror::Error;

/// Errors returned when a byte sequence is read as a structured command.
///
/// The string decoder never surfaces these; it renders the same conditions as
/// `BAD PACKET` / `UNKNOWN COMMAND` text instead.
///
/// # Examples
/// ```
/// use alienfx_core::PacketError;
///
/// let err = PacketError::InvalidLength { actual: 5 };
/// assert!(err.to_string().contains("expected 12 bytes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacketError {
    #[error("invalid packet length: expected 12 bytes, got {actual}")]
    InvalidLength { actual: usize },
    #[error("invalid packet marker: {value:#04x}")]
    InvalidMarker { value: u8 },
    #[error("unknown command opcode: {value:#04x}")]
    UnknownOpcode { value: u8 },
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
