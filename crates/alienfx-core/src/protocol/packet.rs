use serde::Serialize;

use super::error::PacketError;
use super::layout;
use super::opcode::Opcode;

/// One 12-byte command packet, immutable once built.
///
/// # Examples
/// ```
/// use alienfx_core::{CommandPacket, Opcode};
///
/// let bytes = [0x02, 0x06, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
/// let packet = CommandPacket::try_from(&bytes[..])?;
/// assert_eq!(packet.opcode(), Some(Opcode::GetStatus));
/// assert_eq!(packet.to_hex(), "02 06 00 00 00 00 00 00 00 00 00 00");
/// # Ok::<(), alienfx_core::PacketError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CommandPacket([u8; layout::PACKET_LENGTH]);

impl CommandPacket {
    /// Marker, opcode and a zeroed payload.
    pub(crate) fn template(opcode: Opcode) -> Self {
        let mut bytes = [0u8; layout::PACKET_LENGTH];
        bytes[layout::MARKER_OFFSET] = layout::PACKET_MARKER;
        bytes[layout::OPCODE_OFFSET] = opcode.code();
        Self(bytes)
    }

    pub(crate) fn with_u8(mut self, offset: usize, value: u8) -> Self {
        self.0[offset] = value;
        self
    }

    pub(crate) fn with_bytes(mut self, range: std::ops::Range<usize>, value: &[u8]) -> Self {
        self.0[range].copy_from_slice(value);
        self
    }

    pub fn as_bytes(&self) -> &[u8; layout::PACKET_LENGTH] {
        &self.0
    }

    pub fn opcode_byte(&self) -> u8 {
        self.0[layout::OPCODE_OFFSET]
    }

    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_byte(self.opcode_byte())
    }

    /// Space-separated two-digit hex bytes.
    pub fn to_hex(&self) -> String {
        self.0
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<&[u8]> for CommandPacket {
    type Error = PacketError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; layout::PACKET_LENGTH] =
            bytes.try_into().map_err(|_| PacketError::InvalidLength {
                actual: bytes.len(),
            })?;
        let marker = bytes[layout::MARKER_OFFSET];
        if marker != layout::PACKET_MARKER {
            return Err(PacketError::InvalidMarker { value: marker });
        }
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for CommandPacket {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
