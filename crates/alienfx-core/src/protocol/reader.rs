use super::error::PacketError;
use super::layout;

pub struct PacketReader<'a> {
    payload: &'a [u8],
}

impl<'a> PacketReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, PacketError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(PacketError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, PacketError> {
        let [hi, lo] = self.read_array::<2>(range)?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Reads a 24-bit big-endian value into the low bits of a `u32`.
    pub fn read_u24_be(&self, range: std::ops::Range<usize>) -> Result<u32, PacketError> {
        let [hi, mid, lo] = self.read_array::<3>(range)?;
        Ok(u32::from_be_bytes([0, hi, mid, lo]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], PacketError> {
        self.payload.get(range.clone()).ok_or(PacketError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    pub fn read_array<const N: usize>(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<[u8; N], PacketError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| PacketError::TooShort {
            needed: N,
            actual: bytes.len(),
        })
    }

    pub fn read_zone(&self) -> Result<[u8; 3], PacketError> {
        self.read_array(layout::ZONE_RANGE)
    }

    pub fn read_opcode(&self) -> Result<u8, PacketError> {
        self.read_u8(layout::OPCODE_OFFSET)
    }
}
