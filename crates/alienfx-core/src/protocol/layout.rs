pub const PACKET_LENGTH: usize = 12;
pub const PACKET_MARKER: u8 = 0x02;

pub const MARKER_OFFSET: usize = 0;
pub const OPCODE_OFFSET: usize = 1;

pub const BLOCK_OFFSET: usize = 2;
pub const ZONE_RANGE: std::ops::Range<usize> = 3..6;
pub const COLOUR_RANGE: std::ops::Range<usize> = 6..9;
pub const COLOUR_PAIR_RANGE: std::ops::Range<usize> = 6..12;

pub const RESET_TYPE_OFFSET: usize = 2;
pub const STATE_OFFSET: usize = 2;
pub const SPEED_RANGE: std::ops::Range<usize> = 2..4;

pub const ZONE_MASK: u32 = 0x00ff_ffff;
