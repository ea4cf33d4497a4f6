//! Human-readable rendering of raw packets for logs and diagnostics.
//!
//! Dispatch goes through [`handler`], an exhaustive match over [`Opcode`], so
//! adding an opcode without a renderer fails to compile. Decoding never fails:
//! wrong lengths and unknown opcodes are rendered as text.

use super::colour::{unpack_colour, unpack_colour_pair};
use super::common::hex_token;
use super::error::PacketError;
use super::layout;
use super::opcode::Opcode;
use super::reader::PacketReader;
use crate::controller::Controller;

/// Renders one packet whose opcode is already known.
///
/// `decode` only dispatches 12-byte packets, so reads through the reader stay
/// in bounds; an error still renders as `BAD PACKET` rather than panicking.
pub(crate) type Handler = fn(&PacketReader<'_>, &dyn Controller) -> Result<String, PacketError>;

pub(crate) fn handler(opcode: Opcode) -> Handler {
    match opcode {
        Opcode::SetMorphColour => render_set_morph_colour,
        Opcode::SetBlinkColour => render_set_blink_colour,
        Opcode::SetColour => render_set_colour,
        Opcode::LoopBlockEnd => render_loop_block_end,
        Opcode::TransmitExecute => render_transmit_execute,
        Opcode::GetStatus => render_get_status,
        Opcode::Reset => render_reset,
        Opcode::SaveNext => render_save_next,
        Opcode::Save => render_save,
        Opcode::SetSpeed => render_set_speed,
    }
}

/// Describes `packet` using `controller` for zone, reset-type and state names.
///
/// # Examples
/// ```
/// use alienfx_core::{NameTable, decode};
///
/// let names = NameTable::new().with_zone(0x010203, "Logo");
/// let packet = [0x02, 0x03, 1, 1, 2, 3, 255, 0, 128, 0, 0, 0];
/// assert_eq!(
///     decode(&packet, &names),
///     "SET_COLOUR: BLOCK: 1, ZONE: Logo, (0xff,0x0,0x80)"
/// );
/// assert_eq!(decode(&[2, 3, 1], &names), "BAD PACKET: [2, 3, 1]");
/// ```
pub fn decode(packet: &[u8], controller: &dyn Controller) -> String {
    let reader = PacketReader::new(packet);
    if packet.len() != layout::PACKET_LENGTH {
        tracing::debug!(len = packet.len(), "bad packet length");
        return format!("BAD PACKET: {:?}", packet);
    }
    let code = match reader.read_opcode() {
        Ok(code) => code,
        Err(err) => return render_bad_packet(packet, &err),
    };
    match Opcode::from_byte(code) {
        Some(opcode) => handler(opcode)(&reader, controller)
            .unwrap_or_else(|err| render_bad_packet(packet, &err)),
        None => {
            tracing::debug!(opcode = code, "unknown command opcode");
            format!("UNKNOWN COMMAND : {} IN PACKET {:?}", code, packet)
        }
    }
}

fn render_bad_packet(packet: &[u8], err: &PacketError) -> String {
    tracing::debug!(error = %err, "bad packet");
    format!("BAD PACKET: {:?}", packet)
}

fn render_colour_target(
    opcode: Opcode,
    reader: &PacketReader<'_>,
    controller: &dyn Controller,
) -> Result<String, PacketError> {
    Ok(format!(
        "{}: BLOCK: {}, ZONE: {}",
        opcode.name(),
        reader.read_u8(layout::BLOCK_OFFSET)?,
        controller.zone_name(reader.read_zone()?)
    ))
}

fn render_set_morph_colour(
    reader: &PacketReader<'_>,
    controller: &dyn Controller,
) -> Result<String, PacketError> {
    let [(r1, g1, b1), (r2, g2, b2)] =
        unpack_colour_pair(&reader.read_array(layout::COLOUR_PAIR_RANGE)?);
    Ok(format!(
        "{}, ({},{},{})-({},{},{})",
        render_colour_target(Opcode::SetMorphColour, reader, controller)?,
        r1,
        g1,
        b1,
        r2,
        g2,
        b2
    ))
}

fn render_single_colour(
    opcode: Opcode,
    reader: &PacketReader<'_>,
    controller: &dyn Controller,
) -> Result<String, PacketError> {
    let (red, green, blue) = unpack_colour(&reader.read_array(layout::COLOUR_RANGE)?);
    Ok(format!(
        "{}, ({},{},{})",
        render_colour_target(opcode, reader, controller)?,
        red,
        green,
        blue
    ))
}

fn render_set_blink_colour(
    reader: &PacketReader<'_>,
    controller: &dyn Controller,
) -> Result<String, PacketError> {
    render_single_colour(Opcode::SetBlinkColour, reader, controller)
}

fn render_set_colour(
    reader: &PacketReader<'_>,
    controller: &dyn Controller,
) -> Result<String, PacketError> {
    render_single_colour(Opcode::SetColour, reader, controller)
}

fn render_loop_block_end(_: &PacketReader<'_>, _: &dyn Controller) -> Result<String, PacketError> {
    Ok(Opcode::LoopBlockEnd.name().to_string())
}

fn render_transmit_execute(
    _: &PacketReader<'_>,
    _: &dyn Controller,
) -> Result<String, PacketError> {
    Ok(Opcode::TransmitExecute.name().to_string())
}

fn render_get_status(_: &PacketReader<'_>, _: &dyn Controller) -> Result<String, PacketError> {
    Ok(Opcode::GetStatus.name().to_string())
}

fn render_reset(
    reader: &PacketReader<'_>,
    controller: &dyn Controller,
) -> Result<String, PacketError> {
    let reset_type = reader.read_u8(layout::RESET_TYPE_OFFSET)?;
    Ok(format!("RESET: {}", controller.reset_type_name(reset_type)))
}

fn render_save_next(
    reader: &PacketReader<'_>,
    controller: &dyn Controller,
) -> Result<String, PacketError> {
    let state = reader.read_u8(layout::STATE_OFFSET)?;
    Ok(format!("SAVE_NEXT: STATE {}", controller.state_name(state)))
}

fn render_save(_: &PacketReader<'_>, _: &dyn Controller) -> Result<String, PacketError> {
    Ok(Opcode::Save.name().to_string())
}

fn render_set_speed(reader: &PacketReader<'_>, _: &dyn Controller) -> Result<String, PacketError> {
    let speed = reader.read_u16_be(layout::SPEED_RANGE)?;
    Ok(format!("SET_SPEED: {}", hex_token(speed)))
}
