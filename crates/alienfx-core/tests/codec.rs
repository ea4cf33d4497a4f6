use alienfx_core::{
    Colour, Command, CommandPacket, Controller, NameTable, Opcode, PACKET_LENGTH, PACKET_MARKER,
    decode, make_cmd_get_status, make_cmd_loop_block_end, make_cmd_reset, make_cmd_save,
    make_cmd_save_next, make_cmd_set_blink_colour, make_cmd_set_colour, make_cmd_set_morph_colour,
    make_cmd_set_speed, make_cmd_transmit_execute,
};

struct LogoController;

impl Controller for LogoController {
    fn zone_name(&self, _zone: [u8; 3]) -> String {
        "Logo".to_string()
    }

    fn reset_type_name(&self, reset_type: u8) -> String {
        format!("type {reset_type}")
    }

    fn state_name(&self, state: u8) -> String {
        format!("state {state}")
    }
}

/// Values that exercise sign, width overflow and the field boundaries.
const AWKWARD_VALUES: [i64; 12] = [
    0,
    1,
    0x7f,
    0xff,
    0x100,
    0xffff,
    0x1_0000,
    0xff_ffff,
    0x100_0000,
    -1,
    -0x8000,
    i64::MIN,
];

fn all_packets() -> Vec<CommandPacket> {
    vec![
        make_cmd_set_morph_colour(1, 2, Colour::new(3, 4, 5), Colour::new(6, 7, 8)),
        make_cmd_set_blink_colour(1, 2, Colour::new(3, 4, 5)),
        make_cmd_set_colour(1, 2, Colour::new(3, 4, 5)),
        make_cmd_loop_block_end(),
        make_cmd_transmit_execute(),
        make_cmd_get_status(),
        make_cmd_reset(1),
        make_cmd_save_next(1),
        make_cmd_save(),
        make_cmd_set_speed(1),
    ]
}

#[test]
fn set_colour_packet_layout() {
    let packet = make_cmd_set_colour(1, 0x010203, Colour::new(255, 0, 128));
    assert_eq!(
        packet.as_bytes(),
        &[0x02, 0x03, 1, 1, 2, 3, 255, 0, 128, 0, 0, 0]
    );
}

#[test]
fn set_colour_decodes_with_zone_name() {
    let packet = make_cmd_set_colour(1, 0x010203, Colour::new(255, 0, 128));
    assert_eq!(
        decode(packet.as_ref(), &LogoController),
        "SET_COLOUR: BLOCK: 1, ZONE: Logo, (0xff,0x0,0x80)"
    );
}

#[test]
fn set_speed_round_trip_text() {
    let packet = make_cmd_set_speed(300);
    assert_eq!(packet.as_bytes()[2..4], [0x01, 0x2c]);
    assert_eq!(decode(packet.as_ref(), &LogoController), "SET_SPEED: 0x12c");
}

#[test]
fn short_input_is_bad_packet() {
    assert_eq!(
        decode(&[0x02, 0x03, 1, 2, 3], &LogoController),
        "BAD PACKET: [2, 3, 1, 2, 3]"
    );
}

#[test]
fn unknown_opcode_is_reported() {
    let text = decode(&[0x02, 0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], &LogoController);
    assert!(text.starts_with("UNKNOWN COMMAND : 255 IN PACKET ["), "{text}");
}

#[test]
fn every_encoded_packet_is_well_formed() {
    for packet in all_packets() {
        let bytes = packet.as_bytes();
        assert_eq!(bytes.len(), PACKET_LENGTH);
        assert_eq!(bytes[0], PACKET_MARKER);
        assert!(packet.opcode().is_some());
    }
}

#[test]
fn every_known_opcode_decodes_to_its_name() {
    for packet in all_packets() {
        let name = packet.opcode().unwrap().name();
        let text = decode(packet.as_ref(), &LogoController);
        assert!(text.starts_with(name), "{name}: {text}");
    }
}

#[test]
fn every_wrong_length_is_bad_packet() {
    let bytes = [0x02u8; 32];
    for len in (0..bytes.len()).filter(|len| *len != PACKET_LENGTH) {
        let text = decode(&bytes[..len], &LogoController);
        assert!(text.starts_with("BAD PACKET:"), "len {len}: {text}");
    }
}

#[test]
fn every_unknown_opcode_is_unknown_command() {
    for code in 0..=u8::MAX {
        if Opcode::from_byte(code).is_some() {
            continue;
        }
        let mut bytes = [0u8; PACKET_LENGTH];
        bytes[0] = PACKET_MARKER;
        bytes[1] = code;
        let text = decode(&bytes, &LogoController);
        assert!(
            text.starts_with(&format!("UNKNOWN COMMAND : {code} IN PACKET ")),
            "{text}"
        );
    }
}

#[test]
fn eight_bit_fields_mask_any_value() {
    for value in AWKWARD_VALUES {
        let expected = (value & 0xff) as u8;
        let colour = make_cmd_set_colour(value, 0, Colour::new(value, value, value));
        assert_eq!(colour.as_bytes()[2], expected, "block {value}");
        assert_eq!(colour.as_bytes()[6..9], [expected; 3], "colour {value}");
        assert_eq!(make_cmd_reset(value).as_bytes()[2], expected, "reset {value}");
        assert_eq!(make_cmd_save_next(value).as_bytes()[2], expected, "state {value}");
    }
}

#[test]
fn zone_masks_to_24_bits() {
    for value in AWKWARD_VALUES {
        let masked = (value & 0xff_ffff) as u32;
        let packet = make_cmd_set_blink_colour(0, value, Colour::default());
        assert_eq!(packet.as_bytes()[3..6], masked.to_be_bytes()[1..], "zone {value}");
    }
}

#[test]
fn speed_masks_to_16_bits() {
    for value in AWKWARD_VALUES {
        let masked = (value & 0xffff) as u16;
        let packet = make_cmd_set_speed(value);
        assert_eq!(packet.as_bytes()[2..4], masked.to_be_bytes(), "speed {value}");
        assert!(packet.as_bytes()[4..].iter().all(|b| *b == 0));
    }
}

#[test]
fn morph_colour_masks_both_colours() {
    let packet = make_cmd_set_morph_colour(
        0,
        0,
        Colour::new(-1, 0x100, 0x1ab),
        Colour::new(0x2cd, -0x100, 7),
    );
    assert_eq!(packet.as_bytes()[6..], [0xff, 0x00, 0xab, 0xcd, 0x00, 0x07]);
}

#[test]
fn typed_command_matches_text_decode() {
    let names = NameTable::new().with_state(2, "AC_SLEEP");
    let packet = make_cmd_save_next(2);
    assert_eq!(Command::parse(&packet).unwrap(), Command::SaveNext { state: 2 });
    assert_eq!(decode(packet.as_ref(), &names), "SAVE_NEXT: STATE AC_SLEEP");
}

#[test]
fn codec_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommandPacket>();
    assert_send_sync::<Command>();
    assert_send_sync::<NameTable>();
}

#[test]
fn concurrent_decodes_share_one_controller() {
    let names = NameTable::new().with_zone(0x000001, "Logo");
    std::thread::scope(|scope| {
        for block in 0..4 {
            let names = &names;
            scope.spawn(move || {
                let packet = make_cmd_set_colour(block, 1, Colour::new(1, 2, 3));
                let text = decode(packet.as_ref(), names);
                assert_eq!(
                    text,
                    format!("SET_COLOUR: BLOCK: {block}, ZONE: Logo, (0x1,0x2,0x3)")
                );
            });
        }
    });
}
