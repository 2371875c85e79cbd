// src/ansi/tests.rs

//! Tests for scalar decoding and the sequence state machine.

use super::{
    commands::{AnsiCommand, Attribute, C0Control, CsiCommand, EscCommand},
    AnsiParser, AnsiProcessor,
};
use crate::color::Color;
use test_log::test;

// Helper to process bytes and collect the resulting commands.
fn process_bytes(bytes: &[u8]) -> Vec<AnsiCommand> {
    let mut processor = AnsiProcessor::new();
    processor.process_bytes(bytes)
}

#[test]
fn it_should_process_a_simple_printable_string() {
    let commands = process_bytes(b"Hi!");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Print('H'),
            AnsiCommand::Print('i'),
            AnsiCommand::Print('!'),
        ]
    );
}

#[test]
fn it_should_process_c0_controls() {
    let commands = process_bytes(b"\x07\x08\x09\x0a\x0d");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::C0Control(C0Control::BEL),
            AnsiCommand::C0Control(C0Control::BS),
            AnsiCommand::C0Control(C0Control::HT),
            AnsiCommand::C0Control(C0Control::LF),
            AnsiCommand::C0Control(C0Control::CR),
        ]
    );
}

#[test]
fn it_should_drop_unhandled_c0_controls() {
    // NUL, SO, SI and DEL have no effect on this terminal.
    let commands = process_bytes(b"\x00a\x0e\x0fb\x7f");
    assert_eq!(
        commands,
        vec![AnsiCommand::Print('a'), AnsiCommand::Print('b')]
    );
}

#[test]
fn it_should_process_csi_h_as_cup_1_1() {
    let commands = process_bytes(b"\x1b[H");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::CursorPosition(1, 1))]
    );
}

#[test]
fn it_should_process_csi_cup_with_params() {
    let commands = process_bytes(b"\x1b[5;10H");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::CursorPosition(5, 10))]
    );
}

#[test]
fn it_should_default_zero_motion_params_to_one() {
    let commands = process_bytes(b"\x1b[0A\x1b[B");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Csi(CsiCommand::CursorUp(1)),
            AnsiCommand::Csi(CsiCommand::CursorDown(1)),
        ]
    );
}

#[test]
fn it_should_handle_leading_semicolon_as_zero_param() {
    let commands = process_bytes(b"\x1b[;5H");
    // A missing row parameter defaults to 1.
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::CursorPosition(1, 5))]
    );
}

#[test]
fn it_should_process_sgr_reset_for_empty_params() {
    let commands = process_bytes(b"\x1b[m");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetGraphicsRendition(vec![
            Attribute::Reset
        ]))]
    );
}

#[test]
fn it_should_process_sgr_basic_colors() {
    let commands = process_bytes(b"\x1b[31;44m");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetGraphicsRendition(vec![
            Attribute::Foreground(Color::Indexed(1)),
            Attribute::Background(Color::Indexed(4)),
        ]))]
    );
}

#[test]
fn it_should_process_sgr_bright_colors() {
    let commands = process_bytes(b"\x1b[91;102m");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetGraphicsRendition(vec![
            Attribute::Foreground(Color::Indexed(9)),
            Attribute::Background(Color::Indexed(10)),
        ]))]
    );
}

#[test]
fn it_should_resolve_sgr_256_color_to_rgb() {
    let commands = process_bytes(b"\x1b[38;5;196m");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetGraphicsRendition(vec![
            Attribute::Foreground(Color::Rgb(255, 0, 0))
        ]))]
    );
}

#[test]
fn it_should_process_sgr_truecolor() {
    let commands = process_bytes(b"\x1b[48;2;10;20;30m");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetGraphicsRendition(vec![
            Attribute::Background(Color::Rgb(10, 20, 30))
        ]))]
    );
}

#[test]
fn it_should_skip_malformed_extended_color_and_keep_rest() {
    // 38 with a missing sub-selector payload is dropped; bold survives.
    let commands = process_bytes(b"\x1b[38;1m");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetGraphicsRendition(
            Vec::new()
        ))]
    );
    let commands = process_bytes(b"\x1b[1;38m");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetGraphicsRendition(vec![
            Attribute::Bold
        ]))]
    );
}

#[test]
fn it_should_process_private_mode_set_and_reset() {
    let commands = process_bytes(b"\x1b[?25h\x1b[?25l");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Csi(CsiCommand::SetModePrivate(25)),
            AnsiCommand::Csi(CsiCommand::ResetModePrivate(25)),
        ]
    );
}

#[test]
fn it_should_expand_mode_parameter_lists() {
    let commands = process_bytes(b"\x1b[?1000;1006h");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Csi(CsiCommand::SetModePrivate(1000)),
            AnsiCommand::Csi(CsiCommand::SetModePrivate(1006)),
        ]
    );
}

#[test]
fn it_should_process_standard_mode_4() {
    let commands = process_bytes(b"\x1b[4h\x1b[4l");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Csi(CsiCommand::SetMode(4)),
            AnsiCommand::Csi(CsiCommand::ResetMode(4)),
        ]
    );
}

#[test]
fn it_should_process_device_attribute_queries() {
    let commands = process_bytes(b"\x1b[c\x1b[0c\x1b[>c");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Csi(CsiCommand::PrimaryDeviceAttributes),
            AnsiCommand::Csi(CsiCommand::PrimaryDeviceAttributes),
            AnsiCommand::Csi(CsiCommand::SecondaryDeviceAttributes),
        ]
    );
}

#[test]
fn it_should_ignore_tertiary_device_attributes() {
    assert_eq!(process_bytes(b"\x1b[=c"), vec![]);
}

#[test]
fn it_should_process_dsr() {
    let commands = process_bytes(b"\x1b[5n\x1b[6n");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Csi(CsiCommand::DeviceStatusReport(5)),
            AnsiCommand::Csi(CsiCommand::DeviceStatusReport(6)),
        ]
    );
}

#[test]
fn it_should_process_scrolling_region() {
    let commands = process_bytes(b"\x1b[2;10r\x1b[r");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Csi(CsiCommand::SetScrollingRegion { top: 2, bottom: 10 }),
            AnsiCommand::Csi(CsiCommand::SetScrollingRegion { top: 1, bottom: 0 }),
        ]
    );
}

#[test]
fn it_should_process_repeat_last_character() {
    let commands = process_bytes(b"\x1b[3b");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::RepeatLastCharacter(3))]
    );
}

#[test]
fn it_should_process_decscusr_with_space_intermediate() {
    let commands = process_bytes(b"\x1b[2 q");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::SetCursorStyle { shape: 2 })]
    );
}

#[test]
fn it_should_process_decstr() {
    let commands = process_bytes(b"\x1b[!p");
    assert_eq!(commands, vec![AnsiCommand::Csi(CsiCommand::SoftReset)]);
}

#[test]
fn it_should_process_window_manipulation() {
    let commands = process_bytes(b"\x1b[18t");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::WindowManipulation {
            ps1: 18,
            ps2: None,
            ps3: None,
        })]
    );
}

#[test]
fn it_should_report_unknown_csi_finals_as_unsupported() {
    let commands = process_bytes(b"\x1b[5z");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::Unsupported(
            vec![],
            Some('z')
        ))]
    );
}

#[test]
fn it_should_abort_csi_on_control_scalar() {
    // The ESC aborts the CSI sequence and is consumed; the BEL and the
    // print are then handled normally.
    let commands = process_bytes(b"\x1b[12\x1b\x07H");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::C0Control(C0Control::BEL),
            AnsiCommand::Print('H'),
        ]
    );
}

#[test]
fn it_should_process_esc_sequences() {
    let commands = process_bytes(b"\x1b7\x1b8\x1bD\x1bE\x1bM\x1bc");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Esc(EscCommand::SaveCursor),
            AnsiCommand::Esc(EscCommand::RestoreCursor),
            AnsiCommand::Esc(EscCommand::Index),
            AnsiCommand::Esc(EscCommand::NextLine),
            AnsiCommand::Esc(EscCommand::ReverseIndex),
            AnsiCommand::Esc(EscCommand::ResetToInitialState),
        ]
    );
}

#[test]
fn it_should_discard_charset_designators() {
    let commands = process_bytes(b"\x1b(Bok");
    assert_eq!(
        commands,
        vec![AnsiCommand::Print('o'), AnsiCommand::Print('k')]
    );
}

#[test]
fn it_should_terminate_osc_with_bel() {
    let commands = process_bytes(b"\x1b]0;my title\x07");
    assert_eq!(commands, vec![AnsiCommand::Osc("0;my title".to_string())]);
}

#[test]
fn it_should_terminate_osc_with_st() {
    let commands = process_bytes(b"\x1b]2;other\x1b\\");
    assert_eq!(commands, vec![AnsiCommand::Osc("2;other".to_string())]);
}

#[test]
fn it_should_carry_osc_state_across_chunks() {
    let mut processor = AnsiProcessor::new();
    assert_eq!(processor.process_bytes(b"\x1b]0;sp"), vec![]);
    assert_eq!(
        processor.process_bytes(b"lit\x07"),
        vec![AnsiCommand::Osc("0;split".to_string())]
    );
}

#[test]
fn it_should_discard_string_sequences_until_st() {
    let commands = process_bytes(b"\x1bPsecret payload\x1b\\done");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Print('d'),
            AnsiCommand::Print('o'),
            AnsiCommand::Print('n'),
            AnsiCommand::Print('e'),
        ]
    );
}

#[test]
fn it_should_discard_apc_until_bel() {
    let commands = process_bytes(b"\x1b_ignored\x07X");
    assert_eq!(commands, vec![AnsiCommand::Print('X')]);
}

#[test]
fn it_should_decode_multibyte_utf8() {
    let commands = process_bytes("héllo".as_bytes());
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Print('h'),
            AnsiCommand::Print('é'),
            AnsiCommand::Print('l'),
            AnsiCommand::Print('l'),
            AnsiCommand::Print('o'),
        ]
    );
}

#[test]
fn it_should_compose_decomposed_input_to_nfc() {
    // 'e' followed by a combining acute accent composes to U+00E9.
    let commands = process_bytes("e\u{0301}".as_bytes());
    assert_eq!(commands, vec![AnsiCommand::Print('\u{00E9}')]);
}

#[test]
fn it_should_fall_back_to_ascii_on_invalid_utf8() {
    let commands = process_bytes(b"a\xffb");
    assert_eq!(
        commands,
        vec![
            AnsiCommand::Print('a'),
            AnsiCommand::Print('\u{FFFD}'),
            AnsiCommand::Print('b'),
        ]
    );
}

#[test]
fn it_should_saturate_oversized_parameters() {
    let commands = process_bytes(b"\x1b[99999999999A");
    assert_eq!(
        commands,
        vec![AnsiCommand::Csi(CsiCommand::CursorUp(u16::MAX))]
    );
}
