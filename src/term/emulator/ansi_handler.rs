// src/term/emulator/ansi_handler.rs

use super::TerminalEmulator;
use crate::{
    ansi::commands::{
        AnsiCommand, C0Control, CsiCommand, EscCommand, DA1_RESPONSE, DA2_RESPONSE,
        DSR_REPORT_CURSOR_POSITION, DSR_RESPONSE_OK, DSR_STATUS_OK,
    },
    term::{
        action::EmulatorAction,
        modes::{EraseMode, Mode, ModeAction},
    },
};
use log::{debug, warn};
use std::cmp::min;
use std::io::Write;

/// Processes a single parsed command, modifying the emulator state.
///
/// Returns an `EmulatorAction` when the command has an external effect
/// (bell, title, host response, command record).
pub(super) fn process_ansi_command(
    emulator: &mut TerminalEmulator,
    command: AnsiCommand,
) -> Option<EmulatorAction> {
    match command {
        AnsiCommand::Print(ch) => {
            emulator.print_char(ch);
            None
        }
        AnsiCommand::C0Control(c0) => match c0 {
            C0Control::BEL => Some(EmulatorAction::RingBell),
            C0Control::BS => {
                emulator.backspace();
                None
            }
            C0Control::HT => {
                emulator.horizontal_tab();
                None
            }
            C0Control::LF | C0Control::VT | C0Control::FF => {
                let flushed = emulator.flush_input_record();
                emulator.line_feed();
                flushed
            }
            C0Control::CR => {
                emulator.carriage_return();
                None
            }
        },
        AnsiCommand::Esc(esc) => match esc {
            EscCommand::Index => {
                emulator.line_feed();
                None
            }
            EscCommand::NextLine => {
                emulator.cursor_controller.carriage_return();
                emulator.line_feed();
                None
            }
            EscCommand::ReverseIndex => {
                emulator.reverse_line_feed();
                None
            }
            EscCommand::SaveCursor => {
                emulator.cursor_controller.save_state();
                None
            }
            EscCommand::RestoreCursor => {
                let ctx = emulator.screen_context();
                emulator.cursor_controller.restore_state(&ctx);
                None
            }
            EscCommand::ResetToInitialState => {
                emulator.full_reset();
                None
            }
        },
        AnsiCommand::Csi(csi) => process_csi_command(emulator, csi),
        AnsiCommand::Osc(data) => emulator.handle_osc(&data),
    }
}

fn process_csi_command(
    emulator: &mut TerminalEmulator,
    command: CsiCommand,
) -> Option<EmulatorAction> {
    match command {
        CsiCommand::CursorUp(n) => {
            emulator.cursor_up(n as usize);
            None
        }
        CsiCommand::CursorDown(n) => {
            emulator.cursor_down(n as usize);
            None
        }
        CsiCommand::CursorForward(n) => {
            emulator.cursor_forward(n as usize);
            None
        }
        CsiCommand::CursorBackward(n) => {
            emulator.cursor_backward(n as usize);
            None
        }
        CsiCommand::CursorNextLine(n) => {
            emulator.cursor_down(n as usize);
            emulator.cursor_controller.carriage_return();
            None
        }
        CsiCommand::CursorPrevLine(n) => {
            emulator.cursor_up(n as usize);
            emulator.cursor_controller.carriage_return();
            None
        }
        CsiCommand::CursorCharacterAbsolute(n) => {
            emulator.cursor_to_col(n.saturating_sub(1) as usize);
            None
        }
        CsiCommand::CursorLineAbsolute(n) => {
            emulator.cursor_to_row(n.saturating_sub(1) as usize);
            None
        }
        CsiCommand::CursorPosition(row, col) => {
            emulator.cursor_to_pos(
                row.saturating_sub(1) as usize,
                col.saturating_sub(1) as usize,
            );
            None
        }
        CsiCommand::SaveCursor => {
            emulator.cursor_controller.save_state();
            None
        }
        CsiCommand::RestoreCursor => {
            let ctx = emulator.screen_context();
            emulator.cursor_controller.restore_state(&ctx);
            None
        }
        CsiCommand::EraseInDisplay(mode) => {
            emulator.erase_in_display(EraseMode::from(mode));
            None
        }
        CsiCommand::EraseInLine(mode) => {
            emulator.erase_in_line(EraseMode::from(mode));
            None
        }
        CsiCommand::EraseCharacter(n) => {
            emulator.erase_chars(n as usize);
            None
        }
        CsiCommand::DeleteCharacter(n) => {
            emulator.delete_chars(n as usize);
            None
        }
        CsiCommand::InsertCharacter(n) => {
            emulator.insert_blank_chars(n as usize);
            None
        }
        CsiCommand::InsertLine(n) => {
            emulator.insert_lines(n as usize);
            None
        }
        CsiCommand::DeleteLine(n) => {
            emulator.delete_lines(n as usize);
            None
        }
        CsiCommand::SetScrollingRegion { top, bottom } => {
            emulator
                .screen
                .set_scrolling_region(top as usize, bottom as usize);
            let ctx = emulator.screen_context();
            let home_row = emulator.screen.scroll_top();
            emulator.cursor_controller.move_to(0, home_row, &ctx);
            None
        }
        CsiCommand::ScrollUp(n) => {
            emulator.scroll_up_lines(n as usize);
            None
        }
        CsiCommand::ScrollDown(n) => {
            emulator.scroll_down_lines(n as usize);
            None
        }
        CsiCommand::RepeatLastCharacter(n) => {
            emulator.repeat_last_char(n as usize);
            None
        }
        CsiCommand::DeviceStatusReport(param) => match param {
            DSR_STATUS_OK => Some(EmulatorAction::WritePty(DSR_RESPONSE_OK.to_vec())),
            DSR_REPORT_CURSOR_POSITION => {
                let ctx = emulator.screen_context();
                let (x, y) = emulator.cursor_controller.pos();
                let col = min(x, ctx.width.saturating_sub(1));
                let mut response = Vec::with_capacity(16);
                let _ = write!(&mut response, "\x1b[{};{}R", y + 1, col + 1);
                Some(EmulatorAction::WritePty(response))
            }
            _ => {
                warn!("unhandled DSR parameter: {}", param);
                None
            }
        },
        CsiCommand::PrimaryDeviceAttributes => {
            Some(EmulatorAction::WritePty(DA1_RESPONSE.to_vec()))
        }
        CsiCommand::SecondaryDeviceAttributes => {
            Some(EmulatorAction::WritePty(DA2_RESPONSE.to_vec()))
        }
        CsiCommand::SetMode(mode) => {
            emulator.handle_set_mode(Mode::Standard(mode), ModeAction::Enable);
            None
        }
        CsiCommand::ResetMode(mode) => {
            emulator.handle_set_mode(Mode::Standard(mode), ModeAction::Disable);
            None
        }
        CsiCommand::SetModePrivate(mode) => {
            emulator.handle_set_mode(Mode::DecPrivate(mode), ModeAction::Enable);
            None
        }
        CsiCommand::ResetModePrivate(mode) => {
            emulator.handle_set_mode(Mode::DecPrivate(mode), ModeAction::Disable);
            None
        }
        CsiCommand::SetGraphicsRendition(attributes) => {
            emulator.apply_sgr(&attributes);
            None
        }
        CsiCommand::SetCursorStyle { shape } => {
            debug!("cursor style {} accepted and ignored", shape);
            None
        }
        CsiCommand::WindowManipulation { ps1, ps2, ps3 } => {
            emulator.handle_window_manipulation(ps1, ps2, ps3)
        }
        CsiCommand::SoftReset => {
            emulator.full_reset();
            None
        }
        CsiCommand::Unsupported(intermediates, final_char) => {
            warn!(
                "unsupported CSI sequence reached dispatcher: intermediates={:?}, final={:?}",
                intermediates, final_char
            );
            None
        }
    }
}
