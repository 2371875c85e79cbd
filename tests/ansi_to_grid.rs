// tests/ansi_to_grid.rs

//! End-to-end integration tests: PTY-style byte streams in, grid state
//! out, exercised through the public API only.

use vterm_core::{Color, Glyph, TerminalEmulator};

fn char_at(term: &TerminalEmulator, x: usize, y: usize) -> char {
    term.screen().glyph(x, y).expect("cell in bounds").display_char()
}

fn visible_row(term: &TerminalEmulator, y: usize) -> String {
    let row: String = term
        .screen()
        .row(y)
        .expect("row in bounds")
        .iter()
        .map(Glyph::display_char)
        .collect();
    row.trim_end().to_string()
}

#[test]
fn shell_prompt_session_builds_expected_screen() {
    let mut term = TerminalEmulator::new(40, 6);
    term.process(b"$ cargo test\r\n");
    term.process(b"   Compiling vt \x1b[32mok\x1b[0m\r\n");
    term.process(b"$ ");
    assert_eq!(visible_row(&term, 0), "$ cargo test");
    assert_eq!(visible_row(&term, 1), "   Compiling vt ok");
    assert_eq!(visible_row(&term, 2), "$");
    let cursor = term.cursor();
    assert_eq!((cursor.x, cursor.y), (2, 2));
}

#[test]
fn full_screen_editor_session_round_trips_the_primary_screen() {
    let mut term = TerminalEmulator::new(20, 5);
    term.process(b"before editor\r\n$ ");
    let text_before = term.extract_text();

    // An editor enters the alternate screen, paints a UI, and leaves.
    term.process(b"\x1b[?1049h\x1b[2J\x1b[H");
    term.process(b"\x1b[7m EDITOR \x1b[0m\r\nbody line");
    assert_eq!(visible_row(&term, 0), " EDITOR");
    term.process(b"\x1b[?1049l");

    assert_eq!(term.extract_text(), text_before);
    let cursor = term.cursor();
    assert_eq!((cursor.x, cursor.y), (2, 1));
}

#[test]
fn progress_bar_redraw_with_carriage_return() {
    let mut term = TerminalEmulator::new(20, 3);
    term.process(b"10%\r55%\r100%");
    assert_eq!(visible_row(&term, 0), "100%");
    assert_eq!(term.cursor().y, 0);
}

#[test]
fn colored_ls_output_styles_cells() {
    let mut term = TerminalEmulator::new(40, 4);
    term.process(b"\x1b[1;34mdir\x1b[0m  \x1b[38;2;10;20;30mfile\x1b[0m\r\n");
    match term.screen().glyph(0, 0).unwrap() {
        Glyph::Single(cell) => {
            assert_eq!(cell.c, 'd');
            assert_eq!(cell.attr.fg, Color::Indexed(4));
        }
        other => panic!("expected a plain cell, got {other:?}"),
    }
    match term.screen().glyph(5, 0).unwrap() {
        Glyph::Single(cell) => {
            assert_eq!(cell.c, 'f');
            assert_eq!(cell.attr.fg, Color::Rgb(10, 20, 30));
        }
        other => panic!("expected a plain cell, got {other:?}"),
    }
}

#[test]
fn cjk_text_wraps_without_splitting_glyphs() {
    let mut term = TerminalEmulator::new(5, 3);
    term.process("日本語".as_bytes());
    // Two wide characters fit on row 0; the third cannot start in the
    // last column and wraps.
    assert!(term.screen().glyph(0, 0).unwrap().is_wide_primary());
    assert!(term.screen().glyph(2, 0).unwrap().is_wide_primary());
    assert!(term.screen().glyph(4, 0).unwrap().is_blank());
    assert!(term.screen().glyph(0, 1).unwrap().is_wide_primary());
    assert_eq!(term.extract_text(), "日本\n語");
}

#[test]
fn pager_scroll_region_keeps_status_line() {
    let mut term = TerminalEmulator::new(20, 4);
    // Status line on the last row, content scrolls in rows 1-3.
    term.process(b"\x1b[4;1HSTATUS\x1b[1;3r\x1b[1;1H");
    term.process(b"one\r\ntwo\r\nthree\r\nfour\r\nfive");
    assert_eq!(visible_row(&term, 3), "STATUS");
    // The content region scrolled; the last three lines are visible.
    assert_eq!(visible_row(&term, 0), "three");
    assert_eq!(visible_row(&term, 1), "four");
    assert_eq!(visible_row(&term, 2), "five");
}

#[test]
fn scrollback_retains_evicted_rows_up_to_the_bound() {
    let mut term = TerminalEmulator::with_scrollback_limit(10, 2, 4);
    for i in 0..10 {
        term.process(format!("line {i}\r\n").as_bytes());
    }
    assert_eq!(term.screen().scrollback_len(), 4);
    let text = term.extract_text();
    assert!(text.starts_with("line 5"), "oldest retained row first: {text}");
    assert!(text.contains("line 9"));
}

#[test]
fn csi_3j_clears_scrollback_too() {
    let mut term = TerminalEmulator::new(10, 2);
    term.process(b"a\r\nb\r\nc\r\n");
    assert!(term.screen().scrollback_len() > 0);
    term.process(b"\x1b[3J");
    assert_eq!(term.screen().scrollback_len(), 0);
    assert_eq!(term.extract_text(), "");
}

#[test]
fn resize_mid_stream_keeps_the_overlap() {
    let mut term = TerminalEmulator::new(10, 4);
    term.process(b"0123456789\r\nabcdefghij");
    term.resize(5, 3);
    assert_eq!(visible_row(&term, 0), "01234");
    assert_eq!(visible_row(&term, 1), "abcde");
    // Printing keeps working at the new geometry.
    term.process(b"\x1b[3;1Hxyz");
    assert_eq!(visible_row(&term, 2), "xyz");
}

#[test]
fn chunk_boundaries_inside_sequences_are_invisible() {
    let mut whole = TerminalEmulator::new(20, 3);
    whole.process(b"\x1b[2;3Hok\x1b[1mX");

    let mut split = TerminalEmulator::new(20, 3);
    for chunk in [b"\x1b".as_ref(), b"[2;", b"3Hok", b"\x1b[1", b"mX"] {
        split.process(chunk);
    }
    assert_eq!(whole.screen().grid(), split.screen().grid());
    assert_eq!(char_at(&split, 2, 1), 'o');
}

#[test]
fn malformed_input_never_disturbs_structure() {
    let mut term = TerminalEmulator::new(8, 3);
    term.process(b"\x1b[999;999H\x1b[?9999h\x1b]junk\x07\x1bQ\x1b[~\x1b[2;1Hok");
    let (cols, rows) = term.dimensions();
    assert_eq!((cols, rows), (8, 3));
    assert_eq!(term.screen().grid().len(), rows);
    assert!(term.screen().grid().iter().all(|row| row.len() == cols));
    // The stream ends with printable text that still lands on the grid.
    assert_eq!(visible_row(&term, 1), "ok");
}
