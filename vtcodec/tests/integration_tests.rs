//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Integration tests for rendering console streams into a virtual screen.

use proptest::prelude::*;
use vtscrape_terminal::{CursorPosition, Region, VirtualScreen};
use vtscrape_vtcodec::{
    Charset, CharsetSlot, ConsoleCommand, ConsoleCommandKind, ConsoleDecoder, ConsoleState,
    EraseMode, keys,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn render(bytes: &[u8]) -> (ConsoleDecoder, VirtualScreen, Vec<ConsoleCommand>) {
    let mut screen = VirtualScreen::create(24, 80, ' ');
    let mut decoder = ConsoleDecoder::new();
    let commands = bytes
        .iter()
        .map(|byte| decoder.next(*byte, &mut screen))
        .collect();
    (decoder, screen, commands)
}

fn line(screen: &VirtualScreen, row: usize) -> String {
    screen.string(Region::at(row, 0), "").trim_end().to_string()
}

// ============================================================================
// Cursor Invariants
// ============================================================================

proptest! {
    #[test]
    fn cursor_stays_on_grid(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut screen = VirtualScreen::create(24, 80, ' ');
        let mut decoder = ConsoleDecoder::new();
        for byte in bytes {
            decoder.next(byte, &mut screen);
            let CursorPosition { row, col } = screen.cursor();
            prop_assert!(row < 24);
            prop_assert!(col < 80);
        }
    }

    #[test]
    fn full_row_of_text_wraps(row in 0usize..23, glyph in proptest::char::range('!', '~')) {
        let mut screen = VirtualScreen::create(24, 80, ' ');
        let mut decoder = ConsoleDecoder::new();
        screen.set_cursor(row, 0);
        for _ in 0..80 {
            decoder.next(glyph as u8, &mut screen);
        }
        prop_assert_eq!(screen.cursor(), CursorPosition::new(row + 1, 0));
        prop_assert!(screen.string(Region::at(row, 0), "").chars().all(|c| c == glyph));
    }
}

// ============================================================================
// Control Bytes
// ============================================================================

#[test]
fn text_and_line_controls() {
    let (_, screen, _) = render(b"Username:\r\nPassword:");
    assert_eq!(line(&screen, 0), "Username:");
    assert_eq!(line(&screen, 1), "Password:");
    assert_eq!(screen.cursor(), CursorPosition::new(1, 9));
}

#[test]
fn line_feed_stops_at_last_row() {
    let (_, screen, _) = render(&[b'\n'; 40]);
    assert_eq!(screen.cursor(), CursorPosition::new(23, 0));
}

#[test]
fn tab_advances_to_next_stop() {
    let mut screen = VirtualScreen::create(24, 80, ' ');
    let mut decoder = ConsoleDecoder::new().with_tab_size(4);
    for byte in b"ab\tc" {
        decoder.next(*byte, &mut screen);
    }
    assert_eq!(line(&screen, 0), "ab  c");
}

#[test]
fn no_wrap_overwrites_last_column() {
    let mut screen = VirtualScreen::create(2, 3, ' ');
    let mut decoder = ConsoleDecoder::new().with_wrap(false);
    for byte in b"abcde" {
        decoder.next(*byte, &mut screen);
    }
    assert_eq!(screen.string(Region::at(0, 0), ""), "abe");
    assert_eq!(screen.cursor(), CursorPosition::new(0, 2));
}

// ============================================================================
// Escape Sequences
// ============================================================================

#[test]
fn cursor_position_is_one_based() {
    let (_, screen, commands) = render(b"\x1b[12;40HX");
    assert_eq!(screen.cell(11, 39), Some('X'));
    assert!(commands.contains(&ConsoleCommand::CursorPosition { row: 11, col: 39 }));
}

#[test]
fn cursor_position_clamps() {
    let (_, screen, _) = render(b"\x1b[99;999H");
    assert_eq!(screen.cursor(), CursorPosition::new(23, 79));
}

#[test]
fn home_forms() {
    for sequence in [&b"\x1b[H"[..], b"\x1bH", b"\x1b[f"] {
        let mut bytes = b"\x1b[5;5H".to_vec();
        bytes.extend_from_slice(sequence);
        let (_, screen, commands) = render(&bytes);
        assert_eq!(screen.cursor(), CursorPosition::new(0, 0));
        assert_eq!(commands.last(), Some(&ConsoleCommand::Home));
    }
}

#[test]
fn single_parameter_position_is_ignored() {
    let (_, screen, commands) = render(b"\x1b[5;5H\x1b[3H");
    assert_eq!(screen.cursor(), CursorPosition::new(4, 4));
    assert_eq!(commands.last(), Some(&ConsoleCommand::Unknown("[3H".to_string())));
}

#[test]
fn relative_moves_default_to_one() {
    let (_, screen, _) = render(b"\x1b[10;10H\x1b[A\x1b[0D\x1b[3B\x1b[5C");
    assert_eq!(screen.cursor(), CursorPosition::new(11, 13));
}

#[test]
fn vt52_moves_and_addressing() {
    let (_, screen, _) = render(b"\x1b[10;10H\x1bA\x1bD");
    assert_eq!(screen.cursor(), CursorPosition::new(8, 8));

    let (_, screen, _) = render(&[0x1B, b'Y', 32 + 5, 32 + 10, b'Z']);
    assert_eq!(screen.cell(4, 9), Some('Z'));

    let (_, screen, _) = render(b"\x1b[3;1H\x1bI");
    assert_eq!(screen.cursor(), CursorPosition::new(1, 0));
}

#[test]
fn erase_line_modes() {
    let (_, screen, commands) = render(b"0123456789\x1b[1;5H\x1b[K");
    assert_eq!(line(&screen, 0), "0123");
    assert_eq!(commands.last(), Some(&ConsoleCommand::EraseLine(EraseMode::ToEnd)));

    let (_, screen, _) = render(b"0123456789\x1b[1;5H\x1b[1K");
    assert_eq!(line(&screen, 0), "     56789");

    let (_, screen, _) = render(b"0123456789\x1b[1;5H\x1b[2K");
    assert_eq!(line(&screen, 0), "");
}

#[test]
fn erase_display_modes() {
    let (_, screen, _) = render(b"top\r\nmiddle\r\nbottom\x1b[2;3H\x1b[J");
    assert_eq!(line(&screen, 0), "top");
    assert_eq!(line(&screen, 1), "mi");
    assert_eq!(line(&screen, 2), "");

    let (_, screen, _) = render(b"top\r\nmiddle\r\nbottom\x1b[2;3H\x1b[1J");
    assert_eq!(line(&screen, 0), "");
    assert_eq!(line(&screen, 1), "   dle");
    assert_eq!(line(&screen, 2), "bottom");

    let (_, screen, commands) = render(b"top\r\nmiddle\x1b[2J");
    assert_eq!(line(&screen, 0), "");
    assert_eq!(line(&screen, 1), "");
    assert_eq!(commands.last(), Some(&ConsoleCommand::EraseDisplay(EraseMode::All)));
}

#[test]
fn unknown_sequences_are_dropped() {
    let (decoder, screen, commands) = render(b"\x1b[?25lok\x1b[3K");
    assert_eq!(line(&screen, 0), "ok");
    assert_eq!(decoder.state(), ConsoleState::Data);
    let unknown = commands
        .iter()
        .filter(|c| ConsoleCommandKind::from(*c) == ConsoleCommandKind::Unknown)
        .count();
    assert_eq!(unknown, 2);
}

#[test]
fn vt52_mode_switches_are_unsupported() {
    let (_, _, commands) = render(b"\x1b=\x1b>\x1b<");
    assert_eq!(
        commands,
        vec![
            ConsoleCommand::Escape,
            ConsoleCommand::Unsupported(b'='),
            ConsoleCommand::Escape,
            ConsoleCommand::Unsupported(b'>'),
            ConsoleCommand::Escape,
            ConsoleCommand::Unsupported(b'<'),
        ]
    );
}

#[test]
fn keyboard_sequences_move_the_cursor() {
    let mut bytes = b"\x1b[5;5H".to_vec();
    bytes.extend_from_slice(keys::UP);
    bytes.extend_from_slice(keys::LEFT);
    let (_, screen, _) = render(&bytes);
    assert_eq!(screen.cursor(), CursorPosition::new(3, 3));
}

// ============================================================================
// Character Sets
// ============================================================================

#[test]
fn shift_out_renders_replacement_glyphs() {
    let (decoder, screen, commands) = render(b"\x1b)0a\x0eqq\x0fb");
    assert!(commands.contains(&ConsoleCommand::SelectCharset {
        slot: CharsetSlot::ShiftOut,
        charset: Charset::G0Special,
    }));
    assert_eq!(line(&screen, 0), "a\u{FFFD}\u{FFFD}b");
    assert_eq!(decoder.charset().active, Charset::Ascii);
}

#[test]
fn uk_shift_in_set_is_not_ascii() {
    let (decoder, screen, _) = render(b"\x1b(A\x0fx");
    assert_eq!(decoder.charset().active, Charset::Uk);
    assert_eq!(screen.cell(0, 0), Some('\u{FFFD}'));
}

#[test]
fn reset_returns_to_ascii() {
    let (mut decoder, _, _) = render(b"\x1b(0\x0f\x1b[1");
    decoder.reset();
    assert_eq!(decoder.state(), ConsoleState::Data);
    assert_eq!(decoder.charset().active, Charset::Ascii);
    assert!(decoder.sequence().is_empty());
}
