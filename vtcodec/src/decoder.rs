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


use crate::{Charset, CharsetSlot, CharsetState, ConsoleCommand, EraseMode};
use tracing::trace;
use vtscrape_terminal::{Region, VirtualScreen};

/// Longest escape sequence collected before it is discarded.
pub const MAX_SEQUENCE_LENGTH: usize = 256;

const NUL: u8 = 0x00;
const BELL: u8 = 0x07;
const BS: u8 = 0x08;
const TAB: u8 = 0x09;
const LF: u8 = 0x0A;
const CR: u8 = 0x0D;
const SO: u8 = 0x0E;
const SI: u8 = 0x0F;
const ESC: u8 = 0x1B;

/// Decoder position inside console control sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleState {
    #[default]
    Data,
    /// After `ESC`, collecting parameters until a final byte.
    CollectingEscape,
    /// After `ESC Y`, `ESC +`, `ESC #`, `ESC (` or `ESC )`, collecting the
    /// operand bytes.
    CollectingAmbiguousEscape,
}

/// VT100/VT52 decoder that renders bytes into a [`VirtualScreen`].
///
/// Only a practical subset of sequences is understood. Everything else is
/// reported as [`ConsoleCommand::Unknown`] and dropped. The screen never
/// scrolls: the cursor clamps at the last row.
#[derive(Clone, Debug)]
pub struct ConsoleDecoder {
    state: ConsoleState,
    sequence: Vec<u8>,
    charset: CharsetState,
    style: u16,
    tab_size: usize,
    wrap: bool,
    last: ConsoleCommand,
}

impl Default for ConsoleDecoder {
    fn default() -> Self {
        ConsoleDecoder::new()
    }
}

impl ConsoleDecoder {
    /// Creates a decoder in the data state with eight column tabs and wrap on.
    pub fn new() -> Self {
        Self {
            state: ConsoleState::Data,
            sequence: Vec::new(),
            charset: CharsetState::default(),
            style: 0,
            tab_size: 8,
            wrap: true,
            last: ConsoleCommand::default(),
        }
    }

    /// Sets the tab stop width. Zero is treated as one.
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size.max(1);
        self
    }

    /// Auto wrap to the next row when writing past the last column.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Current parser state.
    pub fn state(&self) -> ConsoleState {
        self.state
    }

    /// Raw bytes of the sequence being collected, or of the last one until
    /// the next data byte arrives.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Character sets designated to the shift in and shift out slots.
    pub fn charset(&self) -> CharsetState {
        self.charset
    }

    /// Last SGR attribute selected.
    pub fn style(&self) -> u16 {
        self.style
    }

    /// Command produced by the most recent byte.
    pub fn last_command(&self) -> &ConsoleCommand {
        &self.last
    }

    /// Returns to the data state, keeping the tab size and wrap settings.
    pub fn reset(&mut self) {
        *self = ConsoleDecoder::new()
            .with_tab_size(self.tab_size)
            .with_wrap(self.wrap);
    }

    /// Feeds one byte, already stripped of Telnet framing.
    pub fn next(&mut self, byte: u8, screen: &mut VirtualScreen) -> ConsoleCommand {
        let command = match self.state {
            ConsoleState::Data => self.data(byte, screen),
            ConsoleState::CollectingEscape => self.escape(byte, screen),
            ConsoleState::CollectingAmbiguousEscape => self.ambiguous(byte, screen),
        };
        self.last = command.clone();
        command
    }

    fn data(&mut self, byte: u8, screen: &mut VirtualScreen) -> ConsoleCommand {
        self.sequence.clear();
        let cursor = screen.cursor();
        match byte {
            NUL => ConsoleCommand::Null,
            BELL => ConsoleCommand::Bell,
            TAB => {
                let stop = cursor.col - cursor.col % self.tab_size + self.tab_size;
                screen.set_cursor(cursor.row, stop);
                ConsoleCommand::Tab
            }
            SI => {
                self.charset.shift_in();
                ConsoleCommand::ShiftIn
            }
            SO => {
                self.charset.shift_out();
                ConsoleCommand::ShiftOut
            }
            BS => {
                if cursor.col > 0 {
                    screen.set_cursor(cursor.row, cursor.col - 1);
                } else if cursor.row > 0 {
                    screen.set_cursor(cursor.row - 1, screen.size().last_col());
                }
                screen.put_char(' ');
                ConsoleCommand::Backspace
            }
            LF => {
                screen.move_cursor(1, 0);
                ConsoleCommand::LineFeed
            }
            CR => {
                screen.set_cursor(cursor.row, 0);
                ConsoleCommand::CarriageReturn
            }
            ESC => {
                self.state = ConsoleState::CollectingEscape;
                ConsoleCommand::Escape
            }
            byte => {
                let glyph = if self.charset.active == Charset::Ascii {
                    char::from(byte)
                } else {
                    char::REPLACEMENT_CHARACTER
                };
                screen.put_char(glyph);
                let col = cursor.col + 1;
                if self.wrap && col >= screen.cols() {
                    screen.set_cursor(cursor.row + 1, 0);
                } else {
                    screen.set_cursor(cursor.row, col);
                }
                ConsoleCommand::Print(glyph)
            }
        }
    }

    fn escape(&mut self, byte: u8, screen: &mut VirtualScreen) -> ConsoleCommand {
        if self.sequence.len() >= MAX_SEQUENCE_LENGTH {
            return self.discard();
        }
        self.sequence.push(byte);
        if byte.is_ascii_digit() || matches!(byte, b';' | b'[' | b'?' | b']') {
            return ConsoleCommand::Pending;
        }

        self.state = ConsoleState::Data;
        let body = &self.sequence[..self.sequence.len() - 1];
        let command = match byte {
            b'H' | b'f' => match body {
                b"" | b"[" => {
                    screen.set_cursor(0, 0);
                    ConsoleCommand::Home
                }
                _ => match csi_params(body).as_deref() {
                    Some(&[row, col]) => {
                        screen.set_cursor(row.saturating_sub(1), col.saturating_sub(1));
                        let cursor = screen.cursor();
                        ConsoleCommand::CursorPosition {
                            row: cursor.row,
                            col: cursor.col,
                        }
                    }
                    _ => self.unknown(),
                },
            },
            b'm' => match csi_params(body) {
                Some(params) => {
                    let last = params.last().copied().unwrap_or(0);
                    self.style = u16::try_from(last).unwrap_or(u16::MAX);
                    ConsoleCommand::SelectGraphicRendition(self.style)
                }
                None => self.unknown(),
            },
            b'K' => match erase_mode(body) {
                Some(mode) => {
                    let cursor = screen.cursor();
                    let last_col = screen.size().last_col();
                    let region = match mode {
                        EraseMode::ToEnd => Region::new(cursor.row, cursor.col, cursor.row, last_col),
                        EraseMode::ToStart => Region::new(cursor.row, 0, cursor.row, cursor.col),
                        EraseMode::All => Region::new(cursor.row, 0, cursor.row, last_col),
                    };
                    screen.clear(region, ' ');
                    ConsoleCommand::EraseLine(mode)
                }
                None => self.unknown(),
            },
            b'J' => match erase_mode(body) {
                Some(mode) => {
                    let cursor = screen.cursor();
                    let size = screen.size();
                    let region = match mode {
                        EraseMode::ToEnd => {
                            Region::new(cursor.row, cursor.col, size.last_row(), size.last_col())
                        }
                        EraseMode::ToStart => Region::new(0, 0, cursor.row, cursor.col),
                        EraseMode::All => Region::new(0, 0, size.last_row(), size.last_col()),
                    };
                    screen.clear(region, ' ');
                    ConsoleCommand::EraseDisplay(mode)
                }
                None => self.unknown(),
            },
            b'A' | b'B' | b'C' | b'D' => match count(body) {
                Some(n) => {
                    let delta = isize::try_from(n).unwrap_or(isize::MAX);
                    match byte {
                        b'A' => {
                            screen.move_cursor(-delta, 0);
                            ConsoleCommand::CursorUp(n)
                        }
                        b'B' => {
                            screen.move_cursor(delta, 0);
                            ConsoleCommand::CursorDown(n)
                        }
                        b'C' => {
                            screen.move_cursor(0, delta);
                            ConsoleCommand::CursorRight(n)
                        }
                        _ => {
                            screen.move_cursor(0, -delta);
                            ConsoleCommand::CursorLeft(n)
                        }
                    }
                }
                None => self.unknown(),
            },
            b'I' if body.is_empty() => {
                screen.move_cursor(-1, 0);
                ConsoleCommand::ReverseLineFeed
            }
            b'=' | b'>' | b'<' if body.is_empty() => ConsoleCommand::Unsupported(byte),
            b'Y' | b'+' | b'#' | b'(' | b')' if body.is_empty() => {
                self.state = ConsoleState::CollectingAmbiguousEscape;
                ConsoleCommand::Pending
            }
            _ => self.unknown(),
        };
        if command != ConsoleCommand::Pending {
            trace!(
                "Console sequence ESC {}: {:?}",
                String::from_utf8_lossy(&self.sequence),
                command
            );
        }
        command
    }

    fn ambiguous(&mut self, byte: u8, screen: &mut VirtualScreen) -> ConsoleCommand {
        if self.sequence.len() >= MAX_SEQUENCE_LENGTH {
            return self.discard();
        }
        self.sequence.push(byte);
        let command = match *self.sequence.as_slice() {
            [b'Y', row, col] => {
                // VT52 addresses are offset by 32 and one based.
                screen.set_cursor(usize::from(row).saturating_sub(33), usize::from(col).saturating_sub(33));
                let cursor = screen.cursor();
                ConsoleCommand::CursorPosition {
                    row: cursor.row,
                    col: cursor.col,
                }
            }
            [b'+', b'>', _] => self.unknown(),
            [b'#', digit] if digit.is_ascii_digit() => self.unknown(),
            [b'(', id] if is_word(id) => {
                self.charset.shift_in = Charset::identify(id);
                ConsoleCommand::SelectCharset {
                    slot: CharsetSlot::ShiftIn,
                    charset: self.charset.shift_in,
                }
            }
            [b')', id] if is_word(id) => {
                self.charset.shift_out = Charset::identify(id);
                ConsoleCommand::SelectCharset {
                    slot: CharsetSlot::ShiftOut,
                    charset: self.charset.shift_out,
                }
            }
            [b'#' | b'(' | b')', _] => self.unknown(),
            [b'+', second] if second != b'>' => self.unknown(),
            ref collected if collected.len() >= 3 => self.unknown(),
            _ => return ConsoleCommand::Pending,
        };
        self.state = ConsoleState::Data;
        trace!(
            "Console sequence ESC {}: {:?}",
            String::from_utf8_lossy(&self.sequence),
            command
        );
        command
    }

    fn unknown(&self) -> ConsoleCommand {
        ConsoleCommand::Unknown(String::from_utf8_lossy(&self.sequence).into_owned())
    }

    fn discard(&mut self) -> ConsoleCommand {
        let command = self.unknown();
        trace!("Console sequence exceeded {MAX_SEQUENCE_LENGTH} bytes, discarding");
        self.state = ConsoleState::Data;
        self.sequence.clear();
        command
    }
}

fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Parses `[n;n;...` into its numbers. `[` alone yields no numbers.
fn csi_params(body: &[u8]) -> Option<Vec<usize>> {
    let params = body.strip_prefix(b"[")?;
    if params.is_empty() {
        return Some(Vec::new());
    }
    params
        .split(|byte| *byte == b';')
        .map(|param| {
            if param.is_empty() || !param.iter().all(u8::is_ascii_digit) {
                return None;
            }
            std::str::from_utf8(param).ok()?.parse::<usize>().ok()
        })
        .collect()
}

/// Parameter of EL/ED: none or a single `0`, `1` or `2`.
fn erase_mode(body: &[u8]) -> Option<EraseMode> {
    match body {
        b"[" | b"[0" => Some(EraseMode::ToEnd),
        b"[1" => Some(EraseMode::ToStart),
        b"[2" => Some(EraseMode::All),
        _ => None,
    }
}

/// Repeat count of a cursor movement: bare VT52 or `[n`, defaulting to one.
fn count(body: &[u8]) -> Option<usize> {
    if body.is_empty() {
        return Some(1);
    }
    match csi_params(body)?.as_slice() {
        [] | [0] => Some(1),
        [n] => Some(*n),
        _ => None,
    }
}
