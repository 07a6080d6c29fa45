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


use crate::Charset;
use enum_kinds::EnumKind;

/// Which part of the line or display an erase sequence clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EraseMode {
    /// From the cursor to the end (`0` or no parameter).
    ToEnd,
    /// From the start to the cursor (`1`).
    ToStart,
    /// Everything (`2`).
    All,
}

/// Charset slot assigned by an SCS sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharsetSlot {
    /// `ESC ( id`, activated by SI.
    ShiftIn,
    /// `ESC ) id`, activated by SO.
    ShiftOut,
}

/// What one byte did to the console, kept for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, EnumKind)]
#[enum_kind(ConsoleCommandKind, derive(Hash))]
pub enum ConsoleCommand {
    /// An escape sequence is still being collected.
    #[default]
    Pending,
    /// A glyph was written and the cursor advanced.
    Print(char),
    Null,
    Bell,
    Tab,
    ShiftIn,
    ShiftOut,
    Backspace,
    LineFeed,
    CarriageReturn,
    /// `ESC` started a sequence.
    Escape,
    Home,
    /// Cursor placed at this zero based position.
    CursorPosition { row: usize, col: usize },
    /// Text style set to the last SGR parameter.
    SelectGraphicRendition(u16),
    EraseLine(EraseMode),
    EraseDisplay(EraseMode),
    CursorUp(usize),
    CursorDown(usize),
    CursorRight(usize),
    CursorLeft(usize),
    ReverseLineFeed,
    /// Recognised VT52 mode switch with no screen effect, by final byte.
    Unsupported(u8),
    SelectCharset { slot: CharsetSlot, charset: Charset },
    /// Unrecognised sequence, discarded.
    Unknown(String),
}
