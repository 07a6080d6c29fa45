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

//! # VTScrape VT Codec
//!
//! A VT100/VT52 console decoder that paints a
//! [`VirtualScreen`](vtscrape_terminal::VirtualScreen).
//!
//! Feed [`ConsoleDecoder::next`] the data bytes left after Telnet framing has
//! been stripped. Printable bytes are written under the cursor, control bytes
//! move it, and escape sequences are collected until they can be dispatched.
//! Each call returns the [`ConsoleCommand`] the byte completed, which callers
//! may log or ignore.
//!
//! ```rust
//! use vtscrape_terminal::{CursorPosition, Region, VirtualScreen};
//! use vtscrape_vtcodec::ConsoleDecoder;
//!
//! let mut screen = VirtualScreen::create(24, 80, ' ');
//! let mut decoder = ConsoleDecoder::new();
//! for byte in b"\x1b[2J\x1b[11;1HSELECT OPTION" {
//!     decoder.next(*byte, &mut screen);
//! }
//! assert_eq!(screen.string(Region::new(10, 0, 10, 12), "\n"), "SELECT OPTION");
//! assert_eq!(screen.cursor(), CursorPosition::new(10, 13));
//! ```
//!
//! The [`keys`] module holds the byte sequences of the keys a VT100 keyboard
//! sends, for scripting input.

mod charset;
mod command;
mod decoder;
pub mod keys;

pub use self::charset::{Charset, CharsetState};
pub use self::command::{CharsetSlot, ConsoleCommand, ConsoleCommandKind, EraseMode};
pub use self::decoder::{ConsoleDecoder, ConsoleState, MAX_SEQUENCE_LENGTH};
