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


//! Byte sequences a VT100 keyboard sends, addressable by tag name.

pub const UP: &[u8] = b"\x1b[A";
pub const DOWN: &[u8] = b"\x1b[B";
pub const RIGHT: &[u8] = b"\x1b[C";
pub const LEFT: &[u8] = b"\x1b[D";
pub const HOME: &[u8] = b"\x1b[1~";
pub const INS: &[u8] = b"\x1b[2~";
pub const DEL: &[u8] = b"\x1b[3~";
pub const END: &[u8] = b"\x1b[4~";
pub const PGUP: &[u8] = b"\x1b[5~";
pub const PGDN: &[u8] = b"\x1b[6~";

pub const ANSI_UP: &[u8] = b"\x1bOA";
pub const ANSI_DOWN: &[u8] = b"\x1bOB";
pub const ANSI_RIGHT: &[u8] = b"\x1bOC";
pub const ANSI_LEFT: &[u8] = b"\x1bOD";

pub const ALT: &[u8] = b"\x01";
pub const NUL: &[u8] = b"\x00";
pub const BS: &[u8] = b"\x08";
pub const BELL: &[u8] = b"\x07";
pub const TAB: &[u8] = b"\x09";
pub const LF: &[u8] = b"\x0a";
pub const CR: &[u8] = b"\x0d";
pub const ESC: &[u8] = b"\x1b";

/// Every key by tag name. Function keys follow the VT220 numbering, which
/// skips 16, 22, 27 and 30.
pub const KEYS: &[(&str, &[u8])] = &[
    ("UP", UP),
    ("DOWN", DOWN),
    ("RIGHT", RIGHT),
    ("LEFT", LEFT),
    ("HOME", HOME),
    ("INS", INS),
    ("DEL", DEL),
    ("END", END),
    ("PGUP", PGUP),
    ("PGDN", PGDN),
    ("ANSI_UP", ANSI_UP),
    ("ANSI_DOWN", ANSI_DOWN),
    ("ANSI_RIGHT", ANSI_RIGHT),
    ("ANSI_LEFT", ANSI_LEFT),
    ("F1", b"\x1b[11~"),
    ("F2", b"\x1b[12~"),
    ("F3", b"\x1b[13~"),
    ("F4", b"\x1b[14~"),
    ("F5", b"\x1b[15~"),
    ("F6", b"\x1b[17~"),
    ("F7", b"\x1b[18~"),
    ("F8", b"\x1b[19~"),
    ("F9", b"\x1b[20~"),
    ("F10", b"\x1b[21~"),
    ("F11", b"\x1b[23~"),
    ("F12", b"\x1b[24~"),
    ("F13", b"\x1b[25~"),
    ("F14", b"\x1b[26~"),
    ("F15", b"\x1b[28~"),
    ("F16", b"\x1b[29~"),
    ("F17", b"\x1b[31~"),
    ("F18", b"\x1b[32~"),
    ("F19", b"\x1b[33~"),
    ("F20", b"\x1b[34~"),
    ("F21", b"\x1b[35~"),
    ("F22", b"\x1b[36~"),
    ("F23", b"\x1b[37~"),
    ("F24", b"\x1b[38~"),
    ("ALT", ALT),
    ("NUL", NUL),
    ("BS", BS),
    ("BELL", BELL),
    ("TAB", TAB),
    ("LF", LF),
    ("CR", CR),
    ("ESC", ESC),
];

/// Looks up a key by tag name, e.g. `"F3"` or `"PGDN"`.
pub fn key(name: &str) -> Option<&'static [u8]> {
    KEYS.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, bytes)| *bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys() {
        assert_eq!(key("F1"), Some(&b"\x1b[11~"[..]));
        assert_eq!(key("F6"), Some(&b"\x1b[17~"[..]));
        assert_eq!(key("F24"), Some(&b"\x1b[38~"[..]));
        assert_eq!(key("F25"), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key("CR"), Some(CR));
        assert_eq!(key("ESC"), Some(&[0x1b][..]));
    }
}
