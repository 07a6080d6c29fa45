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

//! Symbolic `<NAME>` tags in outgoing text.
//!
//! Tags name Telnet commands (`<IAC>`, `<DO>`), Telnet options with an `OPT_`
//! prefix (`<OPT_TERMTYPE>`), the markers `<NUL>`, `<IS>` and `<SEND>`, and
//! keyboard keys (`<CR>`, `<F3>`, `<UP>`). Anything between angle brackets
//! that is not a known tag is sent literally.

use vtscrape_telnetcodec::{TelnetOption, consts};
use vtscrape_vtcodec::keys;

const COMMANDS: [(&str, u8); 7] = [
    ("SE", consts::SE),
    ("SB", consts::SB),
    ("WILL", consts::WILL),
    ("WONT", consts::WONT),
    ("DO", consts::DO),
    ("DONT", consts::DONT),
    ("IAC", consts::IAC),
];

const MARKERS: [(&str, u8); 3] = [("NUL", consts::NUL), ("IS", consts::IS), ("SEND", consts::SEND)];

/// Bytes for one tag name, without the angle brackets.
pub fn lookup(name: &str) -> Option<Vec<u8>> {
    if let Some(option) = name.strip_prefix("OPT_") {
        return TelnetOption::NAMED
            .iter()
            .find(|candidate| candidate.tag_name() == Some(option))
            .map(|candidate| vec![candidate.to_u8()]);
    }
    COMMANDS
        .iter()
        .chain(MARKERS.iter())
        .find(|(tag, _)| *tag == name)
        .map(|(_, byte)| vec![*byte])
        .or_else(|| keys::key(name).map(<[u8]>::to_vec))
}

/// Replaces every known tag in `text` with its bytes.
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.extend_from_slice(&rest.as_bytes()[..open]);
        let tail = &rest[open + 1..];
        match tail.find(['<', '>']) {
            Some(close) if tail.as_bytes()[close] == b'>' => match lookup(&tail[..close]) {
                Some(bytes) => {
                    out.extend_from_slice(&bytes);
                    rest = &tail[close + 1..];
                }
                None => {
                    out.push(b'<');
                    rest = tail;
                }
            },
            _ => {
                out.push(b'<');
                rest = tail;
            }
        }
    }
    out.extend_from_slice(rest.as_bytes());
    out
}
