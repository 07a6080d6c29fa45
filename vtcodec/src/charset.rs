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


/// Character sets selectable with SCS sequences.
///
/// The discriminants are the numeric charset ids reported in diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Charset {
    /// US ASCII, the only set whose glyphs are rendered.
    #[default]
    Ascii = 0,
    /// United Kingdom national set.
    Uk = 1,
    Ansi = 2,
    /// `0`: special graphics.
    G0Special = 3,
    /// `1`: alternate character ROM, standard set.
    G1Alternate = 4,
    /// `2`: alternate character ROM, special graphics.
    G2SpecialGraphics = 5,
}

impl Charset {
    /// Maps the final byte of an SCS sequence. Unrecognised ids select ASCII.
    pub fn identify(id: u8) -> Charset {
        match id {
            b'A' => Charset::Uk,
            b'B' => Charset::Ascii,
            b'0' => Charset::G0Special,
            b'1' => Charset::G1Alternate,
            b'2' => Charset::G2SpecialGraphics,
            _ => Charset::Ascii,
        }
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }
}

/// Active charset and the two slots toggled by SI/SO.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharsetState {
    pub active: Charset,
    /// Selected by `ESC ( id`, activated by SI (0x0F).
    pub shift_in: Charset,
    /// Selected by `ESC ) id`, activated by SO (0x0E).
    pub shift_out: Charset,
}

impl CharsetState {
    pub fn shift_in(&mut self) {
        self.active = self.shift_in;
    }

    pub fn shift_out(&mut self) {
        self.active = self.shift_out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_charset_ids() {
        assert_eq!(Charset::identify(b'A'), Charset::Uk);
        assert_eq!(Charset::identify(b'B'), Charset::Ascii);
        assert_eq!(Charset::identify(b'0').id(), 3);
        assert_eq!(Charset::identify(b'2').id(), 5);
        assert_eq!(Charset::identify(b'Z'), Charset::Ascii);
    }

    #[test]
    fn test_shift_toggles_active() {
        let mut state = CharsetState {
            shift_out: Charset::G0Special,
            ..CharsetState::default()
        };
        state.shift_out();
        assert_eq!(state.active, Charset::G0Special);
        state.shift_in();
        assert_eq!(state.active, Charset::Ascii);
    }
}
