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

use crate::TelnetOption;
use crate::consts;
use std::fmt::{Display, Formatter};

/// One classified byte of a Telnet command.
///
/// A completed [`TelnetCommand`] is a sequence of tokens which the negotiation
/// table matches with slice patterns.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelnetToken {
    /// `IAC`
    Iac,
    /// `SE`
    Se,
    /// `SB`
    Sb,
    /// `WILL`
    Will,
    /// `WONT`
    Wont,
    /// `DO`
    Do,
    /// `DONT`
    Dont,
    /// Any other command byte following `IAC`.
    Command(u8),
    /// Option byte.
    Opt(TelnetOption),
    /// Subnegotiation `IS` qualifier.
    Is,
    /// Subnegotiation `SEND` qualifier.
    Send,
    /// Subnegotiation payload byte.
    Data(u8),
}

impl TelnetToken {
    /// Classifies the byte directly after `IAC`.
    pub fn command(byte: u8) -> TelnetToken {
        match byte {
            consts::IAC => TelnetToken::Iac,
            consts::SE => TelnetToken::Se,
            consts::SB => TelnetToken::Sb,
            consts::WILL => TelnetToken::Will,
            consts::WONT => TelnetToken::Wont,
            consts::DO => TelnetToken::Do,
            consts::DONT => TelnetToken::Dont,
            other => TelnetToken::Command(other),
        }
    }

    /// Raw wire byte of this token.
    pub fn to_u8(&self) -> u8 {
        match self {
            TelnetToken::Iac => consts::IAC,
            TelnetToken::Se => consts::SE,
            TelnetToken::Sb => consts::SB,
            TelnetToken::Will => consts::WILL,
            TelnetToken::Wont => consts::WONT,
            TelnetToken::Do => consts::DO,
            TelnetToken::Dont => consts::DONT,
            TelnetToken::Command(byte) | TelnetToken::Data(byte) => *byte,
            TelnetToken::Opt(option) => option.to_u8(),
            TelnetToken::Is => consts::IS,
            TelnetToken::Send => consts::SEND,
        }
    }
}

impl Display for TelnetToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetToken::Iac => write!(f, "<IAC>"),
            TelnetToken::Se => write!(f, "<SE>"),
            TelnetToken::Sb => write!(f, "<SB>"),
            TelnetToken::Will => write!(f, "<WILL>"),
            TelnetToken::Wont => write!(f, "<WONT>"),
            TelnetToken::Do => write!(f, "<DO>"),
            TelnetToken::Dont => write!(f, "<DONT>"),
            TelnetToken::Command(byte) | TelnetToken::Data(byte) => write!(f, "<{byte}>"),
            TelnetToken::Opt(option) => write!(f, "<{option}>"),
            TelnetToken::Is => write!(f, "<IS>"),
            TelnetToken::Send => write!(f, "<SEND>"),
        }
    }
}

/// A completed Telnet command as received, both classified and raw.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TelnetCommand {
    tokens: Vec<TelnetToken>,
    raw: Vec<u8>,
}

impl TelnetCommand {
    /// Creates an empty command.
    pub fn new() -> TelnetCommand {
        TelnetCommand::default()
    }

    /// Appends a classified byte.
    pub fn push(&mut self, token: TelnetToken, byte: u8) {
        self.tokens.push(token);
        self.raw.push(byte);
    }

    /// Classified tokens in arrival order.
    pub fn tokens(&self) -> &[TelnetToken] {
        &self.tokens
    }

    /// Bytes exactly as they arrived.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Number of bytes buffered.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// True when nothing has been buffered.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.tokens.clear();
        self.raw.clear();
    }
}

impl Display for TelnetCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            Display::fmt(token, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TelnetCommand, TelnetToken};
    use crate::{TelnetOption, consts};

    #[test]
    fn test_command_bytes_classify() {
        assert_eq!(TelnetToken::command(consts::DO), TelnetToken::Do);
        assert_eq!(TelnetToken::command(consts::SB), TelnetToken::Sb);
        assert_eq!(TelnetToken::command(0xF1), TelnetToken::Command(0xF1));
    }

    #[test]
    fn test_command_renders_as_tags() {
        let mut command = TelnetCommand::new();
        command.push(TelnetToken::Iac, consts::IAC);
        command.push(TelnetToken::Do, consts::DO);
        command.push(TelnetToken::Opt(TelnetOption::NAWS), consts::option::NAWS);
        assert_eq!(command.to_string(), "<IAC><DO><OPT_NAWS>");
        assert_eq!(command.raw(), &[consts::IAC, consts::DO, consts::option::NAWS]);
    }

    #[test]
    fn test_payload_bytes_render_numerically() {
        assert_eq!(TelnetToken::Data(86).to_string(), "<86>");
        assert_eq!(TelnetToken::Data(86).to_u8(), 86);
    }
}
