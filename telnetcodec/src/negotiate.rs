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

use crate::{TelnetCommand, TelnetOption, TelnetToken};
use bytes::{BufMut, BytesMut};
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Bytes to send back in answer to a completed command.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TelnetReply {
    tokens: Vec<TelnetToken>,
}

impl TelnetReply {
    fn push(mut self, token: TelnetToken) -> Self {
        self.tokens.push(token);
        self
    }

    fn negotiate(verb: TelnetToken, option: TelnetOption) -> Self {
        TelnetReply::default()
            .push(TelnetToken::Iac)
            .push(verb)
            .push(TelnetToken::Opt(option))
    }

    fn append(mut self, other: TelnetReply) -> Self {
        self.tokens.extend(other.tokens);
        self
    }

    /// Reply tokens in send order.
    pub fn tokens(&self) -> &[TelnetToken] {
        &self.tokens
    }

    /// Wire bytes of the reply.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.tokens.iter().map(TelnetToken::to_u8).collect()
    }
}

impl Display for TelnetReply {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            Display::fmt(token, f)?;
        }
        Ok(())
    }
}

/// Fixed negotiation table for a terminal client.
///
/// Accepts SGA and server echo, announces the terminal type and window size
/// when asked, refuses STATUS, and answers every other `DO`/`DONT` with
/// `WONT` for the same option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TelnetNegotiator {
    terminal_type: String,
    cols: u16,
    rows: u16,
}

impl Default for TelnetNegotiator {
    fn default() -> Self {
        TelnetNegotiator::new("VT100", 80, 24)
    }
}

impl TelnetNegotiator {
    /// Creates a negotiator announcing `terminal_type` and a `cols` by `rows` window.
    pub fn new(terminal_type: impl Into<String>, cols: u16, rows: u16) -> TelnetNegotiator {
        TelnetNegotiator {
            terminal_type: terminal_type.into(),
            cols,
            rows,
        }
    }

    /// Terminal type sent for TERMTYPE.
    pub fn terminal_type(&self) -> &str {
        &self.terminal_type
    }

    /// Window size sent for NAWS, as `(cols, rows)`.
    pub fn window_size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Looks up the reply for a completed command.
    pub fn reply(&self, command: &TelnetCommand) -> Option<TelnetReply> {
        use TelnetOption as O;
        use TelnetToken as T;
        let reply = match command.tokens() {
            [T::Iac, T::Do, T::Opt(O::TTYPE)] => {
                TelnetReply::negotiate(T::Will, O::TTYPE).append(self.terminal_type_is())
            }
            [T::Iac, T::Do, T::Opt(O::NAWS)] => {
                TelnetReply::negotiate(T::Will, O::NAWS).append(self.window_size_is())
            }
            [T::Iac, T::Will, T::Opt(O::Status)] => TelnetReply::negotiate(T::Dont, O::Status),
            [T::Iac, T::Will, T::Opt(O::SuppressGoAhead)] => {
                TelnetReply::negotiate(T::Do, O::SuppressGoAhead)
            }
            [T::Iac, T::Will, T::Opt(O::Echo)] => TelnetReply::negotiate(T::Do, O::Echo),
            [T::Iac, T::Dont, T::Opt(O::Echo)] => TelnetReply::negotiate(T::Wont, O::Echo),
            [T::Iac, T::Sb, T::Opt(O::TTYPE), T::Send, T::Iac, T::Se] => self.terminal_type_is(),
            [T::Iac, T::Sb, T::Opt(O::NAWS), T::Send, T::Iac, T::Se] => self.window_size_is(),
            [T::Iac, T::Do | T::Dont, T::Opt(option)] => TelnetReply::negotiate(T::Wont, *option),
            _ => return None,
        };
        debug!("Telnet reply to {}: {}", command, reply);
        Some(reply)
    }

    fn terminal_type_is(&self) -> TelnetReply {
        let reply = TelnetReply::default()
            .push(TelnetToken::Iac)
            .push(TelnetToken::Sb)
            .push(TelnetToken::Opt(TelnetOption::TTYPE))
            .push(TelnetToken::Is);
        self.terminal_type
            .bytes()
            .fold(reply, |reply, byte| reply.push(TelnetToken::Data(byte)))
            .push(TelnetToken::Iac)
            .push(TelnetToken::Se)
    }

    fn window_size_is(&self) -> TelnetReply {
        let reply = TelnetReply::default()
            .push(TelnetToken::Iac)
            .push(TelnetToken::Sb)
            .push(TelnetToken::Opt(TelnetOption::NAWS));
        let mut payload = BytesMut::with_capacity(4);
        payload.put_u16(self.cols);
        payload.put_u16(self.rows);
        payload
            .iter()
            .copied()
            .fold(reply, |reply, byte| {
                // 0xFF inside a subnegotiation is sent doubled.
                if byte == crate::consts::IAC {
                    reply.push(TelnetToken::Data(byte)).push(TelnetToken::Data(byte))
                } else {
                    reply.push(TelnetToken::Data(byte))
                }
            })
            .push(TelnetToken::Iac)
            .push(TelnetToken::Se)
    }
}
