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

use crate::{TelnetCommand, TelnetOption, TelnetToken, consts};
use tracing::{debug, warn};

/// Decoder position inside the Telnet framing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TelnetState {
    /// Plain data, bytes pass through.
    #[default]
    Data,
    /// `IAC` seen, waiting for the command byte.
    ExpectCommand,
    /// Command seen, waiting for its single option byte.
    ExpectOption,
    /// Inside `SB`, before any `IS`/`SEND` qualifier.
    ExpectSubnegOption,
    /// Inside `SB` after a qualifier, collecting payload until `SE`.
    ExpectSubnegData,
}

/// What the decoder did with one input byte.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TelnetOutput {
    /// A literal data byte for the console layer.
    Data(u8),
    /// The byte was consumed as part of an unfinished command.
    Framing,
    /// The byte completed a command.
    Command(TelnetCommand),
}

/// Byte at a time Telnet framing decoder.
///
/// Transitions are a pure function of the current [`TelnetState`] and the
/// input byte. Negotiation is left to [`crate::TelnetNegotiator`], which reads
/// the completed [`TelnetCommand`].
#[derive(Clone, Debug, Default)]
pub struct TelnetDecoder {
    state: TelnetState,
    command: TelnetCommand,
}

impl TelnetDecoder {
    /// Creates a decoder in the [`TelnetState::Data`] state.
    pub fn new() -> TelnetDecoder {
        TelnetDecoder::default()
    }

    /// Current framing state.
    pub fn state(&self) -> TelnetState {
        self.state
    }

    /// Command bytes buffered so far.
    pub fn pending(&self) -> &TelnetCommand {
        &self.command
    }

    /// Drops any partial command and returns to [`TelnetState::Data`].
    pub fn reset(&mut self) {
        self.state = TelnetState::Data;
        self.command.clear();
    }

    /// Feeds one byte through the state machine.
    pub fn next(&mut self, byte: u8) -> TelnetOutput {
        if self.state != TelnetState::Data && self.command.len() >= consts::MAX_COMMAND_LENGTH {
            warn!(
                "Telnet command exceeded {} bytes, discarding {}",
                consts::MAX_COMMAND_LENGTH,
                self.command
            );
            self.reset();
        }
        match (self.state, byte) {
            (TelnetState::Data, consts::IAC) => {
                self.command.clear();
                self.command.push(TelnetToken::Iac, byte);
                self.state = TelnetState::ExpectCommand;
                TelnetOutput::Framing
            }
            (TelnetState::Data, byte) => TelnetOutput::Data(byte),
            (TelnetState::ExpectCommand, consts::IAC) => {
                self.reset();
                TelnetOutput::Data(consts::IAC)
            }
            (TelnetState::ExpectCommand, consts::SE | consts::SB) => {
                self.command.push(TelnetToken::command(byte), byte);
                self.state = TelnetState::ExpectSubnegOption;
                TelnetOutput::Framing
            }
            (TelnetState::ExpectCommand, byte) => {
                self.command.push(TelnetToken::command(byte), byte);
                self.state = TelnetState::ExpectOption;
                TelnetOutput::Framing
            }
            (TelnetState::ExpectOption, byte) => {
                self.command
                    .push(TelnetToken::Opt(TelnetOption::from(byte)), byte);
                self.complete()
            }
            (TelnetState::ExpectSubnegOption, consts::SE) => {
                self.command.push(TelnetToken::Se, byte);
                self.complete()
            }
            (TelnetState::ExpectSubnegOption, consts::IAC) => {
                self.command.push(TelnetToken::Iac, byte);
                TelnetOutput::Framing
            }
            (TelnetState::ExpectSubnegOption, consts::IS | consts::SEND)
                if self.has_subneg_option() =>
            {
                let token = if byte == consts::IS {
                    TelnetToken::Is
                } else {
                    TelnetToken::Send
                };
                self.command.push(token, byte);
                self.state = TelnetState::ExpectSubnegData;
                TelnetOutput::Framing
            }
            (TelnetState::ExpectSubnegOption, byte) => {
                self.command
                    .push(TelnetToken::Opt(TelnetOption::from(byte)), byte);
                TelnetOutput::Framing
            }
            (TelnetState::ExpectSubnegData, consts::SE) => {
                self.command.push(TelnetToken::Se, byte);
                self.complete()
            }
            (TelnetState::ExpectSubnegData, consts::IAC) => {
                self.command.push(TelnetToken::Iac, byte);
                TelnetOutput::Framing
            }
            (TelnetState::ExpectSubnegData, byte) => {
                self.command.push(TelnetToken::Data(byte), byte);
                TelnetOutput::Framing
            }
        }
    }

    // The first byte after SB names the option even when it collides with IS/SEND.
    fn has_subneg_option(&self) -> bool {
        self.command
            .tokens()
            .iter()
            .any(|token| matches!(token, TelnetToken::Opt(_)))
    }

    fn complete(&mut self) -> TelnetOutput {
        let command = std::mem::take(&mut self.command);
        self.state = TelnetState::Data;
        debug!("Telnet command received: {}", command);
        TelnetOutput::Command(command)
    }
}
