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

//! Telnet command, option and subnegotiation marker bytes.

/// Subnegotiation End
pub const SE: u8 = 0xF0;
/// Subnegotiation Begin
pub const SB: u8 = 0xFA;
/// Sender wants to enable an option
pub const WILL: u8 = 0xFB;
/// Sender refuses to enable an option
pub const WONT: u8 = 0xFC;
/// Sender asks the receiver to enable an option
pub const DO: u8 = 0xFD;
/// Sender asks the receiver to disable an option
pub const DONT: u8 = 0xFE;
/// Interpret As Command
pub const IAC: u8 = 0xFF;

/// Subnegotiation qualifier: the payload that follows is the value.
pub const IS: u8 = 0x00;
/// Subnegotiation qualifier: please send your value.
pub const SEND: u8 = 0x01;
/// Null byte, used as the high byte of small NAWS dimensions.
pub const NUL: u8 = 0x00;

/// Maximum number of bytes buffered for a single Telnet command.
///
/// A subnegotiation that never sees its closing `SE` is abandoned once it
/// reaches this size and the decoder returns to the data state.
pub const MAX_COMMAND_LENGTH: usize = 4096;

/// Telnet option codes understood by the negotiation table.
pub mod option {
    /// Binary Transmission
    pub const BINARY: u8 = 0x00;
    /// Echo
    pub const ECHO: u8 = 0x01;
    /// Suppress Go Ahead
    pub const SGA: u8 = 0x03;
    /// Status
    pub const STATUS: u8 = 0x05;
    /// Data Entry Terminal
    pub const DET: u8 = 0x14;
    /// Terminal Type
    pub const TERMTYPE: u8 = 0x18;
    /// Negotiate About Window Size
    pub const NAWS: u8 = 0x1F;
    /// Terminal Speed
    pub const TSPEED: u8 = 0x20;
    /// Remote Flow Control
    pub const REMOTEFLOW: u8 = 0x21;
    /// Linemode
    pub const LINEMODE: u8 = 0x22;
    /// Environment (old)
    pub const ENVIRON: u8 = 0x24;
    /// New Environment
    pub const NEWENV: u8 = 0x27;
    /// Extended Options List
    pub const EXOPL: u8 = 0xFF;
}
