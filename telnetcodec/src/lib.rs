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

//! # VTScrape Telnet Codec
//!
//! Byte oriented Telnet framing for a screen scraping client.
//!
//! ## Overview
//!
//! [`TelnetDecoder`] consumes one byte at a time and reports whether the byte
//! is literal data, part of an unfinished command, or the byte that completed
//! a [`TelnetCommand`]. Completed commands are handed to a
//! [`TelnetNegotiator`], a fixed table that answers what a VT100 class client
//! is expected to answer:
//!
//! - `DO TERMTYPE` and `SB TERMTYPE SEND` announce the configured terminal type
//! - `DO NAWS` and `SB NAWS SEND` announce the configured window size
//! - `WILL SGA` and `WILL ECHO` are accepted, `WILL STATUS` is refused
//! - any other `DO`/`DONT` is answered with `WONT`
//!
//! ## Usage Example
//!
//! ```rust
//! use vtscrape_telnetcodec::{TelnetDecoder, TelnetNegotiator, TelnetOutput, consts};
//!
//! let mut decoder = TelnetDecoder::new();
//! let negotiator = TelnetNegotiator::new("VT100", 80, 24);
//! for byte in [consts::IAC, consts::DO, consts::option::NAWS] {
//!     if let TelnetOutput::Command(command) = decoder.next(byte) {
//!         let reply = negotiator.reply(&command).unwrap();
//!         assert!(reply.to_string().starts_with("<IAC><WILL><OPT_NAWS>"));
//!     }
//! }
//! ```
//!
//! ## IAC Escaping
//!
//! `IAC IAC` in the data stream is a literal 0xFF byte and is reported as
//! [`TelnetOutput::Data`].
//!
//! ## Related RFCs
//!
//! - RFC 854: Telnet Protocol Specification
//! - RFC 1073: Telnet Window Size Option
//! - RFC 1091: Telnet Terminal-Type Option

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod codec;
pub mod consts;
mod negotiate;
mod options;
mod token;

pub use codec::{TelnetDecoder, TelnetOutput, TelnetState};
pub use negotiate::{TelnetNegotiator, TelnetReply};
pub use options::TelnetOption;
pub use token::{TelnetCommand, TelnetToken};
