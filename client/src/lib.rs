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

//! # VTScrape Client
//!
//! Drive a character mode host over Telnet the way a person at a VT100 would,
//! then read structured data off the screen.
//!
//! ## Features
//!
//! - **Automatic Negotiation** - Answers TERMTYPE, NAWS, SGA and ECHO, refuses the rest
//! - **Virtual Screen** - Every data byte is rendered by a VT100/VT52 decoder
//! - **Listen Conditions** - Stop on screen text, patterns, cursor position, byte counts or time
//! - **Screen Extraction** - Tables, blocks and strings by coordinates
//! - **Symbolic Tags** - Write `<CR>`, `<F3>` or `<IAC><DO><OPT_ECHO>` in outgoing text
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use vtscrape_client::{Condition, Region, Session, SessionConfig};
//!
//! fn main() -> Result<(), vtscrape_client::ClientError> {
//!     let mut session = Session::connect(SessionConfig::new("mainframe", 23))?;
//!     session.add_condition(Condition::screen_equals("SELECT OPTION", Region::new(10, 0, 10, 12)));
//!     session.add_condition(Condition::IdleTime(Duration::from_secs(5)));
//!     let outcome = session.listen(None, false)?;
//!     println!("stopped by {:?}", outcome.stop);
//!
//!     session.flush_conditions(Some(Condition::IdleTime(Duration::from_secs(2))));
//!     session.listen(Some("1<CR>"), true)?;
//!     println!("{}", session.screen().render_full("\n", true));
//!     session.disconnect()
//! }
//! ```
//!
//! ## Replaying Captures
//!
//! Any [`ByteSource`] can feed a session. [`ReaderSource`] replays a file and
//! [`MemorySource`] replays bytes held in memory while recording what the
//! session writes back, which makes listen cycles deterministic in tests.

mod condition;
mod config;
mod error;
mod session;
mod source;
pub mod tags;

pub use condition::{Condition, ConditionKind, ListenState, Pattern, first_met};
pub use config::SessionConfig;
pub use error::{ClientError, Result};
pub use session::{ListenOutcome, Session, StopReason};
pub use source::{ByteSource, MemorySource, ReadOutcome, ReaderSource, TcpSource};

pub use vtscrape_terminal::{
    CursorPosition, ExtractOptions, FieldKey, Region, ScreenDefinition, ScreenDefinitions,
    ScreenObject, ScreenObjects,
};
