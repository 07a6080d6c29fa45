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

//! Client error types

use std::io;
use thiserror::Error;
use vtscrape_terminal::ScreenError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The TCP connection could not be established.
    ///
    /// `code` is the OS error number, or -1 when none is available.
    #[error("Connect failed ({code}): {message}")]
    Connect { code: i32, message: String },

    /// I/O error on an open source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A listen pattern did not compile
    #[error("Invalid pattern {pattern}: {message}")]
    Pattern { pattern: String, message: String },

    /// Screen definition lookup or parse failure
    #[error(transparent)]
    Screen(#[from] ScreenError),

    /// The session has no source to read or write
    #[error("Not connected")]
    NotConnected,
}

impl ClientError {
    pub(crate) fn connect(error: &io::Error) -> ClientError {
        ClientError::Connect {
            code: error.raw_os_error().unwrap_or(-1),
            message: error.to_string(),
        }
    }

    /// Maps a failed source write, keeping a closed source distinct from I/O.
    pub(crate) fn write(error: io::Error) -> ClientError {
        match error.kind() {
            io::ErrorKind::NotConnected => ClientError::NotConnected,
            _ => ClientError::Io(error),
        }
    }
}

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;
