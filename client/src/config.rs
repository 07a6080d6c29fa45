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

//! Session configuration

use std::time::Duration;

/// Scraping session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server hostname or IP address
    pub host: String,

    /// Server port
    pub port: u16,

    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Use a 1 second read timeout instead of non-blocking reads
    pub blocking: bool,

    /// Screen height in rows, also announced through NAWS
    pub rows: u16,

    /// Screen width in columns, also announced through NAWS
    pub cols: u16,

    /// Initial screen fill character
    pub fill: char,

    /// Terminal type to report for TERMTYPE
    pub terminal_type: String,

    /// Answer Telnet negotiation automatically
    pub auto_negotiate: bool,

    /// Render data bytes into the virtual screen
    pub console_decode: bool,

    /// Tab stop width
    pub tab_size: usize,

    /// Wrap to the next row when writing past the last column
    pub wrap: bool,

    /// Iterations between condition checks. Keep at 1 when waiting on the
    /// cursor position.
    pub conditions_interval: usize,

    /// Sleep while the source has no byte available
    pub poll_interval: Duration,

    /// Keep the bytes of the current listen cycle
    pub record_listen_buffer: bool,

    /// Keep every byte received over the session
    pub record_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 23,
            connect_timeout: Duration::from_secs(10),
            blocking: false,
            rows: 24,
            cols: 80,
            fill: ' ',
            terminal_type: "VT100".to_string(),
            auto_negotiate: true,
            console_decode: true,
            tab_size: 8,
            wrap: true,
            conditions_interval: 1,
            poll_interval: Duration::from_micros(500),
            record_listen_buffer: true,
            record_history: false,
        }
    }
}

impl SessionConfig {
    /// Create a new session configuration with the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }

    /// Set the screen size
    pub fn with_screen_size(mut self, rows: u16, cols: u16) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_terminal_type(mut self, terminal_type: impl Into<String>) -> Self {
        self.terminal_type = terminal_type.into();
        self
    }

    pub fn with_auto_negotiate(mut self, enabled: bool) -> Self {
        self.auto_negotiate = enabled;
        self
    }

    pub fn with_console_decode(mut self, enabled: bool) -> Self {
        self.console_decode = enabled;
        self
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the condition check interval. Zero is treated as one.
    pub fn with_conditions_interval(mut self, interval: usize) -> Self {
        self.conditions_interval = interval.max(1);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_record_listen_buffer(mut self, enabled: bool) -> Self {
        self.record_listen_buffer = enabled;
        self
    }

    pub fn with_record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
