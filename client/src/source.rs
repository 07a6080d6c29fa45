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

//! Byte sources a session reads from.

use crate::{ClientError, Result, SessionConfig};
use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::{debug, info};

/// Result of polling a source for one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Byte(u8),
    /// Nothing available yet, poll again later.
    Pending,
    EndOfStream,
}

/// One byte at a time input with a write path for replies.
pub trait ByteSource {
    /// Polls for the next byte without blocking for long.
    fn next_byte(&mut self) -> io::Result<ReadOutcome>;

    /// Writes `bytes` back, returning the count written.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize>;

    /// Closes the underlying stream where that means something.
    fn disconnect(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A Telnet server connection.
#[derive(Debug)]
pub struct TcpSource {
    stream: Option<TcpStream>,
}

impl TcpSource {
    /// Connects to `config.address()` within `config.connect_timeout`.
    ///
    /// Non-blocking unless `config.blocking`, in which case reads wait up to
    /// one second.
    pub fn connect(config: &SessionConfig) -> Result<TcpSource> {
        let address = config.address();
        let addrs = address
            .to_socket_addrs()
            .map_err(|error| ClientError::connect(&error))?;
        let mut last = io::Error::new(ErrorKind::NotFound, format!("No address found for {address}"));
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, config.connect_timeout) {
                Ok(stream) => {
                    if config.blocking {
                        stream.set_read_timeout(Some(Duration::from_secs(1)))?;
                    } else {
                        stream.set_nonblocking(true)?;
                    }
                    info!("Connected to {}", addr);
                    return Ok(TcpSource::from_stream(stream));
                }
                Err(error) => {
                    debug!("Connect to {} failed: {}", addr, error);
                    last = error;
                }
            }
        }
        Err(ClientError::connect(&last))
    }

    /// Wraps an already connected stream as is.
    pub fn from_stream(stream: TcpStream) -> TcpSource {
        TcpSource {
            stream: Some(stream),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

impl ByteSource for TcpSource {
    fn next_byte(&mut self) -> io::Result<ReadOutcome> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(ReadOutcome::EndOfStream);
        };
        let mut byte = [0u8; 1];
        match stream.read(&mut byte) {
            Ok(0) => Ok(ReadOutcome::EndOfStream),
            Ok(_) => Ok(ReadOutcome::Byte(byte[0])),
            Err(error)
                if matches!(
                    error.kind(),
                    ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
                ) =>
            {
                Ok(ReadOutcome::Pending)
            }
            Err(error) => Err(error),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(io::Error::from(ErrorKind::NotConnected));
        };
        // Non-blocking sockets may accept a partial write.
        let mut written = 0;
        while written < bytes.len() {
            match stream.write(&bytes[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(error) if error.kind() == ErrorKind::WouldBlock => std::thread::yield_now(),
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }
        stream.flush()?;
        Ok(written)
    }

    fn disconnect(&mut self) -> io::Result<()> {
        if let Some(stream) = self.stream.take() {
            info!("Disconnecting from {:?}", stream.peer_addr().ok());
            match stream.shutdown(Shutdown::Both) {
                Err(error) if error.kind() != ErrorKind::NotConnected => return Err(error),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Replays any reader, such as a captured session file.
///
/// Writes are discarded and report zero bytes.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> ReaderSource<R> {
        ReaderSource { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> io::Result<ReadOutcome> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(ReadOutcome::EndOfStream),
                Ok(_) => return Ok(ReadOutcome::Byte(byte[0])),
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) if error.kind() == ErrorKind::WouldBlock => return Ok(ReadOutcome::Pending),
                Err(error) => return Err(error),
            }
        }
    }

    fn write_bytes(&mut self, _bytes: &[u8]) -> io::Result<usize> {
        Ok(0)
    }
}

/// In-memory source that records everything written to it.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    input: VecDeque<u8>,
    written: Vec<u8>,
    hold_open: bool,
}

impl MemorySource {
    pub fn new(input: impl Into<Vec<u8>>) -> MemorySource {
        MemorySource {
            input: input.into().into(),
            written: Vec::new(),
            hold_open: false,
        }
    }

    /// Report `Pending` instead of `EndOfStream` once drained.
    pub fn with_hold_open(mut self, hold_open: bool) -> MemorySource {
        self.hold_open = hold_open;
        self
    }

    /// Queues more input behind what is left.
    pub fn push(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Everything the session wrote, in order.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    pub fn take_written(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.written)
    }
}

impl ByteSource for MemorySource {
    fn next_byte(&mut self) -> io::Result<ReadOutcome> {
        Ok(match self.input.pop_front() {
            Some(byte) => ReadOutcome::Byte(byte),
            None if self.hold_open => ReadOutcome::Pending,
            None => ReadOutcome::EndOfStream,
        })
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(bytes);
        Ok(bytes.len())
    }
}
