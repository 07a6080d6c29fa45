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

//! The interaction loop.

use crate::condition::{ListenState, first_met};
use crate::{ByteSource, ClientError, Condition, ConditionKind, ReadOutcome, Result, SessionConfig, TcpSource};
use std::time::{Duration, Instant};
use tracing::{debug, trace};
use vtscrape_telnetcodec::{TelnetDecoder, TelnetNegotiator, TelnetOutput, TelnetState};
use vtscrape_terminal::{
    ExtractOptions, ScreenDefinition, ScreenDefinitions, ScreenObjects, VirtualScreen,
};
use vtscrape_vtcodec::{ConsoleCommand, ConsoleDecoder, ConsoleState};

/// Why a listen cycle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The source ran dry.
    EndOfStream,
    /// `conditions[index]` was met.
    Condition { index: usize, kind: ConditionKind },
}

/// Counters of a finished listen cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenOutcome {
    pub stop: StopReason,
    /// Loop iterations, including polls that found no byte.
    pub iterations: u64,
    pub bytes: u64,
    /// Elapsed time at the final condition check.
    pub elapsed: Duration,
    /// Time since the last byte at the final condition check.
    pub idle: Duration,
    /// Wall clock time of the whole cycle, initial send included.
    pub duration: Duration,
}

/// A terminal session over a [`ByteSource`].
///
/// Owns the virtual screen and both decoders. Bytes are processed strictly
/// in arrival order and each one is fully rendered before the next is read.
pub struct Session<S> {
    config: SessionConfig,
    source: S,
    screen: VirtualScreen,
    telnet: TelnetDecoder,
    negotiator: TelnetNegotiator,
    console: ConsoleDecoder,
    conditions: Vec<Condition>,
    listen_buffer: Vec<u8>,
    history: Vec<u8>,
    definitions: ScreenDefinitions,
    objects: ScreenObjects,
    last_outcome: Option<ListenOutcome>,
}

impl Session<TcpSource> {
    /// Connects to `config.address()`.
    pub fn connect(config: SessionConfig) -> Result<Self> {
        let source = TcpSource::connect(&config)?;
        Ok(Session::new(source, config))
    }
}

impl<S: ByteSource> Session<S> {
    pub fn new(source: S, config: SessionConfig) -> Self {
        let screen = VirtualScreen::create(usize::from(config.rows), usize::from(config.cols), config.fill);
        let negotiator = TelnetNegotiator::new(config.terminal_type.clone(), config.cols, config.rows);
        let console = ConsoleDecoder::new()
            .with_tab_size(config.tab_size)
            .with_wrap(config.wrap);
        Self {
            config,
            source,
            screen,
            telnet: TelnetDecoder::new(),
            negotiator,
            console,
            conditions: Vec::new(),
            listen_buffer: Vec::new(),
            history: Vec::new(),
            definitions: ScreenDefinitions::new(),
            objects: ScreenObjects::new(),
            last_outcome: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn screen(&self) -> &VirtualScreen {
        &self.screen
    }

    /// Direct screen access for setup between listen cycles.
    pub fn screen_mut(&mut self) -> &mut VirtualScreen {
        &mut self.screen
    }

    /// Writes `text`, replacing `<NAME>` tags first when `encode` is set.
    pub fn send(&mut self, text: &str, encode: bool) -> Result<usize> {
        let bytes = if encode {
            crate::tags::encode(text)
        } else {
            text.as_bytes().to_vec()
        };
        let written = self.source.write_bytes(&bytes).map_err(ClientError::write)?;
        debug!("Sent {} of {} bytes", written, bytes.len());
        Ok(written)
    }

    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Removes every condition, then adds `first` if given.
    pub fn flush_conditions(&mut self, first: Option<Condition>) {
        self.conditions.clear();
        self.conditions.extend(first);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Runs one listen cycle, optionally sending `initial` first.
    ///
    /// Returns once the source ends or a condition is met. Conditions are
    /// tested in insertion order every `conditions_interval` iterations and
    /// the first one met wins. Without a time bound among the conditions a
    /// quiet source keeps this looping.
    pub fn listen(&mut self, initial: Option<&str>, encode: bool) -> Result<ListenOutcome> {
        let started = Instant::now();
        let mut last_byte = started;
        let mut iterations = 0u64;
        let mut bytes = 0u64;
        let interval = u64::try_from(self.config.conditions_interval.max(1)).unwrap_or(1);
        self.listen_buffer.clear();

        if let Some(text) = initial {
            self.send(text, encode)?;
        }

        let (stop, elapsed, idle) = loop {
            let end_of_stream = match self.source.next_byte()? {
                ReadOutcome::Byte(byte) => {
                    last_byte = Instant::now();
                    bytes += 1;
                    if self.config.record_listen_buffer {
                        self.listen_buffer.push(byte);
                    }
                    if self.config.record_history {
                        self.history.push(byte);
                    }
                    self.process(byte)?;
                    false
                }
                ReadOutcome::Pending => {
                    std::thread::sleep(self.config.poll_interval);
                    false
                }
                ReadOutcome::EndOfStream => true,
            };
            iterations += 1;

            let now = Instant::now();
            let elapsed = now.duration_since(started);
            let idle = now.duration_since(last_byte);
            if end_of_stream {
                break (StopReason::EndOfStream, elapsed, idle);
            }
            if iterations % interval != 0 {
                continue;
            }
            let state = ListenState {
                elapsed,
                idle,
                iterations,
                bytes,
                end_of_stream,
                buffer: &self.listen_buffer,
                screen: &self.screen,
            };
            if let Some((index, kind)) = first_met(&self.conditions, &state) {
                break (StopReason::Condition { index, kind }, elapsed, idle);
            }
        };

        let outcome = ListenOutcome {
            stop,
            iterations,
            bytes,
            elapsed,
            idle,
            duration: started.elapsed(),
        };
        trace!(
            "Listen stopped by {:?} after {} iterations, {} bytes, {:?}",
            outcome.stop,
            outcome.iterations,
            outcome.bytes,
            outcome.duration
        );
        trace!("Screen:\n{}", self.screen.render_full("\n", true));
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    fn process(&mut self, byte: u8) -> Result<()> {
        match self.telnet.next(byte) {
            TelnetOutput::Data(data) => {
                if self.config.console_decode {
                    self.console.next(data, &mut self.screen);
                }
            }
            TelnetOutput::Framing => {}
            TelnetOutput::Command(command) => {
                if !self.config.auto_negotiate {
                    return Ok(());
                }
                if let Some(reply) = self.negotiator.reply(&command) {
                    self.source
                        .write_bytes(&reply.to_bytes())
                        .map_err(ClientError::write)?;
                }
            }
        }
        Ok(())
    }

    pub fn last_outcome(&self) -> Option<&ListenOutcome> {
        self.last_outcome.as_ref()
    }

    /// Bytes received in the current or last listen cycle.
    pub fn listen_buffer(&self) -> &[u8] {
        &self.listen_buffer
    }

    /// Bytes received over the whole session, when recorded.
    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn telnet_state(&self) -> TelnetState {
        self.telnet.state()
    }

    pub fn console_state(&self) -> ConsoleState {
        self.console.state()
    }

    pub fn last_console_command(&self) -> &ConsoleCommand {
        self.console.last_command()
    }

    /// Raw text of the escape sequence being collected.
    pub fn escape_sequence(&self) -> &[u8] {
        self.console.sequence()
    }

    pub fn definitions(&self) -> &ScreenDefinitions {
        &self.definitions
    }

    pub fn definitions_mut(&mut self) -> &mut ScreenDefinitions {
        &mut self.definitions
    }

    /// Extracts `definition` from the current screen into [`Session::objects`].
    pub fn extract(&mut self, definition: &ScreenDefinition, options: ExtractOptions) -> &ScreenObjects {
        self.screen.extract_into(definition, options, &mut self.objects);
        &self.objects
    }

    /// Extracts the registered definition named `screen`.
    pub fn extract_named(&mut self, screen: &str, options: ExtractOptions) -> Result<&ScreenObjects> {
        let definition = self.definitions.get(screen)?;
        self.screen.extract_into(definition, options, &mut self.objects);
        Ok(&self.objects)
    }

    /// Results of the last extraction.
    pub fn objects(&self) -> &ScreenObjects {
        &self.objects
    }

    pub fn disconnect(&mut self) -> Result<()> {
        self.source.disconnect()?;
        Ok(())
    }
}
