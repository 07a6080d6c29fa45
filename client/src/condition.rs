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

//! Conditions that end a listen cycle.

use crate::{ClientError, Result};
use enum_kinds::EnumKind;
use regex::bytes::{Regex, RegexBuilder};
use std::fmt::{Display, Formatter};
use std::time::Duration;
use vtscrape_terminal::{CursorPosition, Region, VirtualScreen};

/// A regular expression over received bytes or screen text.
///
/// Accepts a bare expression or a delimited one, `/expr/flags`, with flags
/// among `i m s x U u`. Without `u` the expression matches raw bytes.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Pattern> {
        let invalid = |message: String| ClientError::Pattern {
            pattern: pattern.to_string(),
            message,
        };
        let (expression, flags) = split_delimited(pattern).unwrap_or((pattern, ""));
        let mut builder = RegexBuilder::new(expression);
        builder.unicode(false);
        for flag in flags.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                'U' => builder.swap_greed(true),
                'u' => builder.unicode(true),
                other => return Err(invalid(format!("unsupported flag '{other}'"))),
            };
        }
        let regex = builder.build().map_err(|error| invalid(error.to_string()))?;
        Ok(Pattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, haystack: &[u8]) -> bool {
        self.regex.is_match(haystack)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Splits `/expr/flags` into its expression and flags.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let delimiter = pattern.chars().next().filter(|c| matches!(c, '/' | '#' | '~'))?;
    let body = &pattern[1..];
    let close = body.rfind(delimiter)?;
    Some((&body[..close], &body[close + 1..]))
}

/// A reason to stop listening.
///
/// Screen regions use the row major reading of
/// [`VirtualScreen::string`].
#[derive(Clone, Debug, EnumKind)]
#[enum_kind(ConditionKind, derive(Hash))]
pub enum Condition {
    /// The source ran dry. Always checked, whether listed or not.
    EndOfStream,
    /// The cycle has run at least this long.
    ElapsedTime(Duration),
    /// At least this many loop iterations, including empty polls.
    IterationCount(u64),
    /// At least this many bytes received.
    ByteCount(u64),
    /// The bytes of this cycle match.
    BufferMatches(Pattern),
    /// The region reads exactly this text.
    ScreenEquals { text: String, region: Region },
    /// The region text matches.
    ScreenMatches { pattern: Pattern, region: Region },
    CursorAt(CursorPosition),
    /// No byte has arrived for this long.
    IdleTime(Duration),
    /// The bytes of this cycle contain this text. Empty text never matches.
    BufferContains(String),
}

impl Display for ConditionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl Condition {
    pub fn buffer_matches(pattern: &str) -> Result<Condition> {
        Pattern::new(pattern).map(Condition::BufferMatches)
    }

    pub fn screen_equals(text: impl Into<String>, region: Region) -> Condition {
        Condition::ScreenEquals {
            text: text.into(),
            region,
        }
    }

    pub fn screen_matches(pattern: &str, region: Region) -> Result<Condition> {
        Ok(Condition::ScreenMatches {
            pattern: Pattern::new(pattern)?,
            region,
        })
    }

    pub fn cursor_at(row: usize, col: usize) -> Condition {
        Condition::CursorAt(CursorPosition::new(row, col))
    }

    pub fn kind(&self) -> ConditionKind {
        ConditionKind::from(self)
    }

    /// Tests the condition against the state of a running cycle.
    pub fn is_met(&self, state: &ListenState<'_>) -> bool {
        match self {
            Condition::EndOfStream => state.end_of_stream,
            Condition::ElapsedTime(limit) => state.elapsed >= *limit,
            Condition::IterationCount(limit) => state.iterations >= *limit,
            Condition::ByteCount(limit) => state.bytes >= *limit,
            Condition::BufferMatches(pattern) => pattern.is_match(state.buffer),
            Condition::ScreenEquals { text, region } => state.screen.string(*region, "\n") == *text,
            Condition::ScreenMatches { pattern, region } => {
                pattern.is_match(state.screen.string(*region, "\n").as_bytes())
            }
            Condition::CursorAt(position) => state.screen.cursor() == *position,
            Condition::IdleTime(limit) => state.idle >= *limit,
            Condition::BufferContains(text) => {
                !text.is_empty()
                    && state
                        .buffer
                        .windows(text.len())
                        .any(|window| window == text.as_bytes())
            }
        }
    }
}

/// Counters and views a condition is tested against.
#[derive(Clone, Copy, Debug)]
pub struct ListenState<'a> {
    pub elapsed: Duration,
    pub idle: Duration,
    pub iterations: u64,
    pub bytes: u64,
    pub end_of_stream: bool,
    /// Bytes received in this cycle.
    pub buffer: &'a [u8],
    pub screen: &'a VirtualScreen,
}

/// Index and kind of the first condition met, in list order.
pub fn first_met(conditions: &[Condition], state: &ListenState<'_>) -> Option<(usize, ConditionKind)> {
    conditions
        .iter()
        .position(|condition| condition.is_met(state))
        .map(|index| (index, conditions[index].kind()))
}
