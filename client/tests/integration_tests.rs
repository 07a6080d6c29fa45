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


//! Integration tests for listen cycles over scripted and live sources.

use serde_json::json;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::time::Duration;
use vtscrape_client::{
    ClientError, Condition, ConditionKind, CursorPosition, ExtractOptions, FieldKey,
    MemorySource, ReaderSource, Region, Session, SessionConfig, StopReason,
};
use vtscrape_telnetcodec::consts;
use vtscrape_terminal::ScreenError;

// ============================================================================
// Helper Functions
// ============================================================================

fn quick_config() -> SessionConfig {
    SessionConfig::default().with_poll_interval(Duration::from_micros(50))
}

fn scripted(input: &[u8]) -> Session<MemorySource> {
    Session::new(MemorySource::new(input.to_vec()), quick_config())
}

fn held_open(input: &[u8]) -> Session<MemorySource> {
    Session::new(
        MemorySource::new(input.to_vec()).with_hold_open(true),
        quick_config(),
    )
}

fn menu_stream() -> Vec<u8> {
    let mut bytes = vec![
        consts::IAC,
        consts::DO,
        consts::option::TERMTYPE,
        consts::IAC,
        consts::WILL,
        consts::option::SGA,
    ];
    bytes.extend_from_slice(b"\x1b[2J\x1b[H");
    bytes.extend_from_slice(b"\x1b[1;11HMAIN MENU");
    bytes.extend_from_slice(b"\x1b[3;3H1  Accounts\x1b[4;3H2  Reports");
    bytes.extend_from_slice(b"\x1b[11;1HSELECT OPTION");
    bytes.extend_from_slice(b"\x1b[11;15H");
    bytes
}

// ============================================================================
// Stop Conditions
// ============================================================================

#[test]
fn screen_text_stops_before_stream_ends() {
    let mut stream = menu_stream();
    stream.extend_from_slice(b"never rendered");
    let mut session = scripted(&stream);
    session.add_condition(Condition::IdleTime(Duration::from_secs(5)));
    session.add_condition(Condition::screen_equals("SELECT OPTION", Region::new(10, 0, 10, 12)));

    let outcome = session.listen(None, false).unwrap();
    assert_eq!(
        outcome.stop,
        StopReason::Condition {
            index: 1,
            kind: ConditionKind::ScreenEquals
        }
    );
    assert!(session.source().remaining() > 0);

    let mut expected = vec![consts::IAC, consts::WILL, consts::option::TERMTYPE];
    expected.extend_from_slice(&[consts::IAC, consts::SB, consts::option::TERMTYPE, consts::IS]);
    expected.extend_from_slice(b"VT100");
    expected.extend_from_slice(&[consts::IAC, consts::SE]);
    expected.extend_from_slice(&[consts::IAC, consts::DO, consts::option::SGA]);
    assert_eq!(session.source().written(), expected.as_slice());
}

#[test]
fn cursor_condition_sees_transient_position() {
    let mut session = scripted(&menu_stream());
    session.add_condition(Condition::cursor_at(2, 2));
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::Condition { index: 0, kind: ConditionKind::CursorAt });
    assert_eq!(session.screen().cursor(), CursorPosition::new(2, 2));
}

#[test]
fn list_order_decides_between_true_conditions() {
    let mut session = held_open(b"x");
    session.add_condition(Condition::IdleTime(Duration::from_secs(5)));
    session.add_condition(Condition::ByteCount(1));
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::Condition { index: 1, kind: ConditionKind::ByteCount });

    let mut session = held_open(b"x");
    session.add_condition(Condition::ByteCount(1));
    session.add_condition(Condition::IterationCount(1));
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::Condition { index: 0, kind: ConditionKind::ByteCount });
}

#[test]
fn idle_time_ends_a_quiet_cycle() {
    let mut session = held_open(b"prompt> ");
    session.add_condition(Condition::IdleTime(Duration::from_millis(20)));
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::Condition { index: 0, kind: ConditionKind::IdleTime });
    assert_eq!(outcome.bytes, 8);
    assert!(outcome.idle >= Duration::from_millis(20));
    assert!(outcome.iterations > 8);
}

#[test]
fn elapsed_time_bounds_a_cycle() {
    let mut session = held_open(b"");
    session.add_condition(Condition::ElapsedTime(Duration::from_millis(10)));
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::Condition { index: 0, kind: ConditionKind::ElapsedTime });
    assert!(outcome.duration >= Duration::from_millis(10));
}

#[test]
fn buffer_conditions_only_see_current_cycle() {
    let mut session = held_open(b"Username: ");
    session.add_condition(Condition::BufferContains("Username: ".into()));
    session.listen(None, false).unwrap();

    session.source_mut().push(b"Password: ");
    session.flush_conditions(Some(Condition::buffer_matches("/^username/i").unwrap()));
    session.add_condition(Condition::buffer_matches("/password: $/i").unwrap());
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::Condition { index: 1, kind: ConditionKind::BufferMatches });
    assert_eq!(session.listen_buffer(), b"Password: ");
}

#[test]
fn conditions_interval_skips_checks() {
    let config = quick_config().with_conditions_interval(4);
    let mut session = Session::new(MemorySource::new(b"abcdefgh".to_vec()).with_hold_open(true), config);
    session.add_condition(Condition::ByteCount(1));
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.iterations, 4);
    assert_eq!(outcome.bytes, 4);
}

// ============================================================================
// Sending
// ============================================================================

#[test]
fn initial_text_is_tag_encoded() {
    let mut session = scripted(b"");
    session.listen(Some("1<CR><IAC><DONT><OPT_ECHO>"), true).unwrap();
    assert_eq!(
        session.source().written(),
        &[b'1', b'\r', consts::IAC, consts::DONT, consts::option::ECHO]
    );

    session.source_mut().take_written();
    assert_eq!(session.send("<CR>", false).unwrap(), 4);
    assert_eq!(session.source().written(), b"<CR>");
}

#[test]
fn reader_source_replays_capture() {
    let capture = Cursor::new(b"\x1b[5;5HREPLAY\x1b[1;1H".to_vec());
    let mut session = Session::new(ReaderSource::new(capture), quick_config());
    assert_eq!(session.send("ignored", false).unwrap(), 0);
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::EndOfStream);
    assert_eq!(session.screen().string(Region::new(4, 4, 4, 9), ""), "REPLAY");
    assert_eq!(session.screen().cursor(), CursorPosition::new(0, 0));
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn named_definition_extracts_menu() {
    let mut session = scripted(&menu_stream());
    session
        .definitions_mut()
        .insert_json(
            "menu",
            &json!({
                "title": {"type": "STRING", "rs": 0, "cs": 0, "ce": 79},
                "items": {
                    "type": "TABLE",
                    "cols": {"key": 2, "label": {"cs": 5, "ce": 20}},
                    "rowStart": 2,
                    "rowEnd": 3
                }
            }),
        )
        .unwrap();
    session.listen(None, false).unwrap();

    let objects = session.extract_named("menu", ExtractOptions::default()).unwrap();
    assert_eq!(objects["title"].as_text(), Some("MAIN MENU"));
    let items = objects["items"].as_table().unwrap();
    assert_eq!(items[&FieldKey::Index(0)][&FieldKey::from("label")], "Accounts");
    assert_eq!(items[&FieldKey::Index(1)][&FieldKey::from("key")], "2");

    match session.extract_named("login", ExtractOptions::default()) {
        Err(ClientError::Screen(ScreenError::UnknownDefinition(name))) => assert_eq!(name, "login"),
        other => panic!("unexpected result {other:?}"),
    }
}

// ============================================================================
// Live Connection
// ============================================================================

#[test]
fn tcp_session_negotiates_window_size() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream
            .write_all(&[consts::IAC, consts::DO, consts::option::NAWS])
            .unwrap();
        stream.write_all(b"login: ").unwrap();
        let mut reply = [0u8; 12];
        stream.read_exact(&mut reply).unwrap();
        reply
    });

    let config = SessionConfig::new("127.0.0.1", port).with_poll_interval(Duration::from_micros(50));
    let mut session = Session::connect(config).unwrap();
    session.add_condition(Condition::BufferContains("login: ".into()));
    session.add_condition(Condition::ElapsedTime(Duration::from_secs(5)));
    let outcome = session.listen(None, false).unwrap();
    assert_eq!(outcome.stop, StopReason::Condition { index: 0, kind: ConditionKind::BufferContains });

    let reply = server.join().unwrap();
    assert_eq!(
        reply,
        [
            consts::IAC,
            consts::WILL,
            consts::option::NAWS,
            consts::IAC,
            consts::SB,
            consts::option::NAWS,
            0,
            80,
            0,
            24,
            consts::IAC,
            consts::SE
        ]
    );
    session.disconnect().unwrap();
}

#[test]
fn send_after_disconnect_reports_not_connected() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let mut session = Session::connect(SessionConfig::new("127.0.0.1", port)).unwrap();
    let _peer = listener.accept().unwrap();
    assert_eq!(session.send("guest<CR>", true).unwrap(), 6);
    session.disconnect().unwrap();
    assert!(matches!(session.send("x", false), Err(ClientError::NotConnected)));
}
