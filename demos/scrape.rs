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

//! Screen scraping example
//!
//! Connects to a Telnet host, waits for the screen to settle, optionally sends
//! a line of tagged input, then prints the screen and the strings found on
//! its first and last rows. With `--replay <file>` a captured session is
//! rendered instead of a live one.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example scrape -- localhost 23 "guest<CR>"
//! cargo run --example scrape -- --replay capture.bin
//! RUST_LOG=vtscrape_client=trace cargo run --example scrape -- localhost 23
//! ```

use serde_json::json;
use std::fs::File;
use std::time::Duration;
use tracing::info;
use vtscrape_client::{
    ByteSource, Condition, ExtractOptions, ReaderSource, Session, SessionConfig,
};

fn scrape<S: ByteSource>(mut session: Session<S>, input: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    session.add_condition(Condition::IdleTime(Duration::from_secs(2)));
    session.add_condition(Condition::ElapsedTime(Duration::from_secs(30)));
    let outcome = session.listen(None, false)?;
    info!("First screen after {:?}: {:?}", outcome.duration, outcome.stop);

    if let Some(text) = input {
        let outcome = session.listen(Some(text), true)?;
        info!("Reply screen after {:?}: {:?}", outcome.duration, outcome.stop);
    }

    println!("{}", session.screen().render_full("\n", true));

    let last = session.screen().size().last_row();
    session.definitions_mut().insert_json(
        "outline",
        &json!({
            "title": {"type": "STRING", "rs": 0, "cs": 0, "ce": 79},
            "status": {"type": "STRING", "rs": last, "cs": 0, "ce": 79}
        }),
    )?;
    let objects = session.extract_named("outline", ExtractOptions::default())?;
    for (name, value) in objects {
        println!("{name}: {:?}", value.as_text().unwrap_or_default());
    }
    session.disconnect()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some("--replay") {
        let path = args.get(2).ok_or("--replay needs a file")?;
        let source = ReaderSource::new(File::open(path)?);
        return scrape(Session::new(source, SessionConfig::default()), None);
    }

    let host = args.get(1).map_or("localhost", String::as_str);
    let port: u16 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(23);
    let input = args.get(3).map(String::as_str);

    info!("Connecting to {}:{}", host, port);
    let session = Session::connect(SessionConfig::new(host, port))?;
    scrape(session, input)
}
