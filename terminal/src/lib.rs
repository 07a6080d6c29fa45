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


//! # VTScrape Terminal
//!
//! The virtual screen a scraping session renders into, and the extractor that
//! turns regions of it into named values.
//!
//! [`VirtualScreen`] is a fixed grid of characters with a cursor that always
//! stays on the grid. Text is read by coordinates either row major
//! ([`VirtualScreen::string`]) or as a rectangle ([`VirtualScreen::block`]).
//!
//! A [`ScreenDefinition`] names the tables, blocks and strings of one screen
//! layout. [`VirtualScreen::extract_into`] reads them into [`ScreenObjects`].
//!
//! ```rust
//! use vtscrape_terminal::{Region, ScreenDefinition, VirtualScreen};
//!
//! let mut screen = VirtualScreen::create(24, 80, ' ');
//! screen.put_str(10, 0, "SELECT OPTION");
//! assert_eq!(screen.string(Region::new(10, 0, 10, 12), "\n"), "SELECT OPTION");
//!
//! let definition = ScreenDefinition::from_json(&serde_json::json!({
//!     "prompt": {"type": "STRING", "rs": 10, "cs": 0, "ce": 79}
//! }))
//! .unwrap();
//! let objects = screen.extract(&definition, true);
//! assert_eq!(objects["prompt"].as_text(), Some("SELECT OPTION"));
//! ```

mod definition;
mod extract;
mod result;
mod screen;
mod types;

pub use self::definition::{
    ColumnSpec, FieldKey, Orientation, RowSpec, ScreenDefinition, ScreenDefinitions,
    ScreenObjectSpec, TableSpec,
};
pub use self::extract::{ExtractOptions, ScreenObject, ScreenObjects, ScreenTable};
pub use self::result::{ScreenError, ScreenResult};
pub use self::screen::VirtualScreen;
pub use self::types::{CursorPosition, Region, TerminalSize};
