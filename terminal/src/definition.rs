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

use crate::{Region, ScreenError, ScreenResult};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use tracing::warn;

/// Row or column key in a table.
///
/// Keys that look like non negative integers are indices, everything else is
/// a name. Indices sort before names.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Index(usize),
    Name(String),
}

impl From<usize> for FieldKey {
    fn from(index: usize) -> Self {
        FieldKey::Index(index)
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        match key.parse::<usize>() {
            Ok(index) => FieldKey::Index(index),
            Err(_) => FieldKey::Name(key.to_string()),
        }
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKey::Index(index) => write!(f, "{index}"),
            FieldKey::Name(name) => write!(f, "{name}"),
        }
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldKey::Index(index) => serializer.serialize_u64(*index as u64),
            FieldKey::Name(name) => serializer.serialize_str(name),
        }
    }
}

/// Column of a table: a single column or an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnSpec {
    Index(usize),
    Range { cs: usize, ce: Option<usize> },
}

impl ColumnSpec {
    /// Inclusive `(start, end)` columns, `end` defaulting to `start`.
    pub fn bounds(&self) -> (usize, usize) {
        match *self {
            ColumnSpec::Index(col) => (col, col),
            ColumnSpec::Range { cs, ce } => (cs, ce.unwrap_or(cs)),
        }
    }
}

/// Named row of a table: a single row or an inclusive range.
///
/// Only the start row is read when extracting a named row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowSpec {
    Index(usize),
    Range { rs: usize, re: Option<usize> },
}

impl RowSpec {
    pub fn start(&self) -> usize {
        match *self {
            RowSpec::Index(row) | RowSpec::Range { rs: row, .. } => row,
        }
    }
}

/// Which axis of a table holds the records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Records are rows: `result[row][column]`.
    #[default]
    Horizontal,
    /// Records are columns: `result[column][row]`.
    Vertical,
}

/// Table object of a screen definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSpec {
    pub orientation: Orientation,
    pub cols: Vec<(FieldKey, ColumnSpec)>,
    /// Contiguous unnamed rows `(row_start, row_end)`, keyed 0, 1, 2...
    pub row_range: Option<(usize, Option<usize>)>,
    pub rows: Vec<(FieldKey, RowSpec)>,
}

impl TableSpec {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    pub fn with_col(mut self, key: impl Into<FieldKey>, spec: ColumnSpec) -> Self {
        self.cols.push((key.into(), spec));
        self
    }

    pub fn with_row_range(mut self, row_start: usize, row_end: Option<usize>) -> Self {
        self.row_range = Some((row_start, row_end));
        self
    }

    pub fn with_row(mut self, key: impl Into<FieldKey>, spec: RowSpec) -> Self {
        self.rows.push((key.into(), spec));
        self
    }
}

/// One named object of a screen definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenObjectSpec {
    Table(TableSpec),
    /// Rectangular text, read with [`crate::VirtualScreen::block`].
    Block(Region),
    /// Row major text, read with [`crate::VirtualScreen::string`].
    String(Region),
}

/// The objects to extract from one screen, in definition order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenDefinition {
    objects: Vec<(String, ScreenObjectSpec)>,
}

impl ScreenDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, name: impl Into<String>, spec: ScreenObjectSpec) -> Self {
        self.insert(name, spec);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: ScreenObjectSpec) {
        self.objects.push((name.into(), spec));
    }

    pub fn objects(&self) -> impl Iterator<Item = (&str, &ScreenObjectSpec)> {
        self.objects.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Loads a definition from a JSON object of named entries.
    ///
    /// Each entry carries a `type` of `TABLE`, `BLOCK` or `STRING`. Entries,
    /// columns and rows that cannot be read are skipped with a warning. Only a
    /// top level value that is not an object is an error.
    pub fn from_json(value: &Value) -> ScreenResult<Self> {
        let Value::Object(entries) = value else {
            return Err(ScreenError::InvalidDefinition(format!(
                "expected an object of screen objects, found {}",
                kind(value)
            )));
        };
        let mut definition = ScreenDefinition::new();
        for (name, entry) in entries {
            match parse_object(entry) {
                Some(spec) => definition.insert(name.as_str(), spec),
                None => warn!("Skipping screen object {name}: unrecognised definition {entry}"),
            }
        }
        Ok(definition)
    }
}

/// Screen definitions by screen name.
#[derive(Clone, Debug, Default)]
pub struct ScreenDefinitions {
    screens: HashMap<String, ScreenDefinition>,
}

impl ScreenDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, screen: impl Into<String>, definition: ScreenDefinition) {
        self.screens.insert(screen.into(), definition);
    }

    /// Loads one screen from JSON, see [`ScreenDefinition::from_json`].
    pub fn insert_json(&mut self, screen: impl Into<String>, value: &Value) -> ScreenResult<()> {
        let definition = ScreenDefinition::from_json(value)?;
        self.insert(screen, definition);
        Ok(())
    }

    pub fn get(&self, screen: &str) -> ScreenResult<&ScreenDefinition> {
        self.screens
            .get(screen)
            .ok_or_else(|| ScreenError::UnknownDefinition(screen.to_string()))
    }

    pub fn contains(&self, screen: &str) -> bool {
        self.screens.contains_key(screen)
    }

    pub fn remove(&mut self, screen: &str) -> Option<ScreenDefinition> {
        self.screens.remove(screen)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn index(entry: &Map<String, Value>, key: &str) -> Option<usize> {
    entry
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

fn parse_object(value: &Value) -> Option<ScreenObjectSpec> {
    let entry = value.as_object()?;
    match entry.get("type").and_then(Value::as_str)? {
        "TABLE" => Some(ScreenObjectSpec::Table(parse_table(entry))),
        "BLOCK" => parse_region(entry).map(ScreenObjectSpec::Block),
        "STRING" => parse_region(entry).map(ScreenObjectSpec::String),
        _ => None,
    }
}

fn parse_region(entry: &Map<String, Value>) -> Option<Region> {
    let row_start = index(entry, "rs")?;
    let col_start = index(entry, "cs")?;
    Some(Region {
        row_start,
        col_start,
        row_end: index(entry, "re"),
        col_end: index(entry, "ce"),
    })
}

fn parse_table(entry: &Map<String, Value>) -> TableSpec {
    let orientation = match entry.get("orientation").and_then(Value::as_str) {
        Some("VERTICAL") => Orientation::Vertical,
        _ => Orientation::Horizontal,
    };
    let mut table = TableSpec::new(orientation);
    table.cols = keyed(entry.get("cols"), "cs", "ce")
        .map(|(key, start, end)| {
            let spec = match end {
                Some(ce) => ColumnSpec::Range { cs: start, ce },
                None => ColumnSpec::Index(start),
            };
            (key, spec)
        })
        .collect();
    table.row_range = index(entry, "rowStart").map(|rs| (rs, index(entry, "rowEnd")));
    table.rows = keyed(entry.get("rows"), "rs", "re")
        .map(|(key, start, end)| {
            let spec = match end {
                Some(re) => RowSpec::Range { rs: start, re },
                None => RowSpec::Index(start),
            };
            (key, spec)
        })
        .collect();
    table
}

/// Walks a `cols`/`rows` value, named (object) or indexed (array).
///
/// Yields `(key, start, Some(end))` for range entries and `(key, start, None)`
/// for bare integers.
fn keyed<'a>(
    value: Option<&'a Value>,
    start: &'a str,
    end: &'a str,
) -> impl Iterator<Item = (FieldKey, usize, Option<Option<usize>>)> + 'a {
    let entries: Vec<(FieldKey, &Value)> = match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| (FieldKey::from(key.as_str()), value))
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, value)| (FieldKey::Index(i), value))
            .collect(),
        _ => Vec::new(),
    };
    entries.into_iter().filter_map(move |(key, value)| {
        if let Some(n) = value.as_u64().and_then(|n| usize::try_from(n).ok()) {
            return Some((key, n, None));
        }
        let parsed = value
            .as_object()
            .and_then(|range| index(range, start).map(|s| (s, index(range, end))));
        match parsed {
            Some((s, e)) => Some((key, s, Some(e))),
            None => {
                warn!("Skipping table entry {key}: no valid {start} in {value}");
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_key_parses_indices() {
        assert_eq!(FieldKey::from("3"), FieldKey::Index(3));
        assert_eq!(FieldKey::from("name"), FieldKey::Name("name".into()));
        assert!(FieldKey::Index(99) < FieldKey::Name("a".into()));
    }

    #[test]
    fn test_from_json_reads_all_object_types() {
        let definition = ScreenDefinition::from_json(&json!({
            "title": {"type": "STRING", "rs": 0, "cs": 10, "ce": 30},
            "menu": {"type": "BLOCK", "rs": 2, "re": 8, "cs": 0, "ce": 20},
            "users": {
                "type": "TABLE",
                "orientation": "VERTICAL",
                "cols": {"id": 0, "name": {"cs": 4, "ce": 20}},
                "rowStart": 5,
                "rowEnd": 9,
                "rows": {"total": {"rs": 11}}
            }
        }))
        .unwrap();
        let objects: Vec<_> = definition.objects().collect();
        assert_eq!(objects.len(), 3);
        let title = ScreenObjectSpec::String(Region::at(0, 10).with_col_end(30));
        assert!(objects.contains(&("title", &title)));
        let table = objects.iter().find(|(name, _)| *name == "users").unwrap().1;
        let ScreenObjectSpec::Table(table) = table else {
            panic!("expected table");
        };
        assert_eq!(table.orientation, Orientation::Vertical);
        assert_eq!(
            table.cols,
            vec![
                (FieldKey::from("id"), ColumnSpec::Index(0)),
                (FieldKey::from("name"), ColumnSpec::Range { cs: 4, ce: Some(20) }),
            ]
        );
        assert_eq!(table.row_range, Some((5, Some(9))));
        assert_eq!(
            table.rows,
            vec![(FieldKey::from("total"), RowSpec::Range { rs: 11, re: None })]
        );
    }

    #[test]
    fn test_from_json_skips_malformed_entries() {
        let definition = ScreenDefinition::from_json(&json!({
            "nothing": {"type": "PICTURE"},
            "no_start": {"type": "STRING", "cs": 1},
            "untyped": 7,
            "ok": {"type": "BLOCK", "rs": 1, "cs": 1},
            "table": {"type": "TABLE", "cols": [2, "x", {"ce": 4}, {"cs": -1}, {"cs": 6}]}
        }))
        .unwrap();
        assert_eq!(definition.len(), 2);
        let (_, table) = definition.objects().find(|(name, _)| *name == "table").unwrap();
        let ScreenObjectSpec::Table(table) = table else {
            panic!("expected table");
        };
        assert_eq!(
            table.cols,
            vec![
                (FieldKey::Index(0), ColumnSpec::Index(2)),
                (FieldKey::Index(4), ColumnSpec::Range { cs: 6, ce: None }),
            ]
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_skipped_entries_are_logged() {
        ScreenDefinition::from_json(&json!({"bad": {"type": "PICTURE"}})).unwrap();
        assert!(logs_contain("Skipping screen object bad"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            ScreenDefinition::from_json(&json!([1, 2])),
            Err(ScreenError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_registry_lookup() {
        let mut screens = ScreenDefinitions::new();
        screens
            .insert_json("login", &json!({"prompt": {"type": "STRING", "rs": 0, "cs": 0}}))
            .unwrap();
        assert!(screens.get("login").is_ok());
        assert!(matches!(
            screens.get("menu"),
            Err(ScreenError::UnknownDefinition(name)) if name == "menu"
        ));
    }
}
