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

use crate::{
    FieldKey, Orientation, Region, ScreenDefinition, ScreenObjectSpec, TableSpec, VirtualScreen,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Table cells keyed by record, then by field.
pub type ScreenTable = BTreeMap<FieldKey, BTreeMap<FieldKey, String>>;

/// Extraction results by object name.
pub type ScreenObjects = BTreeMap<String, ScreenObject>;

/// Extracted value of one screen object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScreenObject {
    /// A `BLOCK` or `STRING` object.
    Text(String),
    /// A `TABLE` object.
    Table(ScreenTable),
}

impl ScreenObject {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScreenObject::Text(text) => Some(text),
            ScreenObject::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&ScreenTable> {
        match self {
            ScreenObject::Table(table) => Some(table),
            ScreenObject::Text(_) => None,
        }
    }
}

/// How extraction treats existing results and cell whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Empty the result map before extracting. Otherwise objects are merged,
    /// replacing any of the same name.
    pub clear: bool,
    /// Strip ` \t\n\r\0\x0B` from both ends of every value.
    pub trim: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            clear: true,
            trim: true,
        }
    }
}

impl ExtractOptions {
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

fn trim(value: String, enabled: bool) -> String {
    if !enabled {
        return value;
    }
    value
        .trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
        .to_string()
}

impl VirtualScreen {
    /// Extracts every object of `definition` into `objects`.
    pub fn extract_into(
        &self,
        definition: &ScreenDefinition,
        options: ExtractOptions,
        objects: &mut ScreenObjects,
    ) {
        if options.clear {
            objects.clear();
        }
        for (name, spec) in definition.objects() {
            let object = match spec {
                ScreenObjectSpec::Table(table) => ScreenObject::Table(self.table(table, options.trim)),
                ScreenObjectSpec::Block(region) => {
                    ScreenObject::Text(trim(self.block(text_region(*region), "\n"), options.trim))
                }
                ScreenObjectSpec::String(region) => {
                    ScreenObject::Text(trim(self.string(text_region(*region), "\n"), options.trim))
                }
            };
            objects.insert(name.to_string(), object);
        }
    }

    /// Extracts `definition` into a fresh result map.
    pub fn extract(&self, definition: &ScreenDefinition, trim: bool) -> ScreenObjects {
        let mut objects = ScreenObjects::new();
        self.extract_into(definition, ExtractOptions::default().with_trim(trim), &mut objects);
        objects
    }

    fn table(&self, table: &TableSpec, trimmed: bool) -> ScreenTable {
        let mut out = ScreenTable::new();
        for (col_key, col) in &table.cols {
            let (cs, ce) = col.bounds();
            let cell = |row: usize| trim(self.block(Region::new(row, cs, row, ce), "\n"), trimmed);

            let mut records: Vec<(FieldKey, String)> = Vec::new();
            if let Some((rs, re)) = table.row_range {
                let re = re.unwrap_or(rs);
                records.extend(
                    (rs..=re)
                        .enumerate()
                        .map(|(n, row)| (FieldKey::Index(n), cell(row))),
                );
            }
            records.extend(
                table
                    .rows
                    .iter()
                    .map(|(row_key, row)| (row_key.clone(), cell(row.start()))),
            );

            for (row_key, value) in records {
                let (outer, inner) = match table.orientation {
                    Orientation::Vertical => (col_key.clone(), row_key),
                    Orientation::Horizontal => (row_key, col_key.clone()),
                };
                out.entry(outer).or_default().insert(inner, value);
            }
        }
        out
    }
}

/// Block and string objects default both ends to the start cell.
fn text_region(region: Region) -> Region {
    Region {
        row_end: Some(region.row_end.unwrap_or(region.row_start)),
        col_end: Some(region.col_end.unwrap_or(region.col_start)),
        ..region
    }
}
