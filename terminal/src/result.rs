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


use thiserror::Error;

/// Result type for screen definitions and extraction
pub type ScreenResult<T> = Result<T, ScreenError>;

/// Failures of whole screen definitions. Malformed entries inside a
/// definition are skipped rather than reported.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScreenError {
    /// The definition value is not a mapping of named objects.
    #[error("invalid screen definition: {0}")]
    InvalidDefinition(String),
    /// No definition is registered under this screen name.
    #[error("unknown screen definition: {0}")]
    UnknownDefinition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_error_display() {
        let error = ScreenError::UnknownDefinition("login".to_string());
        assert_eq!(error.to_string(), "unknown screen definition: login");
    }

    #[test]
    fn test_error_propagation() {
        fn inner() -> ScreenResult<()> {
            Err(ScreenError::InvalidDefinition("not an object".to_string()))
        }

        fn outer() -> ScreenResult<i32> {
            inner()?;
            Ok(42)
        }

        assert!(matches!(outer(), Err(ScreenError::InvalidDefinition(_))));
    }
}
