//! Variable library data models

use serde::Deserialize;

/// Variable library (variable group) as returned by the API
///
/// Only the fields this tool displays are decoded; everything else in the
/// payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VariableLibrary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: i64,
}

/// Variable groups list response
#[derive(Deserialize, Debug, Default)]
pub struct VariableLibrariesResponse {
    pub count: Option<i64>,
    pub value: Option<Vec<VariableLibrary>>,
}

impl VariableLibrariesResponse {
    /// Number of libraries reported by the server, if present
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Consume the response, returning libraries in response order
    pub fn into_libraries(self) -> Vec<VariableLibrary> {
        self.value.unwrap_or_default()
    }
}
