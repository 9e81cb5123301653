//! The runtime-loaded string table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A key/value set of localized UI text for one language.
///
/// Decoded from a JSON object whose values are all strings; anything else is
/// a decode error. The table is populated once after resolution and read-only
/// afterwards.
///
/// # Example
///
/// ```
/// use locboot::StringTable;
///
/// let table = StringTable::decode(br#"{"loginTitle": "Anmeldung"}"#).unwrap();
/// assert_eq!(table.get("loginTitle"), Some("Anmeldung"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    /// Decode a string table from JSON bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Look up the localized text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// All keys, sorted for deterministic output.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.strings.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl From<HashMap<String, String>> for StringTable {
    fn from(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }
}

impl FromIterator<(String, String)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { strings: iter.into_iter().collect() }
    }
}
