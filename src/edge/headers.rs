//! Edge header map.
//!
//! The edge platform keys headers by lower-cased name and allows several
//! `{key, value}` entries per name. Lookups here always take the first entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const USER_AGENT: &str = "user-agent";
pub const HOST: &str = "host";
/// Absolute URL reconstructed by the viewer stage.
pub const X_TARGET: &str = "x-target";
/// Rendering directive, literal `"true"` or `"false"`.
pub const X_SHOULD_RENDER: &str = "x-should-render";
/// Authentication header for the rendering service.
pub const X_API_KEY: &str = "x-api-key";

/// One header entry as carried by the edge event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderEntry {
    #[serde(default)]
    pub key: String,
    pub value: String,
}

/// Multi-value header map keyed by lower-cased header name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, Vec<HeaderEntry>>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value for `name`, if any.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.0
            .get(&name.to_ascii_lowercase())
            .and_then(|entries| entries.first())
            .map(|entry| entry.value.as_str())
    }

    /// Replace every entry for `name` with a single one.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let entry = HeaderEntry {
            key: name.clone(),
            value: value.into(),
        };
        self.0.insert(name, vec![entry]);
    }

    /// All entries for `name`.
    pub fn get_all(&self, name: &str) -> &[HeaderEntry] {
        self.0
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
