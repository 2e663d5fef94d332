use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Localized messages keyed by message id, e.g. `store/search.filter.title.brand`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Load a flat JSON object of message id to text.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Message for `id`, if the catalog has a non-empty one.
    pub fn message(&self, id: &str) -> Option<&str> {
        self.messages
            .get(id)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Message for `id` with each `{name}` placeholder replaced, or `id`
    /// itself when the catalog has no message for it.
    pub fn format(&self, id: &str, values: &[(&str, String)]) -> String {
        let Some(text) = self.message(id) else {
            return id.to_string();
        };
        values.iter().fold(text.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
    }

    /// Title to show for a filter group: its translation when one exists,
    /// otherwise `title` itself.
    pub fn filter_title<'a>(&'a self, title: &'a str) -> &'a str {
        self.message(title).unwrap_or(title)
    }
}
