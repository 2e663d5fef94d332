//! Query-string handling for facet links.
//!
//! `map` and `rest` travel as comma-separated values. Parsing keeps the raw
//! text of each value; rendering percent-encodes every value but keeps the
//! separating commas literal so links stay readable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Link has no query component: {0}")]
    MissingQuery(String),
    #[error("Link query has no map parameter: {0}")]
    MissingMap(String),
}

/// Parameters of a link's query component, values split on `,`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkQuery {
    params: HashMap<String, Vec<String>>,
}

impl LinkQuery {
    /// Parse the query component of `link`.
    ///
    /// Only the text between the first `?` and any following `?` is read.
    /// A parameter repeated later in the query replaces the earlier one.
    pub fn parse(link: &str) -> Result<Self, QueryError> {
        let query = link
            .split('?')
            .nth(1)
            .ok_or_else(|| QueryError::MissingQuery(link.to_string()))?;

        let params = query
            .split('&')
            .map(|param| {
                let (name, values) = param.split_once('=').unwrap_or((param, ""));
                let values = values.split(',').map(str::to_string).collect();
                (name.to_string(), values)
            })
            .collect();

        Ok(Self { params })
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// The `map` parameter, required for facet links.
    pub fn map(&self, link: &str) -> Result<&[String], QueryError> {
        self.get("map")
            .ok_or_else(|| QueryError::MissingMap(link.to_string()))
    }
}

/// Split a comma-separated query value, treating the empty string as no values.
pub fn split_values(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}

/// Query of a navigation target produced by a filter click.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationQuery {
    pub map: Vec<String>,
    /// Omitted on the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Omitted for the default sort order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    pub rest: Vec<String>,
}

impl NavigationQuery {
    /// Render as `map=…&page=…&order=…&rest=…`, skipping omitted fields.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("map={}", join_encoded(&self.map))];
        if let Some(page) = self.page {
            parts.push(format!("page={page}"));
        }
        if let Some(ref order) = self.order {
            parts.push(format!("order={}", urlencoding::encode(order)));
        }
        parts.push(format!("rest={}", join_encoded(&self.rest)));
        parts.join("&")
    }
}

fn join_encoded(values: &[String]) -> String {
    values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
