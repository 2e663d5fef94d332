use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// How many filter groups may be open at once
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OpenFiltersMode {
    /// Each group opens and closes on its own
    #[default]
    Many,
    /// Opening a group closes the previously open one
    One,
    /// Unrecognized setting value, kept so it can be reported
    Unknown(String),
}

impl OpenFiltersMode {
    pub fn as_str(&self) -> &str {
        match self {
            OpenFiltersMode::Many => "many",
            OpenFiltersMode::One => "one",
            OpenFiltersMode::Unknown(value) => value,
        }
    }
}

impl From<String> for OpenFiltersMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "many" => OpenFiltersMode::Many,
            "one" => OpenFiltersMode::One,
            _ => OpenFiltersMode::Unknown(value),
        }
    }
}

impl From<OpenFiltersMode> for String {
    fn from(mode: OpenFiltersMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Store settings that shape the filter panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSettings {
    /// Render only the first facets of a long group until it is scrolled
    pub enable_search_rendering_optimization: bool,
    /// Fetch truncated facets only when the group is expanded
    pub enable_filters_fetch_optimization: bool,
    /// Show a search bar in groups with more facets than this
    pub threshold_for_facet_search: Option<usize>,
    pub open_filters_mode: OpenFiltersMode,
    /// Truncate groups with many facets behind a "see more" toggle
    pub truncate_filters: bool,
}

impl FacetSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = FacetSettings::from_yaml_str("{}").unwrap();
        assert_eq!(settings, FacetSettings::default());
        assert_eq!(settings.open_filters_mode, OpenFiltersMode::Many);
        assert_eq!(settings.threshold_for_facet_search, None);
    }

    #[test]
    fn test_parse_settings() {
        let settings = FacetSettings::from_yaml_str(
            r#"
enable_search_rendering_optimization: true
enable_filters_fetch_optimization: false
threshold_for_facet_search: 15
open_filters_mode: one
truncate_filters: true
"#,
        )
        .unwrap();
        assert!(settings.enable_search_rendering_optimization);
        assert!(!settings.enable_filters_fetch_optimization);
        assert_eq!(settings.threshold_for_facet_search, Some(15));
        assert_eq!(settings.open_filters_mode, OpenFiltersMode::One);
        assert!(settings.truncate_filters);
    }

    #[test]
    fn test_unknown_open_mode_is_kept() {
        let settings = FacetSettings::from_yaml_str("open_filters_mode: some").unwrap();
        assert_eq!(
            settings.open_filters_mode,
            OpenFiltersMode::Unknown("some".into())
        );
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FacetSettings::from_yaml_str("threshold_for_facet_search: lots").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = FacetSettings::load(&dir.path().join("settings.yaml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
