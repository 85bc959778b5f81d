//! Configuration management and validation.
//!
//! Provides the configuration for a catalog run: which file to load, the
//! queries the report runs and how results are rendered.

use crate::constants::{DEFAULT_MINIMUM_PRODUCTION, DEFAULT_REGION_QUERY};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Rendering of query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Fixed-width tables
    #[default]
    Human,
    /// Pretty-printed JSON array
    Json,
    /// Semicolon-delimited rows that can be loaded back
    Csv,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Catalog run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file to load
    pub source_path: PathBuf,

    /// Commune searched by the report
    pub region_query: String,

    /// Production threshold applied by the report
    pub minimum_production: i32,

    /// Output rendering
    pub render_format: RenderFormat,

    /// File to write results to (stdout when absent)
    pub output_file: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            region_query: DEFAULT_REGION_QUERY.to_string(),
            minimum_production: DEFAULT_MINIMUM_PRODUCTION,
            render_format: RenderFormat::Human,
            output_file: None,
        }
    }
}

impl CatalogConfig {
    /// Create configuration for a catalog file with default queries
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Self::default()
        }
    }

    /// Set the commune searched by the report
    pub fn with_region_query(mut self, region: impl Into<String>) -> Self {
        self.region_query = region.into();
        self
    }

    /// Set the production threshold applied by the report
    pub fn with_minimum_production(mut self, threshold: i32) -> Self {
        self.minimum_production = threshold;
        self
    }

    pub fn with_render_format(mut self, format: RenderFormat) -> Self {
        self.render_format = format;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Validate the configuration before any file is read
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(Error::configuration("Catalog file path cannot be empty"));
        }

        if let Some(output_file) = &self.output_file {
            if output_file == &self.source_path {
                return Err(Error::configuration(format!(
                    "Output file would overwrite the catalog being read: {}",
                    output_file.display()
                )));
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_report_defaults() {
        let config = CatalogConfig::new("centros.csv");
        assert_eq!(config.region_query, "Calbuco");
        assert_eq!(config.minimum_production, 1500);
        assert_eq!(config.render_format, RenderFormat::Human);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CatalogConfig::new("centros.txt")
            .with_region_query("Quellon")
            .with_minimum_production(-1)
            .with_render_format(RenderFormat::Json)
            .with_output_file(Some(PathBuf::from("out.json")));

        assert_eq!(config.region_query, "Quellon");
        assert_eq!(config.minimum_production, -1);
        assert_eq!(config.render_format, RenderFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_source_and_overwrite() {
        assert!(CatalogConfig::new("  ").validate().is_err());

        let config =
            CatalogConfig::new("centros.csv").with_output_file(Some(PathBuf::from("centros.csv")));
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_render_format_display_matches_serde_names() {
        for format in [RenderFormat::Human, RenderFormat::Json, RenderFormat::Csv] {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format));
        }
        assert_eq!(RenderFormat::default().to_string(), "human");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = CatalogConfig::new("centros.csv").with_render_format(RenderFormat::Csv);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"render_format\":\"csv\""));

        let restored: CatalogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
