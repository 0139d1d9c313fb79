//! Host configuration, read from environment variables.

use std::path::PathBuf;

use shopcart_observability::LogFormat;
use shopcart_products::Catalog;

use crate::error::{WidgetError, WidgetResult};

pub const CURRENCY_VAR: &str = "SHOPCART_CURRENCY";
pub const CATALOG_VAR: &str = "SHOPCART_CATALOG";
pub const LOG_FORMAT_VAR: &str = "SHOPCART_LOG_FORMAT";

pub const DEFAULT_CURRENCY: &str = "FCFA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Label appended to every amount on the surface.
    pub currency: String,
    /// Catalog JSON file; `None` means the host supplies its own catalog.
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            catalog_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> WidgetResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or blank values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> WidgetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let currency = get(CURRENCY_VAR)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let catalog_path = get(CATALOG_VAR).map(PathBuf::from);
        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            currency,
            catalog_path,
            log_format,
        })
    }

    /// Load the configured catalog file, if any.
    pub fn load_catalog(&self) -> WidgetResult<Option<Catalog>> {
        let Some(path) = &self.catalog_path else {
            return Ok(None);
        };

        let text = std::fs::read_to_string(path).map_err(|e| {
            WidgetError::Config(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        let catalog = Catalog::from_json(&text)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog file loaded");
        Ok(Some(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = WidgetConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.currency, "FCFA");
    }

    #[test]
    fn reads_all_variables() {
        let config = WidgetConfig::from_lookup(lookup(&[
            (CURRENCY_VAR, " EUR "),
            (CATALOG_VAR, "/tmp/catalog.json"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.currency, "EUR");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = WidgetConfig::from_lookup(lookup(&[(CURRENCY_VAR, "  ")])).unwrap();
        assert_eq!(config.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn unknown_log_format_is_config_error() {
        let err = WidgetConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, WidgetError::Config(msg) if msg.contains("xml")));
    }

    #[test]
    fn missing_catalog_file_is_config_error() {
        let config = WidgetConfig {
            catalog_path: Some(PathBuf::from("/definitely/not/here/catalog.json")),
            ..WidgetConfig::default()
        };
        assert!(matches!(config.load_catalog(), Err(WidgetError::Config(_))));
        assert!(WidgetConfig::default().load_catalog().unwrap().is_none());
    }
}
