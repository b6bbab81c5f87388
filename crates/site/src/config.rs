//! Document-shell configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::document::{app_links, ResourceLink};

#[derive(Debug, Error)]
/// Errors raised while loading a [`ShellConfig`].
pub enum ConfigError {
    /// The TOML source could not be parsed into a config.
    #[error("invalid shell config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A configured link has an empty `href`.
    #[error("link #{index} has an empty href")]
    EmptyHref {
        /// Zero-based position of the offending link.
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Static document-shell settings shared by every page.
pub struct ShellConfig {
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Document title.
    pub title: String,
    /// Description meta content.
    pub description: String,
    /// Head resource links, rendered in order.
    pub links: Vec<ResourceLink>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: "Auqli Nexus".to_string(),
            description: "Shopify app for syncing products with Auqli.".to_string(),
            links: app_links(),
        }
    }
}

impl ShellConfig {
    /// Parses and validates a TOML config. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::EmptyHref`] when a link has a blank `href`.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self
            .links
            .iter()
            .position(|link| link.href.trim().is_empty())
        {
            Some(index) => Err(ConfigError::EmptyHref { index }),
            None => Ok(()),
        }
    }
}
