//! Portal configuration.
//!
//! Loaded from an optional TOML file; a missing `--config` means defaults.
//!
//! ```toml
//! applications_parent = "/srv/web2py"
//!
//! [[catalog.models]]
//! model_key = "lda"
//! model_desc = "LDA topic model"
//! ```

use crate::error::{PortalError, Result};
use crate::menu::StaticCatalog;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Folder containing `applications/`, one subfolder per dataset.
    #[serde(default = "default_applications_parent")]
    pub applications_parent: PathBuf,

    /// Model table served to every dataset.
    #[serde(default)]
    pub catalog: StaticCatalog,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            applications_parent: default_applications_parent(),
            catalog: StaticCatalog::default(),
        }
    }
}

fn default_applications_parent() -> PathBuf {
    PathBuf::from(".")
}

impl PortalConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PortalError::io(path, e))?;
        toml::from_str(&text)
            .map_err(|e| PortalError::config(format!("failed to parse {}: {e}", path.display())))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
