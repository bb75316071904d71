//! Custom mapping configuration persistence
//!
//! Stores user drive overrides in `~/.config/pathswap/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mapping::{MappingError, MappingTable};

/// On-disk configuration that persists across sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Custom drive → mount-path overrides (e.g. `"D:"` → `/data`).
    /// Drives without an entry use the default `/mnt/<drive>` convention.
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

impl SwapConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path (`--config` override).
    ///
    /// Unlike [`load`](Self::load), a missing or unparseable file here is an
    /// error: the user asked for this file specifically.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build the immutable mapping table from the configured entries.
    ///
    /// A config that maps two drives to the same mount path is rejected
    /// here, not silently resolved.
    pub fn mapping_table(&self) -> Result<MappingTable, MappingError> {
        MappingTable::new(&self.custom)
    }
}
