// ─── Updater Config ───
// The mod roster and default folders, persisted as plain JSON so a frontend
// (or the user, by hand) can adjust them without touching the core.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::error::{UpdaterError, UpdaterResult};
use crate::core::model::ModEntry;

pub const CONFIG_FILE: &str = "modup.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Mods the frontend offers for updating. Catalog ids must be unique.
    pub mods: Vec<ModEntry>,
    /// Overrides the per-platform default mods folder when set.
    #[serde(default)]
    pub mods_folder: Option<PathBuf>,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            mods: vec![
                ModEntry::new("Continuity", "continuity"),
                ModEntry::new("Fabric API", "fabric-api"),
                ModEntry::new("Indium", "indium"),
                ModEntry::new("Iris Fabric", "iris"),
                ModEntry::new("Malilib Fabric", "malilib"),
                ModEntry::new("MiniHUD Fabric", "minihud"),
                ModEntry::new("Sodium Extra Fabric", "sodium-extra"),
                ModEntry::new("Tweakeroo Fabric", "tweakeroo"),
                ModEntry::new("WI Zoom", "wi-zoom"),
                ModEntry::new("Dynamic Lights", "dynamic-lights"),
            ],
            mods_folder: None,
        }
    }
}

impl UpdaterConfig {
    /// Load from `path`, falling back to the built-in roster when the file
    /// does not exist yet. A present-but-invalid file is an error; silently
    /// reverting to defaults would hide a broken roster edit.
    pub fn load_or_default(path: &Path) -> UpdaterResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| UpdaterError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;

        info!("Loaded {} roster mods from {:?}", config.mods.len(), path);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> UpdaterResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| UpdaterError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, json).map_err(|e| UpdaterError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Catalog ids identify a mod throughout a run, so duplicates are refused.
    pub fn validate(&self) -> UpdaterResult<()> {
        let mut seen = HashSet::new();
        for entry in &self.mods {
            if !seen.insert(entry.catalog_id.as_str()) {
                return Err(UpdaterError::DuplicateCatalogId(entry.catalog_id.clone()));
            }
        }
        Ok(())
    }

    /// The folder downloads land in: the configured override, or the
    /// platform's usual `.minecraft/mods` under the user profile.
    pub fn mods_folder(&self) -> UpdaterResult<PathBuf> {
        if let Some(folder) = &self.mods_folder {
            return Ok(folder.clone());
        }
        default_mods_folder().ok_or(UpdaterError::NoModsFolder)
    }
}

/// `%APPDATA%/.minecraft/mods` on Windows, `~/.minecraft/mods` elsewhere.
pub fn default_mods_folder() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        dirs::config_dir()?
    } else {
        dirs::home_dir()?
    };
    Some(base.join(".minecraft").join("mods"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_has_unique_catalog_ids() {
        let config = UpdaterConfig::default();
        assert_eq!(config.mods.len(), 10);
        config.validate().unwrap();
    }

    #[test]
    fn duplicate_catalog_id_is_refused() {
        let config = UpdaterConfig {
            mods: vec![
                ModEntry::new("Iris", "iris"),
                ModEntry::new("Iris again", "iris"),
            ],
            mods_folder: None,
        };

        assert!(matches!(
            config.validate(),
            Err(UpdaterError::DuplicateCatalogId(id)) if id == "iris"
        ));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = UpdaterConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.mods, UpdaterConfig::default().mods);
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = UpdaterConfig {
            mods: vec![ModEntry::new("Sodium", "sodium")],
            mods_folder: Some(dir.path().join("mods")),
        };
        config.save(&path).unwrap();

        let reloaded = UpdaterConfig::load_or_default(&path).unwrap();
        assert_eq!(reloaded.mods, config.mods);
        assert_eq!(reloaded.mods_folder().unwrap(), dir.path().join("mods"));
    }
}
