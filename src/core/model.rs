use std::collections::BTreeSet;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::UpdaterError;

/// Supported mod loaders — strongly typed, no magic strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    Fabric,
    Forge,
    Quilt,
    NeoForge,
}

impl Loader {
    /// Every loader a frontend can offer, in presentation order.
    pub const ALL: [Loader; 4] = [Loader::Fabric, Loader::Forge, Loader::Quilt, Loader::NeoForge];

    /// The identifier the catalog uses in a release's `loaders` list.
    pub fn catalog_name(&self) -> &'static str {
        match self {
            Loader::Fabric => "fabric",
            Loader::Forge => "forge",
            Loader::Quilt => "quilt",
            Loader::NeoForge => "neoforge",
        }
    }
}

impl std::fmt::Display for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.catalog_name())
    }
}

impl FromStr for Loader {
    type Err = UpdaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fabric" => Ok(Loader::Fabric),
            "forge" => Ok(Loader::Forge),
            "quilt" => Ok(Loader::Quilt),
            "neoforge" => Ok(Loader::NeoForge),
            _ => Err(UpdaterError::UnknownLoader(s.to_string())),
        }
    }
}

/// One mod the user can track: a display name plus its catalog project id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModEntry {
    pub display_name: String,
    pub catalog_id: String,
}

impl ModEntry {
    pub fn new(display_name: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            catalog_id: catalog_id.into(),
        }
    }
}

/// Everything one update run needs, captured as a value.
///
/// The destination folder travels here instead of living in process-wide
/// mutable state, so two runs with different folders cannot interfere.
#[derive(Debug, Clone)]
pub struct UpdateSelection {
    pub target_game_version: String,
    pub loader: Loader,
    /// Catalog ids of the mods the user ticked.
    pub chosen: BTreeSet<String>,
    pub destination: PathBuf,
}

/// Terminal state of one mod within a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateStatus {
    /// Downloaded and written; carries the release's version label.
    Updated { version: String },
    /// Present in the roster but not ticked by the user.
    Skipped,
    /// User turned down the offered fallback release.
    Declined,
    /// The catalog has no release for this game version and loader.
    NotFound,
    /// Catalog or artifact request failed; the run continued without it.
    FetchError { reason: String },
}

/// One line of the final report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub mod_name: String,
    #[serde(flatten)]
    pub status: UpdateStatus,
}

impl std::fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.status {
            UpdateStatus::Updated { version } => {
                write!(f, "{}: updated to {}", self.mod_name, version)
            }
            UpdateStatus::Skipped => write!(f, "{}: skipped", self.mod_name),
            UpdateStatus::Declined => write!(f, "{}: fallback declined", self.mod_name),
            UpdateStatus::NotFound => write!(f, "{}: no compatible release", self.mod_name),
            UpdateStatus::FetchError { reason } => {
                write!(f, "{}: fetch failed ({})", self.mod_name, reason)
            }
        }
    }
}

/// Progress message emitted while a run is in flight, so a frontend can stay
/// responsive while the worker task does the network and disk work.
#[derive(Debug, Clone)]
pub enum UpdateEvent {
    ModStarted { mod_name: String },
    ModFinished { outcome: UpdateOutcome },
    RunCompleted { outcomes: Vec<UpdateOutcome> },
}

/// Release versions from 1.7 onwards (no snapshots), newest first.
/// Frontends present this list for the target-version picker.
pub const MINECRAFT_VERSIONS: &[&str] = &[
    "1.21.1", "1.21", "1.20.6", "1.20.5", "1.20.4", "1.20.3", "1.19.4", "1.19.3", "1.19.2",
    "1.19", "1.18.2", "1.18.1", "1.18", "1.17.1", "1.17", "1.16.5", "1.16.4", "1.16.3", "1.16.2",
    "1.16.1", "1.16", "1.15.2", "1.15.1", "1.14.4", "1.14.3", "1.14.2", "1.14.1", "1.13.2",
    "1.13.1", "1.13", "1.12.2", "1.12.1", "1.12", "1.11.2", "1.11.1", "1.11", "1.10.2", "1.9.4",
    "1.9", "1.8.9", "1.8.8", "1.8.7", "1.8.6", "1.7.10", "1.7.9", "1.7.8", "1.7.2",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_parses_case_insensitively() {
        assert_eq!("Fabric".parse::<Loader>().unwrap(), Loader::Fabric);
        assert_eq!("NEOFORGE".parse::<Loader>().unwrap(), Loader::NeoForge);
        assert!("liteloader".parse::<Loader>().is_err());
    }

    #[test]
    fn loader_displays_catalog_name() {
        assert_eq!(Loader::NeoForge.to_string(), "neoforge");
        assert_eq!(Loader::Fabric.to_string(), "fabric");
    }

    #[test]
    fn outcome_serializes_with_flattened_status() {
        let outcome = UpdateOutcome {
            mod_name: "Fabric API".to_string(),
            status: UpdateStatus::Updated {
                version: "0.92.0".to_string(),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["mod_name"], "Fabric API");
        assert_eq!(json["status"], "updated");
        assert_eq!(json["version"], "0.92.0");
    }
}
