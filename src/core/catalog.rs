use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::error::UpdaterResult;

/// One published build of a mod, already flattened to the fields resolution
/// and download care about. Fetched fresh on every resolution; never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    /// The catalog's own version label, e.g. "0.92.0+1.20.1".
    pub version_number: String,
    /// Game versions this build declares support for.
    pub game_versions: Vec<String>,
    /// Loader names as the catalog spells them (lowercase on Modrinth).
    pub loaders: Vec<String>,
    pub artifact_url: String,
    pub artifact_filename: String,
}

/// Boundary to a mod-hosting catalog.
///
/// Any source able to list a project's releases and serve their artifacts can
/// back the updater; `ModrinthClient` is the shipped implementation, and tests
/// drive the whole flow with an in-memory one.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// All releases published for `project_id`, in catalog order.
    async fn list_releases(&self, project_id: &str) -> UpdaterResult<Vec<ReleaseDescriptor>>;

    /// The raw bytes of one release artifact.
    async fn fetch_artifact(&self, url: &str) -> UpdaterResult<Vec<u8>>;
}
