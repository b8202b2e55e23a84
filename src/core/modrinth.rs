// ─── Modrinth Catalog ───
// Adapter for the Modrinth v2 version-list API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::core::catalog::{CatalogClient, ReleaseDescriptor};
use crate::core::error::{UpdaterError, UpdaterResult};

const MODRINTH_API_BASE: &str = "https://api.modrinth.com/v2";

/// Wire shape of one entry from `GET /project/{id}/version`.
#[derive(Debug, Deserialize)]
pub struct ProjectVersion {
    pub version_number: String,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub loaders: Vec<String>,
    #[serde(default)]
    pub files: Vec<VersionFile>,
}

#[derive(Debug, Deserialize)]
pub struct VersionFile {
    pub url: String,
    pub filename: String,
    #[serde(default)]
    pub primary: bool,
}

impl ProjectVersion {
    /// Flatten to a descriptor, choosing the primary file when the catalog
    /// marks one and the first file otherwise. A release with no files at all
    /// cannot be downloaded, so it yields `None` and is dropped upstream.
    fn into_descriptor(mut self) -> Option<ReleaseDescriptor> {
        if self.files.is_empty() {
            return None;
        }
        let idx = self.files.iter().position(|f| f.primary).unwrap_or(0);
        let file = self.files.swap_remove(idx);

        Some(ReleaseDescriptor {
            artifact_url: file.url,
            artifact_filename: file.filename,
            version_number: self.version_number,
            game_versions: self.game_versions,
            loaders: self.loaders,
        })
    }
}

/// Modrinth-backed implementation of [`CatalogClient`].
pub struct ModrinthClient {
    client: reqwest::Client,
    base_url: String,
}

impl ModrinthClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: MODRINTH_API_BASE.to_string(),
        }
    }

    /// Point at a different API root (staging mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CatalogClient for ModrinthClient {
    async fn list_releases(&self, project_id: &str) -> UpdaterResult<Vec<ReleaseDescriptor>> {
        let url = format!("{}/project/{}/version", self.base_url, project_id);
        debug!("Fetching release list: {}", url);

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpdaterError::CatalogRequest {
                project: project_id.to_string(),
                status: status.as_u16(),
            });
        }

        let versions = resp.json::<Vec<ProjectVersion>>().await?;
        let releases: Vec<ReleaseDescriptor> = versions
            .into_iter()
            .filter_map(ProjectVersion::into_descriptor)
            .collect();

        info!("Loaded {} releases for {}", releases.len(), project_id);
        Ok(releases)
    }

    async fn fetch_artifact(&self, url: &str) -> UpdaterResult<Vec<u8>> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpdaterError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}
