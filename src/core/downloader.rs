// ─── Mod Downloader ───
// Fetches a resolved release's artifact and drops it into the mods folder.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::catalog::{CatalogClient, ReleaseDescriptor};
use crate::core::error::{UpdaterError, UpdaterResult};

pub struct ModDownloader;

impl ModDownloader {
    /// Download `release`'s artifact into `destination`, returning the path
    /// written. The folder is created if absent; an existing file of the same
    /// name is overwritten, which is how repeated runs refresh a mod in place.
    pub async fn download<C: CatalogClient + ?Sized>(
        &self,
        catalog: &C,
        release: &ReleaseDescriptor,
        destination: &Path,
    ) -> UpdaterResult<PathBuf> {
        let bytes = catalog.fetch_artifact(&release.artifact_url).await?;
        let path = write_artifact(destination, &release.artifact_filename, &bytes).await?;
        debug!(
            "Downloaded {} ({} bytes) -> {:?}",
            release.artifact_filename,
            bytes.len(),
            path
        );
        Ok(path)
    }
}

/// Write artifact bytes verbatim to `destination/filename`.
///
/// Creates the destination directory (and parents) as needed. Drops the file
/// handle immediately after writing to avoid Windows OS Error 5.
pub async fn write_artifact(
    destination: &Path,
    filename: &str,
    bytes: &[u8],
) -> UpdaterResult<PathBuf> {
    tokio::fs::create_dir_all(destination)
        .await
        .map_err(|e| UpdaterError::Io {
            path: destination.to_path_buf(),
            source: e,
        })?;

    let path = destination.join(filename);
    {
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| UpdaterError::Io {
                path: path.clone(),
                source: e,
            })?;
        file.write_all(bytes).await.map_err(|e| UpdaterError::Io {
            path: path.clone(),
            source: e,
        })?;
        file.flush().await.map_err(|e| UpdaterError::Io {
            path: path.clone(),
            source: e,
        })?;
        // file is dropped here — critical on Windows
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_destination_directory() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("mods").join("nested");

        let path = write_artifact(&dest, "sodium.jar", b"jar bytes")
            .await
            .unwrap();

        assert_eq!(path, dest.join("sodium.jar"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"jar bytes");
    }

    #[tokio::test]
    async fn second_write_overwrites_without_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().to_path_buf();

        write_artifact(&dest, "iris.jar", b"first").await.unwrap();
        let path = write_artifact(&dest, "iris.jar", b"second").await.unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"second");
        let entries = std::fs::read_dir(&dest).unwrap().count();
        assert_eq!(entries, 1);
    }
}
