// ─── Version Resolver ───
// Picks the release to install for one mod: exact match on game version and
// loader, or a "probably older" fallback the user gets to accept or refuse.

use tracing::debug;

use crate::core::catalog::{CatalogClient, ReleaseDescriptor};
use crate::core::error::UpdaterResult;
use crate::core::model::Loader;

/// Outcome of scanning a release list. Deciding that a prompt is needed
/// happens here; actually asking the user is the frontend port's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A release matching the requested game version and loader.
    Exact(ReleaseDescriptor),
    /// No exact match, but this release looks older than the target and the
    /// user may choose to take it anyway.
    Fallback(ReleaseDescriptor),
    /// Nothing in the catalog fits.
    NoMatch,
}

/// Scan `releases` for the target game version and loader.
///
/// Releases are ordered by their version label, descending. The ordering and
/// the "older than target" test are plain string comparison on purpose: it is
/// what the catalog's own labels sort by and what this tool has always done,
/// even though labels like "1.9" and "1.10" do not compare numerically.
/// The first exact hit wins; otherwise the first release carrying any
/// game-version string below the target is remembered as the fallback offer.
pub fn select_release(
    releases: Vec<ReleaseDescriptor>,
    target_game_version: &str,
    loader: Loader,
) -> Resolution {
    let mut sorted = releases;
    sorted.sort_by(|a, b| b.version_number.cmp(&a.version_number));

    let mut fallback: Option<ReleaseDescriptor> = None;

    for release in sorted {
        if supports(&release, target_game_version, loader) {
            return Resolution::Exact(release);
        }
        if fallback.is_none()
            && release
                .game_versions
                .iter()
                .any(|v| v.as_str() < target_game_version)
        {
            fallback = Some(release);
        }
    }

    match fallback {
        Some(release) => Resolution::Fallback(release),
        None => Resolution::NoMatch,
    }
}

fn supports(release: &ReleaseDescriptor, game_version: &str, loader: Loader) -> bool {
    release.game_versions.iter().any(|v| v == game_version)
        && release
            .loaders
            .iter()
            .any(|l| l.eq_ignore_ascii_case(loader.catalog_name()))
}

/// Fetches a project's release list and runs the selection scan.
pub struct VersionResolver<'a, C: CatalogClient + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogClient + ?Sized> VersionResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Resolve one project against the wanted game version and loader.
    /// Catalog failures bubble up; the caller records them per mod.
    pub async fn resolve(
        &self,
        project_id: &str,
        target_game_version: &str,
        loader: Loader,
    ) -> UpdaterResult<Resolution> {
        let releases = self.catalog.list_releases(project_id).await?;
        debug!(
            "Resolving {} against {} ({}): {} candidate releases",
            project_id,
            target_game_version,
            loader,
            releases.len()
        );
        Ok(select_release(releases, target_game_version, loader))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(version: &str, game_versions: &[&str], loaders: &[&str]) -> ReleaseDescriptor {
        ReleaseDescriptor {
            version_number: version.to_string(),
            game_versions: game_versions.iter().map(|s| s.to_string()).collect(),
            loaders: loaders.iter().map(|s| s.to_string()).collect(),
            artifact_url: format!("https://cdn.example/{version}.jar"),
            artifact_filename: format!("{version}.jar"),
        }
    }

    #[test]
    fn exact_match_wins() {
        let releases = vec![
            release("2.0.0", &["1.21"], &["fabric"]),
            release("1.5.0", &["1.20.1"], &["fabric"]),
        ];

        let resolution = select_release(releases, "1.20.1", Loader::Fabric);
        assert_eq!(
            resolution,
            Resolution::Exact(release("1.5.0", &["1.20.1"], &["fabric"]))
        );
    }

    #[test]
    fn newest_matching_label_wins_over_older_one() {
        let releases = vec![
            release("1.4.0", &["1.20.1"], &["fabric"]),
            release("1.5.0", &["1.20.1"], &["fabric"]),
        ];

        match select_release(releases, "1.20.1", Loader::Fabric) {
            Resolution::Exact(d) => assert_eq!(d.version_number, "1.5.0"),
            other => panic!("expected exact match, got {other:?}"),
        }
    }

    #[test]
    fn loader_must_match_case_insensitively() {
        let releases = vec![release("1.0.0", &["1.20.1"], &["Fabric"])];

        match select_release(releases.clone(), "1.20.1", Loader::Fabric) {
            Resolution::Exact(_) => {}
            other => panic!("expected exact match, got {other:?}"),
        }

        // Same release is no match for a different loader,
        // and offers itself as a fallback only by game version.
        match select_release(releases, "1.20.1", Loader::Forge) {
            Resolution::NoMatch => {}
            other => panic!("expected no match, got {other:?}"),
        }
    }

    #[test]
    fn wrong_loader_with_older_versions_becomes_fallback() {
        let releases = vec![release("1.0.0", &["1.19.2"], &["forge"])];

        match select_release(releases, "1.20.1", Loader::Fabric) {
            Resolution::Fallback(d) => assert_eq!(d.version_number, "1.0.0"),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn first_older_looking_release_is_the_fallback() {
        let releases = vec![
            release("3.0.0", &["1.19.2"], &["fabric"]),
            release("2.0.0", &["1.19.4"], &["fabric"]),
        ];

        // Scan order is descending by label; 3.0.0 is seen first and sticks
        // even though 2.0.0 supports a closer game version.
        match select_release(releases, "1.20.1", Loader::Fabric) {
            Resolution::Fallback(d) => assert_eq!(d.version_number, "3.0.0"),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_is_no_match() {
        assert_eq!(
            select_release(Vec::new(), "1.20.1", Loader::Fabric),
            Resolution::NoMatch
        );
    }

    #[test]
    fn comparison_is_lexical_not_numeric() {
        // "1.9" sorts above "1.10" as strings. Pinned so a change to real
        // version ordering is a conscious decision, not an accident.
        let releases = vec![
            release("1.10", &["1.16.5"], &["fabric"]),
            release("1.9", &["1.16.5"], &["fabric"]),
        ];

        match select_release(releases, "1.16.5", Loader::Fabric) {
            Resolution::Exact(d) => assert_eq!(d.version_number, "1.9"),
            other => panic!("expected exact match, got {other:?}"),
        }

        // Likewise a game version of "1.7" counts as "older" than "1.10.2"
        // only lexically; here it does not, because '7' > '1'.
        let releases = vec![release("1.0.0", &["1.7"], &["fabric"])];
        assert_eq!(
            select_release(releases, "1.10.2", Loader::Fabric),
            Resolution::NoMatch
        );
    }
}
