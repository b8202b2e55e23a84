// ─── Update Runner ───
// Drives one update run: resolve → (optional prompt) → download for every
// roster mod, strictly one at a time, collecting a per-mod report.

use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::core::catalog::CatalogClient;
use crate::core::downloader::ModDownloader;
use crate::core::model::{ModEntry, UpdateEvent, UpdateOutcome, UpdateSelection, UpdateStatus};
use crate::core::ports::InteractionPort;
use crate::core::resolver::{Resolution, VersionResolver};

pub struct UpdateRunner<C> {
    catalog: C,
    downloader: ModDownloader,
    /// Optional channel for progress events, so a frontend can run the
    /// updater on a worker task and keep its own thread responsive.
    events: Option<UnboundedSender<UpdateEvent>>,
}

impl<C: CatalogClient> UpdateRunner<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            downloader: ModDownloader,
            events: None,
        }
    }

    pub fn with_events(mut self, events: UnboundedSender<UpdateEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Process the whole roster against `selection` and return one outcome
    /// per mod, in roster order. Failures never abort the run; each mod's
    /// result stands alone.
    pub async fn run(
        &self,
        roster: &[ModEntry],
        selection: &UpdateSelection,
        port: &dyn InteractionPort,
    ) -> Vec<UpdateOutcome> {
        info!(
            "Updating {} of {} mods to {} ({})",
            selection.chosen.len(),
            roster.len(),
            selection.target_game_version,
            selection.loader
        );

        let mut outcomes = Vec::with_capacity(roster.len());
        for entry in roster {
            let status = if selection.chosen.contains(&entry.catalog_id) {
                self.emit(UpdateEvent::ModStarted {
                    mod_name: entry.display_name.clone(),
                });
                self.update_one(entry, selection, port).await
            } else {
                UpdateStatus::Skipped
            };

            let outcome = UpdateOutcome {
                mod_name: entry.display_name.clone(),
                status,
            };
            self.emit(UpdateEvent::ModFinished {
                outcome: outcome.clone(),
            });
            outcomes.push(outcome);
        }

        info!("Mod update completed");
        self.emit(UpdateEvent::RunCompleted {
            outcomes: outcomes.clone(),
        });
        outcomes
    }

    async fn update_one(
        &self,
        entry: &ModEntry,
        selection: &UpdateSelection,
        port: &dyn InteractionPort,
    ) -> UpdateStatus {
        let resolver = VersionResolver::new(&self.catalog);
        let resolution = match resolver
            .resolve(
                &entry.catalog_id,
                &selection.target_game_version,
                selection.loader,
            )
            .await
        {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!("Release lookup failed for {}: {}", entry.catalog_id, e);
                return UpdateStatus::FetchError {
                    reason: e.to_string(),
                };
            }
        };

        let release = match resolution {
            Resolution::Exact(release) => release,
            Resolution::Fallback(release) => {
                let accepted = port
                    .accept_fallback(
                        &entry.display_name,
                        &selection.target_game_version,
                        &release.version_number,
                    )
                    .await;
                if !accepted {
                    info!("{}: fallback {} declined", entry.display_name, release.version_number);
                    return UpdateStatus::Declined;
                }
                release
            }
            Resolution::NoMatch => {
                info!(
                    "No compatible release of {} for {}",
                    entry.display_name, selection.target_game_version
                );
                return UpdateStatus::NotFound;
            }
        };

        match self
            .downloader
            .download(&self.catalog, &release, &selection.destination)
            .await
        {
            Ok(path) => {
                info!(
                    "{} updated to {} ({:?})",
                    entry.display_name, release.version_number, path
                );
                UpdateStatus::Updated {
                    version: release.version_number,
                }
            }
            Err(e) => {
                warn!("Download failed for {}: {}", entry.display_name, e);
                UpdateStatus::FetchError {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn emit(&self, event: UpdateEvent) {
        if let Some(events) = &self.events {
            // A dropped receiver just means nobody is watching.
            let _ = events.send(event);
        }
    }
}
