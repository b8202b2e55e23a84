// Console frontend for the modup core: gathers the selections a GUI would,
// then runs the updater on a worker task while this thread renders progress.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use modup::core::config::{UpdaterConfig, CONFIG_FILE};
use modup::core::http::build_http_client;
use modup::core::model::MINECRAFT_VERSIONS;
use modup::{
    InteractionPort, Loader, ModEntry, ModrinthClient, UpdateEvent, UpdateRunner, UpdateSelection,
    UpdateStatus, UpdaterResult,
};

fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    std::io::stdout().flush().ok();
    let mut buf = String::new();
    std::io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Stdin stand-in for the GUI's yes/no dialog.
struct ConsolePort;

#[async_trait]
impl InteractionPort for ConsolePort {
    async fn accept_fallback(
        &self,
        mod_name: &str,
        wanted_version: &str,
        offered_version: &str,
    ) -> bool {
        let prompt = format!(
            "Version {wanted_version} is not available for {mod_name}. \
             Use the previous version ({offered_version})? [y/N] "
        );
        tokio::task::spawn_blocking(move || {
            matches!(
                read_line(&prompt).to_ascii_lowercase().as_str(),
                "y" | "yes"
            )
        })
        .await
        .unwrap_or(false)
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("modup")
        .join(CONFIG_FILE)
}

fn ask_game_version() -> String {
    let default = MINECRAFT_VERSIONS[0];
    let input = read_line(&format!("Minecraft version [{default}]: "));
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

fn ask_loader() -> Loader {
    loop {
        let input = read_line("Mod platform (fabric/forge/quilt/neoforge) [fabric]: ");
        if input.is_empty() {
            return Loader::Fabric;
        }
        match input.parse() {
            Ok(loader) => return loader,
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn ask_destination(config: &UpdaterConfig) -> UpdaterResult<PathBuf> {
    let default = config.mods_folder()?;
    let input = read_line(&format!("Mods folder [{}]: ", default.display()));
    if input.is_empty() {
        Ok(default)
    } else {
        Ok(PathBuf::from(input))
    }
}

fn ask_chosen(roster: &[ModEntry]) -> BTreeSet<String> {
    println!("Mods:");
    for (idx, entry) in roster.iter().enumerate() {
        println!("  {:2}. {}", idx + 1, entry.display_name);
    }

    loop {
        let input = read_line("Mods to update (numbers, comma separated, or 'all') [all]: ");
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            return roster.iter().map(|m| m.catalog_id.clone()).collect();
        }

        let picks: Result<Vec<usize>, _> =
            input.split(',').map(|s| s.trim().parse::<usize>()).collect();
        match picks {
            Ok(indices) if indices.iter().all(|&i| i >= 1 && i <= roster.len()) => {
                return indices
                    .into_iter()
                    .map(|i| roster[i - 1].catalog_id.clone())
                    .collect();
            }
            _ => eprintln!("Enter numbers between 1 and {}", roster.len()),
        }
    }
}

#[tokio::main]
async fn main() -> UpdaterResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let path = config_path();
    let config = UpdaterConfig::load_or_default(&path)?;
    config.validate()?;
    if !path.exists() {
        // First run: persist the defaults so the user has a file to edit.
        if let Err(e) = config.save(&path) {
            warn!("Could not write default config to {:?}: {}", path, e);
        }
    }
    let roster = config.mods.clone();

    let selection = UpdateSelection {
        target_game_version: ask_game_version(),
        loader: ask_loader(),
        chosen: ask_chosen(&roster),
        destination: ask_destination(&config)?,
    };

    let catalog = ModrinthClient::new(build_http_client()?);
    let (events, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let runner = UpdateRunner::new(catalog).with_events(events);

    // Network and disk work happens on the worker; this task only renders.
    let worker = tokio::spawn(async move {
        let port = ConsolePort;
        runner.run(&roster, &selection, &port).await
    });

    while let Some(event) = rx.recv().await {
        match event {
            UpdateEvent::ModStarted { mod_name } => println!("Checking {mod_name}..."),
            UpdateEvent::ModFinished { outcome } => {
                if outcome.status != UpdateStatus::Skipped {
                    println!("  {outcome}");
                }
            }
            UpdateEvent::RunCompleted { .. } => println!("Mod update completed!"),
        }
    }

    let outcomes = worker.await.expect("update worker panicked");
    let updated = outcomes
        .iter()
        .filter(|o| matches!(o.status, UpdateStatus::Updated { .. }))
        .count();
    println!("{updated} of {} mods updated.", outcomes.len());

    Ok(())
}
