pub mod core;

pub use crate::core::catalog::{CatalogClient, ReleaseDescriptor};
pub use crate::core::config::UpdaterConfig;
pub use crate::core::error::{UpdaterError, UpdaterResult};
pub use crate::core::model::{
    Loader, ModEntry, UpdateEvent, UpdateOutcome, UpdateSelection, UpdateStatus,
};
pub use crate::core::modrinth::ModrinthClient;
pub use crate::core::ports::InteractionPort;
pub use crate::core::updater::UpdateRunner;
