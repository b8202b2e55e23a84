// ─── modup Core ───
// UI-agnostic backend for the mod auto-updater.
//
// Architecture:
//   core/
//     model      — roster entries, loaders, selections, outcomes, events
//     config     — mod roster + default folders, JSON persistence
//     catalog    — ReleaseDescriptor + the catalog adapter trait
//     modrinth   — Modrinth v2 implementation of the catalog trait
//     resolver   — release selection (exact match / fallback offer)
//     downloader — artifact fetch + verbatim write into the mods folder
//     updater    — sequential per-mod run producing the final report
//     ports      — frontend decision boundary (fallback yes/no)

pub mod catalog;
pub mod config;
pub mod downloader;
pub mod error;
pub mod http;
pub mod model;
pub mod modrinth;
pub mod ports;
pub mod resolver;
pub mod updater;
