pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod shell;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClientSettings;

pub use adapters::{
    capabilities::{FixedLocation, NoDictation},
    http::HttpAnalysisService,
    preferences::{JsonFilePreferences, MemoryPreferences},
    storage::LocalStorage,
    terminal::TerminalView,
};
pub use core::{app::CareBridgeApp, form_controller::SubmitOutcome};
pub use utils::error::{CareBridgeError, Result};
