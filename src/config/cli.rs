use crate::config::toml_config::{ClientSettings, TomlConfig};
use crate::domain::model::Coordinates;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "carebridge")]
#[command(about = "Terminal client for the CareBridge health risk analyzer")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL of the analysis service")]
    pub base_url: Option<String>,

    #[arg(long, help = "Directory downloaded reports are saved to")]
    pub download_dir: Option<String>,

    #[arg(long, help = "File holding the persisted theme preference")]
    pub preferences: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Analyze symptoms once and print the result
    Analyze(FormArgs),
    /// Download the PDF health report
    Report(FormArgs),
    /// Show or toggle the stored theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Interactive session
    Shell(LocationArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub symptoms: String,

    #[arg(long, default_value = "")]
    pub age: String,

    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct LocationArgs {
    #[arg(
        long,
        requires = "lon",
        allow_negative_numbers = true,
        help = "Latitude for hospital search"
    )]
    pub lat: Option<f64>,

    #[arg(
        long,
        requires = "lat",
        allow_negative_numbers = true,
        help = "Longitude for hospital search"
    )]
    pub lon: Option<f64>,
}

impl LocationArgs {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}

impl CliConfig {
    /// 預設值 → 設定檔 → 命令列參數
    pub fn resolve_settings(&self) -> Result<ClientSettings> {
        let mut settings = ClientSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            settings = settings.merge_file(&file);
        }

        if let Some(v) = &self.base_url {
            settings.base_url = v.clone();
        }
        if let Some(v) = &self.download_dir {
            settings.download_dir = v.clone();
        }
        if let Some(v) = &self.preferences {
            settings.preferences_path = v.clone();
        }

        Ok(settings)
    }
}
