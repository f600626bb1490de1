use crate::adapters::http::{DEFAULT_ANALYZE_PATH, DEFAULT_REPORT_PATH};
use crate::core::report::REPORT_FILENAME;
use crate::utils::error::{CareBridgeError, Result};
use crate::utils::validation::{validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "https://carebridge-backend-ro4e.onrender.com";
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";
pub const DEFAULT_PREFERENCES_PATH: &str = "carebridge-preferences.json";

/// 設定檔格式，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub analyze_path: Option<String>,
    pub report_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub download_dir: Option<String>,
    pub report_filename: Option<String>,
    pub preferences_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub pointer_glow: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CareBridgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CareBridgeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${CAREBRIDGE_URL})，找不到的變數原樣保留
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

/// Fully resolved client settings: defaults, then config file, then flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub analyze_path: String,
    pub report_path: String,
    pub download_dir: String,
    pub report_filename: String,
    pub preferences_path: String,
    pub pointer_glow: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            analyze_path: DEFAULT_ANALYZE_PATH.to_string(),
            report_path: DEFAULT_REPORT_PATH.to_string(),
            download_dir: DEFAULT_DOWNLOAD_DIR.to_string(),
            report_filename: REPORT_FILENAME.to_string(),
            preferences_path: DEFAULT_PREFERENCES_PATH.to_string(),
            pointer_glow: true,
        }
    }
}

impl ClientSettings {
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        let service = &file.service;
        let storage = &file.storage;

        if let Some(v) = &service.base_url {
            self.base_url = v.clone();
        }
        if let Some(v) = &service.analyze_path {
            self.analyze_path = v.clone();
        }
        if let Some(v) = &service.report_path {
            self.report_path = v.clone();
        }
        if let Some(v) = &storage.download_dir {
            self.download_dir = v.clone();
        }
        if let Some(v) = &storage.report_filename {
            self.report_filename = v.clone();
        }
        if let Some(v) = &storage.preferences_path {
            self.preferences_path = v.clone();
        }
        if let Some(v) = file.display.pointer_glow {
            self.pointer_glow = v;
        }
        self
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("service.base_url", &self.base_url)?;
        validate_path("storage.download_dir", &self.download_dir)?;
        validate_path("storage.preferences_path", &self.preferences_path)?;
        validate_path("storage.report_filename", &self.report_filename)?;

        for (field, path) in [
            ("service.analyze_path", &self.analyze_path),
            ("service.report_path", &self.report_path),
        ] {
            if !path.starts_with('/') {
                return Err(CareBridgeError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: path.clone(),
                    reason: "Endpoint path must start with '/'".to_string(),
                });
            }
        }

        Ok(())
    }
}
