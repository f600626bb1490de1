use serde::{Deserialize, Serialize};
use std::fmt;

/// 送往分析服務的兩個欄位。年齡保持原始字串，不做數字檢查。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthQuery {
    pub symptoms: String,
    pub age: String,
}

impl HealthQuery {
    pub fn new(symptoms: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            age: age.into(),
        }
    }
}

/// `POST /analyze` 的回應。多餘欄位（例如 `sustainability`）直接忽略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub risk: String,
    pub confidence: f64,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_map: Option<String>,
}

impl AnalysisResponse {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_label(&self.risk)
    }

    /// e.g. `Risk : Moderate | Confidence : 72.5%`
    pub fn summary_line(&self) -> String {
        format!("Risk : {} | Confidence : {}%", self.risk, self.confidence)
    }

    /// 空字串的地圖連結視同沒有
    pub fn hospital_link(&self) -> Option<&str> {
        self.hospital_map.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Only the exact labels `Low` and `Moderate` map to their tiers; every
    /// other label (`High`, `EMERGENCY`, `Error`, ...) is treated as High.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => Self::Low,
            "Moderate" => Self::Moderate,
            _ => Self::High,
        }
    }

    /// 風險條寬度（百分比）
    pub fn bar_width(self) -> u8 {
        match self {
            Self::Low => 30,
            Self::Moderate => 60,
            Self::High => 90,
        }
    }

    pub fn style_class(self) -> &'static str {
        match self {
            Self::Low => "risk-low",
            Self::Moderate => "risk-medium",
            Self::High => "risk-high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// 只有 `"light"` 代表淺色，其他值一律回到預設的深色
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Large,
            Self::Large => Self::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Mouse { x: f64, y: f64 },
    Touch { touches: Vec<Point> },
}

/// 地理位置（度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
