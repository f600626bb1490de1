pub mod app;
pub mod form_controller;
pub mod hospital;
pub mod pointer;
pub mod report;
pub mod theme;
pub mod voice;

pub use crate::domain::model::{AnalysisResponse, HealthQuery, RiskTier};
pub use crate::domain::ports::{
    AnalysisService, Dictation, Geolocation, PreferenceStore, Storage, View,
};
pub use crate::utils::error::Result;
