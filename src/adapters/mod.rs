// Adapters layer: concrete implementations for external systems
// (http, storage, preferences, capabilities, terminal).

pub mod capabilities;
pub mod http;
pub mod preferences;
pub mod storage;
pub mod terminal;
