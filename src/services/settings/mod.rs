// Settings service module
// Loads and saves board settings as a TOML file

mod service;

pub use service::SettingsService;
