use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::BoardSettings;

const SETTINGS_FILE: &str = "board.toml";

/// Reads and writes [`BoardSettings`] at a fixed path.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config directory, e.g.
    /// `~/.config/or-board/board.toml` on Linux.
    pub fn at_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("vn", "ORBoard", "or-board")
            .context("Could not determine a config directory for this user")?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<BoardSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(BoardSettings::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: BoardSettings = toml::from_str(&text)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .rooms
            .validate()
            .context("Invalid room catalog in settings")?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write settings, creating parent directories as needed.
    pub fn save(&self, settings: &BoardSettings) -> Result<()> {
        settings
            .rooms
            .validate()
            .context("Refusing to save an invalid room catalog")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Overwrite the file with defaults
    pub fn reset(&self) -> Result<BoardSettings> {
        let defaults = BoardSettings::default();
        self.save(&defaults)?;
        Ok(defaults)
    }
}
