//! Demo settings persistence
//!
//! Handles saving and loading the rating widget configuration. The rating
//! value itself is owned by the app and never written to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::widgets::StarMetrics;

/// Largest max rating offered by the demo
pub const MAX_RATING_LIMIT: u32 = 10;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Rating widget configuration
    #[serde(default)]
    pub rating: RatingSettings,
    /// Display settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Rating widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Number of icon slots
    pub max_rating: u32,
    /// Accept drag input
    pub enable_dragging: bool,
    /// Accept tap input
    pub enable_tapping: bool,
    /// Star icon size in logical pixels
    pub star_size: f32,
    /// Gap between stars in logical pixels
    pub spacing: f32,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            max_rating: 5,
            enable_dragging: true,
            enable_tapping: true,
            star_size: StarMetrics::DEFAULT_SIZE,
            spacing: StarMetrics::DEFAULT_SPACING,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl RatingSettings {
    /// Replace values the widget cannot render with safe ones
    pub fn sanitized(mut self) -> Self {
        self.max_rating = self.max_rating.clamp(1, MAX_RATING_LIMIT);
        if !(self.star_size.is_finite() && self.star_size > 0.0) {
            self.star_size = StarMetrics::DEFAULT_SIZE;
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            self.spacing = StarMetrics::DEFAULT_SPACING;
        }
        self
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rustle", "RustleRating")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from `path`, or return defaults if it is missing or unreadable
    pub fn load(path: Option<&Path>) -> Self {
        path.and_then(|path| match Self::load_from_file(path) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::debug!("Using default settings ({:?}): {}", path, e);
                None
            }
        })
        .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings: Self =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;

        Ok(Self {
            rating: settings.rating.sanitized(),
            ..settings
        })
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
