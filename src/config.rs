use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FolioConfig {
    pub theme: Option<String>,
}

impl FolioConfig {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.toml")
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| e.to_string())?;

        std::fs::write(path, contents).map_err(|e| e.to_string())
    }

    /// Stored preference, if any.
    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some("light") => Some(ThemeMode::Light),
            Some("dark") => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = Some(mode.as_str().to_string());
    }
}
