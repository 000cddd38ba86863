//! User settings stored as settings.json in the app data directory

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("experience-settings-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn defaults_have_no_geometry() {
        let settings = Settings::default();
        assert!(settings.window_x.is_none());
        assert!(settings.window_h.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = unique_temp_dir();
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");

        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(1280.0),
            window_h: Some(800.0),
        };
        settings.save(&dir);

        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_x, Some(10.0));
        assert_eq!(loaded.window_h, Some(800.0));
    }

    #[test]
    fn unknown_or_missing_fields_fall_back_to_defaults() {
        let dir = unique_temp_dir();
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        std::fs::write(dir.join("settings.json"), r#"{"window_w": 640.0, "stale": 1}"#)
            .expect("settings file should be writable");

        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_w, Some(640.0));
        assert!(loaded.window_x.is_none());
    }
}
