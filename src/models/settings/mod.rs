// Settings module
// User-tunable defaults for the event form and the demo window

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Length of a new event in minutes (end = start + duration)
    pub default_event_duration_minutes: u32,
    /// Delay between "closing" and the modal actually disappearing
    pub close_delay_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_event_duration_minutes: 60,
            close_delay_ms: 300,
            window_width: 1000.0,
            window_height: 700.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_event_duration_minutes == 0 {
            return Err("Default event duration must be at least one minute".to_string());
        }
        if self.default_event_duration_minutes >= 24 * 60 {
            return Err("Default event duration must be shorter than a day".to_string());
        }
        if self.close_delay_ms > 5_000 {
            return Err("Close delay is too long (max 5000 ms)".to_string());
        }
        if self.window_width < 320.0 || self.window_height < 220.0 {
            return Err("Window size is too small".to_string());
        }
        Ok(())
    }

    pub fn close_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.close_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.default_event_duration_minutes, 60);
        assert_eq!(settings.close_delay().as_millis(), 300);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let settings = Settings {
            default_event_duration_minutes: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("close_delay_ms = 150").unwrap();
        assert_eq!(settings.close_delay_ms, 150);
        assert_eq!(settings.default_event_duration_minutes, 60);
    }
}
