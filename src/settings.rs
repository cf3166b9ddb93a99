//! Demo settings
//!
//! Settings are read from `~/.config/meshflip/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use meshflip_core::Axis;
use meshflip_primitives::PrimitiveKind;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// What the demo flips and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipSettings {
    /// Axis to mirror along
    pub axis: Axis,
    /// Shape to generate
    pub primitive: PrimitiveKind,
    /// Validate mesh invariants before flipping
    pub checked: bool,
    /// Number of times to flip (even counts restore the original)
    pub passes: u32,
}

impl Default for FlipSettings {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            primitive: PrimitiveKind::Capsule,
            checked: true,
            passes: 1,
        }
    }
}

impl FlipSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("meshflip"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match Self::read(&path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings file
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse settings {:?}", path))
    }

    /// Parse settings from TOML text, clamping out-of-range values
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut settings: Self = toml::from_str(content)?;
        settings.passes = settings.passes.max(1);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let settings = FlipSettings::parse(
            r#"
            axis = "z"
            primitive = "quads"
            checked = false
            passes = 2
            "#,
        )
        .unwrap();
        assert_eq!(settings.axis, Axis::Z);
        assert_eq!(settings.primitive, PrimitiveKind::Quads);
        assert!(!settings.checked);
        assert_eq!(settings.passes, 2);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let settings = FlipSettings::parse("axis = \"y\"").unwrap();
        assert_eq!(settings.axis, Axis::Y);
        assert_eq!(settings.primitive, PrimitiveKind::Capsule);
        assert!(settings.checked);
        assert_eq!(settings.passes, 1);
    }

    #[test]
    fn test_parse_clamps_passes() {
        let settings = FlipSettings::parse("passes = 0").unwrap();
        assert_eq!(settings.passes, 1);
    }

    #[test]
    fn test_read_reports_missing_and_invalid_files() {
        let dir = std::env::temp_dir().join(format!("meshflip-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let missing = FlipSettings::read(&dir.join("missing.toml")).unwrap_err();
        assert!(format!("{:#}", missing).contains("Failed to read"));

        let bad = dir.join("bad.toml");
        fs::write(&bad, "axis = 3").unwrap();
        let err = FlipSettings::read(&bad).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));

        let good = dir.join("good.toml");
        fs::write(&good, "primitive = \"sphere\"").unwrap();
        assert_eq!(FlipSettings::read(&good).unwrap().primitive, PrimitiveKind::Sphere);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_parse_rejects_unknown_axis() {
        assert!(FlipSettings::parse("axis = \"w\"").is_err());
    }
}
