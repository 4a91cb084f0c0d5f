// Configuration management
//
// Console settings persisted as TOML: video preset, window presentation,
// and screenshot options.

use crate::display::video::VideoPreset;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file path
const CONFIG_FILE: &str = "console_config.toml";

/// Console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Video preset name ("lowres" or "highres"; unknown falls back to lowres)
    pub preset: String,

    /// Window scale (1-8)
    pub scale: u32,

    /// Target frame rate in Hz
    pub fps: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Horizontal overscan offset applied to hardware blits
    pub overscan_x: i32,
}

/// Screenshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotConfig {
    /// Directory screenshots are saved into
    pub directory: PathBuf,

    /// Include a timestamp in the filename
    pub include_timestamp: bool,
}

impl ConsoleConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            video: VideoConfig {
                preset: VideoPreset::LowRes.name().to_string(),
                scale: 3,
                fps: 60,
                vsync: true,
                overscan_x: 0,
            },
            screenshot: ScreenshotConfig {
                directory: PathBuf::from("screenshots"),
                include_timestamp: true,
            },
        }
    }

    /// Resolve the configured video preset
    pub fn video_preset(&self) -> VideoPreset {
        VideoPreset::from_name(&self.video.preset)
    }

    /// Load the configuration from the default path, or defaults on failure
    pub fn load_or_default() -> Self {
        Self::load(CONFIG_FILE).unwrap_or_else(|e| {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("Failed to load {}: {}, using defaults", CONFIG_FILE, e);
            }
            Self::new()
        })
    }

    /// Load the configuration from a path
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save the configuration to a path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::new();
        assert_eq!(config.video.preset, "lowres");
        assert_eq!(config.video.scale, 3);
        assert_eq!(config.video.fps, 60);
        assert!(config.video.vsync);
        assert_eq!(config.video.overscan_x, 0);
        assert_eq!(config.video_preset(), VideoPreset::LowRes);
    }

    #[test]
    fn test_unknown_preset_falls_back() {
        let mut config = ConsoleConfig::new();
        config.video.preset = "cinematic".to_string();
        assert_eq!(config.video_preset(), VideoPreset::LowRes);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ConsoleConfig::new();
        config.video.preset = "highres".to_string();
        config.video.scale = 2;
        config.video.overscan_x = 8;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: ConsoleConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.video.preset, "highres");
        assert_eq!(parsed.video.scale, 2);
        assert_eq!(parsed.video.overscan_x, 8);
        assert_eq!(parsed.video_preset(), VideoPreset::HighRes);
    }
}
