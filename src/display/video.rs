// Video presets - The two fixed display configurations
//
// The console supports exactly two video modes. Selecting an unknown preset
// name (e.g. from a config file) falls back to LowRes.

use log::warn;
use serde::{Deserialize, Serialize};

/// Framebuffer color depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 16 bits per pixel
    Bpp16,
    /// 32 bits per pixel
    Bpp32,
}

/// A predefined video configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoPreset {
    /// 320x240, 16-bit color, no interlacing (the common setup)
    LowRes,
    /// 640x480, 32-bit color, interlaced
    HighRes,
}

/// Concrete parameters of a video mode
#[derive(Debug, Clone, Copy)]
pub struct VideoMode {
    /// Horizontal resolution in pixels
    pub width: usize,
    /// Vertical resolution in pixels
    pub height: usize,
    /// Framebuffer color depth
    pub depth: ColorDepth,
    /// Whether the mode is interlaced
    pub interlaced: bool,
}

impl VideoPreset {
    /// Resolve the preset to its concrete mode parameters
    pub fn mode(self) -> VideoMode {
        match self {
            VideoPreset::LowRes => VideoMode {
                width: 320,
                height: 240,
                depth: ColorDepth::Bpp16,
                interlaced: false,
            },
            VideoPreset::HighRes => VideoMode {
                width: 640,
                height: 480,
                depth: ColorDepth::Bpp32,
                interlaced: true,
            },
        }
    }

    /// Parse a preset from its config-file name
    ///
    /// Unknown names fall back to `LowRes` with a logged warning.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "lowres" => VideoPreset::LowRes,
            "highres" => VideoPreset::HighRes,
            other => {
                warn!("Unknown video preset '{}', falling back to lowres", other);
                VideoPreset::LowRes
            }
        }
    }

    /// Config-file name of the preset
    pub fn name(self) -> &'static str {
        match self {
            VideoPreset::LowRes => "lowres",
            VideoPreset::HighRes => "highres",
        }
    }
}

impl Default for VideoPreset {
    fn default() -> Self {
        VideoPreset::LowRes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowres_mode() {
        let mode = VideoPreset::LowRes.mode();
        assert_eq!(mode.width, 320);
        assert_eq!(mode.height, 240);
        assert_eq!(mode.depth, ColorDepth::Bpp16);
        assert!(!mode.interlaced);
    }

    #[test]
    fn test_highres_mode() {
        let mode = VideoPreset::HighRes.mode();
        assert_eq!(mode.width, 640);
        assert_eq!(mode.height, 480);
        assert_eq!(mode.depth, ColorDepth::Bpp32);
        assert!(mode.interlaced);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(VideoPreset::from_name("lowres"), VideoPreset::LowRes);
        assert_eq!(VideoPreset::from_name("HighRes"), VideoPreset::HighRes);
    }

    #[test]
    fn test_unknown_name_falls_back_to_lowres() {
        assert_eq!(VideoPreset::from_name("ultrahd"), VideoPreset::LowRes);
        assert_eq!(VideoPreset::from_name(""), VideoPreset::LowRes);
    }
}
