// Screenshot functionality
//
// Captures the visible framebuffer and saves it as a PNG file.

use crate::display::framebuffer::Framebuffer;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during screenshot operations
#[derive(Debug)]
pub enum ScreenshotError {
    /// The display has not been initialized yet
    NotReady,

    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::NotReady => write!(f, "display not initialized"),
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save the given framebuffer as a PNG screenshot
///
/// # Arguments
/// * `frame` - The framebuffer to capture
/// * `directory` - Directory the screenshot is written into (created if missing)
/// * `include_timestamp` - Append a timestamp to the filename
///
/// # Returns
/// The path of the written file
pub fn save_screenshot(
    frame: &Framebuffer,
    directory: &Path,
    include_timestamp: bool,
) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(directory)?;

    let filename = if include_timestamp {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("screenshot_{}.png", timestamp)
    } else {
        "screenshot.png".to_string()
    };
    let file_path = directory.join(filename);

    save_png(
        &file_path,
        frame.as_slice(),
        frame.width() as u32,
        frame.height() as u32,
    )?;

    Ok(file_path)
}

/// Write RGBA data as a PNG file
fn save_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let w = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_filename() {
        let frame = Framebuffer::new(8, 8);
        let dir = std::env::temp_dir().join("sprite64_screenshot_test");
        let path = save_screenshot(&frame, &dir, false).unwrap();
        assert!(path.ends_with("screenshot.png"));
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_error_display() {
        let err = ScreenshotError::NotReady;
        assert_eq!(err.to_string(), "display not initialized");
    }
}
