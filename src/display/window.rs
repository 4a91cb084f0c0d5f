// Window module - Desktop presentation of the console screen
//
// Creates a scaled window with winit, presents the visible framebuffer
// through the pixels crate, and drives the fixed-timestep game loop from
// the redraw cycle.

use super::video::VideoMode;
use crate::console::{run_frame, Console, ConsoleConfig, FrameClock, Game};
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Window presentation settings
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Scale factor (1x, 2x, 3x, 4x, etc.)
    pub scale: u32,
    /// Target frame rate in Hz
    pub target_fps: u32,
    /// Whether to enable VSync
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a new window configuration with default values
    ///
    /// Default: 3x scale, 60 FPS, VSync enabled
    pub fn new() -> Self {
        Self {
            scale: 3,
            target_fps: 60,
            vsync: true,
        }
    }

    /// Derive window settings from the console configuration
    pub fn from_console(config: &ConsoleConfig) -> Self {
        Self::new()
            .with_scale(config.video.scale)
            .with_fps(config.video.fps)
            .with_vsync(config.video.vsync)
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Window width in physical pixels for a video mode
    pub fn window_width(&self, mode: &VideoMode) -> u32 {
        mode.width as u32 * self.scale
    }

    /// Window height in physical pixels for a video mode
    pub fn window_height(&self, mode: &VideoMode) -> u32 {
        mode.height as u32 * self.scale
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Desktop window driving a game on the console
pub struct GameWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    mode: VideoMode,
    console: Console,
    game: Box<dyn Game>,
    clock: FrameClock,
}

impl GameWindow {
    /// Create a game window (the OS window is created when the event loop
    /// starts)
    ///
    /// The console must already have its video initialized; `init` is called
    /// on the game here, before the first frame.
    pub fn new(config: WindowConfig, mut console: Console, mut game: Box<dyn Game>) -> Self {
        let mode = console
            .screen()
            .map(|s| *s.mode())
            .unwrap_or_else(|| super::video::VideoPreset::LowRes.mode());

        game.init(&mut console);

        Self {
            window: None,
            pixels: None,
            config,
            mode,
            console,
            game,
            clock: FrameClock::new(config.target_fps),
        }
    }

    /// Run the game loop for one redraw and present the visible framebuffer
    fn frame(&mut self) -> Result<(), pixels::Error> {
        run_frame(&mut self.console, self.game.as_mut(), &mut self.clock);

        self.sync_surface()?;

        if let (Some(pixels), Some(screen)) = (self.pixels.as_mut(), self.console.screen()) {
            let frame = pixels.frame_mut();
            let data = screen.visible_framebuffer().as_slice();
            if frame.len() == data.len() {
                frame.copy_from_slice(data);
                pixels.render()?;
            } else {
                warn!("Framebuffer does not match the surface size, skipping present");
            }
        }
        Ok(())
    }

    /// Rebuild the surface after a runtime video preset change
    ///
    /// A game may call `change_video_preset` from `update` or `draw`; the
    /// surface and window are sized for the old mode, so presenting without
    /// resyncing would hand `pixels` a framebuffer of the wrong length.
    fn sync_surface(&mut self) -> Result<(), pixels::Error> {
        let Some(screen) = self.console.screen() else {
            return Ok(());
        };
        let mode = *screen.mode();
        if mode.width == self.mode.width && mode.height == self.mode.height {
            return Ok(());
        }

        info!(
            "Video mode changed to {}x{}, rebuilding the surface",
            mode.width, mode.height
        );
        self.mode = mode;

        if let Some(window) = &self.window {
            let width = self.config.window_width(&mode);
            let height = self.config.window_height(&mode);
            let _ = window.request_inner_size(LogicalSize::new(width, height));
            window.set_title(&format!("Sprite64 - {}x{}", mode.width, mode.height));

            let surface_texture = SurfaceTexture::new(width, height, window.clone());
            self.pixels = Some(Pixels::new(
                mode.width as u32,
                mode.height as u32,
                surface_texture,
            )?);
        }
        Ok(())
    }
}

impl ApplicationHandler for GameWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(format!(
                "Sprite64 - {}x{}",
                self.mode.width, self.mode.height
            ))
            .with_inner_size(LogicalSize::new(
                self.config.window_width(&self.mode),
                self.config.window_height(&self.mode),
            ))
            .with_resizable(false);

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");

        // Arc<Window> gives the surface texture a safe 'static lifetime
        let window = Arc::new(window);
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels = Pixels::new(
            self.mode.width as u32,
            self.mode.height as u32,
            surface_texture,
        )
        .expect("Failed to create pixel surface");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                self.console
                    .handle_key(physical_key, state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.frame() {
                    error!("Render error: {}", err);
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create the console, open a window, and run a game until close
///
/// # Arguments
/// * `config` - Console configuration (video preset, scale, screenshots)
/// * `game` - The game to drive
///
/// # Returns
/// Result indicating success or error
pub fn run_game(
    config: ConsoleConfig,
    game: Box<dyn Game>,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    let window_config = WindowConfig::from_console(&config);
    if window_config.vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    let preset = config.video_preset();
    let mut console = Console::new(config);
    console.init_video(preset);
    let mode = preset.mode();

    info!("Starting console...");
    info!("  Resolution: {}x{}", mode.width, mode.height);
    info!(
        "  Window size: {}x{}",
        window_config.window_width(&mode),
        window_config.window_height(&mode)
    );
    info!("  Scale: {}x", window_config.scale);
    info!("  Target FPS: {}", window_config.target_fps);
    info!("  VSync: {}", window_config.vsync);

    let mut window = GameWindow::new(window_config, console, game);
    event_loop.run_app(&mut window)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::video::VideoPreset;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 3);
        assert_eq!(config.target_fps, 60);
        assert!(config.vsync);
    }

    #[test]
    fn test_window_config_builder() {
        let config = WindowConfig::new()
            .with_scale(2)
            .with_fps(30)
            .with_vsync(false);

        assert_eq!(config.scale, 2);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
    }

    #[test]
    fn test_window_dimensions() {
        let mode = VideoPreset::LowRes.mode();
        let config = WindowConfig::new().with_scale(2);
        assert_eq!(config.window_width(&mode), 640);
        assert_eq!(config.window_height(&mode), 480);
    }

    #[test]
    fn test_scale_clamping() {
        let config = WindowConfig::new().with_scale(100);
        assert_eq!(config.scale, 8);

        let config = WindowConfig::new().with_scale(0);
        assert_eq!(config.scale, 1);
    }

    /// Game that switches to high resolution on its first update
    struct PresetSwitcher {
        switched: bool,
    }

    impl Game for PresetSwitcher {
        fn init(&mut self, _console: &mut Console) {}

        fn update(&mut self, console: &mut Console) {
            if !self.switched {
                console.change_video_preset(VideoPreset::HighRes);
                self.switched = true;
            }
        }

        fn draw(&mut self, console: &mut Console) {
            console.cls(Some(1));
        }
    }

    #[test]
    fn test_frame_follows_runtime_preset_change() {
        let mut console = Console::headless();
        console.init_video(VideoPreset::LowRes);

        let config = WindowConfig::new().with_fps(1000);
        let mut window = GameWindow::new(
            config,
            console,
            Box::new(PresetSwitcher { switched: false }),
        );
        assert_eq!(window.mode.width, 320);

        // The mid-frame preset change must resync the tracked mode, not panic.
        window.frame().unwrap();
        assert_eq!(window.mode.width, 640);
        assert_eq!(window.mode.height, 480);
        assert_eq!(window.console.screen().unwrap().width(), 640);
    }

    #[test]
    fn test_from_console_config() {
        let mut console_config = ConsoleConfig::new();
        console_config.video.scale = 4;
        console_config.video.fps = 30;
        console_config.video.vsync = false;

        let config = WindowConfig::from_console(&console_config);
        assert_eq!(config.scale, 4);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
    }
}
