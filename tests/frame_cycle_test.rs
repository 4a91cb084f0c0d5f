// Frame lifecycle tests
// Cover video initialization rules, the begin/end frame bracket, buffer
// swapping, and the fixed-timestep driver.

use sprite64_rs::gfx::palette;
use sprite64_rs::{run_frame, Console, FrameClock, Game, VideoPreset};

#[test_log::test]
fn test_uninitialized_console_never_panics() {
    let mut console = Console::headless();

    console.begin_frame();
    console.cls(Some(1));
    console.rectfill(0.0, 0.0, 10.0, 10.0, Some(8));
    console.end_frame();

    assert!(!console.is_ready());
    assert_eq!(console.pget(5.0, 5.0), 0);
    assert!(console.screen().is_none());
}

#[test_log::test]
fn test_second_init_keeps_existing_screen() {
    let mut console = Console::headless();
    console.init_video(VideoPreset::LowRes);
    console.pset(3.0, 3.0, Some(8));

    console.init_video(VideoPreset::HighRes);

    // Same screen, same contents, same resolution.
    assert_eq!(console.pget(3.0, 3.0), 8);
    assert_eq!(console.screen().unwrap().width(), 320);
}

#[test]
fn test_preset_change_resizes_everything_together() {
    let mut console = Console::headless();
    console.init_video(VideoPreset::LowRes);
    console.change_video_preset(VideoPreset::HighRes);

    let screen = console.screen().unwrap();
    assert_eq!(screen.width(), 640);
    assert_eq!(screen.height(), 480);
    assert_eq!(screen.pixel_buffer().width(), 640);
    assert_eq!(screen.pixel_buffer().height(), 480);
    assert_eq!(screen.visible_framebuffer().width(), 640);
}

#[test]
fn test_frame_swap_alternates_surfaces() {
    let mut console = Console::headless();
    console.init_video(VideoPreset::LowRes);

    // Frame 1 paints red into the back buffer.
    console.begin_frame();
    console.cls(Some(palette::RED));
    console.end_frame();

    // The freshly drawn frame becomes visible at the next swap.
    console.begin_frame();
    let screen = console.screen().unwrap();
    assert_eq!(
        screen.visible_framebuffer().pixel(0, 0),
        Some(palette::palette_to_rgba(palette::RED))
    );
    // The new back buffer is still untouched black.
    assert_eq!(screen.back_framebuffer().pixel(0, 0), Some([0, 0, 0, 255]));
}

/// Game that counts its callbacks and paints a frame marker
struct CountingGame {
    updates: u32,
    draws: u32,
}

impl Game for CountingGame {
    fn init(&mut self, _console: &mut Console) {}

    fn update(&mut self, _console: &mut Console) {
        self.updates += 1;
    }

    fn draw(&mut self, console: &mut Console) {
        self.draws += 1;
        console.cls(Some(palette::YELLOW));
    }
}

#[test]
fn test_run_frame_draws_exactly_once() {
    let mut console = Console::headless();
    console.init_video(VideoPreset::LowRes);
    let mut game = CountingGame {
        updates: 0,
        draws: 0,
    };
    // High fps keeps the sleep at the end of the frame negligible.
    let mut clock = FrameClock::new(1000);

    run_frame(&mut console, &mut game, &mut clock);

    assert_eq!(game.draws, 1);
    // At least the unconditional update ran.
    assert!(game.updates >= 1);
    // The draw landed in the shadow buffer.
    assert_eq!(console.pget(0.0, 0.0), palette::YELLOW);
}

#[test]
fn test_run_frame_updates_accumulate_with_elapsed_time() {
    let mut console = Console::headless();
    console.init_video(VideoPreset::LowRes);
    let mut game = CountingGame {
        updates: 0,
        draws: 0,
    };
    let mut clock = FrameClock::new(1000);

    std::thread::sleep(clock.step() * 3);
    run_frame(&mut console, &mut game, &mut clock);

    // Three whole steps elapsed plus the unconditional update.
    assert!(game.updates >= 4);
    assert_eq!(game.draws, 1);
}

#[test]
fn test_drawing_state_survives_frames() {
    let mut console = Console::headless();
    console.init_video(VideoPreset::LowRes);

    console.set_color(palette::PINK);
    console.begin_frame();
    console.end_frame();
    console.begin_frame();
    console.pset(9.0, 9.0, None);
    console.end_frame();

    // The draw color persists across the frame bracket.
    assert_eq!(console.pget(9.0, 9.0), palette::PINK);
}
