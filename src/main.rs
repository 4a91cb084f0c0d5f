// Sprite64 - Main Entry Point
//
// Runs a small bouncing-ball demo on the console: arrow keys or the d-pad
// nudge the ball, O resets it to the center.

use sprite64_rs::console::{Console, ConsoleConfig, Game};
use sprite64_rs::display::run_game;
use sprite64_rs::gfx::palette;
use sprite64_rs::input::Buttons;

/// Bouncing ball demo
struct BallDemo {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    radius: f32,
}

impl BallDemo {
    fn new() -> Self {
        Self {
            x: 160.0,
            y: 120.0,
            dx: 1.5,
            dy: 1.0,
            radius: 8.0,
        }
    }
}

impl Game for BallDemo {
    fn init(&mut self, console: &mut Console) {
        self.x = console.screen().map_or(160, |s| s.width() / 2) as f32;
        self.y = console.screen().map_or(120, |s| s.height() / 2) as f32;
    }

    fn update(&mut self, console: &mut Console) {
        let (width, height) = match console.screen() {
            Some(screen) => (screen.width() as f32, screen.height() as f32),
            None => return,
        };

        if console.btnp(Buttons::O) {
            self.x = width / 2.0;
            self.y = height / 2.0;
        }
        if console.btn(Buttons::LEFT) {
            self.dx -= 0.1;
        }
        if console.btn(Buttons::RIGHT) {
            self.dx += 0.1;
        }
        if console.btn(Buttons::UP) {
            self.dy -= 0.1;
        }
        if console.btn(Buttons::DOWN) {
            self.dy += 0.1;
        }

        self.x += self.dx;
        self.y += self.dy;

        if self.x - self.radius < 0.0 || self.x + self.radius >= width {
            self.dx = -self.dx;
            self.x += self.dx;
        }
        if self.y - self.radius < 0.0 || self.y + self.radius >= height {
            self.dy = -self.dy;
            self.y += self.dy;
        }
    }

    fn draw(&mut self, console: &mut Console) {
        console.cls(Some(palette::DARK_BLUE));
        console.circfill(self.x, self.y, self.radius, Some(palette::ORANGE));
        console.circ(self.x, self.y, self.radius, Some(palette::WHITE));
        console.print_at_colored("BALL DEMO", 4.0, 4.0, palette::WHITE);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Sprite64 (sprite64-rs) v0.1.0");
    println!("==============================");
    println!();

    let config = ConsoleConfig::load_or_default();
    println!("Video preset: {}", config.video.preset);
    println!("Press the close button or Ctrl+C to exit.");
    println!();

    run_game(config, Box::new(BallDemo::new()))?;

    println!("Window closed.");
    Ok(())
}
