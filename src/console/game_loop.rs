// Game loop - Fixed-timestep scheduling
//
// The driver decouples simulation rate from render rate: elapsed wall time
// accumulates, whole frame durations are drained as update steps, then one
// more update runs unconditionally, then exactly one draw bracketed by the
// frame swap, then the loop sleeps away the remainder of the frame budget.
// Update is therefore called a deterministic number of times for a given
// elapsed duration, independent of render cost.

use super::Console;
use std::thread;
use std::time::{Duration, Instant};

/// A game instance driven by the console loop
pub trait Game {
    /// Called once before the first update, after the display is ready
    fn init(&mut self, console: &mut Console);

    /// Called at the fixed simulation rate to advance game logic
    fn update(&mut self, console: &mut Console);

    /// Called once per rendered frame, inside the frame swap bracket
    fn draw(&mut self, console: &mut Console);
}

/// Fixed-timestep accumulator clock
pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
    last: Instant,
}

impl FrameClock {
    /// Create a clock at a target rate (clamped to at least 1 Hz)
    pub fn new(target_fps: u32) -> Self {
        Self {
            step: Duration::from_micros(1_000_000 / target_fps.max(1) as u64),
            accumulator: Duration::ZERO,
            last: Instant::now(),
        }
    }

    /// The fixed frame duration
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed time and drain whole frame durations
    ///
    /// Returns the number of fixed steps the elapsed time covers; the
    /// remainder stays in the accumulator.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Measure wall time since the last tick and drain it
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.advance(elapsed)
    }

    /// Sleep for whatever is left of the frame budget
    ///
    /// Skips sleeping entirely (never sleeps a negative duration) when the
    /// frame overran its budget.
    pub fn sleep_remaining(&self, frame_start: Instant) {
        let spent = frame_start.elapsed();
        if let Some(remaining) = self.step.checked_sub(spent) {
            thread::sleep(remaining);
        }
    }
}

/// Run one full iteration of the loop: updates, one draw, and the sleep
///
/// The window runner calls this once per redraw; headless callers can drive
/// it directly.
pub fn run_frame(console: &mut Console, game: &mut dyn Game, clock: &mut FrameClock) {
    let frame_start = Instant::now();

    let steps = clock.tick();
    for _ in 0..steps {
        console.refresh_input();
        game.update(console);
    }
    // One more update always runs, so a fast frame still simulates.
    console.refresh_input();
    game.update(console);

    console.begin_frame();
    game.draw(console);
    console.end_frame();

    clock.sleep_remaining(frame_start);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_drains_whole_steps() {
        let mut clock = FrameClock::new(60);
        let step = clock.step();

        assert_eq!(clock.advance(step * 3), 3);
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_advance_keeps_remainder() {
        let mut clock = FrameClock::new(60);
        let step = clock.step();

        assert_eq!(clock.advance(step / 2), 0);
        // The stored half step plus another half step completes one frame.
        assert_eq!(clock.advance(step / 2), 1);
    }

    #[test]
    fn test_advance_is_deterministic_for_total_elapsed() {
        let step = FrameClock::new(60).step();
        let total = step * 7 + step / 3;

        let mut one_shot = FrameClock::new(60);
        let whole = one_shot.advance(total);

        let mut piecewise = FrameClock::new(60);
        let chunk = total / 5;
        let mut sum = 0;
        for _ in 0..5 {
            sum += piecewise.advance(chunk);
        }
        sum += piecewise.advance(total - chunk * 5);

        assert_eq!(whole, 7);
        assert_eq!(sum, whole);
    }

    #[test]
    fn test_zero_fps_clamps() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.step(), Duration::from_micros(1_000_000));
    }

    #[test]
    fn test_sixty_hz_step() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.step().as_micros(), 16_666);
    }
}
