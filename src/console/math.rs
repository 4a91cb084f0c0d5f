// Math helpers - PICO-8 style numeric utilities

use std::time::{SystemTime, UNIX_EPOCH};

/// Floor a value to an integer
///
/// `flr(3.7)` is 3, `flr(-2.1)` is -3.
#[inline]
pub fn flr(value: f32) -> i32 {
    value.floor() as i32
}

/// Clamp a value between two bounds (PICO-8 `mid`)
#[inline]
pub fn mid(a: f32, b: f32, c: f32) -> f32 {
    let mut values = [a, b, c];
    values.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    values[1]
}

/// Small deterministic random number generator (xorshift64*)
///
/// Games usually want reproducible randomness from a chosen seed; seeding
/// from the clock is available for the casual case.
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a generator from a seed (zero is remapped, xorshift needs a
    /// nonzero state)
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Create a generator seeded from the system clock
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(nanos)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform float in [0.0, 1.0)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Random integer in [0, limit) (PICO-8 `rnd`)
    ///
    /// Non-positive limits return 0.
    pub fn rnd(&mut self, limit: f32) -> i32 {
        if limit <= 0.0 {
            return 0;
        }
        flr(self.next_f32() * limit)
    }
}
