//! Injected randomness
//!
//! The only random decision in the game is which way the ball leaves the
//! paddle. It is drawn through `DirectionSource` so tests can pin it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of horizontal launch directions
pub trait DirectionSource {
    /// Returns `1.0` (rightward) or `-1.0` (leftward)
    fn next_direction(&mut self) -> f32;
}

impl DirectionSource for Pcg32 {
    fn next_direction(&mut self) -> f32 {
        if self.random_bool(0.5) { 1.0 } else { -1.0 }
    }
}

/// Seeded source for reproducible runs
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Always launches the same way
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDirection(pub f32);

impl FixedDirection {
    pub const RIGHT: Self = Self(1.0);
    pub const LEFT: Self = Self(-1.0);
}

impl DirectionSource for FixedDirection {
    fn next_direction(&mut self) -> f32 {
        self.0.signum()
    }
}
