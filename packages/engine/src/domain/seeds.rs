//! RNG seed derivation for deterministic games.
//!
//! A game is seeded with a single base seed; the engine RNG (secret
//! generation, item randomness) and each AI brain get distinct derived
//! streams so replaying a seed reproduces the whole game.

/// Seed for the engine's own RNG.
pub fn derive_engine_seed(base: u64) -> u64 {
    // Different multiplier/offset per context to keep streams apart.
    base.wrapping_mul(6364136223846793005).wrapping_add(1)
}

/// Seed for the brain attached to `seat` (0 or 1).
pub fn derive_brain_seed(base: u64, seat: usize) -> u64 {
    base.wrapping_add((seat as u64 + 1).wrapping_mul(100)).wrapping_add(2)
}
