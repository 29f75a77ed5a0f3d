//! RNG module - deterministic random tile generation
//!
//! Provides a simple LCG for deterministic, seedable randomness and a
//! [`TileSource`] that draws uniformly from a configured prefix of the tile
//! alphabet. Each session owns its own source; nothing is shared.

use match_three_types::Tile;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for seed reporting and resumption)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform tile source over the first `kinds` entries of [`Tile::ALL`].
#[derive(Debug, Clone)]
pub struct TileSource {
    kinds: usize,
    rng: SimpleRng,
}

impl TileSource {
    /// Create a source drawing from `kinds` tile kinds with the given seed.
    ///
    /// `kinds` must lie in `[1, Tile::ALL.len()]`; session configuration
    /// validation guarantees this before a source is built.
    pub fn new(kinds: usize, seed: u32) -> Self {
        debug_assert!(kinds >= 1 && kinds <= Tile::ALL.len());
        Self {
            kinds,
            rng: SimpleRng::new(seed),
        }
    }

    /// Number of tile kinds in play
    pub fn kinds(&self) -> usize {
        self.kinds
    }

    /// Draw the next uniformly random tile
    pub fn draw(&mut self) -> Tile {
        let index = self.rng.next_range(self.kinds as u32) as usize;
        Tile::ALL[index]
    }

    /// Current RNG state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
