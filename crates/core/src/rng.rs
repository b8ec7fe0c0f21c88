//! RNG module - shape selection for new pieces
//!
//! The controller draws every new shape from a [`ShapeSource`], so tests can
//! script exact sequences while real games pick uniformly at random.
//!
//! Also provides a simple LCG so seeded games are reproducible.

use crate::types::{ConfigError, ShapeKind};

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
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones
        (self.next_u32() >> 16) % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplies the kind of each newly spawned piece
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeKind;
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_shape(&mut self) -> ShapeKind {
        (**self).next_shape()
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for &mut S {
    fn next_shape(&mut self) -> ShapeKind {
        (**self).next_shape()
    }
}

/// Uniformly random shapes from a seeded LCG
#[derive(Debug, Clone)]
pub struct RandomShapes {
    rng: SimpleRng,
}

impl RandomShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for RandomShapes {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for RandomShapes {
    fn next_shape(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

/// A fixed sequence of shapes, repeated forever
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    script: Vec<ShapeKind>,
    index: usize,
}

impl ScriptedShapes {
    /// Create from a non-empty sequence
    pub fn new(script: Vec<ShapeKind>) -> Result<Self, ConfigError> {
        if script.is_empty() {
            return Err(ConfigError::EmptyShapeScript);
        }
        Ok(Self { script, index: 0 })
    }

    /// Parse a comma-separated list of template keys, e.g. `"t, straight, o"`
    pub fn parse(keys: &str) -> Result<Self, ConfigError> {
        let script = keys
            .split(',')
            .filter(|key| !key.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ShapeKind>, _>>()?;
        Self::new(script)
    }

    pub fn script(&self) -> &[ShapeKind] {
        &self.script
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self) -> ShapeKind {
        let kind = self.script[self.index];
        self.index = (self.index + 1) % self.script.len();
        kind
    }
}
