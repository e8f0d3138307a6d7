//! Random rolls for the battle engine.
//!
//! Uses a seeded ChaCha RNG for reproducible battles. The engine never calls
//! an ambient generator: every roll goes through [`RollSource`], so tests can
//! inject scripted values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A roll range was configured with `min > max`.
///
/// This is a configuration bug, never a recoverable combat condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid roll range: min {min} > max {max}")]
pub struct InvalidRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive bounds a combat stat is rolled from.
///
/// Construction validates `min <= max`, so rolling from a `StatRange` never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    min: u32,
    max: u32,
}

impl StatRange {
    /// The 1..=10 range every monster starts with.
    pub const DEFAULT: StatRange = StatRange { min: 1, max: 10 };

    pub fn new(min: u32, max: u32) -> Result<Self, InvalidRange> {
        if min > max {
            return Err(InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Table constants only; callers guarantee `min <= max`.
    pub(crate) const fn from_parts(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for StatRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Source of uniform rolls, injectable for deterministic tests.
pub trait RollSource {
    /// Roll uniformly over a validated inclusive range.
    fn roll_in(&mut self, range: StatRange) -> u32;

    /// Raw roll primitive: validates the bounds, then rolls.
    fn roll(&mut self, min: u32, max: u32) -> Result<u32, InvalidRange> {
        Ok(self.roll_in(StatRange::new(min, max)?))
    }
}

/// Battle random number generator
///
/// Wraps ChaCha8Rng for reproducible battles.
/// Note: RNG state is not serialized - a restored battle continues from a
/// fresh stream of the original seed.
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for BattleRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BattleRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(BattleRng::new(seed))
    }
}

impl BattleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RollSource for BattleRng {
    fn roll_in(&mut self, range: StatRange) -> u32 {
        self.rng.gen_range(range.min()..=range.max())
    }
}

impl Default for BattleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
