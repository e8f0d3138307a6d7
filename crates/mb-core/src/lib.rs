//! mb-core: Core battle logic for the monster battle simulator
//!
//! This crate contains all battle logic with no I/O dependencies.
//! It is designed to be pure and testable: randomness comes in through
//! [`RollSource`] and narration goes out through [`EventSink`].
//!
//! The engine resolves one action at a time, synchronously. Combatants are
//! mutated in place, so a [`Monster`] belongs to exactly one battle at a
//! time; callers running battles concurrently serialize access themselves.

pub mod combat;
pub mod elements;
pub mod events;
pub mod monster;
pub mod rng;
pub mod species;

pub use combat::{attack, take_damage};
pub use elements::Element;
pub use events::{BattleEvent, EventSink, NullSink};
pub use monster::{MAX_HP, Monster, TypeChange};
pub use rng::{BattleRng, InvalidRange, RollSource, StatRange};
pub use species::{Species, SpeciesConfig};
