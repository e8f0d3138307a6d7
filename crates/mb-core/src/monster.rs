//! Monster instances: the stats and state one combatant owns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::elements::{self, Element};
use crate::rng::{RollSource, StatRange};

/// Maximum (and starting) health for every monster.
pub const MAX_HP: f64 = 20.0;

/// Outcome of asking a monster to take on an extra elemental type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeChange {
    /// The type is already in the monster's set; nothing changed.
    AlreadyPresent,
    /// The type would be super effective against the monster's own set;
    /// rejected, nothing changed.
    Conflict,
    /// The type was added.
    Added,
}

/// One combatant.
///
/// Combat mutates `health` and the `fainted` latch in place, so a monster
/// must be exclusively owned by one battle at a time; the `&mut` receivers
/// on the engine enforce that within a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    name: String,
    elements: Vec<Element>,
    attack_range: StatRange,
    defense_range: StatRange,
    /// Last-rolled attack stat. Display only: attacks roll fresh values and
    /// never read this field.
    attack_points: u32,
    /// Last-rolled defense stat. Display only, like `attack_points`.
    defense_points: u32,
    pub(crate) health: f64,
    pub(crate) fainted: bool,
    phrase: String,
}

impl Monster {
    /// Create a monster with default 1..=10 stat ranges and full health.
    pub fn new(name: impl Into<String>, element: Element, phrase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: vec![element],
            attack_range: StatRange::DEFAULT,
            defense_range: StatRange::DEFAULT,
            attack_points: 10,
            defense_points: 10,
            health: MAX_HP,
            fainted: false,
            phrase: phrase.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elemental types, in the order they were added. Never empty.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn attack_range(&self) -> StatRange {
        self.attack_range
    }

    pub fn defense_range(&self) -> StatRange {
        self.defense_range
    }

    /// Species configuration hook; not used during combat.
    pub fn set_attack_range(&mut self, range: StatRange) {
        self.attack_range = range;
    }

    /// Species configuration hook; not used during combat.
    pub fn set_defense_range(&mut self, range: StatRange) {
        self.defense_range = range;
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn is_fainted(&self) -> bool {
        self.fainted
    }

    /// The battle cry is always shouted twice.
    pub fn phrase(&self) -> String {
        format!("{0} {0}", self.phrase)
    }

    pub fn attack_points(&self) -> u32 {
        self.attack_points
    }

    pub fn defense_points(&self) -> u32 {
        self.defense_points
    }

    /// Re-roll the cached attack stat for display.
    pub fn roll_attack_points(&mut self, rng: &mut impl RollSource) {
        self.attack_points = rng.roll_in(self.attack_range);
    }

    /// Re-roll the cached defense stat for display.
    pub fn roll_defense_points(&mut self, rng: &mut impl RollSource) {
        self.defense_points = rng.roll_in(self.defense_range);
    }

    pub fn set_attack_points(&mut self, value: u32) {
        self.attack_points = value;
    }

    pub fn set_defense_points(&mut self, value: u32) {
        self.defense_points = value;
    }

    /// Add an elemental type, rejecting duplicates and self-defeating types.
    ///
    /// A candidate conflicts when the monster's own set would be super
    /// effective attacking it, i.e. `modifier_against(current, &[candidate])`
    /// exceeds 1.0. Direction matters: an electric monster refuses WATER
    /// (ELECTRIC beats WATER) even though WATER is neutral into ELECTRIC.
    pub fn add_element(&mut self, element: Element) -> TypeChange {
        if self.elements.contains(&element) {
            return TypeChange::AlreadyPresent;
        }
        if elements::modifier_against(&self.elements, &[element]) > 1.0 {
            return TypeChange::Conflict;
        }
        self.elements.push(element);
        TypeChange::Added
    }

    /// External reset hook; the engine itself never raises health.
    pub fn set_health(&mut self, health: f64) {
        self.health = health;
    }

    /// External reset hook; the engine itself never clears the faint latch.
    pub fn set_fainted(&mut self, fainted: bool) {
        self.fainted = fainted;
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types = self
            .elements
            .iter()
            .map(Element::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if self.fainted {
            write!(f, "{} has fainted.\nElemental type: [{}]", self.name, types)
        } else {
            // {:?} keeps the trailing .0 on whole health values.
            write!(
                f,
                "{} has {:?}/{:?}hp.\nElemental type: [{}]",
                self.name, self.health, MAX_HP, types
            )
        }
    }
}
