//! Elemental types and the effectiveness matrix.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Closed set of elemental affinities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Element {
    Electric,
    Fire,
    Grass,
    Water,
}

/// Damage multiplier for one attacking element against one defending element.
///
/// 2.0 = super effective, 0.5 = resisted, 1.0 = neutral. Pairs the table
/// does not name are neutral.
pub fn modifier(attacker: Element, defender: Element) -> f64 {
    use Element::*;
    match (attacker, defender) {
        (Electric, Water) => 2.0,
        (Electric, Grass) | (Electric, Electric) => 0.5,
        (Fire, Grass) => 2.0,
        (Fire, Fire) | (Fire, Water) => 0.5,
        (Grass, Water) => 2.0,
        (Grass, Grass) | (Grass, Fire) => 0.5,
        (Water, Fire) => 2.0,
        (Water, Water) | (Water, Grass) => 0.5,
        _ => 1.0,
    }
}

/// Combined multiplier of an attacker's element set against a defender's.
///
/// One factor per (attacker element, defender element) pair.
pub fn modifier_against(attackers: &[Element], defenders: &[Element]) -> f64 {
    let mut total = 1.0;
    for defending in defenders {
        for attacking in attackers {
            total *= modifier(*attacking, *defending);
        }
    }
    total
}
