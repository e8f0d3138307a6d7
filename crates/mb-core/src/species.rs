//! Species configuration: one data table instead of a subclass per monster.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::elements::Element;
use crate::monster::Monster;
use crate::rng::StatRange;

/// The four stock species.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Species {
    ElectricRat,
    FireLizard,
    FlowerDino,
    WeirdTurtle,
}

/// The four values that distinguish one species from another.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesConfig {
    pub element: Element,
    pub attack: StatRange,
    pub defense: StatRange,
    pub phrase: &'static str,
}

impl Species {
    pub fn config(self) -> SpeciesConfig {
        match self {
            Species::ElectricRat => SpeciesConfig {
                element: Element::Electric,
                attack: StatRange::from_parts(5, 8),
                defense: StatRange::from_parts(5, 8),
                phrase: "'Lectric!",
            },
            // Heavy hitter with fragile defense.
            Species::FireLizard => SpeciesConfig {
                element: Element::Fire,
                attack: StatRange::from_parts(8, 16),
                defense: StatRange::from_parts(1, 8),
                phrase: "Deal with it.",
            },
            Species::FlowerDino => SpeciesConfig {
                element: Element::Grass,
                attack: StatRange::from_parts(3, 6),
                defense: StatRange::from_parts(4, 8),
                phrase: "Flowah!",
            },
            Species::WeirdTurtle => SpeciesConfig {
                element: Element::Water,
                attack: StatRange::from_parts(3, 8),
                defense: StatRange::from_parts(3, 8),
                phrase: "'Urtle!",
            },
        }
    }

    /// Build a combat-ready monster of this species.
    pub fn spawn(self, name: impl Into<String>) -> Monster {
        let config = self.config();
        let mut monster = Monster::new(name, config.element, config.phrase);
        monster.set_attack_range(config.attack);
        monster.set_defense_range(config.defense);
        monster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_spawn_applies_species_config() {
        let lizard = Species::FireLizard.spawn("Charblazer");
        assert_eq!(lizard.elements(), &[Element::Fire]);
        assert_eq!(lizard.attack_range().min(), 8);
        assert_eq!(lizard.attack_range().max(), 16);
        assert_eq!(lizard.defense_range().min(), 1);
        assert_eq!(lizard.defense_range().max(), 8);
        assert_eq!(lizard.phrase(), "Deal with it. Deal with it.");
    }

    #[test]
    fn test_every_species_has_valid_ranges() {
        for species in Species::iter() {
            let config = species.config();
            assert!(config.attack.min() <= config.attack.max());
            assert!(config.defense.min() <= config.defense.max());
            assert!(!config.phrase.is_empty());
        }
    }
}
