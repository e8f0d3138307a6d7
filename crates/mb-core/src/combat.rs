//! Combat resolution: attack rolls, elemental modifiers, damage, fainting.
//!
//! The engine is a set of stateless functions over monster state. One action
//! resolves completely before returning: attack roll, modifier, defense
//! roll, health mutation, faint check.

use crate::elements;
use crate::events::{BattleEvent, EventSink};
use crate::monster::{MAX_HP, Monster};
use crate::rng::RollSource;

/// Resolve one attack between roster members.
///
/// Index-based so a monster can legally target itself (it "hurts itself in
/// the confusion"). A fainted attacker cannot act: the call is a no-op that
/// returns 0.0.
///
/// Returns the net damage applied to the defender, not clamped; zero or
/// negative means the defense roll absorbed the hit and health is unchanged.
pub fn attack<R, E>(
    roster: &mut [Monster],
    attacker: usize,
    defender: usize,
    rng: &mut R,
    events: &mut E,
) -> f64
where
    R: RollSource,
    E: EventSink,
{
    let attacker_name = roster[attacker].name().to_string();

    if roster[attacker].is_fainted() {
        events.emit(BattleEvent::CannotAct {
            name: attacker_name,
        });
        return 0.0;
    }

    events.emit(BattleEvent::Attacking {
        attacker: attacker_name.clone(),
        defender: roster[defender].name().to_string(),
    });
    events.emit(BattleEvent::BattleCry {
        phrase: roster[attacker].phrase(),
    });

    let roll = rng.roll_in(roster[attacker].attack_range());
    events.emit(BattleEvent::AttackRoll {
        name: attacker_name.clone(),
        roll,
    });

    let modifier =
        elements::modifier_against(roster[attacker].elements(), roster[defender].elements());
    if modifier >= 2.0 {
        events.emit(BattleEvent::SuperEffective);
    }

    let attack_value = f64::from(roll) * modifier;
    events.emit(BattleEvent::AttackValue {
        name: attacker_name.clone(),
        value: attack_value,
    });

    let damage = take_damage(&mut roster[defender], attack_value, rng, events);

    if attacker == defender && damage > 0.0 {
        events.emit(BattleEvent::SelfInflicted {
            name: attacker_name,
        });
    }

    damage
}

/// Roll defense and apply an incoming attack value to the defender.
///
/// The defense roll gets a situational boost: an even roll strictly under
/// half the range maximum (integer division) becomes `(roll + 1) * 2`. A
/// roll at the range minimum is flagged for narration but not changed.
///
/// Net damage is `attack_value - defense roll`; only a positive net lowers
/// health. Health is never clamped, and the faint latch set when health
/// reaches zero or below is never cleared here.
pub fn take_damage<R, E>(
    defender: &mut Monster,
    attack_value: f64,
    rng: &mut R,
    events: &mut E,
) -> f64
where
    R: RollSource,
    E: EventSink,
{
    let name = defender.name().to_string();
    let range = defender.defense_range();
    let mut roll = rng.roll_in(range);

    if roll % 2 == 0 && roll < range.max() / 2 {
        roll = (roll + 1) * 2;
        events.emit(BattleEvent::FindsCourage { name: name.clone() });
    } else if roll == range.min() {
        events.emit(BattleEvent::NotPayingAttention { name: name.clone() });
    }

    let damage = attack_value - f64::from(roll);

    if damage > 0.0 {
        events.emit(BattleEvent::Hit {
            name: name.clone(),
            damage,
        });
        defender.health -= damage;
    } else if damage == 0.0 {
        events.emit(BattleEvent::NearlyHit { name: name.clone() });
    }

    // Independent narration check; can fire even after a landed hit.
    if damage < f64::from(roll) / 2.0 {
        events.emit(BattleEvent::ShrugsOff { name: name.clone() });
    }

    if defender.health <= 0.0 {
        defender.fainted = true;
        events.emit(BattleEvent::Fainted { name });
    } else {
        events.emit(BattleEvent::HealthRemaining {
            name,
            health: defender.health,
            max: MAX_HP,
        });
    }

    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Element;
    use crate::events::NullSink;
    use crate::monster::TypeChange;
    use crate::rng::{BattleRng, StatRange};
    use crate::species::Species;

    /// Replays a fixed list of rolls, in order.
    struct ScriptedRolls {
        rolls: Vec<u32>,
        next: usize,
    }

    impl ScriptedRolls {
        fn new(rolls: &[u32]) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
            }
        }
    }

    impl RollSource for ScriptedRolls {
        fn roll_in(&mut self, range: StatRange) -> u32 {
            let roll = self.rolls[self.next];
            self.next += 1;
            assert!(
                roll >= range.min() && roll <= range.max(),
                "scripted roll {} outside {}..={}",
                roll,
                range.min(),
                range.max()
            );
            roll
        }
    }

    /// Always rolls the low midpoint of the range.
    struct MidpointRolls;

    impl RollSource for MidpointRolls {
        fn roll_in(&mut self, range: StatRange) -> u32 {
            (range.min() + range.max()) / 2
        }
    }

    fn turtle_vs_lizard() -> Vec<Monster> {
        vec![
            Species::WeirdTurtle.spawn("Squibby"),
            Species::FireLizard.spawn("Charblazer"),
        ]
    }

    #[test]
    fn test_midpoint_water_vs_fire() {
        // Turtle attack range 3..=8 midpoint 5, WATER vs FIRE doubles it to
        // 10. Lizard defense range 1..=8 midpoint 4: even, but not under
        // 8 / 2, so no courage boost. Net 10 - 4 = 6.
        let mut roster = turtle_vs_lizard();
        let mut rng = MidpointRolls;
        let mut events: Vec<BattleEvent> = Vec::new();

        let damage = attack(&mut roster, 0, 1, &mut rng, &mut events);

        assert_eq!(damage, 6.0);
        assert_eq!(roster[1].health(), 14.0);
        assert!(events.contains(&BattleEvent::SuperEffective));
        assert!(events.contains(&BattleEvent::Hit {
            name: "Charblazer".into(),
            damage: 6.0
        }));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, BattleEvent::FindsCourage { .. }))
        );
    }

    #[test]
    fn test_fainted_attacker_is_noop() {
        let mut roster = turtle_vs_lizard();
        roster[0].set_fainted(true);
        // Empty script: any roll attempt would panic.
        let mut rng = ScriptedRolls::new(&[]);
        let mut events: Vec<BattleEvent> = Vec::new();

        let damage = attack(&mut roster, 0, 1, &mut rng, &mut events);

        assert_eq!(damage, 0.0);
        assert_eq!(roster[1].health(), MAX_HP);
        assert_eq!(
            events,
            vec![BattleEvent::CannotAct {
                name: "Squibby".into()
            }]
        );
    }

    #[test]
    fn test_self_attack_runs_full_pipeline() {
        // Lizard attacks itself: roll 16 resisted by its own FIRE type to
        // 8.0, defense roll 1 flags inattention, net 7 lowers its health.
        let mut roster = vec![Species::FireLizard.spawn("Charblazer")];
        let mut rng = ScriptedRolls::new(&[16, 1]);
        let mut events: Vec<BattleEvent> = Vec::new();

        let damage = attack(&mut roster, 0, 0, &mut rng, &mut events);

        assert_eq!(damage, 7.0);
        assert_eq!(roster[0].health(), 13.0);
        assert!(events.contains(&BattleEvent::NotPayingAttention {
            name: "Charblazer".into()
        }));
        assert!(events.contains(&BattleEvent::SelfInflicted {
            name: "Charblazer".into()
        }));
    }

    #[test]
    fn test_courage_boost_on_even_low_roll() {
        // Defense range 1..=8: a rolled 2 is even and under 4, so it becomes
        // (2 + 1) * 2 = 6.
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        let mut rng = ScriptedRolls::new(&[2]);
        let mut events: Vec<BattleEvent> = Vec::new();

        let damage = take_damage(&mut lizard, 10.0, &mut rng, &mut events);

        assert_eq!(damage, 4.0);
        assert_eq!(lizard.health(), 16.0);
        assert!(events.contains(&BattleEvent::FindsCourage {
            name: "Charblazer".into()
        }));
    }

    #[test]
    fn test_no_courage_boost_at_half_max_or_odd() {
        // 4 is even but not strictly under 8 / 2.
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        let mut events: Vec<BattleEvent> = Vec::new();
        let damage = take_damage(&mut lizard, 10.0, &mut ScriptedRolls::new(&[4]), &mut events);
        assert_eq!(damage, 6.0);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, BattleEvent::FindsCourage { .. }))
        );

        // 3 is under half max but odd.
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        let mut events: Vec<BattleEvent> = Vec::new();
        let damage = take_damage(&mut lizard, 10.0, &mut ScriptedRolls::new(&[3]), &mut events);
        assert_eq!(damage, 7.0);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, BattleEvent::FindsCourage { .. }))
        );
    }

    #[test]
    fn test_negative_net_damage_leaves_health() {
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        let mut events: Vec<BattleEvent> = Vec::new();
        let damage = take_damage(&mut lizard, 1.0, &mut ScriptedRolls::new(&[5]), &mut events);

        assert_eq!(damage, -4.0);
        assert_eq!(lizard.health(), MAX_HP);
        // -4 is under 5 / 2, so the shrug fires; no hit, no near-hit.
        assert!(events.contains(&BattleEvent::ShrugsOff {
            name: "Charblazer".into()
        }));
        assert!(!events.iter().any(|e| matches!(e, BattleEvent::Hit { .. })));
    }

    #[test]
    fn test_zero_net_damage_is_nearly_hit() {
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        let mut events: Vec<BattleEvent> = Vec::new();
        let damage = take_damage(&mut lizard, 5.0, &mut ScriptedRolls::new(&[5]), &mut events);

        assert_eq!(damage, 0.0);
        assert_eq!(lizard.health(), MAX_HP);
        assert!(events.contains(&BattleEvent::NearlyHit {
            name: "Charblazer".into()
        }));
    }

    #[test]
    fn test_shrug_can_follow_a_landed_hit() {
        // Roll 7, attack value 10: net 3 lands, yet 3 < 7 / 2.0 so the
        // monster still shrugs. Contradictory narration, faithful behavior.
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        let mut events: Vec<BattleEvent> = Vec::new();
        let damage = take_damage(&mut lizard, 10.0, &mut ScriptedRolls::new(&[7]), &mut events);

        assert_eq!(damage, 3.0);
        assert_eq!(lizard.health(), 17.0);
        assert!(events.iter().any(|e| matches!(e, BattleEvent::Hit { .. })));
        assert!(events.contains(&BattleEvent::ShrugsOff {
            name: "Charblazer".into()
        }));
    }

    #[test]
    fn test_faint_keeps_negative_health() {
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        lizard.set_health(5.0);
        let mut events: Vec<BattleEvent> = Vec::new();
        let damage = take_damage(&mut lizard, 12.0, &mut ScriptedRolls::new(&[5]), &mut events);

        assert_eq!(damage, 7.0);
        assert_eq!(lizard.health(), -2.0);
        assert!(lizard.is_fainted());
        assert!(events.contains(&BattleEvent::Fainted {
            name: "Charblazer".into()
        }));
    }

    #[test]
    fn test_faint_latch_never_resets() {
        let mut lizard = Species::FireLizard.spawn("Charblazer");
        lizard.set_health(1.0);
        let mut sink = NullSink;
        take_damage(&mut lizard, 10.0, &mut ScriptedRolls::new(&[5]), &mut sink);
        assert!(lizard.is_fainted());

        // Health raised externally: a later absorbed hit must not clear it.
        lizard.set_health(10.0);
        let damage = take_damage(&mut lizard, 1.0, &mut ScriptedRolls::new(&[5]), &mut sink);
        assert!(damage < 0.0);
        assert!(lizard.is_fainted());
    }

    #[test]
    fn test_health_is_monotone_under_attacks() {
        let mut roster = turtle_vs_lizard();
        let mut rng = BattleRng::new(2024);
        let mut sink = NullSink;
        let mut last = roster[1].health();
        for _ in 0..50 {
            attack(&mut roster, 0, 1, &mut rng, &mut sink);
            assert!(roster[1].health() <= last);
            last = roster[1].health();
        }
    }

    #[test]
    fn test_cached_points_are_not_combat_input() {
        // Poison the cached display stats; the midpoint scenario must still
        // resolve from fresh rolls.
        let mut roster = turtle_vs_lizard();
        roster[0].set_attack_points(999);
        roster[1].set_defense_points(999);
        let damage = attack(&mut roster, 0, 1, &mut MidpointRolls, &mut NullSink);
        assert_eq!(damage, 6.0);
    }

    #[test]
    fn test_multi_type_defender_modifier() {
        // Turtle takes on ELECTRIC (WATER into ELECTRIC is neutral, so it
        // is accepted).
        // A GRASS attacker then faces 2.0 * 1.0 against WATER+ELECTRIC.
        let mut roster = vec![
            Species::FlowerDino.spawn("Bloomzilla"),
            Species::WeirdTurtle.spawn("Squibby"),
        ];
        assert_eq!(roster[1].add_element(Element::Electric), TypeChange::Added);

        // Dino attack range 3..=6: scripted roll 4 doubles to 8.0; defense
        // roll 7 leaves net 1.
        let mut rng = ScriptedRolls::new(&[4, 7]);
        let mut events: Vec<BattleEvent> = Vec::new();
        let damage = attack(&mut roster, 0, 1, &mut rng, &mut events);

        assert_eq!(damage, 1.0);
        assert!(events.contains(&BattleEvent::SuperEffective));
        assert!(events.contains(&BattleEvent::AttackValue {
            name: "Bloomzilla".into(),
            value: 8.0
        }));
    }
}
