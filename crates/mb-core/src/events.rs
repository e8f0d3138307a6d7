//! Battle narration as structured events.
//!
//! The engine emits events through an injected [`EventSink`]; rendering them
//! as text (or dropping them) is the caller's concern, never part of the
//! damage computation.

use serde::{Deserialize, Serialize};

/// Everything the engine has to say about a combat action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// The attacker is fainted and cannot act.
    CannotAct { name: String },
    Attacking { attacker: String, defender: String },
    BattleCry { phrase: String },
    AttackRoll { name: String, roll: u32 },
    SuperEffective,
    AttackValue { name: String, value: f64 },
    Hit { name: String, damage: f64 },
    /// Net damage came out exactly zero.
    NearlyHit { name: String },
    /// Cosmetic: net damage was under half the defense roll. Fires
    /// independently of whether the hit landed.
    ShrugsOff { name: String },
    /// Even low defense roll upgraded to `(roll + 1) * 2`.
    FindsCourage { name: String },
    /// Defense roll came up at the range minimum.
    NotPayingAttention { name: String },
    Fainted { name: String },
    HealthRemaining { name: String, health: f64, max: f64 },
    /// Positive net damage from a self-attack.
    SelfInflicted { name: String },
}

/// Receiver for battle narration.
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

/// Discards every event; for callers that only want the damage numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: BattleEvent) {}
}

/// Collects events for inspection in tests.
impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}
