//! Demonstration battle driver.
//!
//! Spawns one monster of each species and runs a fixed battle script,
//! rendering the engine's events as the classic narration lines.

use clap::Parser;
use mb_core::{
    BattleEvent, BattleRng, Element, EventSink, Monster, Species, TypeChange, attack,
};

#[derive(Parser)]
#[command(about = "Run a demonstration monster battle")]
struct Args {
    /// RNG seed; omit for a random battle
    #[arg(long)]
    seed: Option<u64>,
}

/// Prints each battle event as one narration line.
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: BattleEvent) {
        match event {
            BattleEvent::CannotAct { name } => {
                println!("{name} isn't conscious… it can't attack.");
            }
            BattleEvent::Attacking { attacker, defender } => {
                println!("{attacker} is attacking {defender}");
            }
            BattleEvent::BattleCry { phrase } => println!("{phrase}"),
            // {:?} keeps the trailing .0 the classic narration shows on
            // whole values.
            BattleEvent::AttackRoll { name, roll } => {
                println!("{name} rolls a {:?}", f64::from(roll));
            }
            BattleEvent::SuperEffective => println!("It's su-- *cough* very effective!"),
            BattleEvent::AttackValue { name, value } => {
                println!("{name} attacking with {value:?} attack points!");
            }
            BattleEvent::Hit { name, damage } => {
                println!("{name} is hit for {damage:?} damage!");
            }
            BattleEvent::NearlyHit { name } => println!("{name} is nearly hit!."),
            BattleEvent::ShrugsOff { name } => println!("{name} shrugs off the puny attack."),
            BattleEvent::FindsCourage { name } => {
                println!("{name} finds courage in the desperate situation");
            }
            BattleEvent::NotPayingAttention { name } => {
                println!("{name} is clearly not paying attention.");
            }
            BattleEvent::Fainted { name } => {
                println!("{name} has faint-- passed out. It's passed out.");
            }
            BattleEvent::HealthRemaining { name, health, max } => {
                println!("{name} has {health:?}/{max:?} HP remaining");
            }
            BattleEvent::SelfInflicted { name } => {
                println!("{name} hurt itself in the confusion.");
            }
        }
    }
}

fn report_type_change(monster: &Monster, element: Element, outcome: TypeChange) {
    match outcome {
        TypeChange::AlreadyPresent => println!("{element} already set!"),
        TypeChange::Conflict => println!("Can't have conflicting types!"),
        TypeChange::Added => println!("{} now has {element}", monster.name()),
    }
}

const RAT: usize = 0;
const LIZARD: usize = 1;
const DINO: usize = 2;
const TURTLE: usize = 3;

fn main() {
    let args = Args::parse();
    let mut rng = args.seed.map(BattleRng::new).unwrap_or_default();
    let mut events = ConsoleSink;

    let mut roster = vec![
        Species::ElectricRat.spawn("Zappy"),
        Species::FireLizard.spawn("Charblazer"),
        Species::FlowerDino.spawn("Bloomzilla"),
        Species::WeirdTurtle.spawn("Squibby"),
    ];

    for monster in roster.iter_mut() {
        monster.roll_attack_points(&mut rng);
        monster.roll_defense_points(&mut rng);
    }

    println!("=== Initial Monster Stats ===");
    for monster in &roster {
        println!("{monster}");
    }
    println!();

    println!("=== Monster Battles ===");
    attack(&mut roster, RAT, LIZARD, &mut rng, &mut events);
    println!();
    attack(&mut roster, LIZARD, DINO, &mut rng, &mut events);
    println!();
    attack(&mut roster, DINO, TURTLE, &mut rng, &mut events);
    println!();
    attack(&mut roster, TURTLE, RAT, &mut rng, &mut events);
    println!();

    println!("=== Self-Attack Test ===");
    attack(&mut roster, DINO, DINO, &mut rng, &mut events);
    println!();

    println!("=== Fainting Test ===");
    roster[TURTLE].set_health(5.0);
    attack(&mut roster, LIZARD, TURTLE, &mut rng, &mut events);
    println!();

    println!("=== Phrase Repetition Check ===");
    for monster in &roster {
        println!("{}", monster.phrase());
    }

    println!("=== Type Setting Test ===");
    let outcome = roster[RAT].add_element(Element::Water);
    report_type_change(&roster[RAT], Element::Water, outcome);
    let outcome = roster[DINO].add_element(Element::Fire);
    report_type_change(&roster[DINO], Element::Fire, outcome);
}
