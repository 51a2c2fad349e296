//! Characters, dice, and duels for a small role-playing party.
//!
//! Provides the character model (plain characters, adventurers with a
//! validated role, companions with a kind), d20 rolling, healing, two
//! flavours of duel, and a factory that tracks the adventurers it builds.
//! Everything that happens is narrated at a [`Table`], which prints each
//! line and keeps a [`Chronicle`].

pub mod character;
pub mod chronicle;
pub mod config;
pub mod dice;
pub mod duel;
pub mod error;
pub mod factory;
pub mod table;

pub use character::{
    Actor, Adventurer, Character, Combatant, Companion, MAX_HEALTH, Role, STARTING_ITEMS,
};
pub use chronicle::{Chronicle, ChronicleEntry, Narration};
pub use config::TableConfig;
pub use dice::{DiceSource, RandomDice, ScriptedDice};
pub use duel::{DuelKind, DuelOutcome, SIMPLE_DUEL_FLOOR, Side};
pub use error::{PartyError, PartyResult};
pub use factory::AdventurerFactory;
pub use table::Table;
