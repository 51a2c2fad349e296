//! Duel resolution between any two combatants.
//!
//! A duel is a sequence of roll-offs. Each round both sides roll a plain
//! d20; the lower roll loses health, a tie changes nothing. The round loop
//! keeps going while both sides are still standing, so a dice source that
//! only ever produces ties never ends the duel.
//!
//! - [`DuelKind::Simple`]: 1 damage per round, standing means health above 50.
//! - [`DuelKind::Enhanced`]: 2 damage per round, standing means alive.
//!
//! When the loop ends, the challenger wins if still standing; otherwise the
//! opponent wins, including when both went down in the same round.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::character::Combatant;
use crate::chronicle::Narration;
use crate::dice::DiceSource;
use crate::table::Table;

/// Health a simple duel stops at.
pub const SIMPLE_DUEL_FLOOR: i32 = 50;

/// The rules a duel runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelKind {
    /// First to 50 health or below loses.
    Simple,
    /// Double damage, fought until someone is no longer alive.
    Enhanced,
}

impl DuelKind {
    /// Health lost by the lower roller each round.
    pub fn damage(self) -> i32 {
        match self {
            Self::Simple => 1,
            Self::Enhanced => 2,
        }
    }

    /// Whether `combatant` can keep fighting under these rules.
    pub fn still_standing<C: Combatant + ?Sized>(self, combatant: &C) -> bool {
        match self {
            Self::Simple => combatant.health() > SIMPLE_DUEL_FLOOR,
            Self::Enhanced => combatant.is_alive(),
        }
    }

    pub(crate) fn article(self) -> &'static str {
        match self {
            Self::Simple => "a",
            Self::Enhanced => "an",
        }
    }
}

impl std::fmt::Display for DuelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "duel"),
            Self::Enhanced => write!(f, "enhanced duel"),
        }
    }
}

/// Which side of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The one who issued the challenge.
    Challenger,
    /// The one who was challenged.
    Opponent,
}

/// How a duel ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelOutcome {
    /// The rules the duel ran under.
    pub kind: DuelKind,
    /// The winning side.
    pub winner: Side,
    /// The winner's name.
    pub winner_name: String,
    /// Number of rounds fought.
    pub rounds: u32,
}

/// Run a duel to completion, narrating every roll and round.
pub fn resolve<C, O, D>(
    challenger: &mut C,
    opponent: &mut O,
    kind: DuelKind,
    table: &mut Table<D>,
) -> DuelOutcome
where
    C: Combatant + ?Sized,
    O: Combatant + ?Sized,
    D: DiceSource,
{
    table.narrate(Narration::Challenge {
        challenger: challenger.name().to_string(),
        opponent: opponent.name().to_string(),
        kind,
    });

    let mut rounds = 0;
    while kind.still_standing(&*challenger) && kind.still_standing(&*opponent) {
        let mine = challenger.roll(0, table);
        let theirs = opponent.roll(0, table);

        match mine.cmp(&theirs) {
            Ordering::Less => {
                challenger.character_mut().take_damage(kind.damage());
            }
            Ordering::Greater => {
                opponent.character_mut().take_damage(kind.damage());
            }
            Ordering::Equal => {}
        }
        rounds += 1;

        table.narrate(Narration::RoundRolls {
            challenger: challenger.name().to_string(),
            challenger_roll: mine,
            opponent: opponent.name().to_string(),
            opponent_roll: theirs,
        });
        table.narrate(Narration::RoundHealth {
            challenger: challenger.name().to_string(),
            challenger_health: challenger.health(),
            opponent: opponent.name().to_string(),
            opponent_health: opponent.health(),
        });
    }

    let (winner, winner_name) = if kind.still_standing(&*challenger) {
        (Side::Challenger, challenger.name().to_string())
    } else {
        (Side::Opponent, opponent.name().to_string())
    };
    table.narrate(Narration::Victory {
        winner: winner_name.clone(),
        kind,
    });

    DuelOutcome {
        kind,
        winner,
        winner_name,
        rounds,
    }
}
