//! Narration events and chronicle entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duel::DuelKind;

/// A single narrated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Narration {
    /// A d20 roll with its modifier already applied.
    Roll {
        /// Who rolled.
        name: String,
        /// The total.
        result: i32,
    },
    /// A heal and the health it left behind.
    Heal {
        /// Who was healed.
        name: String,
        /// The amount requested.
        amount: i32,
        /// Health after the cap was applied.
        health: i32,
    },
    /// An adventurer heading out to scout.
    Scout {
        /// Who is scouting.
        name: String,
    },
    /// One line of an inventory listing.
    Item {
        /// The item label.
        item: String,
    },
    /// A duel being called.
    Challenge {
        /// Who issued the challenge.
        challenger: String,
        /// Who was challenged.
        opponent: String,
        /// Which rules the duel runs under.
        kind: DuelKind,
    },
    /// Both rolls of a duel round.
    RoundRolls {
        /// The challenger's name.
        challenger: String,
        /// The challenger's roll.
        challenger_roll: i32,
        /// The opponent's name.
        opponent: String,
        /// The opponent's roll.
        opponent_roll: i32,
    },
    /// Both health totals after a duel round.
    RoundHealth {
        /// The challenger's name.
        challenger: String,
        /// The challenger's health.
        challenger_health: i32,
        /// The opponent's name.
        opponent: String,
        /// The opponent's health.
        opponent_health: i32,
    },
    /// The end of a duel.
    Victory {
        /// The winner's name.
        winner: String,
        /// Which rules the duel ran under.
        kind: DuelKind,
    },
}

impl std::fmt::Display for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roll { name, result } => write!(f, "{name} rolled a {result}."),
            Self::Heal {
                name,
                amount,
                health,
            } => write!(f, "{name} heals for {amount}. Current health: {health}."),
            Self::Scout { name } => write!(f, "{name} is scouting ahead..."),
            Self::Item { item } => write!(f, "{item}"),
            Self::Challenge {
                challenger,
                opponent,
                kind,
            } => write!(
                f,
                "{challenger} challenges {opponent} to {} {kind}!",
                kind.article()
            ),
            Self::RoundRolls {
                challenger,
                challenger_roll,
                opponent,
                opponent_roll,
            } => write!(
                f,
                "{challenger} rolled {challenger_roll}, {opponent} rolled {opponent_roll}."
            ),
            Self::RoundHealth {
                challenger,
                challenger_health,
                opponent,
                opponent_health,
            } => write!(
                f,
                "{challenger}'s health: {challenger_health}, {opponent}'s health: {opponent_health}."
            ),
            Self::Victory { winner, kind } => write!(f, "{winner} wins the {kind}!"),
        }
    }
}

/// A narration stamped with the moment it was told.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChronicleEntry {
    /// What was narrated.
    pub narration: Narration,
    /// When it was narrated.
    pub timestamp: DateTime<Utc>,
}

impl ChronicleEntry {
    /// Stamp a narration with the current time.
    pub fn now(narration: Narration) -> Self {
        Self {
            narration,
            timestamp: Utc::now(),
        }
    }
}
