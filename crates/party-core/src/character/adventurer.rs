//! Adventurers: characters with a role, starting gear, and duels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Character, Combatant};
use crate::chronicle::Narration;
use crate::dice::DiceSource;
use crate::duel::{self, DuelKind, DuelOutcome};
use crate::error::{PartyError, PartyResult};
use crate::table::Table;

/// Items every adventurer sets out with.
pub const STARTING_ITEMS: [&str; 2] = ["bedroll", "50 gold coins"];

/// The roles an adventurer may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Front-line combatant.
    Fighter,
    /// Restorer of health.
    Healer,
    /// Caster of spells.
    Wizard,
}

impl Role {
    /// Every allowed role.
    pub const ALL: [Role; 3] = [Role::Fighter, Role::Healer, Role::Wizard];

    /// The role's name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fighter => "Fighter",
            Self::Healer => "Healer",
            Self::Wizard => "Wizard",
        }
    }
}

impl FromStr for Role {
    type Err = PartyError;

    /// Match a role name exactly; anything else is an invalid role.
    fn from_str(s: &str) -> PartyResult<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| PartyError::InvalidRole(s.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A character with a role who can scout and duel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adventurer {
    character: Character,
    role: Role,
}

impl Adventurer {
    /// Create an adventurer, checking `role` against [`Role::ALL`].
    ///
    /// The starting items are packed before the role is checked.
    pub fn new(name: impl Into<String>, role: &str) -> PartyResult<Self> {
        let character = outfitted(name);
        let role = role.parse()?;
        Ok(Self { character, role })
    }

    /// Create an adventurer with an already-checked role.
    pub fn with_role(name: impl Into<String>, role: Role) -> Self {
        Self {
            character: outfitted(name),
            role,
        }
    }

    /// The adventurer's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Announce a scouting run, then roll with no modifier.
    pub fn scout<D: DiceSource>(&self, table: &mut Table<D>) {
        table.narrate(Narration::Scout {
            name: self.character.name().to_string(),
        });
        self.character.roll(0, table);
    }

    /// Fight until either side drops to 50 health or below.
    pub fn duel<O, D>(&mut self, opponent: &mut O, table: &mut Table<D>) -> DuelOutcome
    where
        O: Combatant + ?Sized,
        D: DiceSource,
    {
        duel::resolve(self, opponent, DuelKind::Simple, table)
    }

    /// Fight at double damage until either side is no longer alive.
    pub fn enhanced_duel<O, D>(&mut self, opponent: &mut O, table: &mut Table<D>) -> DuelOutcome
    where
        O: Combatant + ?Sized,
        D: DiceSource,
    {
        duel::resolve(self, opponent, DuelKind::Enhanced, table)
    }
}

/// A fresh character carrying the starting items.
fn outfitted(name: impl Into<String>) -> Character {
    Character::with_inventory(name, STARTING_ITEMS)
}

impl Combatant for Adventurer {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}
