//! The closed set of character-like types.

use serde::{Deserialize, Serialize};

use super::{Adventurer, Character, Combatant, Companion};

/// Any member of the party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// A plain character.
    Character(Character),
    /// An adventurer with a role.
    Adventurer(Adventurer),
    /// A companion with a kind.
    Companion(Companion),
}

impl Actor {
    /// Which variant this actor is.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Character(_) => "Character",
            Self::Adventurer(_) => "Adventurer",
            Self::Companion(_) => "Companion",
        }
    }

    /// The adventurer's role or the companion's kind, if there is one.
    pub fn calling(&self) -> Option<&str> {
        match self {
            Self::Character(_) => None,
            Self::Adventurer(a) => Some(a.role().as_str()),
            Self::Companion(c) => Some(c.kind()),
        }
    }
}

impl Combatant for Actor {
    fn character(&self) -> &Character {
        match self {
            Self::Character(c) => c,
            Self::Adventurer(a) => a.character(),
            Self::Companion(c) => c.character(),
        }
    }

    fn character_mut(&mut self) -> &mut Character {
        match self {
            Self::Character(c) => c,
            Self::Adventurer(a) => a.character_mut(),
            Self::Companion(c) => c.character_mut(),
        }
    }
}

impl From<Character> for Actor {
    fn from(c: Character) -> Self {
        Self::Character(c)
    }
}

impl From<Adventurer> for Actor {
    fn from(a: Adventurer) -> Self {
        Self::Adventurer(a)
    }
}

impl From<Companion> for Actor {
    fn from(c: Companion) -> Self {
        Self::Companion(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Role;
    use crate::config::TableConfig;
    use crate::dice::ScriptedDice;
    use crate::table::Table;

    #[test]
    fn labels_and_callings() {
        let plain: Actor = Character::new("Robin").into();
        let hero: Actor = Adventurer::with_role("Aragorn", Role::Fighter).into();
        let pet: Actor = Companion::new("Leo", "Cat").into();

        assert_eq!(plain.kind_label(), "Character");
        assert_eq!(hero.kind_label(), "Adventurer");
        assert_eq!(pet.kind_label(), "Companion");

        assert_eq!(plain.calling(), None);
        assert_eq!(hero.calling(), Some("Fighter"));
        assert_eq!(pet.calling(), Some("Cat"));
    }

    #[test]
    fn actors_share_the_character_contract() {
        let mut table = Table::with_dice(ScriptedDice::new([20]), TableConfig::quiet());
        let mut hero: Actor = Adventurer::with_role("Aragorn", Role::Fighter).into();
        assert_eq!(hero.name(), "Aragorn");
        assert_eq!(hero.roll(0, &mut table), 20);
        hero.character_mut().take_damage(120);
        assert!(!hero.is_alive());
        assert_eq!(hero.heal(30, &mut table), 10);
        assert!(hero.is_alive());
    }
}
