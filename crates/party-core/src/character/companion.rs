//! Companions: characters tagged with a kind, possibly with a companion
//! of their own.

use serde::{Deserialize, Serialize};

use super::{Character, Combatant};

/// A character that travels alongside someone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    character: Character,
    kind: String,
    companion: Option<Box<Companion>>,
}

impl Companion {
    /// Create a companion of the given kind (species, breed, and so on).
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            character: Character::new(name),
            kind: kind.into(),
            companion: None,
        }
    }

    /// Give this companion a companion of its own.
    pub fn with_companion(mut self, companion: Companion) -> Self {
        self.companion = Some(Box::new(companion));
        self
    }

    /// Put the given belongings in this companion's inventory.
    pub fn with_belongings<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.character.add_item(item);
        }
        self
    }

    /// The companion's kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The companion's own companion, if any.
    pub fn companion(&self) -> Option<&Companion> {
        self.companion.as_deref()
    }

    /// The companion's own companion, mutably.
    pub fn companion_mut(&mut self) -> Option<&mut Companion> {
        self.companion.as_deref_mut()
    }

    /// Walk the chain of nested companions, starting with this one's.
    pub fn chain(&self) -> impl Iterator<Item = &Companion> {
        std::iter::successors(self.companion(), |c| c.companion())
    }

    /// How many companions are nested below this one.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }
}

impl Combatant for Companion {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::MAX_HEALTH;
    use crate::config::TableConfig;
    use crate::dice::ScriptedDice;
    use crate::table::Table;

    fn leo() -> Companion {
        Companion::new("Leo", "Cat").with_companion(
            Companion::new("Frank", "Flea").with_belongings(["small hat", "sunglasses"]),
        )
    }

    #[test]
    fn new_companion() {
        let c = Companion::new("Leo", "Cat");
        assert_eq!(c.name(), "Leo");
        assert_eq!(c.kind(), "Cat");
        assert_eq!(c.health(), MAX_HEALTH);
        assert!(c.companion().is_none());
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn nested_chain() {
        let leo = leo();
        let names: Vec<&str> = leo.chain().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Frank"]);
        assert_eq!(leo.depth(), 1);

        let robin_pet = Companion::new("Ozzy", "Owl").with_companion(leo);
        let kinds: Vec<&str> = robin_pet.chain().map(Companion::kind).collect();
        assert_eq!(kinds, vec!["Cat", "Flea"]);
        assert_eq!(robin_pet.depth(), 2);
    }

    #[test]
    fn belongings_land_in_inventory() {
        let leo = leo();
        let frank = leo.companion().unwrap();
        assert_eq!(frank.character().inventory(), ["small hat", "sunglasses"]);
        assert!(leo.character().inventory().is_empty());
    }

    #[test]
    fn companions_roll_and_heal_like_characters() {
        let mut table = Table::with_dice(ScriptedDice::new([5]), TableConfig::quiet());
        let mut leo = leo();
        assert_eq!(leo.roll(1, &mut table), 6);
        leo.character_mut().take_damage(20);
        assert_eq!(leo.heal(5, &mut table), 85);

        let frank = leo.companion_mut().unwrap();
        frank.character_mut().take_damage(100);
        assert!(!frank.is_alive());
        assert_eq!(
            table.chronicle().lines(),
            vec!["Leo rolled a 6.", "Leo heals for 5. Current health: 85."]
        );
    }
}
