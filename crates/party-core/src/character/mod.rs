//! Characters: the base entity and its specializations.
//!
//! Every character-like type wraps a [`Character`] and exposes it through
//! the [`Combatant`] trait, which supplies rolling, healing, and the alive
//! check. [`Adventurer`] adds a validated role and duels, [`Companion`]
//! adds a type tag and an optional companion of its own. [`Actor`] is the
//! closed set of all three.

pub mod actor;
pub mod adventurer;
pub mod companion;

pub use actor::Actor;
pub use adventurer::{Adventurer, Role, STARTING_ITEMS};
pub use companion::Companion;

use serde::{Deserialize, Serialize};

use crate::chronicle::Narration;
use crate::dice::DiceSource;
use crate::table::Table;

/// Health every character starts with and can never be healed past.
pub const MAX_HEALTH: i32 = 100;

/// A named entity with health and an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    health: i32,
    inventory: Vec<String>,
}

impl Character {
    /// Create a character at full health with nothing in hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: MAX_HEALTH,
            inventory: Vec::new(),
        }
    }

    /// Create a character carrying the given items.
    pub fn with_inventory<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut character = Self::new(name);
        character.inventory.extend(items.into_iter().map(Into::into));
        character
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health. May be zero or negative after combat.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Item labels in the order they were picked up.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Put an item at the end of the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Lose `amount` health. There is no floor. Returns the new health.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Roll a d20 plus `modifier`, narrate it, and return the total.
    pub fn roll<D: DiceSource>(&self, modifier: i32, table: &mut Table<D>) -> i32 {
        let result = table.roll_d20(modifier);
        table.narrate(Narration::Roll {
            name: self.name.clone(),
            result,
        });
        result
    }

    /// Heal by `amount`, capped at [`MAX_HEALTH`]. Returns the new health.
    pub fn heal<D: DiceSource>(&mut self, amount: i32, table: &mut Table<D>) -> i32 {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
        table.narrate(Narration::Heal {
            name: self.name.clone(),
            amount,
            health: self.health,
        });
        self.health
    }

    /// Whether health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Narrate every inventory item, one line each.
    pub fn list_inventory<D: DiceSource>(&self, table: &mut Table<D>) {
        for item in &self.inventory {
            table.narrate(Narration::Item { item: item.clone() });
        }
    }
}

/// The capability set shared by every character-like type.
pub trait Combatant {
    /// The underlying character.
    fn character(&self) -> &Character;

    /// The underlying character, mutably.
    fn character_mut(&mut self) -> &mut Character;

    /// The character's name.
    fn name(&self) -> &str {
        self.character().name()
    }

    /// Current health.
    fn health(&self) -> i32 {
        self.character().health()
    }

    /// Whether health is above zero.
    fn is_alive(&self) -> bool {
        self.character().is_alive()
    }

    /// Roll a d20 plus `modifier`, narrate it, and return the total.
    fn roll<D: DiceSource>(&self, modifier: i32, table: &mut Table<D>) -> i32 {
        self.character().roll(modifier, table)
    }

    /// Heal by `amount`, capped at [`MAX_HEALTH`].
    fn heal<D: DiceSource>(&mut self, amount: i32, table: &mut Table<D>) -> i32 {
        self.character_mut().heal(amount, table)
    }
}

impl Combatant for Character {
    fn character(&self) -> &Character {
        self
    }

    fn character_mut(&mut self) -> &mut Character {
        self
    }
}
