//! A factory that turns out adventurers of one role and keeps track of them.

use crate::character::{Adventurer, Combatant};
use crate::error::PartyResult;

/// Builds adventurers with a fixed role and owns every one it builds.
#[derive(Debug, Clone, Default)]
pub struct AdventurerFactory {
    role: String,
    adventurers: Vec<Adventurer>,
}

impl AdventurerFactory {
    /// Create a factory for the given role. The role is not checked here.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            adventurers: Vec::new(),
        }
    }

    /// The role every generated adventurer gets.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Build an adventurer, keep it, and hand back a reference to it.
    ///
    /// Fails with an invalid-role error if the factory's role is not allowed;
    /// nothing is kept in that case.
    pub fn generate(&mut self, name: impl Into<String>) -> PartyResult<&mut Adventurer> {
        let adventurer = Adventurer::new(name, &self.role)?;
        self.adventurers.push(adventurer);
        let last = self.adventurers.len() - 1;
        Ok(&mut self.adventurers[last])
    }

    /// The adventurer at `index` in generation order.
    pub fn find_by_index(&self, index: usize) -> Option<&Adventurer> {
        self.adventurers.get(index)
    }

    /// The adventurer at `index` in generation order, mutably.
    pub fn find_by_index_mut(&mut self, index: usize) -> Option<&mut Adventurer> {
        self.adventurers.get_mut(index)
    }

    /// The first adventurer whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Adventurer> {
        self.adventurers.iter().find(|a| a.name() == name)
    }

    /// The first adventurer whose name matches exactly, mutably.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Adventurer> {
        self.adventurers.iter_mut().find(|a| a.name() == name)
    }

    /// Every adventurer built so far, in generation order.
    pub fn adventurers(&self) -> &[Adventurer] {
        &self.adventurers
    }

    /// Number of adventurers built.
    pub fn len(&self) -> usize {
        self.adventurers.len()
    }

    /// Whether nothing has been built yet.
    pub fn is_empty(&self) -> bool {
        self.adventurers.is_empty()
    }
}
