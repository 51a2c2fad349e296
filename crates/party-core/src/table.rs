//! The table every game action is played at.
//!
//! A `Table` owns the dice, the chronicle, and the narration settings.
//! Characters borrow it whenever they roll or narrate.

use crate::chronicle::{Chronicle, ChronicleEntry, Narration};
use crate::config::TableConfig;
use crate::dice::{self, DiceSource, RandomDice};

/// Dice, narration, and chronicle for one run of play.
#[derive(Debug)]
pub struct Table<D: DiceSource = RandomDice> {
    dice: D,
    chronicle: Chronicle,
    config: TableConfig,
}

impl Table {
    /// A table with thread-random dice.
    pub fn new(config: TableConfig) -> Self {
        Self::with_dice(RandomDice::new(), config)
    }
}

impl<D: DiceSource> Table<D> {
    /// A table that throws the given dice.
    pub fn with_dice(dice: D, config: TableConfig) -> Self {
        Self {
            dice,
            chronicle: Chronicle::new(),
            config,
        }
    }

    /// Throw a d20 and add `modifier`, without narrating.
    pub fn roll_d20(&mut self, modifier: i32) -> i32 {
        dice::roll_d20(&mut self.dice, modifier)
    }

    /// Tell the table what happened.
    pub fn narrate(&mut self, narration: Narration) {
        if self.config.echo {
            println!("{narration}");
        }
        if self.config.record {
            self.chronicle.append(ChronicleEntry::now(narration));
        }
    }

    /// Everything narrated so far.
    pub fn chronicle(&self) -> &Chronicle {
        &self.chronicle
    }

    /// The narration settings.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The dice in use.
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Leave the table, keeping the chronicle.
    pub fn into_chronicle(self) -> Chronicle {
        self.chronicle
    }
}
