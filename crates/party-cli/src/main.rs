//! Demonstration run of a role-playing party.
//!
//! Plays a fixed scenario at a table with random dice, narrating every
//! roll, heal, and duel round, then prints the party roster.

mod roster;
mod scenario;

use std::process;

use party_core::{Table, TableConfig};

fn main() {
    let mut table = Table::new(TableConfig::default().with_record(false));

    match scenario::run(&mut table) {
        Ok(party) => roster::print(&party),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
