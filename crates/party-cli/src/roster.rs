use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use party_core::{Actor, Combatant};

/// Print everyone in the party with where they ended up.
pub fn print(party: &[Actor]) {
    println!();
    println!("{}", "== Party Roster ==".bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kind", "Role / Type", "Health", "Status"]);

    for actor in party {
        let calling = actor.calling().unwrap_or("—");
        let health = actor.health().to_string();
        let status = if actor.is_alive() { "alive" } else { "fallen" };
        table.add_row(vec![
            actor.name(),
            actor.kind_label(),
            calling,
            health.as_str(),
            status,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} party members", party.len());
}
