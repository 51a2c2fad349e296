use colored::Colorize;

use party_core::{
    Actor, Adventurer, AdventurerFactory, Character, Combatant, Companion, DiceSource,
    MAX_HEALTH, PartyResult, Table,
};

/// Play the demonstration scenario and return everyone who took part.
pub fn run<D: DiceSource>(table: &mut Table<D>) -> PartyResult<Vec<Actor>> {
    let mut party: Vec<Actor> = Vec::new();

    // Robin sets out at 10 health with a cat, who has a flea.
    heading(table, "Humble Beginnings");
    let mut robin = Character::with_inventory("Robin", ["sword", "potion", "artifact"]);
    robin.take_damage(MAX_HEALTH - 10);
    let leo = Companion::new("Leo", "Cat").with_companion(
        Companion::new("Frank", "Flea").with_belongings(["small hat", "sunglasses"]),
    );
    robin.list_inventory(table);
    robin.roll(0, table);
    robin.roll(2, table);

    heading(table, "Gather Your Party");
    let mut healers = AdventurerFactory::new("Healer");
    let mut leo_the_healer = Adventurer::new("Leo", "Healer")?;
    healers.generate("Robin")?.duel(&mut leo_the_healer, table);

    heading(table, "Enhancements");
    let mut aragorn = Adventurer::new("Aragorn", "Fighter")?;
    let mut gandalf = Adventurer::new("Gandalf", "Wizard")?;
    aragorn.heal(10, table);
    gandalf.enhanced_duel(&mut aragorn, table);

    party.push(robin.into());
    party.extend(leo.chain().cloned().map(Actor::from));
    party.push(leo.into());
    party.extend(healers.adventurers().iter().cloned().map(Actor::from));
    party.push(leo_the_healer.into());
    party.push(aragorn.into());
    party.push(gandalf.into());
    Ok(party)
}

fn heading<D: DiceSource>(table: &mut Table<D>, title: &str) {
    if table.config().echo {
        println!();
        println!("{}", format!("== {title} ==").bold());
    }
}
