//! End-to-end runs of the `party` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn party() -> Command {
    Command::cargo_bin("party").unwrap()
}

#[test]
fn demo_narrates_the_whole_scenario() {
    party()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("sword\npotion\nartifact\n")
                .and(predicate::str::contains("Robin rolled a "))
                .and(predicate::str::contains("Robin challenges Leo to a duel!"))
                .and(predicate::str::contains("wins the duel!"))
                .and(predicate::str::contains(
                    "Aragorn heals for 10. Current health: 100.",
                ))
                .and(predicate::str::contains(
                    "Gandalf challenges Aragorn to an enhanced duel!",
                ))
                .and(predicate::str::contains("wins the enhanced duel!")),
        );
}

#[test]
fn demo_prints_the_roster() {
    party().assert().success().stdout(
        predicate::str::contains("Party Roster")
            .and(predicate::str::contains("Gandalf"))
            .and(predicate::str::contains("Frank"))
            .and(predicate::str::contains("7 party members")),
    );
}

#[test]
fn demo_ignores_arguments() {
    party()
        .args(["--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robin challenges Leo to a duel!"));
}
