//! End-to-end tests of the `mf-cli` binary.

#![allow(deprecated)] // Command::cargo_bin is deprecated in favour of the cargo_bin! macro

use assert_cmd::Command;
use predicates::prelude::*;

fn montfleur() -> Command {
    let mut cmd = Command::cargo_bin("montfleur").unwrap();
    cmd.args(["--seed", "7"]);
    cmd
}

#[test]
fn help_flag() {
    Command::cargo_bin("montfleur")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--law-allows-suspect"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn prompts_for_name() {
    montfleur()
        .write_stdin("Maigret\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrez votre nom: "))
        .stdout(predicate::str::contains("Bienvenue Maigret dans Crime à Montfleur !"))
        .stdout(predicate::str::contains("Merci Maigret d'avoir joué. Au revoir."));
}

#[test]
fn empty_name_uses_default() {
    montfleur()
        .write_stdin("\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bienvenue Détective"));
}

#[test]
fn name_flag_skips_prompt() {
    montfleur()
        .args(["--name", "Poirot"])
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrez votre nom").not())
        .stdout(predicate::str::contains("knife : un couteau ensanglanté"));
}

#[test]
fn eof_ends_like_quit() {
    montfleur()
        .args(["--name", "Poirot"])
        .write_stdin("go O\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vous êtes dans la rue de Montfleur"))
        .stdout(predicate::str::contains("Merci Poirot d'avoir joué. Au revoir."));
}

#[test]
fn refusals_are_reported() {
    montfleur()
        .args(["--name", "Poirot"])
        .write_stdin("dance\ngo N\nlook around\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commande non reconnue"))
        .stdout(predicate::str::contains("Aucune porte dans cette direction !"))
        .stdout(predicate::str::contains(
            "La commande 'look' ne prend pas de paramètre.",
        ));
}

#[test]
fn wrong_accusation_ends_the_game() {
    montfleur()
        .args(["--name", "Poirot"])
        .write_stdin("go O\ngo O\ngo N\naccuse Lenoir\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERREUR JUDICIAIRE"))
        .stdout(predicate::str::contains("Merci Poirot").not());
}
