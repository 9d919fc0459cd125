//! Accusing and evidence analysis.

use log::{debug, info};
use mf_core::montfleur::{CHEMIST, CULPRIT, LAB, LETTER, OFFICER, POLICE_STATION, REQUIRED_ITEMS};

use crate::command::{expect_name, expect_params};
use crate::error::{ActionError, ActionResult};
use crate::game::Game;
use crate::outcome::Outcome;
use crate::quest::{Objective, QuestId};
use crate::state::Investigation;

/// `analyze <item>`: have the chemist analyze a carried piece of evidence.
pub fn analyze(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 1)?;
    let name = words[1];

    let room = game.current_room()?;
    if room.name != LAB {
        return Err(ActionError::NotAtLab);
    }
    if !room.has_character(CHEMIST) {
        return Err(ActionError::ChemistAbsent);
    }
    if !game.player.has_item(name) {
        return Err(ActionError::NotCarrying(name.to_string()));
    }
    if !Investigation::is_required(name) {
        return Err(ActionError::NotRequired(name.to_string()));
    }
    if !game.investigation.analyzed_items.insert(name.to_string()) {
        return Ok("Cet objet a déjà été analysé.".to_string());
    }

    let analyzed = game.investigation.analyzed_items.len();
    debug!("analyzed '{name}' ({analyzed}/{})", REQUIRED_ITEMS.len());

    let player = &game.config.player_name;
    if game.investigation.crime_scene_analyzed() {
        game.quests
            .complete_objective(Objective::AnalyzeCrimeSceneItems, player);
        game.quests.complete_quest(QuestId::Laboratory, player);
    }
    if name == LETTER {
        game.quests.complete_objective(Objective::AnalyzeLetter, player);
        game.quests.complete_quest(QuestId::LetterAnalysis, player);
    }

    Ok(format!(
        "Vous avez analysé: {name}\nObjets analysés: {analyzed}/{}",
        REQUIRED_ITEMS.len()
    ))
}

/// `accuse <name>`: name the culprit to the officer at the police station.
///
/// The accusation is recorded even when the evidence falls short; a wrong
/// name ends the game when the turn is evaluated.
pub fn accuse(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    let name = expect_name(words)?;

    let room = game.current_room()?;
    if room.name != POLICE_STATION {
        return Err(ActionError::NotAtPoliceStation);
    }
    if !room.has_character(OFFICER) {
        return Err(ActionError::OfficerAbsent);
    }

    info!("{} accuses {name}", game.config.player_name);
    game.investigation.accused = Some(name.clone());

    if game.investigation.win() {
        game.finish(Outcome::Won);
        return Ok(format!(
            "Vous avez accusé {name}.\nLe policier l'arrête immédiatement."
        ));
    }

    if name.to_lowercase() == CULPRIT.to_lowercase() {
        Ok(format!(
            "Vous avez accusé {name}.\n\
             Mais vous n'avez pas toutes les preuves nécessaires. Continuez l'enquête."
        ))
    } else {
        Ok(format!(
            "Vous avez accusé {name}.\n\
             Le policier vous regarde avec incrédulité.\n\
             Les preuves ne correspondent pas à cette accusation."
        ))
    }
}
