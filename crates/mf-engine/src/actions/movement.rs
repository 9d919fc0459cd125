//! Moving around the map.

use log::debug;
use mf_core::Direction;
use mf_core::montfleur::{self, MOVE_BUDGET, MOVES_PER_DAY, TOTAL_DAYS};

use crate::command::expect_params;
use crate::error::{ActionError, ActionResult};
use crate::game::Game;

/// `go <direction>`: walk through an exit of the current room.
pub fn go(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 1)?;
    let token = words[1];
    let direction =
        Direction::parse(token).ok_or_else(|| ActionError::NoExit(token.to_string()))?;
    let to = game
        .current_room()?
        .exit(direction)
        .ok_or_else(|| ActionError::NoExit(token.to_string()))?;

    let from_name = game.current_room_name().to_string();
    game.player.move_to(to);
    let to_name = game.world.room_name(to).to_string();

    game.note_crime_scene_visit(&to_name);
    game.quests
        .check_room_objectives(&to_name, &game.config.player_name);

    let mut output = game.world.room(to)?.long_description();
    if montfleur::is_countable_move(&from_name, &to_name) {
        game.investigation.displacement_count += 1;
        let count = game.investigation.displacement_count;
        debug!("displacement {count}/{MOVE_BUDGET}: '{from_name}' -> '{to_name}'");
        output.push_str("\n\n");
        output.push_str(&time_report(count));
    }
    Ok(output)
}

/// `back`: return to the previously visited room. Not a move.
pub fn back(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 0)?;
    let room = game.player.go_back().ok_or(ActionError::NoHistory)?;
    Ok(format!(
        "{}\n\n{}",
        game.world.room(room)?.long_description(),
        history_listing(game)
    ))
}

/// `history`: list the rooms visited before the current one.
pub fn history(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 0)?;
    Ok(history_listing(game))
}

fn history_listing(game: &Game) -> String {
    let previous = game.player.previous_rooms();
    if previous.is_empty() {
        return "Vous n'avez visité aucune pièce précédemment.".to_string();
    }
    let mut output = "Vous avez déjà visité les pièces suivantes:".to_string();
    for room in previous {
        output.push_str(&format!("\n    - {}", game.world.room_name(*room)));
    }
    output
}

/// The time summary appended after a countable move.
///
/// Every tenth move closes a day with a banner; other moves get a one-line
/// progress report.
pub fn time_report(count: u32) -> String {
    let remaining = MOVE_BUDGET.saturating_sub(count);
    let warning = "ATTENTION: Vous manquez de temps!";

    if count % MOVES_PER_DAY == 0 {
        let day = count / MOVES_PER_DAY;
        let days_left = TOTAL_DAYS.saturating_sub(day);
        let rule = "=".repeat(60);
        let mut output = format!(
            "{rule}\nFIN DU JOUR {day}\n{rule}\n\
             Déplacements effectués: {count}/{MOVE_BUDGET}\n\
             Déplacements restants: {remaining}\n\
             Jours restants: {days_left}\n{rule}"
        );
        if days_left == 0 {
            output.push('\n');
            output.push_str(warning);
        }
        return output;
    }

    let days = f64::from(remaining) / f64::from(MOVE_BUDGET) * f64::from(TOTAL_DAYS);
    let mut output =
        format!("Déplacements: {count}/{MOVE_BUDGET} | Temps restant: ≈ {days:.1} jours");
    if remaining <= 5 {
        output.push('\n');
        output.push_str(warning);
    }
    output
}
