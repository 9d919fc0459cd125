//! Talking to characters.

use mf_core::montfleur::{CHEMIST, CORONER, DURAND, LENOIR};

use crate::command::expect_name;
use crate::error::{ActionError, ActionResult};
use crate::game::Game;
use crate::quest::Objective;

/// `talk <name>`: hear the next line of a character in the current room.
pub fn talk(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    let name = expect_name(words)?;
    let room_id = game.player.current_room;
    let id = game
        .current_room()?
        .characters
        .get(&name)
        .copied()
        .ok_or_else(|| ActionError::CharacterNotHere(name.clone()))?;
    let character = game
        .world
        .character_mut(id)
        .ok_or_else(|| ActionError::CharacterNotHere(name.clone()))?;
    let line = character.next_line();
    let in_usual_haunt = character.may_enter(room_id);

    let player = &game.config.player_name;
    let quests = &mut game.quests;
    match name.as_str() {
        CORONER => {
            quests.complete_objective(Objective::VisitMorgue, player);
            quests.complete_objective(Objective::TalkToCoroner, player);
        }
        CHEMIST => quests.complete_objective(Objective::TalkToChemist, player),
        LENOIR => quests.complete_objective(Objective::TalkToLenoir, player),
        DURAND if in_usual_haunt => {
            quests.complete_objective(Objective::FindDurand, player);
            quests.complete_objective(Objective::QuestionDurand, player);
        }
        _ => {}
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::quest::QuestId;
    use mf_core::montfleur::{CAFE, DURAND_HOUSE, LENOIR_HOUSE, MORGUE};

    fn game_in(room: &str) -> Game {
        let mut game = Game::new(GameConfig::default().with_seed(2)).unwrap();
        let id = game.world().require_room(room).unwrap();
        game.player_mut().move_to(id);
        game
    }

    #[test]
    fn dialogue_rotates() {
        let mut game = game_in(LENOIR_HOUSE);
        let first = talk(&mut game, &["talk", "Lenoir"]).unwrap();
        assert!(first.starts_with("Lenoir : "));
        let second = talk(&mut game, &["talk", "Lenoir"]).unwrap();
        assert_ne!(first, second);
        let quest = game.quests().get_quest(QuestId::Lenoir).unwrap();
        assert!(quest.is_active);
        assert!(quest.is_done(Objective::TalkToLenoir));
    }

    #[test]
    fn multi_word_names() {
        let mut game = game_in(MORGUE);
        let line = talk(&mut game, &["talk", "Médecin", "légiste"]).unwrap();
        assert!(line.starts_with("Médecin légiste : "));
        assert!(game.quests().get_quest(QuestId::Morgue).unwrap().is_completed);
    }

    #[test]
    fn absent_character() {
        let mut game = game_in(MORGUE);
        assert!(matches!(
            talk(&mut game, &["talk", "Lenoir"]),
            Err(ActionError::CharacterNotHere(ref n)) if n == "Lenoir"
        ));
        assert!(matches!(
            talk(&mut game, &["talk"]),
            Err(ActionError::OneParameter { .. })
        ));
    }

    #[test]
    fn questioning_durand_at_home() {
        let mut game = game_in(DURAND_HOUSE);
        let line = talk(&mut game, &["talk", "Durand"]).unwrap();
        assert!(line.starts_with("Durand : "));
        let quest = game.quests().get_quest(QuestId::Durand).unwrap();
        assert!(quest.is_done(Objective::FindDurand));
        assert!(quest.is_done(Objective::QuestionDurand));
        assert!(!quest.is_done(Objective::SearchDurandHouse));
    }

    #[test]
    fn questioning_durand_out_of_bounds() {
        let mut game = game_in(CAFE);
        let durand = game.world().character_id(DURAND).unwrap();
        let cafe = game.player().current_room;
        game.world_mut().relocate_character(durand, cafe).unwrap();

        let line = talk(&mut game, &["talk", "Durand"]).unwrap();
        assert!(line.starts_with("Durand : "));
        let quest = game.quests().get_quest(QuestId::Durand).unwrap();
        assert!(!quest.is_done(Objective::FindDurand));
        assert!(!quest.is_done(Objective::QuestionDurand));
        assert!(!quest.is_active);
    }
}
