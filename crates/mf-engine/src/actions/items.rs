//! Picking up, dropping, examining and using items.

use log::debug;
use mf_core::montfleur::{
    CHEST, CRIME_SCENE_ITEMS, DURAND_HOUSE, KEY, KNIFE, LENOIR_HOUSE, LETTER, PHOTOS, WEAPON,
};

use crate::command::expect_params;
use crate::error::{ActionError, ActionResult};
use crate::game::Game;
use crate::quest::{Objective, QuestId};
use crate::state::StoryFlag;

/// `look`: list the items and characters in the current room.
pub fn look(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 0)?;
    let room = game.current_room()?;
    let mut output = room.inventory_listing();
    if !room.characters.is_empty() {
        output.push_str("\n\nPersonnages présents:");
        for id in room.characters.values() {
            if let Some(character) = game.world.character(*id) {
                output.push_str(&format!("\n    - {character}"));
            }
        }
    }
    Ok(output)
}

/// `take <item>`: pick up an item lying in the current room.
pub fn take(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 1)?;
    let name = words[1];
    let room_id = game.player.current_room;
    let item = game
        .world
        .room_mut(room_id)?
        .inventory
        .remove(name)
        .ok_or_else(|| ActionError::ItemNotInRoom(name.to_string()))?;
    game.player.add_item(item);

    let room_name = game.current_room_name().to_string();
    let player = game.config.player_name.clone();
    let quests = &mut game.quests;

    if CRIME_SCENE_ITEMS.contains(&name) {
        game.investigation.collected_items.insert(name.to_string());
        if CRIME_SCENE_ITEMS
            .iter()
            .all(|item| game.investigation.collected_items.contains(*item))
        {
            quests.complete_objective(Objective::CollectEvidence, &player);
        }
    }

    match name {
        KEY => {
            if room_name == DURAND_HOUSE {
                quests.complete_objective(Objective::SearchDurandHouse, &player);
            }
            quests.complete_objective(Objective::FindKey, &player);
            if game.player.has_item(CHEST) {
                quests.activate_quest(QuestId::Chest);
            }
        }
        CHEST => {
            quests.complete_objective(Objective::RetrieveChest, &player);
            if game.player.has_item(KEY) {
                quests.activate_quest(QuestId::Chest);
            }
        }
        LETTER => {
            if room_name == LENOIR_HOUSE {
                quests.complete_objective(Objective::SearchLenoirHouse, &player);
            }
            quests.complete_objective(Objective::FindLetter, &player);
            quests.complete_objective(Objective::RetrieveLetter, &player);
            quests.activate_quest(QuestId::Letter);
        }
        _ => {}
    }
    game.check_crime_scene_quest();

    debug!("took '{name}' in '{room_name}'");
    Ok(format!("Vous avez pris l'objet '{name}'."))
}

/// `drop <item>`: leave a carried item in the current room.
pub fn drop(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 1)?;
    let name = words[1];
    if !game.player.has_item(name) {
        return Err(ActionError::ItemNotInInventory(name.to_string()));
    }
    let room = game.world.room_mut(game.player.current_room)?;
    if let Some(item) = game.player.remove_item(name) {
        room.inventory.insert(item.name.clone(), item);
    }
    Ok(format!("Vous avez déposé l'objet '{name}'."))
}

/// `check`: list the player's inventory.
pub fn check(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 0)?;
    Ok(game.player.inventory_listing())
}

/// `examine <item>`: study a carried item for clues.
pub fn examine(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 1)?;
    let name = words[1];
    if !game.player.has_item(name) {
        return Err(ActionError::NotCarrying(name.to_string()));
    }

    let text = match name {
        KEY => {
            "EXAMEN DE LA CLÉ:\n\
             C'est une vieille clé en laiton. Elle semble ouvrir un coffre ou un meuble.\n\
             Indice: Elle provient de la maison de Durand..."
        }
        LETTER => {
            "LECTURE DE LA LETTRE:\n\
             Vous lisez la lettre écrite par un ami de Lenoir.\n\
             Le contenu révèle: 'Durand cache quelque chose de grave. Cherche dans son coffre!'\n\
             Indice important: Durand a quelque chose à cacher!"
        }
        KNIFE => {
            "EXAMEN DU COUTEAU:\n\
             Un couteau ensanglanté, arme probable du crime.\n\
             Indice: Les empreintes peuvent révéler le coupable."
        }
        PHOTOS => {
            "EXAMEN DES PHOTOS:\n\
             Des photos troublantes montrant Durand en mauvaise compagnie.\n\
             Indice: Des preuves de sa culpabilité potentielle."
        }
        WEAPON => {
            "EXAMEN DE L'ARME:\n\
             Une arme dissimulée. Problématique.\n\
             Indice: Qui possédait cette arme?"
        }
        CHEST => {
            "EXAMEN DU COFFRE:\n\
             Un coffre fermé à clé. La clé pourrait l'ouvrir!\n\
             Commande: use key on chest\n\
             Indice: Le contenu pourrait prouver la culpabilité."
        }
        _ => {
            return Ok(format!(
                "Vous examinez '{name}' mais ne trouvez rien d'intéressant."
            ));
        }
    };

    if name == LETTER {
        let player = &game.config.player_name;
        game.quests.complete_objective(Objective::ReadLetter, player);
        game.quests.complete_quest(QuestId::Letter, player);
    }
    Ok(text.to_string())
}

/// `use <item> on <target>`: combine two carried items. Only the key and the
/// chest go together.
pub fn use_item(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    if words.len() != 4 || !words[2].eq_ignore_ascii_case("on") {
        return Err(ActionError::UseSyntax);
    }
    let (item, target) = (words[1], words[3]);
    for name in [item, target] {
        if !game.player.has_item(name) {
            return Err(ActionError::MissingForUse(name.to_string()));
        }
    }

    let pair = [item, target];
    if !(pair == [KEY, CHEST] || pair == [CHEST, KEY]) {
        return Err(ActionError::UnsupportedPair {
            item: item.to_string(),
            target: target.to_string(),
        });
    }

    if !game.investigation.flags.insert(StoryFlag::ChestUnlocked) {
        return Ok("Le coffre est déjà ouvert.".to_string());
    }
    debug!("chest unlocked");
    let player = &game.config.player_name;
    game.quests.complete_objective(Objective::OpenChest, player);
    game.quests.complete_quest(QuestId::Chest, player);
    Ok("Vous utilisez la clé sur le coffre.\n\
        Le coffre s'ouvre et révèle son contenu caché!\n\n\
        DÉCOUVERTE MAJEURE:\n\
        \x20  Des documents secrets de Durand prouvant sa culpabilité!\n\
        \x20  Indice crucial: Durand est bien le coupable!"
        .to_string())
}
