//! Help, quest log and quitting.

use mf_core::montfleur::{MOVE_BUDGET, REQUIRED_ITEMS, TOTAL_DAYS};

use crate::command::expect_params;
use crate::error::ActionResult;
use crate::game::Game;
use crate::outcome::Outcome;
use crate::quest::Quest;

const HINTS: &str = "\
CONSEILS IMPORTANTS

1. PRENDRE ET EXAMINER LES OBJETS:
   - Commande: take <objet>
   - Les objets doivent être dans votre inventaire pour être analysés
   - Examinez les objets pour obtenir des indices: examine <objet>
   - Vérifiez votre inventaire avec 'check'

2. UTILISER LES OBJETS:
   - Commande: use <objet1> on <objet2>
   - Exemple: use key on chest (ouvre le coffre avec la clé)
   - Révèle des indices importants et des secrets

3. ANALYSER LES OBJETS (un par un):
   - Allez au Labo du commissariat
   - L'objet doit être dans votre inventaire
   - Commande: analyze <objet>
   - Pas besoin d'avoir tous les objets en même temps
   - Parlez au Chimiste pour entendre ses conclusions: talk Chimiste

4. QUÊTES ET RÉCOMPENSES:
   - Commande: quests
   - Chaque quête complétée donne un indice comme récompense

5. OBJETS À ANALYSER (6 requis):
   - knife, key, letter, chest, photos, weapon

6. RÉSOUDRE L'ENQUÊTE:
   - Analyser les 6 objets au Labo
   - Interroger les suspects pour découvrir le coupable
   - Accuser le coupable au Commissariat, devant le Policier
   - Tout faire en 40 déplacements au plus";

/// `help`: list the commands and the investigation tips.
pub fn help(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 0)?;
    let rule = "=".repeat(60);
    let mut output = "Voici les commandes disponibles:".to_string();
    for command in game.commands.iter() {
        output.push_str(&format!("\n    - {command}"));
    }
    output.push_str(&format!("\n\n{rule}\n{HINTS}\n{rule}"));
    Ok(output)
}

/// `quit`: leave the game.
pub fn quit(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 0)?;
    game.finish(Outcome::Quit);
    Ok(format!(
        "Merci {} d'avoir joué. Au revoir.",
        game.config.player_name
    ))
}

/// `quests`: show the remaining time, the quest log and analysis progress.
pub fn quests(game: &mut Game, words: &[&str]) -> ActionResult<String> {
    expect_params(words, 0)?;
    let rule = "=".repeat(60);
    let investigation = &game.investigation;
    let elapsed = investigation.displacement_count;
    let remaining = investigation.remaining_moves();
    let days = f64::from(remaining) / f64::from(MOVE_BUDGET) * f64::from(TOTAL_DAYS);

    let mut output = format!(
        "{rule}\nTEMPS IMPARTI POUR L'ENQUÊTE\n{rule}\n\
         Temps total disponible: {TOTAL_DAYS} jours = {MOVE_BUDGET} déplacements\n\
         Temps écoulé: {elapsed}/{MOVE_BUDGET} déplacements\n\
         Temps restant: {remaining}/{MOVE_BUDGET} déplacements ≈ {days:.1} jours\n{rule}\n\n\
         QUÊTES ACTIVES/DISPONIBLES:\n"
    );
    for (i, quest) in game.quests.main_quests().enumerate() {
        output.push_str(&format!("\n{} Quest {}: ", quest.status(), i + 1));
        push_quest(&mut output, quest);
    }

    output.push_str("\nQUÊTES OPTIONNELLES (non-chronologiques):\n");
    for quest in game.quests.optional_quests() {
        output.push_str(&format!("\n{} ", quest.status()));
        push_quest(&mut output, quest);
    }

    output.push_str(&format!(
        "\nPROGRÈS D'ANALYSE:\nObjets analysés: {}/{}",
        investigation.analyzed_items.len(),
        REQUIRED_ITEMS.len()
    ));
    if !investigation.analyzed_items.is_empty() {
        let analyzed: Vec<&str> = investigation
            .analyzed_items
            .iter()
            .map(String::as_str)
            .collect();
        output.push_str(&format!("\nAnalysés: {}", analyzed.join(", ")));
    }
    let missing = investigation.missing_analyses();
    if !missing.is_empty() {
        output.push_str(&format!("\nObjets restants à analyser: {}", missing.len()));
    }
    output.push_str(&format!("\n{rule}"));
    Ok(output)
}

fn push_quest(output: &mut String, quest: &Quest) {
    output.push_str(&format!(
        "{}\n   Description: {}\n",
        quest.title, quest.description
    ));
    if !quest.objectives.is_empty() {
        let objectives: Vec<String> = quest
            .objectives
            .iter()
            .map(|(objective, done)| {
                if *done {
                    format!("{objective} (fait)")
                } else {
                    objective.to_string()
                }
            })
            .collect();
        output.push_str(&format!("   Objectifs: {}\n", objectives.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn game() -> Game {
        Game::new(GameConfig::default().with_player_name("Maigret").with_seed(8)).unwrap()
    }

    #[test]
    fn help_lists_commands_in_order() {
        let mut game = game();
        let text = help(&mut game, &["help"]).unwrap();
        let go = text.find("- go <direction>").unwrap();
        let quests = text.find("- quests :").unwrap();
        assert!(go < quests);
        assert!(text.contains("CONSEILS IMPORTANTS"));
    }

    #[test]
    fn quit_says_goodbye() {
        let mut game = game();
        assert_eq!(
            quit(&mut game, &["quit"]).unwrap(),
            "Merci Maigret d'avoir joué. Au revoir."
        );
        assert_eq!(game.outcome(), Some(&Outcome::Quit));
    }

    #[test]
    fn quest_log_layout() {
        let mut game = game();
        let text = quests(&mut game, &["quests"]).unwrap();
        assert!(text.contains("Temps restant: 40/40 déplacements ≈ 4.0 jours"));
        assert!(text.contains("(Not started) Quest 1: Explorer la scène du crime"));
        assert!(text.contains("(Not started) Quest 7: Résoudre l'énigme"));
        assert!(text.contains("(Not started) Ouvrir le coffre"));
        assert!(text.contains("Objets analysés: 0/6"));
        assert!(text.contains("Objets restants à analyser: 6"));
    }

    #[test]
    fn arity() {
        let mut game = game();
        assert!(help(&mut game, &["help", "me"]).is_err());
        assert!(quit(&mut game, &["quit", "now"]).is_err());
        assert!(!game.is_finished());
    }
}
