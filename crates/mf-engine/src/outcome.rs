//! Win and lose evaluation.

use std::fmt;

use mf_core::montfleur::{CULPRIT, MOVE_BUDGET};

use crate::state::Investigation;

/// Why the investigation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defeat {
    /// The move budget ran out.
    OutOfTime,
    /// The wrong person was accused.
    WrongAccusation(String),
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The culprit was arrested.
    Won,
    /// The investigation failed.
    Lost(Defeat),
    /// The player left the game.
    Quit,
}

impl Outcome {
    /// Whether the player won.
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost(Defeat::OutOfTime) => write!(f, "lost (out of time)"),
            Self::Lost(Defeat::WrongAccusation(name)) => {
                write!(f, "lost (wrong accusation: {name})")
            }
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Decide whether the investigation is over. Defeat is checked before
/// victory.
pub fn evaluate(investigation: &Investigation) -> Option<Outcome> {
    if investigation.out_of_time() {
        return Some(Outcome::Lost(Defeat::OutOfTime));
    }
    if investigation.accusation_is_wrong() {
        let name = investigation.accused.clone().unwrap_or_default();
        return Some(Outcome::Lost(Defeat::WrongAccusation(name)));
    }
    if investigation.win() {
        return Some(Outcome::Won);
    }
    None
}

/// The closing text for a finished game.
pub fn ending_message(outcome: &Outcome, investigation: &Investigation, player_name: &str) -> String {
    let rule = "=".repeat(60);
    match outcome {
        Outcome::Won => format!(
            "{rule}\nAFFAIRE RÉSOLUE\n{rule}\n\
             Félicitations {player_name} ! {CULPRIT} a été arrêté et passera aux aveux.\n\
             Objets analysés: {}/{}\n\
             Déplacements utilisés: {}/{MOVE_BUDGET}\n{rule}",
            investigation.analyzed_items.len(),
            mf_core::montfleur::REQUIRED_ITEMS.len(),
            investigation.displacement_count,
        ),
        Outcome::Lost(Defeat::OutOfTime) => format!(
            "{rule}\nTEMPS ÉCOULÉ\n{rule}\n\
             Vous avez dépassé les {MOVE_BUDGET} déplacements autorisés.\n\
             L'enquête est confiée à un autre inspecteur. Le coupable court toujours.\n{rule}"
        ),
        Outcome::Lost(Defeat::WrongAccusation(name)) => format!(
            "{rule}\nERREUR JUDICIAIRE\n{rule}\n\
             {name} est innocent. Pendant ce temps, le vrai coupable a pris la fuite.\n\
             L'enquête est close sur un échec.\n{rule}"
        ),
        Outcome::Quit => format!("Merci {player_name} d'avoir joué. Au revoir."),
    }
}
