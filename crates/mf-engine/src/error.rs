//! Error types for the engine.
//!
//! [`ActionError`] values are soft failures: their `Display` text is the
//! message shown to the player, and producing one never changes game state.

use mf_core::WorldError;
use thiserror::Error;

/// Result type for action handlers.
pub type ActionResult<T> = Result<T, ActionError>;

/// Result type for session setup.
pub type EngineResult<T> = Result<T, EngineError>;

/// A player action that could not be carried out.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The command word is not registered.
    #[error("Commande non reconnue. Tapez 'help' pour voir la liste des commandes disponibles.")]
    UnknownCommand(String),

    /// A command without parameters received some.
    #[error("La commande '{command}' ne prend pas de paramètre.")]
    NoParameter {
        /// The command word as typed.
        command: String,
    },

    /// A one-parameter command received the wrong number.
    #[error("La commande '{command}' prend 1 seul paramètre.")]
    OneParameter {
        /// The command word as typed.
        command: String,
    },

    /// `use` was not typed as `use <objet1> on <objet2>`.
    #[error("Utilisation: use <objet1> on <objet2>")]
    UseSyntax,

    /// No exit in the requested direction.
    #[error("Aucune porte dans cette direction !")]
    NoExit(String),

    /// The history holds only the current room.
    #[error("Vous ne pouvez pas revenir plus loin.")]
    NoHistory,

    /// The item is not lying in the current room.
    #[error("L'objet '{0}' n'est pas dans la pièce.")]
    ItemNotInRoom(String),

    /// The item to drop is not carried.
    #[error("L'objet '{0}' n'est pas dans l'inventaire.")]
    ItemNotInInventory(String),

    /// The item to examine or analyze is not carried.
    #[error("Vous n'avez pas l'objet '{0}' dans votre inventaire.")]
    NotCarrying(String),

    /// One of the items given to `use` is not carried.
    #[error("Vous n'avez pas '{0}' dans votre inventaire.")]
    MissingForUse(String),

    /// The two items cannot be combined.
    #[error("Vous ne pouvez pas utiliser '{item}' sur '{target}'.")]
    UnsupportedPair {
        /// The item being used.
        item: String,
        /// What it was used on.
        target: String,
    },

    /// Nobody with that name is in the room.
    #[error("Il n'y a pas de personnage nommé '{0}' ici.")]
    CharacterNotHere(String),

    /// Accusations are only heard at the police station.
    #[error("Vous devez aller au commissariat pour accuser quelqu'un.")]
    NotAtPoliceStation,

    /// The officer is away from the police station.
    #[error("Le policier n'est pas ici.")]
    OfficerAbsent,

    /// Analysis only happens in the laboratory.
    #[error("Vous devez aller au labo du commissariat pour analyser les objets.")]
    NotAtLab,

    /// The chemist is away from the laboratory.
    #[error("Le chimiste n'est pas ici.")]
    ChemistAbsent,

    /// The item plays no part in the case.
    #[error("Cet objet n'a pas besoin d'être analysé.")]
    NotRequired(String),

    /// The world model rejected a lookup.
    #[error("{0}")]
    World(#[from] WorldError),
}

/// Errors that prevent a session from starting.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The scenario could not be loaded.
    #[error("failed to load scenario: {0}")]
    Scenario(#[from] WorldError),
}
