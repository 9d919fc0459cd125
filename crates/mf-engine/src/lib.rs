//! Investigation engine for Crime à Montfleur.
//!
//! Turns player input into game actions: a command table dispatches each
//! line to an action handler, handlers mutate the world, the player and the
//! quest log, and after every turn the suspect may wander and the
//! win/lose conditions are re-evaluated.

/// Action handlers, one per command word.
pub mod actions;
/// Command table and tokenizer.
pub mod command;
/// Session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// The game controller.
pub mod game;
/// Autonomous character movement between turns.
pub mod npc;
/// Win and lose evaluation.
pub mod outcome;
/// Quests, objectives, and the quest log.
pub mod quest;
/// Accumulated investigation progress.
pub mod state;

pub use command::{CommandSpec, CommandTable, tokenize};
pub use config::GameConfig;
pub use error::{ActionError, ActionResult, EngineError, EngineResult};
pub use game::{Game, Turn};
pub use outcome::{Defeat, Outcome};
pub use quest::{Objective, Quest, QuestId, QuestKind, QuestManager, QuestStatus};
pub use state::{Investigation, StoryFlag};
