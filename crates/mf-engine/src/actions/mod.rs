//! Action handlers.
//!
//! Every handler has the [`Action`](crate::command::Action) signature: it
//! receives the game and the full token list, validates the token count, and
//! either mutates the game and returns narrative text or returns an
//! [`ActionError`](crate::error::ActionError) without touching anything.

/// Accusing and evidence analysis.
pub mod case;
/// Talking to characters.
pub mod characters;
/// Help, quest log and quitting.
pub mod info;
/// Picking up, dropping, examining and using items.
pub mod items;
/// Moving around the map.
pub mod movement;
