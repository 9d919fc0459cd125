//! World model for Crime à Montfleur.
//!
//! Rooms, items, non-player characters and the player, plus the room graph
//! that ties them together. The shipped village is declared as an embedded
//! JSON seed and loaded with [`montfleur::scenario`]; other scenarios can be
//! built programmatically through [`World`].

/// Compass and vertical directions used by room exits.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Non-player characters.
pub mod character;
/// Items that can lie in rooms or be carried.
pub mod item;
/// The Montfleur scenario: names, rules constants, and the embedded seed.
pub mod montfleur;
/// The player's position, history, and inventory.
pub mod player;
/// Rooms and their contents.
pub mod room;
/// Data-driven world loading.
pub mod seed;
/// The room graph that owns rooms and characters.
pub mod world;

pub use character::{Character, NpcId};
pub use direction::Direction;
pub use error::{WorldError, WorldResult};
pub use item::Item;
pub use player::Player;
pub use room::{Room, RoomId};
pub use seed::{Scenario, ScenarioSeed};
pub use world::World;
