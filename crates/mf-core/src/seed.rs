//! Seed data: a serializable description of a scenario and its loader.
//!
//! Rooms are declared first, then exits (by room name), items and characters
//! refer to rooms by name as well, so a seed reads like the map it describes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::item::Item;
use crate::room::{Room, RoomId};
use crate::world::World;

/// A whole scenario as stored in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSeed {
    /// Name of the room the player starts in.
    pub start: String,
    /// Rooms and their exits.
    pub rooms: Vec<RoomSeed>,
    /// Items and where they lie.
    #[serde(default)]
    pub items: Vec<ItemSeed>,
    /// Characters and where they stand.
    #[serde(default)]
    pub characters: Vec<CharacterSeed>,
}

/// Seed entry for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSeed {
    /// Unique room name.
    pub name: String,
    /// Room description.
    pub description: String,
    /// Exits: direction code (`N`, `E`, `S`, `O`, `U`, `D`) to room name.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
}

/// Seed entry for an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSeed {
    /// Room the item lies in.
    pub room: String,
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: String,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: f64,
}

/// Seed entry for a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSeed {
    /// Character name.
    pub name: String,
    /// Character description.
    pub description: String,
    /// Room the character starts in.
    pub room: String,
    /// Dialogue lines.
    #[serde(default)]
    pub dialogue: Vec<String>,
    /// Rooms the character may wander into.
    #[serde(default)]
    pub allowed_rooms: Option<Vec<String>>,
    /// Whether the character wanders between turns.
    #[serde(default)]
    pub mobile: bool,
}

/// A loaded scenario: the world and the player's starting room.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// The populated world.
    pub world: World,
    /// Where the player starts.
    pub start: RoomId,
}

impl ScenarioSeed {
    /// Parse a seed from JSON text.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the world described by this seed.
    pub fn build(&self) -> WorldResult<Scenario> {
        let mut world = World::new();

        for room in &self.rooms {
            world.add_room(Room::new(&room.name, &room.description))?;
        }

        for room in &self.rooms {
            let from = world.require_room(&room.name)?;
            for (code, target) in &room.exits {
                let direction =
                    Direction::parse(code).ok_or_else(|| WorldError::InvalidDirection {
                        room: room.name.clone(),
                        direction: code.clone(),
                    })?;
                let to = world.require_room(target)?;
                world.connect(from, direction, to)?;
            }
        }

        for item in &self.items {
            let room = world.require_room(&item.room)?;
            world.room_mut(room)?.inventory.insert(
                item.name.clone(),
                Item::new(&item.name, &item.description, item.weight),
            );
        }

        for seed in &self.characters {
            let room = world.require_room(&seed.room)?;
            let mut character =
                Character::new(&seed.name, &seed.description, room, seed.dialogue.clone());
            if let Some(names) = &seed.allowed_rooms {
                let allowed = names
                    .iter()
                    .map(|n| world.require_room(n))
                    .collect::<WorldResult<Vec<_>>>()?;
                character = character.with_allowed_rooms(allowed);
            }
            if seed.mobile {
                character = character.mobile();
            }
            world.add_character(character)?;
        }

        let start = world.require_room(&self.start)?;
        Ok(Scenario { world, start })
    }
}
