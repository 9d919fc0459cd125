use std::collections::HashMap;

use crate::character::{Character, NpcId};
use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::room::{Room, RoomId};

/// The room graph. Owns every room and every character.
///
/// Rooms reference each other and characters through [`RoomId`] and
/// [`NpcId`] handles, so moving a character only touches two character maps
/// and the character's own `current_room`.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,
    characters: Vec<Character>,

    // Indexes
    room_by_name: HashMap<String, RoomId>,
    npc_by_name: HashMap<String, NpcId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room. Names must be unique.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        if self.room_by_name.contains_key(&room.name) {
            return Err(WorldError::DuplicateRoom(room.name));
        }
        let id = RoomId(self.rooms.len());
        self.room_by_name.insert(room.name.clone(), id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Add a one-way exit from `from` to `to`.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> WorldResult<()> {
        self.room(to)?;
        self.room_mut(from)?.exits.insert(direction, to);
        Ok(())
    }

    /// Get a room by handle.
    pub fn room(&self, id: RoomId) -> WorldResult<&Room> {
        self.rooms.get(id.0).ok_or(WorldError::RoomNotFound(id))
    }

    /// Get a mutable room by handle.
    pub fn room_mut(&mut self, id: RoomId) -> WorldResult<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(WorldError::RoomNotFound(id))
    }

    /// Find a room handle by exact name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.room_by_name.get(name).copied()
    }

    /// Find a room handle by exact name, failing if absent.
    pub fn require_room(&self, name: &str) -> WorldResult<RoomId> {
        self.room_id(name)
            .ok_or_else(|| WorldError::UnknownRoom(name.to_string()))
    }

    /// Name of a room, or an empty string for a foreign handle.
    pub fn room_name(&self, id: RoomId) -> &str {
        self.rooms.get(id.0).map_or("", |r| r.name.as_str())
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    // -----------------------------------------------------------------------
    // Characters
    // -----------------------------------------------------------------------

    /// Add a character and place it in its `current_room`.
    pub fn add_character(&mut self, character: Character) -> WorldResult<NpcId> {
        if self.npc_by_name.contains_key(&character.name) {
            return Err(WorldError::DuplicateCharacter(character.name));
        }
        let id = NpcId(self.characters.len());
        let name = character.name.clone();
        self.room_mut(character.current_room)?
            .characters
            .insert(name.clone(), id);
        self.npc_by_name.insert(name, id);
        self.characters.push(character);
        Ok(id)
    }

    /// Get a character by handle.
    pub fn character(&self, id: NpcId) -> Option<&Character> {
        self.characters.get(id.0)
    }

    /// Get a mutable character by handle.
    pub fn character_mut(&mut self, id: NpcId) -> Option<&mut Character> {
        self.characters.get_mut(id.0)
    }

    /// Find a character handle by exact name.
    pub fn character_id(&self, name: &str) -> Option<NpcId> {
        self.npc_by_name.get(name).copied()
    }

    /// Handles of every character standing in a room, in room order and then
    /// by name. Each character appears once.
    pub fn placed_characters(&self) -> Vec<NpcId> {
        self.rooms
            .iter()
            .flat_map(|room| room.characters.values().copied())
            .collect()
    }

    /// Move a character to `to`. Returns the room it left.
    pub fn relocate_character(&mut self, id: NpcId, to: RoomId) -> WorldResult<RoomId> {
        self.room(to)?;
        let character = self
            .characters
            .get(id.0)
            .ok_or_else(|| WorldError::UnknownCharacter(id.to_string()))?;
        let from = character.current_room;
        let name = character.name.clone();

        self.room_mut(from)?.characters.remove(&name);
        self.room_mut(to)?.characters.insert(name, id);
        if let Some(character) = self.characters.get_mut(id.0) {
            character.current_room = to;
        }
        Ok(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> (World, RoomId, RoomId) {
        let mut world = World::new();
        let street = world.add_room(Room::new("Rue", "la rue.")).unwrap();
        let house = world.add_room(Room::new("Maison", "la maison.")).unwrap();
        world.connect(street, Direction::East, house).unwrap();
        world.connect(house, Direction::West, street).unwrap();
        (world, street, house)
    }

    #[test]
    fn add_and_lookup_rooms() {
        let (world, street, house) = two_rooms();
        assert_eq!(world.room_count(), 2);
        assert_eq!(world.room_id("Rue"), Some(street));
        assert_eq!(world.room_name(house), "Maison");
        assert_eq!(world.room(street).unwrap().exit(Direction::East), Some(house));
        assert!(world.require_room("Grenier").is_err());
    }

    #[test]
    fn duplicate_room_rejected() {
        let (mut world, _, _) = two_rooms();
        let err = world.add_room(Room::new("Rue", "encore")).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom(name) if name == "Rue"));
    }

    #[test]
    fn connect_to_unknown_room_fails() {
        let (mut world, street, _) = two_rooms();
        assert!(world.connect(street, Direction::Up, RoomId(99)).is_err());
        assert!(world.room(street).unwrap().exit(Direction::Up).is_none());
    }

    #[test]
    fn characters_are_placed_and_moved() {
        let (mut world, street, house) = two_rooms();
        let npc = world
            .add_character(Character::new("Durand", "un voisin", street, vec![]))
            .unwrap();
        assert!(world.room(street).unwrap().has_character("Durand"));
        assert_eq!(world.placed_characters(), vec![npc]);

        let from = world.relocate_character(npc, house).unwrap();
        assert_eq!(from, street);
        assert!(!world.room(street).unwrap().has_character("Durand"));
        assert!(world.room(house).unwrap().has_character("Durand"));
        assert_eq!(world.character(npc).unwrap().current_room, house);
    }

    #[test]
    fn duplicate_character_rejected() {
        let (mut world, street, _) = two_rooms();
        world
            .add_character(Character::new("Durand", "", street, vec![]))
            .unwrap();
        assert!(
            world
                .add_character(Character::new("Durand", "", street, vec![]))
                .is_err()
        );
    }
}
