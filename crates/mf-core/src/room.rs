use std::collections::BTreeMap;
use std::fmt;

use crate::character::NpcId;
use crate::direction::Direction;
use crate::item::Item;

/// Handle to a room owned by a [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// A place on the map.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique name.
    pub name: String,
    /// Description, phrased to follow "Vous êtes dans".
    pub description: String,
    /// Exits by direction.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items lying here, keyed by item name.
    pub inventory: BTreeMap<String, Item>,
    /// Characters standing here, keyed by character name.
    pub characters: BTreeMap<String, NpcId>,
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            inventory: BTreeMap::new(),
            characters: BTreeMap::new(),
        }
    }

    /// The room reached by going `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// "Sorties: N, E" style listing of the available exits.
    pub fn exit_string(&self) -> String {
        let codes: Vec<&str> = self.exits.keys().map(Direction::code).collect();
        format!("Sorties: {}", codes.join(", "))
    }

    /// Full description shown when entering the room.
    pub fn long_description(&self) -> String {
        format!("Vous êtes dans {}\n\n{}", self.description, self.exit_string())
    }

    /// Listing of the items lying here.
    pub fn inventory_listing(&self) -> String {
        if self.inventory.is_empty() {
            return "Il n'y a rien ici.".to_string();
        }
        let mut output = "On voit:".to_string();
        for item in self.inventory.values() {
            output.push_str(&format!("\n    - {item}"));
        }
        output
    }

    /// Whether a character with this name is here.
    pub fn has_character(&self, name: &str) -> bool {
        self.characters.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cave() -> Room {
        let mut room = Room::new("Cave", "la cave humide.");
        room.exits.insert(Direction::Up, RoomId(1));
        room
    }

    #[test]
    fn long_description_lists_exits() {
        let mut room = cave();
        room.exits.insert(Direction::North, RoomId(2));
        assert_eq!(
            room.long_description(),
            "Vous êtes dans la cave humide.\n\nSorties: N, U"
        );
    }

    #[test]
    fn exit_lookup() {
        let room = cave();
        assert_eq!(room.exit(Direction::Up), Some(RoomId(1)));
        assert_eq!(room.exit(Direction::Down), None);
    }

    #[test]
    fn inventory_listing() {
        let mut room = cave();
        assert_eq!(room.inventory_listing(), "Il n'y a rien ici.");

        room.inventory.insert(
            "chest".to_string(),
            Item::new("chest", "un coffre verrouillé", 5.0),
        );
        let listing = room.inventory_listing();
        assert!(listing.starts_with("On voit:"));
        assert!(listing.contains("- chest : un coffre verrouillé (5 kg)"));
    }
}
