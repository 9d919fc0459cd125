use std::collections::BTreeMap;

use crate::item::Item;
use crate::room::RoomId;

/// The player's state in the village.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player's name.
    pub name: String,
    /// Current room.
    pub current_room: RoomId,
    /// Rooms visited so far, oldest first. The last entry is the current room.
    pub history: Vec<RoomId>,
    /// Items carried, keyed by item name.
    pub inventory: BTreeMap<String, Item>,
}

impl Player {
    /// Create a player standing in `start`.
    pub fn new(name: impl Into<String>, start: RoomId) -> Self {
        Self {
            name: name.into(),
            current_room: start,
            history: vec![start],
            inventory: BTreeMap::new(),
        }
    }

    /// Enter `room` and record it in the history.
    pub fn move_to(&mut self, room: RoomId) {
        self.current_room = room;
        self.history.push(room);
    }

    /// Step back to the previously visited room.
    ///
    /// Returns the new current room, or `None` when there is nowhere to go
    /// back to.
    pub fn go_back(&mut self) -> Option<RoomId> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        let previous = *self.history.last()?;
        self.current_room = previous;
        Some(previous)
    }

    /// Rooms visited before the current one, oldest first.
    pub fn previous_rooms(&self) -> &[RoomId] {
        &self.history[..self.history.len().saturating_sub(1)]
    }

    /// Check if the player carries an item.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains_key(name)
    }

    /// Put an item in the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.insert(item.name.clone(), item);
    }

    /// Take an item out of the inventory.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.inventory.remove(name)
    }

    /// Listing of the carried items.
    pub fn inventory_listing(&self) -> String {
        if self.inventory.is_empty() {
            return "Votre inventaire est vide.".to_string();
        }
        let mut output = "Vous disposez des items suivants:".to_string();
        for item in self.inventory.values() {
            output.push_str(&format!("\n    - {item}"));
        }
        output
    }
}
