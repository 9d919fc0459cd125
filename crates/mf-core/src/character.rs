use std::fmt;

use crate::room::RoomId;

/// Handle to a character owned by a [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NpcId(pub usize);

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "npc#{}", self.0)
    }
}

/// A non-player character.
#[derive(Debug, Clone)]
pub struct Character {
    /// Unique name, also the key in a room's character map.
    pub name: String,
    /// Short description.
    pub description: String,
    /// The room the character currently stands in.
    pub current_room: RoomId,
    /// Dialogue lines, spoken in order and then from the start again.
    pub dialogue: Vec<String>,
    /// Index of the next line to speak.
    pub dialogue_index: usize,
    /// Rooms the character may wander into. `None` means anywhere.
    pub allowed_rooms: Option<Vec<RoomId>>,
    /// Whether the character wanders on its own between turns.
    pub mobile: bool,
}

impl Character {
    /// Create a stationary character with no movement restriction.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        current_room: RoomId,
        dialogue: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            current_room,
            dialogue,
            dialogue_index: 0,
            allowed_rooms: None,
            mobile: false,
        }
    }

    /// Let the character wander between turns.
    pub fn mobile(mut self) -> Self {
        self.mobile = true;
        self
    }

    /// Restrict wandering to the given rooms.
    pub fn with_allowed_rooms(mut self, rooms: Vec<RoomId>) -> Self {
        self.allowed_rooms = Some(rooms);
        self
    }

    /// Whether the character is permitted in `room`.
    pub fn may_enter(&self, room: RoomId) -> bool {
        self.allowed_rooms
            .as_ref()
            .is_none_or(|allowed| allowed.contains(&room))
    }

    /// Speak the next dialogue line and advance the rotation.
    pub fn next_line(&mut self) -> String {
        if self.dialogue.is_empty() {
            return format!("{} ne dit rien...", self.name);
        }
        let line = &self.dialogue[self.dialogue_index % self.dialogue.len()];
        self.dialogue_index = (self.dialogue_index + 1) % self.dialogue.len();
        format!("{} : {line}", self.name)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenoir() -> Character {
        Character::new(
            "Lenoir",
            "une vieille dame mystérieuse",
            RoomId(0),
            vec!["Un bruit...".to_string(), "Une silhouette.".to_string()],
        )
    }

    #[test]
    fn dialogue_rotates() {
        let mut npc = lenoir();
        assert_eq!(npc.next_line(), "Lenoir : Un bruit...");
        assert_eq!(npc.next_line(), "Lenoir : Une silhouette.");
        assert_eq!(npc.next_line(), "Lenoir : Un bruit...");
        assert_eq!(npc.dialogue_index, 1);
    }

    #[test]
    fn silent_character() {
        let mut npc = Character::new("Muet", "", RoomId(0), Vec::new());
        assert_eq!(npc.next_line(), "Muet ne dit rien...");
        assert_eq!(npc.dialogue_index, 0);
    }

    #[test]
    fn allow_list() {
        let free = lenoir();
        assert!(free.may_enter(RoomId(7)));

        let bound = lenoir().with_allowed_rooms(vec![RoomId(0), RoomId(2)]);
        assert!(bound.may_enter(RoomId(2)));
        assert!(!bound.may_enter(RoomId(1)));
    }

    #[test]
    fn builder_flags() {
        let npc = lenoir().mobile();
        assert!(npc.mobile);
        assert_eq!(npc.to_string(), "Lenoir : une vieille dame mystérieuse");
    }
}
