use std::fmt;

/// An object lying in a room or carried by the player.
///
/// Items are never copied between inventories: they are moved by value, so
/// an item lives in exactly one place at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique name, also the inventory key.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Weight in kilograms. Zero marks a narrative clue with no physical weight.
    pub weight: f64,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
        }
    }

    /// Whether the item has no physical weight.
    pub fn is_weightless(&self) -> bool {
        self.weight == 0.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_weightless() {
            write!(f, "{} : {}", self.name, self.description)
        } else {
            write!(f, "{} : {} ({} kg)", self.name, self.description, self.weight)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_weight() {
        let item = Item::new("knife", "un couteau ensanglanté", 0.5);
        assert_eq!(item.to_string(), "knife : un couteau ensanglanté (0.5 kg)");
    }

    #[test]
    fn display_whole_weight() {
        let item = Item::new("chest", "un coffre verrouillé", 5.0);
        assert_eq!(item.to_string(), "chest : un coffre verrouillé (5 kg)");
    }

    #[test]
    fn weightless_clue_hides_weight() {
        let clue = Item::new("indice", "Durand a été vu ici.", 0.0);
        assert!(clue.is_weightless());
        assert_eq!(clue.to_string(), "indice : Durand a été vu ici.");
    }
}
