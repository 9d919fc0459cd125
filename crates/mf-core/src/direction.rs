use std::fmt;

/// Direction of a room exit.
///
/// The declaration order is the display order of exit lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Nord.
    North,
    /// Est.
    East,
    /// Sud.
    South,
    /// Ouest.
    West,
    /// Haut.
    Up,
    /// Bas.
    Down,
}

impl Direction {
    /// All directions in display order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from its one-letter code or its French name.
    ///
    /// Matching is case-insensitive: `n`, `N` and `nord` all yield
    /// [`Direction::North`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "nord" => Some(Self::North),
            "e" | "est" => Some(Self::East),
            "s" | "sud" => Some(Self::South),
            "o" | "ouest" => Some(Self::West),
            "u" | "haut" | "monter" => Some(Self::Up),
            "d" | "bas" | "descendre" => Some(Self::Down),
            _ => None,
        }
    }

    /// The one-letter code shown in exit lists.
    pub fn code(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "O",
            Self::Up => "U",
            Self::Down => "D",
        }
    }

    /// The French display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "nord",
            Self::East => "est",
            Self::South => "sud",
            Self::West => "ouest",
            Self::Up => "haut",
            Self::Down => "bas",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
