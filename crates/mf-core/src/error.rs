use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The room handle does not belong to this world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// No room carries this name.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// A character with the same name already exists.
    #[error("character already exists: \"{0}\"")]
    DuplicateCharacter(String),

    /// No character carries this name.
    #[error("unknown character: \"{0}\"")]
    UnknownCharacter(String),

    /// An exit in seed data uses a direction code that does not exist.
    #[error("invalid direction \"{direction}\" in exits of \"{room}\"")]
    InvalidDirection {
        /// The room declaring the exit.
        room: String,
        /// The offending direction code.
        direction: String,
    },

    /// Seed data could not be parsed.
    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
}
