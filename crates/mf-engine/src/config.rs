//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The detective's name, used in greetings and rewards.
    pub player_name: String,
    /// RNG seed for reproducible character movement. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether the suspect may legally visit the police station. Only changes
    /// the wording of the clue left behind when he does.
    pub law_allows_suspect_at_station: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Détective".to_string(),
            seed: None,
            law_allows_suspect_at_station: false,
        }
    }
}

impl GameConfig {
    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Allow or forbid the suspect at the police station.
    pub fn with_law_allowing_suspect(mut self, allowed: bool) -> Self {
        self.law_allows_suspect_at_station = allowed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.player_name, "Détective");
        assert_eq!(cfg.seed, None);
        assert!(!cfg.law_allows_suspect_at_station);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_player_name("Maigret")
            .with_seed(7)
            .with_law_allowing_suspect(true);
        assert_eq!(cfg.player_name, "Maigret");
        assert_eq!(cfg.seed, Some(7));
        assert!(cfg.law_allows_suspect_at_station);
    }
}
