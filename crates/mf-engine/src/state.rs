//! Accumulated investigation progress.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use mf_core::montfleur::{
    CRIME_SCENE_ITEMS, CRIME_SCENE_ROOMS, CULPRIT, MOVE_BUDGET, REQUIRED_ITEMS,
};

/// One-off narrative events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryFlag {
    /// The chest has been opened with the key.
    ChestUnlocked,
}

/// Everything the player has achieved so far.
#[derive(Debug, Clone, Default)]
pub struct Investigation {
    /// Countable room-to-room moves made.
    pub displacement_count: u32,
    /// Crime scene items picked up at least once.
    pub collected_items: BTreeSet<String>,
    /// Items analyzed at the laboratory.
    pub analyzed_items: BTreeSet<String>,
    /// Crime scene rooms entered.
    pub visited_crime_scene: BTreeSet<String>,
    /// The last person accused, if any.
    pub accused: Option<String>,
    /// Narrative flags.
    pub flags: HashSet<StoryFlag>,
    /// Suspicion points per character.
    pub suspicions: BTreeMap<String, u32>,
    /// Clue texts uncovered by the suspect's movements.
    pub clues: Vec<String>,
}

impl Investigation {
    /// Start an investigation from scratch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` must be analyzed to close the case.
    pub fn is_required(name: &str) -> bool {
        REQUIRED_ITEMS.contains(&name)
    }

    /// Required items not analyzed yet, in a stable order.
    pub fn missing_analyses(&self) -> Vec<&'static str> {
        let mut missing: Vec<_> = REQUIRED_ITEMS
            .iter()
            .copied()
            .filter(|name| !self.analyzed_items.contains(*name))
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Whether the analyzed set is exactly the required set.
    pub fn analysis_complete(&self) -> bool {
        self.analyzed_items.len() == REQUIRED_ITEMS.len()
            && REQUIRED_ITEMS
                .iter()
                .all(|name| self.analyzed_items.contains(*name))
    }

    /// Whether the four crime scene items have been analyzed.
    pub fn crime_scene_analyzed(&self) -> bool {
        CRIME_SCENE_ITEMS
            .iter()
            .all(|name| self.analyzed_items.contains(*name))
    }

    /// Whether every crime scene room was entered and every crime scene item
    /// picked up.
    pub fn crime_scene_searched(&self) -> bool {
        CRIME_SCENE_ROOMS
            .iter()
            .all(|room| self.visited_crime_scene.contains(*room))
            && CRIME_SCENE_ITEMS
                .iter()
                .all(|item| self.collected_items.contains(*item))
    }

    /// Whether the accusation names the culprit, ignoring case.
    pub fn accusation_is_correct(&self) -> bool {
        self.accused
            .as_deref()
            .is_some_and(|name| name.to_lowercase() == CULPRIT.to_lowercase())
    }

    /// Whether someone other than the culprit has been accused.
    pub fn accusation_is_wrong(&self) -> bool {
        self.accused.is_some() && !self.accusation_is_correct()
    }

    /// Whether the move budget has been exceeded.
    pub fn out_of_time(&self) -> bool {
        self.displacement_count > MOVE_BUDGET
    }

    /// Moves left before the budget runs out.
    pub fn remaining_moves(&self) -> u32 {
        MOVE_BUDGET.saturating_sub(self.displacement_count)
    }

    /// The win condition: full analysis, the right accusation, and time left.
    pub fn win(&self) -> bool {
        self.analysis_complete() && self.accusation_is_correct() && !self.out_of_time()
    }

    /// Add a suspicion point against `name`.
    pub fn raise_suspicion(&mut self, name: &str) -> u32 {
        let counter = self.suspicions.entry(name.to_string()).or_default();
        *counter += 1;
        *counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved() -> Investigation {
        let mut inv = Investigation::new();
        for name in REQUIRED_ITEMS {
            inv.analyzed_items.insert(name.to_string());
        }
        inv.accused = Some("Durand".to_string());
        inv.displacement_count = 40;
        inv
    }

    #[test]
    fn win_requires_everything() {
        assert!(solved().win());
    }

    #[test]
    fn win_ignores_accusation_case() {
        let mut inv = solved();
        inv.accused = Some("dUrAnD".to_string());
        assert!(inv.win());
    }

    #[test]
    fn missing_analysis_breaks_win() {
        let mut inv = solved();
        inv.analyzed_items.remove("letter");
        assert!(!inv.win());
        assert_eq!(inv.missing_analyses(), vec!["letter"]);
    }

    #[test]
    fn extra_analysis_breaks_exact_match() {
        let mut inv = solved();
        inv.analyzed_items.insert("indice".to_string());
        assert!(!inv.analysis_complete());
        assert!(!inv.win());
    }

    #[test]
    fn wrong_or_missing_accusation_breaks_win() {
        let mut inv = solved();
        inv.accused = Some("Lenoir".to_string());
        assert!(!inv.win());
        assert!(inv.accusation_is_wrong());

        inv.accused = None;
        assert!(!inv.win());
        assert!(!inv.accusation_is_wrong());
    }

    #[test]
    fn overtime_breaks_win() {
        let mut inv = solved();
        inv.displacement_count = 41;
        assert!(inv.out_of_time());
        assert!(!inv.win());
        assert_eq!(inv.remaining_moves(), 0);
    }

    #[test]
    fn crime_scene_search() {
        let mut inv = Investigation::new();
        for room in CRIME_SCENE_ROOMS {
            inv.visited_crime_scene.insert(room.to_string());
        }
        assert!(!inv.crime_scene_searched());
        for item in CRIME_SCENE_ITEMS {
            inv.collected_items.insert(item.to_string());
        }
        assert!(inv.crime_scene_searched());
    }

    #[test]
    fn suspicion_counter() {
        let mut inv = Investigation::new();
        assert_eq!(inv.raise_suspicion("Durand"), 1);
        assert_eq!(inv.raise_suspicion("Durand"), 2);
        assert_eq!(inv.suspicions.get("Durand"), Some(&2));
    }
}
