//! The Montfleur scenario: a murder in a quiet village street.
//!
//! Room, character and item names used by the investigation rules live here
//! so the rules and the seed cannot drift apart.

use crate::error::WorldResult;
use crate::seed::{Scenario, ScenarioSeed};

const SEED_JSON: &str = include_str!("../content/montfleur.json");

/// Rue de Montfleur, the street joining the houses.
pub const STREET: &str = "Rue de Montfleur";
/// The house where the murder happened. The player starts here.
pub const CRIME_HOUSE: &str = "Maison du crime";
/// The suspect's house.
pub const DURAND_HOUSE: &str = "Maison de Durand";
/// The witness's house.
pub const LENOIR_HOUSE: &str = "Maison de Madame Lenoir";
/// The café between the street and the police station.
pub const CAFE: &str = "Café du Marchand";
/// The police station, where accusations are made.
pub const POLICE_STATION: &str = "Commissariat";
/// The police laboratory, where evidence is analyzed.
pub const LAB: &str = "Labo du commissariat";
/// The morgue.
pub const MORGUE: &str = "Morgue de Montfleur";
/// Attic of the crime house.
pub const ATTIC: &str = "Grenier";
/// Cellar of the crime house.
pub const CELLAR: &str = "Cave";
/// Garden of the crime house.
pub const GARDEN: &str = "Jardin";

/// The suspect, and the only character who wanders.
pub const DURAND: &str = "Durand";
/// The witness.
pub const LENOIR: &str = "Lenoir";
/// The officer who takes accusations.
pub const OFFICER: &str = "Policier";
/// The coroner.
pub const CORONER: &str = "Médecin légiste";
/// The chemist who analyzes evidence.
pub const CHEMIST: &str = "Chimiste";

/// The guilty party.
pub const CULPRIT: &str = DURAND;

/// The knife lying in the crime house.
pub const KNIFE: &str = "knife";
/// The key found at Durand's.
pub const KEY: &str = "key";
/// The letter found at Madame Lenoir's.
pub const LETTER: &str = "letter";
/// The locked chest in the cellar.
pub const CHEST: &str = "chest";
/// The photos in the attic.
pub const PHOTOS: &str = "photos";
/// The weapon hidden in the garden.
pub const WEAPON: &str = "weapon";

/// Every item that must be analyzed to close the case.
pub const REQUIRED_ITEMS: [&str; 6] = [KEY, PHOTOS, CHEST, KNIFE, WEAPON, LETTER];
/// Evidence lying at the crime scene itself.
pub const CRIME_SCENE_ITEMS: [&str; 4] = [PHOTOS, KNIFE, CHEST, WEAPON];
/// Rooms that make up the crime scene.
pub const CRIME_SCENE_ROOMS: [&str; 4] = [ATTIC, CRIME_HOUSE, CELLAR, GARDEN];
/// Rooms whose entry or exit does not consume the move budget.
pub const UNCOUNTED_ROOMS: [&str; 4] = [ATTIC, GARDEN, CELLAR, LAB];

/// Countable moves available before the investigation times out.
pub const MOVE_BUDGET: u32 = 40;
/// Countable moves in one in-game day.
pub const MOVES_PER_DAY: u32 = 10;
/// Days available for the investigation.
pub const TOTAL_DAYS: u32 = MOVE_BUDGET / MOVES_PER_DAY;

/// Item deposited when the suspect shows up at the police station.
pub const STATION_CLUE: &str = "indice_durand_commissariat";
/// Item deposited when the suspect shows up somewhere unexpected.
pub const STRAY_CLUE: &str = "indice_durand_inattendu";

/// The embedded Montfleur seed.
pub fn seed() -> WorldResult<ScenarioSeed> {
    ScenarioSeed::from_json(SEED_JSON)
}

/// Build the Montfleur world with the player's start room.
pub fn scenario() -> WorldResult<Scenario> {
    seed()?.build()
}

/// Whether moving between these two rooms consumes the move budget.
pub fn is_countable_move(from: &str, to: &str) -> bool {
    !UNCOUNTED_ROOMS.contains(&from) && !UNCOUNTED_ROOMS.contains(&to)
}
