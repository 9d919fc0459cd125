//! Autonomous character movement between turns.
//!
//! Once per turn every placed character gets a single chance to move. The set
//! of characters is snapshotted before anyone moves, so a character that
//! walks into a room visited later in the iteration does not move twice.

use log::debug;
use mf_core::montfleur::{POLICE_STATION, STATION_CLUE, STRAY_CLUE};
use mf_core::{Item, NpcId, RoomId, World, WorldError, WorldResult};
use rand::Rng;

use crate::config::GameConfig;
use crate::state::Investigation;

/// A character relocation performed during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    /// Who moved.
    pub npc: NpcId,
    /// Their name.
    pub name: String,
    /// The room they left.
    pub from: RoomId,
    /// The room they entered.
    pub to: RoomId,
}

impl Movement {
    /// The line shown to the player.
    pub fn report(&self, world: &World) -> String {
        format!(
            "{} a quitté '{}' et est allé à '{}'.",
            self.name,
            world.room_name(self.from),
            world.room_name(self.to)
        )
    }
}

/// Give every mobile character one chance to move.
///
/// Each one flips a fair coin; on heads it picks uniformly among the exits of
/// its room that its allow-list permits.
pub fn advance<R: Rng>(world: &mut World, rng: &mut R) -> WorldResult<Vec<Movement>> {
    let mut movements = Vec::new();

    for id in world.placed_characters() {
        let character = world
            .character(id)
            .ok_or_else(|| WorldError::UnknownCharacter(id.to_string()))?;
        if !character.mobile {
            continue;
        }
        let name = character.name.clone();
        let from = character.current_room;

        if !rng.random_bool(0.5) {
            debug!("{name} stays in '{}' (coin flip)", world.room_name(from));
            continue;
        }

        let candidates: Vec<RoomId> = world
            .room(from)?
            .exits
            .values()
            .copied()
            .filter(|room| character.may_enter(*room))
            .collect();
        if candidates.is_empty() {
            debug!("{name} stays in '{}' (no eligible exit)", world.room_name(from));
            continue;
        }

        let to = candidates[rng.random_range(0..candidates.len())];
        world.relocate_character(id, to)?;
        debug!(
            "{name} moved from '{}' to '{}'",
            world.room_name(from),
            world.room_name(to)
        );
        movements.push(Movement { npc: id, name, from, to });
    }

    Ok(movements)
}

/// Apply the consequences of the suspect's movements: clue items left behind
/// and suspicion raised. Returns the clue texts recorded.
pub fn record_clues(
    world: &mut World,
    investigation: &mut Investigation,
    config: &GameConfig,
    movements: &[Movement],
) -> WorldResult<Vec<String>> {
    let mut clues = Vec::new();

    for movement in movements {
        let allowed = world
            .character(movement.npc)
            .is_none_or(|c| c.may_enter(movement.to));
        let room_name = world.room_name(movement.to).to_string();

        let clue = if room_name == POLICE_STATION {
            let text = if config.law_allows_suspect_at_station {
                format!("{} vu au Commissariat, il a discuté de l'enquête.", movement.name)
            } else {
                format!(
                    "Il est parti malgré l'interdiction : {} a demandé des infos sur l'enquête.",
                    movement.name
                )
            };
            Some((STATION_CLUE, text))
        } else if !allowed {
            let text = format!(
                "On a retrouvé {} ici : {room_name}. C'est inattendu et cela augmente la suspicion.",
                movement.name
            );
            Some((STRAY_CLUE, text))
        } else {
            None
        };

        let Some((item_name, text)) = clue else {
            continue;
        };
        world
            .room_mut(movement.to)?
            .inventory
            .insert(item_name.to_string(), Item::new(item_name, text.clone(), 0.0));
        let level = investigation.raise_suspicion(&movement.name);
        debug!(
            "clue '{item_name}' left in '{room_name}', suspicion of {} now {level}",
            movement.name
        );
        investigation.clues.push(text.clone());
        clues.push(text);
    }

    Ok(clues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::montfleur::{self, DURAND, DURAND_HOUSE, LENOIR};
    use mf_core::{Character, Direction, Room};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn montfleur_world() -> World {
        montfleur::scenario().unwrap().world
    }

    #[test]
    fn only_mobile_characters_move() {
        let mut world = montfleur_world();
        let lenoir = world.character_id(LENOIR).unwrap();
        let home = world.character(lenoir).unwrap().current_room;
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            for movement in advance(&mut world, &mut rng).unwrap() {
                assert_eq!(movement.name, DURAND);
            }
        }
        assert_eq!(world.character(lenoir).unwrap().current_room, home);
    }

    #[test]
    fn suspect_stays_inside_allow_list() {
        let mut world = montfleur_world();
        let durand = world.character_id(DURAND).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            advance(&mut world, &mut rng).unwrap();
            let character = world.character(durand).unwrap();
            assert!(character.may_enter(character.current_room));
            let room = world.room(character.current_room).unwrap();
            assert!(room.has_character(DURAND));
        }
    }

    #[test]
    fn suspect_eventually_moves() {
        let mut world = montfleur_world();
        let durand = world.character_id(DURAND).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut moved = false;
        for _ in 0..32 {
            if !advance(&mut world, &mut rng).unwrap().is_empty() {
                moved = true;
                break;
            }
        }
        assert!(moved);
        let room = world.character(durand).unwrap().current_room;
        assert_ne!(world.room_name(room), DURAND_HOUSE);
    }

    #[test]
    fn character_moves_at_most_once_per_tick() {
        // A corridor where every room leads east: a character re-visited
        // later in the iteration would move twice.
        let mut world = World::new();
        let ids: Vec<RoomId> = (0..4)
            .map(|i| world.add_room(Room::new(format!("R{i}"), "r.")).unwrap())
            .collect();
        for pair in ids.windows(2) {
            world.connect(pair[0], Direction::East, pair[1]).unwrap();
        }
        let walker = world
            .add_character(Character::new("Walker", "w", ids[0], vec![]).mobile())
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let before = world.character(walker).unwrap().current_room;
            let moves = advance(&mut world, &mut rng).unwrap();
            assert!(moves.len() <= 1);
            let after = world.character(walker).unwrap().current_room;
            assert!(after.0 <= before.0 + 1);
        }
    }

    #[test]
    fn empty_allow_list_intersection_stays() {
        let mut world = World::new();
        let a = world.add_room(Room::new("A", "a.")).unwrap();
        let b = world.add_room(Room::new("B", "b.")).unwrap();
        world.connect(a, Direction::North, b).unwrap();
        world
            .add_character(
                Character::new("Stuck", "s", a, vec![])
                    .mobile()
                    .with_allowed_rooms(vec![a]),
            )
            .unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert!(advance(&mut world, &mut rng).unwrap().is_empty());
        }
    }

    fn station_movement(world: &World) -> Movement {
        let npc = world.character_id(DURAND).unwrap();
        Movement {
            npc,
            name: DURAND.to_string(),
            from: world.require_room(montfleur::CAFE).unwrap(),
            to: world.require_room(POLICE_STATION).unwrap(),
        }
    }

    #[test]
    fn station_visit_leaves_clue() {
        let mut world = montfleur_world();
        let mut inv = Investigation::new();
        let movement = station_movement(&world);
        let clues =
            record_clues(&mut world, &mut inv, &GameConfig::default(), &[movement]).unwrap();

        assert_eq!(clues.len(), 1);
        assert!(clues[0].contains("malgré l'interdiction"));
        assert_eq!(inv.suspicions.get(DURAND), Some(&1));
        let station = world.require_room(POLICE_STATION).unwrap();
        let clue = &world.room(station).unwrap().inventory[STATION_CLUE];
        assert!(clue.is_weightless());
    }

    #[test]
    fn law_flag_changes_wording_only() {
        let mut world = montfleur_world();
        let mut inv = Investigation::new();
        let movement = station_movement(&world);
        let config = GameConfig::default().with_law_allowing_suspect(true);
        let clues = record_clues(&mut world, &mut inv, &config, &[movement]).unwrap();

        assert_eq!(clues[0], "Durand vu au Commissariat, il a discuté de l'enquête.");
        assert_eq!(inv.suspicions.get(DURAND), Some(&1));
    }

    #[test]
    fn stray_room_leaves_clue() {
        let mut world = montfleur_world();
        let mut inv = Investigation::new();
        let npc = world.character_id(DURAND).unwrap();
        let movement = Movement {
            npc,
            name: DURAND.to_string(),
            from: world.require_room(montfleur::STREET).unwrap(),
            to: world.require_room(montfleur::LENOIR_HOUSE).unwrap(),
        };
        record_clues(&mut world, &mut inv, &GameConfig::default(), &[movement]).unwrap();

        let house = world.require_room(montfleur::LENOIR_HOUSE).unwrap();
        assert!(world.room(house).unwrap().inventory.contains_key(STRAY_CLUE));
        assert_eq!(inv.clues.len(), 1);
    }

    #[test]
    fn allowed_room_leaves_nothing() {
        let mut world = montfleur_world();
        let mut inv = Investigation::new();
        let npc = world.character_id(DURAND).unwrap();
        let movement = Movement {
            npc,
            name: DURAND.to_string(),
            from: world.require_room(DURAND_HOUSE).unwrap(),
            to: world.require_room(montfleur::STREET).unwrap(),
        };
        let clues =
            record_clues(&mut world, &mut inv, &GameConfig::default(), &[movement]).unwrap();
        assert!(clues.is_empty());
        assert!(inv.suspicions.is_empty());
    }
}
