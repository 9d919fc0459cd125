//! The game controller.

use log::{debug, info, warn};
use mf_core::montfleur::{self, CRIME_SCENE_ROOMS};
use mf_core::{Player, Room, World};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::command::CommandTable;
use crate::config::GameConfig;
use crate::error::{ActionError, ActionResult, EngineResult};
use crate::npc;
use crate::outcome::{self, Outcome};
use crate::quest::{Objective, QuestId, QuestManager};
use crate::state::Investigation;

/// What happened during one processed line of input.
#[derive(Debug)]
pub struct Turn {
    /// The handler's narrative text, or the reason it refused.
    pub response: ActionResult<String>,
    /// Quest notices, character movements and endings, in display order.
    pub events: Vec<String>,
    /// Set when this turn ended the game.
    pub outcome: Option<Outcome>,
}

impl Turn {
    fn quiet(response: ActionResult<String>) -> Self {
        Self {
            response,
            events: Vec::new(),
            outcome: None,
        }
    }
}

/// A running investigation.
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) world: World,
    pub(crate) player: Player,
    pub(crate) quests: QuestManager,
    pub(crate) investigation: Investigation,
    pub(crate) commands: CommandTable,
    pub(crate) rng: StdRng,
    pub(crate) outcome: Option<Outcome>,
}

impl Game {
    /// Start a new game in Montfleur.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        let scenario = montfleur::scenario()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            "new game for {} (seed: {:?}, suspect allowed at station: {})",
            config.player_name, config.seed, config.law_allows_suspect_at_station
        );
        Ok(Self {
            player: Player::new(config.player_name.clone(), scenario.start),
            world: scenario.world,
            quests: QuestManager::montfleur(),
            investigation: Investigation::new(),
            commands: CommandTable::standard(),
            rng,
            outcome: None,
            config,
        })
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The quest log.
    pub fn quests(&self) -> &QuestManager {
        &self.quests
    }

    /// Progress of the investigation.
    pub fn investigation(&self) -> &Investigation {
        &self.investigation
    }

    /// The registered commands.
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Whether the game is over.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> ActionResult<&Room> {
        Ok(self.world.room(self.player.current_room)?)
    }

    /// Name of the room the player stands in.
    pub fn current_room_name(&self) -> &str {
        self.world.room_name(self.player.current_room)
    }

    /// The introduction shown before the first prompt.
    pub fn welcome(&self) -> String {
        let room = self
            .current_room()
            .map(Room::long_description)
            .unwrap_or_default();
        format!(
            "Bienvenue {} dans Crime à Montfleur !\n\
             Entrez 'help' si vous avez besoin d'aide.\n\n\
             Une nuit sombre vient de tomber sur Montfleur...\n\
             Un crime mystérieux a été commis dans une maison de la rue principale.\n\
             Les voisins murmurent, les témoins hésitent, et les preuves semblent se cacher dans chaque recoin.\n\
             Votre mission : explorer les lieux, interroger les habitants, et découvrir la vérité.\n\n\
             {room}",
            self.player.name
        )
    }

    /// Process one line of input.
    ///
    /// Blank lines and unknown words leave the world untouched. Any
    /// recognized command, successful or not, gives the characters a chance
    /// to move and re-evaluates the ending.
    pub fn process(&mut self, input: &str) -> Turn {
        if self.is_finished() {
            return Turn::quiet(Ok(String::new()));
        }
        let words = crate::command::tokenize(input);
        let Some(word) = words.first() else {
            return Turn::quiet(Ok(String::new()));
        };
        let Some(spec) = self.commands.get(word) else {
            return Turn::quiet(Err(ActionError::UnknownCommand((*word).to_string())));
        };

        let response = (spec.action)(self, &words);
        if let Err(err) = &response {
            debug!("'{}' refused: {err}", spec.word);
        }

        let mut events = self.quests.drain_notices();
        if !self.is_finished() {
            events.extend(self.tick());
        }

        if self.outcome.is_none() {
            if let Some(outcome) = outcome::evaluate(&self.investigation) {
                self.finish(outcome);
            }
        }
        events.extend(self.quests.drain_notices());

        let outcome = self.outcome.clone();
        if let Some(ending) = &outcome {
            if *ending != Outcome::Quit {
                events.push(outcome::ending_message(
                    ending,
                    &self.investigation,
                    &self.player.name,
                ));
            }
        }

        Turn {
            response,
            events,
            outcome,
        }
    }

    /// Move the characters and collect what the player gets told.
    fn tick(&mut self) -> Vec<String> {
        let movements = match npc::advance(&mut self.world, &mut self.rng) {
            Ok(movements) => movements,
            Err(err) => {
                warn!("character movement skipped: {err}");
                return Vec::new();
            }
        };
        let mut events: Vec<String> = movements.iter().map(|m| m.report(&self.world)).collect();
        if let Err(err) = npc::record_clues(
            &mut self.world,
            &mut self.investigation,
            &self.config,
            &movements,
        ) {
            warn!("clue bookkeeping skipped: {err}");
        }
        events.extend(self.quests.drain_notices());
        events
    }

    /// End the game. A win also closes the final quest.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            info!("game over: {outcome}");
            if outcome.is_win() {
                let player = &self.config.player_name;
                self.quests
                    .complete_objective(Objective::AccuseCulprit, player);
                self.quests.complete_quest(QuestId::Solve, player);
            }
            self.outcome = Some(outcome);
        }
    }

    /// Complete the crime scene quest once every room is visited and every
    /// item collected.
    pub(crate) fn check_crime_scene_quest(&mut self) {
        if self.investigation.crime_scene_searched() {
            self.quests
                .complete_quest(QuestId::CrimeScene, &self.config.player_name);
        }
    }

    /// Record a crime scene room as visited.
    pub(crate) fn note_crime_scene_visit(&mut self, room_name: &str) {
        if CRIME_SCENE_ROOMS.contains(&room_name) {
            self.investigation
                .visited_crime_scene
                .insert(room_name.to_string());
            self.check_crime_scene_quest();
        }
    }
}
