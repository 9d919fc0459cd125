//! Quests, objectives, and the quest log.
//!
//! Quests and objectives are identified by enums; the French titles and
//! objective texts are display strings only. Every objective belongs to
//! exactly one quest, so completing an objective never needs a name search.

use std::fmt;

use log::debug;
use mf_core::montfleur;

/// Identifier of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestId {
    /// Search the crime house, its attic, cellar and garden.
    CrimeScene,
    /// Hear the coroner's report.
    Morgue,
    /// Question the witness.
    Lenoir,
    /// Question the suspect.
    Durand,
    /// Have the crime scene evidence analyzed.
    Laboratory,
    /// Have the letter analyzed.
    LetterAnalysis,
    /// Accuse the culprit.
    Solve,
    /// Open the chest.
    Chest,
    /// Read the letter.
    Letter,
}

/// Identifier of an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Enter the attic.
    VisitAttic,
    /// Enter the cellar.
    VisitCellar,
    /// Enter the garden.
    VisitGarden,
    /// Come back into the crime house.
    VisitCrimeHouse,
    /// Pick up the four crime scene items.
    CollectEvidence,
    /// Enter the morgue.
    VisitMorgue,
    /// Talk to the coroner.
    TalkToCoroner,
    /// Talk to Madame Lenoir.
    TalkToLenoir,
    /// Find the letter in Madame Lenoir's house.
    SearchLenoirHouse,
    /// Find Durand.
    FindDurand,
    /// Talk to Durand.
    QuestionDurand,
    /// Find the key in Durand's house.
    SearchDurandHouse,
    /// Enter the laboratory.
    VisitLab,
    /// Talk to the chemist.
    TalkToChemist,
    /// Have the crime scene items analyzed.
    AnalyzeCrimeSceneItems,
    /// Pick up the letter for analysis.
    RetrieveLetter,
    /// Have the letter analyzed.
    AnalyzeLetter,
    /// Accuse the culprit at the police station.
    AccuseCulprit,
    /// Pick up the key.
    FindKey,
    /// Pick up the chest.
    RetrieveChest,
    /// Use the key on the chest.
    OpenChest,
    /// Pick up the letter.
    FindLetter,
    /// Examine the letter.
    ReadLetter,
}

impl Objective {
    /// Display text.
    pub fn text(&self) -> &'static str {
        match self {
            Self::VisitAttic => "Visiter le Grenier",
            Self::VisitCellar => "Visiter la Cave",
            Self::VisitGarden => "Visiter le Jardin",
            Self::VisitCrimeHouse => "Revenir dans la Maison du crime",
            Self::CollectEvidence => "Récupérer les indices de la scène",
            Self::VisitMorgue => "Visiter Morgue",
            Self::TalkToCoroner => "Parler au Médecin légiste",
            Self::TalkToLenoir => "Parler à Mme Lenoir",
            Self::SearchLenoirHouse => "Fouiller la maison de Mme Lenoir",
            Self::FindDurand => "Trouver Durand",
            Self::QuestionDurand => "L'interroger",
            Self::SearchDurandHouse => "Fouiller la maison de Durand",
            Self::VisitLab => "Visiter le Labo du commissariat",
            Self::TalkToChemist => "Parler au Chimiste",
            Self::AnalyzeCrimeSceneItems => "Analyser les objets de la scène du crime",
            Self::RetrieveLetter => "Récupérer la lettre",
            Self::AnalyzeLetter => "Analyser la lettre",
            Self::AccuseCulprit => "Accuser le coupable",
            Self::FindKey => "Trouver la clé",
            Self::RetrieveChest => "Récupérer le coffre",
            Self::OpenChest => "Ouvrir le coffre",
            Self::FindLetter => "Trouver la lettre",
            Self::ReadLetter => "Lire la lettre",
        }
    }

    /// The quest this objective belongs to.
    pub fn quest(&self) -> QuestId {
        match self {
            Self::VisitAttic
            | Self::VisitCellar
            | Self::VisitGarden
            | Self::VisitCrimeHouse
            | Self::CollectEvidence => QuestId::CrimeScene,
            Self::VisitMorgue | Self::TalkToCoroner => QuestId::Morgue,
            Self::TalkToLenoir | Self::SearchLenoirHouse => QuestId::Lenoir,
            Self::FindDurand | Self::QuestionDurand | Self::SearchDurandHouse => QuestId::Durand,
            Self::VisitLab | Self::TalkToChemist | Self::AnalyzeCrimeSceneItems => {
                QuestId::Laboratory
            }
            Self::RetrieveLetter | Self::AnalyzeLetter => QuestId::LetterAnalysis,
            Self::AccuseCulprit => QuestId::Solve,
            Self::FindKey | Self::RetrieveChest | Self::OpenChest => QuestId::Chest,
            Self::FindLetter | Self::ReadLetter => QuestId::Letter,
        }
    }

    /// The room whose entry fulfils this objective, if any.
    pub fn room(&self) -> Option<&'static str> {
        match self {
            Self::VisitAttic => Some(montfleur::ATTIC),
            Self::VisitCellar => Some(montfleur::CELLAR),
            Self::VisitGarden => Some(montfleur::GARDEN),
            Self::VisitCrimeHouse => Some(montfleur::CRIME_HOUSE),
            Self::VisitMorgue => Some(montfleur::MORGUE),
            Self::VisitLab => Some(montfleur::LAB),
            _ => None,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Whether a quest belongs to the main storyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestKind {
    /// Part of the main, chronological storyline.
    Main,
    /// A side quest that can be done in any order.
    Optional,
}

/// Progress of a quest as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    /// Neither activated nor completed.
    NotStarted,
    /// Activated, not yet completed.
    InProgress,
    /// Completed.
    Finished,
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "(Not started)"),
            Self::InProgress => write!(f, "(In progress)"),
            Self::Finished => write!(f, "(Finished)"),
        }
    }
}

/// A quest and its progress.
#[derive(Debug, Clone)]
pub struct Quest {
    /// Identifier.
    pub id: QuestId,
    /// Title.
    pub title: &'static str,
    /// Description.
    pub description: &'static str,
    /// Objectives with their completion flag, in display order.
    pub objectives: Vec<(Objective, bool)>,
    /// Reward text shown on completion.
    pub reward: &'static str,
    /// Main storyline or side quest.
    pub kind: QuestKind,
    /// Whether the quest has been started.
    pub is_active: bool,
    /// Whether the quest has been completed.
    pub is_completed: bool,
}

impl Quest {
    /// Create an inactive quest.
    pub fn new(
        id: QuestId,
        title: &'static str,
        description: &'static str,
        objectives: &[Objective],
        reward: &'static str,
        kind: QuestKind,
    ) -> Self {
        Self {
            id,
            title,
            description,
            objectives: objectives.iter().map(|o| (*o, false)).collect(),
            reward,
            kind,
            is_active: false,
            is_completed: false,
        }
    }

    /// Mark the quest as started.
    pub fn activate(&mut self) {
        if !self.is_completed {
            self.is_active = true;
        }
    }

    /// Mark the quest as completed.
    ///
    /// Returns the reward notice the first time, `None` afterwards.
    pub fn complete_quest(&mut self, player_name: &str) -> Option<String> {
        if self.is_completed {
            return None;
        }
        self.is_completed = true;
        self.is_active = false;
        for (_, done) in &mut self.objectives {
            *done = true;
        }
        Some(format!(
            "Quête terminée : {}\nBravo {player_name} ! Récompense : {}",
            self.title, self.reward
        ))
    }

    /// Whether an objective of this quest is done.
    pub fn is_done(&self, objective: Objective) -> bool {
        self.objectives
            .iter()
            .any(|(o, done)| *o == objective && *done)
    }

    /// Whether every objective is done.
    pub fn all_objectives_done(&self) -> bool {
        self.objectives.iter().all(|(_, done)| *done)
    }

    /// Current status.
    pub fn status(&self) -> QuestStatus {
        if self.is_completed {
            QuestStatus::Finished
        } else if self.is_active {
            QuestStatus::InProgress
        } else {
            QuestStatus::NotStarted
        }
    }
}

/// The quest log.
///
/// Completion notices are queued and collected by the controller with
/// [`QuestManager::drain_notices`] once per turn.
#[derive(Debug, Clone)]
pub struct QuestManager {
    quests: Vec<Quest>,
    notices: Vec<String>,
}

impl QuestManager {
    /// Create a quest log from a list of quests, kept in the given order.
    pub fn new(quests: Vec<Quest>) -> Self {
        Self {
            quests,
            notices: Vec::new(),
        }
    }

    /// The Montfleur quests.
    pub fn montfleur() -> Self {
        use Objective::*;
        Self::new(vec![
            Quest::new(
                QuestId::CrimeScene,
                "Explorer la scène du crime",
                "Fouillez la maison du crime, son grenier, sa cave et son jardin, et récupérez les indices.",
                &[VisitAttic, VisitCellar, VisitGarden, VisitCrimeHouse, CollectEvidence],
                "Les photos du grenier montrent Durand en mauvaise compagnie.",
                QuestKind::Main,
            ),
            Quest::new(
                QuestId::Morgue,
                "Consulter le Médecin légiste",
                "Rendez-vous à la morgue et écoutez le rapport du médecin légiste.",
                &[VisitMorgue, TalkToCoroner],
                "La victime connaissait son agresseur : aucune trace de défense.",
                QuestKind::Main,
            ),
            Quest::new(
                QuestId::Lenoir,
                "Interroger Mme Lenoir",
                "Madame Lenoir a peut-être vu quelque chose depuis sa fenêtre.",
                &[TalkToLenoir, SearchLenoirHouse],
                "Mme Lenoir a vu une silhouette sortir de chez Durand la nuit du crime.",
                QuestKind::Main,
            ),
            Quest::new(
                QuestId::Durand,
                "Interroger Durand",
                "Trouvez le voisin nerveux, interrogez-le et fouillez sa maison.",
                &[FindDurand, QuestionDurand, SearchDurandHouse],
                "Durand se contredit : il dit n'avoir rien vu mais connaît des détails du crime.",
                QuestKind::Main,
            ),
            Quest::new(
                QuestId::Laboratory,
                "Faire analyser les objets au Labo",
                "Apportez le couteau, l'arme, les photos et le coffre au labo du commissariat.",
                &[VisitLab, TalkToChemist, AnalyzeCrimeSceneItems],
                "Les empreintes relevées sur l'arme correspondent à celles de Durand.",
                QuestKind::Main,
            ),
            Quest::new(
                QuestId::LetterAnalysis,
                "Analyser les objets chez Lenoir",
                "La lettre trouvée chez Madame Lenoir doit passer au laboratoire.",
                &[RetrieveLetter, AnalyzeLetter],
                "L'écriture de la lettre est celle d'un proche de la victime qui accuse Durand.",
                QuestKind::Main,
            ),
            Quest::new(
                QuestId::Solve,
                "Résoudre l'énigme",
                "Rassemblez les preuves et accusez le coupable au commissariat.",
                &[AccuseCulprit],
                "Le coupable est derrière les barreaux. Montfleur peut dormir tranquille.",
                QuestKind::Main,
            ),
            Quest::new(
                QuestId::Chest,
                "Ouvrir le coffre",
                "Un coffre verrouillé dort dans la cave. Une clé suspecte traîne chez Durand.",
                &[FindKey, RetrieveChest, OpenChest],
                "Les documents du coffre prouvent que Durand avait un mobile.",
                QuestKind::Optional,
            ),
            Quest::new(
                QuestId::Letter,
                "Lire la lettre mystérieuse",
                "Une lettre mystérieuse attend chez Madame Lenoir.",
                &[FindLetter, ReadLetter],
                "La lettre désigne le coffre de Durand comme cachette.",
                QuestKind::Optional,
            ),
        ])
    }

    /// All quests in display order.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Main storyline quests in order.
    pub fn main_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.kind == QuestKind::Main)
    }

    /// Side quests in order.
    pub fn optional_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.kind == QuestKind::Optional)
    }

    /// Look up a quest.
    pub fn get_quest(&self, id: QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    fn get_quest_mut(&mut self, id: QuestId) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }

    /// Start a quest. Unknown or completed quests are left alone.
    pub fn activate_quest(&mut self, id: QuestId) {
        if let Some(quest) = self.get_quest_mut(id) {
            if !quest.is_active && !quest.is_completed {
                debug!("quest activated: {id:?}");
                quest.activate();
            }
        }
    }

    /// Complete a quest and queue its reward notice. Idempotent.
    pub fn complete_quest(&mut self, id: QuestId, player_name: &str) {
        let notice = self
            .get_quest_mut(id)
            .and_then(|q| q.complete_quest(player_name));
        if let Some(notice) = notice {
            debug!("quest completed: {id:?}");
            self.notices.push(notice);
        }
    }

    /// Mark an objective done and start its quest. Completes the quest once
    /// all of its objectives are done. Already-done objectives are ignored.
    pub fn complete_objective(&mut self, objective: Objective, player_name: &str) {
        let id = objective.quest();
        let Some(quest) = self.get_quest_mut(id) else {
            return;
        };
        if quest.is_completed {
            return;
        }
        let Some(entry) = quest.objectives.iter_mut().find(|(o, _)| *o == objective) else {
            return;
        };
        if entry.1 {
            return;
        }
        entry.1 = true;
        quest.activate();
        debug!("objective done: {objective:?}");

        if quest.all_objectives_done() {
            self.complete_quest(id, player_name);
        }
    }

    /// Fulfil every objective tied to entering `room_name`.
    pub fn check_room_objectives(&mut self, room_name: &str, player_name: &str) {
        let due: Vec<Objective> = self
            .quests
            .iter()
            .filter(|q| !q.is_completed)
            .flat_map(|q| q.objectives.iter())
            .filter(|(o, done)| !done && o.room() == Some(room_name))
            .map(|(o, _)| *o)
            .collect();
        for objective in due {
            self.complete_objective(objective, player_name);
        }
    }

    /// Take the queued completion notices.
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

impl Default for QuestManager {
    fn default() -> Self {
        Self::montfleur()
    }
}
