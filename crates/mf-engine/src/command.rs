//! Command table and tokenizer.

use crate::actions;
use crate::error::{ActionError, ActionResult};
use crate::game::Game;

/// Signature shared by every action handler.
///
/// Handlers receive the full token list, command word included, and validate
/// its length themselves.
pub type Action = fn(&mut Game, &[&str]) -> ActionResult<String>;

/// A registered command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// The word typed to invoke the command.
    pub word: &'static str,
    /// Usage and description shown by `help`.
    pub help: &'static str,
    /// Number of tokens expected after the command word. For `talk` and
    /// `accuse` the name may span several tokens, so this is a minimum.
    /// `use` counts the `on` keyword: `use <objet1> on <objet2>` is 3.
    pub params: usize,
    /// The handler.
    pub action: Action,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("word", &self.word)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.word, self.help)
    }
}

/// Commands in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: Vec<CommandSpec>,
}

impl CommandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, replacing any previous one with the same word.
    pub fn register(&mut self, spec: CommandSpec) {
        if let Some(existing) = self.commands.iter_mut().find(|c| c.word == spec.word) {
            *existing = spec;
        } else {
            self.commands.push(spec);
        }
    }

    /// Look up a command by its exact word.
    pub fn get(&self, word: &str) -> Option<CommandSpec> {
        self.commands.iter().find(|c| c.word == word).copied()
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The full Montfleur command set.
    pub fn standard() -> Self {
        let mut table = Self::new();
        let specs: [(&'static str, &'static str, usize, Action); 15] = [
            ("help", " : afficher cette aide", 0, actions::info::help),
            ("quit", " : quitter le jeu", 0, actions::info::quit),
            (
                "go",
                " <direction> : se déplacer dans une direction (N, E, S, O, U, D)",
                1,
                actions::movement::go,
            ),
            ("back", " : revenir à la pièce précédente", 0, actions::movement::back),
            (
                "history",
                " : afficher l'historique des pièces visitées",
                0,
                actions::movement::history,
            ),
            ("look", " : observer l'environnement", 0, actions::items::look),
            ("take", " <objet> : prendre un objet", 1, actions::items::take),
            ("drop", " <objet> : déposer un objet", 1, actions::items::drop),
            ("check", " : vérifier l'inventaire", 0, actions::items::check),
            ("talk", " <nom> : parler à un personnage", 1, actions::characters::talk),
            (
                "examine",
                " <objet> : examiner un objet de l'inventaire",
                1,
                actions::items::examine,
            ),
            (
                "use",
                " <objet1> on <objet2> : utiliser un objet sur un autre",
                3,
                actions::items::use_item,
            ),
            (
                "analyze",
                " <objet> : faire analyser un objet au labo du commissariat",
                1,
                actions::case::analyze,
            ),
            (
                "accuse",
                " <nom> : accuser un suspect au commissariat",
                1,
                actions::case::accuse,
            ),
            (
                "quests",
                " : afficher les quêtes et le temps restant",
                0,
                actions::info::quests,
            ),
        ];
        for (word, help, params, action) in specs {
            table.register(CommandSpec {
                word,
                help,
                params,
                action,
            });
        }
        table
    }
}

/// Split a line into whitespace-separated tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Check that `words` holds the command word plus exactly `params` tokens.
pub(crate) fn expect_params(words: &[&str], params: usize) -> ActionResult<()> {
    if words.len() == params + 1 {
        return Ok(());
    }
    Err(arity_error(words, params))
}

/// Check that `words` holds the command word plus a (possibly multi-word)
/// name, and return the name joined by single spaces.
pub(crate) fn expect_name(words: &[&str]) -> ActionResult<String> {
    if words.len() < 2 {
        return Err(arity_error(words, 1));
    }
    Ok(words[1..].join(" "))
}

fn arity_error(words: &[&str], params: usize) -> ActionError {
    let command = words.first().copied().unwrap_or_default().to_string();
    if params == 0 {
        ActionError::NoParameter { command }
    } else {
        ActionError::OneParameter { command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  go   N "), vec!["go", "N"]);
        assert_eq!(tokenize("talk Médecin\tlégiste"), vec!["talk", "Médecin", "légiste"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn standard_table_order() {
        let table = CommandTable::standard();
        let words: Vec<_> = table.iter().map(|c| c.word).collect();
        assert_eq!(
            words,
            vec![
                "help", "quit", "go", "back", "history", "look", "take", "drop", "check", "talk",
                "examine", "use", "analyze", "accuse", "quests",
            ]
        );
    }

    #[test]
    fn lookup_is_exact() {
        let table = CommandTable::standard();
        assert_eq!(table.get("go").map(|c| c.params), Some(1));
        assert_eq!(table.get("use").map(|c| c.params), Some(3));
        assert!(table.get("GO").is_none());
        assert!(table.get("dance").is_none());
    }

    #[test]
    fn register_replaces_same_word() {
        let mut table = CommandTable::standard();
        let before = table.len();
        let mut spec = table.get("look").unwrap();
        spec.help = " : regarder";
        table.register(spec);
        assert_eq!(table.len(), before);
        assert_eq!(table.get("look").unwrap().to_string(), "look : regarder");
    }

    #[test]
    fn arity_checks() {
        assert!(expect_params(&["look"], 0).is_ok());
        assert!(matches!(
            expect_params(&["look", "x"], 0),
            Err(ActionError::NoParameter { command }) if command == "look"
        ));
        assert!(matches!(
            expect_params(&["take"], 1),
            Err(ActionError::OneParameter { command }) if command == "take"
        ));
        assert!(expect_params(&["take", "a", "b"], 1).is_err());
    }

    #[test]
    fn names_join_remaining_words() {
        assert_eq!(
            expect_name(&["talk", "Médecin", "légiste"]).unwrap(),
            "Médecin légiste"
        );
        assert!(matches!(
            expect_name(&["accuse"]),
            Err(ActionError::OneParameter { .. })
        ));
    }
}
