use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::info;
use mf_engine::{Game, GameConfig};

/// Play one session on stdin/stdout.
pub fn run(mut config: GameConfig, name: Option<String>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    let name = match name {
        Some(name) => Some(name),
        None => {
            print!("Entrez votre nom: ");
            io::stdout().flush().map_err(|e| e.to_string())?;
            reader.read_line(&mut line).map_err(|e| e.to_string())?;
            Some(line.trim().to_string()).filter(|n| !n.is_empty())
        }
    };
    if let Some(name) = name {
        config = config.with_player_name(name);
    }

    let mut game = Game::new(config).map_err(|e| format!("failed to start game: {e}"))?;
    println!("\n{}\n", game.welcome());

    while !game.is_finished() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        let input = match reader.read_line(&mut line) {
            Ok(0) => "quit", // EOF
            Ok(_) => line.trim(),
            Err(e) => return Err(e.to_string()),
        };

        let turn = game.process(input);
        match turn.response {
            Ok(text) => {
                if !text.is_empty() {
                    println!("\n{text}\n");
                }
            }
            Err(e) => println!("\n{}\n", e.to_string().yellow()),
        }
        for event in &turn.events {
            println!("{event}\n");
        }
    }

    if let Some(outcome) = game.outcome() {
        info!(
            "session ended: {outcome} after {} moves",
            game.investigation().displacement_count
        );
    }
    Ok(())
}
