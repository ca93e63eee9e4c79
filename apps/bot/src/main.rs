use std::io::{self, BufRead, Write};
use std::sync::Arc;

use bot::config::GameConfig;
use bot::domain::request::{PlayerId, RawCommand};
use bot::services::orchestrator::GameOrchestrator;
use bot::store::memory::InMemoryStore;
use bot::store::oracle::WordListOracle;
use tracing::error;

mod telemetry;

#[tokio::main]
async fn main() -> io::Result<()> {
    telemetry::init_tracing();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    let calendar = config.calendar();

    let oracle = Arc::new(WordListOracle::demo());
    let store = Arc::new(InMemoryStore::new(oracle, calendar.clone()));
    let orchestrator = GameOrchestrator::new(store, calendar);

    let player = PlayerId::new(std::env::var("BOT_PLAYER").unwrap_or_else(|_| "player1".into()));
    let as_json = std::env::var("BOT_JSON").map(|v| v == "1").unwrap_or(false);

    println!("word guess bot. Type a word, optionally with --mode=competitive,");
    println!("--game-id=N or --date=YYYY-MM-DD. Empty line shows game status.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let raw = match parse_line(&player, &line) {
            Ok(raw) => raw,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match orchestrator.handle(raw).await {
            Ok(reply) if as_json => match serde_json::to_string(&reply) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("serialization error: {e}"),
            },
            Ok(reply) => println!("{}", reply.text),
            Err(e) => {
                error!(error = %e, "command failed");
                eprintln!("error: {e}");
            }
        }
    }

    Ok(())
}

fn parse_line(player: &PlayerId, line: &str) -> Result<RawCommand, String> {
    let mut word = None;
    let mut mode = None;
    let mut game_id = None;
    let mut date = None;

    for token in line.split_whitespace() {
        if let Some(value) = token.strip_prefix("--mode=") {
            mode = Some(value.to_string());
        } else if let Some(value) = token.strip_prefix("--game-id=") {
            game_id = Some(
                value
                    .parse::<i64>()
                    .map_err(|_| format!("--game-id expects a number, got \"{value}\""))?,
            );
        } else if let Some(value) = token.strip_prefix("--date=") {
            date = Some(value.to_string());
        } else if word.is_none() {
            word = Some(token.to_string());
        } else {
            return Err(format!("unexpected argument \"{token}\""));
        }
    }

    Ok(RawCommand {
        player_id: player.clone(),
        word,
        mode,
        game_id,
        date,
    })
}
