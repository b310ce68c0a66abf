use anyhow::Context;
use naval_salvo::{load_board, Game, MovementKind, NullReporter, SessionConfig, TargetingKind};
use serde_json::{json, Map, Value};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <board> <launchers>", args[0]);
        std::process::exit(1);
    }
    let board = load_board(&args[1]).with_context(|| format!("loading board {}", args[1]))?;
    let launchers: usize = args[2].parse().context("launchers must be a number")?;
    let config = SessionConfig::new(launchers)?;

    let mut results = Map::new();
    for kind in TargetingKind::ALL {
        let mut game = Game::new(
            board.clone(),
            config,
            MovementKind::Naive.build(),
            kind.build(0),
            NullReporter,
        )?;
        let summary = game.run()?;
        let name = format!("{:?}", kind).to_lowercase();
        results.insert(name, json!({"turns": summary.turns, "score": summary.score}));
    }

    println!("{}", serde_json::to_string(&Value::Object(results))?);
    Ok(())
}
