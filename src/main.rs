use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use naval_salvo::{
    init_logging, load_board, ConsoleReporter, Game, GameSummary, LogReporter, MovementKind,
    RecordingReporter, ReportEvent, Reporter, SessionConfig, TargetingKind, DEFAULT_BOARD_FILE,
    DEFAULT_LAUNCHERS,
};
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Output {
    /// Turn-by-turn text on stdout.
    Text,
    /// A single JSON document with the summary and every report event.
    Json,
    /// Reports go to the log only.
    Quiet,
}

#[derive(Parser)]
#[command(author, version, about = "Ships against missile launchers, turn by turn", long_about = None)]
struct Cli {
    /// Board file: one ship per line, `health damage...`.
    #[arg(long, default_value = DEFAULT_BOARD_FILE)]
    board: PathBuf,
    #[arg(long, default_value_t = DEFAULT_LAUNCHERS)]
    launchers: usize,
    #[arg(long, value_enum, default_value_t = MovementKind::Naive)]
    movement: MovementKind,
    #[arg(long, value_enum, default_value_t = TargetingKind::Naive)]
    targeting: TargetingKind,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

fn play<R: Reporter>(cli: &Cli, seed: u64, reporter: R) -> anyhow::Result<(GameSummary, R)> {
    let board = load_board(&cli.board)
        .with_context(|| format!("loading board {}", cli.board.display()))?;
    let config = SessionConfig::new(cli.launchers)?;
    let mut game = Game::new(
        board,
        config,
        cli.movement.build(),
        cli.targeting.build(seed),
        reporter,
    )?;
    let summary = game.run().context("simulation aborted")?;
    Ok((summary, game.into_reporter()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    log::debug!("using seed {}", seed);

    match cli.output {
        Output::Text => {
            play(&cli, seed, ConsoleReporter::stdout())?;
        }
        Output::Quiet => {
            play(&cli, seed, LogReporter)?;
        }
        Output::Json => {
            let (summary, recorder) = play(&cli, seed, RecordingReporter::new())?;
            let events: Vec<ReportEvent> = recorder.into_events();
            let doc = json!({
                "turns": summary.turns,
                "score": summary.score,
                "launchers": cli.launchers,
                "movement": format!("{:?}", cli.movement).to_lowercase(),
                "targeting": format!("{:?}", cli.targeting).to_lowercase(),
                "seed": seed,
                "events": events,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}
