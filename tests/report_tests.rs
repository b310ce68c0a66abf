use naval_salvo::{
    Board, ConsoleReporter, Game, LogReporter, NaiveMovement, NaiveTargeting, ReportEvent,
    Reporter, SessionConfig, ShipState,
};

#[test]
fn test_console_output() {
    let mut game = Game::new(
        Board::parse("10 5 5\n0 3\n").unwrap(),
        SessionConfig::new(2).unwrap(),
        Box::new(NaiveMovement::new()),
        Box::new(NaiveTargeting::new()),
        ConsoleReporter::new(Vec::new()),
    )
    .unwrap();
    game.run().unwrap();
    let out = String::from_utf8(game.into_reporter().into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    let sep = "-".repeat(40);
    assert_eq!(
        lines,
        vec![
            "Game start!",
            "Turn: 0, accumulated points: 0. Ships afloat:",
            "Ship 0. Health: 10, position: 0, potential damage: 5",
            sep.as_str(),
            "Turn: 1, accumulated points: 0. Ships afloat:",
            "Ship 0. Health: 10, position: 1, potential damage: 5",
            sep.as_str(),
            "Missiles fired: Launcher 0 -> ship 0, Launcher 1 -> ship 0",
            sep.as_str(),
            "Game over! Turns played: 1. Accumulated points: 0",
        ]
    );
}

#[test]
fn test_log_reporter_accepts_all_hooks() {
    let mut reporter = LogReporter;
    let ships = [ShipState {
        id: 0,
        health: 3,
        position: 0,
        potential_damage: 1,
    }];
    reporter.on_turn_state(0, 0, &ships);
    reporter.on_volley(&[0, 0]);
    reporter.on_finished(4, 2);
}

#[test]
fn test_events_serialize_with_tag() {
    let event = ReportEvent::Volley {
        targets: vec![1, 1, 0],
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "volley");
    assert_eq!(value["targets"], serde_json::json!([1, 1, 0]));

    let event = ReportEvent::Finished { turn: 3, score: 5 };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value, serde_json::json!({"event": "finished", "turn": 3, "score": 5}));
}
