use std::{fs, path::PathBuf};

use naval_salvo::{level_from, load_board, LoadError};

fn temp_board(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("naval_salvo_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_board_from_file() {
    let path = temp_board("ok", "60 10 20 30 10\n40 5 5 15\n");
    let board = load_board(&path).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board.ship(1).unwrap().track(), &[5, 5, 15]);
    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_board_reports_parse_errors() {
    let path = temp_board("bad", "60 10\nsix 1\n");
    assert_eq!(
        load_board(&path).unwrap_err(),
        LoadError::InvalidNumber {
            line: 2,
            token: "six".to_string()
        }
    );
    fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_board("/definitely/not/here/tablero").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_bundled_board_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tablero");
    let board = load_board(path).unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board.alive_count(), 3);
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(Some("debug")), log::LevelFilter::Debug);
    assert_eq!(level_from(Some("nonsense")), log::LevelFilter::Info);
    assert_eq!(level_from(None), log::LevelFilter::Info);
}
