//! Tests for playing configured games over an injected console.

use std::io::Cursor;
use tictactoe_engine::{GameConfig, GameOutcome, Mark, PlayError, PlayerKind, play_console};

fn config(x: PlayerKind, o: PlayerKind, seed: Option<u64>, quiet: bool) -> GameConfig {
    GameConfig::default().with_overrides(Some(x), Some(o), seed, quiet)
}

#[test]
fn test_human_against_human_from_one_input() {
    let config = config(PlayerKind::Human, PlayerKind::Human, None, false);
    let mut screen = Vec::new();

    let outcome = play_console(&config, Cursor::new("0\n3\n1\n4\n2\n"), &mut screen).unwrap();
    assert_eq!(outcome, GameOutcome::Win(Mark::X));

    let screen = String::from_utf8(screen).unwrap();
    assert!(screen.starts_with(" | 0 | 1 | 2 | \n"));
    assert_eq!(screen.matches("X's turn").count(), 3);
    assert_eq!(screen.matches("O's turn").count(), 2);
    assert!(screen.contains("O makes a move to square 4\n"));
    assert!(screen.ends_with(" X | X | X | \n O | O |   | \n   |   |   | \n\nX wins!\n"));
}

#[test]
fn test_humans_share_retries_on_one_input() {
    let config = config(PlayerKind::Human, PlayerKind::Human, None, false);
    let mut screen = Vec::new();

    let input = "4\n4\n0\n2\nhello\n8\n6\n";
    let outcome = play_console(&config, Cursor::new(input), &mut screen).unwrap();
    assert_eq!(outcome, GameOutcome::Win(Mark::X));

    let screen = String::from_utf8(screen).unwrap();
    assert!(screen.contains("Square 4 is already occupied"));
    assert!(screen.contains("'hello' is not a square number"));
    assert!(screen.contains("X makes a move to square 6\n"));
}

#[test]
fn test_closed_input_aborts_the_game() {
    let config = config(PlayerKind::Human, PlayerKind::Human, None, false);
    let mut screen = Vec::new();

    let result = play_console(&config, Cursor::new("0\n3\n"), &mut screen);
    assert!(matches!(result, Err(PlayError::Aborted(_))));

    let screen = String::from_utf8(screen).unwrap();
    assert!(screen.ends_with("Game aborted: X stopped playing (Input closed)\n"));
}

#[test]
fn test_quiet_random_game_prints_only_the_result() {
    let config = config(PlayerKind::Random, PlayerKind::Random, Some(21), true);
    let mut screen = Vec::new();

    let outcome = play_console(&config, std::io::empty(), &mut screen).unwrap();
    assert_eq!(String::from_utf8(screen).unwrap(), format!("{}\n", outcome));
}

#[test]
fn test_human_against_configured_random() {
    let config = config(PlayerKind::Human, PlayerKind::Random, Some(3), false);
    let mut screen = Vec::new();

    // Enough distinct squares that X always has one left to play.
    let input = (0..9).map(|square| format!("{}\n", square)).collect::<String>().repeat(5);
    let outcome = play_console(&config, Cursor::new(input), &mut screen).unwrap();

    let screen = String::from_utf8(screen).unwrap();
    assert!(screen.contains("X's turn"));
    assert!(!screen.contains("O's turn"));
    assert!(screen.ends_with(&format!("{}\n", outcome)));
}
