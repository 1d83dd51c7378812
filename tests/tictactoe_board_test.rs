//! Tests for the board and the player-free state machine.

use strum::IntoEnumIterator;
use tictactoe_engine::{Board, Cell, GameState, GameStatus, LINES, Mark, MoveError, check_winner};

#[test]
fn test_available_moves_ascending() {
    let mut board = Board::new();
    board.apply_move(7, Mark::X);
    board.apply_move(2, Mark::O);
    assert_eq!(board.available_moves(), vec![0, 1, 3, 4, 5, 6, 8]);
    assert_eq!(board.num_empty_squares(), 7);
}

#[test]
fn test_full_board_has_no_moves() {
    let state = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("Valid replay");
    assert!(state.board().is_full());
    assert!(!state.board().has_empty_squares());
    assert!(state.board().available_moves().is_empty());
}

#[test]
fn test_occupied_cell_left_untouched() {
    let mut board = Board::new();
    for index in [0, 1, 2] {
        board.apply_move(index, Mark::X);
    }
    assert_eq!(board.winner(), Some(Mark::X));

    let before = board.clone();
    assert!(!board.apply_move(1, Mark::O));
    assert_eq!(board, before);
    assert_eq!(board.get(1), Some(Cell::Marked(Mark::X)));
}

#[test]
fn test_each_line_wins_only_on_completion() {
    for mark in Mark::iter() {
        for line in LINES {
            let mut board = Board::new();
            board.apply_move(line[0], mark);
            board.apply_move(line[1], mark);
            assert_eq!(board.winner(), None, "line {:?} won early", line);
            board.apply_move(line[2], mark);
            assert_eq!(board.winner(), Some(mark), "line {:?} not detected", line);
            assert!(board.check_win(line[2], mark));
        }
    }
}

#[test]
fn test_check_win_matches_full_scan() {
    let state = GameState::replay(&[4, 0, 2, 8, 6]).expect("Valid replay");
    let board = state.board();
    assert_eq!(check_winner(board), Some(Mark::X));
    assert!(board.check_win(6, Mark::X));
    assert!(board.check_win(4, Mark::X));
    assert!(!board.check_win(8, Mark::O));
}

#[test]
fn test_rejected_move_then_diagonal_win() {
    let mut state = GameState::new();
    for index in [4, 0, 2, 8] {
        assert_eq!(state.submit(index), Ok(GameStatus::InProgress));
    }
    assert_eq!(state.submit(0), Err(MoveError::Occupied(0)));
    assert_eq!(state.active(), Mark::X);
    assert_eq!(state.submit(6), Ok(GameStatus::Won(Mark::X)));
}

#[test]
fn test_rejected_move_scenario_as_listed() {
    let mut state = GameState::new();
    for index in [4, 0, 8, 2] {
        state.submit(index).expect("Legal move");
    }
    assert_eq!(state.submit(0), Err(MoveError::Occupied(0)));
    assert_eq!(state.history().len(), 4);
    // O holds 2, so 6 does not complete the 2-4-6 diagonal.
    assert_eq!(state.submit(6), Ok(GameStatus::InProgress));
    assert_eq!(state.active(), Mark::O);
}

#[test]
fn test_draw_detection() {
    let state = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("Valid replay");
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.board().winner(), None);
    assert_eq!(check_winner(state.board()), None);
}

#[test]
fn test_row_major_fill_is_won_before_full() {
    let state = GameState::replay(&[0, 1, 2, 3, 4, 5, 6]).expect("Valid replay");
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    assert_eq!(
        GameState::replay(&[0, 1, 2, 3, 4, 5, 6, 7, 8]),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_move_error_messages() {
    assert_eq!(MoveError::Occupied(3).to_string(), "Square 3 is already occupied");
    assert_eq!(
        MoveError::OutOfRange(11).to_string(),
        "Square 11 is off the board (must be 0-8)"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
}
