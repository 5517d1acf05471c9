//! Tests for move application and result detection.

use strictly_grid::{
    CellState, GameEngine, GameObserver, GameResult, GameSnapshot, GridError, Line, Player,
    Position,
};

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> GameResult {
    let mut result = engine.result();
    for &mv in moves {
        result = engine.apply_move(mv.into()).expect("Valid move");
    }
    result
}

#[test]
fn test_new_engine_state() {
    let engine = GameEngine::new(3).unwrap();
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.last_move(), None);
    assert_eq!(engine.result(), GameResult::InProgress);
    assert_eq!(engine.board().empty_positions().len(), 9);
    assert!(!engine.is_over());
}

#[test]
fn test_invalid_size() {
    assert!(matches!(GameEngine::new(0), Err(GridError::InvalidSize(0))));
}

#[test]
fn test_turn_alternates() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.apply_move(Position::new(0, 0)).unwrap();
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.last_move(), Some(Position::new(0, 0)));
    engine.apply_move(Position::new(1, 0)).unwrap();
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.board().get(Position::new(0, 0)), Ok(CellState::X));
    assert_eq!(engine.board().get(Position::new(1, 0)), Ok(CellState::O));
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.apply_move(Position::new(1, 1)).unwrap();
    let board_before = engine.board().clone();

    let err = engine.apply_move(Position::new(1, 1)).unwrap_err();

    assert_eq!(err, GridError::CellOccupied(Position::new(1, 1)));
    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.result(), GameResult::InProgress);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_out_of_bounds_move_rejected() {
    let mut engine = GameEngine::new(3).unwrap();
    let err = engine.apply_move(Position::new(0, 3)).unwrap_err();
    assert!(matches!(err, GridError::OutOfBounds { size: 3, .. }));
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.last_move(), None);
}

#[test]
fn test_row_win() {
    let mut engine = GameEngine::new(4).unwrap();
    // X fills row 2; O plays in row 0.
    let result = play(
        &mut engine,
        &[(2, 0), (0, 0), (2, 1), (0, 1), (2, 2), (0, 2), (2, 3)],
    );
    assert_eq!(result, GameResult::XWins);
    assert_eq!(engine.winning_line(), Some(Line::Row(2)));
    assert_eq!(engine.winner(), Some(Player::X));
    // Turn does not advance past the winning move.
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_column_win_for_o() {
    let mut engine = GameEngine::new(3).unwrap();
    let result = play(&mut engine, &[(0, 0), (0, 2), (1, 1), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(result, GameResult::OWins);
    assert_eq!(engine.winning_line(), Some(Line::Column(2)));
}

#[test]
fn test_main_diagonal_win() {
    let mut engine = GameEngine::new(3).unwrap();
    let result = play(&mut engine, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(result, GameResult::XWins);
    assert_eq!(engine.winning_line(), Some(Line::MainDiagonal));
}

#[test]
fn test_anti_diagonal_win() {
    let mut engine = GameEngine::new(3).unwrap();
    // O takes (0,2), (1,1), then a non-anti-diagonal cell before completing.
    let result = play(&mut engine, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 1)]);
    assert_eq!(result, GameResult::InProgress);
    let result = play(&mut engine, &[(0, 1), (2, 0)]);
    assert_eq!(result, GameResult::OWins);
    assert_eq!(engine.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_draw_then_game_over() {
    let mut engine = GameEngine::new(3).unwrap();
    // x o x / x o o / o x x
    let result = play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(result, GameResult::Draw);
    assert!(engine.board().is_full());
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.winning_line(), None);

    for pos in engine.board().positions().collect::<Vec<_>>() {
        assert_eq!(
            engine.apply_move(pos),
            Err(GridError::GameOver(GameResult::Draw))
        );
    }
}

#[test]
fn test_move_after_win_rejected() {
    let mut engine = GameEngine::new(3).unwrap();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let board_before = engine.board().clone();

    let err = engine.apply_move(Position::new(2, 2)).unwrap_err();

    assert_eq!(err, GridError::GameOver(GameResult::XWins));
    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.result(), GameResult::XWins);
    assert_eq!(engine.history().len(), 5);
}

#[test]
fn test_single_cell_board_first_move_wins() {
    let mut engine = GameEngine::new(1).unwrap();
    assert_eq!(engine.apply_move(Position::new(0, 0)), Ok(GameResult::XWins));
    assert!(engine.is_over());
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let mut engine = GameEngine::new(3).unwrap();
    // X's ninth move fills the board and completes row 2.
    let result = play(
        &mut engine,
        &[(0, 0), (0, 1), (2, 0), (0, 2), (1, 1), (1, 0), (2, 1), (1, 2), (2, 2)],
    );
    assert_eq!(result, GameResult::XWins);
    assert!(engine.board().is_full());
}

#[test]
fn test_snapshot_reflects_state() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.apply_move(Position::new(2, 1)).unwrap();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.moves_played(), 1);
    assert_eq!(snapshot.last_move(), Some(Position::new(2, 1)));
    assert_eq!(snapshot.last_mover(), Some(Player::X));
    assert_eq!(snapshot.current_player(), Player::O);
    assert_eq!(snapshot.board(), engine.board());

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_snapshot_with_truncated_board_is_rejected() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.apply_move(Position::new(1, 1)).unwrap();
    let mut value = serde_json::to_value(engine.snapshot()).unwrap();

    value["board"]["cells"] = serde_json::json!([]);
    assert!(serde_json::from_value::<GameSnapshot>(value.clone()).is_err());

    value["board"]["size"] = serde_json::json!(0);
    assert!(serde_json::from_value::<GameSnapshot>(value).is_err());
}

#[test]
fn test_oversized_engine_is_rejected() {
    let size = 1usize << (usize::BITS / 2);
    assert!(matches!(GameEngine::new(size), Err(GridError::InvalidSize(s)) if s == size));
}

#[derive(Default)]
struct Counter {
    starts: usize,
    updates: usize,
    ends: usize,
}

impl GameObserver for Counter {
    fn on_start(&mut self, _snapshot: &GameSnapshot) {
        self.starts += 1;
    }

    fn on_update(&mut self, _snapshot: &GameSnapshot) {
        self.updates += 1;
    }

    fn on_end(&mut self, _snapshot: &GameSnapshot) {
        self.ends += 1;
    }
}

#[test]
fn test_observer_fan_out() {
    let mut observers = vec![Counter::default(), Counter::default()];
    let engine = GameEngine::new(2).unwrap();
    let snapshot = engine.snapshot();
    observers.on_start(&snapshot);
    observers.on_update(&snapshot);
    observers.on_update(&snapshot);
    observers.on_end(&snapshot);
    for counter in &observers {
        assert_eq!((counter.starts, counter.updates, counter.ends), (1, 2, 1));
    }
}
