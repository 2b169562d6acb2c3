//! Tests for round results, scoring and game lifecycle.

use tictactoe_rounds::{
    GameEngine, GameStatus, MAX_ROUNDS, MoveOutcome, MoveRejection, PlayerId, RoundResult,
};

/// Player One takes the top row while Player Two plays the middle row.
const PLAYER_ONE_TOP_ROW: [(usize, usize); 5] = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];

/// Player Two takes the top row while Player One scatters.
const PLAYER_TWO_TOP_ROW: [(usize, usize); 6] = [(1, 0), (0, 0), (2, 2), (0, 1), (1, 2), (0, 2)];

/// Fills the board with no line: x o x / x o o / o x x.
const TIE_GAME: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> MoveOutcome {
    let mut last = None;
    for &(row, column) in moves {
        last = Some(engine.submit_move(row, column).expect("legal move"));
    }
    last.expect("at least one move")
}

#[test]
fn test_top_row_wins_round() {
    let mut engine = GameEngine::new();
    let outcome = play(&mut engine, &PLAYER_ONE_TOP_ROW[..4]);
    assert!(!outcome.round_ended());

    let outcome = engine.submit_move(0, 2).expect("legal move");
    assert!(outcome.round_ended());
    assert_eq!(outcome.round_winner(), Some(PlayerId::PlayerOne));
    assert_eq!(*outcome.round_result(), Some(RoundResult::Win(PlayerId::PlayerOne)));
    assert!(!outcome.game_ended());
    assert_eq!(engine.round_wins(PlayerId::PlayerOne), 1);
    assert_eq!(engine.round_wins(PlayerId::PlayerTwo), 0);
    assert_eq!(engine.status(), GameStatus::RoundOver(RoundResult::Win(PlayerId::PlayerOne)));
}

#[test]
fn test_second_player_win_credited_to_second_player() {
    let mut engine = GameEngine::new();
    let outcome = play(&mut engine, &PLAYER_TWO_TOP_ROW);
    assert_eq!(outcome.round_winner(), Some(PlayerId::PlayerTwo));
    assert_eq!(engine.round_wins(PlayerId::PlayerTwo), 1);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut engine = GameEngine::new();
    let outcome = play(&mut engine, &TIE_GAME);
    assert_eq!(*outcome.round_result(), Some(RoundResult::Tie));
    assert_eq!(outcome.round_winner(), None);
    assert_eq!(engine.round_wins(PlayerId::PlayerOne), 0);
    assert_eq!(engine.round_wins(PlayerId::PlayerTwo), 0);
    assert_eq!(engine.move_count(), 9);
}

#[test]
fn test_three_round_scenario_tie_break_favours_player_two() {
    let mut engine = GameEngine::new();

    let outcome = play(&mut engine, &PLAYER_ONE_TOP_ROW);
    assert_eq!(outcome.round_winner(), Some(PlayerId::PlayerOne));
    assert!(engine.new_round());

    let outcome = play(&mut engine, &PLAYER_TWO_TOP_ROW);
    assert_eq!(outcome.round_winner(), Some(PlayerId::PlayerTwo));
    assert!(!outcome.game_ended());
    assert!(engine.new_round());
    assert_eq!(engine.current_round(), MAX_ROUNDS);

    let outcome = play(&mut engine, &TIE_GAME);
    assert_eq!(*outcome.round_result(), Some(RoundResult::Tie));
    assert!(outcome.game_ended());
    // Scores are level at 1-1; the tie-break hands the game to Player Two.
    assert_eq!(*outcome.game_winner(), Some(PlayerId::PlayerTwo));
    assert!(engine.is_game_over());
    assert!(!engine.is_ongoing());
    assert_eq!(engine.game_winner(), Some(PlayerId::PlayerTwo));
    assert_eq!(engine.round_wins(PlayerId::PlayerOne), 1);
    assert_eq!(engine.round_wins(PlayerId::PlayerTwo), 1);

    assert_eq!(engine.submit_move(0, 0), Err(MoveRejection::GameOver));
}

#[test]
fn test_player_one_wins_game_with_more_rounds() {
    let mut engine = GameEngine::new();
    play(&mut engine, &PLAYER_ONE_TOP_ROW);
    engine.new_round();
    play(&mut engine, &TIE_GAME);
    engine.new_round();
    let outcome = play(&mut engine, &PLAYER_ONE_TOP_ROW);

    assert_eq!(*outcome.game_winner(), Some(PlayerId::PlayerOne));
    assert_eq!(
        engine.status(),
        GameStatus::GameOver {
            last_round: RoundResult::Win(PlayerId::PlayerOne),
            winner: PlayerId::PlayerOne,
        }
    );
}

#[test]
fn test_new_round_at_cap_is_noop() {
    let mut engine = GameEngine::new();
    engine.new_round();
    engine.new_round();
    assert_eq!(engine.current_round(), MAX_ROUNDS);

    engine.submit_move(1, 1).expect("legal move");
    let before = engine.clone();
    assert!(!engine.new_round());
    assert_eq!(engine, before);
}

#[test]
fn test_new_round_keeps_scores() {
    let mut engine = GameEngine::new();
    play(&mut engine, &PLAYER_ONE_TOP_ROW);
    engine.new_round();

    assert!(engine.is_ongoing());
    assert_eq!(engine.current_round(), 2);
    assert_eq!(engine.active_player(), PlayerId::PlayerOne);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.round_wins(PlayerId::PlayerOne), 1);
    assert_eq!(engine.last_round_result(), None);
}

#[test]
fn test_restart_after_game_over() {
    let mut engine = GameEngine::new();
    play(&mut engine, &PLAYER_ONE_TOP_ROW);
    engine.new_round();
    play(&mut engine, &PLAYER_TWO_TOP_ROW);
    engine.new_round();
    play(&mut engine, &TIE_GAME);
    assert!(engine.is_game_over());

    engine.restart_game();
    assert!(engine.is_ongoing());
    assert!(!engine.is_game_over());
    assert_eq!(engine.current_round(), 1);
    assert_eq!(engine.round_wins(PlayerId::PlayerOne), 0);
    assert_eq!(engine.round_wins(PlayerId::PlayerTwo), 0);
    assert_eq!(engine.active_player(), PlayerId::PlayerOne);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_restart_mid_round() {
    let mut engine = GameEngine::new();
    play(&mut engine, &PLAYER_ONE_TOP_ROW);
    engine.new_round();
    engine.submit_move(2, 2).expect("legal move");

    engine.restart_game();
    assert_eq!(engine, GameEngine::new());
}
