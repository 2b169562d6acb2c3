//! Line and round evaluation.

use super::super::outcome::{RoundResult, RoundStatus};
use super::super::{Board, Cell, PlayerId, Position};
use tracing::instrument;

const DIAGONALS: [[Position; 3]; 2] = [
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

const COLUMNS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
];

/// Returns the owner of a line if all three cells hold the same player.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<PlayerId> {
    let owner = board.get(a).occupant()?;
    let held = Cell::Occupied(owner);
    (board.get(b) == held && board.get(c) == held).then_some(owner)
}

/// Checks if there is a completed line on the board.
///
/// Diagonals are checked first, then row `i` and column `i` for each `i`.
/// An empty centre skips both diagonals.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<PlayerId> {
    if board.get(Position::Center) != Cell::Empty {
        if let Some(winner) = DIAGONALS.into_iter().find_map(|line| line_owner(board, line)) {
            return Some(winner);
        }
    }

    ROWS.into_iter()
        .zip(COLUMNS)
        .find_map(|(row, column)| line_owner(board, row).or_else(|| line_owner(board, column)))
}

/// Evaluates the round after a move, given the round's move counter.
///
/// Nine moves with no line is a tie; a line completed by the ninth move still
/// counts as a win.
#[instrument(skip(board))]
pub fn evaluate_round(board: &Board, move_count: u32) -> RoundStatus {
    let provisional_tie = move_count == 9;

    match check_winner(board) {
        Some(winner) => RoundStatus::Ended(RoundResult::Win(winner)),
        None if provisional_tie => RoundStatus::Ended(RoundResult::Tie),
        None => RoundStatus::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(Position, PlayerId)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in cells {
            board.set(*pos, Cell::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(evaluate_round(&Board::new(), 0), RoundStatus::Continue);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, PlayerId::PlayerOne),
            (Position::TopCenter, PlayerId::PlayerOne),
            (Position::TopRight, PlayerId::PlayerOne),
        ]);
        assert_eq!(check_winner(&board), Some(PlayerId::PlayerOne));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::BottomLeft, PlayerId::PlayerTwo),
            (Position::Center, PlayerId::PlayerTwo),
            (Position::TopRight, PlayerId::PlayerTwo),
        ]);
        assert_eq!(check_winner(&board), Some(PlayerId::PlayerTwo));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopRight, PlayerId::PlayerTwo),
            (Position::MiddleRight, PlayerId::PlayerTwo),
            (Position::BottomRight, PlayerId::PlayerTwo),
        ]);
        assert_eq!(check_winner(&board), Some(PlayerId::PlayerTwo));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, PlayerId::PlayerOne),
            (Position::Center, PlayerId::PlayerTwo),
            (Position::BottomRight, PlayerId::PlayerOne),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_empty_centre_never_matches_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, PlayerId::PlayerOne),
            (Position::BottomRight, PlayerId::PlayerOne),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_on_ninth_move_overrides_tie() {
        // x x x / o o x / x o o
        let board = board_with(&[
            (Position::TopLeft, PlayerId::PlayerOne),
            (Position::TopCenter, PlayerId::PlayerOne),
            (Position::TopRight, PlayerId::PlayerOne),
            (Position::MiddleLeft, PlayerId::PlayerTwo),
            (Position::Center, PlayerId::PlayerTwo),
            (Position::MiddleRight, PlayerId::PlayerOne),
            (Position::BottomLeft, PlayerId::PlayerOne),
            (Position::BottomCenter, PlayerId::PlayerTwo),
            (Position::BottomRight, PlayerId::PlayerTwo),
        ]);
        assert_eq!(
            evaluate_round(&board, 9),
            RoundStatus::Ended(RoundResult::Win(PlayerId::PlayerOne))
        );
    }
}
