//! Win detection logic for tic-tac-toe.

use crate::lines::{LINES, Line};
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Returns the first line (in [`LINES`] order) fully owned by `player`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let mark = Cell::from(player);
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| board.get(i) == Some(mark)))
}

/// Checks whether `player` owns three in a row anywhere.
pub fn completes_line(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Checks if there is a winner on the board.
///
/// Scans lines in order and reports the owner of the first complete one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Some(Cell::Empty) && cell == board.get(b) && cell == board.get(c) {
            return cell.and_then(Cell::player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!completes_line(&board, Player::X));
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board, Player::X), Some([0, 1, 2]));
        assert_eq!(winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO.O.OX.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board, Player::O), Some([2, 4, 6]));
    }

    #[test]
    fn test_first_line_in_scan_order() {
        // X owns both the top row and the left column.
        let board: Board = "XXXXOOXOO".parse().unwrap();
        assert_eq!(winning_line(&board, Player::X), Some([0, 1, 2]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
