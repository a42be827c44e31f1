//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Single-character form used by [`Board`] parsing and display.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Creates a board from a row-major cell snapshot.
    ///
    /// No turn-order validation happens here; this is how callers hand a
    /// snapshot to an opponent.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Writes a cell. Callers validate `pos` first.
    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Checks if a cell is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Returns the indices of all empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid; empty cells show their board index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos)?,
                    cell => write!(f, "{}", cell.symbol())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// Unrecognised cell character.
    #[display("Invalid cell character {:?} at index {}", _0, _1)]
    InvalidCell(char, usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells from `X`, `O` and `.`/`-`/`_` characters.
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != Self::SIZE {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (i, c) in symbols.into_iter().enumerate() {
            cells[i] = match c {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other, i)),
            };
        }
        Ok(Self { cells })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any. `None` covers both ongoing and drawn games.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
