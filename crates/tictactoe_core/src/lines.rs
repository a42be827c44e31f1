//! The eight winning lines.

/// Three board indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Winning lines in fixed scan order: rows, columns, diagonals.
///
/// Every line scan in the crate walks this order, so the first match is
/// deterministic.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Center cell index.
pub const CENTER: usize = 4;

/// Corner cell indices.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
