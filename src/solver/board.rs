use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

/// The widest board either search encoding supports. Bounded by the bitmask
/// word width; sizes past the low tens are impractical to trace anyway.
pub const MAX_SIZE: usize = 64;

/// A column index on the board.
pub type Col = u8;

/// The partial placement state of one search: one entry per row, holding the
/// column of that row's queen or `None` if the row is still undecided.
///
/// The board is mutated in place by the active search call and never aliased
/// outside event payloads; every externalized step takes a [`snapshot`]
/// instead, since the live board keeps changing after the step is recorded.
/// Backing the rows with a persistent [`im::Vector`] makes that snapshot a
/// cheap structural clone rather than a full copy per event.
///
/// [`snapshot`]: Board::snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vector<Option<Col>>,
}

impl Board {
    /// Creates a board of the given size with every row undecided.
    pub fn empty(size: usize) -> Self {
        Self {
            rows: std::iter::repeat(None).take(size).collect(),
        }
    }

    /// Builds a fully (or partially, with trailing rows unset) decided board
    /// from explicit column choices. Intended for consumers reconstructing
    /// expected states; the search itself starts from [`Board::empty`].
    pub fn from_columns(columns: &[Col]) -> Self {
        Self {
            rows: columns.iter().map(|&col| Some(col)).collect(),
        }
    }

    /// The board's side length N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The column of the queen in `row`, if one has been placed there.
    pub fn queen(&self, row: usize) -> Option<Col> {
        self.rows.get(row).copied().flatten()
    }

    /// Iterates the rows in order, yielding each row's decided column.
    pub fn queens(&self) -> impl Iterator<Item = Option<Col>> + '_ {
        self.rows.iter().copied()
    }

    /// The number of queens currently on the board.
    pub fn queens_placed(&self) -> usize {
        self.rows.iter().filter(|entry| entry.is_some()).count()
    }

    pub(crate) fn place(&mut self, row: usize, col: Col) {
        debug_assert!((col as usize) < self.size());
        self.rows.set(row, Some(col));
    }

    pub(crate) fn clear(&mut self, row: usize) {
        self.rows.set(row, None);
    }

    /// The scan-form validity predicate: would a queen at `(row, col)`
    /// conflict with any queen placed on an earlier row?
    ///
    /// A conflict is a shared column (`board[r] == col`) or a shared diagonal
    /// (`|board[r] - col| == row - r`). O(row) per call.
    pub fn is_safe(&self, row: usize, col: Col) -> bool {
        for (prior_row, entry) in self.rows.iter().enumerate().take(row) {
            let Some(placed_col) = entry else {
                continue;
            };
            if *placed_col == col {
                return false;
            }
            if placed_col.abs_diff(col) as usize == row - prior_row {
                return false;
            }
        }
        true
    }

    /// Whether the board is a complete, valid N-queens configuration: every
    /// row decided, one queen per column, no two queens on a diagonal.
    pub fn is_complete_solution(&self) -> bool {
        let size = self.size();
        let mut columns = Vec::with_capacity(size);
        for entry in self.rows.iter() {
            match entry {
                Some(col) => columns.push(*col),
                None => return false,
            }
        }
        for i in 0..columns.len() {
            for j in (i + 1)..columns.len() {
                if columns[i] == columns[j] {
                    return false;
                }
                if columns[i].abs_diff(columns[j]) as usize == j - i {
                    return false;
                }
            }
        }
        size > 0
    }

    /// A defensive copy of the board as it stands right now.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for entry in self.rows.iter() {
            let mut line = String::with_capacity(size * 2);
            for col in 0..size {
                let square = match entry {
                    Some(queen_col) if *queen_col as usize == col => 'Q',
                    _ => '.',
                };
                line.push(square);
                if col + 1 < size {
                    line.push(' ');
                }
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
