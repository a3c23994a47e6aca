//! Board geometry: sizes, positions and board drawing.
//!
//! Positions are row-major indices into a board of a given [`Size`]:
//! `index = row * columns + column`.

use std::fmt;

use crate::error::{ChessPlaceError, Result};

/// Immutable board dimensions.
///
/// # Example
///
/// ```
/// use chessplace_core::Size;
///
/// let size = Size::new(5, 9).unwrap();
/// assert_eq!(size.positions(), 45);
///
/// let p = size.position_at(2, 7).unwrap();
/// assert_eq!(p.index(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Size {
    rows: usize,
    columns: usize,
}

impl Size {
    /// Creates a board size. Both dimensions must be positive and the
    /// square count must fit in a `usize`.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 || rows.checked_mul(columns).is_none() {
            return Err(ChessPlaceError::InvalidSize { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Creates a square `n × n` board size.
    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of squares on the board.
    #[inline]
    pub fn positions(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Fails with [`ChessPlaceError::NotSquare`] unless the board is square.
    pub fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(ChessPlaceError::NotSquare(*self))
        }
    }

    /// Returns the position with the given row-major index.
    pub fn position_of(&self, index: usize) -> Result<Position> {
        if index >= self.positions() {
            return Err(ChessPlaceError::PositionOutOfRange(format!(
                "index {} for {}",
                index, self
            )));
        }
        Ok(Position { size: *self, index })
    }

    /// Returns the position at the given coordinates.
    pub fn position_at(&self, row: usize, column: usize) -> Result<Position> {
        if row >= self.rows || column >= self.columns {
            return Err(ChessPlaceError::PositionOutOfRange(format!(
                "({}, {}) for {}",
                row, column, self
            )));
        }
        Ok(Position {
            size: *self,
            index: row * self.columns + column,
        })
    }

    /// Iterates over every position in index order.
    ///
    /// Each call starts a fresh iteration.
    pub fn iter(&self) -> Positions {
        Positions {
            size: *self,
            next: 0,
        }
    }

    /// Draws the board as text.
    ///
    /// `cell` returns the character to show at a position, or `None` for an
    /// empty square.
    ///
    /// ```
    /// use chessplace_core::Size;
    ///
    /// let size = Size::new(1, 2).unwrap();
    /// let drawing = size.draw(|p| (p.index() == 1).then_some('Q'));
    /// assert_eq!(drawing, "+-+-+\n| |Q|\n+-+-+\n");
    /// ```
    pub fn draw<F>(&self, cell: F) -> String
    where
        F: Fn(Position) -> Option<char>,
    {
        let mut rule = String::with_capacity(2 * self.columns + 2);
        rule.push('+');
        for _ in 0..self.columns {
            rule.push_str("-+");
        }
        rule.push('\n');

        let mut out = String::with_capacity(rule.len() * (2 * self.rows + 1));
        out.push_str(&rule);
        for position in self.iter() {
            if position.column() == 0 {
                out.push('|');
            }
            out.push(cell(position).unwrap_or(' '));
            out.push('|');
            if position.column() + 1 == self.columns {
                out.push('\n');
                out.push_str(&rule);
            }
        }
        out
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl IntoIterator for Size {
    type Item = Position;
    type IntoIter = Positions;

    fn into_iter(self) -> Positions {
        self.iter()
    }
}

/// A square on a board of a specific [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    size: Size,
    index: usize,
}

impl Position {
    /// Builds a position from an index already known to be on the board.
    #[inline]
    pub(crate) fn at(size: Size, index: usize) -> Position {
        debug_assert!(index < size.positions());
        Position { size, index }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.index / self.size.columns
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.index % self.size.columns
    }

    /// Returns the position reached by moving `(d_row, d_column)`, if it is
    /// still on the board.
    #[inline]
    pub fn offset(&self, d_row: isize, d_column: isize) -> Option<Position> {
        let row = self.row().checked_add_signed(d_row)?;
        let column = self.column().checked_add_signed(d_column)?;
        if row < self.size.rows && column < self.size.columns {
            Some(Position {
                size: self.size,
                index: row * self.size.columns + column,
            })
        } else {
            None
        }
    }

    /// Rotates the position 90 degrees clockwise. Square boards only.
    pub fn rotate90(&self) -> Result<Position> {
        self.size.check_square()?;
        let n = self.size.rows;
        self.size.position_at(self.column(), n - 1 - self.row())
    }

    /// Rotates the position 180 degrees. Square boards only.
    pub fn rotate180(&self) -> Result<Position> {
        self.size.check_square()?;
        let n = self.size.rows;
        self.size.position_at(n - 1 - self.row(), n - 1 - self.column())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]({},{}) of {}",
            self.index,
            self.row(),
            self.column(),
            self.size
        )
    }
}

/// Iterator over all positions of a board, in index order.
#[derive(Debug, Clone)]
pub struct Positions {
    size: Size,
    next: usize,
}

impl Iterator for Positions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.next >= self.size.positions() {
            return None;
        }
        let position = Position {
            size: self.size,
            index: self.next,
        };
        self.next += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.positions().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}
