//! Complete placements.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ChessPlaceError, Result};
use crate::geometry::{Position, Size};
use crate::piece::PieceKind;

/// A placement of every piece of a problem with no piece under attack.
///
/// Equality compares the board size and the position to piece mapping;
/// the order pieces were placed in does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    size: Size,
    placements: BTreeMap<usize, PieceKind>,
}

impl Solution {
    /// Builds a solution from `(index, kind)` pairs.
    ///
    /// Fails if the list is empty, an index is off the board, or two pieces
    /// share a square.
    pub fn new<I>(size: Size, placements: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, PieceKind)>,
    {
        let mut map = BTreeMap::new();
        for (index, kind) in placements {
            let position = size.position_of(index)?;
            if map.insert(index, kind).is_some() {
                return Err(ChessPlaceError::InvalidState(format!(
                    "two pieces placed on {}",
                    position
                )));
            }
        }
        if map.is_empty() {
            return Err(ChessPlaceError::InvalidState(
                "solution has no placements".to_string(),
            ));
        }
        Ok(Self {
            size,
            placements: map,
        })
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of placed pieces.
    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn piece_at(&self, position: Position) -> Option<PieceKind> {
        if position.size() != self.size {
            return None;
        }
        self.placements.get(&position.index()).copied()
    }

    /// Placed pieces in ascending position order.
    pub fn placements(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        self.placements
            .iter()
            .map(move |(&index, &kind)| (Position::at(self.size, index), kind))
    }

    /// Renders the board with one symbol per piece.
    pub fn draw(&self) -> String {
        self.size.draw(|p| self.piece_at(p).map(PieceKind::symbol))
    }

    /// The same solution turned 90 degrees clockwise. Square boards only.
    pub fn rotate90(&self) -> Result<Solution> {
        self.map_positions(|p| p.rotate90())
    }

    /// The same solution turned 180 degrees. Square boards only.
    pub fn rotate180(&self) -> Result<Solution> {
        self.map_positions(|p| p.rotate180())
    }

    fn map_positions<F>(&self, f: F) -> Result<Solution>
    where
        F: Fn(Position) -> Result<Position>,
    {
        self.size.check_square()?;
        let mut placements = BTreeMap::new();
        for (position, kind) in self.placements() {
            placements.insert(f(position)?.index(), kind);
        }
        Ok(Solution {
            size: self.size,
            placements,
        })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.draw())
    }
}
