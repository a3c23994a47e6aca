//! Immutable board states used for pruning.

use std::sync::Arc;

use crate::bitset::BitSet;
use crate::error::{ChessPlaceError, Result};
use crate::geometry::Size;

/// The set of squares that are occupied or threatened on a board.
///
/// `Empty` costs nothing to build or merge. `Regular` holds a frozen buffer
/// behind an `Arc`, so cloning a state never copies bits.
///
/// A `Regular` state always has at least one unavailable square and never
/// records an index outside the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoardState {
    Empty(Size),
    Regular(Arc<RegularState>),
}

/// Bits of a non-empty [`BoardState`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RegularState {
    size: Size,
    occupied: BitSet,
    unavailable: BitSet,
}

impl BoardState {
    /// A state where every square is available.
    #[inline]
    pub fn empty(size: Size) -> Self {
        BoardState::Empty(size)
    }

    /// Builds a state from explicit index lists.
    ///
    /// Occupied squares are always unavailable, so they are added to the
    /// unavailable set. Returns `Empty` when no index is given.
    pub fn from_indices<O, U>(size: Size, occupied: O, unavailable: U) -> Result<Self>
    where
        O: IntoIterator<Item = usize>,
        U: IntoIterator<Item = usize>,
    {
        let occupied = BitSet::from_indices(size.positions(), occupied);
        let unavailable = BitSet::from_indices(size.positions(), unavailable).union(&occupied);
        if let Some(last) = unavailable.last() {
            if last >= size.positions() {
                return Err(ChessPlaceError::PositionOutOfRange(format!(
                    "index {} for {}",
                    last, size
                )));
            }
        }
        Ok(Self::from_bits(size, occupied, unavailable))
    }

    /// Wraps already validated bits, degrading to `Empty` when nothing is set.
    pub(crate) fn from_bits(size: Size, occupied: BitSet, unavailable: BitSet) -> Self {
        debug_assert!(unavailable.last().map_or(true, |last| last < size.positions()));
        if unavailable.is_empty() {
            return BoardState::Empty(size);
        }
        BoardState::Regular(Arc::new(RegularState {
            size,
            occupied,
            unavailable,
        }))
    }

    #[inline]
    pub fn size(&self) -> Size {
        match self {
            BoardState::Empty(size) => *size,
            BoardState::Regular(state) => state.size,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, BoardState::Empty(_))
    }

    /// Number of squares neither occupied nor threatened.
    #[inline]
    pub fn available_count(&self) -> usize {
        match self {
            BoardState::Empty(size) => size.positions(),
            BoardState::Regular(state) => state.size.positions() - state.unavailable.count(),
        }
    }

    /// True if `index` is on the board and free.
    #[inline]
    pub fn is_available(&self, index: usize) -> bool {
        match self {
            BoardState::Empty(size) => index < size.positions(),
            BoardState::Regular(state) => {
                index < state.size.positions() && !state.unavailable.contains(index)
            }
        }
    }

    /// True if a piece stands on `index`.
    #[inline]
    pub fn is_occupied(&self, index: usize) -> bool {
        match self {
            BoardState::Empty(_) => false,
            BoardState::Regular(state) => state.occupied.contains(index),
        }
    }

    /// Available indices in ascending order.
    pub fn available(&self) -> Available<'_> {
        self.available_from(0)
    }

    /// Available indices `>= start` in ascending order.
    pub fn available_from(&self, start: usize) -> Available<'_> {
        let unavailable = match self {
            BoardState::Empty(_) => None,
            BoardState::Regular(state) => Some(&state.unavailable),
        };
        Available {
            unavailable,
            next: start,
            end: self.size().positions(),
        }
    }

    /// Combines two states.
    ///
    /// Returns `Ok(None)` when a piece of one state stands on a square the
    /// other state occupies or threatens. Squares threatened by both are
    /// fine. An `Empty` operand yields the other operand without copying.
    pub fn merge(&self, other: &BoardState) -> Result<Option<BoardState>> {
        if self.size() != other.size() {
            return Err(ChessPlaceError::SizeMismatch {
                expected: self.size(),
                actual: other.size(),
            });
        }
        match (self, other) {
            (BoardState::Empty(_), _) => Ok(Some(other.clone())),
            (_, BoardState::Empty(_)) => Ok(Some(self.clone())),
            (BoardState::Regular(a), BoardState::Regular(b)) => {
                if a.occupied.intersects(&b.unavailable) || b.occupied.intersects(&a.unavailable) {
                    return Ok(None);
                }
                Ok(Some(BoardState::Regular(Arc::new(RegularState {
                    size: a.size,
                    occupied: a.occupied.union(&b.occupied),
                    unavailable: a.unavailable.union(&b.unavailable),
                }))))
            }
        }
    }
}

/// Iterator over the available indices of a [`BoardState`].
#[derive(Debug, Clone)]
pub struct Available<'a> {
    unavailable: Option<&'a BitSet>,
    next: usize,
    end: usize,
}

impl Iterator for Available<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = match self.unavailable {
            Some(bits) => bits.next_clear(self.next),
            None => self.next,
        };
        if index >= self.end {
            self.next = self.end;
            return None;
        }
        self.next = index + 1;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn size(rows: usize, columns: usize) -> Size {
        Size::new(rows, columns).unwrap()
    }

    #[test]
    fn test_empty_state() {
        let state = BoardState::empty(size(3, 4));
        assert!(state.is_empty());
        assert_eq!(state.available_count(), 12);
        assert_eq!(state.available().count(), 12);
        assert!(state.is_available(11));
        assert!(!state.is_available(12));
        assert!(!state.is_occupied(0));
    }

    #[test]
    fn test_from_indices_degrades_to_empty() {
        let state = BoardState::from_indices(size(2, 2), Vec::<usize>::new(), Vec::<usize>::new()).unwrap();
        assert_eq!(state, BoardState::empty(size(2, 2)));
    }

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        let result = BoardState::from_indices(size(2, 2), Vec::<usize>::new(), [4]);
        assert!(matches!(result, Err(ChessPlaceError::PositionOutOfRange(_))));
        let result = BoardState::from_indices(size(2, 2), [9], Vec::<usize>::new());
        assert!(matches!(result, Err(ChessPlaceError::PositionOutOfRange(_))));
    }

    #[test]
    fn test_occupied_is_unavailable() {
        let state = BoardState::from_indices(size(2, 2), [1], [3]).unwrap();
        assert_eq!(state.available().collect::<Vec<_>>(), vec![0, 2]);
        assert!(state.is_occupied(1));
        assert!(!state.is_occupied(3));
    }

    #[test]
    fn test_available_from() {
        let state = BoardState::from_indices(size(3, 3), [4], [0, 5]).unwrap();
        assert_eq!(state.available_from(3).collect::<Vec<_>>(), vec![3, 6, 7, 8]);
        assert_eq!(state.available_from(9).count(), 0);

        let empty = BoardState::empty(size(3, 3));
        assert_eq!(empty.available_from(7).collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn test_available_is_restartable() {
        let state = BoardState::from_indices(size(3, 3), [4], []).unwrap();
        let first: Vec<_> = state.available().collect();
        let second: Vec<_> = state.available().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), state.available_count());
    }

    #[test]
    fn test_merge_with_empty_shares_buffer() {
        let s = size(4, 4);
        let queen = PieceKind::Queen.threat(s.position_of(5).unwrap());
        let merged = queen.merge(&BoardState::empty(s)).unwrap().unwrap();
        let merged_left = BoardState::empty(s).merge(&queen).unwrap().unwrap();

        match (&queen, &merged, &merged_left) {
            (BoardState::Regular(a), BoardState::Regular(b), BoardState::Regular(c)) => {
                assert!(Arc::ptr_eq(a, b));
                assert!(Arc::ptr_eq(a, c));
            }
            _ => panic!("expected regular states"),
        }
    }

    #[test]
    fn test_merge_size_mismatch() {
        let a = BoardState::empty(size(3, 3));
        let b = BoardState::empty(size(3, 4));
        assert_eq!(
            a.merge(&b),
            Err(ChessPlaceError::SizeMismatch {
                expected: size(3, 3),
                actual: size(3, 4),
            })
        );
    }

    #[test]
    fn test_merge_rejects_attacked_piece() {
        let s = size(4, 4);
        let a = PieceKind::Rook.threat(s.position_at(0, 0).unwrap());
        let b = PieceKind::Knight.threat(s.position_at(0, 3).unwrap());
        assert_eq!(a.merge(&b).unwrap(), None);
        assert_eq!(b.merge(&a).unwrap(), None);
    }

    #[test]
    fn test_merge_allows_shared_threats() {
        // Queens at (0,1) and (1,3) on 4x4 both attack (0,3) and others
        let s = size(4, 4);
        let a = PieceKind::Queen.threat(s.position_at(0, 1).unwrap());
        let b = PieceKind::Queen.threat(s.position_at(1, 3).unwrap());
        assert!(a.merge(&b).unwrap().is_some());
    }

    #[test]
    fn test_merge_is_commutative_and_intersects_availability() {
        let s = size(5, 5);
        let a = PieceKind::Knight.threat(s.position_at(0, 0).unwrap());
        let b = PieceKind::Bishop.threat(s.position_at(4, 2).unwrap());

        let ab = a.merge(&b).unwrap().unwrap();
        let ba = b.merge(&a).unwrap().unwrap();
        assert_eq!(ab, ba);

        let both = (0..s.positions())
            .filter(|&i| a.is_available(i) && b.is_available(i))
            .count();
        assert_eq!(ab.available_count(), both);
        assert_eq!(ab.available().count(), both);
    }
}
