//! Piece kinds and their threat footprints.
//!
//! Every kind carries its move rule as data: a list of [`Offset`]s, each
//! applied once or repeated until it leaves the board.

use std::fmt;

use crate::bitset::BitSet;
use crate::geometry::Position;
use crate::state::BoardState;

/// How an offset is applied from the origin square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepMode {
    /// A single step, if it lands on the board.
    Once,
    /// Repeated steps while they stay on the board.
    Repeat,
}

/// A directional move rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: isize,
    pub d_column: isize,
    pub mode: StepMode,
}

impl Offset {
    const fn once(d_row: isize, d_column: isize) -> Self {
        Self {
            d_row,
            d_column,
            mode: StepMode::Once,
        }
    }

    const fn repeat(d_row: isize, d_column: isize) -> Self {
        Self {
            d_row,
            d_column,
            mode: StepMode::Repeat,
        }
    }
}

const KING_OFFSETS: [Offset; 8] = [
    Offset::once(-1, 0),
    Offset::once(-1, 1),
    Offset::once(0, 1),
    Offset::once(1, 1),
    Offset::once(1, 0),
    Offset::once(1, -1),
    Offset::once(0, -1),
    Offset::once(-1, -1),
];

const QUEEN_OFFSETS: [Offset; 8] = [
    Offset::repeat(-1, 0),
    Offset::repeat(-1, 1),
    Offset::repeat(0, 1),
    Offset::repeat(1, 1),
    Offset::repeat(1, 0),
    Offset::repeat(1, -1),
    Offset::repeat(0, -1),
    Offset::repeat(-1, -1),
];

const BISHOP_OFFSETS: [Offset; 4] = [
    Offset::repeat(-1, 1),
    Offset::repeat(1, 1),
    Offset::repeat(1, -1),
    Offset::repeat(-1, -1),
];

const ROOK_OFFSETS: [Offset; 4] = [
    Offset::repeat(-1, 0),
    Offset::repeat(0, 1),
    Offset::repeat(1, 0),
    Offset::repeat(0, -1),
];

const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::once(-2, -1),
    Offset::once(-2, 1),
    Offset::once(-1, 2),
    Offset::once(1, 2),
    Offset::once(2, -1),
    Offset::once(2, 1),
    Offset::once(-1, -2),
    Offset::once(1, -2),
];

/// The kinds of chess piece that can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Rook,
    Knight,
}

impl PieceKind {
    /// Every kind, in search order.
    pub const BY_SEARCH_ORDER: [PieceKind; 5] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::King,
    ];

    /// Rank in the placement order. Kinds that threaten more squares come
    /// first so that dead branches are cut near the root.
    #[inline]
    pub fn search_order(self) -> usize {
        match self {
            PieceKind::Queen => 0,
            PieceKind::Rook => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::King => 4,
        }
    }

    /// One-character board symbol.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
        }
    }

    /// The move rule of this kind.
    #[inline]
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            PieceKind::King => &KING_OFFSETS,
            PieceKind::Queen => &QUEEN_OFFSETS,
            PieceKind::Bishop => &BISHOP_OFFSETS,
            PieceKind::Rook => &ROOK_OFFSETS,
            PieceKind::Knight => &KNIGHT_OFFSETS,
        }
    }

    /// Board state of a lone piece of this kind at `position`.
    ///
    /// The position itself is occupied; it and every square the piece
    /// attacks are unavailable.
    pub fn threat(self, position: Position) -> BoardState {
        let size = position.size();
        let mut unavailable = BitSet::with_capacity(size.positions());
        unavailable.insert(position.index());

        for offset in self.offsets() {
            let mut current = position;
            while let Some(next) = current.offset(offset.d_row, offset.d_column) {
                unavailable.insert(next.index());
                if offset.mode == StepMode::Once {
                    break;
                }
                current = next;
            }
        }

        let occupied = BitSet::from_indices(size.positions(), [position.index()]);
        BoardState::from_bits(size, occupied, unavailable)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn available(state: &BoardState) -> Vec<usize> {
        state.available().collect()
    }

    #[test]
    fn test_search_order_is_consistent() {
        for (rank, kind) in PieceKind::BY_SEARCH_ORDER.iter().enumerate() {
            assert_eq!(kind.search_order(), rank);
        }
    }

    #[test]
    fn test_king_in_center_covers_3x3() {
        let size = Size::new(3, 3).unwrap();
        let state = PieceKind::King.threat(size.position_at(1, 1).unwrap());
        assert!(available(&state).is_empty());
        assert_eq!(state.available_count(), 0);
    }

    #[test]
    fn test_king_in_corner() {
        let size = Size::new(3, 3).unwrap();
        let state = PieceKind::King.threat(size.position_at(0, 0).unwrap());
        assert_eq!(available(&state), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_rook_lines() {
        let size = Size::new(4, 4).unwrap();
        let state = PieceKind::Rook.threat(size.position_at(1, 1).unwrap());
        assert_eq!(available(&state), vec![0, 2, 3, 8, 10, 11, 12, 14, 15]);
    }

    #[test]
    fn test_bishop_diagonals() {
        let size = Size::new(4, 4).unwrap();
        let state = PieceKind::Bishop.threat(size.position_at(1, 1).unwrap());
        // Diagonals through (1,1): 0, 2, 8, 10, 15
        assert_eq!(available(&state), vec![1, 3, 4, 6, 7, 9, 11, 12, 13, 14]);
    }

    #[test]
    fn test_queen_in_corner() {
        let size = Size::new(3, 3).unwrap();
        let state = PieceKind::Queen.threat(size.position_at(0, 0).unwrap());
        assert_eq!(available(&state), vec![5, 7]);
    }

    #[test]
    fn test_knight_jumps() {
        let size = Size::new(4, 4).unwrap();
        let state = PieceKind::Knight.threat(size.position_at(0, 1).unwrap());
        assert_eq!(available(&state), vec![0, 2, 3, 4, 5, 6, 9, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_threat_occupies_origin() {
        let size = Size::new(5, 5).unwrap();
        let origin = size.position_at(2, 3).unwrap();
        for kind in PieceKind::BY_SEARCH_ORDER {
            let state = kind.threat(origin);
            assert!(state.is_occupied(origin.index()));
            assert!(!state.is_available(origin.index()));
        }
    }

    #[test]
    fn test_lone_piece_on_single_square() {
        let size = Size::new(1, 1).unwrap();
        let state = PieceKind::Queen.threat(size.position_of(0).unwrap());
        assert_eq!(state.available_count(), 0);
    }

    #[test]
    fn test_display_and_symbol() {
        assert_eq!(PieceKind::Knight.to_string(), "Knight");
        assert_eq!(PieceKind::Knight.symbol(), 'N');
        assert_eq!(PieceKind::Queen.symbol(), 'Q');
    }
}
