//! Placement problems.

use std::sync::Arc;

use crate::geometry::Size;
use crate::piece::PieceKind;

/// A board size plus the pieces to place, sorted into search order.
///
/// Built once through [`ProblemBuilder`] and never changed afterwards.
///
/// ```
/// use chessplace_core::{PieceKind, Problem, Size};
///
/// let problem = Problem::builder(Size::new(3, 3).unwrap())
///     .add_pieces(PieceKind::King, 2)
///     .add_pieces(PieceKind::Rook, 1)
///     .build();
///
/// assert_eq!(
///     problem.pieces(),
///     &[PieceKind::Rook, PieceKind::King, PieceKind::King]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    size: Size,
    counts: [usize; 5],
    total: Option<usize>,
    pieces: Arc<[PieceKind]>,
}

impl Problem {
    pub fn builder(size: Size) -> ProblemBuilder {
        ProblemBuilder::new(size)
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Pieces in placement order.
    ///
    /// Empty for a degenerate problem: the list is only materialized when
    /// every piece fits on the board.
    #[inline]
    pub fn pieces(&self) -> &[PieceKind] {
        &self.pieces
    }

    /// The same piece list, shared.
    #[inline]
    pub fn shared_pieces(&self) -> Arc<[PieceKind]> {
        Arc::clone(&self.pieces)
    }

    /// Total number of pieces requested, saturating at `usize::MAX`.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.total.unwrap_or(usize::MAX)
    }

    /// How many pieces of `kind` are to be placed.
    #[inline]
    pub fn count_of(&self, kind: PieceKind) -> usize {
        self.counts[kind.search_order()]
    }

    /// True when the problem trivially has no solution: nothing to place,
    /// or more pieces than squares.
    pub fn is_degenerate(&self) -> bool {
        match self.total {
            Some(total) => total == 0 || total > self.size.positions(),
            None => true,
        }
    }
}

/// Collects per-kind piece counts for a [`Problem`].
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    size: Size,
    counts: [usize; 5],
}

impl ProblemBuilder {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            counts: [0; 5],
        }
    }

    /// Adds `amount` pieces of `kind`. Repeated calls accumulate.
    pub fn add_pieces(mut self, kind: PieceKind, amount: usize) -> Self {
        let count = &mut self.counts[kind.search_order()];
        *count = count.saturating_add(amount);
        self
    }

    pub fn build(self) -> Problem {
        let total = self
            .counts
            .iter()
            .try_fold(0usize, |sum, &n| sum.checked_add(n));
        let mut problem = Problem {
            size: self.size,
            counts: self.counts,
            total,
            pieces: Arc::from(Vec::new()),
        };
        if problem.is_degenerate() {
            return problem;
        }

        let mut pieces = Vec::with_capacity(problem.piece_count());
        for kind in PieceKind::BY_SEARCH_ORDER {
            pieces.extend(std::iter::repeat(kind).take(self.counts[kind.search_order()]));
        }
        problem.pieces = pieces.into();
        problem
    }
}
