//! Search tree nodes.
//!
//! A [`Step`] is a partial placement: the first `depth` pieces of the
//! problem are on the board and the merged board state records every square
//! they occupy or attack.

use std::sync::Arc;

use chessplace_core::{BoardState, ChessPlaceError, PieceKind, Problem, Result, Solution};

/// A node in the placement search tree.
#[derive(Debug, Clone)]
pub struct Step {
    /// Piece list in search order, shared by every node of a search.
    pieces: Arc<[PieceKind]>,

    /// Chosen position index for each placed piece.
    placed: Vec<usize>,

    /// Union of the threat states of all placed pieces.
    state: BoardState,
}

impl Step {
    /// Creates the root node: nothing placed, every square available.
    pub fn root(problem: &Problem) -> Self {
        Self {
            pieces: problem.shared_pieces(),
            placed: Vec::new(),
            state: BoardState::empty(problem.size()),
        }
    }

    /// Number of pieces placed so far.
    #[inline]
    pub fn depth(&self) -> usize {
        self.placed.len()
    }

    /// Number of pieces still to place.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.pieces.len() - self.placed.len()
    }

    #[inline]
    pub fn placed(&self) -> &[usize] {
        &self.placed
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// True once every piece has a position.
    #[inline]
    pub fn is_solution(&self) -> bool {
        self.placed.len() == self.pieces.len()
    }

    /// True when fewer squares are free than pieces remain.
    #[inline]
    pub fn lacks_room(&self) -> bool {
        self.state.available_count() < self.remaining()
    }

    /// The kind of the piece to place next.
    pub fn next_piece(&self) -> Result<PieceKind> {
        self.pieces.get(self.placed.len()).copied().ok_or_else(|| {
            ChessPlaceError::InvalidState("all pieces are already placed".to_string())
        })
    }

    /// Converts a terminal node into a [`Solution`].
    pub fn solution(&self) -> Result<Solution> {
        if !self.is_solution() {
            return Err(ChessPlaceError::InvalidState(format!(
                "only {} of {} pieces placed",
                self.placed.len(),
                self.pieces.len()
            )));
        }
        Solution::new(
            self.state.size(),
            self.placed.iter().copied().zip(self.pieces.iter().copied()),
        )
    }

    /// Returns every valid placement of the next piece.
    ///
    /// Consecutive pieces of the same kind are placed at increasing indices
    /// so that each solution is produced once.
    pub fn expand(&self) -> Result<Vec<Step>> {
        let piece = self.next_piece()?;
        if self.lacks_room() {
            return Ok(Vec::new());
        }

        let start = match self.placed.last() {
            Some(&last) if self.pieces[self.placed.len() - 1] == piece => last + 1,
            _ => 0,
        };

        let size = self.state.size();
        let mut children = Vec::new();
        for index in self.state.available_from(start) {
            let threat = piece.threat(size.position_of(index)?);
            if self.placed.iter().any(|&p| !threat.is_available(p)) {
                continue;
            }
            let Some(state) = self.state.merge(&threat)? else {
                continue;
            };
            let mut placed = Vec::with_capacity(self.placed.len() + 1);
            placed.extend_from_slice(&self.placed);
            placed.push(index);
            children.push(Step {
                pieces: Arc::clone(&self.pieces),
                placed,
                state,
            });
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessplace_core::Size;

    fn problem(rows: usize, columns: usize, pieces: &[(PieceKind, usize)]) -> Problem {
        let mut builder = Problem::builder(Size::new(rows, columns).unwrap());
        for &(kind, n) in pieces {
            builder = builder.add_pieces(kind, n);
        }
        builder.build()
    }

    fn count(step: &Step) -> usize {
        if step.is_solution() {
            return 1;
        }
        step.expand().unwrap().iter().map(count).sum()
    }

    #[test]
    fn test_root() {
        let p = problem(3, 3, &[(PieceKind::King, 2), (PieceKind::Rook, 1)]);
        let root = Step::root(&p);
        assert_eq!(root.depth(), 0);
        assert_eq!(root.remaining(), 3);
        assert!(!root.is_solution());
        assert_eq!(root.next_piece().unwrap(), PieceKind::Rook);
        assert!(root.state().is_empty());
    }

    #[test]
    fn test_single_piece_children_are_solutions() {
        let p = problem(2, 3, &[(PieceKind::Queen, 1)]);
        let children = Step::root(&p).expand().unwrap();
        assert_eq!(children.len(), 6);
        assert!(children.iter().all(Step::is_solution));
        assert_eq!(children[4].placed(), &[4]);
    }

    #[test]
    fn test_terminal_step_errors() {
        let p = problem(2, 2, &[(PieceKind::Queen, 1)]);
        let child = Step::root(&p).expand().unwrap().remove(0);
        assert!(matches!(
            child.next_piece(),
            Err(ChessPlaceError::InvalidState(_))
        ));
        assert!(matches!(child.expand(), Err(ChessPlaceError::InvalidState(_))));

        let solution = child.solution().unwrap();
        assert_eq!(solution.len(), 1);
    }

    #[test]
    fn test_partial_step_has_no_solution() {
        let p = problem(4, 4, &[(PieceKind::Queen, 4)]);
        assert!(matches!(
            Step::root(&p).solution(),
            Err(ChessPlaceError::InvalidState(_))
        ));
    }

    #[test]
    fn test_forward_only_for_same_kind() {
        let p = problem(3, 3, &[(PieceKind::Knight, 2)]);
        let root = Step::root(&p);
        for child in root.expand().unwrap() {
            let first = child.placed()[0];
            for grandchild in child.expand().unwrap() {
                assert!(grandchild.placed()[1] > first);
            }
        }
    }

    #[test]
    fn test_different_kind_restarts_from_zero() {
        // Rook placed first at index 8, king may still go to index 1
        let p = problem(3, 3, &[(PieceKind::King, 1), (PieceKind::Rook, 1)]);
        let root = Step::root(&p);
        let rook = root
            .expand()
            .unwrap()
            .into_iter()
            .find(|s| s.placed() == [8])
            .unwrap();
        let kings: Vec<usize> = rook.expand().unwrap().iter().map(|s| s.placed()[1]).collect();
        assert_eq!(kings, vec![0, 1, 3]);
    }

    #[test]
    fn test_room_pruning() {
        let p = problem(2, 2, &[(PieceKind::Queen, 2)]);
        let root = Step::root(&p);
        for child in root.expand().unwrap() {
            assert!(child.lacks_room());
            assert!(child.expand().unwrap().is_empty());
        }
    }

    #[test]
    fn test_sequential_counts() {
        assert_eq!(count(&Step::root(&problem(4, 4, &[(PieceKind::Queen, 4)]))), 2);
        assert_eq!(count(&Step::root(&problem(5, 5, &[(PieceKind::Queen, 5)]))), 10);
        assert_eq!(
            count(&Step::root(&problem(
                3,
                3,
                &[(PieceKind::King, 2), (PieceKind::Rook, 1)]
            ))),
            4
        );
        assert_eq!(
            count(&Step::root(&problem(
                4,
                4,
                &[(PieceKind::Knight, 4), (PieceKind::Rook, 2)]
            ))),
            8
        );
    }
}
