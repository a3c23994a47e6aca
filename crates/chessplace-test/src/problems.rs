//! Problem builders.

use chessplace_core::{PieceKind, Problem, Size};

/// `n` queens on an `n × n` board.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn n_queens(n: usize) -> Problem {
    mixed(n, n, &[(PieceKind::Queen, n)])
}

/// A single piece of `kind` on a `rows × columns` board.
pub fn single_piece(kind: PieceKind, rows: usize, columns: usize) -> Problem {
    mixed(rows, columns, &[(kind, 1)])
}

/// A board with the given per-kind piece counts.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn mixed(rows: usize, columns: usize, pieces: &[(PieceKind, usize)]) -> Problem {
    let size = Size::new(rows, columns).expect("fixture board size must be positive");
    pieces
        .iter()
        .fold(Problem::builder(size), |builder, &(kind, amount)| {
            builder.add_pieces(kind, amount)
        })
        .build()
}
