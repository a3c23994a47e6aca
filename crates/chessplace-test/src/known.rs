//! Problems with a known number of solutions.

use chessplace_core::{PieceKind, Problem};

use crate::problems::mixed;

/// A problem description together with its solution count.
#[derive(Debug, Clone, Copy)]
pub struct KnownProblem {
    pub name: &'static str,
    pub rows: usize,
    pub columns: usize,
    pub pieces: &'static [(PieceKind, usize)],
    pub expected: u64,
}

impl KnownProblem {
    pub fn problem(&self) -> Problem {
        mixed(self.rows, self.columns, self.pieces)
    }
}

/// Problems small enough to solve in every test run.
pub const KNOWN_PROBLEMS: &[KnownProblem] = &[
    KnownProblem {
        name: "2x2 one queen",
        rows: 2,
        columns: 2,
        pieces: &[(PieceKind::Queen, 1)],
        expected: 4,
    },
    KnownProblem {
        name: "3x3 two kings one rook",
        rows: 3,
        columns: 3,
        pieces: &[(PieceKind::King, 2), (PieceKind::Rook, 1)],
        expected: 4,
    },
    KnownProblem {
        name: "4x4 four knights two rooks",
        rows: 4,
        columns: 4,
        pieces: &[(PieceKind::Knight, 4), (PieceKind::Rook, 2)],
        expected: 8,
    },
    KnownProblem {
        name: "4 queens",
        rows: 4,
        columns: 4,
        pieces: &[(PieceKind::Queen, 4)],
        expected: 2,
    },
    KnownProblem {
        name: "5 queens",
        rows: 5,
        columns: 5,
        pieces: &[(PieceKind::Queen, 5)],
        expected: 10,
    },
    KnownProblem {
        name: "6 queens",
        rows: 6,
        columns: 6,
        pieces: &[(PieceKind::Queen, 6)],
        expected: 4,
    },
    KnownProblem {
        name: "8 queens",
        rows: 8,
        columns: 8,
        pieces: &[(PieceKind::Queen, 8)],
        expected: 92,
    },
    KnownProblem {
        name: "3x5 one queen",
        rows: 3,
        columns: 5,
        pieces: &[(PieceKind::Queen, 1)],
        expected: 15,
    },
    KnownProblem {
        name: "2x2 too many pieces",
        rows: 2,
        columns: 2,
        pieces: &[(PieceKind::Knight, 5)],
        expected: 0,
    },
    KnownProblem {
        name: "3x3 no pieces",
        rows: 3,
        columns: 3,
        pieces: &[],
        expected: 0,
    },
];

/// Mixed pieces on a 7x7 board. Takes a while; run it explicitly.
pub const SEVEN_BY_SEVEN: KnownProblem = KnownProblem {
    name: "7x7 two kings three queens two bishops one knight",
    rows: 7,
    columns: 7,
    pieces: &[
        (PieceKind::King, 2),
        (PieceKind::Queen, 3),
        (PieceKind::Bishop, 2),
        (PieceKind::Knight, 1),
    ],
    expected: 169_464,
};
