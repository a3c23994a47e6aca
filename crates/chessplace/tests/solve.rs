//! End-to-end solving through the facade.

use std::collections::HashSet;

use chessplace::prelude::*;
use chessplace_test::{mixed, n_queens, single_piece, KNOWN_PROBLEMS, SEVEN_BY_SEVEN};

#[test]
fn test_single_queen_counts_every_square() {
    for rows in 1..=4 {
        for columns in 1..=4 {
            let problem = single_piece(PieceKind::Queen, rows, columns);
            assert_eq!(
                chessplace::solve(&problem, 2).unwrap(),
                (rows * columns) as u64
            );
        }
    }
}

#[test]
fn test_n_queens() {
    for (n, expected) in [(4, 2), (5, 10), (6, 4), (8, 92)] {
        assert_eq!(chessplace::solve(&n_queens(n), 4).unwrap(), expected, "n = {}", n);
    }
}

#[test]
fn test_mixed_pieces() {
    let problem = mixed(4, 4, &[(PieceKind::Knight, 4), (PieceKind::Rook, 2)]);
    assert_eq!(chessplace::solve(&problem, 2).unwrap(), 8);

    let problem = mixed(3, 3, &[(PieceKind::King, 2), (PieceKind::Rook, 1)]);
    assert_eq!(chessplace::solve(&problem, 2).unwrap(), 4);
}

#[test]
fn test_degenerate_inputs() {
    let size = Size::new(3, 3).unwrap();
    assert_eq!(chessplace::solve(&Problem::builder(size).build(), 1).unwrap(), 0);

    let crowded = Problem::builder(size)
        .add_pieces(PieceKind::Knight, 10)
        .build();
    assert_eq!(chessplace::solve(&crowded, 1).unwrap(), 0);
    assert!(chessplace::solve_and_get(&crowded, 1).unwrap().is_empty());
}

#[test]
fn test_zero_workers_rejected() {
    let result = chessplace::solve(&n_queens(4), 0);
    assert_eq!(result, Err(ChessPlaceError::InvalidWorkerCount(0)));
    assert!(chessplace::solve_and_get(&n_queens(4), 0).is_err());
}

#[test]
fn test_solve_and_get_agrees_with_solve() {
    for fixture in KNOWN_PROBLEMS {
        let problem = fixture.problem();
        let count = chessplace::solve(&problem, 2).unwrap();
        let solutions = chessplace::solve_and_get(&problem, 2).unwrap();
        assert_eq!(solutions.len() as u64, count, "{}", fixture.name);
    }
}

#[test]
fn test_results_independent_of_worker_count() {
    for fixture in KNOWN_PROBLEMS {
        let problem = fixture.problem();
        let mut sets = Vec::new();
        for workers in [1, 2, 4] {
            let found: HashSet<Solution> = chessplace::solve_and_get(&problem, workers)
                .unwrap()
                .into_iter()
                .collect();
            assert_eq!(found.len() as u64, fixture.expected, "{}", fixture.name);
            sets.push(found);
        }
        assert!(sets.windows(2).all(|w| w[0] == w[1]), "{}", fixture.name);
    }
}

#[test]
fn test_no_permutation_duplicates() {
    let problem = mixed(4, 4, &[(PieceKind::Knight, 4), (PieceKind::Rook, 2)]);
    let solutions = chessplace::solve_and_get(&problem, 4).unwrap();
    let unique: HashSet<&Solution> = solutions.iter().collect();
    assert_eq!(unique.len(), solutions.len());
}

#[test]
fn test_solutions_are_peaceable() {
    let problem = mixed(5, 5, &[(PieceKind::Queen, 2), (PieceKind::Knight, 2)]);
    for solution in chessplace::solve_and_get(&problem, 2).unwrap() {
        let placements: Vec<(Position, PieceKind)> = solution.placements().collect();
        for &(position, kind) in &placements {
            let threat = kind.threat(position);
            for &(other, _) in &placements {
                if other != position {
                    assert!(threat.is_available(other.index()), "{}", solution);
                }
            }
        }
    }
}

#[test]
fn test_four_queens_rotation() {
    let solutions = chessplace::solve_and_get(&n_queens(4), 2).unwrap();
    assert_eq!(solutions.len(), 2);
    assert_ne!(solutions[0], solutions[1]);
    for solution in &solutions {
        assert_eq!(&solution.rotate90().unwrap(), solution);
    }
}

#[test]
#[ignore = "long-running"]
fn test_seven_by_seven() {
    let count = chessplace::solve(&SEVEN_BY_SEVEN.problem(), 4).unwrap();
    assert_eq!(count, SEVEN_BY_SEVEN.expected);
}
