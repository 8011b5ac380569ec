use std::time::Instant;

use crate::board::Board;
use crate::core::MoveDescriptor;
use crate::rules::Validator;

/// Number of leaf nodes `depth` plies below `board`
pub fn perft(validator: &Validator, board: &Board, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = validator.legal_moves(board);

    if depth == 1 {
        return moves.len();
    }

    moves
        .iter()
        .map(|&mv| perft(validator, &board.make_move(mv), depth - 1))
        .sum()
}

/// Leaf counts split by root move, in generation order
pub fn perft_divide(validator: &Validator, board: &Board, depth: usize) -> Vec<(MoveDescriptor, usize)> {
    validator
        .legal_moves(board)
        .into_iter()
        .map(|mv| {
            let nodes = match depth {
                0 | 1 => 1,
                _ => perft(validator, &board.make_move(mv), depth - 1),
            };
            (mv, nodes)
        })
        .collect()
}

#[rustfmt::skip]
pub const BENCH_LIST: &[(&str, usize, usize)] = &[
    ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 4, 197281),
    ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 3, 97862),
    ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 5, 674624),
    ("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1", 4, 422333),
    ("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8", 3, 62379),
    ("1k6/1b6/8/8/7R/8/8/4K2R b K - 0 1", 5, 1063513),
    ("3k4/3p4/8/K1P4r/8/8/8/8 b - - 0 1", 6, 1134888),
    ("8/8/1k6/2b5/2pP4/8/5K2/8 b - d3 0 1", 6, 1440467),
    ("5k2/8/8/8/8/8/8/4K2R w K - 0 1", 6, 661072),
    ("3k4/8/8/8/8/8/8/R3K3 w Q - 0 1", 6, 803711),
    ("2K2r2/4P3/8/8/8/8/8/3k4 w - - 0 1", 6, 3821001),
    ("4k3/1P6/8/8/8/8/K7/8 w - - 0 1", 6, 217342),
    ("8/P1k5/K7/8/8/8/8/8 w - - 0 1", 6, 92683),
    ("K1k5/8/P7/8/8/8/8/8 w - - 0 1", 6, 2217),
    ("8/k1P5/8/1K6/8/8/8/8 w - - 0 1", 7, 567584),
];

/// Runs the full [`BENCH_LIST`]
pub fn perft_bench(validator: &Validator) -> bool {
    perft_bench_list(validator, BENCH_LIST)
}

/// # Perft bench list
///
/// Runs every `(fen, depth, expected)` entry and logs node count, time and
/// speed per position. Returns whether every fen parsed and every count matched.
pub fn perft_bench_list(validator: &Validator, list: &[(&str, usize, usize)]) -> bool {
    let mut passed = true;

    for &(fen, depth, expected) in list {
        let board = match Board::from_fen(fen) {
            Ok(board) => board,
            Err(err) => {
                log::error!("bench fen {fen} rejected: {err}");
                passed = false;
                continue;
            }
        };

        let start = Instant::now();
        let nodes = perft(validator, &board, depth);
        let time = start.elapsed().as_millis().max(1);

        let status = if nodes == expected { "PASSED" } else { "FAILED" };
        passed &= nodes == expected;

        log::info!(
            "status: {status}, nodes: {nodes}, time: {time:4}ms, Knps: {:0.1}, fen: {fen}",
            nodes as f64 / time as f64
        );
    }

    passed
}
