use super::BoardErrors;
use crate::attacks::AttackTables;
use crate::board::Board;
use crate::core::*;

/// A single independent sanity check on a position
pub type BoardRule = fn(&AttackTables, &Board) -> BoardErrors;

/// Every board rule. All of them run; their flags are OR-ed together.
pub const BOARD_RULES: &[BoardRule] = &[
    king_count,
    pawn_count,
    piece_count,
    pawns_on_back_rank,
    overlapping_pieces,
    opponent_in_check,
    castle_rights,
    enpassant_square,
];

/// # Resolve overlaps
///
/// Drops flags that only restate another raised flag:
/// - too many pawns already means too many pieces for that side, so
///   `TOO_MANY_PIECES` is cleared whenever `TOO_MANY_PAWNS` is raised
/// - with a missing or extra king there is no meaningful check, so
///   `OPPONENT_IN_CHECK` is cleared whenever `KING_COUNT` is raised
///
/// All other flags are reported as raised.
pub const fn resolve_overlaps(mut errors: BoardErrors) -> BoardErrors {
    if errors.contains(BoardErrors::TOO_MANY_PAWNS) && errors.contains(BoardErrors::TOO_MANY_PIECES) {
        errors = BoardErrors(errors.0 ^ BoardErrors::TOO_MANY_PIECES.0);
    }

    if errors.contains(BoardErrors::KING_COUNT) {
        errors = BoardErrors(errors.0 & !BoardErrors::OPPONENT_IN_CHECK.0);
    }

    errors
}

fn king_count(_: &AttackTables, board: &Board) -> BoardErrors {
    let occ = board.occupancy();
    let bad = Colour::iter().any(|col| occ.pieces(col, PieceType::King).count_bits() != 1);
    BoardErrors::when(bad, BoardErrors::KING_COUNT)
}

fn pawn_count(_: &AttackTables, board: &Board) -> BoardErrors {
    let occ = board.occupancy();
    let bad = Colour::iter().any(|col| occ.pieces(col, PieceType::Pawn).count_bits() > 8);
    BoardErrors::when(bad, BoardErrors::TOO_MANY_PAWNS)
}

fn piece_count(_: &AttackTables, board: &Board) -> BoardErrors {
    let occ = board.occupancy();
    let bad = Colour::iter().any(|col| occ.colour(col).count_bits() > 16);
    BoardErrors::when(bad, BoardErrors::TOO_MANY_PIECES)
}

fn pawns_on_back_rank(_: &AttackTables, board: &Board) -> BoardErrors {
    let pawns = board.occupancy().piece_type(PieceType::Pawn);
    BoardErrors::when((pawns & Bitboard::BACK_RANKS).is_occupied(), BoardErrors::PAWN_ON_BACK_RANK)
}

fn overlapping_pieces(_: &AttackTables, board: &Board) -> BoardErrors {
    BoardErrors::when(board.occupancy().overlaps().is_occupied(), BoardErrors::OVERLAPPING_PIECES)
}

fn opponent_in_check(tables: &AttackTables, board: &Board) -> BoardErrors {
    let occ = board.occupancy();
    let stm = board.stm();

    let in_check = occ
        .king_square(!stm)
        .is_some_and(|king| tables.is_square_attacked_by(king, stm, occ, None));

    BoardErrors::when(in_check, BoardErrors::OPPONENT_IN_CHECK)
}

fn castle_rights(_: &AttackTables, board: &Board) -> BoardErrors {
    let occ = board.occupancy();
    let rights = board.castling();

    let bad = Colour::iter().any(|col| {
        let king_home = occ.pieces(col, PieceType::King).contains(Square::E1.relative(col));
        let rooks = occ.pieces(col, PieceType::Rook);

        let king_side = rights.has(Castling::king_side(col))
            && !(king_home && rooks.contains(Square::H1.relative(col)));
        let queen_side = rights.has(Castling::queen_side(col))
            && !(king_home && rooks.contains(Square::A1.relative(col)));

        king_side || queen_side
    });

    BoardErrors::when(bad, BoardErrors::INVALID_CASTLE_RIGHTS)
}

/// The en-passant square must sit on the side to move's sixth rank, be empty,
/// have the double-pushed enemy pawn in front of it and an empty start square
/// behind it.
fn enpassant_square(_: &AttackTables, board: &Board) -> BoardErrors {
    let Some(ep) = board.enpassant() else {
        return BoardErrors::NONE;
    };

    let occ = board.occupancy();
    let stm = board.stm();
    let all = occ.all();

    let pushed = ep.add((!stm).forward());
    let start = ep.add(stm.forward());

    let valid = ep.rank() == Rank::Rank6.relative(stm)
        && !all.contains(ep)
        && pushed.is_ok_and(|sq| occ.pieces(!stm, PieceType::Pawn).contains(sq))
        && start.is_ok_and(|sq| !all.contains(sq));

    BoardErrors::when(!valid, BoardErrors::INVALID_EP_SQUARE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::TEST_TABLES as TABLES;

    fn errors(fen: &str) -> BoardErrors {
        let board = Board::from_fen(fen).expect("valid fen");
        let raw = BOARD_RULES
            .iter()
            .fold(BoardErrors::NONE, |acc, rule| acc | rule(&TABLES, &board));
        resolve_overlaps(raw)
    }

    #[test]
    fn test_sane_positions() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/ppp1pppp/8/3pP3/8/5N2/PPPP1PPP/RNBQKB1R w KQkq d6 0 3",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        ] {
            assert_eq!(errors(fen), BoardErrors::NONE, "{fen}");
        }
    }

    #[test]
    fn test_king_count() {
        assert_eq!(errors("8/8/8/8/8/8/8/4K3 w - - 0 1"), BoardErrors::KING_COUNT);
        assert_eq!(errors("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"), BoardErrors::KING_COUNT);
    }

    #[test]
    fn test_pawn_and_piece_counts() {
        // nine pawns: seventeen pieces, reported once
        let fen = "4k3/8/8/8/8/P7/PPPPPPPP/RNBQKBNR w - - 0 1";
        assert_eq!(errors(fen), BoardErrors::TOO_MANY_PAWNS);

        // seventeen pieces with eight pawns
        let fen = "4k3/8/8/8/8/N7/PPPPPPPP/RNBQKBNR w - - 0 1";
        assert_eq!(errors(fen), BoardErrors::TOO_MANY_PIECES);
    }

    #[test]
    fn test_pawn_on_back_rank() {
        assert_eq!(errors("P3k3/8/8/8/8/8/8/4K3 w - - 0 1"), BoardErrors::PAWN_ON_BACK_RANK);
        assert_eq!(errors("4k3/8/8/8/8/8/8/p3K3 w - - 0 1"), BoardErrors::PAWN_ON_BACK_RANK);
    }

    #[test]
    fn test_overlapping_pieces() {
        let mut occ = *Board::default().occupancy();
        occ.add_piece(Piece::BlackQueen, Square::E2);
        let board = Board::new(occ, Colour::White, Castling::ALL, None);

        let raw = BOARD_RULES
            .iter()
            .fold(BoardErrors::NONE, |acc, rule| acc | rule(&TABLES, &board));
        assert!(raw.contains(BoardErrors::OVERLAPPING_PIECES));
    }

    #[test]
    fn test_opponent_in_check() {
        assert_eq!(errors("4k3/8/8/8/8/8/8/4K2R b K - 0 1"), BoardErrors::NONE);
        assert_eq!(errors("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1"), BoardErrors::NONE);
        // black is in check with white to move
        assert_eq!(errors("4k3/8/8/8/8/8/8/4RK2 w - - 0 1"), BoardErrors::OPPONENT_IN_CHECK);
        assert_eq!(errors("4k3/8/8/8/8/8/8/4RK2 b - - 0 1"), BoardErrors::NONE);
        // no white king: only the count is reported
        assert_eq!(errors("4k3/8/8/8/8/8/8/4R3 w - - 0 1"), BoardErrors::KING_COUNT);
    }

    #[test]
    fn test_castle_rights() {
        assert_eq!(errors("4k3/8/8/8/8/8/8/4K3 w K - 0 1"), BoardErrors::INVALID_CASTLE_RIGHTS);
        assert_eq!(errors("4k3/8/8/8/8/8/8/R4K1R w Q - 0 1"), BoardErrors::INVALID_CASTLE_RIGHTS);
        assert_eq!(errors("r3k3/8/8/8/8/8/8/4K3 w q - 0 1"), BoardErrors::NONE);
        assert_eq!(errors("r3k3/8/8/8/8/8/8/4K3 w k - 0 1"), BoardErrors::INVALID_CASTLE_RIGHTS);
    }

    #[test]
    fn test_enpassant_square() {
        // no pawn in front of the ep square
        assert_eq!(
            errors("rnbqkbnr/ppp1pppp/8/3p4/8/5N2/PPPPPPPP/RNBQKB1R w KQkq e6 0 2"),
            BoardErrors::INVALID_EP_SQUARE
        );
        // ep square on the side to move's own side of the board
        assert_eq!(errors("4k3/8/8/8/4P3/8/8/4K3 w - e3 0 1"), BoardErrors::INVALID_EP_SQUARE);
        // start square occupied
        assert_eq!(errors("4k3/3p4/8/3p4/8/8/8/4K3 w - d6 0 1"), BoardErrors::INVALID_EP_SQUARE);
        assert_eq!(errors("4k3/8/8/3p4/8/8/8/4K3 w - d6 0 1"), BoardErrors::NONE);
    }

    #[test]
    fn test_flags_accumulate() {
        let fen = "P7/8/8/8/8/8/8/4K3 w K - 0 1";
        assert_eq!(
            errors(fen),
            BoardErrors::KING_COUNT | BoardErrors::PAWN_ON_BACK_RANK | BoardErrors::INVALID_CASTLE_RIGHTS
        );
    }
}
