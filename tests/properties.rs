//! Property-based tests using proptest.

mod common;

use chess_rules::utils::PRNG;
use chess_rules::*;
use proptest::prelude::*;

fn square_strategy() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|index| Square::from_index(index).expect("index below 64"))
}

fn attacker_strategy() -> impl Strategy<Value = PieceType> {
    prop_oneof![
        Just(PieceType::Pawn),
        Just(PieceType::Knight),
        Just(PieceType::Bishop),
        Just(PieceType::Rook),
        Just(PieceType::Queen),
        Just(PieceType::King),
    ]
}

fn colour_strategy() -> impl Strategy<Value = Colour> {
    prop_oneof![Just(Colour::White), Just(Colour::Black)]
}

fn move_type_strategy() -> impl Strategy<Value = MoveType> {
    prop_oneof![
        Just(MoveType::Normal),
        Just(MoveType::Promotion),
        Just(MoveType::EnPassant),
        Just(MoveType::Castle),
    ]
}

const POSITIONS: [&str; 4] = [
    chess_rules::board::START_FEN,
    chess_rules::board::KIWIPETE_FEN,
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbqkbnr/ppp1pppp/8/3pP3/8/5N2/PPPP1PPP/RNBQKB1R w KQkq d6 0 3",
];

proptest! {
    /// Property: a lone attacker on `from` attacks exactly the squares its
    /// movement rules reach, and nothing else is reported attacked
    #[test]
    fn prop_attack_symmetry(
        pt in attacker_strategy(),
        col in colour_strategy(),
        from in square_strategy(),
        blockers in any::<u64>(),
    ) {
        let tables = common::tables();

        let mut occ = BoardOccupancy::default();
        occ.add_piece(Piece::from_parts(col, pt), from);
        let mut others = Bitboard(blockers);
        others.clear(from);
        others.for_each(|sq| occ.add_piece(Piece::from_parts(!col, PieceType::Knight), sq));

        let reach = tables.attacks(pt, from, occ.all(), col);
        prop_assert_eq!(tables.attacked_by(col, &occ), reach);

        for sq in Square::iter() {
            prop_assert_eq!(tables.is_square_attacked_by(sq, col, &occ, None), reach.contains(sq));
        }
    }

    /// Property: validating the same move twice gives the same answer and
    /// leaves the board as it was
    #[test]
    fn prop_validation_is_pure(
        index in 0usize..POSITIONS.len(),
        from in square_strategy(),
        to in square_strategy(),
        kind in move_type_strategy(),
        promo in prop::option::of(attacker_strategy()),
    ) {
        let validator = common::validator();
        let board = Board::from_fen(POSITIONS[index]).expect("valid fen");
        let before = board;
        let candidate = MoveDescriptor::new(from, to, kind).with_promotion(promo);

        let first = validator.validate_move(&board, candidate);
        let second = validator.clone().validate_move(&board, candidate);

        prop_assert_eq!(first, second);
        prop_assert_eq!(board, before);
        prop_assert_eq!(first.is_ok(), validator.legal_moves(&board).contains(&candidate));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: playing random legal moves never produces a board that fails
    /// board validation
    #[test]
    fn prop_legal_play_keeps_board_sane(seed in any::<u64>(), plies in 1usize..=40) {
        let validator = common::validator();
        let mut rng = PRNG::new(seed);
        let mut board = Board::default();

        for _ in 0..plies {
            let moves = validator.legal_moves(&board);
            if moves.is_empty() {
                break;
            }

            let mv = moves[(rng.random_u64() % moves.len() as u64) as usize];
            board = board.make_move(mv);

            prop_assert_eq!(validator.validate_board(&board), BoardErrors::NONE, "{}", board.fen());
            prop_assert!(!validator.is_in_check(&board, !board.stm()));
        }
    }
}
