use super::{Board, BoardOccupancy};
use crate::core::*;

/// Castling rights kept when a move starts or ends on each square. Moving the
/// king or a rook off its home square, or capturing on a rook's home square,
/// drops the matching rights.
const CASTLING_MASK: [Castling; Square::NUM] = {
    let mut mask = [Castling::ALL; Square::NUM];
    mask[Square::A1 as usize] = Castling(Castling::ALL.0 & !Castling::WQ.0);
    mask[Square::H1 as usize] = Castling(Castling::ALL.0 & !Castling::WK.0);
    mask[Square::E1 as usize] = Castling(Castling::ALL.0 & !Castling::WHITE.0);
    mask[Square::A8 as usize] = Castling(Castling::ALL.0 & !Castling::BQ.0);
    mask[Square::H8 as usize] = Castling(Castling::ALL.0 & !Castling::BK.0);
    mask[Square::E8 as usize] = Castling(Castling::ALL.0 & !Castling::BLACK.0);
    mask
};

impl Board {
    /// Occupancy after the side to move plays `mv`. The board is not changed.
    #[inline]
    pub fn apply_move(&self, mv: MoveDescriptor) -> BoardOccupancy {
        self.occupancy.apply(self.stm, mv)
    }

    /// # Make move
    ///
    /// Full successor position. Besides the new occupancy this flips the side
    /// to move, masks castling rights by the squares touched, records the
    /// en-passant square after a double pawn push and advances the counters.
    ///
    /// No legality checks happen here; validate the move first.
    pub fn make_move(&self, mv: MoveDescriptor) -> Board {
        let (from, to) = (mv.from(), mv.to());
        let moved = self.on(from).map(|piece| piece.pt());
        let is_pawn = moved == Some(PieceType::Pawn);
        let is_capture = self.on(to).is_some() || mv.kind() == MoveType::EnPassant;

        let double_push = is_pawn && (to as i8 - from as i8).abs() == Direction::NN as i8;
        let enpassant = match double_push {
            true => from.add(self.stm.forward()).ok(),
            false => None,
        };

        let fifty_move = match is_pawn || is_capture {
            true => 0,
            false => self.fifty_move.saturating_add(1),
        };

        Board {
            occupancy: self.apply_move(mv),
            stm: !self.stm,
            castling: self.castling & CASTLING_MASK[from.index()] & CASTLING_MASK[to.index()],
            enpassant,
            fifty_move,
            half_moves: self.half_moves.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{KIWIPETE_FEN, START_FEN};

    #[test]
    fn test_double_push_sets_en_passant() {
        let board = Board::default();
        let next = board.make_move(MoveDescriptor::new(Square::E2, Square::E4, MoveType::Normal));

        assert_eq!(next.enpassant(), Some(Square::E3));
        assert_eq!(next.stm(), Colour::Black);
        assert_eq!(next.fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");

        let reply = next.make_move(MoveDescriptor::new(Square::G8, Square::F6, MoveType::Normal));
        assert_eq!(reply.enpassant(), None);
        assert_eq!(reply.fifty_move(), 1);
        assert_eq!(reply.fen(), "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2");

        // original untouched
        assert_eq!(board.fen(), START_FEN);
    }

    #[test]
    fn test_castling_rights_masked() {
        let board = Board::from_fen(KIWIPETE_FEN).expect("valid fen");

        let king_move = board.make_move(MoveDescriptor::new(Square::E1, Square::D1, MoveType::Normal));
        assert_eq!(king_move.castling(), Castling::BLACK);

        let rook_move = board.make_move(MoveDescriptor::new(Square::H1, Square::G1, MoveType::Normal));
        assert_eq!(rook_move.castling(), Castling::WQ | Castling::BLACK);

        let castle = board.make_move(MoveDescriptor::new(Square::E1, Square::G1, MoveType::Castle));
        assert_eq!(castle.castling(), Castling::BLACK);
        assert_eq!(castle.on(Square::F1), Some(Piece::WhiteRook));
        assert_eq!(castle.on(Square::G1), Some(Piece::WhiteKing));
    }

    #[test]
    fn test_capture_on_rook_home_drops_right() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").expect("valid fen");
        let next = board.make_move(MoveDescriptor::new(Square::G2, Square::H1, MoveType::Normal));

        assert_eq!(next.castling(), Castling::WQ | Castling::BLACK);
        assert_eq!(next.fifty_move(), 0);
        assert_eq!(next.half_moves(), 2);
    }

    #[test]
    fn test_en_passant_capture_resets_clock() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 5 20").expect("valid fen");
        let next = board.make_move(MoveDescriptor::new(Square::E5, Square::D6, MoveType::EnPassant));

        assert_eq!(next.on(Square::D5), None);
        assert_eq!(next.on(Square::D6), Some(Piece::WhitePawn));
        assert_eq!(next.fifty_move(), 0);
        assert_eq!(next.enpassant(), None);
    }
}
