use crate::core::*;

/******************************************\
|==========================================|
|             Board Occupancy              |
|==========================================|
\******************************************/

/// # Board occupancy
///
/// Twelve bitboards, one per colour and piece type. Within a colour the six
/// bitboards are pairwise disjoint on any board built through [`add_piece`]
/// on empty squares and [`apply`].
///
/// Values are cheap to copy; applying a move returns a new occupancy and never
/// touches the original.
///
/// [`add_piece`]: BoardOccupancy::add_piece
/// [`apply`]: BoardOccupancy::apply
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardOccupancy {
    pieces: [[Bitboard; PieceType::NUM]; Colour::NUM],
}

impl BoardOccupancy {
    #[inline]
    pub const fn pieces(&self, col: Colour, pt: PieceType) -> Bitboard {
        self.pieces[col.index()][pt.index()]
    }

    /// Every square holding a piece of `col`
    #[inline]
    pub fn colour(&self, col: Colour) -> Bitboard {
        self.pieces[col.index()].iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn all(&self) -> Bitboard {
        self.colour(Colour::White) | self.colour(Colour::Black)
    }

    /// Both colours' pieces of type `pt`
    #[inline]
    pub const fn piece_type(&self, pt: PieceType) -> Bitboard {
        Bitboard(self.pieces(Colour::White, pt).0 | self.pieces(Colour::Black, pt).0)
    }

    /// The piece on `sq`. When several bitboards claim the square the first in
    /// `Piece` order wins.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        Piece::iter().find(|piece| self.pieces(piece.colour(), piece.pt()).contains(sq))
    }

    /// Square of `col`'s king, the lowest one if there are several
    #[inline]
    pub fn king_square(&self, col: Colour) -> Option<Square> {
        self.pieces(col, PieceType::King).lsb()
    }

    /// Places `piece` on `sq` without clearing whatever is already there
    #[inline]
    pub fn add_piece(&mut self, piece: Piece, sq: Square) {
        self.pieces[piece.colour().index()][piece.pt().index()].set(sq);
    }

    /// Clears `sq` in every bitboard
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) {
        self.pieces
            .iter_mut()
            .flatten()
            .for_each(|bb| bb.clear(sq));
    }

    /// Squares holding more than one piece
    pub fn overlaps(&self) -> Bitboard {
        let mut seen = Bitboard::EMPTY;
        let mut twice = Bitboard::EMPTY;
        for &bb in self.pieces.iter().flatten() {
            twice |= seen & bb;
            seen |= bb;
        }
        twice
    }

    /// # Apply
    ///
    /// Position after `stm` plays `mv`, as a new value:
    ///
    /// - anything on the destination is captured
    /// - a promotion replaces the pawn by the promotion piece
    /// - an en-passant capture also removes the pawn behind the destination
    /// - castling moves the king and relocates the rook on that side to the
    ///   square the king passed over
    ///
    /// An empty source square leaves the occupancy unchanged.
    pub fn apply(&self, stm: Colour, mv: MoveDescriptor) -> BoardOccupancy {
        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = self.piece_on(from) else {
            return *self;
        };

        let mut next = *self;
        next.remove_piece(from);
        next.remove_piece(to);

        match mv.kind() {
            MoveType::Normal => next.add_piece(piece, to),

            MoveType::Promotion => {
                let pt = mv.promotion_piece().unwrap_or(piece.pt());
                next.add_piece(Piece::from_parts(stm, pt), to);
            }

            MoveType::EnPassant => {
                next.add_piece(piece, to);
                if let Ok(captured) = to.add((!stm).forward()) {
                    next.remove_piece(captured);
                }
            }

            MoveType::Castle => {
                next.add_piece(piece, to);
                if let Some((rook_from, rook_to)) = castle_rook_squares(from, to) {
                    let rook = Piece::from_parts(stm, PieceType::Rook);
                    if self.pieces(stm, PieceType::Rook).contains(rook_from) {
                        next.remove_piece(rook_from);
                        next.add_piece(rook, rook_to);
                    }
                }
            }
        }

        next
    }
}

/// Rook source and destination for a king moving `from` -> `to` along its rank:
/// the corner on the side the king moves towards, landing on the square the
/// king crossed. `None` if the king does not move sideways.
pub fn castle_rook_squares(from: Square, to: Square) -> Option<(Square, Square)> {
    let rank = from.rank();
    if to.rank() != rank || to == from {
        return None;
    }

    if to.file() > from.file() {
        Some((Square::from_parts(File::FileH, rank), to.add(Direction::W).ok()?))
    } else {
        Some((Square::from_parts(File::FileA, rank), to.add(Direction::E).ok()?))
    }
}
