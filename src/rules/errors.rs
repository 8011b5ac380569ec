use thiserror::Error;

/******************************************\
|==========================================|
|               Move Errors                |
|==========================================|
\******************************************/

/// # Move error
///
/// Why a candidate move is illegal. A legal move is `Ok(())`, so there is no
/// "no error" variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    #[error("There is no piece on the source square")]
    NoPieceOnSource,
    #[error("The piece on the source square does not belong to the side to move")]
    NotActiveColour,
    #[error("The piece cannot reach the destination square")]
    IllegalPieceMovement,
    #[error("The destination square holds a piece of the side to move")]
    DestinationOccupied,
    #[error("A pawn reaching the last rank must be played as a promotion")]
    PromotionRequired,
    #[error("The source square does not hold a pawn of the side to move")]
    SourceNotPawn,
    #[error("Promotions must land on the last rank")]
    NotPromotionRank,
    #[error("Pawns may only promote to a knight, bishop, rook or queen")]
    InvalidPromotionPiece,
    #[error("Only a promotion move may name a promotion piece")]
    UnexpectedPromotion,
    #[error("The destination is not the en passant square")]
    EpNotAvailable,
    #[error("The capturing pawn is not on the en passant rank")]
    EpWrongRank,
    #[error("The capturing pawn does not attack the en passant square")]
    EpNotAttacked,
    #[error("The king is not on its home square or the destination is not a castling square")]
    InvalidCastleDestination,
    #[error("The castling right for this side is not available")]
    CastleRightUnavailable,
    #[error("Cannot castle out of check")]
    CastleWhileInCheck,
    #[error("A piece stands between the king and the rook")]
    CastlePathOccupied,
    #[error("The king passes through or lands on an attacked square")]
    CastlePathAttacked,
    #[error("The move leaves the king in check")]
    MoveLeavesKingInCheck,
}

/******************************************\
|==========================================|
|               Board Errors               |
|==========================================|
\******************************************/

/// # Board errors
///
/// Flags raised by board validation. Every rule contributes its flags and the
/// results are OR-ed together; [`BoardErrors::NONE`] means the board is sane.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardErrors(pub u16);

crate::impl_bitset_ops!(BoardErrors, mask = BoardErrors::ALL);

impl BoardErrors {
    pub const NONE: BoardErrors = BoardErrors(0);
    /// A side does not have exactly one king
    pub const KING_COUNT: BoardErrors = BoardErrors(1 << 0);
    /// A side has more than 8 pawns
    pub const TOO_MANY_PAWNS: BoardErrors = BoardErrors(1 << 1);
    /// A side has more than 16 pieces
    pub const TOO_MANY_PIECES: BoardErrors = BoardErrors(1 << 2);
    /// A pawn stands on the first or eighth rank
    pub const PAWN_ON_BACK_RANK: BoardErrors = BoardErrors(1 << 3);
    /// Two pieces share a square
    pub const OVERLAPPING_PIECES: BoardErrors = BoardErrors(1 << 4);
    /// The side that just moved is in check
    pub const OPPONENT_IN_CHECK: BoardErrors = BoardErrors(1 << 5);
    /// A castling right is held without king and rook on their home squares
    pub const INVALID_CASTLE_RIGHTS: BoardErrors = BoardErrors(1 << 6);
    /// The en-passant square does not follow a double pawn push
    pub const INVALID_EP_SQUARE: BoardErrors = BoardErrors(1 << 7);

    pub const ALL: BoardErrors = BoardErrors((1 << 8) - 1);

    const NAMES: [(BoardErrors, &'static str); 8] = [
        (Self::KING_COUNT, "KING_COUNT"),
        (Self::TOO_MANY_PAWNS, "TOO_MANY_PAWNS"),
        (Self::TOO_MANY_PIECES, "TOO_MANY_PIECES"),
        (Self::PAWN_ON_BACK_RANK, "PAWN_ON_BACK_RANK"),
        (Self::OVERLAPPING_PIECES, "OVERLAPPING_PIECES"),
        (Self::OPPONENT_IN_CHECK, "OPPONENT_IN_CHECK"),
        (Self::INVALID_CASTLE_RIGHTS, "INVALID_CASTLE_RIGHTS"),
        (Self::INVALID_EP_SQUARE, "INVALID_EP_SQUARE"),
    ];

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `flags` is raised
    #[inline]
    pub const fn contains(self, flags: BoardErrors) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// Flag if `cond` holds, otherwise nothing
    #[inline]
    pub const fn when(cond: bool, flag: BoardErrors) -> BoardErrors {
        if cond { flag } else { BoardErrors::NONE }
    }
}

impl std::fmt::Display for BoardErrors {
    /// Raised flags joined by `|`, or `NONE`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }

        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        write!(f, "{}", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_ops() {
        let errors = BoardErrors::KING_COUNT | BoardErrors::INVALID_EP_SQUARE;
        assert!(errors.contains(BoardErrors::KING_COUNT));
        assert!(!errors.contains(BoardErrors::KING_COUNT | BoardErrors::TOO_MANY_PAWNS));
        assert_eq!(errors & !BoardErrors::KING_COUNT, BoardErrors::INVALID_EP_SQUARE);
        assert_eq!(errors ^ errors, BoardErrors::NONE);
        assert_eq!(!BoardErrors::NONE, BoardErrors::ALL);
    }

    #[test]
    fn test_when() {
        assert_eq!(BoardErrors::when(true, BoardErrors::OVERLAPPING_PIECES), BoardErrors::OVERLAPPING_PIECES);
        assert_eq!(BoardErrors::when(false, BoardErrors::OVERLAPPING_PIECES), BoardErrors::NONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(BoardErrors::NONE.to_string(), "NONE");
        assert_eq!(
            (BoardErrors::PAWN_ON_BACK_RANK | BoardErrors::TOO_MANY_PAWNS).to_string(),
            "TOO_MANY_PAWNS | PAWN_ON_BACK_RANK"
        );
        assert_eq!(MoveError::EpNotAvailable.to_string(), "The destination is not the en passant square");
    }
}
