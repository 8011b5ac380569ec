pub mod fen;
pub mod movement;
pub mod occupancy;

pub use fen::{FenParseError, KIWIPETE_FEN, START_FEN};
pub use occupancy::{BoardOccupancy, castle_rook_squares};

use crate::core::*;

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board
///
/// A position snapshot: occupancy plus the game state the rules need (side to
/// move, castling rights, en-passant square and move counters). Boards are
/// values; playing a move with [`Board::make_move`] returns the successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    occupancy: BoardOccupancy,
    stm: Colour,
    castling: Castling,
    enpassant: Option<Square>,
    fifty_move: u8,
    half_moves: u16,
}

impl Board {
    /// Board from raw parts with zeroed move counters
    pub fn new(
        occupancy: BoardOccupancy,
        stm: Colour,
        castling: Castling,
        enpassant: Option<Square>,
    ) -> Self {
        Self {
            occupancy,
            stm,
            castling,
            enpassant,
            fifty_move: 0,
            half_moves: stm as u16,
        }
    }

    #[inline]
    pub const fn occupancy(&self) -> &BoardOccupancy {
        &self.occupancy
    }

    #[inline]
    pub const fn stm(&self) -> Colour {
        self.stm
    }

    #[inline]
    pub const fn castling(&self) -> Castling {
        self.castling
    }

    #[inline]
    pub const fn enpassant(&self) -> Option<Square> {
        self.enpassant
    }

    #[inline]
    pub const fn fifty_move(&self) -> u8 {
        self.fifty_move
    }

    /// Plies played since the start of the game
    #[inline]
    pub const fn half_moves(&self) -> u16 {
        self.half_moves
    }

    #[inline]
    pub fn on(&self, sq: Square) -> Option<Piece> {
        self.occupancy.piece_on(sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut occupancy = BoardOccupancy::default();
        let back_rank = [
            PieceType::Rook, PieceType::Knight, PieceType::Bishop, PieceType::Queen,
            PieceType::King, PieceType::Bishop, PieceType::Knight, PieceType::Rook,
        ];

        for (file, pt) in File::iter().zip(back_rank) {
            for col in Colour::iter() {
                let home = Rank::Rank1.relative(col);
                let pawns = Rank::Rank2.relative(col);
                occupancy.add_piece(Piece::from_parts(col, pt), Square::from_parts(file, home));
                occupancy.add_piece(Piece::from_parts(col, PieceType::Pawn), Square::from_parts(file, pawns));
            }
        }

        Board::new(occupancy, Colour::White, Castling::ALL, None)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{SEPARATOR}")?;
        for rank in Rank::iter().rev() {
            write!(f, " {rank}   |")?;
            for file in File::iter() {
                match self.on(Square::from_parts(file, rank)) {
                    Some(piece) => write!(f, " {piece} |")?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        writeln!(f, "       a   b   c   d   e   f   g   h")?;
        writeln!(f)?;
        write!(f, "FEN: {}", self.fen())
    }
}
