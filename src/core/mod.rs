// Core value types shared by every other module

pub mod bitboard;
pub mod macros;
pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{MoveDescriptor, MoveList, MoveType};
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
pub use types::{Castling, Colour, Direction, SquareAddError};
