use super::{File, Square};
use thiserror::Error;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour
///
/// Side of a piece or side to move.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub const NUM: usize = 2;
}

crate::impl_enum_index!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction
///
/// Index offsets on the 0..64 board: the eight ray directions, the eight knight
/// jumps and the pawn double push. Adding one to a square goes through
/// [`Square::add`], which refuses any offset that would wrap around a file edge.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SEE = -6, SWW = -10, SSE = -15, SSW = -17,
    NN = 16, SS = -16,
}

impl Direction {
    pub const ROOK: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];
    pub const BISHOP: [Direction; 4] = [Direction::NE, Direction::SE, Direction::SW, Direction::NW];
    pub const KING: [Direction; 8] = [
        Direction::N, Direction::NE, Direction::E, Direction::SE,
        Direction::S, Direction::SW, Direction::W, Direction::NW,
    ];
    pub const KNIGHT: [Direction; 8] = [
        Direction::NNE, Direction::NEE, Direction::SEE, Direction::SSE,
        Direction::SSW, Direction::SWW, Direction::NWW, Direction::NNW,
    ];
}

/******************************************\
|==========================================|
|                 Colour ops               |
|==========================================|
\******************************************/

impl Colour {
    /// Direction a pawn of this colour pushes
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }

    pub const fn double_forward(&self) -> Direction {
        match self {
            Colour::White => Direction::NN,
            Colour::Black => Direction::SS,
        }
    }

    /// The two diagonal directions a pawn of this colour captures in
    pub const fn pawn_captures(&self) -> [Direction; 2] {
        match self {
            Colour::White => [Direction::NW, Direction::NE],
            Colour::Black => [Direction::SW, Direction::SE],
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

/******************************************\
|==========================================|
|               Square Stepping            |
|==========================================|
\******************************************/

impl Square {
    /// Steps one `dir` offset away from the square.
    ///
    /// Fails when the target lies off the board, including offsets that would
    /// leave via the a- or h-file and reappear on the opposite side.
    #[inline]
    pub const fn add(self, dir: Direction) -> Result<Self, SquareAddError> {
        let file = self.file() as u8;

        use Direction::*;
        let stays_on_files = match dir {
            N | S | NN | SS => true,
            E | NE | SE | NNE | SSE => file < File::FileH as u8,
            W | NW | SW | NNW | SSW => file > File::FileA as u8,
            NEE | SEE => file < File::FileG as u8,
            NWW | SWW => file > File::FileB as u8,
        };

        let target = self as i16 + dir as i16;
        if !stays_on_files || target < 0 || target >= Square::NUM as i16 {
            return Err(SquareAddError::OutOfBounds);
        }

        Ok(unsafe { Square::from_unchecked(target as u8) })
    }
}

/******************************************\
|==========================================|
|                 Castling                 |
|==========================================|
\******************************************/

/// # Castling rights
///
/// Four independent rights packed into the low nibble:
/// `WK = 1`, `WQ = 2`, `BK = 4`, `BQ = 8`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castling(pub u8);

crate::impl_bitset_ops!(Castling, mask = Castling::ALL);

impl Default for Castling {
    fn default() -> Self {
        Castling::ALL
    }
}

impl Castling {
    pub const WK: Castling = Castling(1);
    pub const WQ: Castling = Castling(2);
    pub const BK: Castling = Castling(4);
    pub const BQ: Castling = Castling(8);

    pub const WHITE: Castling = Castling(3);
    pub const BLACK: Castling = Castling(12);

    pub const ALL: Castling = Castling(15);
    pub const NONE: Castling = Castling(0);

    /// True if any right in `right` is held
    pub const fn has(self, right: Castling) -> bool {
        self.0 & right.0 != 0
    }

    pub fn set(&mut self, right: Castling) {
        *self |= right;
    }

    pub fn remove(&mut self, right: Castling) {
        *self &= !right;
    }

    pub const fn king_side(colour: Colour) -> Self {
        match colour {
            Colour::White => Castling::WK,
            Colour::Black => Castling::BK,
        }
    }

    pub const fn queen_side(colour: Colour) -> Self {
        match colour {
            Colour::White => Castling::WQ,
            Colour::Black => Castling::BQ,
        }
    }
}

impl std::fmt::Display for Castling {
    /// `KQkq` style, `-` when no right is held
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Castling::NONE {
            return write!(f, "-");
        }

        [(Castling::WK, 'K'), (Castling::WQ, 'Q'), (Castling::BK, 'k'), (Castling::BQ, 'q')]
            .iter()
            .filter(|(right, _)| self.has(*right))
            .try_for_each(|(_, c)| write!(f, "{c}"))
    }
}

/******************************************\
|==========================================|
|             Square Add Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareAddError {
    #[error("Square operation resulted in an out-of-bounds position")]
    OutOfBounds,
}
