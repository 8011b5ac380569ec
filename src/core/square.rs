use super::types::Colour;
use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square
///
/// One of the 64 board squares. The discriminant is the bit index used by every
/// bitboard in the crate: `rank * 8 + file`, so A1 = 0, H1 = 7, A8 = 56, H8 = 63.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Number of squares on the board
    pub const NUM: usize = 64;
}

crate::impl_enum_index!(Square);

/******************************************\
|==========================================|
|              Ranks and Files             |
|==========================================|
\******************************************/

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    pub const NUM: usize = 8;
}

crate::impl_enum_index!(Rank);

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    pub const NUM: usize = 8;
}

crate::impl_enum_index!(File);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Builds a square from a raw index, returning `None` outside `0..64`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < Self::NUM as u8 {
            Some(unsafe { Self::from_unchecked(index) })
        } else {
            None
        }
    }

    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_unchecked((*self as u8) >> 3) }
    }

    pub const fn file(&self) -> File {
        unsafe { File::from_unchecked((*self as u8) & 0b111) }
    }

    /// Combines a file and a rank into a square
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        unsafe { Self::from_unchecked(((rank as u8) << 3) + file as u8) }
    }

    /// Mirrors the square vertically (A1 <-> A8)
    pub const fn flip_rank(&self) -> Self {
        unsafe { Self::from_unchecked((*self as u8) ^ Square::A8 as u8) }
    }

    /// The square seen from `col`'s side of the board. White squares are unchanged.
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::White => *self,
            Colour::Black => self.flip_rank(),
        }
    }
}

impl Rank {
    pub const fn flip(&self) -> Self {
        unsafe { Self::from_unchecked(7 - (*self as u8)) }
    }

    /// The rank seen from `col`'s side: `Rank2.relative(Black) == Rank7`
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::White => *self,
            Colour::Black => self.flip(),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl TryFrom<char> for File {
    type Error = ParseFileError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(unsafe { File::from_unchecked(c as u8 - b'a') }),
            _ => Err(ParseFileError::InvalidChar(c)),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseRankError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(unsafe { Rank::from_unchecked(c as u8 - b'1') }),
            _ => Err(ParseRankError::InvalidChar(c)),
        }
    }
}

/// The only char of `s`, or the char count when there is not exactly one
fn single_char(s: &str) -> Result<char, usize> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(s.chars().count()),
    }
}

impl std::str::FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        File::try_from(single_char(s).map_err(ParseFileError::InvalidLength)?)
    }
}

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::try_from(single_char(s).map_err(ParseRankError::InvalidLength)?)
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Algebraic coordinates such as `"e4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file = File::try_from(file).map_err(|_| ParseSquareError::InvalidFileChar(file))?;
        let rank = Rank::try_from(rank).map_err(|_| ParseSquareError::InvalidRankChar(rank))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("A file is a single character, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a file, expected a letter from 'a' to 'h'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("A rank is a single character, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a rank, expected a digit from '1' to '8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("A square is a file and a rank, got {0} characters")]
    InvalidLength(usize),
    #[error("'{0}' is not a file, expected a letter from 'a' to 'h'")]
    InvalidFileChar(char),
    #[error("'{0}' is not a rank, expected a digit from '1' to '8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout_is_rank_major() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A2.index(), 8);
        assert_eq!(Square::E4.index(), 3 * 8 + 4);
        assert_eq!(Square::H8.index(), 63);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Square::from_index(0), Some(Square::A1));
        assert_eq!(Square::from_index(28), Some(Square::E4));
        assert_eq!(Square::from_index(63), Some(Square::H8));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_parts_round_trip() {
        for sq in Square::iter() {
            assert_eq!(Square::from_parts(sq.file(), sq.rank()), sq);
        }
    }

    #[test]
    fn test_relative() {
        assert_eq!(Square::E2.relative(Colour::Black), Square::E7);
        assert_eq!(Square::E2.relative(Colour::White), Square::E2);
        assert_eq!(Rank::Rank5.relative(Colour::Black), Rank::Rank4);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>(), Ok(Square::A1));
        assert_eq!("h8".parse::<Square>(), Ok(Square::H8));
        assert_eq!("d6".parse::<Square>(), Ok(Square::D6));

        assert_eq!("e".parse::<Square>(), Err(ParseSquareError::InvalidLength(1)));
        assert_eq!("e4g".parse::<Square>(), Err(ParseSquareError::InvalidLength(3)));
        assert_eq!("z4".parse::<Square>(), Err(ParseSquareError::InvalidFileChar('z')));
        assert_eq!("a9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9')));
        assert_eq!("A1".parse::<Square>(), Err(ParseSquareError::InvalidFileChar('A')));
    }

    #[test]
    fn test_file_and_rank_from_str() {
        assert_eq!("c".parse::<File>(), Ok(File::FileC));
        assert_eq!("7".parse::<Rank>(), Ok(Rank::Rank7));
        assert_eq!("i".parse::<File>(), Err(ParseFileError::InvalidChar('i')));
        assert_eq!("0".parse::<Rank>(), Err(ParseRankError::InvalidChar('0')));
        assert_eq!("".parse::<File>(), Err(ParseFileError::InvalidLength(0)));
        assert_eq!("12".parse::<Rank>(), Err(ParseRankError::InvalidLength(2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::A8.to_string(), "a8");
    }
}
