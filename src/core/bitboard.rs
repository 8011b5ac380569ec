use std::fmt;

use super::{Direction, File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// # Bitboard
///
/// A set of squares packed into a `u64`, bit `i` standing for the square with
/// index `i` (A1 is the least significant bit, H8 the most significant).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bitset_ops!(Bitboard);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00ff);
    pub const RANK_8: Bitboard = Bitboard(0xff00_0000_0000_0000);
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    /// Both back ranks, where no pawn may stand
    pub const BACK_RANKS: Bitboard = Bitboard(Self::RANK_1.0 | Self::RANK_8.0);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Singleton bitboard holding only this square
    pub const fn bb(&self) -> Bitboard {
        Bitboard(1 << *self as u8)
    }
}

impl Rank {
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_1.0 << (8 * *self as u8))
    }
}

impl File {
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        squares.into_iter().collect()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        iter.into_iter().for_each(|sq| bb.set(sq));
        bb
    }
}

/******************************************\
|==========================================|
|             Bit primitives               |
|==========================================|
\******************************************/

impl Bitboard {
    /// Lowest set square, `None` when empty
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Some(unsafe { Square::from_unchecked(bits.trailing_zeros() as u8) }),
        }
    }

    /// Removes the lowest set square and returns it
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        lsb
    }

    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & square.bb().0 != 0
    }

    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= square.bb().0;
    }

    #[inline]
    pub const fn clear(&mut self, square: Square) {
        self.0 &= !square.bb().0;
    }

    #[inline]
    pub const fn toggle(&mut self, square: Square) {
        self.0 ^= square.bb().0;
    }

    /// Calls `f` on every set square, lowest first
    #[inline]
    pub fn for_each<F: FnMut(Square)>(&self, f: F) {
        self.iter().for_each(f)
    }

    /// Iterates over the set squares, lowest first
    #[inline]
    pub const fn iter(&self) -> BitboardIter {
        BitboardIter(*self)
    }

    /// Spreads the low bits of `index` over the set bits of `mask`.
    ///
    /// Bit `k` of `index` decides whether the `k`-th lowest set bit of `mask`
    /// is kept, so `0..2^popcount(mask)` walks every subset of `mask` exactly once.
    pub fn from_index(index: usize, mask: Bitboard) -> Bitboard {
        mask.iter()
            .enumerate()
            .filter(|(bit, _)| index >> bit & 1 == 1)
            .map(|(_, sq)| sq)
            .collect()
    }

    /// Moves every square one step in `dir`; squares that would leave the
    /// board (or wrap across the a/h files) are dropped.
    #[inline]
    pub const fn shift(&self, dir: Direction) -> Bitboard {
        use Direction::*;

        let not_a = !Self::FILE_A.0;
        let not_h = !Self::FILE_H.0;
        let not_ab = not_a & !(Self::FILE_A.0 << 1);
        let not_gh = not_h & !(Self::FILE_H.0 >> 1);

        let keep = match dir {
            N | S | NN | SS => u64::MAX,
            E | NE | SE | NNE | SSE => not_h,
            W | NW | SW | NNW | SSW => not_a,
            NEE | SEE => not_gh,
            NWW | SWW => not_ab,
        };

        let bits = self.0 & keep;
        let offset = dir as i8;
        Bitboard(if offset >= 0 { bits << offset } else { bits >> -offset })
    }
}

/******************************************\
|==========================================|
|                 Iterator                 |
|==========================================|
\******************************************/

/// Iterator over the set squares of a [`Bitboard`]
#[derive(Debug, Clone)]
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_bits() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{SEPARATOR}")?;
        for rank in Rank::iter().rev() {
            write!(f, " {rank}   |")?;
            for file in File::iter() {
                let cell = if self.contains(Square::from_parts(file, rank)) { 'X' } else { ' ' };
                write!(f, " {cell} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        writeln!(f, "       a   b   c   d   e   f   g   h")?;
        write!(f, "Bitboard: {:#018x}", self.0)
    }
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
    fn test_set_clear_toggle() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::E4);
        assert!(bb.contains(Square::E4));
        assert_eq!(bb.0, 1 << 28);

        bb.toggle(Square::A1);
        assert_eq!(bb.count_bits(), 2);
        bb.clear(Square::E4);
        assert_eq!(bb, Square::A1.bb());
        bb.toggle(Square::A1);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_pop_lsb_and_iter() {
        let mut bb = Bitboard::from([Square::H8, Square::B2, Square::D5]);
        assert_eq!(bb.iter().collect::<Vec<_>>(), vec![Square::B2, Square::D5, Square::H8]);
        assert_eq!(bb.iter().len(), 3);

        assert_eq!(bb.pop_lsb(), Some(Square::B2));
        assert_eq!(bb.pop_lsb(), Some(Square::D5));
        assert_eq!(bb.pop_lsb(), Some(Square::H8));
        assert_eq!(bb.pop_lsb(), None);
    }

    #[test]
    fn test_lsb() {
        assert_eq!((Square::C3.bb() | Square::H8.bb()).lsb(), Some(Square::C3));
        assert_eq!(Square::A1.bb().lsb(), Some(Square::A1));
        assert_eq!(Bitboard::EMPTY.lsb(), None);
    }

    #[test]
    fn test_from_index_enumerates_every_subset() {
        let mask = Bitboard::from([Square::B2, Square::C5, Square::G7, Square::H1]);
        let subsets: Vec<_> = (0..1 << mask.count_bits()).map(|i| Bitboard::from_index(i, mask)).collect();

        assert_eq!(subsets.len(), 16);
        for (i, subset) in subsets.iter().enumerate() {
            assert_eq!(*subset & !mask, Bitboard::EMPTY);
            assert!(!subsets[..i].contains(subset));
        }
        assert_eq!(subsets[15], mask);
    }

    #[test]
    fn test_from_index_picks_mask_bits_in_order() {
        let mask = Bitboard(0b1010_0100);
        assert_eq!(Bitboard::from_index(0b000, mask), Bitboard::EMPTY);
        assert_eq!(Bitboard::from_index(0b101, mask), Bitboard(0b1000_0100));
        assert_eq!(Bitboard::from_index(0b111, mask), mask);
    }

    #[test]
    fn test_shift_basic() {
        assert_eq!(Square::E4.bb().shift(Direction::N), Square::E5.bb());
        assert_eq!(Square::E4.bb().shift(Direction::SW), Square::D3.bb());
        assert_eq!(Square::E4.bb().shift(Direction::NWW), Square::C5.bb());
        assert_eq!(Square::E2.bb().shift(Direction::NN), Square::E4.bb());
    }

    #[test]
    fn test_shift_drops_wrapping_squares() {
        assert_eq!(Square::H4.bb().shift(Direction::E), Bitboard::EMPTY);
        assert_eq!(Square::A4.bb().shift(Direction::NW), Bitboard::EMPTY);
        assert_eq!(Square::G4.bb().shift(Direction::NEE), Bitboard::EMPTY);
        assert_eq!(Square::B4.bb().shift(Direction::SWW), Bitboard::EMPTY);
        assert_eq!(Square::E8.bb().shift(Direction::N), Bitboard::EMPTY);
        assert_eq!(Bitboard::FILE_H.shift(Direction::E), Bitboard::EMPTY);
    }

    #[test]
    fn test_shift_matches_square_add() {
        let dirs = Direction::KING.into_iter().chain(Direction::KNIGHT);
        for dir in dirs {
            for sq in Square::iter() {
                let expected = sq.add(dir).map_or(Bitboard::EMPTY, |to| to.bb());
                assert_eq!(sq.bb().shift(dir), expected, "{sq} {dir:?}");
            }
        }
    }
}
