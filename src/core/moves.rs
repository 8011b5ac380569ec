use std::fmt;

use crate::core::{PieceType, Square};

/******************************************\
|==========================================|
|                Move Type                 |
|==========================================|
\******************************************/

/// # Move type
///
/// Which family of rules a move is validated against.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal, Promotion, EnPassant, Castle,
}

impl MoveType {
    pub const NUM: usize = 4;
}

crate::impl_enum_index!(MoveType);

/******************************************\
|==========================================|
|             Move Descriptor              |
|==========================================|
\******************************************/

/// # Move descriptor
///
/// Immutable packed move: source, destination, [`MoveType`] and an optional
/// promotion piece. Each field can be read independently and "changed" through
/// the `with_*` methods, which return a new descriptor.
///
/// Layout of the `u32`:
///
/// | bits  | field                                 |
/// |-------|---------------------------------------|
/// | 0-5   | source square                         |
/// | 6-11  | destination square                    |
/// | 12-13 | move type                             |
/// | 14-16 | promotion piece type + 1 (0 for none) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescriptor(u32);

impl MoveDescriptor {
    const FROM_SHIFT: u32 = 0;
    const TO_SHIFT: u32 = 6;
    const KIND_SHIFT: u32 = 12;
    const PROMO_SHIFT: u32 = 14;

    const SQUARE_MASK: u32 = 0x3F;
    const KIND_MASK: u32 = 0x3;
    const PROMO_MASK: u32 = 0x7;

    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveType) -> Self {
        Self(
            (from as u32) << Self::FROM_SHIFT
                | (to as u32) << Self::TO_SHIFT
                | (kind as u32) << Self::KIND_SHIFT,
        )
    }

    /// Promotion move to `piece`
    #[inline]
    pub const fn promotion(from: Square, to: Square, piece: PieceType) -> Self {
        Self::new(from, to, MoveType::Promotion).with_promotion(Some(piece))
    }

    #[inline]
    pub const fn from(&self) -> Square {
        unsafe { Square::from_unchecked((self.0 >> Self::FROM_SHIFT & Self::SQUARE_MASK) as u8) }
    }

    #[inline]
    pub const fn to(&self) -> Square {
        unsafe { Square::from_unchecked((self.0 >> Self::TO_SHIFT & Self::SQUARE_MASK) as u8) }
    }

    #[inline]
    pub const fn kind(&self) -> MoveType {
        unsafe { MoveType::from_unchecked((self.0 >> Self::KIND_SHIFT & Self::KIND_MASK) as u8) }
    }

    #[inline]
    pub const fn promotion_piece(&self) -> Option<PieceType> {
        match self.0 >> Self::PROMO_SHIFT & Self::PROMO_MASK {
            0 => None,
            n => Some(unsafe { PieceType::from_unchecked(n as u8 - 1) }),
        }
    }

    pub const fn with_from(self, from: Square) -> Self {
        Self(self.0 & !(Self::SQUARE_MASK << Self::FROM_SHIFT) | (from as u32) << Self::FROM_SHIFT)
    }

    pub const fn with_to(self, to: Square) -> Self {
        Self(self.0 & !(Self::SQUARE_MASK << Self::TO_SHIFT) | (to as u32) << Self::TO_SHIFT)
    }

    pub const fn with_kind(self, kind: MoveType) -> Self {
        Self(self.0 & !(Self::KIND_MASK << Self::KIND_SHIFT) | (kind as u32) << Self::KIND_SHIFT)
    }

    pub const fn with_promotion(self, piece: Option<PieceType>) -> Self {
        let bits = match piece {
            Some(pt) => pt as u32 + 1,
            None => 0,
        };
        Self(self.0 & !(Self::PROMO_MASK << Self::PROMO_SHIFT) | bits << Self::PROMO_SHIFT)
    }

    /// Raw packed value
    pub const fn bits(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MoveDescriptor {
    /// Long algebraic notation, e.g. `e2e4` or `e7e8q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        match self.promotion_piece() {
            Some(pt) => write!(f, "{pt}"),
            None => Ok(()),
        }
    }
}

/******************************************\
|==========================================|
|                Move List                 |
|==========================================|
\******************************************/

/// Growable list of legal moves
pub type MoveList = Vec<MoveDescriptor>;

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
