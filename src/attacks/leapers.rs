use crate::core::{Bitboard, Colour, Direction, PieceType, Square};

/******************************************\
|==========================================|
|              Leaper Tables               |
|==========================================|
\******************************************/

type LeaperTable = [Bitboard; Square::NUM];

/// Pawn captures, indexed by `[Colour][Square]`
const PAWN_ATTACKS: [LeaperTable; Colour::NUM] = [
    init_leaper_table(&Colour::White.pawn_captures()),
    init_leaper_table(&Colour::Black.pawn_captures()),
];

const KNIGHT_ATTACKS: LeaperTable = init_leaper_table(&Direction::KNIGHT);

const KING_ATTACKS: LeaperTable = init_leaper_table(&Direction::KING);

/// One step in each of `dirs` from every square, dropping steps that leave the
/// board or wrap around a file edge
const fn init_leaper_table(dirs: &[Direction]) -> LeaperTable {
    let mut table = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let from = unsafe { Square::from_unchecked(i as u8) };

        let mut j = 0;
        while j < dirs.len() {
            if let Ok(to) = from.add(dirs[j]) {
                table[i].set(to);
            }
            j += 1;
        }

        i += 1;
    }

    table
}

/******************************************\
|==========================================|
|                 Lookups                  |
|==========================================|
\******************************************/

/// Squares a pawn of `col` on `sq` captures on
#[inline]
pub const fn pawn_attack(col: Colour, sq: Square) -> Bitboard {
    PAWN_ATTACKS[col.index()][sq.index()]
}

#[inline]
pub const fn knight_attack(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub const fn king_attack(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Fixed pattern of a non-sliding piece. Sliders have no fixed pattern and get
/// an empty board.
#[inline]
pub const fn leaper_attack(pt: PieceType, col: Colour, sq: Square) -> Bitboard {
    match pt {
        PieceType::Pawn => pawn_attack(col, sq),
        PieceType::Knight => knight_attack(sq),
        PieceType::King => king_attack(sq),
        _ => Bitboard::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attack_counts() {
        assert_eq!(knight_attack(Square::A1), Bitboard::from([Square::B3, Square::C2]));
        assert_eq!(knight_attack(Square::H8).count_bits(), 2);
        assert_eq!(knight_attack(Square::B1).count_bits(), 3);
        assert_eq!(knight_attack(Square::G7).count_bits(), 4);
        assert_eq!(knight_attack(Square::E4).count_bits(), 8);

        let total: u32 = Square::iter().map(|sq| knight_attack(sq).count_bits()).sum();
        assert_eq!(total, 336);
    }

    #[test]
    fn test_king_attack_counts() {
        assert_eq!(king_attack(Square::A1), Bitboard::from([Square::A2, Square::B1, Square::B2]));
        assert_eq!(king_attack(Square::H5).count_bits(), 5);
        assert_eq!(king_attack(Square::D4).count_bits(), 8);

        let total: u32 = Square::iter().map(|sq| king_attack(sq).count_bits()).sum();
        assert_eq!(total, 420);
    }

    #[test]
    fn test_pawn_attack_no_wrap() {
        assert_eq!(pawn_attack(Colour::White, Square::A2), Square::B3.bb());
        assert_eq!(pawn_attack(Colour::White, Square::H2), Square::G3.bb());
        assert_eq!(pawn_attack(Colour::Black, Square::H7), Square::G6.bb());
        assert_eq!(pawn_attack(Colour::Black, Square::E5), Bitboard::from([Square::D4, Square::F4]));
        assert_eq!(pawn_attack(Colour::White, Square::C8), Bitboard::EMPTY);
        assert_eq!(pawn_attack(Colour::Black, Square::C1), Bitboard::EMPTY);
    }

    #[test]
    fn test_leaper_attack_dispatch() {
        assert_eq!(leaper_attack(PieceType::Knight, Colour::Black, Square::E4), knight_attack(Square::E4));
        assert_eq!(leaper_attack(PieceType::Pawn, Colour::Black, Square::E4), pawn_attack(Colour::Black, Square::E4));
        assert_eq!(leaper_attack(PieceType::Rook, Colour::White, Square::E4), Bitboard::EMPTY);
    }
}
