use crate::core::{Bitboard, Direction, PieceType, Square};

/******************************************\
|==========================================|
|            Slider Directions             |
|==========================================|
\******************************************/

/// Ray directions of a sliding piece, empty for pawns, knights and kings
pub const fn slider_directions(pt: PieceType) -> &'static [Direction] {
    const QUEEN: [Direction; 8] = Direction::KING;

    match pt {
        PieceType::Bishop => &Direction::BISHOP,
        PieceType::Rook => &Direction::ROOK,
        PieceType::Queen => &QUEEN,
        _ => &[],
    }
}

/******************************************\
|==========================================|
|               Attack Masks               |
|==========================================|
\******************************************/

/// # Attack mask
///
/// Squares a slider on `sq` could reach on an empty board, minus the last
/// square of every ray. A piece on that last square blocks nothing further, so
/// it never changes the attack set and is left out of the blocker domain.
///
/// A rook on A1 yields A2..A7 and B1..G1 (12 squares); a rook on E4 yields
/// 10 squares since only the four ray ends are dropped.
pub const fn attack_mask(pt: PieceType, sq: Square) -> Bitboard {
    let dirs = slider_directions(pt);
    let mut mask = Bitboard::EMPTY;

    let mut i = 0;
    while i < dirs.len() {
        let mut to = sq;
        while let Ok(next) = to.add(dirs[i]) {
            // only keep `next` if the ray continues past it
            if next.add(dirs[i]).is_ok() {
                mask.set(next);
            }
            to = next;
        }
        i += 1;
    }

    mask
}

/******************************************\
|==========================================|
|            Attacks on the fly            |
|==========================================|
\******************************************/

/// # Attacks on the fly
///
/// Ray-cast attacks of a slider on `sq` given blockers `occ`. Each ray stops at
/// the first occupied square and includes it, since that piece can be captured.
/// This is the slow reference the magic tables are filled from and checked against.
pub const fn attacks_on_the_fly(pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
    let dirs = slider_directions(pt);
    let mut attacks = Bitboard::EMPTY;

    let mut i = 0;
    while i < dirs.len() {
        let mut to = sq;
        while let Ok(next) = to.add(dirs[i]) {
            attacks.set(next);
            if occ.contains(next) {
                break;
            }
            to = next;
        }
        i += 1;
    }

    attacks
}
