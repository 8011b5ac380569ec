use super::mask::{attack_mask, attacks_on_the_fly};
use crate::core::{Bitboard, PieceType, Square};

/// One blocker configuration of a square's attack mask, with the attack set it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockerEntry {
    pub occupancy: Bitboard,
    pub attacks: Bitboard,
}

/// # Blocker permutations
///
/// Every subset of the attack mask of a `pt` on `sq`, paired with the ray-cast
/// attacks for that subset. The result has exactly `2^popcount(mask)` entries,
/// starting with the empty subset.
///
/// Subsets are walked with the carry-rippler step `occ = (occ - mask) & mask`,
/// which visits each subset once and wraps back to zero after the full mask.
pub fn blocker_permutations(pt: PieceType, sq: Square) -> Vec<BlockerEntry> {
    let mask = attack_mask(pt, sq);
    let mut entries = Vec::with_capacity(1 << mask.count_bits());

    let mut occ = Bitboard::EMPTY;
    loop {
        entries.push(BlockerEntry {
            occupancy: occ,
            attacks: attacks_on_the_fly(pt, sq, occ),
        });

        occ = Bitboard(occ.0.wrapping_sub(mask.0) & mask.0);
        if occ.is_empty() {
            break;
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_count_is_power_of_mask() {
        for sq in [Square::A1, Square::E4, Square::H5] {
            for pt in [PieceType::Bishop, PieceType::Rook] {
                let mask = attack_mask(pt, sq);
                assert_eq!(blocker_permutations(pt, sq).len(), 1 << mask.count_bits());
            }
        }
        assert_eq!(blocker_permutations(PieceType::Rook, Square::A1).len(), 4096);
        assert_eq!(blocker_permutations(PieceType::Bishop, Square::A1).len(), 64);
    }

    #[test]
    fn test_every_subset_once() {
        let entries = blocker_permutations(PieceType::Bishop, Square::D4);
        let mask = attack_mask(PieceType::Bishop, Square::D4);

        let mut seen: Vec<u64> = entries.iter().map(|e| e.occupancy.0).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), entries.len());
        assert!(entries.iter().all(|e| e.occupancy & !mask == Bitboard::EMPTY));
        assert_eq!(entries[0].occupancy, Bitboard::EMPTY);
    }

    #[test]
    fn test_same_subsets_as_indexed_distribution() {
        let mask = attack_mask(PieceType::Rook, Square::C6);
        let mut rippled: Vec<u64> = blocker_permutations(PieceType::Rook, Square::C6)
            .iter()
            .map(|e| e.occupancy.0)
            .collect();
        let mut indexed: Vec<u64> = (0..1 << mask.count_bits())
            .map(|i| Bitboard::from_index(i, mask).0)
            .collect();

        rippled.sort_unstable();
        indexed.sort_unstable();
        assert_eq!(rippled, indexed);
    }

    #[test]
    fn test_attacks_match_ray_cast() {
        for entry in blocker_permutations(PieceType::Rook, Square::E4) {
            assert_eq!(entry.attacks, attacks_on_the_fly(PieceType::Rook, Square::E4, entry.occupancy));
        }
        let empty = blocker_permutations(PieceType::Rook, Square::E4)[0];
        assert_eq!(empty.attacks.count_bits(), 14);
    }
}
