use std::time::Instant;

use log::{debug, error, info};
use thiserror::Error;

use super::blockers::{BlockerEntry, blocker_permutations};
use super::mask::attack_mask;
use crate::core::{Bitboard, PieceType, Square};
use crate::utils::PRNG;

/******************************************\
|==========================================|
|               Magic Config               |
|==========================================|
\******************************************/

/// # Magic search configuration
///
/// - `seed`: seeds the generator every per-square key search derives from
/// - `index_bits`: table size exponent; each square gets `2^index_bits` slots
///   and the hash shift is `64 - index_bits`
/// - `max_attempts`: candidate keys drawn per square before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicConfig {
    seed: u64,
    index_bits: u32,
    max_attempts: u64,
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self {
            seed: PRNG::DEFAULT_SEED,
            index_bits: 12,
            max_attempts: 100_000_000,
        }
    }
}

impl MagicConfig {
    pub const fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub const fn with_max_attempts(self, max_attempts: u64) -> Self {
        Self { max_attempts, ..self }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    pub const fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// Right shift applied to the hashed occupancy
    pub const fn shift(&self) -> u32 {
        64 - self.index_bits
    }
}

/******************************************\
|==========================================|
|               Magic Errors               |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicError {
    #[error("No collision-free magic key for {piece:?} on {square} after {attempts} attempts")]
    Exhausted {
        piece: PieceType,
        square: Square,
        attempts: u64,
    },
}

/******************************************\
|==========================================|
|               Magic Entry                |
|==========================================|
\******************************************/

/// # Magic entry
///
/// Key and attack table of one slider on one square. The attack for a board
/// occupancy lives at `((occ & mask) * key) >> shift`.
#[derive(Debug, Clone)]
pub struct MagicEntry {
    key: u64,
    mask: Bitboard,
    shift: u32,
    attacks: Box<[Bitboard]>,
}

impl MagicEntry {
    /// Slot of `occ` in the attack table. Bits outside the mask are dropped first.
    #[inline]
    pub const fn index(&self, occ: Bitboard) -> usize {
        hash(occ.0 & self.mask.0, self.key, self.shift)
    }

    #[inline]
    pub fn attacks(&self, occ: Bitboard) -> Bitboard {
        self.attacks[self.index(occ)]
    }

    pub const fn key(&self) -> u64 {
        self.key
    }

    pub const fn mask(&self) -> Bitboard {
        self.mask
    }

    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// True if every entry hashes to a slot holding its own attack set
    pub fn verify(&self, entries: &[BlockerEntry]) -> bool {
        entries.iter().all(|e| self.attacks(e.occupancy) == e.attacks)
    }
}

#[inline]
const fn hash(masked_occ: u64, key: u64, shift: u32) -> usize {
    (masked_occ.wrapping_mul(key) >> shift) as usize
}

/******************************************\
|==========================================|
|              Magic Search                |
|==========================================|
\******************************************/

/// # Find a magic key
///
/// Draws sparse candidate keys from `rng` until one sends every blocker entry
/// to a slot that is either unused or already holds the same attack set. Keys
/// whose top byte of `key * mask` has fewer than 6 bits are skipped without a
/// full check, they almost never hash well.
///
/// The scratch table is never cleared between candidates: `epoch[slot]` records
/// the attempt that last wrote the slot, and any older value counts as empty.
pub fn find_magic(
    pt: PieceType,
    sq: Square,
    entries: &[BlockerEntry],
    config: &MagicConfig,
    rng: &mut PRNG,
) -> Result<(MagicEntry, u64), MagicError> {
    let mask = attack_mask(pt, sq);
    let shift = config.shift();
    let size = 1usize << config.index_bits();

    let mut scratch = vec![Bitboard::EMPTY; size];
    let mut epoch = vec![0u64; size];

    for attempt in 1..=config.max_attempts() {
        let key = rng.random_sparse_u64();

        if (mask.0.wrapping_mul(key) >> 56).count_ones() < 6 {
            continue;
        }

        let fits = entries.iter().all(|entry| {
            let slot = hash(entry.occupancy.0, key, shift);
            if epoch[slot] < attempt {
                epoch[slot] = attempt;
                scratch[slot] = entry.attacks;
                true
            } else {
                scratch[slot] == entry.attacks
            }
        });

        if fits {
            let mut attacks = vec![Bitboard::EMPTY; size].into_boxed_slice();
            for entry in entries {
                attacks[hash(entry.occupancy.0, key, shift)] = entry.attacks;
            }

            return Ok((MagicEntry { key, mask, shift, attacks }, attempt));
        }
    }

    error!(
        "magic search for {pt:?} on {sq} exhausted after {} attempts",
        config.max_attempts()
    );
    Err(MagicError::Exhausted {
        piece: pt,
        square: sq,
        attempts: config.max_attempts(),
    })
}

/// Magic entries for every square of one slider, indexed by square
pub fn build_slider_table(pt: PieceType, config: &MagicConfig) -> Result<Vec<MagicEntry>, MagicError> {
    let start = Instant::now();
    let mut seeder = PRNG::new(config.seed() ^ pt as u64);
    let mut total_attempts = 0;

    let table = Square::iter()
        .map(|sq| {
            let entries = blocker_permutations(pt, sq);
            let mut rng = PRNG::new(seeder.random_u64());
            let (entry, attempts) = find_magic(pt, sq, &entries, config, &mut rng)?;

            debug!("{pt:?} {sq}: key {:#018x} after {attempts} attempts", entry.key);
            total_attempts += attempts;
            Ok(entry)
        })
        .collect::<Result<Vec<_>, MagicError>>()?;

    info!(
        "{pt:?} magic table built: {total_attempts} attempts in {}ms",
        start.elapsed().as_millis()
    );

    Ok(table)
}
