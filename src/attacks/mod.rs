//! Attack generation: fixed leaper patterns, slider masks, blocker
//! enumeration and the magic tables built from them.

pub mod blockers;
pub mod leapers;
pub mod magic;
pub mod mask;
pub mod table;

pub use blockers::{BlockerEntry, blocker_permutations};
pub use leapers::{king_attack, knight_attack, pawn_attack};
pub use magic::{MagicConfig, MagicEntry, MagicError};
pub use mask::{attack_mask, attacks_on_the_fly};
pub use table::AttackTables;

/// One table build shared by every unit test in the crate
#[cfg(test)]
pub(crate) static TEST_TABLES: std::sync::LazyLock<std::sync::Arc<AttackTables>> =
    std::sync::LazyLock::new(|| {
        std::sync::Arc::new(AttackTables::new().expect("default magic search succeeds"))
    });
