//! # Chess Rules
//!
//! Chess move legality on bitboards. Sliding-piece attacks come from magic
//! tables built once from a seeded search and shared through an
//! [`Arc<AttackTables>`](AttackTables); moves are checked by ordered rule
//! chains and positions by accumulating sanity flags.
pub mod attacks;
pub mod board;
pub mod core;
pub mod rules;
pub mod utils;

pub use attacks::{AttackTables, MagicConfig, MagicError};
pub use board::{Board, BoardOccupancy, FenParseError};
pub use crate::core::*;
pub use rules::{BoardErrors, MoveError, Validator};
