//! Legality checks. Move rules run as ordered chains that stop at the first
//! failure; board rules all run and accumulate flags.

pub mod board_rules;
pub mod errors;
pub mod move_rules;

pub use board_rules::{BOARD_RULES, BoardRule, resolve_overlaps};
pub use errors::{BoardErrors, MoveError};
pub use move_rules::{MoveContext, MoveRule, reach_set, rules_for};

use std::sync::Arc;

use crate::attacks::{AttackTables, pawn_attack};
use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|                Validator                 |
|==========================================|
\******************************************/

/// # Validator
///
/// Validates moves and positions against a shared, immutable set of attack
/// tables. Every method is a pure function of its arguments, so one validator
/// (or clones of it) can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Validator {
    tables: Arc<AttackTables>,
}

impl Validator {
    pub fn new(tables: Arc<AttackTables>) -> Self {
        Self { tables }
    }

    #[inline]
    pub fn tables(&self) -> &AttackTables {
        &self.tables
    }

    /// # Validate move
    ///
    /// Runs the rule chain for the move's type against `board`. The post-move
    /// occupancy is computed once up front; `board` itself is never changed.
    pub fn validate_move(&self, board: &Board, mv: MoveDescriptor) -> Result<(), MoveError> {
        let ctx = MoveContext::new(&self.tables, board, mv);
        rules_for(mv.kind()).iter().try_for_each(|rule| rule(&ctx))
    }

    /// # Validate board
    ///
    /// Runs every board rule, ORs the flags together and resolves the
    /// overlapping ones. [`BoardErrors::NONE`] means the position is sane.
    pub fn validate_board(&self, board: &Board) -> BoardErrors {
        let raw = BOARD_RULES
            .iter()
            .fold(BoardErrors::NONE, |acc, rule| acc | rule(&self.tables, board));

        resolve_overlaps(raw)
    }

    /// Whether `col`'s king is attacked. A board without such a king is never
    /// in check.
    pub fn is_in_check(&self, board: &Board, col: Colour) -> bool {
        let occ = board.occupancy();
        occ.king_square(col)
            .is_some_and(|king| self.tables.is_square_attacked_by(king, !col, occ, None))
    }

    /// # Legal moves
    ///
    /// Every legal move for the side to move. Candidates are taken from each
    /// piece's reach set, plus pawn promotions, the en-passant capture and both
    /// castles, and only those passing [`Validator::validate_move`] are kept.
    pub fn legal_moves(&self, board: &Board) -> MoveList {
        let mut candidates = MoveList::new();
        let stm = board.stm();
        let occ = board.occupancy();
        let last_rank = Rank::Rank8.relative(stm);

        for pt in PieceType::iter() {
            let piece = Piece::from_parts(stm, pt);

            occ.pieces(stm, pt).for_each(|from| {
                let reach = reach_set(&self.tables, occ, piece, from) & !occ.colour(stm);

                reach.for_each(|to| match pt == PieceType::Pawn && to.rank() == last_rank {
                    true => candidates.extend(
                        PieceType::PROMOTIONS
                            .iter()
                            .map(|&promo| MoveDescriptor::promotion(from, to, promo)),
                    ),
                    false => candidates.push(MoveDescriptor::new(from, to, MoveType::Normal)),
                });
            });
        }

        if let Some(ep) = board.enpassant() {
            let pawns = occ.pieces(stm, PieceType::Pawn);
            // pawns that could capture onto ep stand where an enemy pawn on ep would attack
            (pawn_attack(!stm, ep) & pawns)
                .for_each(|from| candidates.push(MoveDescriptor::new(from, ep, MoveType::EnPassant)));
        }

        if let Some(king) = occ.king_square(stm) {
            for to in [Square::G1, Square::C1] {
                candidates.push(MoveDescriptor::new(king, to.relative(stm), MoveType::Castle));
            }
        }

        candidates.retain(|&mv| self.validate_move(board, mv).is_ok());
        candidates
    }
}
