use super::leapers::{king_attack, knight_attack, leaper_attack, pawn_attack};
use super::magic::{MagicConfig, MagicEntry, MagicError, build_slider_table};
use crate::board::BoardOccupancy;
use crate::core::{Bitboard, Colour, PieceType, Square};

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

/// # Attack tables
///
/// Magic tables for bishops and rooks, built once and then read-only. Queens
/// are answered as bishop | rook; pawns, knights and kings come from fixed
/// patterns. Share one instance through an `Arc` instead of rebuilding.
#[derive(Debug)]
pub struct AttackTables {
    bishop: Box<[MagicEntry]>,
    rook: Box<[MagicEntry]>,
    config: MagicConfig,
}

impl AttackTables {
    /// Builds the tables with [`MagicConfig::default`]
    pub fn new() -> Result<Self, MagicError> {
        Self::with_config(&MagicConfig::default())
    }

    pub fn with_config(config: &MagicConfig) -> Result<Self, MagicError> {
        Ok(Self {
            bishop: build_slider_table(PieceType::Bishop, config)?.into_boxed_slice(),
            rook: build_slider_table(PieceType::Rook, config)?.into_boxed_slice(),
            config: *config,
        })
    }

    pub const fn config(&self) -> &MagicConfig {
        &self.config
    }

    /// Magic entry of a bishop or rook on `sq`; `None` for any other piece
    pub fn magic(&self, pt: PieceType, sq: Square) -> Option<&MagicEntry> {
        match pt {
            PieceType::Bishop => Some(&self.bishop[sq.index()]),
            PieceType::Rook => Some(&self.rook[sq.index()]),
            _ => None,
        }
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop[sq.index()].attacks(occ)
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.rook[sq.index()].attacks(occ)
    }

    /// # Attacks
    ///
    /// Squares a `col` piece of type `pt` on `sq` attacks given board occupancy
    /// `occ`. Only sliders look at `occ`; only pawns look at `col`.
    #[inline]
    pub fn attacks(&self, pt: PieceType, sq: Square, occ: Bitboard, col: Colour) -> Bitboard {
        match pt {
            PieceType::Bishop => self.bishop_attacks(sq, occ),
            PieceType::Rook => self.rook_attacks(sq, occ),
            PieceType::Queen => self.bishop_attacks(sq, occ) | self.rook_attacks(sq, occ),
            _ => leaper_attack(pt, col, sq),
        }
    }

    /// # Square attacked
    ///
    /// Whether any `attacker` piece attacks `sq`. Each piece type is probed from
    /// `sq` itself: a knight on `sq` reaches exactly the squares a knight
    /// attacking `sq` can stand on, and a pawn of the defending colour on `sq`
    /// captures towards exactly the squares an attacking pawn would stand on.
    ///
    /// `ep` is the en-passant target square. When given and `sq` holds the pawn
    /// that just double-pushed past it, an attacker pawn able to capture onto
    /// `ep` also counts. Plain check detection passes `None`.
    pub fn is_square_attacked_by(
        &self,
        sq: Square,
        attacker: Colour,
        occ: &BoardOccupancy,
        ep: Option<Square>,
    ) -> bool {
        let all = occ.all();
        let queens = occ.pieces(attacker, PieceType::Queen);

        let pawn_hit = pawn_attack(!attacker, sq) & occ.pieces(attacker, PieceType::Pawn);
        let knight_hit = knight_attack(sq) & occ.pieces(attacker, PieceType::Knight);
        let king_hit = king_attack(sq) & occ.pieces(attacker, PieceType::King);
        let diag_hit = self.bishop_attacks(sq, all) & (occ.pieces(attacker, PieceType::Bishop) | queens);
        let line_hit = self.rook_attacks(sq, all) & (occ.pieces(attacker, PieceType::Rook) | queens);

        if (pawn_hit | knight_hit | king_hit | diag_hit | line_hit).is_occupied() {
            return true;
        }

        ep.is_some_and(|ep| {
            ep.add((!attacker).forward()).is_ok_and(|double_pushed| double_pushed == sq)
                && (pawn_attack(!attacker, ep) & occ.pieces(attacker, PieceType::Pawn)).is_occupied()
        })
    }

    /// Bitboard of every square `col` attacks
    pub fn attacked_by(&self, col: Colour, occ: &BoardOccupancy) -> Bitboard {
        let all = occ.all();
        PieceType::iter()
            .flat_map(|pt| occ.pieces(col, pt).iter().map(move |sq| (pt, sq)))
            .fold(Bitboard::EMPTY, |acc, (pt, sq)| acc | self.attacks(pt, sq, all, col))
    }
}
