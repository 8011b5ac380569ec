use super::MoveError;
use crate::attacks::{AttackTables, pawn_attack};
use crate::board::{Board, BoardOccupancy};
use crate::core::*;

/******************************************\
|==========================================|
|               Rule Context               |
|==========================================|
\******************************************/

/// Inputs every move rule sees: the board before the move, the occupancy after
/// it (computed once per validation) and the move itself.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub tables: &'a AttackTables,
    pub board: &'a Board,
    pub after: BoardOccupancy,
    pub mv: MoveDescriptor,
}

impl<'a> MoveContext<'a> {
    pub fn new(tables: &'a AttackTables, board: &'a Board, mv: MoveDescriptor) -> Self {
        Self {
            tables,
            board,
            after: board.apply_move(mv),
            mv,
        }
    }

    #[inline]
    fn stm(&self) -> Colour {
        self.board.stm()
    }

    #[inline]
    fn moving_piece(&self) -> Result<Piece, MoveError> {
        self.board.on(self.mv.from()).ok_or(MoveError::NoPieceOnSource)
    }
}

/// A single independent check on a candidate move
pub type MoveRule = fn(&MoveContext) -> Result<(), MoveError>;

/******************************************\
|==========================================|
|               Rule Chains                |
|==========================================|
\******************************************/

const NORMAL_RULES: &[MoveRule] = &[
    no_promotion_piece,
    active_colour,
    can_reach,
    destination_not_own,
    promotion_required,
    king_not_left_in_check,
];

const PROMOTION_RULES: &[MoveRule] = &[
    can_reach,
    source_is_active_pawn,
    promotion_target,
    king_not_left_in_check,
];

const EN_PASSANT_RULES: &[MoveRule] = &[
    no_promotion_piece,
    ep_square_matches,
    source_is_active_pawn,
    ep_source_rank,
    ep_square_attacked,
    king_not_left_in_check,
];

const CASTLE_RULES: &[MoveRule] = &[
    no_promotion_piece,
    castle_destination,
    castle_right_available,
    not_castling_out_of_check,
    castle_path_clear,
    castle_path_safe,
    king_not_left_in_check,
];

/// Ordered rules for a move type. Evaluation stops at the first failure.
pub const fn rules_for(kind: MoveType) -> &'static [MoveRule] {
    match kind {
        MoveType::Normal => NORMAL_RULES,
        MoveType::Promotion => PROMOTION_RULES,
        MoveType::EnPassant => EN_PASSANT_RULES,
        MoveType::Castle => CASTLE_RULES,
    }
}

/******************************************\
|==========================================|
|                Reach Sets                |
|==========================================|
\******************************************/

/// # Reach set
///
/// Squares `piece` on `sq` may move to by its own movement rules, ignoring
/// king safety, castling and en passant. Pawns push onto empty squares (twice
/// from their start rank) and capture diagonally onto enemy pieces; every other
/// piece reaches its attack set, own-piece squares included.
pub fn reach_set(tables: &AttackTables, occ: &BoardOccupancy, piece: Piece, sq: Square) -> Bitboard {
    let col = piece.colour();
    let all = occ.all();

    match piece.pt() {
        PieceType::Pawn => {
            let single = sq.bb().shift(col.forward()) & !all;
            // only a push from the start rank lands on the relative third rank
            let double = (single & Rank::Rank3.relative(col).bb()).shift(col.forward()) & !all;
            let captures = pawn_attack(col, sq) & occ.colour(!col);

            single | double | captures
        }
        pt => tables.attacks(pt, sq, all, col),
    }
}

/******************************************\
|==========================================|
|              Common Rules                |
|==========================================|
\******************************************/

fn active_colour(ctx: &MoveContext) -> Result<(), MoveError> {
    match ctx.moving_piece()?.colour() == ctx.stm() {
        true => Ok(()),
        false => Err(MoveError::NotActiveColour),
    }
}

fn can_reach(ctx: &MoveContext) -> Result<(), MoveError> {
    let piece = ctx.moving_piece()?;
    let reach = reach_set(ctx.tables, ctx.board.occupancy(), piece, ctx.mv.from());

    match reach.contains(ctx.mv.to()) {
        true => Ok(()),
        false => Err(MoveError::IllegalPieceMovement),
    }
}

fn destination_not_own(ctx: &MoveContext) -> Result<(), MoveError> {
    match ctx.board.occupancy().colour(ctx.stm()).contains(ctx.mv.to()) {
        true => Err(MoveError::DestinationOccupied),
        false => Ok(()),
    }
}

fn king_not_left_in_check(ctx: &MoveContext) -> Result<(), MoveError> {
    let Some(king) = ctx.after.king_square(ctx.stm()) else {
        return Ok(());
    };

    match ctx.tables.is_square_attacked_by(king, !ctx.stm(), &ctx.after, None) {
        true => Err(MoveError::MoveLeavesKingInCheck),
        false => Ok(()),
    }
}

fn source_is_active_pawn(ctx: &MoveContext) -> Result<(), MoveError> {
    match ctx.board.on(ctx.mv.from()) {
        Some(piece) if piece.colour() != ctx.stm() => Err(MoveError::NotActiveColour),
        Some(piece) if piece.pt() == PieceType::Pawn => Ok(()),
        _ => Err(MoveError::SourceNotPawn),
    }
}

/******************************************\
|==========================================|
|             Promotion Rules              |
|==========================================|
\******************************************/

fn last_rank(col: Colour) -> Rank {
    Rank::Rank8.relative(col)
}

fn promotion_required(ctx: &MoveContext) -> Result<(), MoveError> {
    let piece = ctx.moving_piece()?;
    match piece.pt() == PieceType::Pawn && ctx.mv.to().rank() == last_rank(ctx.stm()) {
        true => Err(MoveError::PromotionRequired),
        false => Ok(()),
    }
}

fn no_promotion_piece(ctx: &MoveContext) -> Result<(), MoveError> {
    match ctx.mv.promotion_piece() {
        Some(_) => Err(MoveError::UnexpectedPromotion),
        None => Ok(()),
    }
}

fn promotion_target(ctx: &MoveContext) -> Result<(), MoveError> {
    if ctx.mv.to().rank() != last_rank(ctx.stm()) {
        return Err(MoveError::NotPromotionRank);
    }

    match ctx.mv.promotion_piece() {
        Some(pt) if PieceType::PROMOTIONS.contains(&pt) => Ok(()),
        _ => Err(MoveError::InvalidPromotionPiece),
    }
}

/******************************************\
|==========================================|
|            En Passant Rules              |
|==========================================|
\******************************************/

fn ep_square_matches(ctx: &MoveContext) -> Result<(), MoveError> {
    match ctx.board.enpassant() == Some(ctx.mv.to()) {
        true => Ok(()),
        false => Err(MoveError::EpNotAvailable),
    }
}

fn ep_source_rank(ctx: &MoveContext) -> Result<(), MoveError> {
    match ctx.mv.from().rank() == Rank::Rank5.relative(ctx.stm()) {
        true => Ok(()),
        false => Err(MoveError::EpWrongRank),
    }
}

fn ep_square_attacked(ctx: &MoveContext) -> Result<(), MoveError> {
    match pawn_attack(ctx.stm(), ctx.mv.from()).contains(ctx.mv.to()) {
        true => Ok(()),
        false => Err(MoveError::EpNotAttacked),
    }
}

/******************************************\
|==========================================|
|              Castle Rules                |
|==========================================|
\******************************************/

/// Castling right, rook square, squares that must be empty and squares the
/// king crosses or lands on, for a king castling onto `to`
struct CastleSide {
    right: Castling,
    rook: Square,
    between: Bitboard,
    king_path: Bitboard,
}

fn castle_side(col: Colour, to: Square) -> Option<CastleSide> {
    let rel = |sq: Square| sq.relative(col);

    if to == rel(Square::G1) {
        Some(CastleSide {
            right: Castling::king_side(col),
            rook: rel(Square::H1),
            between: Bitboard::from([rel(Square::F1), rel(Square::G1)]),
            king_path: Bitboard::from([rel(Square::F1), rel(Square::G1)]),
        })
    } else if to == rel(Square::C1) {
        Some(CastleSide {
            right: Castling::queen_side(col),
            rook: rel(Square::A1),
            between: Bitboard::from([rel(Square::B1), rel(Square::C1), rel(Square::D1)]),
            king_path: Bitboard::from([rel(Square::D1), rel(Square::C1)]),
        })
    } else {
        None
    }
}

fn castle_destination(ctx: &MoveContext) -> Result<(), MoveError> {
    let stm = ctx.stm();
    let king_home = ctx.mv.from() == Square::E1.relative(stm)
        && ctx.board.on(ctx.mv.from()) == Some(Piece::from_parts(stm, PieceType::King));

    match king_home && castle_side(stm, ctx.mv.to()).is_some() {
        true => Ok(()),
        false => Err(MoveError::InvalidCastleDestination),
    }
}

fn castle_right_available(ctx: &MoveContext) -> Result<(), MoveError> {
    let stm = ctx.stm();
    let side = castle_side(stm, ctx.mv.to()).ok_or(MoveError::InvalidCastleDestination)?;
    let rook_home = ctx.board.occupancy().pieces(stm, PieceType::Rook).contains(side.rook);

    match ctx.board.castling().has(side.right) && rook_home {
        true => Ok(()),
        false => Err(MoveError::CastleRightUnavailable),
    }
}

fn not_castling_out_of_check(ctx: &MoveContext) -> Result<(), MoveError> {
    let attacked = ctx
        .tables
        .is_square_attacked_by(ctx.mv.from(), !ctx.stm(), ctx.board.occupancy(), None);

    match attacked {
        true => Err(MoveError::CastleWhileInCheck),
        false => Ok(()),
    }
}

fn castle_path_clear(ctx: &MoveContext) -> Result<(), MoveError> {
    let side = castle_side(ctx.stm(), ctx.mv.to()).ok_or(MoveError::InvalidCastleDestination)?;

    match (side.between & ctx.board.occupancy().all()).is_empty() {
        true => Ok(()),
        false => Err(MoveError::CastlePathOccupied),
    }
}

fn castle_path_safe(ctx: &MoveContext) -> Result<(), MoveError> {
    let side = castle_side(ctx.stm(), ctx.mv.to()).ok_or(MoveError::InvalidCastleDestination)?;
    let occ = ctx.board.occupancy();

    match side
        .king_path
        .iter()
        .any(|sq| ctx.tables.is_square_attacked_by(sq, !ctx.stm(), occ, None))
    {
        true => Err(MoveError::CastlePathAttacked),
        false => Ok(()),
    }
}
