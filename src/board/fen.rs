use thiserror::Error;

use super::{Board, BoardOccupancy};
use crate::core::*;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

/******************************************\
|==========================================|
|               Parse Fen                  |
|==========================================|
\******************************************/

impl Board {
    pub const FEN_FIELDS: usize = 6;

    /// # Parse FEN
    ///
    /// Reads the six standard fields. Only the text format is checked here;
    /// whether the position makes sense is left to board validation.
    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, stm, castling, enpassant, fifty, full] = fields[..] else {
            return Err(FenParseError::InvalidNumberOfFields(fields.len()));
        };

        let occupancy = Self::parse_piece_placement(placement)?;
        let stm = Self::parse_side_to_move(stm)?;
        let castling = Self::parse_castling(castling)?;
        let enpassant = Self::parse_enpassant(enpassant)?;
        let fifty_move = Self::parse_fifty_move(fifty)?;
        let full_move = Self::parse_full_move(full)?;

        Ok(Board {
            occupancy,
            stm,
            castling,
            enpassant,
            fifty_move,
            half_moves: (full_move - 1) * 2 + stm as u16,
        })
    }

    pub fn fen(&self) -> String {
        let placement = Rank::iter()
            .rev()
            .map(|rank| {
                let mut row = String::new();
                let mut empty = 0;
                for file in File::iter() {
                    match self.on(Square::from_parts(file, rank)) {
                        Some(piece) => {
                            if empty > 0 {
                                row.push_str(&empty.to_string());
                                empty = 0;
                            }
                            row.push_str(&piece.to_string());
                        }
                        None => empty += 1,
                    }
                }
                if empty > 0 {
                    row.push_str(&empty.to_string());
                }
                row
            })
            .collect::<Vec<_>>()
            .join("/");

        let stm = match self.stm {
            Colour::White => 'w',
            Colour::Black => 'b',
        };
        let enpassant = self.enpassant.map_or("-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {stm} {} {enpassant} {} {}",
            self.castling,
            self.fifty_move,
            self.half_moves / 2 + 1
        )
    }

    fn parse_piece_placement(placement: &str) -> Result<BoardOccupancy, FenParseError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != Rank::NUM {
            return Err(FenParseError::InvalidRankFormat(format!(
                "expected 8 ranks, found {}",
                rows.len()
            )));
        }

        let mut occupancy = BoardOccupancy::default();

        for (rank, row) in Rank::iter().rev().zip(rows) {
            let mut file = 0u8;

            for c in row.chars() {
                match c {
                    '1'..='8' => file += c as u8 - b'0',
                    _ => {
                        let piece = Piece::try_from(c).map_err(|_| FenParseError::InvalidPiecePlacementChar(c))?;
                        if file >= File::NUM as u8 {
                            return Err(FenParseError::InvalidRankFormat(format!(
                                "rank {rank} has more than 8 files"
                            )));
                        }
                        let sq = Square::from_parts(unsafe { File::from_unchecked(file) }, rank);
                        occupancy.add_piece(piece, sq);
                        file += 1;
                    }
                }

                if file > File::NUM as u8 {
                    return Err(FenParseError::InvalidRankFormat(format!(
                        "rank {rank} has more than 8 files"
                    )));
                }
            }

            if file != File::NUM as u8 {
                return Err(FenParseError::InvalidRankFormat(format!(
                    "rank {rank} has {file} files, expected 8"
                )));
            }
        }

        Ok(occupancy)
    }

    fn parse_side_to_move(stm: &str) -> Result<Colour, FenParseError> {
        match stm {
            "w" => Ok(Colour::White),
            "b" => Ok(Colour::Black),
            _ => Err(FenParseError::InvalidSideToMove(stm.to_string())),
        }
    }

    fn parse_castling(castling: &str) -> Result<Castling, FenParseError> {
        if castling == "-" {
            return Ok(Castling::NONE);
        }

        castling.chars().try_fold(Castling::NONE, |rights, c| {
            let right = match c {
                'K' => Castling::WK,
                'Q' => Castling::WQ,
                'k' => Castling::BK,
                'q' => Castling::BQ,
                _ => return Err(FenParseError::InvalidCastlingChar(c)),
            };
            Ok(rights | right)
        })
    }

    fn parse_enpassant(enpassant: &str) -> Result<Option<Square>, FenParseError> {
        if enpassant == "-" {
            return Ok(None);
        }

        let sq = enpassant
            .parse::<Square>()
            .map_err(|_| FenParseError::InvalidEnPassantSquare(enpassant.to_string()))?;

        match sq.rank() {
            Rank::Rank3 | Rank::Rank6 => Ok(Some(sq)),
            _ => Err(FenParseError::InvalidEnPassantSquare(format!(
                "{sq} is not on rank 3 or 6"
            ))),
        }
    }

    fn parse_fifty_move(token: &str) -> Result<u8, FenParseError> {
        token
            .parse::<u8>()
            .map_err(|_| FenParseError::InvalidHalfmoveClock(token.to_string()))
    }

    fn parse_full_move(token: &str) -> Result<u16, FenParseError> {
        match token.parse::<u16>() {
            Ok(n) if (1..=u16::MAX / 2).contains(&n) => Ok(n),
            _ => Err(FenParseError::InvalidFullmoveNumber(token.to_string())),
        }
    }
}

impl std::str::FromStr for Board {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

/******************************************\
|==========================================|
|             Fen Parse Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FenParseError {
    #[error("FEN string must have 6 fields separated by spaces, found {0}")]
    InvalidNumberOfFields(usize),
    #[error("Invalid character in FEN piece placement: '{0}'")]
    InvalidPiecePlacementChar(char),
    #[error("Invalid rank format in FEN piece placement: {0}")]
    InvalidRankFormat(String),
    #[error("Invalid side to move in FEN: '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),
    #[error("Invalid character in FEN castling availability: '{0}'")]
    InvalidCastlingChar(char),
    #[error("Invalid en passant target square in FEN: '{0}'")]
    InvalidEnPassantSquare(String),
    #[error("Invalid halfmove clock value in FEN: '{0}'")]
    InvalidHalfmoveClock(String),
    #[error("Invalid fullmove number value in FEN: '{0}'")]
    InvalidFullmoveNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for fen in [
            START_FEN,
            KIWIPETE_FEN,
            "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
            "rnbqkbnr/ppp1pppp/8/3pP3/8/5N2/PPPP1PPP/RNBQKB1R w KQkq d6 0 3",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 12 40",
        ] {
            let board = Board::from_fen(fen).expect("valid fen");
            assert_eq!(board.fen(), fen);
        }
    }

    #[test]
    fn test_fields() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R b Kq e3 7 12".parse().expect("valid fen");
        assert_eq!(board.stm(), Colour::Black);
        assert_eq!(board.castling(), Castling::WK | Castling::BQ);
        assert_eq!(board.enpassant(), Some(Square::E3));
        assert_eq!(board.fifty_move(), 7);
        assert_eq!(board.half_moves(), 23);
        assert_eq!(board.on(Square::H1), Some(Piece::WhiteRook));
    }

    #[test]
    fn test_field_count() {
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(FenParseError::InvalidNumberOfFields(4))
        );
        assert_eq!(
            Board::from_fen(&format!("{START_FEN} extra")),
            Err(FenParseError::InvalidNumberOfFields(7))
        );
    }

    #[test]
    fn test_bad_placement() {
        assert_eq!(
            Board::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::InvalidPiecePlacementChar('x'))
        );
        assert!(matches!(
            Board::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::InvalidPiecePlacementChar('9'))
        ));
        assert!(matches!(
            Board::from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::InvalidRankFormat(_))
        ));
        assert!(matches!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::InvalidRankFormat(_))
        ));
        assert!(matches!(
            Board::from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::InvalidRankFormat(_))
        ));
    }

    #[test]
    fn test_bad_state_fields() {
        let with = |stm: &str, castle: &str, ep: &str, fifty: &str, full: &str| {
            Board::from_fen(&format!("4k3/8/8/8/8/8/8/4K3 {stm} {castle} {ep} {fifty} {full}"))
        };

        assert_eq!(with("x", "-", "-", "0", "1"), Err(FenParseError::InvalidSideToMove("x".into())));
        assert_eq!(with("w", "KX", "-", "0", "1"), Err(FenParseError::InvalidCastlingChar('X')));
        assert!(matches!(with("w", "-", "e4", "0", "1"), Err(FenParseError::InvalidEnPassantSquare(_))));
        assert!(matches!(with("w", "-", "z9", "0", "1"), Err(FenParseError::InvalidEnPassantSquare(_))));
        assert!(matches!(with("w", "-", "-", "-3", "1"), Err(FenParseError::InvalidHalfmoveClock(_))));
        assert!(matches!(with("w", "-", "-", "0", "0"), Err(FenParseError::InvalidFullmoveNumber(_))));
        assert!(matches!(with("w", "-", "-", "0", "one"), Err(FenParseError::InvalidFullmoveNumber(_))));
    }
}
