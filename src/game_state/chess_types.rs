//! Value types shared by every part of the rule engine.
//!
//! Colors and piece kinds are explicit enums; a `Piece` carries both so no
//! call site has to infer color from a text encoding. Squares use signed
//! coordinates so callers can hand in off-board values and get a definite
//! "not legal" answer instead of a panic.

use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the color's pawns start on.
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row for the color's pawns, where they promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase base symbol used by the snapshot and FEN encodings.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Pieces have no identity beyond the square they occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Single-character code: uppercase for white, lowercase for black.
    #[inline]
    pub fn code(self) -> char {
        match self.color {
            Color::White => self.kind.symbol().to_ascii_uppercase(),
            Color::Black => self.kind.symbol(),
        }
    }

    #[inline]
    pub fn from_code(code: char) -> Option<Self> {
        let color = if code.is_ascii_uppercase() {
            Color::White
        } else if code.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_symbol(code).map(|kind| Piece::new(kind, color))
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Square shifted by `(d_row, d_col)`; may be off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Iterate all 64 on-board squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
    }
}

/// A move request. Promotion is implied by the board, never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_encode_color_by_case() {
        let white_knight = Piece::from_code('N').expect("N is a piece code");
        assert_eq!(white_knight, Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(white_knight.code(), 'N');

        let black_king = Piece::from_code('k').expect("k is a piece code");
        assert_eq!(black_king.color, Color::Black);
        assert_eq!(black_king.code(), 'k');

        assert!(Piece::from_code('x').is_none());
        assert!(Piece::from_code('1').is_none());
    }

    #[test]
    fn square_bounds_and_offsets() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(8, 0).is_on_board());
        assert!(!Square::new(3, -1).is_on_board());
        assert_eq!(Square::new(6, 4).offset(-2, 0), Square::new(4, 4));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn pawn_geometry_per_color() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_home_row(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.opposite(), Color::White);
    }
}
