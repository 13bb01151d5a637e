//! Immutable 8×8 board snapshot.
//!
//! A `Board` is plain data: a grid of optional pieces plus query helpers.
//! Applying a move never mutates the receiver; it returns a fresh snapshot,
//! which is what lets the legality checker simulate moves safely.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Board with no pieces at all.
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Piece on `square`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Builder-style placement for tests and setup code. Off-board squares are ignored.
    pub fn with_piece(mut self, square: Square, piece: Option<Piece>) -> Self {
        self.set(square, piece);
        self
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_on_board() {
            self.squares[square.row as usize][square.col as usize] = piece;
        }
    }

    /// New board with the piece on `mv.start` relocated to `mv.end`.
    ///
    /// No legality checking happens here. Any occupant of `mv.end` is
    /// overwritten and a pawn landing on its promotion row becomes a queen
    /// of the same color. Off-board squares or an empty start square yield an
    /// unchanged copy.
    pub fn with_move_applied(&self, mv: Move) -> Self {
        let mut next = *self;
        if !mv.start.is_on_board() || !mv.end.is_on_board() {
            return next;
        }
        let Some(piece) = self.piece_at(mv.start) else {
            return next;
        };

        let landed = if piece.kind == PieceKind::Pawn && mv.end.row == piece.color.promotion_row() {
            Piece::new(PieceKind::Queen, piece.color)
        } else {
            piece
        };

        next.set(mv.start, None);
        next.set(mv.end, Some(landed));
        next
    }

    /// Square of the king of `color`, scanning in row-major order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&square| self.piece_at(square) == Some(king))
    }

    /// Every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Every piece of `color` with its square, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Grid of single-character codes ("" for an empty square).
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|piece| piece.code().to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Inverse of [`Board::to_grid`]; rejects anything that is not 8×8 valid codes.
    pub fn from_grid(grid: &[Vec<String>]) -> ChessResult<Self> {
        if grid.len() != 8 {
            return Err(ChessErrors::InvalidSnapshotDimensions {
                rows: grid.len(),
                cols: grid.first().map_or(0, Vec::len),
            });
        }

        let mut board = Self::empty();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != 8 {
                return Err(ChessErrors::InvalidSnapshotDimensions {
                    rows: grid.len(),
                    cols: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                let mut chars = cell.chars();
                let piece = match (chars.next(), chars.next()) {
                    (None, _) => None,
                    (Some(code), None) => Some(
                        Piece::from_code(code)
                            .ok_or_else(|| ChessErrors::InvalidPieceCode(cell.clone()))?,
                    ),
                    _ => return Err(ChessErrors::InvalidPieceCode(cell.clone())),
                };
                board.squares[row][col] = piece;
            }
        }
        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_grid().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let grid = Vec::<Vec<String>>::deserialize(deserializer)?;
        Board::from_grid(&grid).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_layout() {
        let board = Board::initial();
        assert_eq!(
            board.piece_at(Square::new(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(Square::new(6, 0)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(board.is_empty_at(Square::new(4, 4)));
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn piece_at_off_board_is_none() {
        let board = Board::initial();
        assert_eq!(board.piece_at(Square::new(-1, 0)), None);
        assert_eq!(board.piece_at(Square::new(0, 8)), None);
    }

    #[test]
    fn move_application_relocates_and_leaves_source_untouched() {
        let board = Board::initial();
        let next = board.with_move_applied(Move::new(Square::new(6, 4), Square::new(4, 4)));

        assert!(next.is_empty_at(Square::new(6, 4)));
        assert_eq!(
            next.piece_at(Square::new(4, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn move_application_overwrites_occupant() {
        let board = Board::initial();
        let next = board.with_move_applied(Move::new(Square::new(7, 3), Square::new(1, 3)));
        assert_eq!(
            next.piece_at(Square::new(1, 3)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(next.pieces_of(Color::Black).count(), 15);
    }

    #[test]
    fn pawns_promote_to_queens_on_last_row() {
        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let board = Board::empty()
            .with_piece(Square::new(1, 2), Some(white_pawn))
            .with_piece(Square::new(6, 5), Some(black_pawn));

        let next = board
            .with_move_applied(Move::new(Square::new(1, 2), Square::new(0, 2)))
            .with_move_applied(Move::new(Square::new(6, 5), Square::new(7, 5)));

        assert_eq!(
            next.piece_at(Square::new(0, 2)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            next.piece_at(Square::new(7, 5)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn find_king_tolerates_missing_king() {
        let board = Board::empty().with_piece(
            Square::new(3, 3),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        assert_eq!(board.find_king(Color::White), Some(Square::new(3, 3)));
        assert_eq!(board.find_king(Color::Black), None);
    }

    #[test]
    fn grid_rejects_bad_shapes_and_codes() {
        let mut grid = Board::initial().to_grid();
        assert_eq!(Board::from_grid(&grid).expect("grid should load"), Board::initial());

        grid[3][3] = "x".to_owned();
        assert!(matches!(
            Board::from_grid(&grid),
            Err(ChessErrors::InvalidPieceCode(_))
        ));

        grid[3][3] = "QQ".to_owned();
        assert!(Board::from_grid(&grid).is_err());

        grid.pop();
        assert!(matches!(
            Board::from_grid(&grid),
            Err(ChessErrors::InvalidSnapshotDimensions { rows: 7, .. })
        ));
    }
}
