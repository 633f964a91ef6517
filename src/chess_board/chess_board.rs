use super::fen::{self, INITIAL_POSITION};
use super::{Move, Piece, Square, BOARD_SIZE};
use lazy_static::lazy_static;

lazy_static! {
    static ref INITIAL_BOARD: ChessBoard =
        fen::from_fen(INITIAL_POSITION).expect("initial position is a valid placement");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub squares: [[Option<Piece>; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates an empty chess board
    pub fn new() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position, black on rows 0-1 and white on rows 6-7.
    pub fn starting_position() -> Self {
        INITIAL_BOARD.clone()
    }

    /// Delegates FEN parsing to the `fen` module.
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        fen::from_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(self)
    }
}

impl ChessBoard {
    /// The occupant of `square`; `None` for empty or off-board squares.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        *self.squares.get(square.row as usize)?.get(square.col as usize)?
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Off-board squares are left alone.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(cell) = self
            .squares
            .get_mut(square.row as usize)
            .and_then(|row| row.get_mut(square.col as usize))
        {
            *cell = piece;
        }
    }

    /// Returns an iterator over all pieces on the chessboard along with their coordinates.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let square = Square::new(row, col);
                self.piece_at(square).map(|piece| (square, piece))
            })
        })
    }

    /// Relocates the piece on `from` to `to`, discarding whatever stood on `to`.
    /// The caller validates the destination against the generated move set.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let piece = self.piece_at(from);
        self.set(from, None);
        self.set(to, piece);
    }

    pub fn make_move(&mut self, mv: Move) {
        self.apply_move(mv.from, mv.to);
    }

    pub fn with_move(&self, from: Square, to: Square) -> ChessBoard {
        let mut board = self.clone();
        board.apply_move(from, to);
        board
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            board_representation.push_str(&format!("{} │", rank));
            for col in 0..BOARD_SIZE {
                let square = match self.piece_at(Square::new(row, col)) {
                    None => ' ',
                    Some(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if row < BOARD_SIZE - 1 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}
