use crate::chess_board::fen::active_color_from_fen;
use crate::chess_board::{ChessBoard, Color, Move, Piece, Square};
use std::fmt;

/// The piece picked up by the side to move together with its destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub origin: Square,
    pub piece: Piece,
    pub moves: Vec<Square>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected,
    Moved(Move),
    Deselected,
    Ignored,
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickOutcome::Selected => write!(f, "selected"),
            ClickOutcome::Moved(mv) => write!(f, "moved {}", mv.as_algebraic()),
            ClickOutcome::Deselected => write!(f, "deselected"),
            ClickOutcome::Ignored => write!(f, "ignored"),
        }
    }
}

/// Board, side to move and the current selection of a two-player game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: ChessBoard,
    pub active_color: Color,
    pub selection: Option<Selection>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_board(ChessBoard::starting_position(), Color::White)
    }

    pub fn with_board(board: ChessBoard, active_color: Color) -> Self {
        Self {
            board,
            active_color,
            selection: None,
        }
    }

    /// Reads the placement and the side to move of a FEN record. Castling,
    /// en passant and clock fields are accepted but not used.
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let board = ChessBoard::from_fen(fen)?;
        let active_color = active_color_from_fen(fen)?;
        Ok(Self::with_board(board, active_color))
    }

    pub fn to_fen(&self) -> String {
        let active_color = if self.active_color == Color::White { "w" } else { "b" };
        format!("{} {}", self.board.to_fen(), active_color)
    }

    pub fn selected(&self) -> Option<Square> {
        self.selection.as_ref().map(|s| s.origin)
    }

    pub fn hints(&self) -> &[Square] {
        match &self.selection {
            Some(selection) => selection.moves.as_slice(),
            None => &[],
        }
    }

    /// Advances the selection state machine by one click on `square`.
    ///
    /// Without a selection, a click on a piece of the side to move selects it.
    /// With a selection, a click on one of its destinations commits the move and
    /// passes the turn; any other click drops the selection.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        match self.selection.take() {
            Some(selection) => {
                if selection.moves.contains(&square) {
                    let mv = Move::new(selection.origin, square);
                    self.board.make_move(mv);
                    self.active_color = self.active_color.opposite();
                    ClickOutcome::Moved(mv)
                } else {
                    ClickOutcome::Deselected
                }
            }
            None => match self.board.piece_at(square) {
                Some(piece) if piece.color == self.active_color => {
                    let moves = self.board.generate_moves_for(square, piece);
                    self.selection = Some(Selection {
                        origin: square,
                        piece,
                        moves,
                    });
                    ClickOutcome::Selected
                }
                _ => ClickOutcome::Ignored,
            },
        }
    }
}
