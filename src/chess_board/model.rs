use std::fmt;

pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

/// A board coordinate. Row 0 is the top of the board (black's back rank).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

impl PieceType {
    pub fn name(&self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    /// FEN letter of the piece, uppercase for white.
    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self { color, kind })
    }

    pub fn to_unicode(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::Pawn) => '♙',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::King) => '♔',
            (Color::Black, PieceType::Pawn) => '♟',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind.name())
    }
}

pub fn color_of(piece: Piece) -> Color {
    piece.color
}

/// True when `target` holds a piece of the other color than `mover`.
pub fn is_opponent(target: Option<Piece>, mover: Piece) -> bool {
    match target {
        Some(target) => color_of(target) != color_of(mover),
        None => false,
    }
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Returns the square offset by `(dr, dc)`, or `None` when either end is off the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        if !self.is_on_board() {
            return None;
        }
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, String> {
        let mut chars = algebraic.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                let col = file as u8 - b'a';
                let row = b'8' - rank as u8;
                Ok(Self { row, col })
            }
            _ => Err(format!("Invalid square: {}", algebraic)),
        }
    }

    pub fn as_algebraic(&self) -> String {
        if !self.is_on_board() {
            return format!("({}, {})", self.row, self.col);
        }
        to_algebraic_square(self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}{}", self.from.as_algebraic(), self.to.as_algebraic())
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, String> {
        if algebraic.len() != 4 || !algebraic.is_ascii() {
            return Err(format!("Invalid move: {}", algebraic));
        }
        let from = Square::from_algebraic(&algebraic[0..2])?;
        let to = Square::from_algebraic(&algebraic[2..4])?;
        Ok(Self { from, to })
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char; // Convert 0-7 column index to 'a'-'h'
    let rank = (b'8' - row) as char; // Row 0 is rank 8
    format!("{}{}", file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_opponent() {
        let white_rook = Piece::new(Color::White, PieceType::Rook);
        let white_pawn = Piece::new(Color::White, PieceType::Pawn);
        let black_queen = Piece::new(Color::Black, PieceType::Queen);

        assert!(!is_opponent(None, white_rook));
        assert!(!is_opponent(Some(white_pawn), white_rook));
        assert!(is_opponent(Some(black_queen), white_rook));
        assert!(is_opponent(Some(white_rook), black_queen));
    }

    #[test]
    fn test_piece_chars() {
        assert_eq!(Piece::new(Color::White, PieceType::Knight).to_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceType::King).to_char(), 'k');
        assert_eq!(Piece::from_char('q'), Some(Piece::new(Color::Black, PieceType::Queen)));
        assert_eq!(Piece::from_char('B'), Some(Piece::new(Color::White, PieceType::Bishop)));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_algebraic_squares() {
        assert_eq!(Square::from_algebraic("e2"), Ok(Square::new(6, 4)));
        assert_eq!(Square::from_algebraic("a8"), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h1"), Ok(Square::new(7, 7)));
        assert_eq!(Square::new(4, 4).as_algebraic(), "e4");
        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("e").is_err());
        assert!(Square::from_algebraic("e22").is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
        assert_eq!(Square::new(9, 0).offset(-2, 0), None);
        assert_eq!(Square::new(200, 3).offset(-1, 0), None);
        assert!(!Square::new(8, 0).is_on_board());
        assert_eq!(Square::new(9, 9).as_algebraic(), "(9, 9)");
    }

    #[test]
    fn test_move_algebraic() {
        let mv = Move::from_algebraic("e2e4").unwrap();
        assert_eq!(mv, Move::new(Square::new(6, 4), Square::new(4, 4)));
        assert_eq!(mv.as_algebraic(), "e2e4");
        assert!(Move::from_algebraic("e2e9").is_err());
        assert!(Move::from_algebraic("e2").is_err());
    }
}
