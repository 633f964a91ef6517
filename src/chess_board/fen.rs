use super::ChessBoard;
use super::{Color, Piece, Square};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses the piece placement field of a FEN record. Any fields after the
/// placement are ignored here.
pub fn from_fen(fen: &str) -> Result<ChessBoard, String> {
    let mut board = ChessBoard::new();
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| String::from("Invalid FEN string: empty"))?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(String::from("Invalid FEN string: expected 8 rows"));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;

        for c in row.chars() {
            if col_index > 7 {
                return Err(String::from("Invalid FEN string: too many columns"));
            }
            if let Some(empty) = c.to_digit(10) {
                if !(1..=8).contains(&empty) {
                    return Err(format!("Invalid empty run in FEN string: {}", c));
                }
                col_index += empty as usize;
            } else if let Some(piece) = Piece::from_char(c) {
                board.squares[row_index][col_index] = Some(piece);
                col_index += 1;
            } else {
                return Err(format!("Invalid piece character in FEN string: {}", c));
            }
        }
        if col_index != 8 {
            return Err(format!(
                "Row {} of FEN string describes {} squares instead of 8",
                row_index, col_index
            ));
        }
    }

    Ok(board)
}

/// Parses the active color field of a FEN record; a missing field means white.
pub fn active_color_from_fen(fen: &str) -> Result<Color, String> {
    match fen.split_whitespace().nth(1) {
        None | Some("w") => Ok(Color::White),
        Some("b") => Ok(Color::Black),
        Some(other) => Err(format!("Invalid FEN string: invalid active color {}", other)),
    }
}

pub fn to_fen(board: &ChessBoard) -> String {
    let mut board_representation = String::new();

    for row in 0..8 {
        let mut empty_count = 0;

        for col in 0..8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                None => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if row < 7 {
            board_representation.push('/');
        }
    }

    board_representation
}

#[cfg(test)]
mod test {
    use super::super::PieceType;
    use super::*;

    #[test]
    fn fen_empty_board() {
        let board = ChessBoard::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("Failed to parse FEN");

        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(board.squares[row][col], None);
            }
        }
    }

    #[test]
    fn fen_one_pawn() {
        let board = ChessBoard::from_fen("8/8/8/8/8/8/8/P7").expect("Failed to parse FEN");
        assert_eq!(board.squares[7][0], Some(Piece::new(Color::White, PieceType::Pawn)));
    }

    #[test]
    fn fen_two_pawns() {
        let board = ChessBoard::from_fen("8/8/8/8/8/8/8/P3p3").expect("Failed to parse FEN");

        assert_eq!(board.squares[7][0], Some(Piece::new(Color::White, PieceType::Pawn)));
        assert_eq!(board.squares[7][4], Some(Piece::new(Color::Black, PieceType::Pawn)));
    }

    #[test]
    fn fen_initial_board() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).expect("Failed to parse FEN");

        assert_eq!(board.squares[0][0], Some(Piece::new(Color::Black, PieceType::Rook)));
        assert_eq!(board.squares[7][4], Some(Piece::new(Color::White, PieceType::King)));
        assert_eq!(board.squares[4][4], None);
    }

    #[test]
    fn fen_invalid_piece() {
        assert!(ChessBoard::from_fen("8/8/8/8/8/8/8/X7").is_err());
    }

    #[test]
    fn fen_invalid_extra_columns() {
        let fen = "rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(ChessBoard::from_fen(fen).is_err());
    }

    #[test]
    fn fen_invalid_short_row() {
        assert!(ChessBoard::from_fen("rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").is_err());
        assert!(ChessBoard::from_fen("8/8/8/8/8/8/8/09").is_err());
    }

    #[test]
    fn fen_invalid_row_count() {
        assert!(ChessBoard::from_fen("8/8/8/8/8/8/8").is_err());
        assert!(ChessBoard::from_fen("").is_err());
    }

    #[test]
    fn fen_active_color() {
        assert_eq!(active_color_from_fen(INITIAL_POSITION), Ok(Color::White));
        assert_eq!(active_color_from_fen("8/8/8/8/8/8/8/8 b"), Ok(Color::Black));
        assert_eq!(active_color_from_fen("8/8/8/8/8/8/8/8"), Ok(Color::White));
        assert!(active_color_from_fen("8/8/8/8/8/8/8/8 x").is_err());
    }

    #[test]
    fn test_to_fen_initial_position() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn test_to_fen_custom_position() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        assert_eq!(ChessBoard::from_fen(fen).unwrap().to_fen(), fen);
    }
}
