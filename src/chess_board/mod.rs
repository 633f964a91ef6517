pub mod fen;
pub mod model;
pub use model::{color_of, is_opponent, Color, Move, Piece, PieceType, Square, BOARD_SIZE};

mod chess_board;
mod move_generation;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::ChessBoard;
