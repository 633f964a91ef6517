use super::model::is_opponent;
use super::{ChessBoard, Color, Piece, PieceType, Square};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_MOVES: [(i8, i8); 8] = [(2, 1), (2, -1), (-2, 1), (-2, -1), (1, 2), (1, -2), (-1, 2), (-1, -2)];
const KING_MOVES: [(i8, i8); 8] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];

impl ChessBoard {
    /// Pseudo-legal destinations of the piece standing on `origin`. An empty
    /// square has no moves.
    pub fn generate_moves(&self, origin: Square) -> Vec<Square> {
        match self.piece_at(origin) {
            Some(piece) => self.generate_moves_for(origin, piece),
            None => Vec::new(),
        }
    }

    /// Routes `piece` to the generator of its kind. `origin` is expected to hold `piece`.
    pub fn generate_moves_for(&self, origin: Square, piece: Piece) -> Vec<Square> {
        match piece.kind {
            PieceType::Pawn => self.generate_pawn_moves(origin, piece),
            PieceType::Knight => self.generate_moves_from_offsets(origin, piece, &KNIGHT_MOVES),
            PieceType::Bishop => self.generate_sliding_moves(origin, piece, &BISHOP_DIRECTIONS),
            PieceType::Rook => self.generate_sliding_moves(origin, piece, &ROOK_DIRECTIONS),
            PieceType::Queen => self.generate_sliding_moves(origin, piece, &QUEEN_DIRECTIONS),
            PieceType::King => self.generate_moves_from_offsets(origin, piece, &KING_MOVES),
        }
    }

    fn generate_pawn_moves(&self, origin: Square, piece: Piece) -> Vec<Square> {
        let mut moves = Vec::new();
        let (forward, start_row) = match piece.color {
            Color::White => (-1, 6),
            Color::Black => (1, 1),
        };

        // Regular forward move
        if let Some(one_forward) = origin.offset(forward, 0) {
            if self.is_empty(one_forward) {
                moves.push(one_forward);

                // Double move from start position, only reachable through an empty first square
                if origin.row == start_row {
                    if let Some(two_forward) = origin.offset(2 * forward, 0) {
                        if self.is_empty(two_forward) {
                            moves.push(two_forward);
                        }
                    }
                }
            }
        }

        // Capture diagonally
        for dc in [-1, 1] {
            if let Some(target) = origin.offset(forward, dc) {
                if is_opponent(self.piece_at(target), piece) {
                    moves.push(target);
                }
            }
        }

        moves
    }

    /// Generate sliding piece moves (bishop, rook, queen).
    fn generate_sliding_moves(&self, origin: Square, piece: Piece, directions: &[(i8, i8)]) -> Vec<Square> {
        let mut moves = Vec::new();

        for &(dr, dc) in directions {
            let mut current = origin;
            while let Some(next) = current.offset(dr, dc) {
                match self.piece_at(next) {
                    None => moves.push(next),
                    Some(occupant) => {
                        if is_opponent(Some(occupant), piece) {
                            moves.push(next);
                        }
                        break; // Block sliding
                    }
                }
                current = next;
            }
        }

        moves
    }

    /// Single-step moves of the knight and the king.
    fn generate_moves_from_offsets(&self, origin: Square, piece: Piece, offsets: &[(i8, i8)]) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| origin.offset(dr, dc))
            .filter(|&target| {
                let occupant = self.piece_at(target);
                occupant.is_none() || is_opponent(occupant, piece)
            })
            .collect()
    }
}
