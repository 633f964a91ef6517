use super::{ChessBoard, Square};

/// Compares the destinations generated from `origin` with `expected`, ignoring order.
#[cfg(test)]
pub fn assert_moves(board: &ChessBoard, origin: &str, mut expected: Vec<&str>) {
    let origin = Square::from_algebraic(origin).unwrap();
    let mut generated_converted: Vec<_> = board
        .generate_moves(origin)
        .into_iter()
        .map(|s| s.as_algebraic())
        .collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected, "moves from {}", origin);
}
