use crate::chess_board::{Square, BOARD_SIZE};
use crate::game::GameState;
use crate::{Field, MainWindow};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Maps a `GameState` to a UI-compatible VecModel representation, row 0 first
pub fn map_game_to_ui(game: &GameState) -> ModelRc<Field> {
    let mut fields = Vec::with_capacity(64);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            let text = match game.board.piece_at(square) {
                Some(piece) => SharedString::from(piece.to_unicode().to_string()),
                None => SharedString::default(),
            };
            fields.push(Field {
                text,
                hint: game.hints().contains(&square),
                selected: game.selected() == Some(square),
            });
        }
    }

    ModelRc::new(VecModel::from(fields))
}

pub fn status_line(game: &GameState) -> String {
    match game.selection.as_ref() {
        Some(selection) => format!(
            "{} to move, {} on {} selected",
            game.active_color, selection.piece, selection.origin
        ),
        None => format!("{} to move", game.active_color),
    }
}

fn field_index_to_square(index: i32) -> Option<Square> {
    let size = BOARD_SIZE as i32;
    if (0..size * size).contains(&index) {
        Some(Square::new((index / size) as u8, (index % size) as u8))
    } else {
        None
    }
}

/// Opens the board window and runs the event loop until it is closed.
pub fn setup_ui(game: GameState, debug: bool) -> Result<(), slint::PlatformError> {
    let window = MainWindow::new()?;
    window.set_fields(map_game_to_ui(&game));
    window.set_status(status_line(&game).into());

    let game = Rc::new(RefCell::new(game));
    let window_weak = window.as_weak();
    window.on_clicked(move |index| {
        let Some(square) = field_index_to_square(index) else {
            return;
        };
        let mut game = game.borrow_mut();
        let outcome = game.click(square);
        if debug {
            eprintln!("click {}: {}", square, outcome);
        }
        if let Some(window) = window_weak.upgrade() {
            window.set_fields(map_game_to_ui(&game));
            window.set_status(status_line(&game).into());
        }
    });

    window.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slint::Model;

    #[test]
    fn test_map_initial_position() {
        let fields = map_game_to_ui(&GameState::new());
        assert_eq!(fields.row_count(), 64);
        assert_eq!(fields.row_data(0).unwrap().text, "♜");
        assert_eq!(fields.row_data(60).unwrap().text, "♔");
        assert_eq!(fields.row_data(36).unwrap().text, "");
        assert!(fields.iter().all(|f| !f.hint && !f.selected));
    }

    #[test]
    fn test_map_selection_and_hints() {
        let mut game = GameState::new();
        game.click(Square::new(6, 4));
        let fields = map_game_to_ui(&game);

        assert!(fields.row_data(52).unwrap().selected);
        assert!(fields.row_data(44).unwrap().hint);
        assert!(fields.row_data(36).unwrap().hint);
        assert_eq!(fields.iter().filter(|f| f.hint).count(), 2);
        assert_eq!(status_line(&game), "white to move, white pawn on e2 selected");
    }

    #[test]
    fn test_field_index_to_square() {
        assert_eq!(field_index_to_square(0), Some(Square::new(0, 0)));
        assert_eq!(field_index_to_square(52), Some(Square::new(6, 4)));
        assert_eq!(field_index_to_square(64), None);
        assert_eq!(field_index_to_square(-1), None);
    }
}
