pub mod chess_board;
pub mod game;
pub mod ui;

use game::GameState;

slint::include_modules!();

#[cfg_attr(target_arch = "wasm32", wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn play_with_ui() {
    if let Err(e) = ui::setup_ui(GameState::new(), false) {
        eprintln!("Could not open the board window: {}", e);
    }
}
