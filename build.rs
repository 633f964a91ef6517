fn main() {
    slint_build::compile("ui/board.slint").unwrap();
}
