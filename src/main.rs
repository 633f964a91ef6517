use chessboard::chess_board::fen::INITIAL_POSITION;
use chessboard::chess_board::Square;
use chessboard::game::{ClickOutcome, GameState};
use chessboard::ui::setup_ui;

use std::io::{self, stdin, stdout, BufRead, Write};
use std::process;

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn fen_arg() -> clap::Arg {
    arg!(
    -f --fen <FEN> "Board position"
            )
    .default_value(INITIAL_POSITION)
}

fn main() {
    let matches = command!()
        .version("v0.0.1")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(Command::new("play").about("Play a game on the board window").arg(fen_arg()))
        .subcommand(
            Command::new("console")
                .about("Play a game in the terminal, one square per line")
                .arg(fen_arg()),
        )
        .subcommand(
            Command::new("moves")
                .about("List the destinations of pieces")
                .arg(fen_arg())
                .arg(
                    arg!(
                    [squares] ... "Origin squares, all pieces of the side to move if omitted"
                            )
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(Command::new("show").about("Print the board").arg(fen_arg()))
        .get_matches();

    let debug = matches.get_flag("debug");

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => load_game(arg_matches).and_then(|game| play_with_ui(game, debug)),
        Some(("console", arg_matches)) => load_game(arg_matches).and_then(|game| play_in_console(game, debug)),
        Some(("moves", arg_matches)) => load_game(arg_matches).and_then(|game| {
            let squares = arg_matches
                .get_many::<String>("squares")
                .unwrap_or_default()
                .collect::<Vec<_>>();
            print_moves(&game, squares)
        }),
        Some(("show", arg_matches)) => load_game(arg_matches).map(|game| {
            print!("{}", game.board.render_to_string());
            println!("{} to move", game.active_color);
        }),
        None => play_with_ui(GameState::new(), debug),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn load_game(arg_matches: &ArgMatches) -> Result<GameState, String> {
    let fen = arg_matches
        .get_one::<String>("fen")
        .map(String::as_str)
        .unwrap_or(INITIAL_POSITION);
    GameState::from_fen(fen)
}

fn play_with_ui(game: GameState, debug: bool) -> Result<(), String> {
    setup_ui(game, debug).map_err(|e| format!("Could not open the board window: {}", e))
}

fn play_in_console(mut game: GameState, debug: bool) -> Result<(), String> {
    print!("{}", game.board.render_to_string());
    prompt(&game).map_err(|e| e.to_string())?;

    for line in stdin().lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let line = line.trim();

        if line.is_empty() {
            prompt(&game).map_err(|e| e.to_string())?;
            continue;
        }
        if line == "quit" {
            return Ok(());
        }

        let square = match Square::from_algebraic(line) {
            Ok(square) => square,
            Err(e) => {
                eprintln!("{}", e);
                prompt(&game).map_err(|e| e.to_string())?;
                continue;
            }
        };

        let outcome = game.click(square);
        if debug {
            eprintln!("click {}: {} ({})", square, outcome, game.to_fen());
        }
        match outcome {
            ClickOutcome::Selected => {
                let hints: Vec<String> = game.hints().iter().map(|s| s.as_algebraic()).collect();
                println!("Moves: {}", hints.join(" "));
            }
            ClickOutcome::Moved(_) => print!("{}", game.board.render_to_string()),
            ClickOutcome::Deselected | ClickOutcome::Ignored => {}
        }
        prompt(&game).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn prompt(game: &GameState) -> io::Result<()> {
    print!("{} to move> ", game.active_color);
    stdout().flush()
}

#[derive(Tabled)]
struct MovesRow {
    square: String,
    piece: String,
    count: usize,
    destinations: String,
}

fn print_moves(game: &GameState, squares: Vec<&String>) -> Result<(), String> {
    let origins = if squares.is_empty() {
        game.board
            .pieces_with_coordinates()
            .filter(|(_, piece)| piece.color == game.active_color)
            .map(|(square, _)| square)
            .collect()
    } else {
        squares
            .iter()
            .map(|s| Square::from_algebraic(s))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut table_rows = Vec::new();
    for origin in origins {
        let moves = game.board.generate_moves(origin);
        table_rows.push(MovesRow {
            square: origin.as_algebraic(),
            piece: game
                .board
                .piece_at(origin)
                .map(|p| p.to_string())
                .unwrap_or_else(|| String::from("-")),
            count: moves.len(),
            destinations: moves.iter().map(|s| s.as_algebraic()).collect::<Vec<_>>().join(" "),
        });
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
    Ok(())
}
