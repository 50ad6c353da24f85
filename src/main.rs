//! Console front end to the fianchetto engine.
//!
//! Two players share one terminal and alternate entering moves in
//! coordinate form. All rules questions are answered by the engine; this
//! binary only reads input and prints boards.

use std::io::{self, Write};

use fianchetto_engine::coretypes::Square;
use fianchetto_engine::Game;

enum InputKind {
    Exit,
    Newgame,
    Help,
    Undo,
    Error,
    GameMove(Square, Square),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Some((from, to)) = parse_coordinates(s) {
            Self::GameMove(from, to)
        } else {
            match s {
                "exit" => Self::Exit,
                "newgame" | "ng" => Self::Newgame,
                "help" => Self::Help,
                "undo" => Self::Undo,
                _ => Self::Error,
            }
        }
    }
}

/// Parse a from-to square pair, "e2e4". Trailing characters are ignored,
/// so "e7e8q" also reads as its coordinate pair.
fn parse_coordinates(s: &str) -> Option<(Square, Square)> {
    let from: Square = s.get(0..2)?.parse().ok()?;
    let to: Square = s.get(2..4)?.parse().ok()?;
    Some((from, to))
}

fn main() -> io::Result<()> {
    println!("Fianchetto CLI 0.1.0\n");
    let mut game = Game::start_position();
    let mut input = String::new();

    loop {
        println!("{}", game.board());

        // Announce the game state before prompting.
        let (mated, stalled, checked, mover) = {
            let player = game.board().current_player();
            (
                player.is_in_checkmate(),
                player.is_in_stalemate(),
                player.is_in_check(),
                player.alliance(),
            )
        };
        if mated {
            println!(
                "CHECKMATE. {} wins. Press Enter to start a new game.",
                (!mover).name()
            );
            io::stdin().read_line(&mut input)?;
            game = Game::start_position();
            continue;
        }
        if stalled {
            println!("The game is DRAWN via STALEMATE. Press Enter to start a new game.");
            io::stdin().read_line(&mut input)?;
            game = Game::start_position();
            continue;
        }
        if checked {
            println!("{} is in check.", mover.name());
        }

        print!("{} > ", mover.name());
        io::stdout().flush()?;
        input.clear();
        io::stdin().read_line(&mut input)?;

        match InputKind::from(input.as_str()) {
            InputKind::Exit => break,
            InputKind::Newgame => {
                game = Game::start_position();
                println!("Starting new game...");
            }
            InputKind::Help => {
                println!("Commands:");
                println!("newgame | ng => Begin a new game.");
                println!("undo => Take back the last move.");
                println!("help => Print this help text.");
                println!("exit => End the CLI.");
                println!("\nTo make a move, enter it in coordinate form.");
                println!("Examples: d2d4 -> Move the piece on D2 to D4.");
                println!("Castle by moving the king two squares; pawns promote to queens.");
            }
            InputKind::Undo => match game.undo_move() {
                Some(move_) => println!("Undid move {move_}."),
                None => println!("Nothing to undo."),
            },
            InputKind::Error => {
                println!("Invalid command: {}", input.trim());
            }
            InputKind::GameMove(from, to) => {
                if let Err(error) = game.make_move(from, to) {
                    println!("Move rejected: {error}");
                }
            }
        }
    }
    Ok(())
}
