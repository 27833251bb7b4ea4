use std::env;
use std::process;

use chess_rules::game::Game;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--help") {
        eprintln!("usage: game_status [--fen \"<fen>\"] <move1> <move2> ...");
        return;
    }

    let (fen, moves) = match args.first().map(String::as_str) {
        Some("--fen") => match args.get(1) {
            Some(fen) => (Some(fen.as_str()), &args[2..]),
            None => {
                eprintln!("Error: --fen needs a position");
                process::exit(2);
            }
        },
        _ => (None, &args[..]),
    };

    let mut game = match fen {
        Some(fen) => Game::from_fen(fen).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Game::new(),
    };

    for mv in moves {
        if let Err(e) = game.make_move(mv) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let legal_moves = game.all_legal_moves();
    println!(
        "side_to_move: {}",
        game.current_player().to_string().to_lowercase()
    );
    println!("fen: {}", game.board_as_fen());
    println!("check: {}", game.is_check());
    println!("checkmate: {}", game.is_checkmate());
    println!("stalemate: {}", game.is_stalemate());
    println!("draw: {}", game.is_draw());
    println!("outcome: {}", game.outcome());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
}
