use std::io::{self, BufRead, Stdin};
use std::process::exit;
use std::str::SplitWhitespace;

use metatac::engine::{best_move, init_engine, Score, MAX_PLY};
use metatac::moves::format::{move_from_string, move_string, score_string};
use metatac::moves::Position;

static mut DEPTH: usize = 5;
static mut EVAL: Score = 0;

// the human marks the side-to-move half, the engine the other
const HUMAN: bool = true;
const ENGINE: bool = false;

fn next_line(stdin: &mut Stdin) -> String {
    stdin
        .lock()
        .lines()
        .next()
        .expect("there was no next line")
        .expect("the line could not be read")
}

fn command_help(_: &mut SplitWhitespace, _: &mut Position) -> bool {
    static HELP_TEXT: &'static str = "
COMMANDS
========
h                       Display this message.
p                       Print current board.
m <zone>/<cell>         Make a move, e.g. 'm nw/c' plays the centre
                            cell of the north-west zone. Zones and
                            cells use the names nw n ne w c e sw s se.
d [depth]               Change difficulty to the given depth. If no
                            argument is given, the current depth is printed.
q                       Quit this program.
e                       Print evaluation score of the engine's last search.
";
    println!("{}", HELP_TEXT);
    false
}

fn command_print(_: &mut SplitWhitespace, pos: &mut Position) -> bool {
    println!("{}", pos.to_pretty_board());
    false
}

fn command_make_move(tokens: &mut SplitWhitespace, pos: &mut Position) -> bool {
    let repr = match tokens.next() {
        Some(val) => val,
        None => {
            println!("ERROR: Need a move argument!");
            return false;
        }
    };

    let mv = match move_from_string(repr) {
        Some(val) => val,
        None => {
            println!("ERROR: could not parse move '{}'", repr);
            return false;
        }
    };

    if !pos.legal_moves().contains(mv) {
        println!("ERROR: illegal move");
        return false;
    }

    *pos = pos.play(mv, HUMAN);
    true
}

fn command_depth(tokens: &mut SplitWhitespace, _: &mut Position) -> bool {
    match tokens.next() {
        Some(tok) => {
            let dep: usize = match tok.parse() {
                Ok(val) => val,
                Err(err) => {
                    println!("ERROR parsing depth: {:?}", err);
                    return false;
                }
            };
            if dep == 0 || dep > MAX_PLY {
                println!("ERROR: depth must be between 1 and {}", MAX_PLY);
                return false;
            }
            unsafe {
                DEPTH = dep;
            }
        }
        None => unsafe {
            println!("{}", DEPTH);
        },
    }
    false
}

fn command_evaluate(_: &mut SplitWhitespace, _: &mut Position) -> bool {
    unsafe {
        println!("{}", score_string(EVAL, DEPTH));
    }
    false
}

fn main() {
    init_engine();
    let mut pos = Position::new();
    let mut player_move = true;
    let mut stdin = io::stdin();
    loop {
        if pos.is_won(HUMAN) {
            println!("X wins!");
            return;
        }
        if pos.is_won(ENGINE) {
            println!("O wins!");
            return;
        }
        if pos.legal_moves().size() == 0 {
            println!("It's a draw!");
            return;
        }

        if player_move {
            let mut move_made = false;
            println!("{}", pos.to_pretty_board());
            while !move_made {
                println!("Your move.");
                println!("Enter command. 'h' for help.");
                let line = next_line(&mut stdin);
                let mut tokens = line.split_whitespace();
                // function returns true if a move is made
                let func: fn(&mut SplitWhitespace, &mut Position) -> bool = match tokens.next() {
                    Some("h") => command_help,
                    Some("p") => command_print,
                    Some("m") => command_make_move,
                    Some("q") => |_, _| exit(0),
                    Some("d") => command_depth,
                    Some("e") => command_evaluate,
                    None => |_, _| false,
                    Some(_) => command_help,
                };

                move_made = func(&mut tokens, &mut pos);
            }

            player_move = false;
        } else {
            println!("Thinking...");
            let mv;
            unsafe {
                let tup = best_move(DEPTH, &pos, ENGINE);
                mv = tup.0;
                EVAL = tup.1;
            }
            pos = pos.play(mv, ENGINE);
            println!("Your opponent played {}", move_string(mv));
            println!();
            player_move = true;
        }
    }
}
