use std::io::{self, BufRead};

extern crate metatac;

use metatac::engine::init_engine;
use metatac::protocol;

/*
Line protocol spoken over stdin/stdout:

go <depth> <x|o> <us> <them> <share>    search and print an info line
show <us> <them> <share>                print the compressed cell string
quit                                    leave the loop

Responses are the token sequences from the protocol module, joined
with spaces. Anything unknown is reported on stderr and skipped.
*/

fn main() {
    init_engine();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.expect("the line could not be read");
        let split = line.split_whitespace().collect::<Vec<&str>>();
        match split.first() {
            Some(&"go") => handle_go(&split),
            Some(&"show") => println!("{}", protocol::show(&split[1..].join(" ")).join(" ")),
            Some(&"quit") => return,
            Some(other) => eprintln!("unknown command: '{}'", other),
            None => {}
        }
    }
}

fn handle_go(split: &[&str]) {
    let side = match split.get(2) {
        Some(&"x") => true,
        Some(&"o") => false,
        _ => {
            println!("error side invalid");
            return;
        }
    };
    let depth = split.get(1).unwrap_or(&"");
    let board = split[3..].join(" ");
    println!("{}", protocol::respond(depth, &board, side).join(" "));
}
