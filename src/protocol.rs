/*
Text boundary for embedders. A request carries a search depth, the
three bitboard words as decimal strings, and the side the next mark
belongs to; the answer is a tagged token sequence:

    info depth <d> <pv moves...> <score>
    error depth invalid
    error depth overflow <MAX_PLY>
    error board parse

Bad input comes back as an error sequence, never as a panic.
*/

use crate::engine::*;
use crate::moves::format::*;
use crate::moves::*;

fn error(category: &str, detail: &[&str]) -> Vec<String> {
    let mut out = vec!["error".to_string(), category.to_string()];
    out.extend(detail.iter().map(|d| d.to_string()));
    out
}

// Runs a search described by raw request tokens and renders the
// outcome. `side` selects the half the first move marks, as in
// Position::play.
pub fn respond(depth: &str, board: &str, side: bool) -> Vec<String> {
    let depth = match depth.parse::<usize>() {
        Ok(d) if d == 0 => return error("depth", &["invalid"]),
        Ok(d) if d > MAX_PLY => return error("depth", &["overflow", &MAX_PLY.to_string()]),
        Ok(d) => d,
        Err(_) => return error("depth", &["invalid"]),
    };

    let pos = match Position::from_wire(board) {
        Some(pos) => pos,
        None => return error("board", &["parse"]),
    };

    let (eval, line) = alpha_beta_root(pos, side, depth);

    let mut out = vec!["info".to_string(), "depth".to_string(), depth.to_string()];
    out.extend(
        line[..depth]
            .iter()
            .take_while(|&&mv| mv != NULL_MOVE)
            .map(|&mv| move_string(mv)),
    );
    out.push(score_string(eval, depth));
    out
}

// Renders three decimal board words as the compressed cell string, or
// an error sequence if they fail to parse.
pub fn show(board: &str) -> Vec<String> {
    match Position::from_wire(board) {
        Some(pos) => vec!["board".to_string(), pos.to_cells()],
        None => error("board", &["parse"]),
    }
}
