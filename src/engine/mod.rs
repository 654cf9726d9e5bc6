pub mod config;
pub mod eval;
pub mod search;

use once_cell::sync::Lazy;

use crate::moves::*;

pub use crate::engine::config::{Score, MAX_PLY, OUTCOME_DRAW, OUTCOME_LOSS, OUTCOME_WIN};
pub use crate::engine::eval::evaluate;
pub use crate::engine::search::{alpha_beta, alpha_beta_root, Line};

// Builds the evaluation tables up front instead of paying for them on
// the first evaluate() call mid-search.
pub fn init_engine() {
    Lazy::force(&eval::TABLES);
}

// no time limit; single thread
pub fn best_move(depth: usize, pos: &Position, side: bool) -> (Move, Score) {
    debug_assert!(depth >= 1);
    let (eval, line) = alpha_beta_root(*pos, side, depth);
    (line[0], eval)
}
