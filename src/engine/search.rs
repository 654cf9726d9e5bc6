use crate::engine::config::*;
use crate::engine::eval::*;
use crate::moves::*;

// A line of play. Slots past the root depth stay NULL_MOVE.
pub type Line = [Move; MAX_PLY];

// Fail-hard negamax alpha-beta. Returns the score of the position
// within [alpha, beta] and the principal variation that backs it up.
//
// `side` selects which half of the board the move at this level marks
// and fixes the sign of the leaf evaluation; the position itself is
// never re-oriented. Each level writes its move into slot
// max_depth - depth of the line bubbling up from the leaf.
pub fn alpha_beta(
    pos: Position,
    side: bool,
    depth: usize,
    mut alpha: Score,
    beta: Score,
    max_depth: usize,
) -> (Score, Line) {
    debug_assert!(pos.assert());

    if depth == 0 {
        let eval = evaluate(&pos, side);
        // pull forced results toward the root so the search prefers
        // the shortest win and the longest loss
        let adjusted = match eval {
            OUTCOME_WIN => eval - (max_depth - depth) as Score,
            OUTCOME_LOSS => eval + (max_depth - depth) as Score,
            _ => eval,
        };
        return (adjusted, [NULL_MOVE; MAX_PLY]);
    }

    let moves = pos.legal_moves();

    if moves.size() == 0 {
        // no moves: the meta grid alone classifies the terminal, and
        // anything short of a mate counts as a draw
        let eval = signed(side, meta_eval(&pos));
        let adjusted = match eval {
            OUTCOME_WIN => eval - (max_depth - depth) as Score,
            OUTCOME_LOSS => eval + (max_depth - depth) as Score,
            _ => OUTCOME_DRAW,
        };
        return (adjusted, [NULL_MOVE; MAX_PLY]);
    }

    let mut pv = [NULL_MOVE; MAX_PLY];

    for mv in moves {
        let (eval, mut line) = alpha_beta(
            pos.play(mv, side),
            !side,
            depth - 1,
            -beta,
            -alpha,
            max_depth,
        );
        let eval = -eval;

        line[max_depth - depth] = mv;

        if eval >= beta {
            // fail-hard beta cutoff
            return (beta, line);
        }
        if eval > alpha {
            // new best move found
            alpha = eval;
            pv = line;
        }
    }

    (alpha, pv)
}

// Search entry point: full window, PV as long as the requested depth.
pub fn alpha_beta_root(pos: Position, side: bool, depth: usize) -> (Score, Line) {
    debug_assert!(depth >= 1 && depth <= MAX_PLY);
    alpha_beta(pos, side, depth, OUTCOME_LOSS, OUTCOME_WIN, depth)
}
