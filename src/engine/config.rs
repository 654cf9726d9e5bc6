
pub type Score = i32;

// Outcome scores. Forced results get their distance to the root
// folded in by the search, so they stay strictly outside the
// heuristic range.
pub const OUTCOME_WIN: Score = 1000000;
pub const OUTCOME_DRAW: Score = 0;
pub const OUTCOME_LOSS: Score = -1000000;

/* EVAL PARAMETERS */

// line scoring
pub(crate) const BIG_TWO_COUNT: Score = 90;
pub(crate) const BIG_ONE_COUNT: Score = 20;
pub(crate) const SMALL_TWO_COUNT: Score = 8;
pub(crate) const SMALL_ONE_COUNT: Score = 1;

// positional scoring
pub(crate) const CENTRE: Score = 9;
pub(crate) const CORNER: Score = 7;
pub(crate) const EDGE: Score = 5;
pub(crate) const SQ_BIG: Score = 25;

// The absolute upper bound of total plies is 81, one per cell, but a
// lower cap keeps the per-frame line arrays small while still being
// deeper than any search that finishes in reasonable time.
pub const MAX_PLY: usize = 32;
