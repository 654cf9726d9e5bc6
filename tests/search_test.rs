extern crate metatac;

use metatac::engine::*;
use metatac::moves::*;

// Replays a line from the root and checks every move is legal in the
// position it is played from. Sides alternate starting with `side`.
fn replay(mut pos: Position, mut side: bool, line: &[Move]) -> Position {
    for &mv in line.iter().take_while(|&&mv| mv != NULL_MOVE) {
        assert!(pos.legal_moves().contains(mv));
        pos = pos.play(mv, side);
        side = !side;
    }
    pos
}

#[test]
fn startpos_shallow() {
    let pos = Position::new();

    let (eval, line) = alpha_beta_root(pos, true, 3);
    assert_eq!(eval, 16);
    assert_eq!(&line[..4], &[40, 36, 4, NULL_MOVE]);
    replay(pos, true, &line[..3]);

    let (eval, line) = alpha_beta_root(pos, true, 4);
    assert_eq!(eval, 0);
    assert_eq!(&line[..5], &[0, 2, 22, 40, NULL_MOVE]);
    replay(pos, true, &line[..4]);
}

#[test]
fn reply_to_centre() {
    let pos = Position::new().play(40, true);
    let (eval, line) = alpha_beta_root(pos, false, 3);
    assert_eq!(eval, 0);
    assert_eq!(&line[..3], &[36, 0, 4]);
    replay(pos, false, &line[..3]);
}

#[test]
fn mate_in_one() {
    // X owns the NW and N zones and two cells of the NE zone's top
    // row; completing it completes the meta row
    let us = 0b111 | (0b111 << 9) | (0b011 << 18);
    let share = (1 << 36) | (1 << 37) | (2 << 54);
    let pos = Position::from_words(us, 0, share);

    let (eval, line) = alpha_beta_root(pos, true, 2);
    assert_eq!(eval, OUTCOME_WIN - 1);
    assert_eq!(&line[..2], &[20, NULL_MOVE]);

    let end = replay(pos, true, &line[..2]);
    assert!(end.is_won(true));
}

#[test]
fn forced_loss() {
    // O owns NW and N and threatens NE; X's only move hands O the
    // NE zone and with it the meta row
    let them = 0b111 | (0b111 << 9) | (0b011 << 18);
    let us = 0b100011010 << 27;
    let them = them | (0b011100001 << 27);
    let share = (1 << 45) | (1 << 46) | (3 << 54);
    let pos = Position::from_words(us, them, share);

    assert_eq!(pos.legal_moves().collect::<Vec<Move>>(), vec![29]);

    let (eval, line) = alpha_beta_root(pos, true, 2);
    assert_eq!(eval, OUTCOME_LOSS + 2);
    assert_eq!(&line[..2], &[29, 20]);

    let end = replay(pos, true, &line[..2]);
    assert!(end.is_won(false));
}

#[test]
fn dead_draw() {
    // every zone is a filled stalemate except the centre, where the
    // one remaining cell cannot complete a line for either side
    let mut us: u64 = 0;
    let mut them: u64 = 0;
    for zone in 0..7 {
        if zone == 4 {
            continue;
        }
        us |= 0b101011010 << (9 * zone);
        them |= 0b010100101 << (9 * zone);
    }
    us |= 0b001110001 << 36;
    them |= 0b110001100 << 36;
    let share = 0b101011010
        | (0b101011010 << 9)
        | (0b010100101 << 18)
        | (0b010100101 << 27)
        | (ZONE_ANY << 54);
    let pos = Position::from_words(us, them, share);

    assert_eq!(pos.legal_moves().collect::<Vec<Move>>(), vec![37]);

    let (eval, line) = alpha_beta_root(pos, true, 2);
    assert_eq!(eval, OUTCOME_DRAW);
    assert_eq!(&line[..2], &[37, NULL_MOVE]);

    let (eval, line) = alpha_beta_root(pos, true, 1);
    assert_eq!(eval, OUTCOME_DRAW);
    assert_eq!(line[0], 37);
}

#[test]
fn line_shape() {
    // the line is always MAX_PLY long with NULL_MOVE padding past the
    // requested depth, and scores stay inside the outcome window
    let pos = Position::new();
    for depth in 1..5 {
        let (eval, line) = alpha_beta_root(pos, true, depth);
        assert!(eval >= OUTCOME_LOSS && eval <= OUTCOME_WIN);
        assert_eq!(line.len(), MAX_PLY);
        for slot in depth..MAX_PLY {
            assert_eq!(line[slot], NULL_MOVE);
        }
        replay(pos, true, &line[..depth]);
    }
}

#[test]
fn mate_distance_shrinks_with_depth() {
    // deeper searches never report a longer road to a forced win
    let us = 0b111 | (0b111 << 9) | (0b011 << 18);
    let share = (1 << 36) | (1 << 37) | (2 << 54);
    let pos = Position::from_words(us, 0, share);

    for depth in 2..6 {
        let (eval, _) = alpha_beta_root(pos, true, depth);
        assert_eq!(eval, OUTCOME_WIN - 1);
    }
}
