extern crate metatac;

use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use metatac::moves::*;

#[test]
fn startpos_moves() {
    let pos = Position::new();
    assert_eq!(pos.words(), (0, 0, ZONE_ANY << 54));

    let moves: Vec<Move> = pos.legal_moves().collect();
    assert_eq!(moves.len(), 81);
    // ascending, one per cell
    for (i, mv) in moves.iter().enumerate() {
        assert_eq!(*mv as usize, i);
    }
}

#[test]
fn sent_to_zone() {
    // centre cell of the centre zone sends the reply to the centre zone
    let pos = Position::new().play(40, true);
    let (us, them, share) = pos.words();
    assert_eq!(us, 1 << 40);
    assert_eq!(them, 0);
    assert_eq!(pos.zone(), 4);
    assert_eq!((share >> 36) & 0x3FFFF, 0);

    let moves: Vec<Move> = pos.legal_moves().collect();
    assert_eq!(moves, vec![36, 37, 38, 39, 41, 42, 43, 44]);
}

#[test]
fn zone_claim() {
    // X takes cells 1, 2, 0 of the north-west zone while O shuttles
    // between zones; the last move forms the top row
    let mut pos = Position::new();
    let mut side = true;
    for &mv in [1, 9, 2, 18].iter() {
        assert!(pos.legal_moves().contains(mv));
        pos = pos.play(mv, side);
        side = !side;
    }
    assert_eq!((pos.words().2 >> 36) & 1, 0);

    pos = pos.play(0, true);
    assert_eq!((pos.words().2 >> 36) & 1, 1);
    assert!(!pos.is_won(true));

    // the claimed zone no longer receives moves
    assert_eq!(pos.zone(), ZONE_ANY);
    assert!(pos.legal_moves().all(|mv| mv / 9 != 0));
}

#[test]
fn spill_zones() {
    // zones 7 and 8 live in the share word
    let pos = Position::new().play(80, true);
    let (us, them, share) = pos.words();
    assert_eq!(us, 0);
    assert_eq!(them, 0);
    assert_eq!(share & 0x3FFFF, 1 << 17);
    assert_eq!(pos.zone(), 8);

    let pos = pos.play(72, false);
    let (_, _, share) = pos.words();
    assert_eq!((share >> 18) & 0x3FFFF, 1 << 9);
    assert_eq!(pos.zone(), 0);
}

// Random playouts; every intermediate position has to satisfy the
// board invariants, and every generated move has to land on an empty
// cell of an undecided zone.
#[test]
fn random_playouts() {
    let mut rng = SmallRng::seed_from_u64(20260802);
    for _ in 0..200 {
        let mut pos = Position::new();
        let mut side = true;
        loop {
            assert!(pos.assert());

            let moves = pos.legal_moves();
            let size = moves.size();
            if size == 0 {
                break;
            }

            let zone = pos.zone();
            let (us, them, share) = pos.words();
            for mv in moves {
                // empty cell, undecided zone, inside the sent-to zone
                if mv > 62 {
                    assert_eq!(((share | (share >> 18)) >> (mv - 63)) & 1, 0);
                } else {
                    assert_eq!(((us | them) >> mv) & 1, 0);
                }
                assert_eq!((pos.meta_both() >> (mv / 9)) & 1, 0);
                if zone != ZONE_ANY {
                    assert_eq!((mv / 9) as u64, zone);
                }
            }

            let chosen = pos.legal_moves().nth(rng.gen_range(0, size)).unwrap();
            let next = pos.play(chosen, side);

            // the successor either forces the named zone or frees the
            // choice exactly when that zone is decided or full
            let sent = (chosen % 9) as u64;
            let (us, them, share) = next.words();
            let occ = if sent > 6 {
                ((share | (share >> 18)) >> (9 * sent - 63)) & 0x1FF
            } else {
                ((us | them) >> (9 * sent)) & 0x1FF
            };
            let decided = (next.meta_both() >> sent) & 1 == 1;
            if next.zone() == ZONE_ANY {
                assert!(decided || occ == 0x1FF);
            } else {
                assert_eq!(next.zone(), sent);
                assert!(!decided && occ != 0x1FF);
            }

            pos = next;
            side = !side;
        }

        // finished games carry at most one winner
        assert!(!(pos.is_won(true) && pos.is_won(false)));
    }
}
