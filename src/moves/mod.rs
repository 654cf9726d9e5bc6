use bitintr::*;

pub mod format;

/*
The 9x9 board is split into nine 3x3 zones. Indexing is done
zone-by-zone, row-major from the top-left:

0  1  2  | 9  10 11 |
3  4  5  | 12 13 14 | ...
6  7  8  | 15 16 17 |
==========================
...      |   ...    | ...

A move is the index of the cell it marks. The cell index within its
zone (mv % 9) doubles as the zone the opponent is sent to.
*/
pub type Move = u8;
const BOARD_SIZE: Move = 81;

// 81 is the first index with no cell behind it; used to pad lines.
pub const NULL_MOVE: Move = 81;

// Zone field value outside the 0-8 range meaning the player may pick
// any zone.
pub const ZONE_ANY: u64 = 9;

pub(crate) const LINE: u64 = 0b111;
pub(crate) const CHUNK: u64 = 0b111111111;
pub(crate) const DBLCHUNK: u64 = (CHUNK << 9) | CHUNK;
const EXCLZONE: u64 = !(0b1111u64 << 54);
const BOARD_OCC: u128 = 0x1ffffffffffffffffffffu128;

// Returns the given offset for the opponent half, 0 for the
// side-to-move half. Keeps the bit arithmetic below free of if-blocks.
#[inline]
pub(crate) const fn half_offset(side: bool, offset: u64) -> u64 {
    if side {
        0
    } else {
        offset
    }
}

/*
A grid is the least significant 9 bits of a u64. The eight lines of a
grid are scanned in the fixed order: col0, col1, col2, row0, row1,
row2, anti-diagonal, main diagonal.
*/

// Returns a 24-bit value where each 3-bit slot holds the occupancy
// count of one line. Each multiplier drops a 1 into the slot of every
// line passing through that cell; summing accumulates the counts.
#[inline]
pub const fn lines(grid: u64) -> u64 {
    0b_000_100_000_000_100_000_000_100 * (grid & 1)
        + 0b_000_000_000_000_010_000_100_000 * ((grid >> 1) & 1)
        + 0b_100_000_000_000_001_100_000_000 * ((grid >> 2) & 1)
        + 0b_000_000_000_100_000_000_000_010 * ((grid >> 3) & 1)
        + 0b_010_010_000_010_000_000_010_000 * ((grid >> 4) & 1)
        + 0b_000_000_000_001_000_010_000_000 * ((grid >> 5) & 1)
        + 0b_001_000_100_000_000_000_000_001 * ((grid >> 6) & 1)
        + 0b_000_000_010_000_000_000_001_000 * ((grid >> 7) & 1)
        + 0b_000_001_001_000_000_001_000_000 * ((grid >> 8) & 1)
}

// True iff the grid contains a completed line of three. An empty cell
// masks away every line passing through it; any line surviving all
// nine masks is fully occupied.
#[inline]
pub const fn line_presence(grid: u64) -> bool {
    0 != ((0b10110110 | ((grid & 1) * 0xff))
        & (0b11101110 | (((grid >> 1) & 1) * 0xff))
        & (0b01011110 | (((grid >> 2) & 1) * 0xff))
        & (0b11110101 | (((grid >> 3) & 1) * 0xff))
        & (0b00101101 | (((grid >> 4) & 1) * 0xff))
        & (0b11011101 | (((grid >> 5) & 1) * 0xff))
        & (0b01110011 | (((grid >> 6) & 1) * 0xff))
        & (0b11101011 | (((grid >> 7) & 1) * 0xff))
        & (0b10011011 | (((grid >> 8) & 1) * 0xff)))
}

// tzcnt() is not implemented for u128. Emulate it from the two halves.
trait Tzcnt128 {
    fn tzcnt(&self) -> Self;
}

impl Tzcnt128 for u128 {
    #[inline]
    fn tzcnt(&self) -> Self {
        let cnt1 = (0i64 - ((*self as u64) == 0u64) as i64) & ((*self >> 64) as u64).tzcnt() as i64;
        cnt1 as u128 + (*self as u64).tzcnt() as u128
    }
}

// Legal moves packed into the low 81 bits of a u128, one bit per cell.
// Iteration pops the lowest bit, so moves come out in ascending order:
// zones 0..8, cells 0..8 within each zone.
#[derive(Copy, Clone)]
pub struct Moves(u128);

impl Moves {
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.0 & (1u128 << mv) != 0
    }
}

impl Iterator for Moves {
    type Item = Move;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            n => {
                let i = n.tzcnt();
                self.0 &= !(1 << i);
                Some(i as Move)
            }
        }
    }
}

/*
Nine zones of 9 bits is 81 bits per player, one too many for a u64, so
zones 7 and 8 spill into `share` together with the meta grid and the
zone-to-play field:

us:    bits 0-62   zones 0-6, side to move
them:  bits 0-62   zones 0-6, opponent
share: bits 0-17   zones 7-8, side to move
       bits 18-35  zones 7-8, opponent
       bits 36-44  meta grid, side to move
       bits 45-53  meta grid, opponent
       bits 54-57  zone to play next, 0-8 or ZONE_ANY

A position never mutates; play() returns the successor. Three words
copy cheaply, so the search keeps whole positions on its stack frames.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) us: u64,
    pub(crate) them: u64,
    pub(crate) share: u64,
}

impl Position {
    pub fn new() -> Position {
        Position {
            us: 0,
            them: 0,
            share: ZONE_ANY << 54,
        }
    }

    pub fn from_words(us: u64, them: u64, share: u64) -> Position {
        Position { us, them, share }
    }

    pub fn words(&self) -> (u64, u64, u64) {
        (self.us, self.them, self.share)
    }

    // zone the next move must land in, or ZONE_ANY
    #[inline]
    pub fn zone(&self) -> u64 {
        (self.share >> 54) & 0b1111
    }

    // aligned 9-bit occupancy of one zone for one half
    #[inline]
    pub(crate) fn half_zone(&self, side: bool, zone: u64) -> u64 {
        if zone > 6 {
            (self.share >> (9 * zone - 63 + half_offset(side, 18))) & CHUNK
        } else if side {
            (self.us >> (9 * zone)) & CHUNK
        } else {
            (self.them >> (9 * zone)) & CHUNK
        }
    }

    // joint occupancy of one zone
    #[inline]
    fn both_zone(&self, zone: u64) -> u64 {
        if zone > 6 {
            ((self.share | (self.share >> 18)) >> (9 * zone - 63)) & CHUNK
        } else {
            ((self.us | self.them) >> (9 * zone)) & CHUNK
        }
    }

    // meta grid of zones won by one half
    #[inline]
    pub fn meta(&self, side: bool) -> u64 {
        (self.share >> (36 + half_offset(side, 9))) & CHUNK
    }

    // zones decided for either half
    #[inline]
    pub fn meta_both(&self) -> u64 {
        ((self.share >> 36) | (self.share >> 45)) & CHUNK
    }

    #[inline]
    pub fn is_won(&self, side: bool) -> bool {
        line_presence(self.meta(side))
    }

    // Legal moves of the position, empty when the meta grid already
    // holds a line for either half. A forced zone emits its free
    // cells; ZONE_ANY walks every undecided zone.
    pub fn legal_moves(&self) -> Moves {
        if self.is_won(true) || self.is_won(false) {
            return Moves(0);
        }

        let zone = self.zone();
        if zone == ZONE_ANY {
            let mut mask = 0u128;
            let mut open = !self.meta_both() & CHUNK;
            while open != 0 {
                let z = open.tzcnt();
                mask |= ((!self.both_zone(z) & CHUNK) as u128) << (9 * z);
                open &= !(1 << z);
            }
            Moves(mask & BOARD_OCC)
        } else {
            Moves(((!self.both_zone(zone) & CHUNK) as u128) << (9 * zone))
        }
    }

    // Marks `mv` for the half selected by `side` (true marks the
    // side-to-move words) and returns the successor position. Callers
    // alternate `side`; the move is assumed to come from legal_moves().
    pub fn play(&self, mv: Move, side: bool) -> Position {
        debug_assert!(mv < BOARD_SIZE);
        let (mut us, mut them, mut share) = (self.us, self.them, self.share);
        let zone = (mv / 9) as u64;

        // set the cell bit, then test the zone for a fresh line
        let formed = if mv > 62 {
            share |= 1 << (mv as u64 - 63 + half_offset(side, 18));
            line_presence((share >> (9 * zone - 63 + half_offset(side, 18))) & CHUNK)
        } else if side {
            us |= 1 << mv;
            line_presence((us >> (9 * zone)) & CHUNK)
        } else {
            them |= 1 << mv;
            line_presence((them >> (9 * zone)) & CHUNK)
        };

        // a fresh line claims the zone on the meta grid
        if formed {
            share |= 1 << (36 + half_offset(side, 9) + zone);
        }

        // the cell just played names the zone the opponent is sent to;
        // a decided or full target frees the opponent to pick any zone
        let sent = (mv % 9) as u64;
        let chunk = if sent > 6 {
            ((share | (share >> 18)) >> (9 * sent - 63)) & CHUNK
        } else {
            ((us | them) >> (9 * sent)) & CHUNK
        };
        let next = if chunk == CHUNK || (((share | (share >> 9)) >> (36 + sent)) & 1) == 1 {
            ZONE_ANY
        } else {
            sent
        };

        Position {
            us,
            them,
            share: (share & EXCLZONE) | (next << 54),
        }
    }

    #[allow(dead_code)]
    // returns bool so that we can put this in a debug_assert! macro
    // and not have this code run in production
    pub fn assert(&self) -> bool {
        // cell occupancies don't overlap
        debug_assert_eq!(self.us & self.them, 0);
        debug_assert_eq!((self.share & (self.share >> 18)) & DBLCHUNK, 0);

        // meta halves don't overlap
        debug_assert_eq!(self.meta(true) & self.meta(false), 0);

        // bit representations are within range
        debug_assert_eq!(self.us >> 63, 0);
        debug_assert_eq!(self.them >> 63, 0);
        debug_assert_eq!(self.share >> 58, 0);
        debug_assert!(self.zone() <= ZONE_ANY);

        // a claimed zone holds a line for its owner
        for zone in 0..9 {
            if (self.meta(true) >> zone) & 1 == 1 {
                debug_assert!(line_presence(self.half_zone(true, zone)));
            }
            if (self.meta(false) >> zone) & 1 == 1 {
                debug_assert!(line_presence(self.half_zone(false, zone)));
            }
        }

        true
    }
}

pub fn perft(depth: u16, pos: Position, side: bool) -> u64 {
    debug_assert!(pos.assert());
    if depth == 0 {
        return pos.legal_moves().size() as u64;
    }
    let mut count: u64 = 0;

    for mv in pos.legal_moves() {
        count += perft(depth - 1, pos.play(mv, side), !side);
    }
    count
}
