/* For importing/exporting positions, moves and scores as strings */

use crate::engine::config::*;
use crate::moves::*;

// Zone (and cell-within-zone) names in index order.
pub static ZONE_ARRAY_UPPER: [&str; 9] = ["NW", "N", "NE", "W", "C", "E", "SW", "S", "SE"];
pub static ZONE_ARRAY_LOWER: [&str; 9] = ["nw", "n", "ne", "w", "c", "e", "sw", "s", "se"];

// convert from row-major indexing to bitboard indexing
macro_rules! to_bb_index {
    ($row:expr, $col:expr) => {{
        let row: usize = $row;
        let col: usize = $col;
        let zone = (row / 3) * 3 + (col / 3);
        let small_row = row % 3;
        let small_col = col % 3;
        (zone * 9 + (small_row * 3 + small_col)) as Move
    }};
}

// Renders a move as "<zone>/<cell>", e.g. 40 is "c/c".
pub fn move_string(mv: Move) -> String {
    format!(
        "{0}/{1}",
        ZONE_ARRAY_LOWER[(mv / 9) as usize],
        ZONE_ARRAY_LOWER[(mv % 9) as usize]
    )
}

pub fn move_from_string(repr: &str) -> Option<Move> {
    let zone_and_cell: Vec<_> = repr.split('/').collect();
    if zone_and_cell.len() != 2 {
        return None;
    }
    let zone = ZONE_ARRAY_LOWER.iter().position(|&z| z == zone_and_cell[0]);
    let cell = ZONE_ARRAY_LOWER.iter().position(|&c| c == zone_and_cell[1]);
    if let (Some(z), Some(c)) = (zone, cell) {
        Some((9 * z + c) as Move)
    } else {
        None
    }
}

// Renders a score: forced results within the horizon become W<plies>
// or L<plies>, zero is D0, anything else is a signed heuristic.
pub fn score_string(eval: Score, max_depth: usize) -> String {
    if eval <= OUTCOME_LOSS + max_depth as Score {
        format!("L{0}", eval - OUTCOME_LOSS)
    } else if eval >= OUTCOME_WIN - max_depth as Score {
        format!("W{0}", OUTCOME_WIN - eval)
    } else if eval == OUTCOME_DRAW {
        "D0".to_string()
    } else {
        format!("{:+0}", eval)
    }
}

impl Position {
    // the character at a bitboard index: 'x', 'o' or '.'
    fn cell_char(&self, index: Move) -> char {
        if index > 62 {
            if (self.share >> (index - 63)) & 1 == 1 {
                'x'
            } else if (self.share >> (index - 45)) & 1 == 1 {
                'o'
            } else {
                '.'
            }
        } else if (self.us >> index) & 1 == 1 {
            'x'
        } else if (self.them >> index) & 1 == 1 {
            'o'
        } else {
            '.'
        }
    }

    // The three bitboard words as decimal strings. This is the wire
    // representation a UI hands back across the boundary.
    pub fn to_wire(&self) -> String {
        format!("{} {} {}", self.us, self.them, self.share)
    }

    pub fn from_wire(repr: &str) -> Option<Position> {
        let words: Vec<&str> = repr.split_whitespace().collect();
        if words.len() != 3 {
            return None;
        }
        match (
            words[0].parse::<u64>(),
            words[1].parse::<u64>(),
            words[2].parse::<u64>(),
        ) {
            (Ok(us), Ok(them), Ok(share)) => Some(Position { us, them, share }),
            _ => None,
        }
    }

    // Compressed inline representation: nine display rows of cells
    // joined by '/', runs of blanks as digits, then the zone name.
    // The empty board is "9/9/9/9/9/9/9/9/9 any".
    pub fn to_cells(&self) -> String {
        let rows = (0..9)
            .map(|row| {
                (0..9)
                    .map(|col| self.cell_char(to_bb_index!(row, col)))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
            .replace(".........", "9")
            .replace("........", "8")
            .replace(".......", "7")
            .replace("......", "6")
            .replace(".....", "5")
            .replace("....", "4")
            .replace("...", "3")
            .replace("..", "2")
            .replace('.', "1");
        format!(
            "{} {}",
            rows,
            if self.zone() == ZONE_ANY {
                "any"
            } else {
                ZONE_ARRAY_LOWER[self.zone() as usize]
            }
        )
    }

    // Parses to_cells() output. The meta grid is not part of the
    // representation; it is recomputed from the cell patterns.
    pub fn from_cells(repr: &str) -> Option<Position> {
        let decompressed = repr
            .replace('1', ".")
            .replace('2', "..")
            .replace('3', "...")
            .replace('4', "....")
            .replace('5', ".....")
            .replace('6', "......")
            .replace('7', ".......")
            .replace('8', "........")
            .replace('9', ".........");
        let cells_and_zone: Vec<_> = decompressed.split_whitespace().collect();
        if cells_and_zone.len() != 2 {
            return None;
        }
        let (cells, zone) = (cells_and_zone[0], cells_and_zone[1]);

        let mut share: u64 = if let Some(z) = ZONE_ARRAY_LOWER.iter().position(|&z| z == zone) {
            (z as u64) << 54
        } else if zone == "any" {
            ZONE_ANY << 54
        } else {
            return None;
        };

        let rows: Vec<&str> = cells.split('/').collect();
        if rows.len() != 9 || rows.iter().any(|row| row.len() != 9) {
            return None;
        }

        let mut us: u64 = 0;
        let mut them: u64 = 0;
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, c) in row_cells.chars().enumerate() {
                let index = to_bb_index!(row, col);
                if index > 62 {
                    if c == 'x' {
                        share |= 1 << (index - 63);
                    } else if c == 'o' {
                        share |= 1 << (index - 45);
                    }
                } else if c == 'x' {
                    us |= 1 << index;
                } else if c == 'o' {
                    them |= 1 << index;
                }
            }
        }

        // reclaim the meta grid from the cell patterns
        for zone in 0..7 {
            if line_presence(us >> (9 * zone)) {
                share |= 1 << (36 + zone);
            } else if line_presence(them >> (9 * zone)) {
                share |= 1 << (45 + zone);
            }
        }
        for zone in 7..9 {
            if line_presence(share >> (9 * zone - 63)) {
                share |= 1 << (36 + zone);
            } else if line_presence(share >> (9 * zone - 63 + 18)) {
                share |= 1 << (45 + zone);
            }
        }

        Some(Position { us, them, share })
    }

    // ASCII art of the board, the meta grid and the zone to play.
    pub fn to_pretty_board(&self) -> String {
        let mut out: Vec<String> = vec!["---+---+---".to_string()];
        for band in 0..3 {
            for small_row in 0..3 {
                let row = band * 3 + small_row;
                let line = (0..3)
                    .map(|group| {
                        (0..3)
                            .map(|col| match self.cell_char(to_bb_index!(row, group * 3 + col)) {
                                'x' => 'X',
                                'o' => 'O',
                                c => c,
                            })
                            .collect::<String>()
                    })
                    .collect::<Vec<_>>()
                    .join("|");
                out.push(line);
            }
            out.push("---+---+---".to_string());
        }
        for row in 0..3 {
            out.push(
                (0..3)
                    .map(|col| {
                        let zone = row * 3 + col;
                        if (self.meta(true) >> zone) & 1 == 1 {
                            'X'
                        } else if (self.meta(false) >> zone) & 1 == 1 {
                            'O'
                        } else {
                            '.'
                        }
                    })
                    .collect::<String>(),
            );
        }
        out.push(format!(
            "ZONE: {}",
            if self.zone() == ZONE_ANY {
                "ANY"
            } else {
                ZONE_ARRAY_UPPER[self.zone() as usize]
            }
        ));
        out.join("\n")
    }

    // comma separated list of moves, X moving first
    pub fn from_move_list(repr: &str) -> Position {
        let mut pos = Position::new();
        let mut side = true;
        for tok in repr.split(',') {
            pos = pos.play(tok.trim().parse::<Move>().unwrap(), side);
            side = !side;
        }
        pos
    }
}
