//! Console board rendering.
//!
//! Maps the 16-slot ring onto the border of a 5x5 grid and draws it with
//! box-drawing characters. Each border cell shows the seats standing on
//! the slot, the tile name, the owner, and the 1-indexed slot number.
//! Rendering reads state and writes to a caller-supplied sink; it never
//! mutates the game.

use std::io::{self, Write};

use crate::board::ring::{Ring, Slot};
use crate::board::tile::RING_SIZE;
use crate::game::Verdict;
use crate::player::{Player, Seat, SEAT_COUNT};

const GRID: usize = 5;
const CELL_WIDTH: usize = 8;
const CELL_LINES: usize = 4;
/// Width of the hollow middle of the grid: three cells plus their two
/// column separators.
const INNER_GAP: usize = 3 * CELL_WIDTH + 2;

const TITLE: &str = "SILICONOPOLY";

const RESET: &str = "\x1b[0m";

/// Border coordinates of slots 1..=16, clockwise from the top-left
/// corner.
const BORDER_POSITIONS: [(usize, usize); RING_SIZE] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 4),
    (2, 4),
    (3, 4),
    (4, 4),
    (4, 3),
    (4, 2),
    (4, 1),
    (4, 0),
    (3, 0),
    (2, 0),
    (1, 0),
];

const fn seat_color(seat: Seat) -> &'static str {
    match seat {
        Seat::P1 => "\x1b[33m",
        Seat::P2 => "\x1b[32m",
    }
}

/// Clears the terminal and homes the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[1;1H")
}

/// Draws the balance line, the last roll (if any), and the active seat.
pub fn draw_header<W: Write>(
    out: &mut W,
    players: &[Player; SEAT_COUNT],
    current: Seat,
    roll: Option<u32>,
) -> io::Result<()> {
    writeln!(
        out,
        "{} money: {}$ | {} money: {}$",
        players[0].name, players[0].balance, players[1].name, players[1].balance
    )?;
    match roll {
        Some(roll) => writeln!(out, "{} rolled: {}", players[current.index()].name, roll)?,
        None => writeln!(out)?,
    }
    writeln!(out, "Current player: {}", players[current.index()].name)
}

/// Draws the full board grid.
pub fn draw_board<W: Write>(
    out: &mut W,
    ring: &Ring,
    players: &[Player; SEAT_COUNT],
) -> io::Result<()> {
    let mut grid = [[None; GRID]; GRID];
    for (slot_idx, &(row, col)) in BORDER_POSITIONS.iter().enumerate() {
        grid[row][col] = Some(slot_idx);
    }

    for row in 0..GRID {
        draw_separator(out, row)?;
        for line in 0..CELL_LINES {
            if row == 0 || row == GRID - 1 {
                let mut text = String::new();
                for cell in grid[row] {
                    text.push('│');
                    text.push_str(&cell_line(ring, players, cell, line));
                }
                text.push('│');
                writeln!(out, "{}", text)?;
            } else {
                writeln!(
                    out,
                    "│{}│{:gap$}│{}│",
                    cell_line(ring, players, grid[row][0], line),
                    "",
                    cell_line(ring, players, grid[row][GRID - 1], line),
                    gap = INNER_GAP
                )?;
            }
        }
    }
    draw_separator(out, GRID)
}

/// Draws the end-of-game banner.
pub fn draw_winner<W: Write>(
    out: &mut W,
    verdict: Verdict,
    players: &[Player; SEAT_COUNT],
) -> io::Result<()> {
    let winner = &players[verdict.winner().index()];
    match verdict {
        Verdict::Bankruptcy { winner: seat } => {
            let loser = &players[seat.other().index()];
            writeln!(
                out,
                "{} is bankrupt with {}$. {} wins!",
                loser.name, loser.balance, winner.name
            )
        }
        Verdict::Collection { .. } => {
            writeln!(out, "{} owns one of every component and wins!", winner.name)
        }
    }
}

fn draw_separator<W: Write>(out: &mut W, row: usize) -> io::Result<()> {
    match row {
        0 => writeln!(out, "┌────────┬────────┬────────┬────────┬────────┐"),
        1 => writeln!(out, "├────────┼────────┴────────┴────────┼────────┤"),
        2 => writeln!(out, "├────────┤{:^gap$}├────────┤", TITLE, gap = INNER_GAP),
        3 => writeln!(out, "├────────┤{:^gap$}├────────┤", "", gap = INNER_GAP),
        4 => writeln!(out, "├────────┼────────┬────────┬────────┼────────┤"),
        _ => writeln!(out, "└────────┴────────┴────────┴────────┴────────┘"),
    }
}

fn cell_line(
    ring: &Ring,
    players: &[Player; SEAT_COUNT],
    cell: Option<usize>,
    line: usize,
) -> String {
    let idx = match cell {
        Some(idx) => idx,
        None => return " ".repeat(CELL_WIDTH),
    };
    let slot = ring.slot(idx);
    match line {
        0 => occupants_cell(slot, players),
        1 => center(slot.tile.name(), CELL_WIDTH),
        2 => {
            let owner = match slot.owner {
                Some(seat) => players[seat.index()].name.as_str(),
                None => "--",
            };
            center(owner, CELL_WIDTH)
        }
        _ => format!("{:<width$}", idx + 1, width = CELL_WIDTH),
    }
}

/// Renders the seats on a slot, colored per seat and centered. Names
/// that do not fit the cell fall back to the seat defaults.
fn occupants_cell(slot: &Slot, players: &[Player; SEAT_COUNT]) -> String {
    if slot.occupants.is_empty() {
        return " ".repeat(CELL_WIDTH);
    }
    let mut names: Vec<(Seat, &str)> = slot
        .occupants
        .iter()
        .map(|&seat| (seat, players[seat.index()].name.as_str()))
        .collect();
    if joined_width(&names) > CELL_WIDTH {
        for entry in names.iter_mut() {
            entry.1 = entry.0.default_name();
        }
    }
    let visible = joined_width(&names).min(CELL_WIDTH);
    let pad = CELL_WIDTH - visible;
    let left = pad / 2;
    let colored: Vec<String> = names
        .iter()
        .map(|&(seat, name)| format!("{}{}{}", seat_color(seat), name, RESET))
        .collect();
    format!(
        "{}{}{}",
        " ".repeat(left),
        colored.join(" "),
        " ".repeat(pad - left)
    )
}

fn joined_width(names: &[(Seat, &str)]) -> usize {
    let text: usize = names.iter().map(|(_, n)| n.chars().count()).sum();
    text + names.len() - 1
}

/// Centers `text` in `width` columns, truncating if it does not fit.
fn center(text: &str, width: usize) -> String {
    let visible = text.chars().count();
    if visible >= width {
        return text.chars().take(width).collect();
    }
    let pad = width - visible;
    let left = pad / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(pad - left)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ring::START_SLOT;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample() -> (Ring, [Player; SEAT_COUNT]) {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut ring = Ring::shuffled(&mut rng);
        ring.add_occupant(START_SLOT, Seat::P1);
        ring.add_occupant(START_SLOT, Seat::P2);
        let players = [Player::new("P1", 10_000), Player::new("P2", 10_000)];
        (ring, players)
    }

    #[test]
    fn board_draws_every_slot_number() {
        let (ring, players) = sample();
        let mut out = Vec::new();
        draw_board(&mut out, &ring, &players).unwrap();
        let text = String::from_utf8(out).unwrap();
        for number in 1..=RING_SIZE {
            assert!(
                text.contains(&number.to_string()),
                "missing slot number {}",
                number
            );
        }
        assert!(text.contains("START"));
        assert!(text.contains(TITLE));
    }

    #[test]
    fn board_has_the_expected_line_count() {
        let (ring, players) = sample();
        let mut out = Vec::new();
        draw_board(&mut out, &ring, &players).unwrap();
        let text = String::from_utf8(out).unwrap();
        // 6 separators plus 5 rows of 4 content lines.
        assert_eq!(text.lines().count(), 6 + GRID * CELL_LINES);
    }

    #[test]
    fn header_shows_balances_and_roll() {
        let (_, players) = sample();
        let mut out = Vec::new();
        draw_header(&mut out, &players, Seat::P2, Some(4)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("P1 money: 10000$ | P2 money: 10000$"));
        assert!(text.contains("P2 rolled: 4"));
        assert!(text.contains("Current player: P2"));
    }

    #[test]
    fn winner_banner_names_the_reason() {
        let (_, mut players) = sample();
        players[0].balance = -100;
        let mut out = Vec::new();
        draw_winner(&mut out, Verdict::Bankruptcy { winner: Seat::P2 }, &players).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("P1 is bankrupt with -100$"));
        assert!(text.contains("P2 wins!"));

        let mut out = Vec::new();
        draw_winner(&mut out, Verdict::Collection { winner: Seat::P1 }, &players).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("P1 owns one of every component and wins!"));
    }

    #[test]
    fn occupants_are_centered_and_colored() {
        let (ring, players) = sample();
        let cell = occupants_cell(ring.slot(START_SLOT), &players);
        assert!(cell.contains("\x1b[33mP1\x1b[0m"));
        assert!(cell.contains("\x1b[32mP2\x1b[0m"));
    }

    #[test]
    fn long_names_fall_back_to_seat_defaults() {
        let (mut ring, mut players) = sample();
        players[0].name = "Maximilian".to_string();
        players[1].name = "Bartholomew".to_string();
        ring.add_occupant(3, Seat::P1);
        ring.add_occupant(3, Seat::P2);
        let cell = occupants_cell(ring.slot(3), &players);
        assert!(cell.contains("P1"));
        assert!(cell.contains("P2"));
        assert!(!cell.contains("Maximilian"));
    }

    #[test]
    fn center_pads_and_truncates() {
        assert_eq!(center("GPU", 8), "  GPU   ");
        assert_eq!(center("SERVICES", 8), "SERVICES");
        assert_eq!(center("OVERLONGNAME", 8), "OVERLONG");
    }
}
