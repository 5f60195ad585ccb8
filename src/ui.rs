#![cfg(feature = "std")]

//! Terminal rendering for boards, fleet status and the probability map.

use std::io::{self, Write};

use crate::core::{Board, BoardView, Cell, CellView, Coord, Grid};

/// Spreadsheet-style name of a cell, e.g. `(4, 0)` is `A5`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `A5`-style input for a `size×size` board into `(row, col)`.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let last_col = (b'A' + (size.min(26) as u8) - 1) as char;
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

fn write_header<W: Write>(out: &mut W, size: usize, width: usize) -> io::Result<()> {
    write!(out, "    ")?;
    for c in 0..size {
        write!(out, " {:>width$}", (b'A' + c as u8) as char, width = width)?;
    }
    writeln!(out)
}

/// The owner's board with ships shown.
pub fn write_own_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write_header(out, board.size(), 1)?;
    for r in 0..board.size() {
        write!(out, "  {:2}", r + 1)?;
        for c in 0..board.size() {
            let ch = match board.cell(r, c) {
                Ok(Cell::Ship) => 'S',
                Ok(Cell::Hit) => 'X',
                Ok(Cell::Miss) => 'o',
                _ => '.',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "    Legend: S=Ship  X=Hit  o=Miss  .=Water")
}

/// An opponent's board as the attacker sees it.
pub fn write_target_board<W: Write>(out: &mut W, view: BoardView<'_>) -> io::Result<()> {
    write_header(out, view.size(), 1)?;
    for r in 0..view.size() {
        write!(out, "  {:2}", r + 1)?;
        for c in 0..view.size() {
            let ch = match view.cell(r, c) {
                Ok(CellView::Hit) => 'X',
                Ok(CellView::Miss) => 'o',
                _ => '.',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "    Legend: X=Hit  o=Miss  .=Unknown")
}

/// One line per fleet entry: not placed, active or sunk.
pub fn write_fleet_status<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for ship_type in board.fleet() {
        let status = match board.ship(ship_type.name()) {
            None => "Not Placed",
            Some(ship) if ship.is_sunk() => "Sunk",
            Some(_) => "Active",
        };
        writeln!(out, "      {} ({}): {}", ship_type.name(), ship_type.length(), status)?;
    }
    Ok(())
}

/// The opponent's fleet without positions: active or sunk.
pub fn write_enemy_fleet_status<W: Write>(out: &mut W, view: BoardView<'_>) -> io::Result<()> {
    for (ship_type, sunk) in view.fleet_status() {
        let status = if sunk { "Sunk" } else { "Active" };
        writeln!(out, "      {} ({}): {}", ship_type.name(), ship_type.length(), status)?;
    }
    Ok(())
}

/// Print a normalized probability map as percentages; zero cells are blank.
pub fn write_probability_board<W: Write>(out: &mut W, pdf: &Grid<f64>) -> io::Result<()> {
    writeln!(out, "\nProbability distribution (%):")?;
    write_header(out, pdf.size(), 5)?;
    for r in 0..pdf.size() {
        write!(out, "  {:2}", r + 1)?;
        for c in 0..pdf.size() {
            match pdf.get(r, c) {
                Ok(p) if p > 0.0 => write!(out, " {:5.2}", p * 100.0)?,
                _ => write!(out, " {:>5}", "")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
