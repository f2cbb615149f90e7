//! Render-facing projections of board state.
//!
//! The presentation adapter draws from these views; the tracking view never
//! exposes an unhit ship cell of the opposing board.

use crate::board::Board;
use crate::config::BOARD_SIZE;

/// What a renderer may draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Ship,
    Miss,
    Hit,
    Sunk,
}

/// Full-board projection, indexed `[row][col]`.
pub type BoardView = [[CellView; BOARD_SIZE]; BOARD_SIZE];

/// View of a side's own board; its ships are visible.
pub fn owner_view(board: &Board) -> BoardView {
    project(board, true)
}

/// Fog-of-war view of the opposing board: a ship cell that has not been
/// hit renders as empty.
pub fn tracking_view(board: &Board) -> BoardView {
    project(board, false)
}

fn project(board: &Board, show_ships: bool) -> BoardView {
    let ship_map = board.ship_map();
    let hits = board.hits();
    let misses = board.misses();
    let sunk = board.sunk_map();
    let mut view = [[CellView::Empty; BOARD_SIZE]; BOARD_SIZE];
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            view[r][c] = if sunk.get(r, c).unwrap_or(false) {
                CellView::Sunk
            } else if hits.get(r, c).unwrap_or(false) {
                CellView::Hit
            } else if misses.get(r, c).unwrap_or(false) {
                CellView::Miss
            } else if show_ships && ship_map.get(r, c).unwrap_or(false) {
                CellView::Ship
            } else {
                CellView::Empty
            };
        }
    }
    view
}
