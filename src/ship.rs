//! Ship types, footprints, and per-ship hit tracking.

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, SHIPS};

type BB = BitBoard<u128, BOARD_SIZE>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// The ordered run of cells a ship would occupy: origin plus `length` cells
/// growing column-wise (horizontal) or row-wise (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
}

impl Footprint {
    /// Compute the footprint from an origin, failing with `OutOfBounds` if
    /// any cell would fall outside the grid.
    pub fn new(
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        let candidate = Footprint {
            row,
            col,
            length,
            orientation,
        };
        for (r, c) in candidate.cells() {
            if r >= BOARD_SIZE || c >= BOARD_SIZE {
                return Err(GameError::OutOfBounds { row: r, col: c });
            }
        }
        Ok(candidate)
    }

    /// Origin of the footprint (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Number of cells covered.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Orientation of the run.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells in order, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let fp = *self;
        (0..fp.length).map(move |i| match fp.orientation {
            Orientation::Horizontal => (fp.row, fp.col + i),
            Orientation::Vertical => (fp.row + i, fp.col),
        })
    }

    /// Occupancy mask of the footprint.
    pub fn mask(&self) -> BB {
        let mut mask = BB::new();
        for (r, c) in self.cells() {
            let _ = mask.set(r, c);
        }
        mask
    }
}

/// A ship committed to a board, with its hits tracked in a `BitBoard`.
///
/// The display name is looked up from the fleet table by type index, so the
/// value is plain data and serializes cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    type_index: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
    hits: BB,
    sunk: bool,
}

impl Ship {
    /// Callers must have validated `type_index` against the fleet table and
    /// the footprint against the board.
    pub(crate) fn new(type_index: usize, footprint: Footprint) -> Self {
        let (row, col) = footprint.origin();
        Ship {
            type_index,
            row,
            col,
            orientation: footprint.orientation(),
            hits: BB::new(),
            sunk: false,
        }
    }

    /// Index into the fleet table.
    pub fn type_index(&self) -> usize {
        self.type_index
    }

    /// Ship type from the fleet table.
    pub fn def(&self) -> ShipType {
        SHIPS[self.type_index]
    }

    /// Display name of the ship type.
    pub fn name(&self) -> &'static str {
        self.def().name()
    }

    /// Length in cells; fixed at placement.
    pub fn length(&self) -> usize {
        self.def().length()
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The ship's footprint on the board.
    pub fn footprint(&self) -> Footprint {
        Footprint {
            row: self.row,
            col: self.col,
            length: self.length(),
            orientation: self.orientation,
        }
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> BB {
        self.footprint().mask()
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// True once every segment has been hit. Terminal: never reverts.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Register a hit at (row, col). Returns `true` if the cell belongs to
    /// this ship and records it, updating the sunk flag on the last segment.
    pub(crate) fn record_hit(&mut self, row: usize, col: usize) -> bool {
        if self.mask().get(row, col).unwrap_or(false) {
            let _ = self.hits.set(row, col);
            if self.hit_count() == self.length() {
                self.sunk = true;
            }
            true
        } else {
            false
        }
    }
}
