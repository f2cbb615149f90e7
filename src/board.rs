//! One side's board: fleet slots plus ship/hit/miss masks.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{GameError, ShotResult};
use crate::config::{BOARD_SIZE, NUM_SHIPS, PLACEMENT_ATTEMPTS, SHIPS};
use crate::ship::{Footprint, Orientation, Ship};

type BB = BitBoard<u128, BOARD_SIZE>;

/// Snapshot of a single cell, derived from the board masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub has_ship: bool,
    pub is_hit: bool,
    /// Fleet slot of the occupying ship, if any.
    pub ship: Option<usize>,
    /// True once the occupying ship is fully sunk.
    pub sunk: bool,
}

/// Board state: one fleet slot per configured ship type, occupancy mask,
/// and the hit/miss record of shots taken against this board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Derived per-cell snapshot at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        let has_ship = self.ship_map.get(row, col)?;
        let is_hit = self.hits.get(row, col)? || self.misses.get(row, col)?;
        let ship = if has_ship {
            self.ship_at(row, col)
        } else {
            None
        };
        let sunk = ship
            .and_then(|id| self.ships[id].as_ref())
            .map_or(false, |s| s.is_sunk());
        Ok(Cell {
            has_ship,
            is_hit,
            ship,
            sunk,
        })
    }

    /// Fleet slot of the ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<usize> {
        self.ships.iter().enumerate().find_map(|(i, slot)| {
            slot.as_ref()
                .filter(|s| s.mask().get(row, col).unwrap_or(false))
                .map(|_| i)
        })
    }

    /// Placed ships in fleet-slot order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Ship in the given fleet slot, if placed.
    pub fn ship(&self, id: usize) -> Option<&Ship> {
        self.ships.get(id).and_then(|slot| slot.as_ref())
    }

    /// True when every fleet slot is occupied.
    pub fn fleet_complete(&self) -> bool {
        self.ships.iter().all(|slot| slot.is_some())
    }

    /// Placed ships not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships().filter(|s| !s.is_sunk()).count()
    }

    /// True when the full fleet has been placed and sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships().filter(|s| s.is_sunk()).count() == NUM_SHIPS
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Cells hit on a ship.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Cells shot into open water.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Every cell that has been shot at, hit or miss.
    pub fn tried(&self) -> BB {
        self.hits | self.misses
    }

    /// Union of the masks of sunk ships.
    pub fn sunk_map(&self) -> BB {
        self.ships()
            .filter(|s| s.is_sunk())
            .fold(BB::new(), |acc, s| acc | s.mask())
    }

    /// True iff the footprint neither overlaps nor touches (8-neighborhood)
    /// any committed ship. Bounds are enforced by `Footprint::new`, and a
    /// footprint cannot conflict with itself, so only committed ships are
    /// checked.
    pub fn can_place(&self, footprint: &Footprint) -> bool {
        (footprint.mask() & self.ship_map.neighborhood()).is_empty()
    }

    /// Commit a ship of the given type onto the footprint and return it.
    pub fn place(&mut self, type_index: usize, footprint: Footprint) -> Result<&Ship, GameError> {
        if type_index >= NUM_SHIPS {
            return Err(GameError::InvalidShipIndex);
        }
        if footprint.length() != SHIPS[type_index].length() {
            return Err(GameError::InvalidPlacement);
        }
        if self.ships[type_index].is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        if !self.can_place(&footprint) {
            return Err(GameError::InvalidPlacement);
        }
        self.ship_map = self.ship_map | footprint.mask();
        Ok(self.ships[type_index].insert(Ship::new(type_index, footprint)))
    }

    /// Draw random (origin, orientation) candidates until one fits, then
    /// commit it. Gives up with `PlacementExhausted` after the attempt cap;
    /// a board that cannot fit its fleet is a setup failure the caller must
    /// see, never a ship to skip.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        type_index: usize,
    ) -> Result<&Ship, GameError> {
        if type_index >= NUM_SHIPS {
            return Err(GameError::InvalidShipIndex);
        }
        if self.ships[type_index].is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let len = SHIPS[type_index].length();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_row = if orientation == Orientation::Vertical {
                BOARD_SIZE - len
            } else {
                BOARD_SIZE - 1
            };
            let max_col = if orientation == Orientation::Horizontal {
                BOARD_SIZE - len
            } else {
                BOARD_SIZE - 1
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let footprint = Footprint::new(row, col, len, orientation)?;
            if self.can_place(&footprint) {
                return self.place(type_index, footprint);
            }
        }
        Err(GameError::PlacementExhausted)
    }

    /// Randomly place every ship type that is not already on the board.
    pub fn place_all_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for i in 0..NUM_SHIPS {
            if self.ships[i].is_none() {
                self.place_random(rng, i)?;
            }
        }
        Ok(())
    }

    /// Remove every ship and shot record.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// Resolve a shot at (row, col).
    ///
    /// A previously tried cell returns `AlreadyTried` and changes nothing.
    /// A hit updates the owning ship; its last segment flips the ship to
    /// sunk and reports the ship's name.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Ok(ShotResult::AlreadyTried);
        }
        if self.ship_map.get(row, col)? {
            self.hits.set(row, col)?;
            for slot in self.ships.iter_mut() {
                if let Some(ship) = slot {
                    if ship.record_hit(row, col) {
                        if ship.is_sunk() {
                            return Ok(ShotResult::Sunk(ship.name()));
                        }
                        return Ok(ShotResult::Hit);
                    }
                }
            }
            // ship_map said occupied but no fleet slot claimed the cell
            Err(GameError::UnknownShip)
        } else {
            self.misses.set(row, col)?;
            Ok(ShotResult::Miss)
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable board state for saving games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub ships: [Option<Ship>; NUM_SHIPS],
    pub ship_map: BB,
    pub hits: BB,
    pub misses: BB,
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            ships: b.ships,
            ship_map: b.ship_map,
            hits: b.hits,
            misses: b.misses,
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board {
            ships: state.ships,
            ship_map: state.ship_map,
            hits: state.hits,
            misses: state.misses,
        }
    }
}
