//! Fixed game configuration: board geometry and fleet composition.

use crate::ship::ShipType;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in a full fleet.
pub const NUM_SHIPS: usize = 5;

/// Fleet table, one ship per entry. Cruiser and Submarine share a length;
/// that is the classic fleet composition, not a duplicate entry.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total segments across the fleet; sinking all of them loses the game.
pub const TOTAL_SHIP_CELLS: usize = 17;

/// Longest ship in the fleet table.
pub const MAX_SHIP_LEN: usize = 5;

/// Random placement gives up after this many candidate draws per ship.
pub const PLACEMENT_ATTEMPTS: usize = 100;
