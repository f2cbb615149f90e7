use broadside::{Board, Footprint, Orientation, BOARD_SIZE, MAX_SHIP_LEN, NUM_SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    /// Random fleets are complete and no two ships share or touch a cell,
    /// diagonals included.
    #[test]
    fn random_fleet_never_touches(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_all_random(&mut rng).unwrap();

        prop_assert!(board.fleet_complete());
        prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);

        let fleets: Vec<Vec<(usize, usize)>> = board
            .ships()
            .map(|s| s.footprint().cells().collect())
            .collect();
        prop_assert_eq!(fleets.len(), NUM_SHIPS);
        for i in 0..fleets.len() {
            for j in (i + 1)..fleets.len() {
                for &(r1, c1) in &fleets[i] {
                    for &(r2, c2) in &fleets[j] {
                        let gap = r1.abs_diff(r2).max(c1.abs_diff(c2));
                        prop_assert!(
                            gap >= 2,
                            "ships {} and {} touch: ({},{}) vs ({},{})",
                            i, j, r1, c1, r2, c2
                        );
                    }
                }
            }
        }
    }

    /// An empty board accepts every in-bounds footprint; construction
    /// rejects anything that leaves the grid.
    #[test]
    fn empty_board_accepts_any_in_bounds_footprint(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        len in 1..=MAX_SHIP_LEN,
        horizontal in any::<bool>(),
    ) {
        let orientation = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let fits = match orientation {
            Orientation::Horizontal => col + len <= BOARD_SIZE,
            Orientation::Vertical => row + len <= BOARD_SIZE,
        };
        match Footprint::new(row, col, len, orientation) {
            Ok(fp) => {
                prop_assert!(fits);
                prop_assert!(Board::new().can_place(&fp));
                let cells: Vec<(usize, usize)> = fp.cells().collect();
                prop_assert_eq!(cells.len(), len);
                for (r, c) in cells {
                    prop_assert!(r < BOARD_SIZE && c < BOARD_SIZE);
                }
            }
            Err(_) => prop_assert!(!fits),
        }
    }

    /// Every footprint crossing a committed ship's 8-neighborhood is
    /// rejected, and everything clear of it is accepted.
    #[test]
    fn validator_matches_the_neighborhood_rule(
        ship_col in 0..(BOARD_SIZE - 4),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        len in 1..=MAX_SHIP_LEN,
    ) {
        let mut board = Board::new();
        board
            .place(0, Footprint::new(4, ship_col, 5, Orientation::Horizontal).unwrap())
            .unwrap();

        if let Ok(candidate) = Footprint::new(row, col, len, Orientation::Horizontal) {
            let clear = candidate.cells().all(|(r, c)| {
                board.ship_map().iter_set().all(|(sr, sc)| {
                    r.abs_diff(sr).max(c.abs_diff(sc)) >= 2
                })
            });
            prop_assert_eq!(board.can_place(&candidate), clear);
        }
    }
}
