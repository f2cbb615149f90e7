//! Opponent shot selection: uniform random over untried cells.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, BOARD_SIZE>;

/// Pick the next target uniformly among the cells not yet shot at, given
/// the mask of tried cells on the board under attack.
///
/// `NoCellsRemaining` means the whole grid has been tried; victory is
/// detected before that can happen in a normal game, so callers should
/// treat it as an internal invariant violation rather than recover.
pub fn select_target<R: Rng + ?Sized>(
    tried: &BB,
    rng: &mut R,
) -> Result<(usize, usize), GameError> {
    let open = !*tried;
    let remaining = open.count_ones();
    if remaining == 0 {
        return Err(GameError::NoCellsRemaining);
    }
    let pick = rng.random_range(0..remaining);
    open.iter_set().nth(pick).ok_or(GameError::NoCellsRemaining)
}
