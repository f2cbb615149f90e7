//! Game session: phase machine, turn alternation, scoring, victory.
//!
//! All operations are synchronous state transitions returning result
//! values; a presentation adapter decides when to invoke them and how to
//! pace the opponent's move. Starting over means constructing a new
//! `Game`; there is no ambient or global instance.

use rand::Rng;

use crate::ai;
use crate::board::{Board, BoardState};
use crate::common::{GameError, ShotResult};
use crate::config::{NUM_SHIPS, SHIPS};
use crate::ship::{Footprint, Orientation};

/// Phase of a session. Advances only forward: placement, battle, ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Battle,
    Ended,
}

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Opponent => 1,
        }
    }
}

/// Shots fired and shots landed for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub shots: u32,
    pub hits: u32,
}

impl Tally {
    /// Hit percentage rounded to the nearest point; 0 before any shot.
    pub fn accuracy(&self) -> u32 {
        if self.shots == 0 {
            0
        } else {
            (self.hits * 100 + self.shots / 2) / self.shots
        }
    }
}

/// An opponent move: where it fired and what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub target: (usize, usize),
    pub result: ShotResult,
}

/// One game of human vs. computer.
pub struct Game {
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    boards: [Board; 2],
    tallies: [Tally; 2],
}

impl Game {
    /// Start a fresh session in the placement phase with empty boards.
    pub fn new() -> Self {
        Game {
            phase: Phase::Placement,
            turn: Side::Human,
            winner: None,
            boards: [Board::new(), Board::new()],
            tallies: [Tally::default(), Tally::default()],
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side whose turn it is.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Winning side once the game has ended.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Board belonging to the given side.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Shot/hit tally for the given side.
    pub fn tally(&self, side: Side) -> Tally {
        self.tallies[side.index()]
    }

    /// Unsunk ships left on the given side's board.
    pub fn ships_remaining(&self, side: Side) -> usize {
        self.board(side).ships_remaining()
    }

    /// Place one human ship during the placement phase.
    pub fn place_human_ship(
        &mut self,
        type_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        if type_index >= NUM_SHIPS {
            return Err(GameError::InvalidShipIndex);
        }
        let footprint = Footprint::new(row, col, SHIPS[type_index].length(), orientation)?;
        self.boards[Side::Human.index()].place(type_index, footprint)?;
        Ok(())
    }

    /// Clear the human board and place its whole fleet at random.
    pub fn auto_place_human<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        let board = &mut self.boards[Side::Human.index()];
        board.clear();
        board.place_all_random(rng)
    }

    /// Remove all human ships; only legal while still placing.
    pub fn clear_human_board(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        self.boards[Side::Human.index()].clear();
        Ok(())
    }

    /// Move from placement to battle. Requires the human fleet complete;
    /// places the opponent fleet if it is not already placed, and hands the
    /// first turn to the human.
    pub fn start_battle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        if !self.boards[Side::Human.index()].fleet_complete() {
            return Err(GameError::FleetIncomplete);
        }
        self.boards[Side::Opponent.index()].place_all_random(rng)?;
        self.phase = Phase::Battle;
        self.turn = Side::Human;
        log::info!("battle started");
        Ok(())
    }

    /// Human fires at the opponent board. Legal only in battle on the
    /// human's turn; `AlreadyTried` keeps the turn with the human.
    pub fn human_shoot(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        if self.phase != Phase::Battle {
            return Err(GameError::WrongPhase);
        }
        if self.turn != Side::Human {
            return Err(GameError::NotYourTurn);
        }
        self.resolve(Side::Human, row, col)
    }

    /// The opponent selects a target and fires at the human board.
    /// Synchronous: the presentation adapter owns any perceived delay
    /// before calling this.
    pub fn opponent_shoot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShotReport, GameError> {
        if self.phase != Phase::Battle {
            return Err(GameError::WrongPhase);
        }
        if self.turn != Side::Opponent {
            return Err(GameError::NotYourTurn);
        }
        let target = ai::select_target(&self.boards[Side::Human.index()].tried(), rng)?;
        let result = self.resolve(Side::Opponent, target.0, target.1)?;
        Ok(ShotReport { target, result })
    }

    /// Resolve one shot by `shooter` against the opposing board, then
    /// update tallies, check victory, and advance the turn.
    fn resolve(&mut self, shooter: Side, row: usize, col: usize) -> Result<ShotResult, GameError> {
        let result = self.boards[shooter.other().index()].fire(row, col)?;
        if result == ShotResult::AlreadyTried {
            // no state changed; same side must pick again
            return Ok(result);
        }
        let tally = &mut self.tallies[shooter.index()];
        tally.shots += 1;
        if result.is_hit() {
            tally.hits += 1;
        }
        if let ShotResult::Sunk(name) = result {
            log::debug!("{:?} sank the {}", shooter, name);
        }
        if self.boards[shooter.other().index()].all_sunk() {
            self.phase = Phase::Ended;
            self.winner = Some(shooter);
            log::info!("game over, {:?} wins", shooter);
        } else {
            self.turn = shooter.other();
        }
        Ok(result)
    }

    /// Serializable snapshot of the whole session.
    pub fn state(&self) -> GameState {
        GameState {
            phase: self.phase,
            turn: self.turn,
            winner: self.winner,
            human: BoardState::from(&self.boards[Side::Human.index()]),
            opponent: BoardState::from(&self.boards[Side::Opponent.index()]),
            human_tally: self.tallies[Side::Human.index()],
            opponent_tally: self.tallies[Side::Opponent.index()],
        }
    }

    /// Restore a session from a snapshot.
    pub fn from_state(state: GameState) -> Self {
        Game {
            phase: state.phase,
            turn: state.turn,
            winner: state.winner,
            boards: [Board::from(state.human), Board::from(state.opponent)],
            tallies: [state.human_tally, state.opponent_tally],
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable overall session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: Phase,
    pub turn: Side,
    pub winner: Option<Side>,
    pub human: BoardState,
    pub opponent: BoardState,
    pub human_tally: Tally,
    pub opponent_tally: Tally,
}
