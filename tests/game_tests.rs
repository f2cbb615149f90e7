use broadside::{
    select_target, BitBoard, Game, GameError, Orientation, Phase, ShotResult, Side, NUM_SHIPS,
    SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn place_human_fleet(game: &mut Game) {
    for i in 0..SHIPS.len() {
        game.place_human_ship(i, i * 2, 0, Orientation::Horizontal)
            .unwrap();
    }
}

fn battle_ready(seed: u64) -> (Game, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new();
    place_human_fleet(&mut game);
    game.start_battle(&mut rng).unwrap();
    (game, rng)
}

#[test]
fn new_game_starts_placing() {
    let game = Game::new();
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.turn(), Side::Human);
    assert_eq!(game.winner(), None);
    assert_eq!(game.tally(Side::Human).shots, 0);
    assert_eq!(game.board(Side::Human).ships().count(), 0);
}

#[test]
fn battle_needs_a_complete_fleet() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Game::new();
    assert_eq!(game.start_battle(&mut rng).unwrap_err(), GameError::FleetIncomplete);
    game.place_human_ship(0, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(game.start_battle(&mut rng).unwrap_err(), GameError::FleetIncomplete);
}

#[test]
fn starting_battle_places_the_opponent_and_hands_the_turn_over() {
    let (game, _) = battle_ready(11);
    assert_eq!(game.phase(), Phase::Battle);
    assert_eq!(game.turn(), Side::Human);
    assert!(game.board(Side::Opponent).fleet_complete());
    assert_eq!(
        game.board(Side::Opponent).ship_map().count_ones(),
        TOTAL_SHIP_CELLS
    );
    assert_eq!(game.ships_remaining(Side::Opponent), NUM_SHIPS);
}

#[test]
fn placement_operations_lock_after_battle_starts() {
    let (mut game, mut rng) = battle_ready(2);
    assert_eq!(
        game.place_human_ship(0, 0, 0, Orientation::Horizontal)
            .unwrap_err(),
        GameError::WrongPhase
    );
    assert_eq!(game.clear_human_board().unwrap_err(), GameError::WrongPhase);
    assert_eq!(game.auto_place_human(&mut rng).unwrap_err(), GameError::WrongPhase);
    assert_eq!(game.start_battle(&mut rng).unwrap_err(), GameError::WrongPhase);
}

#[test]
fn shooting_is_locked_until_battle() {
    let mut game = Game::new();
    assert_eq!(game.human_shoot(0, 0).unwrap_err(), GameError::WrongPhase);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(game.opponent_shoot(&mut rng).unwrap_err(), GameError::WrongPhase);
}

#[test]
fn clear_and_auto_place_during_placement() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new();
    game.place_human_ship(0, 0, 0, Orientation::Horizontal).unwrap();
    game.clear_human_board().unwrap();
    assert_eq!(game.board(Side::Human).ships().count(), 0);

    game.auto_place_human(&mut rng).unwrap();
    assert!(game.board(Side::Human).fleet_complete());
    // auto placement clears whatever was there and starts fresh
    game.auto_place_human(&mut rng).unwrap();
    assert!(game.board(Side::Human).fleet_complete());
    assert_eq!(
        game.board(Side::Human).ship_map().count_ones(),
        TOTAL_SHIP_CELLS
    );
}

#[test]
fn turns_alternate_after_resolved_shots() {
    let (mut game, mut rng) = battle_ready(8);
    assert_eq!(game.turn(), Side::Human);
    game.human_shoot(0, 0).unwrap();
    assert_eq!(game.turn(), Side::Opponent);
    game.opponent_shoot(&mut rng).unwrap();
    assert_eq!(game.turn(), Side::Human);
}

#[test]
fn opponent_cannot_move_on_the_human_turn() {
    let (mut game, mut rng) = battle_ready(8);
    assert_eq!(
        game.opponent_shoot(&mut rng).unwrap_err(),
        GameError::NotYourTurn
    );
    game.human_shoot(0, 0).unwrap();
    assert_eq!(game.human_shoot(1, 1).unwrap_err(), GameError::NotYourTurn);
    let report = game.opponent_shoot(&mut rng).unwrap();
    assert!(report.target.0 < 10 && report.target.1 < 10);
    assert_eq!(game.turn(), Side::Human);
}

#[test]
fn already_tried_keeps_the_turn_and_freezes_tallies() {
    let (mut game, mut rng) = battle_ready(9);
    let first = game.human_shoot(0, 0).unwrap();
    assert_ne!(first, ShotResult::AlreadyTried);
    game.opponent_shoot(&mut rng).unwrap();

    let before = game.tally(Side::Human);
    assert_eq!(game.human_shoot(0, 0).unwrap(), ShotResult::AlreadyTried);
    assert_eq!(game.tally(Side::Human), before);
    assert_eq!(game.turn(), Side::Human);

    // the human may immediately pick another cell
    let second = game.human_shoot(0, 1).unwrap();
    assert_ne!(second, ShotResult::AlreadyTried);
    assert_eq!(game.tally(Side::Human).shots, before.shots + 1);
}

#[test]
fn every_resolved_shot_counts_once() {
    let (mut game, mut rng) = battle_ready(10);
    game.human_shoot(0, 0).unwrap();
    assert_eq!(game.tally(Side::Human).shots, 1);
    game.opponent_shoot(&mut rng).unwrap();
    assert_eq!(game.tally(Side::Opponent).shots, 1);
    game.human_shoot(0, 1).unwrap();
    assert_eq!(game.tally(Side::Human).shots, 2);
}

#[test]
fn sinking_one_ship_reports_the_name_and_updates_remaining() {
    let (mut game, mut rng) = battle_ready(12);
    let destroyer: Vec<(usize, usize)> = game
        .board(Side::Opponent)
        .ship(4)
        .unwrap()
        .footprint()
        .cells()
        .collect();
    assert_eq!(destroyer.len(), 2);

    let mut last = ShotResult::Miss;
    for (row, col) in destroyer {
        if game.turn() == Side::Opponent {
            game.opponent_shoot(&mut rng).unwrap();
        }
        last = game.human_shoot(row, col).unwrap();
    }
    assert_eq!(last, ShotResult::Sunk("Destroyer"));
    assert_eq!(game.ships_remaining(Side::Opponent), NUM_SHIPS - 1);
    assert!(game.board(Side::Opponent).ship(4).unwrap().is_sunk());
}

#[test]
fn seventeen_hits_win_the_game() {
    let (mut game, mut rng) = battle_ready(13);
    let targets: Vec<(usize, usize)> = game
        .board(Side::Opponent)
        .ships()
        .flat_map(|s| s.footprint().cells().collect::<Vec<_>>())
        .collect();
    assert_eq!(targets.len(), TOTAL_SHIP_CELLS);

    for (row, col) in targets {
        if game.turn() == Side::Opponent {
            game.opponent_shoot(&mut rng).unwrap();
        }
        let result = game.human_shoot(row, col).unwrap();
        assert!(result.is_hit());
    }

    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!(game.winner(), Some(Side::Human));
    assert_eq!(game.tally(Side::Human).hits, TOTAL_SHIP_CELLS as u32);
    assert_eq!(game.ships_remaining(Side::Opponent), 0);

    // terminal: neither side may fire again
    assert_eq!(game.human_shoot(9, 9).unwrap_err(), GameError::WrongPhase);
    assert_eq!(
        game.opponent_shoot(&mut rng).unwrap_err(),
        GameError::WrongPhase
    );
}

#[test]
fn accuracy_rounds_like_the_scoreboard() {
    let (mut game, mut rng) = battle_ready(14);
    // one guaranteed hit, one guaranteed miss
    let (hr, hc) = game
        .board(Side::Opponent)
        .ships()
        .next()
        .unwrap()
        .footprint()
        .cells()
        .next()
        .unwrap();
    game.human_shoot(hr, hc).unwrap();
    game.opponent_shoot(&mut rng).unwrap();

    let open = !game.board(Side::Opponent).ship_map();
    let (mr, mc) = open
        .iter_set()
        .find(|&(r, c)| !game.board(Side::Opponent).tried().get(r, c).unwrap())
        .unwrap();
    game.human_shoot(mr, mc).unwrap();

    let tally = game.tally(Side::Human);
    assert_eq!(tally.shots, 2);
    assert_eq!(tally.hits, 1);
    assert_eq!(tally.accuracy(), 50);
    assert!(game.tally(Side::Opponent).accuracy() <= 100);
}

#[test]
fn selector_picks_only_untried_cells() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut tried = BitBoard::<u128, 10>::new();
    for _ in 0..40 {
        let (row, col) = select_target(&tried, &mut rng).unwrap();
        assert!(!tried.get(row, col).unwrap());
        tried.set(row, col).unwrap();
    }
    assert_eq!(tried.count_ones(), 40);
}

#[test]
fn selector_takes_the_last_open_cell() {
    let mut rng = SmallRng::seed_from_u64(22);
    let mut tried = !BitBoard::<u128, 10>::new();
    tried.clear(4, 2).unwrap();
    assert_eq!(select_target(&tried, &mut rng).unwrap(), (4, 2));
}

#[test]
fn selector_fails_on_an_exhausted_grid() {
    let mut rng = SmallRng::seed_from_u64(23);
    let tried = !BitBoard::<u128, 10>::new();
    assert_eq!(
        select_target(&tried, &mut rng).unwrap_err(),
        GameError::NoCellsRemaining
    );
}
