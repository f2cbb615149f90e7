use broadside::{init_logging, select_target, Game, Phase, Side};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};

/// Headless self-play for the naval combat core. Both sides fire uniformly
/// at random; useful for smoke-testing full games and eyeballing shot
/// statistics.
#[derive(Parser)]
struct Args {
    /// Number of games to play.
    #[arg(short = 'n', long, default_value_t = 100)]
    games: u64,

    /// Base RNG seed; game i runs with seed + i.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut human_wins = 0u64;
    let mut opponent_wins = 0u64;
    let mut total_shots = 0u64;

    for i in 0..args.games {
        let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(i));
        let mut game = Game::new();
        game.auto_place_human(&mut rng)?;
        game.start_battle(&mut rng)?;

        while game.phase() == Phase::Battle {
            match game.turn() {
                Side::Human => {
                    let (row, col) =
                        select_target(&game.board(Side::Opponent).tried(), &mut rng)?;
                    game.human_shoot(row, col)?;
                }
                Side::Opponent => {
                    game.opponent_shoot(&mut rng)?;
                }
            }
        }

        match game.winner() {
            Some(Side::Human) => human_wins += 1,
            Some(Side::Opponent) => opponent_wins += 1,
            None => {}
        }
        total_shots +=
            u64::from(game.tally(Side::Human).shots + game.tally(Side::Opponent).shots);
    }

    println!("games: {}", args.games);
    println!("human wins: {}, opponent wins: {}", human_wins, opponent_wins);
    if args.games > 0 {
        println!(
            "average shots per game: {:.1}",
            total_shots as f64 / args.games as f64
        );
    }
    Ok(())
}
