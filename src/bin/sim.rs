use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{AiPlayer, GameConfig, Match, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    sea_battle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => sea_battle::DEFAULT_SIZE,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::with_size(size);
    let mut game = Match::setup(
        &config,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        &mut rng,
    )?;
    let winner = game.run(&mut rng, &mut ())?;

    let result = json!({
        "winner": winner,
        "shots": game.shots(),
        "turns": game.turn(),
        "user": {"ships_destroyed": game.board(Side::Human).destroyed_count()},
        "computer": {"ships_destroyed": game.board(Side::Computer).destroyed_count()},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
