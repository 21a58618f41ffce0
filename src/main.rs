use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    cli::{self, Console, ConsoleObserver},
    init_logging, AiPlayer, GameConfig, ManualPlayer, Match, Side, DEFAULT_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_SIZE, help = "Side length of both boards")]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Let the computer play the user's side too")]
    autoplay: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let config = GameConfig::with_size(cli.size);
    let human: Box<dyn sea_battle::Player> = if cli.autoplay {
        Box::new(AiPlayer::new())
    } else {
        Box::new(ManualPlayer::new(Console::stdio()))
    };
    let mut game = Match::setup(&config, human, Box::new(AiPlayer::new()), &mut rng)?;

    cli::greet(game.board(Side::Human));
    let mut observer = ConsoleObserver;
    game.run(&mut rng, &mut observer)?;
    Ok(())
}
