use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

mod table;

#[derive(Parser)]
#[command(name = "showdown")]
#[command(about = "Deal Hold'em hands to a table and show who wins", long_about = None)]
struct Cli {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,

    /// Number of hands to deal
    #[arg(short = 'n', long, default_value_t = 1)]
    hands: u32,

    /// Seed for the deck shuffles (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    // Initialise tracing (respects RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, players = cli.players, hands = cli.hands, "Dealing");

    let mut table = table::Table::new(cli.players as usize, StdRng::seed_from_u64(seed));
    for hand_number in 1..=cli.hands {
        match table.play_hand() {
            Ok(round) => println!("Hand #{hand_number}\n{round}"),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
