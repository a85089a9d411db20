use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use gateway_test::test_util::{kinesis_event, random_items, write_kinesis_event};

/// Generate a kinesis event full of random items, for driving the lambda locally
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!("generating {} items", cli.count);
    let items = random_items(&mut rng, cli.count, cli.description_len);
    let event = kinesis_event(&items, Utc::now())?;

    match &cli.out {
        Some(path) => {
            write_kinesis_event(path, &event)?;
            tracing::info!("wrote event to {path:#?}");
        }
        None => println!("{}", serde_json::to_string_pretty(&event)?),
    }

    Ok(())
}

#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, default_value_t = 1000)]
    count: usize,
    #[arg(short = 'l', long, default_value_t = 50)]
    description_len: usize,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long)]
    out: Option<PathBuf>,
}
