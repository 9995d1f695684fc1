use std::process::ExitCode;

use altsort::{Pipeline, SizeStrategy};

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "generate",
    about = "Generates arrays of distinct random sizes and sorts them in alternating order"
)]
struct Args {
    /// Seed of the random generators. System entropy is used if omitted.
    #[clap(long)]
    seed: Option<u64>,

    /// How distinct array sizes are drawn (rejection or shuffle).
    #[clap(long, default_value = "rejection")]
    strategy: SizeStrategy,
}

fn init_logging() {
    // Diagnostics go to stderr so that stdout only carries the program output.
    let filter = EnvFilter::try_from_env("ALTSORT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let mut pipeline = Pipeline::new().strategy(args.strategy);
    if let Some(seed) = args.seed {
        pipeline = pipeline.seed(seed);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match pipeline.run(stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
