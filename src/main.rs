use clap::{Parser, ValueEnum};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod run;
mod search;
mod validation;

use run::{AffinityMask, RunCoordinator, RunRequest};
use search::{SearchBounds, SearchConfig, Strategy};
use validation::{PasswordRules, generate_random_password, prompt_for_password};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "finder")]
#[command(about = "finder - bounded-time numeric password recovery")]
#[command(version)]
struct Args {
    /// Password to recover (prompted for when omitted)
    #[arg(long, short, conflicts_with = "random")]
    password: Option<String>,

    /// Generate a random password of this length instead of prompting
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Time budget per run in milliseconds
    #[arg(long, default_value = "10000")]
    limit_ms: u64,

    /// Search strategy to use
    #[arg(long, value_enum, default_value = "sequential")]
    strategy: CliStrategy,

    /// Lowest symbol value in the alphabet
    #[arg(long, default_value_t = SearchBounds::DIGIT_MIN)]
    min: u32,

    /// Highest symbol value in the alphabet
    #[arg(long, default_value_t = SearchBounds::DIGIT_MAX)]
    max: u32,

    /// Processor affinity bitmask (hex with 0x prefix, or decimal)
    #[arg(long)]
    affinity: Option<AffinityMask>,

    /// Number of times to repeat the run
    #[arg(long, default_value = "1")]
    runs: u32,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

/// CLI strategy selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
    /// One position at a time on a single thread
    Sequential,
    /// One thread per position
    Parallel,
    /// Count the whole value up from zero
    Ascending,
}

impl From<CliStrategy> for Strategy {
    fn from(cli: CliStrategy) -> Self {
        match cli {
            CliStrategy::Sequential => Strategy::Sequential,
            CliStrategy::Parallel => Strategy::Parallel,
            CliStrategy::Ascending => Strategy::Ascending,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Resolve the password from the command line, a generator, or the prompt.
fn obtain_password(
    args: &Args,
    rules: &PasswordRules,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if let Some(password) = &args.password {
        let password = rules.validate(password)?;
        return Ok(Some(password.to_string()));
    }
    if let Some(length) = args.random {
        let password = generate_random_password(length, &rules.bounds, args.seed);
        rules.validate(&password)?;
        info!(length, seed = ?args.seed, "generated random password");
        return Ok(Some(password));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    Ok(prompt_for_password(&mut input, &mut output, rules)?)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let bounds = SearchBounds::new(args.min, args.max)?;
    let rules = PasswordRules::default().with_bounds(bounds);

    let Some(password) = obtain_password(args, &rules)? else {
        return Ok(());
    };

    let config = SearchConfig::default()
        .with_strategy(args.strategy.into())
        .with_affinity_option(args.affinity)
        .with_verbose(args.verbose);
    let mut coordinator = RunCoordinator::new(config);
    let request = RunRequest::new(&password, args.limit_ms, bounds);

    for attempt in 1..=args.runs.max(1) {
        if args.runs > 1 {
            println!("Run {} of {}", attempt, args.runs);
        }
        println!("Finding Password {}", password);
        let outcome = coordinator.run(&request);
        println!("{}", outcome);

        if args.verbose {
            if let Some(stats) = coordinator.last_statistics() {
                println!("\nSearch Statistics:");
                print!("{}", stats.format_summary());
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
