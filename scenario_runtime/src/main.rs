//! The scenarios CLI tool

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};

use scenario_kernel::primes::PrimeMethod;
use scenario_kernel::report::Report;

use scenario_runtime::config::{load_config, Overrides, RunConfig};
use scenario_runtime::error::RuntimeError;
use scenario_runtime::record::save_record;
use scenario_runtime::render::{render, OutputFormat};
use scenario_runtime::runner::{run_prime_sum, run_velocity_time, with_hash};
use scenario_runtime::verify::{cross_check_primes, verify_determinism};

#[derive(Parser)]
#[command(name = "scenarios", author, version, about, long_about = None)]
struct Cli {
    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long, global = true)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// JSON config file. Flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum)]
    #[arg(default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write a run record of each result into this directory.
    #[arg(long, global = true)]
    record_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sums every prime up to the limit (inclusive).
    #[command(allow_negative_numbers = true)]
    Primes {
        /// Upper bound of the search.
        #[arg(long)]
        limit: Option<i64>,

        /// trial_division or sieve.
        #[arg(long)]
        method: Option<PrimeMethod>,
    },
    /// Solves the time at which v(t) = v0 + a * sinh(t) reaches the target velocity.
    #[command(allow_negative_numbers = true)]
    Hyperbolic {
        #[arg(long)]
        target_velocity: Option<f64>,

        #[arg(long)]
        initial_velocity: Option<f64>,

        /// Must be non-zero.
        #[arg(long)]
        acceleration: Option<f64>,
    },
    /// Cross-checks trial division against a sieve and checks determinism.
    #[command(allow_negative_numbers = true)]
    Verify {
        /// Largest n to cross-check.
        #[arg(long)]
        limit: Option<i64>,
    },
}

impl Commands {
    fn overrides(&self) -> Overrides {
        match *self {
            Commands::Primes { limit, method } => Overrides {
                prime_limit: limit,
                prime_method: method,
                ..Overrides::default()
            },
            Commands::Hyperbolic {
                target_velocity,
                initial_velocity,
                acceleration,
            } => Overrides {
                target_velocity,
                initial_velocity,
                acceleration,
                ..Overrides::default()
            },
            Commands::Verify { limit } => Overrides {
                verify_limit: limit,
                ..Overrides::default()
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    let Some(command) = args.command else {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    match execute(command, args.config.as_deref(), args.format, args.record_dir.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(
    command: Commands,
    config_path: Option<&Path>,
    format: OutputFormat,
    record_dir: Option<&Path>,
) -> Result<(), RuntimeError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };
    run_command(command, config, format, record_dir)
}

fn run_command(
    command: Commands,
    mut config: RunConfig,
    format: OutputFormat,
    record_dir: Option<&Path>,
) -> Result<(), RuntimeError> {
    config.apply_overrides(&command.overrides());

    match command {
        Commands::Primes { .. } => {
            let report = Report::from(run_prime_sum(&config.primes));
            emit(&report, format, record_dir)
        }
        Commands::Hyperbolic { .. } => {
            let report = Report::from(run_velocity_time(&config.hyperbolic)?);
            emit(&report, format, record_dir)
        }
        Commands::Verify { .. } => {
            let check = cross_check_primes(config.verify.limit)?;
            println!(
                "[OK] is_prime agrees with the sieve up to {}: {} primes, sum {}",
                check.limit, check.prime_count, check.sum
            );

            let primes = config.primes;
            let hash = verify_determinism(|| Ok(run_prime_sum(&primes).into()))?;
            println!("[OK] prime_sum is deterministic: {}", hash);

            let params = config.hyperbolic;
            let hash = verify_determinism(|| Ok(run_velocity_time(&params)?.into()))?;
            println!("[OK] velocity_time is deterministic: {}", hash);
            Ok(())
        }
    }
}

fn emit(
    report: &Report,
    format: OutputFormat,
    record_dir: Option<&Path>,
) -> Result<(), RuntimeError> {
    println!("{}", render(report, format));
    if let Some(dir) = record_dir {
        let (report, hash) = with_hash(*report);
        let path = save_record(dir, &report)?;
        info!("Recorded {} ({}) at {}", report.kind(), hash, path.display());
    }
    Ok(())
}
