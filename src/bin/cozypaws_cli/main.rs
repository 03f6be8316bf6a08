// ABOUTME: CozyPaws CLI - daily exercise recommendations for dogs from the terminal
// ABOUTME: Computes recommendations and lists the breed and city presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws
//!
//! Usage:
//! ```bash
//! # High-energy medium adult
//! cozypaws-cli recommend --energy high --weight medium
//!
//! # Puppy from a breed preset, walked in Quito, Spanish output
//! cozypaws-cli recommend --age puppy --months 4 --breed frenchie --city quito --locale es
//!
//! # JSON report saved to a directory
//! cozypaws-cli recommend --age senior --weight large --joints --format json --save ./reports
//!
//! # List presets
//! cozypaws-cli breeds
//! cozypaws-cli cities
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cozypaws::config::AppConfig;
use cozypaws::errors::AppError;
use std::process::ExitCode;
use tracing::debug;

use commands::recommend::RecommendArgs;

#[derive(Parser)]
#[command(
    name = "cozypaws-cli",
    about = "CozyPaws dog exercise planner",
    long_about = "Personalized daily exercise recommendations for dogs: minutes per day, walk plan, enrichment, and advisory notes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a recommendation for one dog
    Recommend(RecommendArgs),

    /// List breed presets
    Breeds,

    /// List city presets
    Cities,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let app_config = AppConfig::from_env()?;
    let logging = if cli.verbose {
        app_config.logging.clone().with_level("debug")
    } else {
        app_config.logging.clone()
    };
    logging.init()?;
    debug!("CozyPaws CLI started");

    match cli.command {
        Command::Recommend(args) => commands::recommend::run(&args, &app_config),
        Command::Breeds => {
            commands::catalog::print_breeds();
            Ok(())
        }
        Command::Cities => {
            commands::catalog::print_cities();
            Ok(())
        }
    }
}
