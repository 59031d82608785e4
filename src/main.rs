mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_compare, run_evolution, run_summary};

fn main() -> ExitCode {
    let args = cli::parse();

    match args.command {
        Commands::Summary {
            violations,
            audit,
            format,
            output,
        } => run_summary(args.config, args.verbose, violations, audit, format, output),
        Commands::Compare {
            current_audit,
            current_violations,
            previous_audit,
            previous_violations,
            format,
            output,
        } => run_compare(
            args.config,
            args.verbose,
            current_audit,
            current_violations,
            previous_audit,
            previous_violations,
            format,
            output,
        ),
        Commands::Evolution {
            audits,
            noise_threshold,
            format,
            output,
        } => run_evolution(
            args.config,
            args.verbose,
            audits,
            noise_threshold,
            format,
            output,
        ),
    }
}
