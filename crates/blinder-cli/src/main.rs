mod cli;

use anyhow::Result;
use blinder_config::Config;
use blinder_core::RunReport;
use blinder_engine::Blinder;
use clap::Parser;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so stdout only carries the run diagnostics
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let run_config = cli.run_config(&config);
    info!(
        input = %run_config.input.display(),
        output = %run_config.output.display(),
        pattern = %run_config.pattern,
        mode = ?run_config.mode,
        dry_run = run_config.dry_run,
        "Resolved run configuration"
    );
    let blinder = Blinder::new(run_config);

    let suffix = if cli.dry_run { " (dry run)" } else { "" };
    let report = blinder.run(|file| {
        if !cli.json {
            println!(
                "{}: {} {}{}",
                file.file_name,
                file.count,
                file.mode.progress_label(),
                suffix
            );
        }
    })?;

    print_summary(&report, cli.json)?;

    if !report.is_success() {
        for failure in &report.failures {
            error!(file = %failure.file_name, error = %failure.error, "Could not blind file");
        }
        anyhow::bail!("{} file(s) could not be blinded", report.failures.len());
    }

    Ok(())
}

fn print_summary(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("Total time taken: {} seconds", report.elapsed_seconds);
    }
    Ok(())
}
