use anyhow::Result;
use clap::Parser;
use md_ingest::cli::Cli;
use md_ingest::config::{Config, ConfigError};
use md_ingest::pipeline::Pipeline;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            if e.downcast_ref::<ConfigError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut pipeline = Pipeline::new(Config::from_cli(cli)?)?;
    tracing::info!(
        "Output path: {}, Vault path: {}",
        pipeline.config().output_dir.display(),
        pipeline.config().source_root.display()
    );

    let report = pipeline.run();

    eprintln!(
        "OK {} files, {} part(s), {} skipped, ~{} tokens",
        pipeline.aggregate().included,
        report.written.len(),
        pipeline.aggregate().skipped.len(),
        report.total_tokens()
    );
    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        for failed in &report.failed {
            eprintln!("ERROR: could not write {}: {}", failed.path.display(), failed.error);
        }
        Ok(ExitCode::FAILURE)
    }
}
