use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use adult_locator::{pipeline, AdultNotice, Error, LoaderConfig};

/// List the employees in a roster who are old enough to be served alcohol.
#[derive(Parser)]
#[command(name = "adult-locator", version)]
#[command(about = "List the employees in a roster who are old enough to be served alcohol.")]
struct Cli {
    /// Roster file path, or an http(s) URL to fetch it from
    source: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            match err.downcast_ref::<Error>() {
                Some(Error::MissingSource) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = cli.source.ok_or(Error::MissingSource)?;
    let config = LoaderConfig::from_env()?;

    let adults = pipeline::run(&source, &config)
        .with_context(|| format!("processing roster from {source}"))?;

    let mut out = io::stdout().lock();
    for employee in &adults {
        writeln!(out, "{}", AdultNotice(employee).to_string().green())
            .context("writing to stdout")?;
    }
    Ok(())
}
