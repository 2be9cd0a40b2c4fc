use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use noskew::{run, Cli, Job};

/// `RUST_LOG` directives (default `warn`), with `--verbose` raising the floor to `debug`
fn log_filter(env_directives: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = env_directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_logging(verbose: bool) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env_directives.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let job = cli.job().context("Invalid arguments")?;

    let message = match &job {
        Job::Resize {
            input,
            dimensions,
            method,
            ..
        } => run(&job).with_context(|| {
            format!(
                "Failed to resize {:?} to {} ({:?})",
                input, dimensions, method
            )
        })?,
        Job::Divide {
            input, direction, ..
        } => run(&job)
            .with_context(|| format!("Failed to divide {:?} {}", input, direction.adverb()))?,
    };

    println!("{}", message);
    Ok(())
}
