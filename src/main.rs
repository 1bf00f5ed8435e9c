//! Set algebra demonstration entry point.
//!
//! Prints the results of the fixed scenario to stdout. Diagnostics go to
//! stderr and are controlled by `RUST_LOG` (default: `warn`).

use std::io;

use anyhow::Context;
use setops::demo::{Scenario, write_report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &Scenario::fixed())
        .context("failed to print the set algebra report")?;

    Ok(())
}
