//! jsort - Main Entry Point
//!
//! Sorts `data.json` by its `Name` field into `sorted.json`.
//! Log verbosity follows `RUST_LOG`; logs go to standard error.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    jsort::sort_by_field("Name", jsort::DEFAULT_INPUT_PATH, jsort::DEFAULT_OUTPUT_PATH);
}
