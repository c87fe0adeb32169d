//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `linkwash` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the input text (argument or stdin)
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use linkwash::initialization::{init_client, init_logger_with};
use linkwash::{Config, Pipeline, Resolver};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Take the text from the positional argument, or read the whole of
    // stdin when it was omitted (handy for piping pasted content).
    let text = match &config.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    // Empty input is rejected here, before the pipeline runs
    if text.trim().is_empty() {
        eprintln!("No input text was provided.");
        process::exit(2);
    }

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let pipeline = Pipeline::new(Resolver::new(client));

    match pipeline.process(&text).await {
        Ok(clean_url) => {
            println!("{clean_url}");
            Ok(())
        }
        Err(e) => {
            log::debug!("Pipeline failed: {e}");
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    }
}
