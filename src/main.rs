// src/main.rs

use clap::Parser;
use enconv::cli::Cli;
use enconv::config::ConfigBuilder;
use enconv::errors::Error;
use enconv::signal::setup_signal_handler;
use enconv::{run, EXIT_CONFIG_ERROR, EXIT_FILE_ERRORS, EXIT_INTERRUPTED};
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log lines go to stderr; stdout carries the preview and summary.
    let default_filter = if cfg!(debug_assertions) {
        "enconv=debug"
    } else {
        "enconv=info"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!("enconv: internal error: {}", msg);
    }));

    let cli = Cli::parse();
    log::debug!("Starting enconv v{}", env!("CARGO_PKG_VERSION"));

    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("enconv: {}", e);
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let token = match setup_signal_handler() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("enconv: {:#}", e);
            process::exit(EXIT_FILE_ERRORS);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&config, &token, &mut out);
    let _ = out.flush();

    let code = match result {
        Ok(summary) => summary.exit_code(config.fail_on_unsupported),
        Err(Error::NoFilesFound) => {
            eprintln!("enconv: no files matched the given filters.");
            0
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            EXIT_INTERRUPTED
        }
        Err(e @ (Error::Config(_) | Error::RootNotFound(_))) => {
            eprintln!("enconv: {}", e);
            EXIT_CONFIG_ERROR
        }
        Err(e) => {
            eprintln!("enconv: {}", e);
            EXIT_FILE_ERRORS
        }
    };
    drop(out);
    process::exit(code);
}
