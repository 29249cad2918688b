//! timestable main entry point
//!
//! Parses the command line, sets up logging and hands the terminal to the
//! menu loop. Any error that escapes the menu is fatal.

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Target};
use log::{debug, error, info, LevelFilter};
use std::fs::OpenOptions;
use std::process;
use timestable::config::{Args, Settings};
use timestable::menu::{self, Menu};
use timestable::speech::Speaker;

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(&args) {
        error!("Fatal error: {:#}", e);
        if args.debug {
            eprintln!("Error: {:?}", e);
        }
        process::exit(1);
    }
}

/// Errors only on stderr (overridable with RUST_LOG), or everything
/// into a log file with `--debug` so it never mixes with the quiz
fn init_logging(debug: bool) {
    let mut builder = Builder::new();

    if !debug {
        builder
            .filter_level(LevelFilter::Error)
            .parse_default_env()
            .init();
        return;
    }

    let log_path = format!("{}.log", timestable::APP_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&log_path);
    match file {
        Ok(file) => {
            builder
                .filter_level(LevelFilter::Debug)
                .target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Warning: cannot open {} ({}), logging warnings to stderr", log_path, e);
            builder.filter_level(LevelFilter::Warn);
        }
    }
    builder.init();

    info!("{} {} starting in debug mode", timestable::APP_NAME, timestable::VERSION);
}

fn run(args: &Args) -> anyhow::Result<()> {
    let settings = Settings::from(args);
    debug!("Settings: {:?}", settings);

    let username = menu::username().context("Failed to look up the user name")?;
    let speaker = Speaker::terminal(&settings);

    Menu::new(speaker, username)
        .run()
        .context("Quiz ended unexpectedly")?;
    Ok(())
}
