//! Headless Odd One Out driver.
//!
//! Reads line-delimited JSON client messages from stdin and writes server
//! messages to stdout. Logs go to stderr so they never mix with the protocol.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use odd_one_out::adapter::{Session, SessionConfig};
use odd_one_out::config::AppConfig;
use odd_one_out::logging::{self, LogTarget};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::load(&args)?;
    match config.log_path.as_deref() {
        Some(path) => logging::init(LogTarget::File(path))?,
        None => logging::init(LogTarget::Stderr)?,
    }

    let game = config.new_game()?;
    let mut session = Session::new(game, SessionConfig::from_env());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        for reply in session.handle_line(&line)? {
            writeln!(out, "{}", reply)?;
        }
        out.flush()?;
    }

    log::info!(
        "input closed: level {}, score {}",
        session.game().level(),
        session.game().score()
    );
    Ok(())
}
