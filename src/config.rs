//! Runtime configuration for the binaries.
//!
//! Settings come from environment variables first; command-line arguments
//! override them.
//!
//! | Variable | Argument | Default |
//! |----------|----------|---------|
//! | `ODDONE_SEED` | `--seed N` | derived from the clock |
//! | `ODDONE_TIME_PER_LEVEL_MS` | `--time-per-level MS` | 10000 |
//! | `ODDONE_GRID` | `--grid ROWSxCOLS` | 8x12 |
//! | `ODDONE_LOG_PATH` | `--log PATH` | none |

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::core::{GameRules, GameState, Palette, SimpleRng};
use crate::types::{GRID_COLS, GRID_ROWS, MAX_GRID_DIM, TIME_PER_LEVEL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub time_per_level_ms: u64,
    pub grid_rows: u16,
    pub grid_cols: u16,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            time_per_level_ms: TIME_PER_LEVEL_MS,
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Environment, then `args` (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env()?;
        config.apply_args(args)?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = get("ODDONE_SEED") {
            config.seed = Some(parse_seed(&v).context("ODDONE_SEED")?);
        }
        if let Some(v) = get("ODDONE_TIME_PER_LEVEL_MS") {
            config.time_per_level_ms = parse_time(&v).context("ODDONE_TIME_PER_LEVEL_MS")?;
        }
        if let Some(v) = get("ODDONE_GRID") {
            let (rows, cols) = parse_grid(&v).context("ODDONE_GRID")?;
            config.grid_rows = rows;
            config.grid_cols = cols;
        }
        if let Some(v) = get("ODDONE_LOG_PATH") {
            config.log_path = Some(PathBuf::from(v));
        }
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--seed" => self.seed = Some(parse_seed(value()?)?),
                "--time-per-level" => self.time_per_level_ms = parse_time(value()?)?,
                "--grid" => {
                    let (rows, cols) = parse_grid(value()?)?;
                    self.grid_rows = rows;
                    self.grid_cols = cols;
                }
                "--log" => self.log_path = Some(PathBuf::from(value()?)),
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 2;
        }
        Ok(())
    }

    pub fn rules(&self) -> Result<GameRules> {
        Ok(GameRules::with_grid(self.grid_rows, self.grid_cols)?
            .with_time_per_level_ms(self.time_per_level_ms))
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn effective_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Build a fresh game from this configuration.
    pub fn new_game(&self) -> Result<GameState> {
        let seed = self.effective_seed();
        log::info!(
            "new game: seed={} grid={}x{} time_per_level={}ms",
            seed,
            self.grid_rows,
            self.grid_cols,
            self.time_per_level_ms
        );
        Ok(GameState::with_rng(
            Palette::animals(),
            self.rules()?,
            SimpleRng::new(seed),
        )?)
    }
}

fn parse_seed(v: &str) -> Result<u32> {
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid seed value: {}", v))
}

fn parse_time(v: &str) -> Result<u64> {
    match v.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(anyhow!("invalid time per level (ms): {}", v)),
    }
}

fn parse_grid(v: &str) -> Result<(u16, u16)> {
    let (rows, cols) = v
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("grid must look like ROWSxCOLS: {}", v))?;
    let rows = rows
        .trim()
        .parse::<u16>()
        .map_err(|_| anyhow!("invalid grid rows: {}", rows))?;
    let cols = cols
        .trim()
        .parse::<u16>()
        .map_err(|_| anyhow!("invalid grid columns: {}", cols))?;
    if rows == 0 || cols == 0 || rows > MAX_GRID_DIM || cols > MAX_GRID_DIM {
        return Err(anyhow!(
            "grid must be between 1x1 and {}x{}: {}",
            MAX_GRID_DIM,
            MAX_GRID_DIM,
            v
        ));
    }
    Ok((rows, cols))
}
