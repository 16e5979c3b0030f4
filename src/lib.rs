//! Odd One Out (workspace facade crate).
//!
//! This package exposes `odd_one_out::{core,adapter,term,input,types}` while
//! the implementation lives in dedicated crates under `crates/`, plus the
//! configuration and logging setup shared by the binaries.

pub mod config;
pub mod logging;

pub use odd_one_out_adapter as adapter;
pub use odd_one_out_core as core;
pub use odd_one_out_input as input;
pub use odd_one_out_term as term;
pub use odd_one_out_types as types;
