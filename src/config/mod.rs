//! Configuration management for clearpass.
//!
//! Provides XDG-compliant settings storage: default input file, solver
//! strategy and limits, output format and benchmark repetitions.

mod settings;

pub use settings::{AppSettings, Paths};
