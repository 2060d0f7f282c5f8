//! Resume scorer library
//!
//! [`analyze`] and [`progress`] are the two entry points; the rest of the
//! crate loads records and renders results for the CLI.

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use analysis::{analyze, progress, Analysis, Industry, ResumeRecord, Section};
pub use config::Config;
pub use error::{Result, ResumeScorerError};
