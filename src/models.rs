// src/models.rs
pub mod file_outcome;
pub mod run_summary;

pub use file_outcome::FileOutcome;
pub use run_summary::RunSummary;
