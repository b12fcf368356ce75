// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::config::{FileConfig, RunConfig, load_config_file};
pub use crate::core::discovery::Discoverer;
pub use crate::core::rewriter::replace_size_classes;
pub use crate::core::runner::{process_file, rewrite_directory};
pub use crate::models::{FileOutcome, RunSummary};
