// src/core.rs
pub mod discovery;
pub mod rewriter;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_utils;
