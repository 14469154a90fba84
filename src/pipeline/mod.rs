//! Pipeline entry points for scout operations.
//!
//! - `run_crawler`: Probe every character, search each user, export results

pub mod crawl;

pub use crawl::{RunOptions, RunReport, run_crawler};
