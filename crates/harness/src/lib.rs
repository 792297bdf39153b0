//! Randomized test harness for card effects: fabricate states, play the
//! card, diff the result against the expected deltas, report.

mod check;
mod config;
mod error;
mod generate;
mod report;
mod runner;

pub use check::*;
pub use config::*;
pub use error::*;
pub use generate::*;
pub use report::*;
pub use runner::*;
