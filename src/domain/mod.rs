//! Wire types for the job listing API

mod filter;
mod job;
mod order;

pub use filter::{JobFilter, Match, ParseFilterError};
pub use job::Job;
pub use order::{Direction, JobOrder};
