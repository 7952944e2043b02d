//! lookout-client - list jobs from a Lookout job browser API
//!
//! The client sends `POST /api/v1/jobs` with filters, ordering and pagination
//! and returns the job records from the response. The HTTP transport is
//! pluggable so callers (UIs, tests) can substitute their own.
//!
//! ## Example
//!
//! ```no_run
//! use lookout_client::service::{GetJobsService, JobsService};
//! use lookout_client::transport::{AbortController, HttpTransport};
//! use lookout_client::{JobFilter, JobOrder, Match};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let transport = HttpTransport::new("http://localhost:10000");
//! let service = GetJobsService::new(Some("jsonb".to_string()));
//! let controller = AbortController::new();
//!
//! let filters = [JobFilter::new("queue", Match::Exact, "queue-1")];
//! let response = service
//!     .get_jobs(&transport, &filters, false, &JobOrder::desc("submitted"), 0, 50, Some(&controller.signal()))
//!     .await?;
//! println!("{} jobs", response.jobs.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod service;
pub mod transport;

pub use domain::*;
