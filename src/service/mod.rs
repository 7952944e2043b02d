//! Job query client for `POST /api/v1/jobs`.
//!
//! Turns filters, ordering and pagination into a request on a caller-supplied
//! [`Transport`] and unwraps the `jobs` list from the response. The HTTP
//! status is not inspected; whatever body comes back is parsed as JSON.

mod path;


use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::transport::{AbortSignal, FetchRequest, Transport, TransportError};
use crate::{Job, JobFilter, JobOrder};

pub use path::{jobs_path, JOBS_PATH};

/// Error returned by [`JobsService::get_jobs`]
#[derive(Debug, thiserror::Error)]
pub enum GetJobsError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to parse jobs response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to serialize jobs request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl GetJobsError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, GetJobsError::Transport(TransportError::Aborted))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetJobsResponse {
    pub jobs: Vec<Job>,
}

/// Request body, field order matches the wire format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GetJobsRequestBody<'a> {
    filters: &'a [JobFilter],
    active_job_sets: bool,
    order: &'a JobOrder,
    skip: u64,
    take: u64,
}

/// Lists jobs matching a query
#[async_trait]
pub trait JobsService: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn get_jobs(
        &self,
        transport: &dyn Transport,
        filters: &[JobFilter],
        active_job_sets: bool,
        order: &JobOrder,
        skip: u64,
        take: u64,
        signal: Option<&AbortSignal>,
    ) -> Result<GetJobsResponse, GetJobsError>;
}

/// [`JobsService`] bound to an optional backend identifier
#[derive(Debug, Clone, Default)]
pub struct GetJobsService {
    backend: Option<String>,
}

impl GetJobsService {
    pub fn new(backend: Option<String>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl JobsService for GetJobsService {
    async fn get_jobs(
        &self,
        transport: &dyn Transport,
        filters: &[JobFilter],
        active_job_sets: bool,
        order: &JobOrder,
        skip: u64,
        take: u64,
        signal: Option<&AbortSignal>,
    ) -> Result<GetJobsResponse, GetJobsError> {
        let path = jobs_path(self.backend.as_deref());
        let body = serde_json::to_vec(&GetJobsRequestBody {
            filters,
            active_job_sets,
            order,
            skip,
            take,
        })
        .map_err(GetJobsError::Encode)?;

        let request = FetchRequest::post_json(body).with_signal(signal.cloned());
        let response = transport.fetch(&path, request).await?;
        let json: serde_json::Value = response.json().map_err(GetJobsError::Decode)?;
        if json.is_null() {
            return Err(GetJobsError::Decode(serde::de::Error::custom(
                "expected a jobs response, found null",
            )));
        }

        // Arrays and scalars carry no `jobs` field and list as empty
        let jobs = match json.get("jobs") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(jobs) => Vec::<Job>::deserialize(jobs).map_err(GetJobsError::Decode)?,
        };

        Ok(GetJobsResponse { jobs })
    }
}
