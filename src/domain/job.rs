use serde::{Deserialize, Serialize};

/// A job record as returned by the server.
///
/// The record is kept verbatim; the accessors below only read well-known keys
/// for display and never fail when a key is missing.
///
/// A job must be a JSON object; a `jobs` entry that is not one fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Job(serde_json::Map<String, serde_json::Value>);

impl Job {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn job_id(&self) -> Option<&str> {
        self.str_field("jobId")
    }

    pub fn queue(&self) -> Option<&str> {
        self.str_field("queue")
    }

    pub fn job_set(&self) -> Option<&str> {
        self.str_field("jobSet")
    }

    pub fn owner(&self) -> Option<&str> {
        self.str_field("owner")
    }

    pub fn state(&self) -> Option<&str> {
        self.str_field("state")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }
}
