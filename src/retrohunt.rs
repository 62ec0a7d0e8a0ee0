//! Retrohunt Endpoints
//!
//! Run YARA jobs over the historical file corpus: create, inspect, abort and
//! collect matching files.

use serde_json::Value;

use crate::client::{path_segment, ApiRequest, Client};
use crate::error::Error;

/// Retrohunt resource group
pub struct Retrohunt<'a> {
    client: &'a Client,
}

impl<'a> Retrohunt<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieve a single job by ID, or list jobs when no ID is given
    pub fn get_jobs(
        &self,
        job_id: Option<&str>,
        limit: Option<u32>,
        filter: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<Value, Error> {
        let request = match job_id {
            Some(id) => ApiRequest::get(format!(
                "/intelligence/retrohunt_jobs/{}",
                path_segment(id)
            )),
            None => ApiRequest::get("/intelligence/retrohunt_jobs")
                .query_opt("limit", limit)
                .query_opt("filter", filter)
                .query_opt("cursor", cursor),
        };

        self.client.request(request)
    }

    /// Create a job. The payload is sent verbatim as the JSON body.
    pub fn create_job(&self, data: Value) -> Result<Value, Error> {
        let request = ApiRequest::post("/intelligence/retrohunt_jobs").body(data);
        self.client.request(request)
    }

    /// Delete a job. Success carries no payload.
    pub fn delete_job(&self, job_id: &str) -> Result<(), Error> {
        let request = ApiRequest::delete(format!(
            "/intelligence/retrohunt_jobs/{}",
            path_segment(job_id)
        ));
        self.client.request_empty(request)
    }

    /// Abort a running job. Success carries no payload.
    pub fn abort_job(&self, job_id: &str) -> Result<(), Error> {
        let request = ApiRequest::post(format!(
            "/intelligence/retrohunt_jobs/{}/abort",
            path_segment(job_id)
        ));
        self.client.request_empty(request)
    }

    /// Get the files matched by a job
    pub fn get_matching_files(&self, job_id: &str) -> Result<Value, Error> {
        let request = ApiRequest::get(format!(
            "/intelligence/retrohunt_jobs/{}/matching_files",
            path_segment(job_id)
        ));
        self.client.request(request)
    }
}

// ============================================================================
// TESTS
// ============================================================================
