//! Livehunt Endpoints
//!
//! Manage YARA rulesets and the notifications they generate when new files
//! match. All calls go through the shared client executor.

use serde_json::Value;

use crate::client::{path_segment, ApiRequest, Client};
use crate::error::Error;

/// Livehunt resource group
pub struct Livehunt<'a> {
    client: &'a Client,
}

impl<'a> Livehunt<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    // ------------------------------------------------------------------
    // Rulesets
    // ------------------------------------------------------------------

    /// Retrieve a single ruleset by ID, or list rulesets when no ID is
    /// given. Listing accepts `limit`, `filter`, `order` and `cursor`;
    /// absent parameters are omitted from the request.
    pub fn get_rulesets(
        &self,
        ruleset_id: Option<&str>,
        limit: Option<u32>,
        filter: Option<&str>,
        order: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<Value, Error> {
        let request = match ruleset_id {
            Some(id) => ApiRequest::get(format!(
                "/intelligence/hunting_rulesets/{}",
                path_segment(id)
            )),
            None => ApiRequest::get("/intelligence/hunting_rulesets")
                .query_opt("limit", limit)
                .query_opt("filter", filter)
                .query_opt("order", order)
                .query_opt("cursor", cursor),
        };

        self.client.request(request)
    }

    /// Create a ruleset. The payload is sent verbatim as the JSON body.
    pub fn create_ruleset(&self, data: Value) -> Result<Value, Error> {
        let request = ApiRequest::post("/intelligence/hunting_rulesets").body(data);
        self.client.request(request)
    }

    /// Update an existing ruleset
    pub fn update_ruleset(&self, ruleset_id: &str, data: Value) -> Result<Value, Error> {
        let request = ApiRequest::patch(format!(
            "/intelligence/hunting_rulesets/{}",
            path_segment(ruleset_id)
        ))
        .body(data);
        self.client.request(request)
    }

    /// Delete a ruleset. Success carries no payload.
    pub fn delete_ruleset(&self, ruleset_id: &str) -> Result<(), Error> {
        let request = ApiRequest::delete(format!(
            "/intelligence/hunting_rulesets/{}",
            path_segment(ruleset_id)
        ));
        self.client.request_empty(request)
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Retrieve a single notification by ID, or list notifications
    pub fn get_notifications(
        &self,
        notification_id: Option<&str>,
        limit: Option<u32>,
        filter: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<Value, Error> {
        let request = match notification_id {
            Some(id) => ApiRequest::get(format!(
                "/intelligence/hunting_notifications/{}",
                path_segment(id)
            )),
            None => ApiRequest::get("/intelligence/hunting_notifications")
                .query_opt("limit", limit)
                .query_opt("filter", filter)
                .query_opt("cursor", cursor),
        };

        self.client.request(request)
    }

    /// Delete one notification by ID.
    ///
    /// The API exposes deletion by `id` and by `tag` on the same endpoint;
    /// both operations are kept distinct here.
    pub fn delete_notification(&self, notification_id: &str) -> Result<(), Error> {
        let request = ApiRequest::delete("/intelligence/hunting_notifications")
            .query("id", notification_id);
        self.client.request_empty(request)
    }

    /// Delete every notification carrying a tag
    pub fn delete_notifications(&self, tag: &str) -> Result<(), Error> {
        let request =
            ApiRequest::delete("/intelligence/hunting_notifications").query("tag", tag);
        self.client.request_empty(request)
    }

    /// Retrieve file objects with notification context attributes
    pub fn get_notification_files(
        &self,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<Value, Error> {
        let request = ApiRequest::get("/intelligence/hunting_notification_files")
            .query_opt("limit", limit)
            .query_opt("cursor", cursor);
        self.client.request(request)
    }
}

// ============================================================================
// TESTS
// ============================================================================
