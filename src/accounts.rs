//! Users & Groups Endpoints
//!
//! Retrieve information on Enterprise users and groups, and objects related
//! to a group.

use serde_json::Value;

use crate::client::{path_segment, ApiRequest, Client};
use crate::error::Error;

/// Accounts resource group
pub struct Accounts<'a> {
    client: &'a Client,
}

impl<'a> Accounts<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieve information on a user
    pub fn info_user(&self, user_id: &str) -> Result<Value, Error> {
        let request = ApiRequest::get(format!("/users/{}", path_segment(user_id)));
        self.client.request(request)
    }

    /// Retrieve information on a group
    pub fn info_group(&self, group_id: &str) -> Result<Value, Error> {
        let request = ApiRequest::get(format!("/groups/{}", path_segment(group_id)));
        self.client.request(request)
    }

    /// Retrieve objects related to a group (e.g. `graphs`)
    pub fn get_relationship(
        &self,
        group_id: &str,
        relationship: &str,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<Value, Error> {
        let request = ApiRequest::get(format!(
            "/groups/{}/relationships/{}",
            path_segment(group_id),
            path_segment(relationship)
        ))
        .query_opt("limit", limit)
        .query_opt("cursor", cursor);

        self.client.request(request)
    }
}

// ============================================================================
// TESTS
// ============================================================================
