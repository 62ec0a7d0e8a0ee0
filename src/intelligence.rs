//! Intelligence Search & File Feed
//!
//! Module-level wrappers for the file corpus search endpoint and the
//! per-minute file feed batches.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::client::{ApiRequest, Client};
use crate::error::Error;

// ============================================================================
// SEARCH
// ============================================================================

/// Search for files matching a query.
///
/// `order` can be one of `size`, `positives`, `last_submission_date`,
/// `first_submission_date` or `times_submitted`, optionally suffixed with
/// `+` or `-`. Absent parameters are not sent at all.
pub fn search(
    client: &Client,
    query: &str,
    order: Option<&str>,
    limit: Option<u32>,
    cursor: Option<&str>,
    descriptors_only: Option<bool>,
) -> Result<Value, Error> {
    let request = ApiRequest::get("/intelligence/search")
        .query("query", query)
        .query_opt("order", order)
        .query_opt("limit", limit)
        .query_opt("cursor", cursor)
        .query_opt("descriptors_only", descriptors_only);

    client.request(request)
}

// ============================================================================
// FILE FEED
// ============================================================================

/// Feed batch timestamp, minute granularity (`YYYYMMDDhhmm`).
///
/// Batches up to 7 days old can be fetched; the most recent batch lags the
/// current time by 5 minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTime(String);

impl FeedTime {
    /// Validate a raw `YYYYMMDDhhmm` string
    pub fn new(time: &str) -> Result<Self, Error> {
        if time.len() != 12 || !time.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Configuration {
                message: format!("Feed time must be YYYYMMDDhhmm, got '{}'", time),
            });
        }
        Ok(Self(time.to_string()))
    }

    /// Build a feed time from a UTC timestamp
    pub fn from_datetime(time: &DateTime<Utc>) -> Self {
        Self(time.format("%Y%m%d%H%M").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Get the file feed batch for a given minute
pub fn file_feed(client: &Client, time: &FeedTime) -> Result<Value, Error> {
    let request = ApiRequest::get(format!("/feeds/files/{}", time.as_str()));
    client.request(request)
}

// ============================================================================
// TESTS
// ============================================================================
