//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default API server, only edit this file.

/// Default VirusTotal API v3 base URL
///
/// This is the fallback URL when no environment variable is set.
pub const DEFAULT_API_URL: &str = "https://www.virustotal.com/api/v3";

/// Chunk size used when streaming archive downloads to disk
pub const DOWNLOAD_CHUNK_SIZE: usize = 1024;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get API base URL from environment or use default
pub fn api_url() -> String {
    std::env::var("VT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get API key from environment, if set and non-empty
pub fn api_key() -> Option<String> {
    std::env::var("VT_API_KEY").ok().filter(|key| !key.is_empty())
}
