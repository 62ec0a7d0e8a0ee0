//! VirusTotal API v3 Enterprise Client
//!
//! Blocking bindings for the Enterprise endpoints: intelligence search, file
//! feeds, Livehunt rulesets and notifications, Retrohunt jobs, users/groups
//! and zip archives. Every wrapper follows the same round trip: build
//! request, send, validate the status code, return the parsed JSON payload.
//!
//! # Components
//! - `client.rs`: session context, transport and the shared request executor
//! - `intelligence.rs`: corpus search and file feed batches
//! - `livehunt.rs`: YARA rulesets and hunting notifications
//! - `retrohunt.rs`: retrohunt jobs over the historical corpus
//! - `accounts.rs`: users and groups
//! - `zip_files.rs`: password-protected archive creation and download
//!
//! ```no_run
//! use virustotal3::{pretty_json, search, Client, Session};
//!
//! fn main() -> Result<(), virustotal3::Error> {
//!     let session = Session::from_env()?;
//!     let client = Client::new(session)?;
//!
//!     let results = search(&client, "type:peexe", None, Some(10), None, None)?;
//!     println!("{}", pretty_json(&results));
//!     Ok(())
//! }
//! ```
//!
//! All calls are synchronous and stateless; a `Client` holds no mutable
//! state, so sharing one across threads is safe. Errors always propagate as
//! [`Error`], never terminating the process.

pub mod accounts;
pub mod client;
pub mod constants;
pub mod error;
pub mod intelligence;
pub mod livehunt;
pub mod retrohunt;
pub mod zip_files;

// Re-exports from client
pub use client::{
    pretty_json, ApiRequest, Client, HttpTransport, Method, ProxyConfig, RawResponse, Session,
    Transport,
};
pub use error::Error;

// Re-exports from resource groups
pub use accounts::Accounts;
pub use intelligence::{file_feed, search, FeedTime};
pub use livehunt::Livehunt;
pub use retrohunt::Retrohunt;
pub use zip_files::ZipFiles;
