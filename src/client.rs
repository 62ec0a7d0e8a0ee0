//! API Client Core
//!
//! Session context, request model and the shared request executor used by
//! every endpoint wrapper. One `Client` carries the API key and proxy
//! configuration; resource groups (Livehunt, Retrohunt, ...) borrow it and
//! reuse the identical build request -> send -> validate status -> return
//! payload round trip.

use std::io::{Read, Write};

use serde_json::Value;

use crate::accounts::Accounts;
use crate::constants;
use crate::error::Error;
use crate::livehunt::Livehunt;
use crate::retrohunt::Retrohunt;
use crate::zip_files::ZipFiles;

// ============================================================================
// SESSION
// ============================================================================

/// Per-scheme proxy configuration
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    pub http: Option<String>,
    pub https: Option<String>,
}

impl ProxyConfig {
    /// Proxy URL used for outgoing calls. The API is served over HTTPS, so
    /// the `https` entry wins when both are set.
    pub fn preferred(&self) -> Option<&str> {
        self.https.as_deref().or(self.http.as_deref())
    }
}

/// Immutable session context shared by all requests
#[derive(Debug, Clone)]
pub struct Session {
    api_key: String,
    proxies: Option<ProxyConfig>,
}

impl Session {
    /// Create a session. Fails with a configuration error when the key is
    /// empty, before any network call can happen.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration {
                message: "You must provide a valid API key".to_string(),
            });
        }

        Ok(Self { api_key, proxies: None })
    }

    /// Create a session from the `VT_API_KEY` environment variable
    pub fn from_env() -> Result<Self, Error> {
        let key = constants::api_key().ok_or_else(|| Error::Configuration {
            message: "VT_API_KEY is not set".to_string(),
        })?;
        Self::new(key)
    }

    /// Attach a proxy configuration
    pub fn with_proxies(mut self, proxies: ProxyConfig) -> Self {
        self.proxies = Some(proxies);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn proxies(&self) -> Option<&ProxyConfig> {
        self.proxies.as_ref()
    }
}

// ============================================================================
// REQUEST MODEL
// ============================================================================

/// HTTP method used by the endpoint wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing API request. Paths are relative to the base URL; query
/// parameters added through `query_opt` are dropped entirely when absent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Add a query parameter
    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present. `None` values are
    /// omitted from the request, not sent as empty placeholders.
    pub fn query_opt(self, name: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Attach a JSON body, serialized verbatim
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a query parameter by name
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Escape one path segment so interpolated resource IDs cannot break out of
/// their URL position.
pub(crate) fn path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// Raw response: status code plus a streaming body reader
pub struct RawResponse {
    pub status: u16,
    pub body: Box<dyn Read + Send>,
}

/// Seam between the executor and the wire. The production implementation
/// wraps a `ureq::Agent`; tests substitute a canned transport.
pub trait Transport: Send + Sync {
    fn send(&self, session: &Session, request: &ApiRequest) -> Result<RawResponse, Error>;
}

/// Blocking HTTP transport backed by `ureq`
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTransport {
    pub fn new(session: &Session, base_url: String) -> Result<Self, Error> {
        // No client-side timeout; the transport default applies
        let mut builder = ureq::AgentBuilder::new();

        if let Some(url) = session.proxies().and_then(|p| p.preferred()) {
            let proxy = ureq::Proxy::new(url).map_err(|e| Error::Configuration {
                message: format!("Invalid proxy URL {}: {}", url, e),
            })?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            agent: builder.build(),
            base_url,
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, session: &Session, request: &ApiRequest) -> Result<RawResponse, Error> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut http_request = self
            .agent
            .request(request.method.as_str(), &url)
            .set("x-apikey", session.api_key())
            .set("Accept", "application/json");

        for (name, value) in &request.query {
            http_request = http_request.query(name, value);
        }

        let result = match &request.body {
            Some(body) => {
                let text = serde_json::to_string(body).map_err(|e| Error::Parse {
                    message: format!("Failed to serialize request body: {}", e),
                })?;
                http_request
                    .set("Content-Type", "application/json")
                    .send_string(&text)
            }
            None => http_request.call(),
        };

        match result {
            Ok(response) => Ok(RawResponse {
                status: response.status(),
                body: Box::new(response.into_reader()),
            }),
            // Non-2xx still carries a body; the executor decides what to do
            Err(ureq::Error::Status(status, response)) => Ok(RawResponse {
                status,
                body: Box::new(response.into_reader()),
            }),
            Err(e) => Err(Error::Transport { message: e.to_string() }),
        }
    }
}

// ============================================================================
// CLIENT
// ============================================================================

/// Shared request executor. All resource groups issue their calls through
/// one `Client`; the session is read-only, so sharing a client across
/// threads is safe.
pub struct Client {
    session: Session,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Create a client talking to the real API (base URL from `VT_API_URL`
    /// or the built-in default).
    pub fn new(session: Session) -> Result<Self, Error> {
        let transport = HttpTransport::new(&session, constants::api_url())?;
        Ok(Self::with_transport(session, Box::new(transport)))
    }

    /// Create a client with a custom transport
    pub fn with_transport(session: Session, transport: Box<dyn Transport>) -> Self {
        Self { session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Execute a request and return the parsed JSON payload
    pub fn request(&self, request: ApiRequest) -> Result<Value, Error> {
        log::debug!("{} {}", request.method.as_str(), request.path);

        let mut response = self.transport.send(&self.session, &request)?;
        let mut text = String::new();
        response
            .body
            .read_to_string(&mut text)
            .map_err(|e| Error::Transport { message: e.to_string() })?;

        if response.status != 200 {
            log::error!(
                "{} {} failed with status {}",
                request.method.as_str(),
                request.path,
                response.status
            );
            return Err(Error::Api {
                status: response.status,
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| Error::Parse {
            message: format!("Invalid JSON in response: {}", e),
        })
    }

    /// Execute a request whose success carries no payload (delete/abort)
    pub fn request_empty(&self, request: ApiRequest) -> Result<(), Error> {
        log::debug!("{} {}", request.method.as_str(), request.path);

        let mut response = self.transport.send(&self.session, &request)?;
        let mut text = String::new();
        response
            .body
            .read_to_string(&mut text)
            .map_err(|e| Error::Transport { message: e.to_string() })?;

        if response.status != 200 {
            log::error!(
                "{} {} failed with status {}",
                request.method.as_str(),
                request.path,
                response.status
            );
            return Err(Error::Api {
                status: response.status,
                message: text,
            });
        }

        Ok(())
    }

    /// Execute a request and stream the body into `writer` in fixed-size
    /// chunks, flushing after each chunk. Returns the number of bytes
    /// written. Write failures propagate; bytes flushed before the failure
    /// stay on disk.
    pub fn download<W: Write>(&self, request: ApiRequest, writer: &mut W) -> Result<u64, Error> {
        log::debug!("{} {} (download)", request.method.as_str(), request.path);

        let mut response = self.transport.send(&self.session, &request)?;

        if response.status != 200 {
            let mut text = String::new();
            response
                .body
                .read_to_string(&mut text)
                .map_err(|e| Error::Transport { message: e.to_string() })?;
            return Err(Error::Api {
                status: response.status,
                message: text,
            });
        }

        let mut buffer = [0u8; constants::DOWNLOAD_CHUNK_SIZE];
        let mut written: u64 = 0;

        loop {
            let read = response
                .body
                .read(&mut buffer)
                .map_err(|e| Error::Transport { message: e.to_string() })?;
            if read == 0 {
                break;
            }

            writer
                .write_all(&buffer[..read])
                .map_err(|e| Error::Io { message: e.to_string() })?;
            writer
                .flush()
                .map_err(|e| Error::Io { message: e.to_string() })?;
            written += read as u64;
        }

        Ok(written)
    }

    // ------------------------------------------------------------------
    // Resource group accessors
    // ------------------------------------------------------------------

    pub fn livehunt(&self) -> Livehunt<'_> {
        Livehunt::new(self)
    }

    pub fn retrohunt(&self) -> Retrohunt<'_> {
        Retrohunt::new(self)
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    pub fn zip_files(&self) -> ZipFiles<'_> {
        ZipFiles::new(self)
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Render a payload the way the original tooling displayed it: pretty-printed
/// with sorted keys. Purely a display convenience; wrappers always hand back
/// structured values.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    /// Canned transport recording every request it sees
    #[derive(Clone)]
    pub(crate) struct MockTransport {
        status: u16,
        body: Vec<u8>,
        pub(crate) requests: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl MockTransport {
        pub(crate) fn ok(body: &str) -> Self {
            Self::with_status(200, body.as_bytes())
        }

        pub(crate) fn with_status(status: u16, body: &[u8]) -> Self {
            Self {
                status,
                body: body.to_vec(),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub(crate) fn client(&self) -> Client {
            let session = Session::new("test-key").unwrap();
            Client::with_transport(session, Box::new(self.clone()))
        }

        pub(crate) fn last_request(&self) -> ApiRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request was sent")
        }
    }

    impl Transport for MockTransport {
        fn send(&self, _session: &Session, request: &ApiRequest) -> Result<RawResponse, Error> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(RawResponse {
                status: self.status,
                body: Box::new(Cursor::new(self.body.clone())),
            })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
