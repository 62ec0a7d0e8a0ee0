//! Zip Archive Endpoints
//!
//! Ask the server to bundle files into a password-protected zip, poll its
//! status and download the result. Archive creation is asynchronous on the
//! server side: `info_zip` reports `starting`, `creating`, `finished`,
//! `timeout`, `error-starting` or `error-creating`; the caller re-polls, no
//! state is tracked here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::client::{path_segment, ApiRequest, Client};
use crate::error::Error;

#[derive(Debug, Serialize)]
struct ZipCreateRequest<'a> {
    data: ZipCreateData<'a>,
}

#[derive(Debug, Serialize)]
struct ZipCreateData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    hashes: &'a [&'a str],
}

/// Zip files resource group
pub struct ZipFiles<'a> {
    client: &'a Client,
}

impl<'a> ZipFiles<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Start creation of a password-protected zip bundling the files with
    /// the given hashes (SHA-256, SHA-1 or MD5). Returns the archive job,
    /// including the ID to poll with `info_zip`.
    pub fn create_zip(&self, password: Option<&str>, hashes: &[&str]) -> Result<Value, Error> {
        let body = serde_json::to_value(ZipCreateRequest {
            data: ZipCreateData { password, hashes },
        })
        .map_err(|e| Error::Parse {
            message: format!("Failed to serialize zip request: {}", e),
        })?;

        let request = ApiRequest::post("/intelligence/zip_files").body(body);
        self.client.request(request)
    }

    /// Check the status of a zip file. The file is ready for download once
    /// the reported status is `finished`.
    pub fn info_zip(&self, zip_id: &str) -> Result<Value, Error> {
        let request =
            ApiRequest::get(format!("/intelligence/zip_files/{}", path_segment(zip_id)));
        self.client.request(request)
    }

    /// Get the signed download URL of a finished zip file
    pub fn get_url(&self, zip_id: &str) -> Result<Value, Error> {
        let request = ApiRequest::get(format!(
            "/intelligence/zip_files/{}/download_url",
            path_segment(zip_id)
        ));
        self.client.request(request)
    }

    /// Download a zip file into `output_dir` as `<zip_id>.zip`, streaming in
    /// fixed-size chunks with a flush after each chunk. Returns the path of
    /// the written file.
    pub fn get_zip(&self, zip_id: &str, output_dir: &Path) -> Result<PathBuf, Error> {
        let request = ApiRequest::get(format!(
            "/intelligence/zip_files/{}/download",
            path_segment(zip_id)
        ));

        let path = output_dir.join(format!("{}.zip", zip_id));
        let mut file = fs::File::create(&path).map_err(|e| Error::Io {
            message: format!("Cannot create {}: {}", path.display(), e),
        })?;

        let written = self.client.download(request, &mut file)?;
        log::debug!("Wrote {} bytes to {}", written, path.display());

        Ok(path)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::client::testing::MockTransport;
    use crate::client::Method;
    use crate::error::Error;
    use serde_json::json;

    const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_create_zip_body_shape() {
        let mock = MockTransport::ok(r#"{"data":{"id":"z1"}}"#);
        let client = mock.client();

        client
            .zip_files()
            .create_zip(Some("infected"), &[SHA256_EMPTY])
            .unwrap();

        let request = mock.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/intelligence/zip_files");
        assert_eq!(
            request.body.as_ref().unwrap(),
            &json!({"data": {"password": "infected", "hashes": [SHA256_EMPTY]}})
        );
    }

    #[test]
    fn test_create_zip_omits_absent_password() {
        let mock = MockTransport::ok(r#"{"data":{"id":"z1"}}"#);
        let client = mock.client();

        client.zip_files().create_zip(None, &[SHA256_EMPTY]).unwrap();

        let body = mock.last_request().body.unwrap();
        assert!(body["data"].get("password").is_none());
        assert_eq!(body["data"]["hashes"][0], SHA256_EMPTY);
    }

    #[test]
    fn test_info_and_url_paths() {
        let mock = MockTransport::ok(r#"{"data":{"attributes":{"status":"finished"}}}"#);
        let client = mock.client();

        let info = client.zip_files().info_zip("z1").unwrap();
        assert_eq!(mock.last_request().path, "/intelligence/zip_files/z1");
        assert_eq!(info["data"]["attributes"]["status"], "finished");

        client.zip_files().get_url("z1").unwrap();
        assert_eq!(
            mock.last_request().path,
            "/intelligence/zip_files/z1/download_url"
        );
    }

    #[test]
    fn test_get_zip_writes_file() {
        let payload = b"PK\x03\x04 fake zip bytes";
        let mock = MockTransport::with_status(200, payload);
        let client = mock.client();

        let dir = tempfile::tempdir().unwrap();
        let path = client.zip_files().get_zip("z1", dir.path()).unwrap();

        assert_eq!(path, dir.path().join("z1.zip"));
        assert_eq!(std::fs::read(&path).unwrap(), payload);
        assert_eq!(
            mock.last_request().path,
            "/intelligence/zip_files/z1/download"
        );
    }

    #[test]
    fn test_get_zip_surfaces_api_error() {
        let mock = MockTransport::with_status(404, b"NotFoundError");
        let client = mock.client();

        let dir = tempfile::tempdir().unwrap();
        let err = client.zip_files().get_zip("gone", dir.path()).unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "NotFoundError");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_zip_missing_dir_is_io_error() {
        let mock = MockTransport::with_status(200, b"bytes");
        let client = mock.client();

        let err = client
            .zip_files()
            .get_zip("z1", std::path::Path::new("/nonexistent/dir"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
