// B2 Rust Library for Backblaze B2 Cloud Storage
// Copyright 2026 The b2-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for B2 operations

use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Errors raised before a request leaves the client because the client
/// (or the facade wrapping it) is not in a state that allows it.
#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("client is not authorized; call authorize_account first")]
    NotAuthorized,

    #[error(
        "application key is not restricted to bucket '{bucket_id}' (allowed bucket: {})",
        allowed_bucket_id.as_deref().unwrap_or("<none>")
    )]
    BucketNotAllowed {
        bucket_id: String,
        allowed_bucket_id: Option<String>,
    },

    #[error("bucket name is unknown; the application key does not name its bucket")]
    MissingBucketName,

    #[error("environment variable {0} is not set")]
    MissingEnvVar(&'static str),
}

/// Errors detected locally while building a request or decoding a response.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("{0} must not be empty")]
    EmptyCredential(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),

    #[error("response is missing field '{0}'")]
    MissingField(&'static str),

    #[error("invalid UTF-8 in response: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

/// Transport level failures reported by the HTTP client.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// JSON error document returned by the B2 API on failure.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct B2ErrorResponse {
    pub status: u16,
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Non-2xx response from the server. Status, headers and body are kept
/// exactly as received.
#[derive(Clone, Debug)]
pub struct B2ServerError {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl B2ServerError {
    pub(crate) fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code of the failed response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers as returned by the server.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Decodes the body as a B2 error document, if it is one.
    pub fn error_response(&self) -> Option<B2ErrorResponse> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Returns the B2 error code (e.g. `expired_auth_token`), if present.
    pub fn code(&self) -> Option<String> {
        self.error_response().map(|e| e.code)
    }
}

impl fmt::Display for B2ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_response() {
            Some(e) => write!(
                f,
                "B2 request failed; status: {}, code: {}, message: {}",
                self.status, e.code, e.message
            ),
            None => write!(
                f,
                "B2 request failed; status: {}, body: {}",
                self.status,
                String::from_utf8_lossy(&self.body)
            ),
        }
    }
}

impl std::error::Error for B2ServerError {}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigErr),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    B2Server(#[from] B2ServerError),
}

impl Error {
    /// Returns the server error if this error came from a non-2xx response.
    pub fn as_server_error(&self) -> Option<&B2ServerError> {
        match self {
            Error::B2Server(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::ReqwestError(err))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_decodes_b2_body() {
        let body = Bytes::from_static(
            br#"{"status":401,"code":"expired_auth_token","message":"Authorization token has expired"}"#,
        );
        let err = B2ServerError::new(401, HeaderMap::new(), body.clone());

        assert_eq!(err.status(), 401);
        assert_eq!(err.body(), &body);
        assert_eq!(err.code().as_deref(), Some("expired_auth_token"));
        assert_eq!(
            err.to_string(),
            "B2 request failed; status: 401, code: expired_auth_token, message: Authorization token has expired"
        );
    }

    #[test]
    fn test_server_error_keeps_non_json_body() {
        let err = B2ServerError::new(502, HeaderMap::new(), Bytes::from_static(b"bad gateway"));

        assert!(err.error_response().is_none());
        assert_eq!(err.to_string(), "B2 request failed; status: 502, body: bad gateway");
    }

    #[test]
    fn test_bucket_not_allowed_message() {
        let err = ConfigErr::BucketNotAllowed {
            bucket_id: "b1".into(),
            allowed_bucket_id: None,
        };
        assert_eq!(
            err.to_string(),
            "application key is not restricted to bucket 'b1' (allowed bucket: <none>)"
        );
    }
}
