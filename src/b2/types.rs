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

//! Request pipeline traits and the data types exchanged with the B2 API

use crate::b2::client::B2Client;
use crate::b2::error::{ConfigErr, Error, ValidationErr};
use crate::b2::header_constants::{APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, X_BZ_CONTENT_SHA1};
use crate::b2::multimap_ext::{Multimap, MultimapExt};
use crate::b2::progress::ProgressSink;
use crate::b2::session::Session;
use crate::b2::utils::{UtcTime, from_millis, sha1_hash_blocking};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// Where a request is sent and which credential accompanies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `b2_authorize_account` on the configured authorization host. The
    /// builder supplies the Basic `Authorization` header.
    Authorize,
    /// `{apiUrl}/b2api/v2/{name}` with the session token.
    Api(&'static str),
    /// `{downloadUrl}/file/{bucket}/{file}` with the session token.
    DownloadByName {
        bucket_name: String,
        file_name: String,
    },
    /// `{downloadUrl}/b2api/v2/b2_download_file_by_id` with the session token.
    DownloadById,
    /// Absolute URL from an upload ticket; sent over the upload transport
    /// with the ticket token only.
    Upload(String),
}

impl Endpoint {
    /// Whether the endpoint is resolved against the session.
    pub fn needs_session(&self) -> bool {
        matches!(
            self,
            Endpoint::Api(_) | Endpoint::DownloadByName { .. } | Endpoint::DownloadById
        )
    }
}

/// How a download body is handed back to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseType {
    /// The whole body as bytes.
    #[default]
    Bytes,
    /// The whole body decoded as JSON.
    Json,
    /// The whole body decoded as UTF-8 text.
    Text,
    /// The body as a byte stream, read lazily by the caller.
    Stream,
}

#[derive(Clone, TypedBuilder)]
/// Generic B2 request
pub struct B2Request {
    #[builder(!default)] // force required
    pub(crate) client: B2Client,

    #[builder(!default)] // force required
    pub(crate) method: Method,

    #[builder(!default)] // force required
    pub(crate) endpoint: Endpoint,

    /// Session snapshot the request is resolved against.
    #[builder(default, setter(strip_option))]
    pub(crate) session: Option<Arc<Session>>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,

    #[builder(default)]
    pub(crate) progress: Option<ProgressSink>,

    #[builder(default)]
    pub(crate) response_type: ResponseType,

    /// Compute `X-Bz-Content-Sha1` from the body unless a value is given.
    #[builder(default)]
    pub(crate) checksum_body: bool,
}

impl B2Request {
    /// Creates a JSON POST against `{apiUrl}/b2api/v2/{name}`.
    pub(crate) fn api<T: Serialize>(
        client: B2Client,
        session: Arc<Session>,
        name: &'static str,
        payload: &T,
    ) -> Result<Self, Error> {
        let body = serde_json::to_vec(payload).map_err(ValidationErr::from)?;
        let mut headers = Multimap::new();
        headers.add(CONTENT_TYPE, APPLICATION_JSON);
        Ok(B2Request::builder()
            .client(client)
            .method(Method::POST)
            .endpoint(Endpoint::Api(name))
            .session(session)
            .headers(headers)
            .body(Bytes::from(body))
            .build())
    }

    /// Execute the request, returning the response. Only used in [`B2Api::send()`]
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        let session = match (&self.session, self.endpoint.needs_session()) {
            (Some(s), _) => Some(s.clone()),
            (None, true) => return Err(ConfigErr::NotAuthorized.into()),
            (None, false) => None,
        };

        if self.checksum_body && !self.headers.contains_key(X_BZ_CONTENT_SHA1) {
            let data = self.body.clone().unwrap_or_default();
            self.headers
                .add(X_BZ_CONTENT_SHA1, sha1_hash_blocking(data).await);
        }

        self.client
            .execute(
                self.method.clone(),
                &self.endpoint,
                session.as_deref(),
                &self.headers,
                &self.query_params,
                self.body.take(),
                self.progress.clone(),
            )
            .await
    }
}

/// `Authorization` values are redacted and the body is reported by length.
impl fmt::Debug for B2Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter_all()
            .flat_map(|(key, values)| {
                values.iter().map(move |v| {
                    if key.eq_ignore_ascii_case(AUTHORIZATION) {
                        (key.as_str(), "[REDACTED]")
                    } else {
                        (key.as_str(), v.as_str())
                    }
                })
            })
            .collect();
        f.debug_struct("B2Request")
            .field("method", &self.method)
            .field("endpoint", &self.endpoint)
            .field("session", &self.session)
            .field("query_params", &self.query_params)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .field("response_type", &self.response_type)
            .field("checksum_body", &self.checksum_body)
            .finish_non_exhaustive()
    }
}

/// Trait for converting a request builder into a concrete B2 HTTP request.
///
/// Implemented by every request builder. Failing here (missing session,
/// unserializable payload) means no network I/O happens.
pub trait ToB2Request: Sized {
    /// Consumes this request builder and returns a [`B2Request`].
    fn to_b2request(self) -> Result<B2Request, Error>;
}

/// Trait for converting HTTP responses into strongly typed B2 response objects.
#[async_trait]
pub trait FromB2Response: Sized {
    /// Converts the result of executing `request` into the typed response.
    /// Errors from the execution step are passed through unchanged.
    async fn from_b2response(
        request: B2Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all B2 API request builders.
#[async_trait]
pub trait B2Api: ToB2Request {
    /// The response type associated with this request builder.
    type B2Response: FromB2Response;

    /// Sends the request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::B2Response, Error> {
        let mut req: B2Request = self.to_b2request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::B2Response::from_b2response(req, resp).await
    }
}

/// Storage class / visibility of a bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketType {
    AllPublic,
    AllPrivate,
    Snapshot,
    Shared,
    Restricted,
}

impl BucketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketType::AllPublic => "allPublic",
            BucketType::AllPrivate => "allPrivate",
            BucketType::Snapshot => "snapshot",
            BucketType::Shared => "shared",
            BucketType::Restricted => "restricted",
        }
    }
}

impl fmt::Display for BucketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an application key is allowed to do.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowed {
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub bucket_id: Option<String>,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub name_prefix: Option<String>,
}

/// Payload of `b2_authorize_account`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeAccountResult {
    pub account_id: String,
    pub authorization_token: String,
    pub api_url: String,
    pub download_url: String,
    #[serde(default)]
    pub recommended_part_size: u64,
    #[serde(default)]
    pub absolute_minimum_part_size: u64,
    #[serde(default)]
    pub allowed: Allowed,
    #[serde(default)]
    pub s3_api_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Bucket as returned by the bucket operations
pub struct Bucket {
    pub account_id: String,
    pub bucket_id: String,
    pub bucket_name: String,
    pub bucket_type: String,
    #[serde(default)]
    pub bucket_info: HashMap<String, String>,
    #[serde(default)]
    pub cors_rules: Vec<serde_json::Value>,
    #[serde(default)]
    pub lifecycle_rules: Vec<serde_json::Value>,
    #[serde(default)]
    pub revision: u64,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Metadata of a stored file (or file version, hide marker, folder)
pub struct FileRecord {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub bucket_id: Option<String>,
    #[serde(default)]
    pub content_length: u64,
    #[serde(default)]
    pub content_sha1: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub file_info: HashMap<String, String>,
    pub file_name: String,
    #[serde(default)]
    pub upload_timestamp: i64,
}

impl FileRecord {
    pub fn uploaded_at(&self) -> Option<UtcTime> {
        from_millis(self.upload_timestamp)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Upload URL and the token that authorizes one upload to it
pub struct UploadTicket {
    pub upload_url: String,
    pub authorization_token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Contains part number and checksum of an uploaded large-file part
pub struct PartRecord {
    pub file_id: String,
    pub part_number: u16,
    #[serde(default)]
    pub content_length: u64,
    pub content_sha1: String,
    #[serde(default)]
    pub upload_timestamp: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Application key as returned by the key operations
pub struct KeyRecord {
    pub key_name: String,
    pub application_key_id: String,
    /// Only present in the response to `b2_create_key`.
    #[serde(default)]
    pub application_key: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub account_id: String,
    #[serde(default)]
    pub expiration_timestamp: Option<i64>,
    #[serde(default)]
    pub bucket_id: Option<String>,
    #[serde(default)]
    pub name_prefix: Option<String>,
}
