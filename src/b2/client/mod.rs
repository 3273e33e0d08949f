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

//! B2 client to perform account, bucket, file and key operations

use bytes::Bytes;
use http::{HeaderMap, Method};
use std::mem;
use std::sync::{Arc, PoisonError, RwLock};

use crate::b2::error::{B2ServerError, ConfigErr, Error, ValidationErr};
use crate::b2::header_constants::*;
use crate::b2::multimap_ext::{Multimap, MultimapExt};
use crate::b2::progress::{ProgressSink, upload_body};
use crate::b2::session::Session;
use crate::b2::types::Endpoint;
use crate::b2::utils::{encode_file_name, join_url};

// Account
mod authorize_account;

// Buckets
mod create_bucket;
mod delete_bucket;
mod get_bucket;
mod list_buckets;
mod update_bucket;

// Files
mod delete_file_version;
mod download_file_by_id;
mod download_file_by_name;
mod get_download_authorization;
mod get_file_info;
mod get_upload_url;
mod hide_file;
mod list_file_names;
mod list_file_versions;
mod upload_file;

// Large files
mod begin_large_file;
mod cancel_large_file;
mod finish_large_file;
mod get_upload_part_url;
mod list_parts;
mod list_unfinished_large_files;
mod start_large_file;
mod upload_part;

// Keys
mod create_key;
mod delete_key;
mod list_keys;

/// Authorization host used when none is configured.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://api.backblazeb2.com";

/// Path prefix of every native API call.
pub const API_PATH: &str = "b2api/v2";

/// Redirects the upload transport will follow. The transport's redirect
/// policy is built from this value. Upload URLs carry a single-use token, so
/// a redirect is reported instead of replayed.
pub const UPLOAD_MAX_REDIRECTS: usize = 0;

/// Connection pool settings shared by the session and upload transports.
///
/// B2 spreads work over several hosts: the API host from the session, the
/// download host, and one pod per upload URL. Pools are kept per host, so
/// `max_idle_per_host` bounds the idle connections to each pod. Raise it
/// when many large-file parts are uploaded in parallel to the same part URL
/// host; lower `idle_timeout` for short-lived tools that touch few files.
///
/// # Example
///
/// ```
/// use backblaze::b2::client::{B2ClientBuilder, ConnectionPoolConfig};
/// use std::time::Duration;
///
/// // Eight part uploads in flight at a time.
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(8)
///     .idle_timeout(Duration::from_secs(30));
/// let client = B2ClientBuilder::new()
///     .connection_pool_config(config)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Idle connections kept per API, download or upload host. Default: 32
    pub max_idle_per_host: usize,

    /// Idle time after which a pooled connection is closed. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval for long part uploads. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Disable Nagle's algorithm. Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }

    fn apply(&self, builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        builder
            .tcp_nodelay(self.tcp_nodelay)
            .tcp_keepalive(self.tcp_keepalive)
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
    }
}

/// Client Builder manufactures a [`B2Client`] using given parameters.
#[derive(Debug)]
pub struct B2ClientBuilder {
    auth_base_url: String,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
    http_client: Option<reqwest::Client>,
}

impl Default for B2ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl B2ClientBuilder {
    pub fn new() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
            http_client: None,
        }
    }

    /// Set the host `b2_authorize_account` is sent to. Everything else is
    /// addressed through the URLs the authorization returns.
    pub fn auth_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.auth_base_url = url.into();
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Configure the HTTP connection pool settings of both transports.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Use a preconfigured `reqwest::Client` for session-scoped calls. The
    /// upload transport is always built here so that it never follows
    /// redirects.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<B2Client, Error> {
        let auth_base_url = self.auth_base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&auth_base_url)
            .map_err(|e| ValidationErr::InvalidUrl(format!("{auth_base_url}: {e}")))?;

        let mut user_agent = String::from("B2 (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") b2-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }

        let pool_config = &self.connection_pool_config;
        let http_client = match self.http_client {
            Some(c) => c,
            None => pool_config
                .apply(reqwest::Client::builder())
                .no_gzip()
                .user_agent(user_agent.clone())
                .build()
                .map_err(ValidationErr::HttpClientBuild)?,
        };

        let upload_transport = UploadTransport::new(
            pool_config
                .apply(reqwest::Client::builder())
                .no_gzip()
                .user_agent(user_agent),
            UPLOAD_MAX_REDIRECTS,
        )?;

        Ok(B2Client {
            http_client,
            upload_transport,
            shared: Arc::new(SharedClientItems {
                auth_base_url,
                session: RwLock::new(None),
            }),
        })
    }
}

/// HTTP client used for uploads to server-issued URLs.
#[derive(Clone, Debug)]
pub struct UploadTransport {
    client: reqwest::Client,
    max_redirects: usize,
}

impl UploadTransport {
    fn new(builder: reqwest::ClientBuilder, max_redirects: usize) -> Result<Self, Error> {
        let policy = match max_redirects {
            0 => reqwest::redirect::Policy::none(),
            n => reqwest::redirect::Policy::limited(n),
        };
        let client = builder
            .redirect(policy)
            .build()
            .map_err(ValidationErr::HttpClientBuild)?;
        Ok(Self {
            client,
            max_redirects,
        })
    }

    /// Redirect limit the transport's policy was built with. Clients from
    /// [`B2ClientBuilder`] use [`UPLOAD_MAX_REDIRECTS`].
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

/// Backblaze B2 client.
///
/// Cloning is cheap; clones share the session, so authorizing one clone
/// authorizes all of them.
#[derive(Clone, Debug)]
pub struct B2Client {
    http_client: reqwest::Client,
    upload_transport: UploadTransport,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl B2Client {
    /// Returns a client talking to the public B2 authorization host.
    ///
    /// # Examples
    ///
    /// ```
    /// use backblaze::b2::client::B2Client;
    ///
    /// let client = B2Client::new().unwrap();
    /// assert!(!client.is_authorized());
    /// ```
    pub fn new() -> Result<Self, Error> {
        B2ClientBuilder::new().build()
    }

    /// The authorization host this client was configured with.
    pub fn auth_base_url(&self) -> &str {
        &self.shared.auth_base_url
    }

    /// Transport used for `upload_file` and `upload_part`.
    pub fn upload_transport(&self) -> &UploadTransport {
        &self.upload_transport
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Result<Arc<Session>, ConfigErr> {
        self.shared
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(ConfigErr::NotAuthorized)
    }

    pub fn is_authorized(&self) -> bool {
        self.session().is_ok()
    }

    /// Replaces the session, unconditionally.
    pub(crate) fn set_session(&self, session: Session) {
        let mut guard = self
            .shared
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(session));
    }

    fn resolve_url(
        &self,
        endpoint: &Endpoint,
        session: Option<&Session>,
    ) -> Result<String, ConfigErr> {
        let session = || session.ok_or(ConfigErr::NotAuthorized);
        Ok(match endpoint {
            Endpoint::Authorize => join_url(
                &self.shared.auth_base_url,
                &format!("{API_PATH}/b2_authorize_account"),
            ),
            Endpoint::Api(name) => join_url(&session()?.api_url, &format!("{API_PATH}/{name}")),
            Endpoint::DownloadByName {
                bucket_name,
                file_name,
            } => join_url(
                &session()?.download_url,
                &format!("file/{bucket_name}/{}", encode_file_name(file_name)),
            ),
            Endpoint::DownloadById => join_url(
                &session()?.download_url,
                &format!("{API_PATH}/b2_download_file_by_id"),
            ),
            Endpoint::Upload(url) => url.clone(),
        })
    }

    /// Sends one request. Session-scoped endpoints get the session token as
    /// `Authorization` on the outgoing request only; upload endpoints go
    /// through the upload transport with whatever token the caller put in
    /// `headers`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn execute(
        &self,
        method: Method,
        endpoint: &Endpoint,
        session: Option<&Session>,
        headers: &Multimap,
        query_params: &Multimap,
        body: Option<Bytes>,
        progress: Option<ProgressSink>,
    ) -> Result<reqwest::Response, Error> {
        let mut url = self.resolve_url(endpoint, session)?;
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.to_query_string());
        }

        let session_token = if endpoint.needs_session() {
            Some(&session.ok_or(ConfigErr::NotAuthorized)?.authorization_token)
        } else {
            None
        };

        let transport = match endpoint {
            Endpoint::Upload(_) => &self.upload_transport.client,
            _ => &self.http_client,
        };

        log::debug!("{method} {} {}", endpoint_kind(endpoint), strip_query(&url));

        let mut req = transport.request(method.clone(), &url);
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        if let Some(token) = session_token {
            req = req.header(AUTHORIZATION, token);
        }
        if let Some(data) = body {
            req = req.body(upload_body(data, progress));
        }

        let mut resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await?;
        let err = B2ServerError::new(status, headers, body);
        log::debug!(
            "{method} {} failed with status {status} ({})",
            endpoint_kind(endpoint),
            err.code().unwrap_or_default()
        );
        Err(err.into())
    }
}

fn endpoint_kind(endpoint: &Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Authorize => "b2_authorize_account",
        Endpoint::Api(name) => name,
        Endpoint::DownloadByName { .. } => "download_file_by_name",
        Endpoint::DownloadById => "b2_download_file_by_id",
        Endpoint::Upload(_) => "upload",
    }
}

/// Download-authorization tokens may travel in the query string.
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) auth_base_url: String,
    session: RwLock<Option<Arc<Session>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b2::types::Allowed;

    fn session() -> Session {
        Session {
            account_id: "acc".into(),
            authorization_token: "tok".into(),
            api_url: "https://api001.example.com/".into(),
            download_url: "https://f001.example.com".into(),
            recommended_part_size: 100,
            absolute_minimum_part_size: 5,
            allowed: Allowed::default(),
        }
    }

    #[test]
    fn test_builder_rejects_bad_auth_url() {
        let err = B2ClientBuilder::new().auth_base_url("not a url").build();
        assert!(matches!(
            err,
            Err(Error::Validation(ValidationErr::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_resolve_urls() {
        let client = B2ClientBuilder::new()
            .auth_base_url("http://127.0.0.1:1/")
            .build()
            .unwrap();
        let s = session();

        assert_eq!(
            client.resolve_url(&Endpoint::Authorize, None).unwrap(),
            "http://127.0.0.1:1/b2api/v2/b2_authorize_account"
        );
        assert_eq!(
            client
                .resolve_url(&Endpoint::Api("b2_list_buckets"), Some(&s))
                .unwrap(),
            "https://api001.example.com/b2api/v2/b2_list_buckets"
        );
        assert_eq!(
            client
                .resolve_url(
                    &Endpoint::DownloadByName {
                        bucket_name: "photos".into(),
                        file_name: "2024/a b#1.jpg".into(),
                    },
                    Some(&s)
                )
                .unwrap(),
            "https://f001.example.com/file/photos/2024/a%20b%231.jpg"
        );
        assert!(matches!(
            client.resolve_url(&Endpoint::DownloadById, None),
            Err(ConfigErr::NotAuthorized)
        ));
    }

    #[test]
    fn test_session_replaced_atomically() {
        let client = B2Client::new().unwrap();
        assert!(!client.is_authorized());

        client.set_session(session());
        let before = client.session().unwrap();

        let mut next = session();
        next.authorization_token = "tok2".into();
        client.clone().set_session(next);

        assert_eq!(before.authorization_token, "tok");
        assert_eq!(client.session().unwrap().authorization_token, "tok2");
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("https://a/b?x=1"), "https://a/b");
        assert_eq!(strip_query("https://a/b"), "https://a/b");
    }
}
