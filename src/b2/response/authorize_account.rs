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

use crate::b2::error::{Error, ValidationErr};
use crate::b2::header_constants::AUTHORIZATION;
use crate::b2::response_traits::{HasB2Fields, HasCachedBody, required_str};
use crate::b2::session::Session;
use crate::b2::types::{AuthorizeAccountResult, B2Request, FromB2Response};
use crate::{impl_has_b2fields, impl_redacted_debug};
use bytes::Bytes;
use http::HeaderMap;
use once_cell::sync::OnceCell;
use std::mem;

/// Response of
/// [authorize_account()](crate::b2::client::B2Client::authorize_account)
/// API
///
/// By the time this value exists the session has been stored in the client.
#[derive(Clone)]
pub struct AuthorizeAccountResponse {
    request: B2Request,
    headers: HeaderMap,
    body: Bytes,
    cached_body: OnceCell<serde_json::Value>,
}

impl_has_b2fields!(AuthorizeAccountResponse);
impl_redacted_debug!(AuthorizeAccountResponse);

impl AuthorizeAccountResponse {
    /// The full authorization payload.
    pub fn result(&self) -> Result<AuthorizeAccountResult, ValidationErr> {
        self.decode()
    }

    pub fn account_id(&self) -> Result<String, ValidationErr> {
        required_str(self.cached_body()?, "accountId")
    }
}

#[async_trait::async_trait]
impl FromB2Response for AuthorizeAccountResponse {
    async fn from_b2response(
        request: B2Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(ValidationErr::BodyRead)?;

        let result: AuthorizeAccountResult =
            serde_json::from_slice(&body).map_err(ValidationErr::from)?;
        log::info!(
            "authorized account {} (api: {}, download: {})",
            result.account_id,
            result.api_url,
            result.download_url
        );

        let mut request = request;
        request.headers.remove(AUTHORIZATION);
        request.client.set_session(Session::from(result));

        Ok(Self {
            request,
            headers,
            body,
            cached_body: OnceCell::new(),
        })
    }
}
