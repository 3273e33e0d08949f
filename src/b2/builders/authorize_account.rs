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

//! Builder for the `b2_authorize_account` operation

use crate::b2::client::B2Client;
use crate::b2::error::{Error, ValidationErr};
use crate::b2::header_constants::AUTHORIZATION;
use crate::b2::multimap_ext::{Multimap, MultimapExt};
use crate::b2::response::AuthorizeAccountResponse;
use crate::b2::types::{B2Api, B2Request, Endpoint, ToB2Request};
use crate::b2::utils::basic_auth;
use http::Method;
use std::fmt;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_authorize_account`](https://www.backblaze.com/apidocs/b2-authorize-account) operation.
///
/// Exchanges an application key for a session. The session is stored in the
/// client that built the request and shared by all of its clones.
#[derive(Clone, TypedBuilder)]
pub struct AuthorizeAccount {
    #[builder(!default)]
    client: B2Client,
    /// Application key id, or the account id for the master key.
    #[builder(!default, setter(into))]
    key_id: String,
    #[builder(!default, setter(into))]
    application_key: String,
}

impl fmt::Debug for AuthorizeAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizeAccount")
            .field("key_id", &self.key_id)
            .field("application_key", &"[REDACTED]")
            .finish()
    }
}

impl B2Api for AuthorizeAccount {
    type B2Response = AuthorizeAccountResponse;
}

/// Builder type for [`AuthorizeAccount`] with all required fields set.
pub type AuthorizeAccountBldr = AuthorizeAccountBuilder<((B2Client,), (String,), (String,))>;

impl ToB2Request for AuthorizeAccount {
    fn to_b2request(self) -> Result<B2Request, Error> {
        if self.key_id.is_empty() {
            return Err(ValidationErr::EmptyCredential("application key id").into());
        }
        if self.application_key.is_empty() {
            return Err(ValidationErr::EmptyCredential("application key").into());
        }

        let mut headers = Multimap::new();
        headers.add(
            AUTHORIZATION,
            basic_auth(&self.key_id, &self.application_key),
        );

        Ok(B2Request::builder()
            .client(self.client)
            .method(Method::GET)
            .endpoint(Endpoint::Authorize)
            .headers(headers)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_rejected_locally() {
        let client = B2Client::new().unwrap();

        let err = client.authorize_account("", "key").build().to_b2request();
        assert!(matches!(
            err,
            Err(Error::Validation(ValidationErr::EmptyCredential(_)))
        ));

        let err = client.authorize_account("id", "").build().to_b2request();
        assert!(matches!(
            err,
            Err(Error::Validation(ValidationErr::EmptyCredential(_)))
        ));
    }

    #[test]
    fn test_basic_authorization_header() {
        let client = B2Client::new().unwrap();
        let req = client
            .authorize_account("Aladdin", "open sesame")
            .build()
            .to_b2request()
            .unwrap();

        assert_eq!(req.endpoint, Endpoint::Authorize);
        assert_eq!(req.method, Method::GET);
        assert_eq!(
            req.headers.get(AUTHORIZATION).map(String::as_str),
            Some("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==")
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = B2Client::new().unwrap();
        let s = format!("{:?}", client.authorize_account("id", "very-secret").build());
        assert!(!s.contains("very-secret"));
    }
}
