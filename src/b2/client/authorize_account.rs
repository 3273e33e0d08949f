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

use super::B2Client;
use crate::b2::builders::{AuthorizeAccount, AuthorizeAccountBldr};
use crate::b2::creds::Provider;
use crate::b2::error::Error;
use crate::b2::response::AuthorizeAccountResponse;
use crate::b2::types::B2Api;

impl B2Client {
    /// Creates an [`AuthorizeAccount`] request builder.
    ///
    /// To execute the request, call [`AuthorizeAccount::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing an [`AuthorizeAccountResponse`].
    /// On success the session is stored in this client, replacing any
    /// previous one.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use backblaze::b2::client::B2Client;
    /// use backblaze::b2::types::B2Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = B2Client::new().unwrap();
    ///     let resp = client
    ///         .authorize_account("000a1b2c3d4e5f60000000001", "K000secret")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("authorized account '{}'", resp.account_id().unwrap());
    /// }
    /// ```
    pub fn authorize_account<K: Into<String>, A: Into<String>>(
        &self,
        key_id: K,
        application_key: A,
    ) -> AuthorizeAccountBldr {
        AuthorizeAccount::builder()
            .client(self.clone())
            .key_id(key_id)
            .application_key(application_key)
    }

    /// Authorizes with the credentials `provider` returns.
    pub async fn authorize<P: Provider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<AuthorizeAccountResponse, Error> {
        let creds = provider.fetch()?;
        self.authorize_account(creds.key_id, creds.application_key)
            .build()
            .send()
            .await
    }
}
