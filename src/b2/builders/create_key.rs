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

//! Builder for the `b2_create_key` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::CreateKeyResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_create_key`](https://www.backblaze.com/apidocs/b2-create-key) operation.
///
/// The secret of the new key is only returned by this call.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateKey {
    #[builder(!default)]
    client: B2Client,
    /// Capabilities such as `listFiles`, `readFiles`, `writeFiles`.
    #[builder(!default, setter(into))]
    capabilities: Vec<String>,
    #[builder(!default, setter(into))]
    key_name: String,
    #[builder(default, setter(strip_option))]
    valid_duration_in_seconds: Option<u64>,
    /// Restricts the key to one bucket.
    #[builder(default, setter(into, strip_option))]
    bucket_id: Option<String>,
    /// Restricts the key to file names with this prefix; needs `bucket_id`.
    #[builder(default, setter(into, strip_option))]
    name_prefix: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateKeyRequest<'a> {
    account_id: &'a str,
    capabilities: Vec<String>,
    key_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_duration_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_prefix: Option<String>,
}

impl B2Api for CreateKey {
    type B2Response = CreateKeyResponse;
}

/// Builder type for [`CreateKey`] with all required fields set.
pub type CreateKeyBldr =
    CreateKeyBuilder<((B2Client,), (Vec<String>,), (String,), (), (), ())>;

impl ToB2Request for CreateKey {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = CreateKeyRequest {
            account_id: &session.account_id,
            capabilities: self.capabilities,
            key_name: self.key_name,
            valid_duration_in_seconds: self.valid_duration_in_seconds,
            bucket_id: self.bucket_id,
            name_prefix: self.name_prefix,
        };
        B2Request::api(self.client, session.clone(), "b2_create_key", &payload)
    }
}
