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

//! Builder for the `b2_list_keys` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::ListKeysResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_list_keys`](https://www.backblaze.com/apidocs/b2-list-keys) operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListKeys {
    #[builder(!default)]
    client: B2Client,
    #[builder(default, setter(strip_option))]
    max_key_count: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    start_application_key_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListKeysRequest<'a> {
    account_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_key_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_application_key_id: Option<String>,
}

impl B2Api for ListKeys {
    type B2Response = ListKeysResponse;
}

/// Builder type for [`ListKeys`] with all required fields set.
pub type ListKeysBldr = ListKeysBuilder<((B2Client,), (), ())>;

impl ToB2Request for ListKeys {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = ListKeysRequest {
            account_id: &session.account_id,
            max_key_count: self.max_key_count,
            start_application_key_id: self.start_application_key_id,
        };
        B2Request::api(self.client, session.clone(), "b2_list_keys", &payload)
    }
}
