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

//! Builder for the `b2_hide_file` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::HideFileResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_hide_file`](https://www.backblaze.com/apidocs/b2-hide-file) operation.
///
/// Uploads a hide marker so the name no longer shows up in
/// `b2_list_file_names`; earlier versions are kept.
#[derive(Clone, Debug, TypedBuilder)]
pub struct HideFile {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    file_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HideFileRequest {
    bucket_id: String,
    file_name: String,
}

impl B2Api for HideFile {
    type B2Response = HideFileResponse;
}

/// Builder type for [`HideFile`] with all required fields set.
pub type HideFileBldr = HideFileBuilder<((B2Client,), (String,), (String,))>;

impl ToB2Request for HideFile {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = HideFileRequest {
            bucket_id: self.bucket_id,
            file_name: self.file_name,
        };
        B2Request::api(self.client, session, "b2_hide_file", &payload)
    }
}
