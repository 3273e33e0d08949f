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

//! Builder for the `b2_get_upload_url` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::GetUploadUrlResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_get_upload_url`](https://www.backblaze.com/apidocs/b2-get-upload-url) operation.
///
/// The returned ticket is good for one upload at a time; acquire one ticket
/// per concurrent uploader.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUploadUrl {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetUploadUrlRequest {
    bucket_id: String,
}

impl B2Api for GetUploadUrl {
    type B2Response = GetUploadUrlResponse;
}

/// Builder type for [`GetUploadUrl`] with all required fields set.
pub type GetUploadUrlBldr = GetUploadUrlBuilder<((B2Client,), (String,))>;

impl ToB2Request for GetUploadUrl {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = GetUploadUrlRequest {
            bucket_id: self.bucket_id,
        };
        B2Request::api(self.client, session, "b2_get_upload_url", &payload)
    }
}
