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

//! Builder for the `b2_get_download_authorization` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::GetDownloadAuthorizationResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_get_download_authorization`](https://www.backblaze.com/apidocs/b2-get-download-authorization) operation.
///
/// `valid_duration_in_seconds` is sent as given. The server accepts
/// 1 to 604800 (one week) and rejects anything else.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetDownloadAuthorization {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    file_name_prefix: String,
    #[builder(!default)]
    valid_duration_in_seconds: u64,
    /// `Content-Disposition` the download must be served with.
    #[builder(default, setter(into, strip_option))]
    b2_content_disposition: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetDownloadAuthorizationRequest {
    bucket_id: String,
    file_name_prefix: String,
    valid_duration_in_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    b2_content_disposition: Option<String>,
}

impl B2Api for GetDownloadAuthorization {
    type B2Response = GetDownloadAuthorizationResponse;
}

/// Builder type for [`GetDownloadAuthorization`] with all required fields set.
pub type GetDownloadAuthorizationBldr =
    GetDownloadAuthorizationBuilder<((B2Client,), (String,), (String,), (u64,), ())>;

impl ToB2Request for GetDownloadAuthorization {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = GetDownloadAuthorizationRequest {
            bucket_id: self.bucket_id,
            file_name_prefix: self.file_name_prefix,
            valid_duration_in_seconds: self.valid_duration_in_seconds,
            b2_content_disposition: self.b2_content_disposition,
        };
        B2Request::api(
            self.client,
            session,
            "b2_get_download_authorization",
            &payload,
        )
    }
}
