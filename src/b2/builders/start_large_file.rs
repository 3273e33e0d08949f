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

//! Builder for the `b2_start_large_file` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::header_constants::CONTENT_TYPE_AUTO;
use crate::b2::response::StartLargeFileResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_start_large_file`](https://www.backblaze.com/apidocs/b2-start-large-file) operation.
///
/// `content_type` defaults to `b2/x-auto`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct StartLargeFile {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    file_name: String,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
    #[builder(default, setter(into))]
    file_info: HashMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartLargeFileRequest {
    bucket_id: String,
    file_name: String,
    content_type: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    file_info: HashMap<String, String>,
}

impl B2Api for StartLargeFile {
    type B2Response = StartLargeFileResponse;
}

/// Builder type for [`StartLargeFile`] with all required fields set.
pub type StartLargeFileBldr =
    StartLargeFileBuilder<((B2Client,), (String,), (String,), (), ())>;

impl ToB2Request for StartLargeFile {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = StartLargeFileRequest {
            bucket_id: self.bucket_id,
            file_name: self.file_name,
            content_type: self
                .content_type
                .unwrap_or_else(|| CONTENT_TYPE_AUTO.to_string()),
            file_info: self.file_info,
        };
        B2Request::api(self.client, session, "b2_start_large_file", &payload)
    }
}
