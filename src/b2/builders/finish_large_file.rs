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

//! Builder for the `b2_finish_large_file` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::FinishLargeFileResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_finish_large_file`](https://www.backblaze.com/apidocs/b2-finish-large-file) operation.
///
/// `part_sha1_array` holds the hex SHA-1 of every part, ordered by part
/// number starting at part 1.
#[derive(Clone, Debug, TypedBuilder)]
pub struct FinishLargeFile {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    file_id: String,
    #[builder(!default, setter(into))]
    part_sha1_array: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FinishLargeFileRequest {
    file_id: String,
    part_sha1_array: Vec<String>,
}

impl B2Api for FinishLargeFile {
    type B2Response = FinishLargeFileResponse;
}

/// Builder type for [`FinishLargeFile`] with all required fields set.
pub type FinishLargeFileBldr =
    FinishLargeFileBuilder<((B2Client,), (String,), (Vec<String>,))>;

impl ToB2Request for FinishLargeFile {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = FinishLargeFileRequest {
            file_id: self.file_id,
            part_sha1_array: self.part_sha1_array,
        };
        B2Request::api(self.client, session, "b2_finish_large_file", &payload)
    }
}
