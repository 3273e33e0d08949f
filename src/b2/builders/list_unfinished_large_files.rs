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

//! Builder for the `b2_list_unfinished_large_files` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::ListUnfinishedLargeFilesResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_list_unfinished_large_files`](https://www.backblaze.com/apidocs/b2-list-unfinished-large-files) operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListUnfinishedLargeFiles {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(default, setter(into, strip_option))]
    name_prefix: Option<String>,
    #[builder(default, setter(into, strip_option))]
    start_file_id: Option<String>,
    #[builder(default, setter(strip_option))]
    max_file_count: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListUnfinishedLargeFilesRequest {
    bucket_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_file_count: Option<u32>,
}

impl B2Api for ListUnfinishedLargeFiles {
    type B2Response = ListUnfinishedLargeFilesResponse;
}

/// Builder type for [`ListUnfinishedLargeFiles`] with all required fields set.
pub type ListUnfinishedLargeFilesBldr =
    ListUnfinishedLargeFilesBuilder<((B2Client,), (String,), (), (), ())>;

impl ToB2Request for ListUnfinishedLargeFiles {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = ListUnfinishedLargeFilesRequest {
            bucket_id: self.bucket_id,
            name_prefix: self.name_prefix,
            start_file_id: self.start_file_id,
            max_file_count: self.max_file_count,
        };
        B2Request::api(
            self.client,
            session,
            "b2_list_unfinished_large_files",
            &payload,
        )
    }
}
