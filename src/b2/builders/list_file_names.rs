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

//! Builder for the `b2_list_file_names` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::ListFileNamesResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_list_file_names`](https://www.backblaze.com/apidocs/b2-list-file-names) operation.
///
/// Returns one page. Pass the response's `next_file_name` as
/// `start_file_name` to get the next one.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListFileNames {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(default, setter(into, strip_option))]
    start_file_name: Option<String>,
    /// Server default is 100, maximum 10000.
    #[builder(default, setter(strip_option))]
    max_file_count: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    #[builder(default, setter(into, strip_option))]
    delimiter: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListFileNamesRequest {
    bucket_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_file_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delimiter: Option<String>,
}

impl B2Api for ListFileNames {
    type B2Response = ListFileNamesResponse;
}

/// Builder type for [`ListFileNames`] with all required fields set.
pub type ListFileNamesBldr = ListFileNamesBuilder<((B2Client,), (String,), (), (), (), ())>;

impl ToB2Request for ListFileNames {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = ListFileNamesRequest {
            bucket_id: self.bucket_id,
            start_file_name: self.start_file_name,
            max_file_count: self.max_file_count,
            prefix: self.prefix,
            delimiter: self.delimiter,
        };
        B2Request::api(self.client, session, "b2_list_file_names", &payload)
    }
}
