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

//! Builder for the `b2_list_parts` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::ListPartsResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_list_parts`](https://www.backblaze.com/apidocs/b2-list-parts) operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListParts {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    file_id: String,
    #[builder(default, setter(strip_option))]
    start_part_number: Option<u16>,
    #[builder(default, setter(strip_option))]
    max_part_count: Option<u16>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListPartsRequest {
    file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_part_number: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_part_count: Option<u16>,
}

impl B2Api for ListParts {
    type B2Response = ListPartsResponse;
}

/// Builder type for [`ListParts`] with all required fields set.
pub type ListPartsBldr = ListPartsBuilder<((B2Client,), (String,), (), ())>;

impl ToB2Request for ListParts {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = ListPartsRequest {
            file_id: self.file_id,
            start_part_number: self.start_part_number,
            max_part_count: self.max_part_count,
        };
        B2Request::api(self.client, session, "b2_list_parts", &payload)
    }
}
