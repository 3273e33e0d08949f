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

//! Builder for the `b2_delete_file_version` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::DeleteFileVersionResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_delete_file_version`](https://www.backblaze.com/apidocs/b2-delete-file-version) operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteFileVersion {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    file_id: String,
    #[builder(!default, setter(into))]
    file_name: String,
    /// Delete a version under governance-mode object lock. Requires the
    /// `bypassGovernance` capability.
    #[builder(default)]
    bypass_governance: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteFileVersionRequest {
    file_name: String,
    file_id: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    bypass_governance: bool,
}

impl B2Api for DeleteFileVersion {
    type B2Response = DeleteFileVersionResponse;
}

/// Builder type for [`DeleteFileVersion`] with all required fields set.
pub type DeleteFileVersionBldr =
    DeleteFileVersionBuilder<((B2Client,), (String,), (String,), ())>;

impl ToB2Request for DeleteFileVersion {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = DeleteFileVersionRequest {
            file_name: self.file_name,
            file_id: self.file_id,
            bypass_governance: self.bypass_governance,
        };
        B2Request::api(self.client, session, "b2_delete_file_version", &payload)
    }
}
