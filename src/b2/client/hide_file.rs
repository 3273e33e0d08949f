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

use super::B2Client;
use crate::b2::builders::{HideFile, HideFileBldr};

impl B2Client {
    /// Creates a [`HideFile`] request builder.
    ///
    /// To execute the request, call [`HideFile::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing a [`HideFileResponse`](crate::b2::response::HideFileResponse).
    pub fn hide_file<S: Into<String>, N: Into<String>>(
        &self,
        bucket_id: S,
        file_name: N,
    ) -> HideFileBldr {
        HideFile::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
            .file_name(file_name)
    }
}
