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
use crate::b2::builders::{UploadPart, UploadPartBldr};
use bytes::Bytes;

impl B2Client {
    /// Creates an [`UploadPart`] request builder.
    ///
    /// `upload_url` and `upload_auth_token` come from a
    /// [`get_upload_part_url`](B2Client::get_upload_part_url) ticket. For
    /// the common sequential case use [`begin_large_file`](B2Client::begin_large_file),
    /// which tracks part numbers and checksums.
    pub fn upload_part<U, T, D>(
        &self,
        upload_url: U,
        upload_auth_token: T,
        part_number: u16,
        data: D,
    ) -> UploadPartBldr
    where
        U: Into<String>,
        T: Into<String>,
        D: Into<Bytes>,
    {
        UploadPart::builder()
            .client(self.clone())
            .upload_url(upload_url)
            .upload_auth_token(upload_auth_token)
            .part_number(part_number)
            .data(data)
    }
}
