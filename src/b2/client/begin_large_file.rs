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
use crate::b2::error::Error;
use crate::b2::large_file::LargeFileUpload;
use crate::b2::types::B2Api;

impl B2Client {
    /// Starts a large file with default content type and no file info, and
    /// returns a handle that tracks its parts.
    pub async fn begin_large_file<S: Into<String>, N: Into<String>>(
        &self,
        bucket_id: S,
        file_name: N,
    ) -> Result<LargeFileUpload, Error> {
        let started = self
            .start_large_file(bucket_id, file_name)
            .build()
            .send()
            .await?;
        Ok(LargeFileUpload::from_started(self.clone(), &started)?)
    }
}
