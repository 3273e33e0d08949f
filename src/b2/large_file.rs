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

//! Tracked multi-part upload of one large file.
//!
//! [`LargeFileUpload`] wraps the `b2_start_large_file` /
//! `b2_upload_part` / `b2_finish_large_file` sequence. It numbers parts,
//! remembers each part's SHA-1 and submits them in part order on
//! [`finish`](LargeFileUpload::finish). `finish` and
//! [`cancel`](LargeFileUpload::cancel) consume the handle.
//!
//! ```no_run
//! use backblaze::b2::client::B2Client;
//! use backblaze::b2::types::B2Api;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = B2Client::new().unwrap();
//!     client.authorize_account("keyId", "key").build().send().await.unwrap();
//!
//!     let mut upload = client
//!         .begin_large_file("4a48fe8875c6214145260818", "backups/disk.img")
//!         .await
//!         .unwrap();
//!     for chunk in [vec![0_u8; 5_000_000], vec![1_u8; 1_000]] {
//!         upload.upload_part(chunk).await.unwrap();
//!     }
//!     upload.finish().await.unwrap();
//! }
//! ```

use crate::b2::client::B2Client;
use crate::b2::error::{Error, ValidationErr};
use crate::b2::progress::ProgressSink;
use crate::b2::response::{
    CancelLargeFileResponse, FinishLargeFileResponse, StartLargeFileResponse, UploadPartResponse,
};
use crate::b2::response_traits::{HasFileId, HasFileName, HasPartRecord, HasUploadTicket};
use crate::b2::types::B2Api;
use bytes::Bytes;
use std::collections::BTreeMap;

/// A started, unfinished large file.
#[derive(Debug)]
pub struct LargeFileUpload {
    client: B2Client,
    file_id: String,
    file_name: String,
    /// part number -> hex SHA-1
    parts: BTreeMap<u16, String>,
}

impl LargeFileUpload {
    /// Adopts a large file started with
    /// [`start_large_file`](B2Client::start_large_file), e.g. to set a
    /// content type or file info.
    pub fn from_started(
        client: B2Client,
        started: &StartLargeFileResponse,
    ) -> Result<Self, ValidationErr> {
        Ok(Self {
            client,
            file_id: started.file_id()?,
            file_name: started.file_name()?,
            parts: BTreeMap::new(),
        })
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Number of parts recorded so far.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Part number the next [`upload_part`](Self::upload_part) will use.
    pub fn next_part_number(&self) -> u16 {
        self.parts
            .keys()
            .next_back()
            .map_or(1, |n| n.saturating_add(1))
    }

    /// Uploads `data` as the next part and records its checksum.
    pub async fn upload_part<D: Into<Bytes>>(
        &mut self,
        data: D,
    ) -> Result<UploadPartResponse, Error> {
        self.send_part(data.into(), None).await
    }

    /// Like [`upload_part`](Self::upload_part), reporting transfer progress.
    pub async fn upload_part_with_progress<D: Into<Bytes>>(
        &mut self,
        data: D,
        progress: ProgressSink,
    ) -> Result<UploadPartResponse, Error> {
        self.send_part(data.into(), Some(progress)).await
    }

    async fn send_part(
        &mut self,
        data: Bytes,
        progress: Option<ProgressSink>,
    ) -> Result<UploadPartResponse, Error> {
        let ticket = self
            .client
            .get_upload_part_url(&self.file_id)
            .build()
            .send()
            .await?
            .upload_ticket()?;

        let part_number = self.next_part_number();
        let req = self.client.upload_part(
            ticket.upload_url,
            ticket.authorization_token,
            part_number,
            data,
        );
        let resp = match progress {
            Some(p) => req.progress(p).build().send().await?,
            None => req.build().send().await?,
        };

        self.parts.insert(part_number, resp.content_sha1()?);
        log::debug!(
            "uploaded part {part_number} of large file {}",
            self.file_id
        );
        Ok(resp)
    }

    /// Records a part uploaded through the low-level
    /// [`upload_part`](B2Client::upload_part) builder, e.g. from parallel
    /// workers. Returns the checksum previously recorded for that part.
    pub fn add_part<S: Into<String>>(&mut self, part_number: u16, sha1: S) -> Option<String> {
        self.parts.insert(part_number, sha1.into())
    }

    /// Completes the file from the recorded parts, ordered by part number.
    pub async fn finish(self) -> Result<FinishLargeFileResponse, Error> {
        let part_sha1_array: Vec<String> = self.parts.into_values().collect();
        log::debug!(
            "finishing large file {} with {} parts",
            self.file_id,
            part_sha1_array.len()
        );
        self.client
            .finish_large_file(self.file_id, part_sha1_array)
            .build()
            .send()
            .await
    }

    /// Discards the file and all uploaded parts.
    pub async fn cancel(self) -> Result<CancelLargeFileResponse, Error> {
        self.client
            .cancel_large_file(self.file_id)
            .build()
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> LargeFileUpload {
        LargeFileUpload {
            client: B2Client::new().unwrap(),
            file_id: "4_zlarge".into(),
            file_name: "big.bin".into(),
            parts: BTreeMap::new(),
        }
    }

    #[test]
    fn test_next_part_follows_highest_recorded() {
        let mut upload = handle();
        assert_eq!(upload.next_part_number(), 1);

        upload.add_part(1, "a");
        upload.add_part(5, "e");
        assert_eq!(upload.next_part_number(), 6);
        assert_eq!(upload.part_count(), 2);
    }

    #[test]
    fn test_checksums_ordered_by_part_number() {
        let mut upload = handle();
        upload.add_part(3, "c");
        upload.add_part(1, "a");
        upload.add_part(2, "b");

        let ordered: Vec<&str> = upload.parts.values().map(String::as_str).collect();
        assert_eq!(ordered, vec!["a", "b", "c"]);
    }
}
