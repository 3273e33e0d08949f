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
use crate::b2::builders::{DownloadFileByName, DownloadFileByNameBldr};

impl B2Client {
    /// Creates a [`DownloadFileByName`] request builder.
    ///
    /// To execute the request, call [`DownloadFileByName::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing a
    /// [`DownloadFileResponse`](crate::b2::response::DownloadFileResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use backblaze::b2::client::B2Client;
    /// use backblaze::b2::response::DownloadContent;
    /// use backblaze::b2::types::{B2Api, ResponseType};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = B2Client::new().unwrap();
    ///     client.authorize_account("keyId", "key").build().send().await.unwrap();
    ///
    ///     let resp = client
    ///         .download_file_by_name("my-bucket", "notes/hello world.txt")
    ///         .response_type(ResponseType::Text)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     if let DownloadContent::Text(text) = resp.content() {
    ///         println!("{text}");
    ///     }
    /// }
    /// ```
    pub fn download_file_by_name<S: Into<String>, N: Into<String>>(
        &self,
        bucket_name: S,
        file_name: N,
    ) -> DownloadFileByNameBldr {
        DownloadFileByName::builder()
            .client(self.clone())
            .bucket_name(bucket_name)
            .file_name(file_name)
    }
}
