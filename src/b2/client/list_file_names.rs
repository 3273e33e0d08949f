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
use crate::b2::builders::{ListFileNames, ListFileNamesBldr};

impl B2Client {
    /// Creates a [`ListFileNames`] request builder.
    ///
    /// To execute the request, call [`ListFileNames::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing a
    /// [`ListFileNamesResponse`](crate::b2::response::ListFileNamesResponse).
    /// One call returns one page.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use backblaze::b2::client::B2Client;
    /// use backblaze::b2::response_traits::{HasFiles, HasNextFileName};
    /// use backblaze::b2::types::B2Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = B2Client::new().unwrap();
    ///     client.authorize_account("keyId", "key").build().send().await.unwrap();
    ///
    ///     let mut start: Option<String> = None;
    ///     loop {
    ///         let req = client.list_file_names("4a48fe8875c6214145260818").prefix("logs/");
    ///         let page = match start.take() {
    ///             Some(name) => req.start_file_name(name).build().send().await.unwrap(),
    ///             None => req.build().send().await.unwrap(),
    ///         };
    ///         for file in page.files().unwrap() {
    ///             println!("{} ({} bytes)", file.file_name, file.content_length);
    ///         }
    ///         match page.next_file_name().unwrap() {
    ///             Some(next) => start = Some(next),
    ///             None => break,
    ///         }
    ///     }
    /// }
    /// ```
    pub fn list_file_names<S: Into<String>>(&self, bucket_id: S) -> ListFileNamesBldr {
        ListFileNames::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
    }
}
