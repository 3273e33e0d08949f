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
use crate::b2::builders::{UploadFile, UploadFileBldr};
use bytes::Bytes;

impl B2Client {
    /// Creates an [`UploadFile`] request builder.
    ///
    /// `upload_url` and `upload_auth_token` come from a
    /// [`get_upload_url`](B2Client::get_upload_url) ticket. To execute the
    /// request, call [`UploadFile::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing an
    /// [`UploadFileResponse`](crate::b2::response::UploadFileResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use backblaze::b2::client::B2Client;
    /// use backblaze::b2::response_traits::{HasFileId, HasUploadTicket};
    /// use backblaze::b2::types::B2Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = B2Client::new().unwrap();
    ///     client.authorize_account("keyId", "key").build().send().await.unwrap();
    ///
    ///     let ticket = client
    ///         .get_upload_url("4a48fe8875c6214145260818")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap()
    ///         .upload_ticket()
    ///         .unwrap();
    ///
    ///     let resp = client
    ///         .upload_file(
    ///             ticket.upload_url,
    ///             ticket.authorization_token,
    ///             "notes/hello world.txt",
    ///             "hello",
    ///         )
    ///         .mime("text/plain")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("stored as {}", resp.file_id().unwrap());
    /// }
    /// ```
    pub fn upload_file<U, T, N, D>(
        &self,
        upload_url: U,
        upload_auth_token: T,
        file_name: N,
        data: D,
    ) -> UploadFileBldr
    where
        U: Into<String>,
        T: Into<String>,
        N: Into<String>,
        D: Into<Bytes>,
    {
        UploadFile::builder()
            .client(self.clone())
            .upload_url(upload_url)
            .upload_auth_token(upload_auth_token)
            .file_name(file_name)
            .data(data)
    }
}
