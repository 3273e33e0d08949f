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

use crate::b2::error::{Error, ValidationErr};
use crate::b2::header_constants::*;
use crate::b2::progress::track_download;
use crate::b2::types::{B2Request, FromB2Response, ResponseType};
use bytes::{Bytes, BytesMut};
use futures_util::{Stream, TryStreamExt};
use http::HeaderMap;
use percent_encoding::percent_decode_str;
use std::fmt;
use std::mem;
use std::pin::Pin;

/// Boxed byte stream of a download body.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Download body, decoded according to the requested [`ResponseType`].
pub enum DownloadContent {
    Bytes(Bytes),
    Json(serde_json::Value),
    Text(String),
    /// Not yet read from the connection.
    Stream(ByteStream),
}

impl fmt::Debug for DownloadContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadContent::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            DownloadContent::Json(v) => f.debug_tuple("Json").field(v).finish(),
            DownloadContent::Text(s) => f.debug_tuple("Text").field(&s.len()).finish(),
            DownloadContent::Stream(_) => f.write_str("Stream"),
        }
    }
}

/// Response of
/// [download_file_by_name()](crate::b2::client::B2Client::download_file_by_name)
/// and
/// [download_file_by_id()](crate::b2::client::B2Client::download_file_by_id)
/// APIs
#[derive(Debug)]
pub struct DownloadFileResponse {
    request: B2Request,
    headers: HeaderMap,
    content: DownloadContent,
}

impl DownloadFileResponse {
    /// The request that was sent.
    pub fn request(&self) -> &B2Request {
        &self.request
    }

    /// Response headers, including `X-Bz-*` file metadata.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content(&self) -> &DownloadContent {
        &self.content
    }

    pub fn into_content(self) -> DownloadContent {
        self.content
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_length(&self) -> Option<u64> {
        self.header(CONTENT_LENGTH).and_then(|v| v.parse().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    pub fn file_id(&self) -> Option<&str> {
        self.header(X_BZ_FILE_ID)
    }

    /// File name, percent-decoded.
    pub fn file_name(&self) -> Option<String> {
        self.header(X_BZ_FILE_NAME)
            .map(|v| percent_decode_str(v).decode_utf8_lossy().into_owned())
    }

    /// Hex SHA-1 of the whole file. Large files report `none` unless the
    /// uploader stored `large_file_sha1` in the file info.
    pub fn content_sha1(&self) -> Option<&str> {
        self.header(X_BZ_CONTENT_SHA1)
    }
}

#[async_trait::async_trait]
impl FromB2Response for DownloadFileResponse {
    async fn from_b2response(
        request: B2Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers = mem::take(resp.headers_mut());
        let total = resp.content_length();
        let stream = track_download(resp.bytes_stream(), request.progress.clone(), total);

        let content = match request.response_type {
            ResponseType::Stream => DownloadContent::Stream(Box::pin(stream)),
            mode => {
                let bytes = stream
                    .try_fold(BytesMut::new(), |mut acc, chunk| async move {
                        acc.extend_from_slice(&chunk);
                        Ok(acc)
                    })
                    .await
                    .map_err(ValidationErr::BodyRead)?
                    .freeze();
                match mode {
                    ResponseType::Json => DownloadContent::Json(
                        serde_json::from_slice(&bytes).map_err(ValidationErr::from)?,
                    ),
                    ResponseType::Text => DownloadContent::Text(
                        String::from_utf8(bytes.to_vec()).map_err(ValidationErr::from)?,
                    ),
                    _ => DownloadContent::Bytes(bytes),
                }
            }
        };

        Ok(Self {
            request,
            headers,
            content,
        })
    }
}
