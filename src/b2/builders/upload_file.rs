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

//! Builder for the `b2_upload_file` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::header_constants::*;
use crate::b2::multimap_ext::{Multimap, MultimapExt};
use crate::b2::progress::ProgressSink;
use crate::b2::response::UploadFileResponse;
use crate::b2::types::{B2Api, B2Request, Endpoint, ToB2Request};
use crate::b2::utils::{encode_file_name, url_encode};
use bytes::Bytes;
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_upload_file`](https://www.backblaze.com/apidocs/b2-upload-file) operation.
///
/// The payload is sent to the URL of an upload ticket obtained from
/// [`get_upload_url`](crate::b2::client::B2Client::get_upload_url), with the
/// ticket's token; the session token is not used. Redirects are never followed.
///
/// Defaults: `mime` is `b2/x-auto` (the server derives the type from the
/// file name) and `hash` is the hex SHA-1 of `data`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UploadFile {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    upload_url: String,
    #[builder(!default, setter(into))]
    upload_auth_token: String,
    #[builder(!default, setter(into))]
    file_name: String,
    #[builder(!default, setter(into))]
    data: Bytes,
    #[builder(default, setter(into, strip_option))]
    mime: Option<String>,
    /// Hex SHA-1 of the payload, if already known.
    #[builder(default, setter(into, strip_option))]
    hash: Option<String>,
    /// Custom file information, sent as `X-Bz-Info-*` headers.
    #[builder(default, setter(into))]
    info: HashMap<String, String>,
    #[builder(default, setter(strip_option))]
    progress: Option<ProgressSink>,
}

impl B2Api for UploadFile {
    type B2Response = UploadFileResponse;
}

/// Builder type for [`UploadFile`] with all required fields set.
pub type UploadFileBldr = UploadFileBuilder<(
    (B2Client,),
    (String,),
    (String,),
    (String,),
    (Bytes,),
    (),
    (),
    (),
    (),
)>;

impl ToB2Request for UploadFile {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let mut headers = Multimap::new();
        headers.add(AUTHORIZATION, self.upload_auth_token);
        headers.add(X_BZ_FILE_NAME, encode_file_name(&self.file_name));
        headers.add(
            CONTENT_TYPE,
            self.mime.unwrap_or_else(|| CONTENT_TYPE_AUTO.to_string()),
        );
        headers.add(CONTENT_LENGTH, self.data.len().to_string());
        headers.add_opt(X_BZ_CONTENT_SHA1, self.hash);
        for (key, value) in &self.info {
            headers.add(format!("{X_BZ_INFO_PREFIX}{key}"), url_encode(value));
        }

        Ok(B2Request::builder()
            .client(self.client)
            .method(Method::POST)
            .endpoint(Endpoint::Upload(self.upload_url))
            .headers(headers)
            .body(self.data)
            .progress(self.progress)
            .checksum_body(true)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(client: &B2Client) -> UploadFileBldr {
        client.upload_file(
            "https://pod-000-1000-00.backblaze.com/b2api/v2/b2_upload_file/bkt/c000",
            "upload-token",
            "photos/2024/a b.jpg",
            Bytes::from_static(b"hello"),
        )
    }

    #[test]
    fn test_upload_headers_and_defaults() {
        let client = B2Client::new().unwrap();
        let req = upload(&client).build().to_b2request().unwrap();

        assert_eq!(
            req.endpoint,
            Endpoint::Upload(
                "https://pod-000-1000-00.backblaze.com/b2api/v2/b2_upload_file/bkt/c000".into()
            )
        );
        assert!(req.session.is_none());
        assert!(req.checksum_body);
        let h = &req.headers;
        assert_eq!(h.get(AUTHORIZATION).map(String::as_str), Some("upload-token"));
        assert_eq!(
            h.get(X_BZ_FILE_NAME).map(String::as_str),
            Some("photos/2024/a%20b.jpg")
        );
        assert_eq!(h.get(CONTENT_TYPE).map(String::as_str), Some(CONTENT_TYPE_AUTO));
        assert_eq!(h.get(CONTENT_LENGTH).map(String::as_str), Some("5"));
        assert!(!h.contains_key(X_BZ_CONTENT_SHA1));

        let dbg = format!("{req:?}");
        assert!(!dbg.contains("upload-token"));
        assert!(dbg.contains("[REDACTED]"));
        assert!(dbg.contains("body_len: Some(5)"));
    }

    #[test]
    fn test_upload_explicit_mime_hash_and_info() {
        let client = B2Client::new().unwrap();
        let mut info = HashMap::new();
        info.insert("author".to_string(), "Jane Doe".to_string());

        let req = upload(&client)
            .mime("image/jpeg")
            .hash("abc123")
            .info(info)
            .build()
            .to_b2request()
            .unwrap();

        let h = &req.headers;
        assert_eq!(h.get(CONTENT_TYPE).map(String::as_str), Some("image/jpeg"));
        assert_eq!(h.get(X_BZ_CONTENT_SHA1).map(String::as_str), Some("abc123"));
        assert_eq!(
            h.get("X-Bz-Info-author").map(String::as_str),
            Some("Jane%20Doe")
        );
    }
}
