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

//! Builder for the `b2_upload_part` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::header_constants::*;
use crate::b2::multimap_ext::{Multimap, MultimapExt};
use crate::b2::progress::ProgressSink;
use crate::b2::response::UploadPartResponse;
use crate::b2::types::{B2Api, B2Request, Endpoint, ToB2Request};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_upload_part`](https://www.backblaze.com/apidocs/b2-upload-part) operation.
///
/// Sent to the URL of a ticket from
/// [`get_upload_part_url`](crate::b2::client::B2Client::get_upload_part_url).
/// The SHA-1 of `data` is always computed here and sent as
/// `X-Bz-Content-Sha1`. Part numbers run from 1 to 10000; the range is
/// checked by the server.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UploadPart {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    upload_url: String,
    #[builder(!default, setter(into))]
    upload_auth_token: String,
    #[builder(!default)]
    part_number: u16,
    #[builder(!default, setter(into))]
    data: Bytes,
    #[builder(default, setter(strip_option))]
    progress: Option<ProgressSink>,
}

impl B2Api for UploadPart {
    type B2Response = UploadPartResponse;
}

/// Builder type for [`UploadPart`] with all required fields set.
pub type UploadPartBldr =
    UploadPartBuilder<((B2Client,), (String,), (String,), (u16,), (Bytes,), ())>;

impl ToB2Request for UploadPart {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let mut headers = Multimap::new();
        headers.add(AUTHORIZATION, self.upload_auth_token);
        headers.add(X_BZ_PART_NUMBER, self.part_number.to_string());
        headers.add(CONTENT_LENGTH, self.data.len().to_string());

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

    #[test]
    fn test_part_headers() {
        let client = B2Client::new().unwrap();
        let req = client
            .upload_part("https://pod/part", "part-token", 3, Bytes::from_static(b"0123456789"))
            .build()
            .to_b2request()
            .unwrap();

        let h = &req.headers;
        assert_eq!(h.get(AUTHORIZATION).map(String::as_str), Some("part-token"));
        assert_eq!(h.get(X_BZ_PART_NUMBER).map(String::as_str), Some("3"));
        assert_eq!(h.get(CONTENT_LENGTH).map(String::as_str), Some("10"));
        assert!(req.checksum_body);
        assert!(req.session.is_none());
    }
}
