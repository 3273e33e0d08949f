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

//! Builder for downloads by bucket and file name

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::header_constants::RANGE;
use crate::b2::multimap_ext::{Multimap, MultimapExt};
use crate::b2::progress::ProgressSink;
use crate::b2::response::DownloadFileResponse;
use crate::b2::types::{B2Api, B2Request, Endpoint, ResponseType, ToB2Request};
use http::Method;
use typed_builder::TypedBuilder;

/// Downloads the latest version of a file from
/// `{downloadUrl}/file/{bucket_name}/{file_name}`.
///
/// The file name is percent-encoded one path segment at a time. `range`
/// takes the value of an HTTP `Range` header without the unit, e.g.
/// `"0-1023"`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DownloadFileByName {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_name: String,
    #[builder(!default, setter(into))]
    file_name: String,
    #[builder(default)]
    response_type: ResponseType,
    #[builder(default, setter(into, strip_option))]
    range: Option<String>,
    #[builder(default, setter(strip_option))]
    progress: Option<ProgressSink>,
}

impl B2Api for DownloadFileByName {
    type B2Response = DownloadFileResponse;
}

/// Builder type for [`DownloadFileByName`] with all required fields set.
pub type DownloadFileByNameBldr =
    DownloadFileByNameBuilder<((B2Client,), (String,), (String,), (), (), ())>;

impl ToB2Request for DownloadFileByName {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;

        let mut headers = Multimap::new();
        headers.add_opt(RANGE, self.range.map(|r| format!("bytes={r}")));

        Ok(B2Request::builder()
            .client(self.client)
            .method(Method::GET)
            .endpoint(Endpoint::DownloadByName {
                bucket_name: self.bucket_name,
                file_name: self.file_name,
            })
            .session(session)
            .headers(headers)
            .progress(self.progress)
            .response_type(self.response_type)
            .build())
    }
}
