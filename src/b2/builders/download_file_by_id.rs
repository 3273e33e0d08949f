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

//! Builder for the `b2_download_file_by_id` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::header_constants::{FILE_ID, RANGE};
use crate::b2::multimap_ext::{Multimap, MultimapExt};
use crate::b2::progress::ProgressSink;
use crate::b2::response::DownloadFileResponse;
use crate::b2::types::{B2Api, B2Request, Endpoint, ResponseType, ToB2Request};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_download_file_by_id`](https://www.backblaze.com/apidocs/b2-download-file-by-id) operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DownloadFileById {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    file_id: String,
    #[builder(default)]
    response_type: ResponseType,
    /// Byte range without the unit, e.g. `"0-1023"`.
    #[builder(default, setter(into, strip_option))]
    range: Option<String>,
    #[builder(default, setter(strip_option))]
    progress: Option<ProgressSink>,
}

impl B2Api for DownloadFileById {
    type B2Response = DownloadFileResponse;
}

/// Builder type for [`DownloadFileById`] with all required fields set.
pub type DownloadFileByIdBldr = DownloadFileByIdBuilder<((B2Client,), (String,), (), (), ())>;

impl ToB2Request for DownloadFileById {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;

        let mut query_params = Multimap::new();
        query_params.add(FILE_ID, self.file_id);

        let mut headers = Multimap::new();
        headers.add_opt(RANGE, self.range.map(|r| format!("bytes={r}")));

        Ok(B2Request::builder()
            .client(self.client)
            .method(Method::GET)
            .endpoint(Endpoint::DownloadById)
            .session(session)
            .query_params(query_params)
            .headers(headers)
            .progress(self.progress)
            .response_type(self.response_type)
            .build())
    }
}
