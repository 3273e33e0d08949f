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

use crate::b2::response_traits::{HasFileId, HasUploadTicket};
use crate::b2::types::B2Request;
use crate::{impl_from_b2response, impl_has_b2fields, impl_redacted_debug};
use bytes::Bytes;
use http::HeaderMap;
use once_cell::sync::OnceCell;

/// Response of [get_upload_part_url()](crate::b2::client::B2Client::get_upload_part_url).
///
/// An upload ticket for parts of one large file.
#[derive(Clone)]
pub struct GetUploadPartUrlResponse {
    request: B2Request,
    headers: HeaderMap,
    body: Bytes,
    cached_body: OnceCell<serde_json::Value>,
}

impl_has_b2fields!(GetUploadPartUrlResponse);
impl_redacted_debug!(GetUploadPartUrlResponse);
impl_from_b2response!(GetUploadPartUrlResponse);

impl HasUploadTicket for GetUploadPartUrlResponse {}
impl HasFileId for GetUploadPartUrlResponse {}
