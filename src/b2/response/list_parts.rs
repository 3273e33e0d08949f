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

use crate::b2::error::ValidationErr;
use crate::b2::response_traits::HasCachedBody;
use crate::b2::types::{B2Request, PartRecord};
use crate::{impl_from_b2response, impl_has_b2fields};
use bytes::Bytes;
use http::HeaderMap;
use once_cell::sync::OnceCell;

/// Response of
/// [list_parts()](crate::b2::client::B2Client::list_parts)
/// API
#[derive(Clone, Debug)]
pub struct ListPartsResponse {
    request: B2Request,
    headers: HeaderMap,
    body: Bytes,
    cached_body: OnceCell<serde_json::Value>,
}

impl_has_b2fields!(ListPartsResponse);
impl_from_b2response!(ListPartsResponse);

impl ListPartsResponse {
    pub fn parts(&self) -> Result<Vec<PartRecord>, ValidationErr> {
        let parts = self
            .cached_body()?
            .get("parts")
            .cloned()
            .ok_or(ValidationErr::MissingField("parts"))?;
        Ok(serde_json::from_value(parts)?)
    }

    /// Value for `start_part_number` of the next page; `None` on the last page.
    pub fn next_part_number(&self) -> Result<Option<u16>, ValidationErr> {
        Ok(self
            .cached_body()?
            .get("nextPartNumber")
            .and_then(|v| v.as_u64())
            .and_then(|n| u16::try_from(n).ok()))
    }
}
