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
use crate::b2::types::{B2Request, Bucket};
use crate::{impl_from_b2response, impl_has_b2fields};
use bytes::Bytes;
use http::HeaderMap;
use once_cell::sync::OnceCell;

/// Response of
/// [list_buckets()](crate::b2::client::B2Client::list_buckets)
/// API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: B2Request,
    headers: HeaderMap,
    body: Bytes,
    cached_body: OnceCell<serde_json::Value>,
}

impl_has_b2fields!(ListBucketsResponse);
impl_from_b2response!(ListBucketsResponse);

impl ListBucketsResponse {
    /// Buckets matching the filters, in the order the server returned them.
    pub fn buckets(&self) -> Result<Vec<Bucket>, ValidationErr> {
        buckets_of(self)
    }
}

pub(crate) fn buckets_of<R: HasCachedBody>(resp: &R) -> Result<Vec<Bucket>, ValidationErr> {
    let buckets = resp
        .cached_body()?
        .get("buckets")
        .cloned()
        .ok_or(ValidationErr::MissingField("buckets"))?;
    Ok(serde_json::from_value(buckets)?)
}
