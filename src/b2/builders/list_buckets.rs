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

//! Builder for the `b2_list_buckets` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::ListBucketsResponse;
use crate::b2::types::{B2Api, B2Request, BucketType, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_list_buckets`](https://www.backblaze.com/apidocs/b2-list-buckets) operation.
///
/// Without filters all buckets of the account are listed. A key restricted
/// to one bucket must filter by that bucket's id or name.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)]
    client: B2Client,
    #[builder(default, setter(into, strip_option))]
    bucket_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    bucket_name: Option<String>,
    #[builder(default, setter(into))]
    bucket_types: Vec<BucketType>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListBucketsRequest<'a> {
    pub(crate) account_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bucket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) bucket_types: Vec<BucketType>,
}

impl B2Api for ListBuckets {
    type B2Response = ListBucketsResponse;
}

/// Builder type for [`ListBuckets`] with all required fields set.
pub type ListBucketsBldr = ListBucketsBuilder<((B2Client,), (), (), ())>;

impl ToB2Request for ListBuckets {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = ListBucketsRequest {
            account_id: &session.account_id,
            bucket_id: self.bucket_id,
            bucket_name: self.bucket_name,
            bucket_types: self.bucket_types,
        };
        B2Request::api(self.client, session.clone(), "b2_list_buckets", &payload)
    }
}
