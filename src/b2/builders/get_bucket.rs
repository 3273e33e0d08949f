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

//! Builder for a single-bucket lookup through `b2_list_buckets`

use crate::b2::builders::list_buckets::ListBucketsRequest;
use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::GetBucketResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use typed_builder::TypedBuilder;

/// Looks up one bucket by name or id.
///
/// B2 has no dedicated call for this; the request is a filtered
/// `b2_list_buckets` and the response exposes the matching bucket, if any.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucket {
    #[builder(!default)]
    client: B2Client,
    #[builder(default, setter(into, strip_option))]
    bucket_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    bucket_name: Option<String>,
}

impl B2Api for GetBucket {
    type B2Response = GetBucketResponse;
}

/// Builder type for [`GetBucket`] with all required fields set.
pub type GetBucketBldr = GetBucketBuilder<((B2Client,), (), ())>;

impl ToB2Request for GetBucket {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = ListBucketsRequest {
            account_id: &session.account_id,
            bucket_id: self.bucket_id,
            bucket_name: self.bucket_name,
            bucket_types: Vec::new(),
        };
        B2Request::api(self.client, session.clone(), "b2_list_buckets", &payload)
    }
}

/// Builder type for [`GetBucket`] with the bucket id set.
pub type GetBucketByIdBldr = GetBucketBuilder<((B2Client,), (Option<String>,), ())>;
