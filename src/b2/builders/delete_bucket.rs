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

//! Builder for the `b2_delete_bucket` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::DeleteBucketResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_delete_bucket`](https://www.backblaze.com/apidocs/b2-delete-bucket) operation.
///
/// The bucket must be empty.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteBucket {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteBucketRequest<'a> {
    account_id: &'a str,
    bucket_id: String,
}

impl B2Api for DeleteBucket {
    type B2Response = DeleteBucketResponse;
}

/// Builder type for [`DeleteBucket`] with all required fields set.
pub type DeleteBucketBldr = DeleteBucketBuilder<((B2Client,), (String,))>;

impl ToB2Request for DeleteBucket {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = DeleteBucketRequest {
            account_id: &session.account_id,
            bucket_id: self.bucket_id,
        };
        B2Request::api(self.client, session.clone(), "b2_delete_bucket", &payload)
    }
}
