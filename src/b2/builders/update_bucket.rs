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

//! Builder for the `b2_update_bucket` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::UpdateBucketResponse;
use crate::b2::types::{B2Api, B2Request, BucketType, ToB2Request};
use serde::Serialize;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_update_bucket`](https://www.backblaze.com/apidocs/b2-update-bucket) operation.
///
/// Only the fields that are set are changed. `if_revision_is` makes the
/// update conditional on the bucket's current revision.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateBucket {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(default, setter(strip_option))]
    bucket_type: Option<BucketType>,
    #[builder(default, setter(into, strip_option))]
    bucket_info: Option<HashMap<String, String>>,
    #[builder(default, setter(into, strip_option))]
    cors_rules: Option<Vec<serde_json::Value>>,
    #[builder(default, setter(into, strip_option))]
    lifecycle_rules: Option<Vec<serde_json::Value>>,
    #[builder(default, setter(strip_option))]
    if_revision_is: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBucketRequest<'a> {
    account_id: &'a str,
    bucket_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_type: Option<BucketType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_info: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cors_rules: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lifecycle_rules: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    if_revision_is: Option<u64>,
}

impl B2Api for UpdateBucket {
    type B2Response = UpdateBucketResponse;
}

/// Builder type for [`UpdateBucket`] with all required fields set.
pub type UpdateBucketBldr =
    UpdateBucketBuilder<((B2Client,), (String,), (), (), (), (), ())>;

impl ToB2Request for UpdateBucket {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = UpdateBucketRequest {
            account_id: &session.account_id,
            bucket_id: self.bucket_id,
            bucket_type: self.bucket_type,
            bucket_info: self.bucket_info,
            cors_rules: self.cors_rules,
            lifecycle_rules: self.lifecycle_rules,
            if_revision_is: self.if_revision_is,
        };
        B2Request::api(self.client, session.clone(), "b2_update_bucket", &payload)
    }
}
