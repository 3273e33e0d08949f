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

//! Builder for the `b2_create_bucket` operation

use crate::b2::client::B2Client;
use crate::b2::error::Error;
use crate::b2::response::CreateBucketResponse;
use crate::b2::types::{B2Api, B2Request, BucketType, ToB2Request};
use serde::Serialize;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for the
/// [`b2_create_bucket`](https://www.backblaze.com/apidocs/b2-create-bucket) operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)]
    client: B2Client,
    #[builder(!default, setter(into))]
    bucket_name: String,
    #[builder(!default)]
    bucket_type: BucketType,
    /// User-defined information stored with the bucket.
    #[builder(default, setter(into))]
    bucket_info: HashMap<String, String>,
    #[builder(default, setter(into))]
    cors_rules: Vec<serde_json::Value>,
    #[builder(default, setter(into))]
    lifecycle_rules: Vec<serde_json::Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBucketRequest<'a> {
    account_id: &'a str,
    bucket_name: String,
    bucket_type: BucketType,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    bucket_info: HashMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cors_rules: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    lifecycle_rules: Vec<serde_json::Value>,
}

impl B2Api for CreateBucket {
    type B2Response = CreateBucketResponse;
}

/// Builder type for [`CreateBucket`] with all required fields set.
pub type CreateBucketBldr =
    CreateBucketBuilder<((B2Client,), (String,), (BucketType,), (), (), ())>;

impl ToB2Request for CreateBucket {
    fn to_b2request(self) -> Result<B2Request, Error> {
        let session = self.client.session()?;
        let payload = CreateBucketRequest {
            account_id: &session.account_id,
            bucket_name: self.bucket_name,
            bucket_type: self.bucket_type,
            bucket_info: self.bucket_info,
            cors_rules: self.cors_rules,
            lifecycle_rules: self.lifecycle_rules,
        };
        B2Request::api(self.client, session.clone(), "b2_create_bucket", &payload)
    }
}
