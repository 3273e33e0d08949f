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

use serde_json::{Value, json};

pub fn rand_bucket_name() -> String {
    format!("b2rs-{}", uuid::Uuid::new_v4().simple())
}

pub fn rand_file_name() -> String {
    format!("{}.bin", uuid::Uuid::new_v4().simple())
}

pub fn rand_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Body of a successful `b2_authorize_account` call against `base_url`.
pub fn authorize_body(base_url: &str, allowed: Value) -> Value {
    json!({
        "accountId": "acct0001",
        "authorizationToken": "acct-token",
        "apiUrl": base_url,
        "downloadUrl": base_url,
        "recommendedPartSize": 100_000_000,
        "absoluteMinimumPartSize": 5_000_000,
        "s3ApiUrl": "https://s3.us-west-001.backblazeb2.com",
        "allowed": allowed,
    })
}

/// A file record as returned by upload, get-info and listing calls.
pub fn file_record(bucket_id: &str, file_id: &str, file_name: &str, sha1: &str, len: u64) -> Value {
    json!({
        "accountId": "acct0001",
        "action": "upload",
        "bucketId": bucket_id,
        "contentLength": len,
        "contentSha1": sha1,
        "contentType": "application/octet-stream",
        "fileId": file_id,
        "fileInfo": {},
        "fileName": file_name,
        "uploadTimestamp": 1_700_000_000_000_i64,
    })
}

/// B2 error document.
pub fn error_body(status: u16, code: &str, message: &str) -> Value {
    json!({ "status": status, "code": code, "message": message })
}
