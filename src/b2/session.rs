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

//! Authorized session state shared by all clones of a [`B2Client`](crate::b2::client::B2Client)

use crate::b2::types::{Allowed, AuthorizeAccountResult};
use std::fmt;

/// Everything `b2_authorize_account` hands back that later calls need.
///
/// A session is replaced as a whole on re-authorization; requests keep the
/// snapshot they started with.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub account_id: String,
    pub authorization_token: String,
    pub api_url: String,
    pub download_url: String,
    pub recommended_part_size: u64,
    pub absolute_minimum_part_size: u64,
    pub allowed: Allowed,
}

impl From<AuthorizeAccountResult> for Session {
    fn from(r: AuthorizeAccountResult) -> Self {
        Self {
            account_id: r.account_id,
            authorization_token: r.authorization_token,
            api_url: r.api_url,
            download_url: r.download_url,
            recommended_part_size: r.recommended_part_size,
            absolute_minimum_part_size: r.absolute_minimum_part_size,
            allowed: r.allowed,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("authorization_token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("download_url", &self.download_url)
            .field("recommended_part_size", &self.recommended_part_size)
            .field("absolute_minimum_part_size", &self.absolute_minimum_part_size)
            .field("allowed", &self.allowed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_from_authorize_payload() {
        let result: AuthorizeAccountResult = serde_json::from_value(json!({
            "accountId": "acc1",
            "authorizationToken": "tok-secret",
            "apiUrl": "https://api001.backblazeb2.com",
            "downloadUrl": "https://f001.backblazeb2.com",
            "recommendedPartSize": 100_000_000,
            "absoluteMinimumPartSize": 5_000_000,
            "allowed": {
                "bucketId": "bkt1",
                "bucketName": "photos",
                "capabilities": ["listFiles", "readFiles"],
                "namePrefix": null
            }
        }))
        .unwrap();

        let session = Session::from(result);
        assert_eq!(session.account_id, "acc1");
        assert_eq!(session.recommended_part_size, 100_000_000);
        assert_eq!(session.allowed.bucket_id.as_deref(), Some("bkt1"));
        assert_eq!(session.allowed.bucket_name.as_deref(), Some("photos"));
        assert!(session.allowed.name_prefix.is_none());

        let dbg = format!("{session:?}");
        assert!(!dbg.contains("tok-secret"));
    }
}
