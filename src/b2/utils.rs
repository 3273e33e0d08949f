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

//! Various utility and helper functions

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::{Digest, Sha1};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Characters left as-is by `encodeURIComponent`; everything else is escaped.
const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URI component.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT_ENCODE_SET).to_string()
}

/// Percent-encodes a file name one `/`-separated segment at a time, so
/// virtual folders survive as literal slashes.
///
/// ```
/// use backblaze::b2::utils::encode_file_name;
/// assert_eq!(encode_file_name("a b/c#d"), "a%20b/c%23d");
/// ```
pub fn encode_file_name(file_name: &str) -> String {
    file_name
        .split('/')
        .map(url_encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Gets hex encoded SHA-1 hash of given data
pub fn sha1_hash(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Hashes upload payloads off the async executor; parts may be up to 5 GB.
pub(crate) async fn sha1_hash_blocking(data: Bytes) -> String {
    async_std::task::spawn_blocking(move || sha1_hash(&data)).await
}

/// Value of the `Authorization` header for `b2_authorize_account`.
pub fn basic_auth(key_id: &str, application_key: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{key_id}:{application_key}")))
}

/// Converts B2 millisecond timestamps to UTC time.
pub fn from_millis(millis: i64) -> Option<UtcTime> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Joins a base URL and a path without doubling the slash between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_encode_file_name_per_segment() {
        assert_eq!(encode_file_name("a b/c#d"), "a%20b/c%23d");
        assert_eq!(encode_file_name("photos/2024/img 1.jpg"), "photos/2024/img%201.jpg");
        assert_eq!(encode_file_name("/leading"), "/leading");
        assert_eq!(encode_file_name("a//b"), "a//b");
    }

    #[test]
    fn test_encode_file_name_keeps_unreserved() {
        assert_eq!(encode_file_name("x-y_z.~!*'()"), "x-y_z.~!*'()");
        assert_eq!(encode_file_name("a+b=c&d"), "a%2Bb%3Dc%26d");
        assert_eq!(encode_file_name("kä"), "k%C3%A4");
    }

    #[test]
    fn test_sha1_known_vectors() {
        assert_eq!(sha1_hash(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(sha1_hash(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_basic_auth() {
        assert_eq!(
            basic_auth("Aladdin", "open sesame"),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn test_from_millis() {
        let t = from_millis(1_700_000_000_000).unwrap();
        assert_eq!(t.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.b/", "/b2api/v2/x"), "https://a.b/b2api/v2/x");
        assert_eq!(join_url("https://a.b", "file/x"), "https://a.b/file/x");
    }

    quickcheck! {
        fn prop_encoded_segments_decode_back(name: String) -> bool {
            let encoded = encode_file_name(&name);
            let decoded: Vec<String> = encoded
                .split('/')
                .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                .collect();
            decoded.join("/") == name
        }

        fn prop_encoded_segment_count_is_preserved(name: String) -> bool {
            encode_file_name(&name).split('/').count() == name.split('/').count()
        }
    }
}
