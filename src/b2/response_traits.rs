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

//! Response traits for accessing B2 results.
//!
//! Every response keeps the [`B2Request`] that produced it together with the
//! raw headers and body. JSON is decoded on demand by the accessor traits
//! below, so a response type only states which accessors apply to it:
//!
//! ```rust,ignore
//! impl HasFileRecord for UploadFileResponse {}
//! impl HasFileId for UploadFileResponse {}
//! ```
//!
//! Accessors that pick a single field out of the body share one parsed
//! `serde_json::Value` per response ([`HasCachedBody`]); accessors returning
//! whole records decode straight from the body bytes.

use crate::b2::error::ValidationErr;
use crate::b2::types::{B2Request, Bucket, FileRecord, KeyRecord, PartRecord, UploadTicket};
use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

#[macro_export]
/// Implements the `FromB2Response` trait for the specified types.
macro_rules! impl_from_b2response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::b2::types::FromB2Response for $ty {
                async fn from_b2response(
                    request: $crate::b2::types::B2Request,
                    response: Result<reqwest::Response, $crate::b2::error::Error>,
                ) -> Result<Self, $crate::b2::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp
                            .bytes()
                            .await
                            .map_err($crate::b2::error::ValidationErr::BodyRead)?,
                        cached_body: once_cell::sync::OnceCell::new(),
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasB2Fields` and `HasCachedBody` traits for the specified types.
macro_rules! impl_has_b2fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::b2::response_traits::HasB2Fields for $ty {
                /// The request that was sent to the B2 API.
                #[inline]
                fn request(&self) -> &$crate::b2::types::B2Request {
                    &self.request
                }

                /// HTTP headers returned by the server.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the server, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }

            impl $crate::b2::response_traits::HasCachedBody for $ty {
                fn cached_body(&self) -> Result<&serde_json::Value, $crate::b2::error::ValidationErr> {
                    self.cached_body
                        .get_or_try_init(|| serde_json::from_slice(&self.body))
                        .map_err($crate::b2::error::ValidationErr::JsonError)
                }
            }
        )*
    };
}

#[macro_export]
/// Implements `Debug` without the body for responses whose body carries a
/// token or key secret.
macro_rules! impl_redacted_debug {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Debug for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($ty))
                        .field("request", &self.request)
                        .field("headers", &self.headers)
                        .field("body", &format_args!("[REDACTED; {} bytes]", self.body.len()))
                        .finish_non_exhaustive()
                }
            }
        )*
    };
}

pub trait HasB2Fields {
    /// The request that was sent to the B2 API.
    fn request(&self) -> &B2Request;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server.
    fn body(&self) -> &Bytes;

    /// Decodes the whole body as `T`.
    fn decode<T: DeserializeOwned>(&self) -> Result<T, ValidationErr>
    where
        Self: Sized,
    {
        Ok(serde_json::from_slice(self.body())?)
    }
}

/// Parsed JSON body, decoded once per response.
pub trait HasCachedBody: HasB2Fields {
    fn cached_body(&self) -> Result<&serde_json::Value, ValidationErr>;
}

pub(crate) fn required_str(
    value: &serde_json::Value,
    field: &'static str,
) -> Result<String, ValidationErr> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or(ValidationErr::MissingField(field))
}

pub(crate) fn optional_str(value: &serde_json::Value, field: &str) -> Option<String> {
    value.get(field).and_then(|v| v.as_str()).map(str::to_string)
}

/// Returns the `fileId` of the response body.
pub trait HasFileId: HasCachedBody {
    fn file_id(&self) -> Result<String, ValidationErr> {
        required_str(self.cached_body()?, "fileId")
    }
}

/// Returns the `fileName` of the response body.
pub trait HasFileName: HasCachedBody {
    fn file_name(&self) -> Result<String, ValidationErr> {
        required_str(self.cached_body()?, "fileName")
    }
}

/// Returns the `bucketId` of the response body.
pub trait HasBucketId: HasCachedBody {
    fn bucket_id(&self) -> Result<String, ValidationErr> {
        required_str(self.cached_body()?, "bucketId")
    }
}

/// The body is a single file record.
pub trait HasFileRecord: HasB2Fields + Sized {
    fn file_record(&self) -> Result<FileRecord, ValidationErr> {
        self.decode()
    }
}

/// The body is a single bucket record.
pub trait HasBucketRecord: HasB2Fields + Sized {
    fn bucket(&self) -> Result<Bucket, ValidationErr> {
        self.decode()
    }
}

/// The body is an upload URL with its token.
pub trait HasUploadTicket: HasB2Fields + Sized {
    fn upload_ticket(&self) -> Result<UploadTicket, ValidationErr> {
        self.decode()
    }
}

/// The body is a single part record.
pub trait HasPartRecord: HasB2Fields + Sized {
    fn part(&self) -> Result<PartRecord, ValidationErr> {
        self.decode()
    }

    /// SHA-1 the server computed for the part.
    fn content_sha1(&self) -> Result<String, ValidationErr> {
        Ok(self.part()?.content_sha1)
    }
}

/// The body is a single application key record.
pub trait HasKeyRecord: HasB2Fields + Sized {
    fn key(&self) -> Result<KeyRecord, ValidationErr> {
        self.decode()
    }
}

/// A page of file records.
pub trait HasFiles: HasCachedBody + Sized {
    fn files(&self) -> Result<Vec<FileRecord>, ValidationErr> {
        let files = self
            .cached_body()?
            .get("files")
            .cloned()
            .ok_or(ValidationErr::MissingField("files"))?;
        Ok(serde_json::from_value(files)?)
    }
}

/// Cursor of a file listing that pages by name.
pub trait HasNextFileName: HasCachedBody {
    /// Value for `start_file_name` of the next page; `None` on the last page.
    fn next_file_name(&self) -> Result<Option<String>, ValidationErr> {
        Ok(optional_str(self.cached_body()?, "nextFileName"))
    }
}

/// Cursor of a listing that pages by file id.
pub trait HasNextFileId: HasCachedBody {
    /// Value for `start_file_id` of the next page; `None` on the last page.
    fn next_file_id(&self) -> Result<Option<String>, ValidationErr> {
        Ok(optional_str(self.cached_body()?, "nextFileId"))
    }
}
