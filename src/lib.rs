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

//! # Backblaze B2 Rust SDK
//!
//! A strongly-typed, async interface to the Backblaze B2 native API
//! (`b2api/v2`).
//!
//! Each API call has a request builder (e.g. [`b2::builders::ListFileNames`],
//! [`b2::builders::UploadFile`], [`b2::builders::StartLargeFile`]) created
//! from a [`b2::B2Client`] method with the required arguments filled in.
//! Optional parameters are set on the builder before `build()`.
//!
//! All request builders implement the [`b2::types::B2Api`] trait, which
//! provides the async [`send`](crate::b2::types::B2Api::send) method to
//! execute the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use backblaze::b2::B2Client;
//! use backblaze::b2::response_traits::{HasFileId, HasUploadTicket};
//! use backblaze::b2::types::B2Api;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = B2Client::new().unwrap();
//!     client
//!         .authorize_account("000a1b2c3d4e5f60000000001", "K000secret")
//!         .build()
//!         .send()
//!         .await
//!         .expect("authorization failed");
//!
//!     let ticket = client
//!         .get_upload_url("4a48fe8875c6214145260818")
//!         .build()
//!         .send()
//!         .await
//!         .unwrap()
//!         .upload_ticket()
//!         .unwrap();
//!
//!     let resp = client
//!         .upload_file(ticket.upload_url, ticket.authorization_token, "hello.txt", "hello")
//!         .build()
//!         .send()
//!         .await
//!         .unwrap();
//!     println!("uploaded {}", resp.file_id().unwrap());
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`b2::B2Client`] returns a builder struct
//! - Builders implement [`b2::types::ToB2Request`] for request conversion and [`b2::types::B2Api`] for execution
//! - Responses implement [`b2::types::FromB2Response`]; they keep the raw headers and body and decode JSON on access
//! - [`b2::BucketClient`] pins calls to one bucket; [`b2::LargeFileUpload`] drives multi-part uploads

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod b2;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
