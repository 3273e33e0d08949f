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

//! Client for the Backblaze B2 native API

pub mod bucket_client;
pub mod builders;
pub mod client;
pub mod creds;
pub mod error;
pub mod header_constants;
pub mod large_file;
pub mod multimap_ext;
pub mod progress;
pub mod response;
pub mod response_traits;
pub mod session;
pub mod types;
pub mod utils;

pub use bucket_client::BucketClient;
pub use client::{B2Client, B2ClientBuilder};
pub use large_file::LargeFileUpload;
