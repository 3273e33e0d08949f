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

//! Response types for B2 API operations

// Account
mod authorize_account;

pub use authorize_account::AuthorizeAccountResponse;

// Buckets
mod create_bucket;
mod delete_bucket;
mod get_bucket;
pub(crate) mod list_buckets;
mod update_bucket;

pub use create_bucket::CreateBucketResponse;
pub use delete_bucket::DeleteBucketResponse;
pub use get_bucket::GetBucketResponse;
pub use list_buckets::ListBucketsResponse;
pub use update_bucket::UpdateBucketResponse;

// Files
mod delete_file_version;
mod download_file;
mod get_download_authorization;
mod get_file_info;
mod get_upload_url;
mod hide_file;
mod list_file_names;
mod list_file_versions;
mod upload_file;

pub use delete_file_version::DeleteFileVersionResponse;
pub use download_file::{ByteStream, DownloadContent, DownloadFileResponse};
pub use get_download_authorization::GetDownloadAuthorizationResponse;
pub use get_file_info::GetFileInfoResponse;
pub use get_upload_url::GetUploadUrlResponse;
pub use hide_file::HideFileResponse;
pub use list_file_names::ListFileNamesResponse;
pub use list_file_versions::ListFileVersionsResponse;
pub use upload_file::UploadFileResponse;

// Large files
mod cancel_large_file;
mod finish_large_file;
mod get_upload_part_url;
mod list_parts;
mod list_unfinished_large_files;
mod start_large_file;
mod upload_part;

pub use cancel_large_file::CancelLargeFileResponse;
pub use finish_large_file::FinishLargeFileResponse;
pub use get_upload_part_url::GetUploadPartUrlResponse;
pub use list_parts::ListPartsResponse;
pub use list_unfinished_large_files::ListUnfinishedLargeFilesResponse;
pub use start_large_file::StartLargeFileResponse;
pub use upload_part::UploadPartResponse;

// Keys
mod create_key;
mod delete_key;
mod list_keys;

pub use create_key::CreateKeyResponse;
pub use delete_key::DeleteKeyResponse;
pub use list_keys::ListKeysResponse;
