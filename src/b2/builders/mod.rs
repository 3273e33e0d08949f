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

//! Argument builders for B2 API operations

// Account
mod authorize_account;

pub use authorize_account::{AuthorizeAccount, AuthorizeAccountBldr};

// Buckets
mod create_bucket;
mod delete_bucket;
mod get_bucket;
pub(crate) mod list_buckets;
mod update_bucket;

pub use create_bucket::{CreateBucket, CreateBucketBldr};
pub use delete_bucket::{DeleteBucket, DeleteBucketBldr};
pub use get_bucket::{GetBucket, GetBucketBldr, GetBucketByIdBldr};
pub use list_buckets::{ListBuckets, ListBucketsBldr};
pub use update_bucket::{UpdateBucket, UpdateBucketBldr};

// Files
mod delete_file_version;
mod download_file_by_id;
mod download_file_by_name;
mod get_download_authorization;
mod get_file_info;
mod get_upload_url;
mod hide_file;
mod list_file_names;
mod list_file_versions;
mod upload_file;

pub use delete_file_version::{DeleteFileVersion, DeleteFileVersionBldr};
pub use download_file_by_id::{DownloadFileById, DownloadFileByIdBldr};
pub use download_file_by_name::{DownloadFileByName, DownloadFileByNameBldr};
pub use get_download_authorization::{GetDownloadAuthorization, GetDownloadAuthorizationBldr};
pub use get_file_info::{GetFileInfo, GetFileInfoBldr};
pub use get_upload_url::{GetUploadUrl, GetUploadUrlBldr};
pub use hide_file::{HideFile, HideFileBldr};
pub use list_file_names::{ListFileNames, ListFileNamesBldr};
pub use list_file_versions::{ListFileVersions, ListFileVersionsBldr};
pub use upload_file::{UploadFile, UploadFileBldr};

// Large files
mod cancel_large_file;
mod finish_large_file;
mod get_upload_part_url;
mod list_parts;
mod list_unfinished_large_files;
mod start_large_file;
mod upload_part;

pub use cancel_large_file::{CancelLargeFile, CancelLargeFileBldr};
pub use finish_large_file::{FinishLargeFile, FinishLargeFileBldr};
pub use get_upload_part_url::{GetUploadPartUrl, GetUploadPartUrlBldr};
pub use list_parts::{ListParts, ListPartsBldr};
pub use list_unfinished_large_files::{ListUnfinishedLargeFiles, ListUnfinishedLargeFilesBldr};
pub use start_large_file::{StartLargeFile, StartLargeFileBldr};
pub use upload_part::{UploadPart, UploadPartBldr};

// Keys
mod create_key;
mod delete_key;
mod list_keys;

pub use create_key::{CreateKey, CreateKeyBldr};
pub use delete_key::{DeleteKey, DeleteKeyBldr};
pub use list_keys::{ListKeys, ListKeysBldr};
