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

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const RANGE: &str = "Range";

pub const X_BZ_FILE_NAME: &str = "X-Bz-File-Name";
pub const X_BZ_PART_NUMBER: &str = "X-Bz-Part-Number";
pub const X_BZ_CONTENT_SHA1: &str = "X-Bz-Content-Sha1";
pub const X_BZ_INFO_PREFIX: &str = "X-Bz-Info-";

pub const X_BZ_FILE_ID: &str = "x-bz-file-id";
pub const X_BZ_UPLOAD_TIMESTAMP: &str = "x-bz-upload-timestamp";

pub const FILE_ID: &str = "fileId";

/// Content type that asks the server to pick one from the file name.
pub const CONTENT_TYPE_AUTO: &str = "b2/x-auto";
pub const APPLICATION_JSON: &str = "application/json";
