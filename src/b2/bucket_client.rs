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

//! Client pinned to a single bucket.
//!
//! [`BucketClient`] forwards to a [`B2Client`] with its bucket id filled in,
//! and refuses application keys that are not restricted to that bucket.

use crate::b2::builders::{
    CancelLargeFileBldr, DeleteBucketBldr, DeleteFileVersionBldr, DownloadFileByIdBldr,
    DownloadFileByNameBldr, FinishLargeFileBldr, GetBucketByIdBldr, GetDownloadAuthorizationBldr,
    GetFileInfoBldr, GetUploadPartUrlBldr, GetUploadUrlBldr, HideFileBldr, ListFileNamesBldr,
    ListFileVersionsBldr, ListPartsBldr, ListUnfinishedLargeFilesBldr, StartLargeFileBldr,
    UpdateBucketBldr, UploadFileBldr, UploadPartBldr,
};
use crate::b2::client::B2Client;
use crate::b2::error::{ConfigErr, Error};
use crate::b2::large_file::LargeFileUpload;
use crate::b2::response::AuthorizeAccountResponse;
use crate::b2::types::B2Api;
use bytes::Bytes;

/// [`B2Client`] wrapper for one bucket.
///
/// ```no_run
/// use backblaze::b2::bucket_client::BucketClient;
/// use backblaze::b2::client::B2Client;
/// use backblaze::b2::response_traits::HasFiles;
/// use backblaze::b2::types::B2Api;
///
/// #[tokio::main]
/// async fn main() {
///     let bucket = BucketClient::new(B2Client::new().unwrap(), "4a48fe8875c6214145260818");
///     bucket.authorize("keyId", "key").await.unwrap();
///     let page = bucket.list_file_names().build().send().await.unwrap();
///     println!("{} files", page.files().unwrap().len());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct BucketClient {
    client: B2Client,
    bucket_id: String,
}

impl BucketClient {
    pub fn new<S: Into<String>>(client: B2Client, bucket_id: S) -> Self {
        Self {
            client,
            bucket_id: bucket_id.into(),
        }
    }

    pub fn bucket_id(&self) -> &str {
        &self.bucket_id
    }

    /// The wrapped client.
    pub fn client(&self) -> &B2Client {
        &self.client
    }

    /// Authorizes the wrapped client, then checks that the key is
    /// restricted to this bucket.
    ///
    /// The session stays on the wrapped client even when the check fails.
    pub async fn authorize<K: Into<String>, A: Into<String>>(
        &self,
        key_id: K,
        application_key: A,
    ) -> Result<AuthorizeAccountResponse, Error> {
        let resp = self
            .client
            .authorize_account(key_id, application_key)
            .build()
            .send()
            .await?;
        let allowed_bucket_id = resp.result()?.allowed.bucket_id;
        if allowed_bucket_id.as_deref() != Some(self.bucket_id.as_str()) {
            log::warn!(
                "application key is not restricted to bucket {} (allowed: {})",
                self.bucket_id,
                allowed_bucket_id.as_deref().unwrap_or("<none>")
            );
            return Err(ConfigErr::BucketNotAllowed {
                bucket_id: self.bucket_id.clone(),
                allowed_bucket_id,
            }
            .into());
        }
        Ok(resp)
    }

    /// Name of the bucket as reported by the current session.
    pub fn bucket_name(&self) -> Result<String, ConfigErr> {
        let session = self.client.session()?;
        match (&session.allowed.bucket_id, &session.allowed.bucket_name) {
            (Some(id), Some(name)) if *id == self.bucket_id => Ok(name.clone()),
            _ => Err(ConfigErr::MissingBucketName),
        }
    }

    // Bucket-scoped

    pub fn get_bucket(&self) -> GetBucketByIdBldr {
        self.client.get_bucket().bucket_id(self.bucket_id.clone())
    }

    pub fn update_bucket(&self) -> UpdateBucketBldr {
        self.client.update_bucket(self.bucket_id.clone())
    }

    pub fn delete_bucket(&self) -> DeleteBucketBldr {
        self.client.delete_bucket(self.bucket_id.clone())
    }

    pub fn get_upload_url(&self) -> GetUploadUrlBldr {
        self.client.get_upload_url(self.bucket_id.clone())
    }

    pub fn list_file_names(&self) -> ListFileNamesBldr {
        self.client.list_file_names(self.bucket_id.clone())
    }

    pub fn list_file_versions(&self) -> ListFileVersionsBldr {
        self.client.list_file_versions(self.bucket_id.clone())
    }

    pub fn list_unfinished_large_files(&self) -> ListUnfinishedLargeFilesBldr {
        self.client
            .list_unfinished_large_files(self.bucket_id.clone())
    }

    pub fn hide_file<N: Into<String>>(&self, file_name: N) -> HideFileBldr {
        self.client.hide_file(self.bucket_id.clone(), file_name)
    }

    pub fn get_download_authorization<P: Into<String>>(
        &self,
        file_name_prefix: P,
        valid_duration_in_seconds: u64,
    ) -> GetDownloadAuthorizationBldr {
        self.client.get_download_authorization(
            self.bucket_id.clone(),
            file_name_prefix,
            valid_duration_in_seconds,
        )
    }

    pub fn start_large_file<N: Into<String>>(&self, file_name: N) -> StartLargeFileBldr {
        self.client
            .start_large_file(self.bucket_id.clone(), file_name)
    }

    pub async fn begin_large_file<N: Into<String>>(
        &self,
        file_name: N,
    ) -> Result<LargeFileUpload, Error> {
        self.client
            .begin_large_file(self.bucket_id.clone(), file_name)
            .await
    }

    /// Fails with [`ConfigErr::MissingBucketName`] unless the session names
    /// this bucket.
    pub fn download_file_by_name<N: Into<String>>(
        &self,
        file_name: N,
    ) -> Result<DownloadFileByNameBldr, ConfigErr> {
        Ok(self
            .client
            .download_file_by_name(self.bucket_name()?, file_name))
    }

    // File-scoped

    pub fn upload_file<U, T, N, D>(
        &self,
        upload_url: U,
        upload_auth_token: T,
        file_name: N,
        data: D,
    ) -> UploadFileBldr
    where
        U: Into<String>,
        T: Into<String>,
        N: Into<String>,
        D: Into<Bytes>,
    {
        self.client
            .upload_file(upload_url, upload_auth_token, file_name, data)
    }

    pub fn get_file_info<S: Into<String>>(&self, file_id: S) -> GetFileInfoBldr {
        self.client.get_file_info(file_id)
    }

    pub fn delete_file_version<S: Into<String>, N: Into<String>>(
        &self,
        file_id: S,
        file_name: N,
    ) -> DeleteFileVersionBldr {
        self.client.delete_file_version(file_id, file_name)
    }

    pub fn download_file_by_id<S: Into<String>>(&self, file_id: S) -> DownloadFileByIdBldr {
        self.client.download_file_by_id(file_id)
    }

    pub fn get_upload_part_url<S: Into<String>>(&self, file_id: S) -> GetUploadPartUrlBldr {
        self.client.get_upload_part_url(file_id)
    }

    pub fn upload_part<U, T, D>(
        &self,
        upload_url: U,
        upload_auth_token: T,
        part_number: u16,
        data: D,
    ) -> UploadPartBldr
    where
        U: Into<String>,
        T: Into<String>,
        D: Into<Bytes>,
    {
        self.client
            .upload_part(upload_url, upload_auth_token, part_number, data)
    }

    pub fn list_parts<S: Into<String>>(&self, file_id: S) -> ListPartsBldr {
        self.client.list_parts(file_id)
    }

    pub fn finish_large_file<S: Into<String>, V: Into<Vec<String>>>(
        &self,
        file_id: S,
        part_sha1_array: V,
    ) -> FinishLargeFileBldr {
        self.client.finish_large_file(file_id, part_sha1_array)
    }

    pub fn cancel_large_file<S: Into<String>>(&self, file_id: S) -> CancelLargeFileBldr {
        self.client.cancel_large_file(file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_by_name_needs_session() {
        let bucket = BucketClient::new(B2Client::new().unwrap(), "bkt1");
        assert!(matches!(
            bucket.download_file_by_name("a.txt"),
            Err(ConfigErr::NotAuthorized)
        ));
    }
}
