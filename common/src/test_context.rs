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

use crate::utils::{authorize_body, rand_bucket_name, rand_id};
use backblaze::b2::client::{API_PATH, B2Client, B2ClientBuilder};
use backblaze::b2::types::B2Api;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A client wired to a local mock of the B2 API.
///
/// The mock answers authorization, API and download calls on one host, so
/// the URLs returned by `b2_authorize_account` all point back at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: B2Client,
    pub bucket_id: String,
    pub bucket_name: String,
}

impl TestContext {
    /// Unauthorized client; no mocks mounted.
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let server = MockServer::start().await;
        let client = B2ClientBuilder::new()
            .auth_base_url(server.uri())
            .app_info(Some(("b2-common".into(), "0.1.0".into())))
            .build()
            .unwrap();
        log::debug!("mock B2 server at {}", server.uri());

        Self {
            server,
            client,
            bucket_id: rand_id(),
            bucket_name: rand_bucket_name(),
        }
    }

    /// Client authorized with a key restricted to this context's bucket.
    pub async fn new_authorized() -> Self {
        let ctx = Self::new().await;
        ctx.mount_authorize(ctx.allowed_bucket()).await;
        ctx.client
            .authorize_account("keyId", "appKey")
            .build()
            .send()
            .await
            .unwrap();
        ctx
    }

    /// `allowed` block naming this context's bucket.
    pub fn allowed_bucket(&self) -> Value {
        json!({
            "bucketId": self.bucket_id,
            "bucketName": self.bucket_name,
            "capabilities": ["listFiles", "readFiles", "writeFiles", "deleteFiles"],
            "namePrefix": null,
        })
    }

    pub async fn mount_authorize(&self, allowed: Value) {
        Mock::given(method("GET"))
            .and(path(Self::api_path("b2_authorize_account")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(authorize_body(&self.server.uri(), allowed)),
            )
            .mount(&self.server)
            .await;
    }

    /// Answers `POST /b2api/v2/{name}` with `body`.
    pub async fn mount_api(&self, name: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::api_path(name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub fn api_path(name: &str) -> String {
        format!("/{API_PATH}/{name}")
    }

    /// Upload URL on the mock server.
    pub fn upload_url(&self, id: &str) -> String {
        format!("{}/upload/{id}", self.server.uri())
    }
}
