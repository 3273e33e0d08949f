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

use b2_common::test_context::TestContext;
use b2_common::utils::{authorize_body, error_body};
use backblaze::b2::creds::StaticProvider;
use backblaze::b2::error::{ConfigErr, Error, ValidationErr};
use backblaze::b2::types::B2Api;
use backblaze::b2::utils::basic_auth;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn authorize_account_stores_session() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::api_path("b2_authorize_account")))
        .and(header("Authorization", basic_auth("keyId", "appKey").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(authorize_body(&ctx.server.uri(), ctx.allowed_bucket())),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let other_handle = ctx.client.clone();
    assert!(!other_handle.is_authorized());

    let resp = ctx
        .client
        .authorize_account("keyId", "appKey")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.account_id().unwrap(), "acct0001");
    let session = other_handle.session().unwrap();
    assert_eq!(session.api_url, ctx.server.uri());
    assert_eq!(session.authorization_token, "acct-token");
    assert_eq!(session.allowed.bucket_id.as_deref(), Some(ctx.bucket_id.as_str()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn authorize_with_provider() {
    let ctx = TestContext::new().await;
    ctx.mount_authorize(json!({ "capabilities": ["listBuckets"] }))
        .await;

    ctx.client
        .authorize(&StaticProvider::new("keyId", "appKey"))
        .await
        .unwrap();
    assert!(ctx.client.is_authorized());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn calls_before_authorization_send_nothing() {
    let ctx = TestContext::new().await;

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Config(ConfigErr::NotAuthorized)));

    let err = ctx
        .client
        .download_file_by_id("4_zabc")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigErr::NotAuthorized)));

    let received = ctx.server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn empty_credentials_never_leave_the_client() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .authorize_account("keyId", "")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::EmptyCredential(_))
    ));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn rejected_credentials_surface_server_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::api_path("b2_authorize_account")))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body(
            401,
            "unauthorized",
            "invalid application key",
        )))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .authorize_account("keyId", "wrong")
        .build()
        .send()
        .await
        .unwrap_err();

    let server_err = err.as_server_error().unwrap();
    assert_eq!(server_err.status(), 401);
    assert_eq!(server_err.code().as_deref(), Some("unauthorized"));
    assert!(!ctx.client.is_authorized());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn api_calls_carry_account_token() {
    let ctx = TestContext::new_authorized().await;
    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_list_keys")))
        .and(header("Authorization", "acct-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": [],
            "nextApplicationKeyId": null
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx.client.list_keys().build().send().await.unwrap();
    assert!(resp.keys().unwrap().is_empty());
    assert!(resp.next_application_key_id().unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn debug_output_hides_tokens() {
    let ctx = TestContext::new().await;
    ctx.mount_authorize(ctx.allowed_bucket()).await;

    let resp = ctx
        .client
        .authorize_account("keyId", "appKey")
        .build()
        .send()
        .await
        .unwrap();
    let dbg = format!("{resp:?}");
    assert!(!dbg.contains("acct-token"));
    assert!(!dbg.contains(&basic_auth("keyId", "appKey")));

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_list_buckets")))
        .and(header("Authorization", "acct-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "buckets": [] })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx.client.list_buckets().build().send().await.unwrap();
    let dbg = format!("{resp:?}");
    assert!(dbg.contains("b2_list_buckets"));
    assert!(!dbg.contains("acct-token"));
    assert!(!format!("{:?}", ctx.client).contains("acct-token"));
}
