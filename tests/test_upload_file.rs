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
use b2_common::utils::{file_record, rand_file_name};
use backblaze::b2::progress::{ProgressEvent, ProgressSink};
use backblaze::b2::response_traits::{HasFileId, HasFileRecord, HasUploadTicket};
use backblaze::b2::types::B2Api;
use backblaze::b2::utils::sha1_hash;
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_bytes, body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn upload_file_without_hash_sends_payload_sha1() {
    let ctx = TestContext::new_authorized().await;
    let data = b"hello world".to_vec();
    let sha1 = sha1_hash(&data);
    assert_eq!(sha1, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_get_upload_url")))
        .and(body_partial_json(json!({ "bucketId": ctx.bucket_id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bucketId": ctx.bucket_id,
            "uploadUrl": ctx.upload_url("u1"),
            "authorizationToken": "upload-token",
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/upload/u1"))
        .and(header("Authorization", "upload-token"))
        .and(header("X-Bz-File-Name", "docs/read%20me.txt"))
        .and(header("X-Bz-Content-Sha1", sha1.as_str()))
        .and(header("Content-Type", "b2/x-auto"))
        .and(body_bytes(data.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_record(
            &ctx.bucket_id,
            "4_zfile1",
            "docs/read me.txt",
            &sha1,
            data.len() as u64,
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let ticket_resp = ctx
        .client
        .get_upload_url(&ctx.bucket_id)
        .build()
        .send()
        .await
        .unwrap();
    assert!(!format!("{ticket_resp:?}").contains("upload-token"));
    let ticket = ticket_resp.upload_ticket().unwrap();

    let resp = ctx
        .client
        .upload_file(
            ticket.upload_url,
            ticket.authorization_token,
            "docs/read me.txt",
            data,
        )
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.file_id().unwrap(), "4_zfile1");
    let record = resp.file_record().unwrap();
    assert_eq!(record.file_name, "docs/read me.txt");
    assert_eq!(record.content_sha1.as_deref(), Some(sha1.as_str()));
    assert!(!format!("{resp:?}").contains("upload-token"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn upload_file_keeps_caller_hash() {
    let ctx = TestContext::new_authorized().await;
    let name = rand_file_name();

    Mock::given(method("POST"))
        .and(path("/upload/u2"))
        .and(header("X-Bz-Content-Sha1", "do_not_verify"))
        .and(header("X-Bz-Info-author", "Jane%20Doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_record(
            &ctx.bucket_id,
            "4_zfile2",
            &name,
            "none",
            3,
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut info = std::collections::HashMap::new();
    info.insert("author".to_string(), "Jane Doe".to_string());
    ctx.client
        .upload_file(ctx.upload_url("u2"), "upload-token", name, "abc")
        .hash("do_not_verify")
        .info(info)
        .build()
        .send()
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn upload_redirect_is_not_followed() {
    let ctx = TestContext::new_authorized().await;

    Mock::given(method("POST"))
        .and(path("/upload/moved"))
        .respond_with(
            ResponseTemplate::new(307).insert_header("Location", ctx.upload_url("elsewhere")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload/elsewhere"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    assert_eq!(ctx.client.upload_transport().max_redirects(), 0);

    let err = ctx
        .client
        .upload_file(ctx.upload_url("moved"), "upload-token", "a.txt", "abc")
        .build()
        .send()
        .await
        .unwrap_err();

    let server_err = err.as_server_error().unwrap();
    assert_eq!(server_err.status(), 307);
    assert!(server_err.headers().contains_key("location"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn upload_progress_reaches_payload_size() {
    let ctx = TestContext::new_authorized().await;
    let data = vec![7_u8; 200 * 1024];

    Mock::given(method("POST"))
        .and(path("/upload/u3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_record(
            &ctx.bucket_id,
            "4_zfile3",
            "big.bin",
            &sha1_hash(&data),
            data.len() as u64,
        )))
        .mount(&ctx.server)
        .await;

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let events = events.clone();
        ProgressSink::new(move |e: ProgressEvent| events.lock().unwrap().push(e))
    };

    ctx.client
        .upload_file(ctx.upload_url("u3"), "upload-token", "big.bin", data.clone())
        .progress(sink)
        .build()
        .send()
        .await
        .unwrap();

    let events = events.lock().unwrap();
    assert!(events.len() > 1);
    let last = events.last().unwrap();
    assert_eq!(last.transferred, data.len() as u64);
    assert_eq!(last.total, Some(data.len() as u64));
}
