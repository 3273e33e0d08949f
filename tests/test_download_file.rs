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
use b2_common::utils::error_body;
use backblaze::b2::response::DownloadContent;
use backblaze::b2::types::{B2Api, ResponseType};
use bytes::Bytes;
use futures_util::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn mount_by_id(ctx: &TestContext, file_id: &str, body: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(TestContext::api_path("b2_download_file_by_id")))
        .and(query_param("fileId", file_id))
        .and(header("Authorization", "acct-token"))
        .respond_with(body)
        .mount(&ctx.server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn download_by_id_returns_bytes_and_headers() {
    let ctx = TestContext::new_authorized().await;
    mount_by_id(
        &ctx,
        "4_zbytes",
        ResponseTemplate::new(200)
            .insert_header("x-bz-file-id", "4_zbytes")
            .insert_header("x-bz-file-name", "photos/caf%C3%A9%20menu.jpg")
            .insert_header("x-bz-content-sha1", "a9993e364706816aba3e25717850c26c9cd0d89d")
            .insert_header("content-type", "image/jpeg")
            .set_body_bytes(b"abc".to_vec()),
    )
    .await;

    let resp = ctx
        .client
        .download_file_by_id("4_zbytes")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.file_id(), Some("4_zbytes"));
    assert_eq!(resp.file_name().as_deref(), Some("photos/café menu.jpg"));
    assert_eq!(
        resp.content_sha1(),
        Some("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
    assert_eq!(resp.content_type(), Some("image/jpeg"));
    match resp.into_content() {
        DownloadContent::Bytes(b) => assert_eq!(b, Bytes::from_static(b"abc")),
        other => panic!("unexpected content: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn download_decodes_json() {
    let ctx = TestContext::new_authorized().await;
    mount_by_id(
        &ctx,
        "4_zjson",
        ResponseTemplate::new(200).set_body_json(json!({ "answer": 42 })),
    )
    .await;

    let resp = ctx
        .client
        .download_file_by_id("4_zjson")
        .response_type(ResponseType::Json)
        .build()
        .send()
        .await
        .unwrap();

    match resp.content() {
        DownloadContent::Json(v) => assert_eq!(v["answer"], 42),
        other => panic!("unexpected content: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn download_streams_on_request() {
    let ctx = TestContext::new_authorized().await;
    let payload = vec![9_u8; 300 * 1024];
    mount_by_id(
        &ctx,
        "4_zstream",
        ResponseTemplate::new(200).set_body_bytes(payload.clone()),
    )
    .await;

    let resp = ctx
        .client
        .download_file_by_id("4_zstream")
        .response_type(ResponseType::Stream)
        .build()
        .send()
        .await
        .unwrap();

    let DownloadContent::Stream(stream) = resp.into_content() else {
        panic!("expected a stream");
    };
    let chunks: Vec<Bytes> = stream.try_collect().await.unwrap();
    let received: Vec<u8> = chunks.concat();
    assert_eq!(received, payload);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn download_by_name_sends_range() {
    let ctx = TestContext::new_authorized().await;
    Mock::given(method("GET"))
        .and(path(format!("/file/{}/logs/2024%20jan.log", ctx.bucket_name)))
        .and(header("Range", "bytes=0-3"))
        .respond_with(ResponseTemplate::new(206).set_body_string("2024"))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .download_file_by_name(&ctx.bucket_name, "logs/2024 jan.log")
        .range("0-3")
        .response_type(ResponseType::Text)
        .build()
        .send()
        .await
        .unwrap();

    match resp.content() {
        DownloadContent::Text(s) => assert_eq!(s, "2024"),
        other => panic!("unexpected content: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn missing_file_is_server_error() {
    let ctx = TestContext::new_authorized().await;
    mount_by_id(
        &ctx,
        "4_zgone",
        ResponseTemplate::new(404).set_body_json(error_body(404, "not_found", "file not present")),
    )
    .await;

    let err = ctx
        .client
        .download_file_by_id("4_zgone")
        .build()
        .send()
        .await
        .unwrap_err();

    let server_err = err.as_server_error().unwrap();
    assert_eq!(server_err.status(), 404);
    assert_eq!(server_err.code().as_deref(), Some("not_found"));
}
