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
use b2_common::utils::file_record;
use backblaze::b2::response_traits::{HasFileId, HasFileRecord, HasPartRecord};
use backblaze::b2::types::B2Api;
use backblaze::b2::utils::sha1_hash;
use serde_json::{Value, json};
use wiremock::matchers::{body_bytes, body_partial_json, header, header_exists, method, path};
use wiremock::{Match, Mock, Request, Respond, ResponseTemplate};

const FILE_ID: &str = "4_zlarge_file";

/// Answers part uploads with a part record built from the request.
struct PartResponder;

impl Respond for PartResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let part_number: u16 = request
            .headers
            .get("x-bz-part-number")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        ResponseTemplate::new(200).set_body_json(json!({
            "fileId": FILE_ID,
            "partNumber": part_number,
            "contentLength": request.body.len(),
            "contentSha1": sha1_hash(&request.body),
            "uploadTimestamp": 1_700_000_000_000_i64,
        }))
    }
}

/// Matches a finish call whose checksums are exactly `0`, in order.
struct PartSha1Array(Vec<String>);

impl Match for PartSha1Array {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return false;
        };
        body["fileId"] == FILE_ID && body["partSha1Array"] == json!(self.0)
    }
}

/// Matches a part upload whose `X-Bz-Content-Sha1` is the SHA-1 of its body.
struct PayloadSha1;

impl Match for PayloadSha1 {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("x-bz-content-sha1")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == sha1_hash(&request.body))
    }
}

async fn mount_started(ctx: &TestContext) {
    let mut started = file_record(&ctx.bucket_id, FILE_ID, "backup.tar", "none", 0);
    started["action"] = json!("start");
    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_start_large_file")))
        .and(body_partial_json(json!({
            "bucketId": ctx.bucket_id,
            "fileName": "backup.tar",
            "contentType": "b2/x-auto",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(started))
        .expect(1)
        .mount(&ctx.server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn large_file_parts_finish_in_order() {
    let ctx = TestContext::new_authorized().await;
    mount_started(&ctx).await;

    let parts = [vec![1_u8; 4096], vec![2_u8; 4096], vec![3_u8; 100]];
    let sha1s: Vec<String> = parts.iter().map(|p| sha1_hash(p)).collect();

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_get_upload_part_url")))
        .and(body_partial_json(json!({ "fileId": FILE_ID })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fileId": FILE_ID,
            "uploadUrl": ctx.upload_url("part"),
            "authorizationToken": "part-token",
        })))
        .expect(3)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload/part"))
        .and(header_exists("x-bz-part-number"))
        .and(PayloadSha1)
        .respond_with(PartResponder)
        .expect(3)
        .mount(&ctx.server)
        .await;

    let mut finished = file_record(&ctx.bucket_id, FILE_ID, "backup.tar", "none", 8292);
    finished["contentSha1"] = Value::Null;
    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_finish_large_file")))
        .and(PartSha1Array(sha1s.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(finished))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut upload = ctx
        .client
        .begin_large_file(&ctx.bucket_id, "backup.tar")
        .await
        .unwrap();
    assert_eq!(upload.file_id(), FILE_ID);
    assert_eq!(upload.next_part_number(), 1);

    for (i, part) in parts.iter().enumerate() {
        let resp = upload.upload_part(part.clone()).await.unwrap();
        assert_eq!(resp.file_id().unwrap(), FILE_ID);
        assert_eq!(upload.part_count(), i + 1);
    }
    assert_eq!(upload.next_part_number(), 4);

    let resp = upload.finish().await.unwrap();
    assert_eq!(resp.file_record().unwrap().content_length, 8292);

    let part_numbers: Vec<String> = ctx
        .server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/upload/part")
        .filter_map(|r| r.headers.get("x-bz-part-number"))
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect();
    assert_eq!(part_numbers, vec!["1", "2", "3"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn out_of_band_parts_are_sorted_on_finish() {
    let ctx = TestContext::new_authorized().await;
    mount_started(&ctx).await;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_finish_large_file")))
        .and(PartSha1Array(vec!["aaa".into(), "bbb".into(), "ccc".into()]))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_record(
            &ctx.bucket_id,
            FILE_ID,
            "backup.tar",
            "none",
            30,
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut upload = ctx
        .client
        .begin_large_file(&ctx.bucket_id, "backup.tar")
        .await
        .unwrap();
    upload.add_part(3, "ccc");
    upload.add_part(1, "aaa");
    assert_eq!(upload.add_part(2, "xxx"), None);
    assert_eq!(upload.add_part(2, "bbb").as_deref(), Some("xxx"));

    upload.finish().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn cancel_discards_large_file() {
    let ctx = TestContext::new_authorized().await;
    mount_started(&ctx).await;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_cancel_large_file")))
        .and(body_partial_json(json!({ "fileId": FILE_ID })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accountId": "acct0001",
            "bucketId": ctx.bucket_id,
            "fileId": FILE_ID,
            "fileName": "backup.tar",
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let upload = ctx
        .client
        .begin_large_file(&ctx.bucket_id, "backup.tar")
        .await
        .unwrap();
    let resp = upload.cancel().await.unwrap();
    assert_eq!(resp.file_id().unwrap(), FILE_ID);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn upload_part_sends_payload_sha1() {
    let ctx = TestContext::new_authorized().await;
    let data = vec![9_u8; 5000];
    let sha1 = sha1_hash(&data);

    Mock::given(method("POST"))
        .and(path("/upload/part2"))
        .and(header("Authorization", "part-token"))
        .and(header("X-Bz-Part-Number", "2"))
        .and(header("X-Bz-Content-Sha1", sha1.as_str()))
        .and(body_bytes(data.clone()))
        .respond_with(PartResponder)
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .upload_part(ctx.upload_url("part2"), "part-token", 2, data)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content_sha1().unwrap(), sha1);
    assert_eq!(resp.part().unwrap().part_number, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn upload_part_redirect_is_not_followed() {
    let ctx = TestContext::new_authorized().await;
    mount_started(&ctx).await;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_get_upload_part_url")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fileId": FILE_ID,
            "uploadUrl": ctx.upload_url("part-moved"),
            "authorizationToken": "part-token",
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload/part-moved"))
        .respond_with(
            ResponseTemplate::new(307).insert_header("Location", ctx.upload_url("part-elsewhere")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload/part-elsewhere"))
        .respond_with(PartResponder)
        .expect(0)
        .mount(&ctx.server)
        .await;

    let mut upload = ctx
        .client
        .begin_large_file(&ctx.bucket_id, "backup.tar")
        .await
        .unwrap();
    let err = upload.upload_part(vec![1_u8; 64]).await.unwrap_err();

    let server_err = err.as_server_error().unwrap();
    assert_eq!(server_err.status(), 307);
    assert!(server_err.headers().contains_key("location"));
    assert_eq!(upload.part_count(), 0);
    assert_eq!(upload.next_part_number(), 1);
}
