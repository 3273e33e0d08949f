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
use backblaze::b2::response_traits::{HasFiles, HasNextFileId, HasNextFileName};
use backblaze::b2::types::B2Api;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_file_names_pages_until_exhausted() {
    let ctx = TestContext::new_authorized().await;
    let b = &ctx.bucket_id;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_list_file_names")))
        .and(body_partial_json(json!({ "bucketId": b, "startFileName": "c.txt" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [file_record(b, "4_z3", "c.txt", "sha-c", 3)],
            "nextFileName": null,
        })))
        .with_priority(1)
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_list_file_names")))
        .and(body_partial_json(json!({ "bucketId": b, "maxFileCount": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [
                file_record(b, "4_z1", "a.txt", "sha-a", 1),
                file_record(b, "4_z2", "b.txt", "sha-b", 2),
            ],
            "nextFileName": "c.txt",
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut names = Vec::new();
    let mut next: Option<String> = None;
    loop {
        let req = ctx.client.list_file_names(b).max_file_count(2);
        let req = match next {
            Some(start) => req.start_file_name(start).build(),
            None => req.build(),
        };
        let page = req.send().await.unwrap();
        names.extend(page.files().unwrap().into_iter().map(|f| f.file_name));
        next = page.next_file_name().unwrap();
        if next.is_none() {
            break;
        }
    }

    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_file_versions_reports_both_cursors() {
    let ctx = TestContext::new_authorized().await;
    let b = &ctx.bucket_id;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_list_file_versions")))
        .and(body_partial_json(json!({
            "bucketId": b,
            "prefix": "logs/",
            "delimiter": "/",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [file_record(b, "4_zv1", "logs/a.log", "sha-a", 10)],
            "nextFileName": "logs/b.log",
            "nextFileId": "4_zv2",
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let page = ctx
        .client
        .list_file_versions(b)
        .prefix("logs/")
        .delimiter("/")
        .build()
        .send()
        .await
        .unwrap();

    let files = page.files().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_id.as_deref(), Some("4_zv1"));
    assert_eq!(page.next_file_name().unwrap().as_deref(), Some("logs/b.log"));
    assert_eq!(page.next_file_id().unwrap().as_deref(), Some("4_zv2"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn download_authorization_duration_is_not_clamped() {
    let ctx = TestContext::new_authorized().await;

    for duration in [0_u64, 604_800, 10_000_000] {
        Mock::given(method("POST"))
            .and(path(TestContext::api_path("b2_get_download_authorization")))
            .and(body_partial_json(json!({
                "bucketId": ctx.bucket_id,
                "fileNamePrefix": "public/",
                "validDurationInSeconds": duration,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "bucketId": ctx.bucket_id,
                "fileNamePrefix": "public/",
                "authorizationToken": format!("dl-token-{duration}"),
            })))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let resp = ctx
            .client
            .get_download_authorization(&ctx.bucket_id, "public/", duration)
            .build()
            .send()
            .await
            .unwrap();
        assert_eq!(
            resp.authorization_token().unwrap(),
            format!("dl-token-{duration}")
        );
    }
}
