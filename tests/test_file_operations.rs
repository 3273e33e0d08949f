use b2_common::test_context::TestContext;
use b2_common::utils::{error_body, file_record};
use backblaze::b2::response_traits::{
    HasBucketId, HasBucketRecord, HasFileId, HasFileName, HasFileRecord, HasFiles,
    HasKeyRecord, HasNextFileId, HasUploadTicket,
};
use backblaze::b2::types::B2Api;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn get_file_info_decodes_record() {
    let ctx = TestContext::new_authorized().await;
    let mut record = file_record(&ctx.bucket_id, "4_zinfo", "a/b.txt", "sha-ab", 12);
    record["fileInfo"] = json!({ "src_last_modified_millis": "1700000000000" });

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_get_file_info")))
        .and(body_json(json!({ "fileId": "4_zinfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_file_info("4_zinfo")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.file_name().unwrap(), "a/b.txt");
    let record = resp.file_record().unwrap();
    assert_eq!(record.content_length, 12);
    assert_eq!(
        record.file_info.get("src_last_modified_millis").map(String::as_str),
        Some("1700000000000")
    );
    assert!(record.uploaded_at().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_file_version_sends_governance_flag_only_when_set() {
    let ctx = TestContext::new_authorized().await;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_delete_file_version")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fileId": "4_zdel",
            "fileName": "old.txt",
        })))
        .expect(2)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .delete_file_version("4_zdel", "old.txt")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.file_id().unwrap(), "4_zdel");

    ctx.client
        .delete_file_version("4_zdel", "old.txt")
        .bypass_governance(true)
        .build()
        .send()
        .await
        .unwrap();

    let bodies: Vec<Value> = ctx
        .server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == TestContext::api_path("b2_delete_file_version"))
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(
        bodies[0],
        json!({ "fileId": "4_zdel", "fileName": "old.txt" })
    );
    assert_eq!(bodies[1]["bypassGovernance"], json!(true));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_parts_reports_next_part_number() {
    let ctx = TestContext::new_authorized().await;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_list_parts")))
        .and(body_json(json!({
            "fileId": "4_zlarge",
            "startPartNumber": 1,
            "maxPartCount": 2,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "parts": [
                {
                    "fileId": "4_zlarge",
                    "partNumber": 1,
                    "contentLength": 100,
                    "contentSha1": "sha-1",
                    "uploadTimestamp": 1_700_000_000_000_i64,
                },
                {
                    "fileId": "4_zlarge",
                    "partNumber": 2,
                    "contentLength": 100,
                    "contentSha1": "sha-2",
                    "uploadTimestamp": 1_700_000_000_001_i64,
                },
            ],
            "nextPartNumber": 3,
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .list_parts("4_zlarge")
        .start_part_number(1)
        .max_part_count(2)
        .build()
        .send()
        .await
        .unwrap();

    let parts = resp.parts().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1].part_number, 2);
    assert_eq!(parts[1].content_sha1, "sha-2");
    assert_eq!(resp.next_part_number().unwrap(), Some(3));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_unfinished_large_files_pages_by_file_id() {
    let ctx = TestContext::new_authorized().await;
    let mut started = file_record(&ctx.bucket_id, "4_zunfinished", "big.iso", "none", 0);
    started["action"] = json!("start");

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_list_unfinished_large_files")))
        .and(body_partial_json(json!({
            "bucketId": ctx.bucket_id,
            "namePrefix": "big",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [started],
            "nextFileId": null,
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .list_unfinished_large_files(&ctx.bucket_id)
        .name_prefix("big")
        .build()
        .send()
        .await
        .unwrap();

    let files = resp.files().unwrap();
    assert_eq!(files[0].action, "start");
    assert!(resp.next_file_id().unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn get_upload_part_url_returns_ticket() {
    let ctx = TestContext::new_authorized().await;
    ctx.mount_api(
        "b2_get_upload_part_url",
        json!({
            "fileId": "4_zlarge",
            "uploadUrl": ctx.upload_url("p1"),
            "authorizationToken": "part-token",
        }),
    )
    .await;

    let resp = ctx
        .client
        .get_upload_part_url("4_zlarge")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.file_id().unwrap(), "4_zlarge");
    let ticket = resp.upload_ticket().unwrap();
    assert_eq!(ticket.upload_url, ctx.upload_url("p1"));
    assert_eq!(ticket.authorization_token, "part-token");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_bucket_and_key_return_deleted_records() {
    let ctx = TestContext::new_authorized().await;
    ctx.mount_api(
        "b2_delete_bucket",
        json!({
            "accountId": "acct0001",
            "bucketId": ctx.bucket_id,
            "bucketName": ctx.bucket_name,
            "bucketType": "allPrivate",
            "revision": 7,
        }),
    )
    .await;
    ctx.mount_api(
        "b2_delete_key",
        json!({
            "keyName": "reader",
            "applicationKeyId": "key-0001",
            "capabilities": ["readFiles"],
            "accountId": "acct0001",
        }),
    )
    .await;

    let bucket = ctx
        .client
        .delete_bucket(&ctx.bucket_id)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(bucket.bucket_id().unwrap(), ctx.bucket_id);
    assert_eq!(bucket.bucket().unwrap().revision, 7);

    let key = ctx
        .client
        .delete_key("key-0001")
        .build()
        .send()
        .await
        .unwrap()
        .key()
        .unwrap();
    assert_eq!(key.key_name, "reader");
    assert!(key.application_key.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn expired_token_is_reported_with_code() {
    let ctx = TestContext::new_authorized().await;

    Mock::given(method("POST"))
        .and(path(TestContext::api_path("b2_get_file_info")))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body(
            401,
            "expired_auth_token",
            "Authorization token has expired",
        )))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .get_file_info("4_zany")
        .build()
        .send()
        .await
        .unwrap_err();

    let server_err = err.as_server_error().unwrap();
    assert_eq!(server_err.status(), 401);
    assert_eq!(server_err.code().as_deref(), Some("expired_auth_token"));
    assert!(ctx.client.is_authorized());
}
