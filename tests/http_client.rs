mod common;

use common::{Harness, fail, ok};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

use rust_edu_console::errors::ClientError;
use rust_edu_console::http::HttpClient;
use rust_edu_console::http::client::REQUEST_ID_HEADER;
use rust_edu_console::notify::{LOGIN_ROUTE, RecordingNotifier};
use rust_edu_console::store::{MemoryTokenStorage, SessionStore};

#[tokio::test]
async fn test_success_envelope_unwraps_data() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/students/7"))
        .and(header_exists(REQUEST_ID_HEADER))
        .respond_with(ok(json!({"id": 7, "name": "王小明"})))
        .expect(1)
        .mount(&h.server)
        .await;

    let student: Value = h.client.resource("/students").get(7).await.expect("get");
    assert_eq!(student["name"], "王小明");
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_business_failure_is_toasted_once() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/students/7"))
        .respond_with(fail(500, "学员不存在或已删除"))
        .mount(&h.server)
        .await;

    let err = h.client.resource("/students").get(7).await.expect_err("failure");
    assert_eq!(err, ClientError::Business("学员不存在或已删除".to_string()));
    assert_eq!(h.notifier.errors(), vec!["学员不存在或已删除".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_clears_token_and_redirects() {
    let h = Harness::logged_in("stale-token").await;
    Mock::given(method("GET"))
        .and(path("/auth/info"))
        .and(header("Authorization", "Bearer stale-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    let err = h.client.auth().profile().await.expect_err("401");
    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert!(!h.client.session().is_authenticated());
    assert_eq!(h.notifier.routes(), vec![LOGIN_ROUTE.to_string()]);
    assert_eq!(h.notifier.errors(), vec!["登录已过期，请重新登录".to_string()]);
}

#[tokio::test]
async fn test_status_codes_map_to_messages() {
    let h = Harness::logged_in("t").await;
    for (status, expected) in [
        (403, "没有权限执行此操作"),
        (404, "请求的资源不存在"),
        (500, "服务器内部错误"),
        (502, "请求失败: HTTP 502: Bad Gateway"),
    ] {
        let route = format!("/status/{status}");
        Mock::given(method("GET"))
            .and(path(route.as_str()))
            .respond_with(ResponseTemplate::new(status))
            .mount(&h.server)
            .await;
        let result: Result<Value, _> = h.client.http().get_json(&route).await;
        assert!(result.is_err(), "status {status} should fail");
        assert_eq!(h.notifier.errors().last().map(String::as_str), Some(expected));
    }
    // 非 401 不清除令牌
    assert!(h.client.session().is_authenticated());
    assert!(h.notifier.routes().is_empty());
}

#[tokio::test]
async fn test_error_body_message_is_preferred() {
    let h = Harness::start().await;
    Mock::given(method("DELETE"))
        .and(path("/classes/3"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"code": 409, "msg": "班级下仍有学员", "data": null})),
        )
        .mount(&h.server)
        .await;

    let err = h.client.classes().delete(3).await.expect_err("conflict");
    assert_eq!(err, ClientError::Http("HTTP 409: 班级下仍有学员".to_string()));
}

#[tokio::test]
async fn test_download_bypasses_envelope() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/students/export"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Content-Disposition",
                    "attachment; filename*=UTF-8''%E5%AD%A6%E5%91%98.xlsx",
                )
                .set_body_raw(b"PK\x03\x04fake".to_vec(), "application/octet-stream"),
        )
        .mount(&h.server)
        .await;

    let blob = h.client.students().export(&()).await.expect("export");
    assert_eq!(blob.file_name, "学员.xlsx");
    assert_eq!(&blob.bytes[..2], b"PK");
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_download_reports_json_error_envelope() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/contracts/9/print"))
        .respond_with(fail(400, "合同尚未生效，无法打印"))
        .mount(&h.server)
        .await;

    let err = h.client.contracts().print(9).await.expect_err("json instead of file");
    assert_eq!(err, ClientError::Business("合同尚未生效，无法打印".to_string()));
    assert_eq!(h.notifier.errors(), vec!["合同尚未生效，无法打印".to_string()]);
}

#[tokio::test]
async fn test_network_failure_is_surfaced() {
    let notifier = Arc::new(RecordingNotifier::new());
    // 没有服务监听的端口
    let http = HttpClient::new(
        "http://127.0.0.1:9",
        Duration::from_secs(2),
        "edu-console-test",
        Arc::new(SessionStore::restore(Box::new(MemoryTokenStorage::new()))),
        notifier.clone(),
    )
    .expect("http client");

    let result: Result<Value, _> = http.get_json("/students/1").await;
    let err = result.expect_err("connection refused");
    assert!(matches!(err, ClientError::Network(_) | ClientError::Timeout(_)));
    assert_eq!(notifier.errors().len(), 1);
}

#[tokio::test]
async fn test_non_envelope_body_is_surfaced() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/students/7"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html>gateway</html>".to_vec(),
            "text/html",
        ))
        .mount(&h.server)
        .await;

    let err = h.client.resource("/students").get(7).await.expect_err("html body");
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(h.notifier.errors(), vec!["服务器响应格式错误".to_string()]);
}

#[tokio::test]
async fn test_mismatched_data_shape_is_surfaced() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/students/7"))
        .respond_with(ok(json!("not a student")))
        .mount(&h.server)
        .await;

    let err = h.client.students().get(7).await.expect_err("wrong shape");
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(h.notifier.errors().len(), 1);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/students/1"))
        .respond_with(ok(json!({"id": 1})).set_delay(Duration::from_millis(800)))
        .mount(&h.server)
        .await;

    let notifier = Arc::new(RecordingNotifier::new());
    let http = HttpClient::new(
        h.server.uri(),
        Duration::from_millis(100),
        "edu-console-test",
        Arc::new(SessionStore::restore(Box::new(MemoryTokenStorage::new()))),
        notifier.clone(),
    )
    .expect("http client");

    let result: Result<Value, _> = http.get_json("/students/1").await;
    let err = result.expect_err("timed out");
    assert!(matches!(err, ClientError::Timeout(_)));
    assert_eq!(notifier.errors(), vec!["请求超时，请稍后重试".to_string()]);
}
