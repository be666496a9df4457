#![allow(dead_code)]

use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use wiremock::{MockServer, Request, ResponseTemplate};

use rust_edu_console::http::HttpClient;
use rust_edu_console::notify::RecordingNotifier;
use rust_edu_console::services::EduClient;
use rust_edu_console::store::{MemoryTokenStorage, SessionStore, TokenStorage};

pub struct Harness {
    pub server: MockServer,
    pub client: EduClient,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub async fn start() -> Self {
        Self::with_storage(MemoryTokenStorage::new()).await
    }

    pub async fn logged_in(token: &str) -> Self {
        Self::with_storage(MemoryTokenStorage::with_token(token)).await
    }

    async fn with_storage(storage: impl TokenStorage + 'static) -> Self {
        let server = MockServer::start().await;
        let notifier = Arc::new(RecordingNotifier::new());
        let session = Arc::new(SessionStore::restore(Box::new(storage)));
        let http = HttpClient::new(
            server.uri(),
            Duration::from_secs(5),
            "edu-console-test",
            session,
            notifier.clone(),
        )
        .expect("http client");
        Self {
            server,
            client: EduClient::new(Arc::new(http)),
            notifier,
        }
    }

    /// 指定路径收到的请求
    pub async fn requests_to(&self, path: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == path)
            .collect()
    }
}

/// 成功信封
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 200, "msg": "success", "data": data}))
}

/// 业务失败信封（HTTP 200）
pub fn fail(code: i32, msg: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": code, "msg": msg, "data": null}))
}

pub fn page(rows: Value, total: i64) -> ResponseTemplate {
    ok(json!({"list": rows, "total": total}))
}

/// 请求的查询参数
pub fn query_of(request: &Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub fn body_of(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("json body")
}
