use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::blob::{Blob, file_name_from_disposition};
use crate::config::AppConfig;
use crate::errors::{ClientError, Result};
use crate::models::ApiEnvelope;
use crate::notify::{LOGIN_ROUTE, Notice, Notifier};
use crate::store::SessionStore;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// 单例 HTTP 客户端
///
/// 每个请求只发送一次，不做重试。所有错误都会先通过 `Notifier` 提示，
/// 再以 `Err` 返回给调用方。
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl HttpClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ClientError::config(format!("Failed to build HTTP client: {e}")))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            client,
            base_url,
            session,
            notifier,
        })
    }

    pub fn from_config(
        config: &AppConfig,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        Self::new(
            config.api.base_url.clone(),
            config.request_timeout(),
            &config.api.user_agent,
            session,
            notifier,
        )
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // 构造请求，附加令牌
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// GET，带查询参数
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        self.execute_json(Method::GET, path, builder).await
    }

    /// GET，无查询参数
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, path);
        self.execute_json(Method::GET, path, builder).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.execute_json(Method::POST, path, builder).await
    }

    /// POST，无请求体
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::POST, path);
        self.execute_json(Method::POST, path, builder).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.execute_json(Method::PUT, path, builder).await
    }

    /// PUT，无请求体
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::PUT, path);
        self.execute_json(Method::PUT, path, builder).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::DELETE, path);
        self.execute_json(Method::DELETE, path, builder).await
    }

    /// 下载文件，绕过信封
    pub async fn download<Q>(&self, path: &str, query: &Q, fallback_name: &str) -> Result<Blob>
    where
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        let response = self.dispatch(Method::GET, path, builder).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(file_name_from_disposition)
            .unwrap_or_else(|| fallback_name.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.report(ClientError::from(e)))?;

        // 后端出错时可能以 JSON 信封代替文件返回
        if content_type.starts_with("application/json") {
            self.unwrap_envelope::<serde_json::Value>(&Method::GET, path, &bytes)?;
            return Err(self.report(ClientError::decode(format!(
                "{path} returned JSON instead of a file"
            ))));
        }

        Ok(Blob::new(bytes.to_vec(), file_name, content_type))
    }

    /// 上传文件（multipart，字段名 file）
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(guess_mime(file_name))?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let builder = self.request(Method::POST, path).multipart(form);
        self.execute_json(Method::POST, path, builder).await
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = self.dispatch(method.clone(), path, builder).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.report(ClientError::from(e)))?;

        self.unwrap_envelope(&method, path, &bytes)
    }

    // 解析信封；格式错误和业务失败都在这里提示
    fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        bytes: &[u8],
    ) -> Result<T> {
        let envelope: ApiEnvelope = serde_json::from_slice(bytes).map_err(|e| {
            error!("{} {}: response is not a valid envelope: {}", method, path, e);
            self.report(ClientError::decode(format!("响应格式错误: {e}")))
        })?;
        let code = envelope.code;

        let outcome = envelope.into_outcome::<T>().map_err(|e| {
            error!("{} {}: unexpected data shape: {}", method, path, e.message());
            self.report(ClientError::decode(format!("响应数据格式错误: {}", e.message())))
        })?;
        outcome.into_result().map_err(|e| {
            warn!("{} {} rejected with code {}: {}", method, path, code, e.message());
            self.report(e)
        })
    }

    // 发送请求并处理传输层与 HTTP 状态错误
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Response> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        let response = match builder.header(REQUEST_ID_HEADER, &request_id).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    request_id = %request_id,
                    "{} {} failed after {} ms: {}",
                    method,
                    path,
                    started.elapsed().as_millis(),
                    e
                );
                return Err(self.report(ClientError::from(e)));
            }
        };

        let status = response.status();
        debug!(
            request_id = %request_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "{} {}",
            method,
            path
        );

        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let detail = match response.text().await {
            Ok(body) => serde_json::from_str::<ApiEnvelope>(&body)
                .ok()
                .map(|env| env.msg)
                .filter(|msg| !msg.is_empty())
                .unwrap_or(reason),
            Err(_) => reason,
        };
        Err(self.report(ClientError::from_status(status.as_u16(), detail)))
    }

    // 统一提示；401 时清除令牌并跳转登录页
    fn report(&self, err: ClientError) -> ClientError {
        if matches!(err, ClientError::Unauthorized(_)) {
            if let Err(e) = self.session.clear() {
                warn!("Failed to clear session after 401: {}", e);
            }
            self.notifier.navigate(LOGIN_ROUTE);
        }
        if err.is_surfaced() {
            self.notifier.notify(Notice::error(err.user_message()));
        }
        err
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

fn guess_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".xlsx") {
        super::blob::XLSX_CONTENT_TYPE
    } else if lower.ends_with(".xls") {
        "application/vnd.ms-excel"
    } else if lower.ends_with(".csv") {
        "text/csv"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::store::MemoryTokenStorage;

    fn client(base: &str) -> HttpClient {
        HttpClient::new(
            base,
            Duration::from_secs(30),
            "test",
            Arc::new(SessionStore::restore(Box::new(MemoryTokenStorage::new()))),
            Arc::new(RecordingNotifier::new()),
        )
        .expect("client")
    }

    #[test]
    fn test_url_join() {
        let http = client("http://localhost:8080/api/");
        assert_eq!(http.base_url(), "http://localhost:8080/api");
        assert_eq!(http.url("/students/list"), "http://localhost:8080/api/students/list");
        assert_eq!(http.url("students/1"), "http://localhost:8080/api/students/1");
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("a.XLSX"), super::super::blob::XLSX_CONTENT_TYPE);
        assert_eq!(guess_mime("a.csv"), "text/csv");
        assert_eq!(guess_mime("a.bin"), "application/octet-stream");
    }
}
