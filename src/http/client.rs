// src/http/client.rs
//! JSON-over-HTTP client with bearer auth and response interceptors

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::download::Download;
use super::interceptors::ResponseInterceptor;
use super::session::Session;
use crate::common::helpers::filename_from_disposition;
use crate::common::{ClientConfig, ClientError, ClientResult};

/// Query string as ordered key/value pairs.
pub type QueryPairs = Vec<(String, String)>;

/// Empty query string.
pub const NO_QUERY: &[(&str, &str)] = &[];

/// One HTTP client per backend. Every request carries the session's bearer
/// token; every failure is normalized into [`ClientError`] and handed to the
/// registered interceptors before being returned. Nothing is retried or
/// cached.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            interceptors: Vec::new(),
        })
    }

    /// Registers an interceptor; they run in registration order.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
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

    // ========================================================================
    // JSON requests
    // ========================================================================

    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.send(Method::GET, path, request).await?;
        self.read_json(Method::GET, path, response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.send(Method::POST, path, request).await?;
        self.read_json(Method::POST, path, response).await
    }

    /// PUT that tolerates `204 No Content`, returning `None` in that case.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ClientResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.put(self.url(path)).json(body);
        let response = self.send(Method::PUT, path, request).await?;
        self.read_optional_json(Method::PUT, path, response).await
    }

    /// POST without a body, for action endpoints such as screening.
    pub async fn post_action<T>(&self, path: &str) -> ClientResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path));
        let response = self.send(Method::POST, path, request).await?;
        self.read_optional_json(Method::POST, path, response).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.http.delete(self.url(path));
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }

    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).multipart(form);
        let response = self.send(Method::POST, path, request).await?;
        self.read_json(Method::POST, path, response).await
    }

    // ========================================================================
    // Binary requests
    // ========================================================================

    pub async fn get_bytes<Q>(&self, path: &str, query: &Q) -> ClientResult<Download>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.send(Method::GET, path, request).await?;
        self.read_download(Method::GET, path, response).await
    }

    pub async fn post_bytes<B>(&self, path: &str, body: &B) -> ClientResult<Download>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.send(Method::POST, path, request).await?;
        self.read_download(Method::POST, path, response).await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> ClientResult<Response> {
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let started = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.fail(&method, path, ClientError::Network(e)).await),
        };

        let status = response.status();
        debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API response"
        );

        if status.is_success() {
            return Ok(response);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Err(self.fail(&method, path, ClientError::Network(e)).await),
        };
        let err = ClientError::from_response(status.as_u16(), &body);
        Err(self.fail(&method, path, err).await)
    }

    async fn fail(&self, method: &Method, path: &str, err: ClientError) -> ClientError {
        for interceptor in &self.interceptors {
            interceptor
                .on_error(method.as_str(), path, &err, &self.session)
                .await;
        }
        err
    }

    async fn read_json<T>(&self, method: Method, path: &str, response: Response) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        match self.read_optional_json(method.clone(), path, response).await? {
            Some(value) => Ok(value),
            None => {
                let err = ClientError::Decode("empty response body".to_string());
                Err(self.fail(&method, path, err).await)
            }
        }
    }

    async fn read_optional_json<T>(
        &self,
        method: Method,
        path: &str,
        response: Response,
    ) -> ClientResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Err(self.fail(&method, path, ClientError::Network(e)).await),
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(self.fail(&method, path, ClientError::Decode(e.to_string())).await),
        }
    }

    async fn read_download(
        &self,
        method: Method,
        path: &str,
        response: Response,
    ) -> ClientResult<Download> {
        let headers = response.headers();
        let file_name = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition);
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.fail(&method, path, ClientError::Network(e)).await),
        };

        Ok(Download {
            file_name,
            content_type,
            bytes,
        })
    }
}
