use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::app::ports::{HttpClientPort, HttpGetResult};
use crate::common::error::Result;
use crate::config::HttpConfig;
use crate::observability::metrics;

pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    async fn get(&self, url: &str) -> Result<HttpGetResult> {
        tracing::debug!("HTTP GET request to: {}", url);
        let started = Instant::now();

        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                metrics::http::request_error();
                return Err(e.into());
            }
        };
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = resp.bytes().await?.to_vec();

        metrics::http::request_duration(started.elapsed().as_secs_f64());
        metrics::http::payload_bytes(bytes.len());
        if (200..300).contains(&status) {
            metrics::http::request_success();
        } else {
            metrics::http::request_error();
        }
        tracing::debug!("HTTP response: status={}, size={} bytes", status, bytes.len());

        Ok(HttpGetResult { status, bytes, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/films/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results":[]}"#)
            .create_async()
            .await;

        let http = ReqwestHttp::new(&HttpConfig::default()).unwrap();
        let result = http.get(&format!("{}/api/films/", server.url())).await.unwrap();

        assert_eq!(result.status, 200);
        assert!(result.is_success());
        assert_eq!(result.content_type, "application/json");
        assert_eq!(result.bytes, br#"{"results":[]}"#.to_vec());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/planets/999")
            .with_status(404)
            .with_body(r#"{"detail":"Not found"}"#)
            .create_async()
            .await;

        let http = ReqwestHttp::new(&HttpConfig::default()).unwrap();
        let result = http
            .get(&format!("{}/api/planets/999", server.url()))
            .await
            .unwrap();

        assert_eq!(result.status, 404);
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_sends_configured_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "catalog-test/1.0")
            .with_status(200)
            .create_async()
            .await;

        let config = HttpConfig {
            timeout_seconds: Some(5),
            user_agent: "catalog-test/1.0".to_string(),
        };
        let http = ReqwestHttp::new(&config).unwrap();
        http.get(&format!("{}/", server.url())).await.unwrap();

        mock.assert_async().await;
    }
}
