use crate::prelude::*;
use futures::future::BoxFuture;
use numclass_core::trivia::{fun_fact_from_body, trivia_url};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Source of the `fun_fact` attached to every classification
pub trait TriviaProvider: Send + Sync {
    fn fetch_trivia(&self, number: i64) -> BoxFuture<'_, Result<serde_json::Value, Error>>;
}

/// Trivia provider backed by a numbersapi.com compatible HTTP service
#[derive(Debug, Clone)]
pub struct NumbersApi {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build trivia HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn fetch(&self, number: i64) -> Result<serde_json::Value, Error> {
        let url = trivia_url(&self.base_url, number);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(f!("Failed to fetch trivia for {number}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::UpstreamStatus(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(f!("Failed to read trivia for {number}: {e}")))?;

        Ok(fun_fact_from_body(content_type.as_deref(), body))
    }
}

impl TriviaProvider for NumbersApi {
    fn fetch_trivia(&self, number: i64) -> BoxFuture<'_, Result<serde_json::Value, Error>> {
        Box::pin(self.fetch(number))
    }
}

/// Serve `router` on an ephemeral local port and return its base URL
#[cfg(test)]
pub(crate) async fn spawn_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    f!("http://{addr}")
}
