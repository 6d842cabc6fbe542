mod cli;

pub use cli::ServeOptions;

use crate::prelude::*;
use crate::trivia::{NumbersApi, TriviaProvider};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use numclass_core::classify::{classify, ClassificationResult};
use numclass_core::input::{parse_number, InputError};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub trivia: Arc<dyn TriviaProvider>,
    pub verbose: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    number: Option<String>,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let trivia = NumbersApi::new(
        options.trivia_url.clone(),
        Duration::from_secs(options.trivia_timeout),
    )?;

    let state = AppState {
        trivia: Arc::new(trivia),
        verbose: global.verbose,
    };

    let addr = f!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    let port = listener
        .local_addr()
        .map(|local| local.port())
        .unwrap_or(options.port);
    log::info!("Server is running on port {port}");

    if global.verbose {
        log::info!("Trivia provider: {}", options.trivia_url);
    }

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/classify-number", get(classify_number))
        .layer(cors)
        .with_state(state)
}

async fn classify_number(
    State(state): State<AppState>,
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> Result<Json<ClassificationResult>, Error> {
    let Query(query) = query.map_err(|e| InputError::Malformed(e.body_text()))?;
    let num = parse_number(query.number.as_deref())?;

    // Trial division can run for seconds on large inputs.
    let classification = tokio::task::spawn_blocking(move || classify(num))
        .await
        .map_err(|e| Error::Internal(f!("Classification of {num} failed: {e}")))?;

    let fun_fact = state.trivia.fetch_trivia(num).await?;

    if state.verbose {
        log::info!(
            "Classified {num}: prime={} perfect={} properties={:?} digit_sum={}",
            classification.is_prime,
            classification.is_perfect,
            classification.properties,
            classification.digit_sum
        );
    }

    Ok(Json(classification.with_fun_fact(fun_fact)))
}
