use anyhow::Result;
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use search_core::{IndexStats, Occurrence, SearchEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    /// False is the no-matches signal: neither keyword is indexed.
    pub matched: bool,
    pub took_s: f64,
    pub results: Vec<String>,
}

/// Shared, read-only state. The engine is fully built before the router exists.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

/// Builds the engine from the corpus files, then the router around it.
pub fn build_app(docs_file: &str, noise_file: &str) -> Result<Router> {
    let mut engine = SearchEngine::new();
    engine.make_index(docs_file, noise_file)?;
    let stats = engine.stats();
    tracing::info!(num_docs = stats.num_docs, num_keywords = stats.num_keywords, "index loaded");
    Ok(router(engine))
}

pub fn router(engine: SearchEngine) -> Router {
    let app_state = AppState { engine: Arc::new(engine) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let hits = state.engine.top5_search(&params.kw1, &params.kw2);
    let matched = hits.is_some();
    let elapsed = start.elapsed();
    Json(SearchResponse {
        kw1: params.kw1,
        kw2: params.kw2,
        matched,
        took_s: elapsed.as_secs_f64(),
        results: hits.unwrap_or_default(),
    })
}

pub async fn keyword_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<Occurrence>>, (StatusCode, String)> {
    match state.engine.index().get(&keyword) {
        Some(occs) => Ok(Json(occs.to_vec())),
        None => Err((StatusCode::NOT_FOUND, format!("keyword not indexed: {keyword}"))),
    }
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<IndexStats> {
    Json(state.engine.stats())
}
