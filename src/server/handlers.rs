//! Route handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use super::error::ApiResult;
use crate::core::Chunk;
use crate::pagination::NO_MORE_CONTENT;
use crate::relay::{QueryParams, Relay};

/// Liveness probe.
pub async fn health_handler() -> &'static str {
    "ok"
}

/// `GET /query?query=..&username=..`: first chunk of the reply as plain text.
pub async fn query_handler(
    State(relay): State<Arc<Relay>>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> ApiResult<String> {
    let Query(params) = params?;
    Ok(relay.query(&params).await?)
}

/// `GET /next`: next parked chunk, or the fallback text when none is left.
pub async fn next_handler(State(relay): State<Arc<Relay>>) -> String {
    relay
        .next_chunk()
        .map_or_else(|| NO_MORE_CONTENT.to_string(), Chunk::into_content)
}
