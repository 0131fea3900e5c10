//! Discovery handshake and tool invocation handlers

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::State,
    http::HeaderMap,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use futures::stream::{self, Stream, StreamExt};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::mcp::types::FetchProductsArgs;
use crate::mcp::{tool_descriptors, tool_summaries, McpEnvelope, McpReply, ToolAnnouncement};
use crate::mcp::FETCH_PRODUCTS;
use crate::state::AppState;

/// `GET /discovery` — one-time capability announcement over SSE
///
/// Emits a leading comment line (forces proxies to flush), then exactly one
/// data line carrying the tool list, then stays idle until the client
/// disconnects. Keep-alive comments are sent so intermediaries hold the
/// connection open; no further data events follow.
pub async fn discovery(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    if state.config.protect_discovery {
        state.gate.check(&headers)?;
    }

    let announcement = ToolAnnouncement::new(tool_descriptors());
    let payload = serde_json::to_string(&announcement)?;
    tracing::debug!("discovery handshake opened");

    let handshake = stream::iter([
        Ok::<Event, Infallible>(Event::default().comment("ok")),
        Ok(Event::default().data(payload)),
    ]);
    let stream: std::pin::Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>> =
        Box::pin(handshake.chain(stream::pending()));

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    ))
}

/// `POST /invoke` — multiplexed envelope dispatch
///
/// The bearer gate runs first; a rejected caller triggers zero upstream calls.
pub async fn invoke(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult<Json<McpReply>> {
    state.gate.check(&headers)?;

    let envelope: McpEnvelope = serde_json::from_value(body)
        .map_err(|e| ApiError::UnsupportedRequest(format!("invalid envelope: {}", e)))?;

    match envelope {
        McpEnvelope::McpListTools => Ok(Json(McpReply::McpListTools {
            tools: tool_summaries(),
        })),
        McpEnvelope::McpCall {
            tool_name,
            arguments,
        } => match tool_name.as_str() {
            FETCH_PRODUCTS => {
                let args: FetchProductsArgs = if arguments.is_null() {
                    FetchProductsArgs::default()
                } else {
                    serde_json::from_value(arguments).map_err(|e| {
                        ApiError::UnsupportedRequest(format!("invalid arguments: {}", e))
                    })?
                };

                let limit = args.limit.or(state.config.default_limit);
                let products = state.apex.fetch_products(limit).await?;

                Ok(Json(McpReply::McpCallResult {
                    result: serde_json::to_value(products)?,
                }))
            }
            other => Err(ApiError::UnsupportedRequest(format!(
                "unknown tool: {}",
                other
            ))),
        },
    }
}
