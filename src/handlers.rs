use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::cors;
use crate::error::ProxyError;
use crate::intent::{extract_content, parse_action_or_unknown, system_prompt, Action};
use crate::llm::Message;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Entry point for every path. Only `OPTIONS` and `POST` are served.
pub async fn intent_proxy(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    match method {
        Method::OPTIONS => (StatusCode::OK, cors::full_headers()).into_response(),
        Method::POST => {
            let span = info_span!("intent_proxy", request_id = %Uuid::new_v4());
            let result = classify(&state, &body).instrument(span.clone()).await;
            span.in_scope(|| match result {
                Ok(action) => (StatusCode::OK, cors::full_headers(), Json(action)).into_response(),
                Err(err) => err.into_response(),
            })
        }
        _ => ProxyError::MethodNotAllowed.into_response(),
    }
}

async fn classify(state: &AppState, body: &[u8]) -> Result<Value, ProxyError> {
    let api_key = state
        .api_key
        .api_key()
        .ok_or_else(|| ProxyError::MissingApiKey(state.api_key.name().to_string()))?;

    let request: IntentRequest =
        serde_json::from_slice(body).context("request body is not valid JSON")?;
    let prompt = request.prompt.unwrap_or_default();

    let messages = vec![Message::system(system_prompt()), Message::user(prompt)];
    let envelope = state.llm.chat_completion(&api_key, messages).await?;

    let content =
        extract_content(&envelope).context("unusable content in provider response")?;
    let action = parse_action_or_unknown(&content);

    match Action::recognize(&action) {
        Some(known) => debug!(action = known.name(), "Classified prompt"),
        None => debug!("Model returned an unrecognized result: {}", action),
    }

    Ok(action)
}
