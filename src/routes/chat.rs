// src/routes/chat.rs
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::AppError,
    message::{ChatData, ChatRequest, Envelope, HealthResponse},
    services::classifier::{self, Route},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    // A malformed body still gets the envelope shape, not axum's
    // plain-text rejection.
    let Json(payload) = payload
        .map_err(|rejection| AppError::BadRequest(format!("message: {}", rejection.body_text())))?;

    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(
            "message: must not be empty".to_string(),
        ));
    }
    let message = escape_html(trimmed);

    let data = match classifier::classify(&message) {
        Route::Faculty => ChatData::Faculty(state.store.all_faculty()?),
        Route::Rooms => ChatData::Rooms(state.store.available_rooms()?),
        // The provider sees the escaped message as typed, not the
        // lower-cased form the classifier matched on.
        Route::Generate => ChatData::Text(state.provider.generate(&message).await?),
    };

    Ok(Json(Envelope::ok(data)))
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        db_state: if state.store.is_loaded() { 1 } else { 0 },
        timestamp: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0),
    })
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"wave" & 'go'</b>"#),
            "&lt;b&gt;&quot;wave&quot; &amp; &#x27;go&#x27;&lt;&#x2F;b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
