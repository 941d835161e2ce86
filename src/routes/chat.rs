use axum::{Json, extract::State};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    services::{chatbot::generate_reply, metrics_manager::MetricsData},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let span = info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        tone = %payload.tone.trim()
    );

    async move {
        let result = generate_reply(
            &payload.message,
            state.completion.as_ref(),
            state.picker.as_ref(),
            &state.metrics,
        )
        .await;

        match result {
            Ok(reply) => {
                info!(category = reply.category.as_str(), "reply assembled");
                Ok(Json(ChatReply::Reply { reply: reply.text }))
            }
            Err(err) => {
                error!(error = %err, "external completion failed");
                state.metrics.record_failure().await;
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
