use tracing::debug;

use crate::error::AppError;

use super::classifier::{Category, Route, route};
use super::completion::CompletionClient;
use super::metrics_manager::MetricsManager;
use super::templates::{
    MATH_INTROS, ORDER_VOICE, PLAIN_ANSWER, TRIVIAL_INTROS, TemplatePicker, UNIT_INTROS, choose,
};

pub const MYSTIC_MAX_TOKENS: u32 = 250;
pub const TRIVIAL_MAX_TOKENS: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub category: Category,
    pub text: String,
}

/// Classify, compute or delegate, then wrap. One shot, no retries.
pub async fn generate_reply(
    message: &str,
    completion: &dyn CompletionClient,
    picker: &dyn TemplatePicker,
    metrics: &MetricsManager,
) -> Result<Reply, AppError> {
    let routed = route(message);
    let category = routed.category();
    metrics.increment_category(category).await;
    debug!(category = category.as_str(), "message classified");

    let text = match routed {
        Route::Math { expression, value } => {
            format!("{} {} = {}.", choose(picker, MATH_INTROS), expression, value)
        }
        Route::UnitConversion { sentence } => {
            format!("{} {}", choose(picker, UNIT_INTROS), sentence)
        }
        Route::Trivial => {
            let answer = completion
                .complete(PLAIN_ANSWER, message.trim(), TRIVIAL_MAX_TOKENS)
                .await?;
            format!("{} {}", choose(picker, TRIVIAL_INTROS), answer)
        }
        // The Seeker's words go to the oracle untouched, and come back unwrapped.
        Route::Mystic => completion.complete(ORDER_VOICE, message, MYSTIC_MAX_TOKENS).await?,
    };

    Ok(Reply { category, text })
}
