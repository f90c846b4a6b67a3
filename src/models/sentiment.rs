// src/models/sentiment.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SentimentPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "The demo was great, but support has been slow.")]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Frações (0..=1) de palavras positivas, negativas e neutras.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    /// Soma dos pesos das palavras reconhecidas
    pub score: i32,
    pub sentiment_scores: SentimentScores,
    pub overall_sentiment: SentimentLabel,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
}
