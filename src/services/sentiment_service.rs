// src/services/sentiment_service.rs
//
// Análise de sentimento por léxico (pesos no estilo AFINN, de -5 a +5).
// Não há modelo nem chamada externa: só a lista de palavras abaixo.

use crate::{
    common::error::AppError,
    models::sentiment::{SentimentAnalysis, SentimentLabel, SentimentScores},
};

const LEXICON: &[(&str, i32)] = &[
    ("amazing", 4),
    ("awesome", 4),
    ("bad", -3),
    ("best", 3),
    ("better", 2),
    ("broken", -1),
    ("cancel", -1),
    ("complaint", -2),
    ("confused", -2),
    ("delay", -1),
    ("delayed", -1),
    ("disappointed", -2),
    ("disappointing", -2),
    ("easy", 1),
    ("effective", 2),
    ("excellent", 3),
    ("fail", -2),
    ("failed", -2),
    ("fantastic", 4),
    ("fast", 1),
    ("fine", 2),
    ("good", 3),
    ("great", 3),
    ("happy", 3),
    ("hate", -3),
    ("helpful", 2),
    ("horrible", -3),
    ("impressed", 3),
    ("issue", -1),
    ("like", 2),
    ("love", 3),
    ("nice", 3),
    ("pleased", 3),
    ("poor", -2),
    ("problem", -2),
    ("recommend", 2),
    ("sad", -2),
    ("satisfied", 2),
    ("slow", -2),
    ("success", 2),
    ("terrible", -3),
    ("thanks", 2),
    ("unhappy", -2),
    ("useless", -2),
    ("wonderful", 4),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

fn weight(word: &str) -> Option<i32> {
    LEXICON.iter().find(|(w, _)| *w == word).map(|(_, score)| *score)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[derive(Clone, Default)]
pub struct SentimentService;

impl SentimentService {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> Result<SentimentAnalysis, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::InvalidField("Informe um texto para analisar.".into()));
        }
        Ok(analyze(text))
    }
}

/// Pontua o texto. As frações são sobre TODAS as palavras do texto,
/// então positivo + negativo + neutro = 1.
pub fn analyze(text: &str) -> SentimentAnalysis {
    let tokens = tokenize(text);

    let mut score = 0;
    let mut positive_words = Vec::new();
    let mut negative_words = Vec::new();

    for token in &tokens {
        match weight(token) {
            Some(w) if w > 0 => {
                score += w;
                positive_words.push(token.clone());
            }
            Some(w) if w < 0 => {
                score += w;
                negative_words.push(token.clone());
            }
            _ => {}
        }
    }

    let sentiment_scores = if tokens.is_empty() {
        SentimentScores { positive: 0.0, negative: 0.0, neutral: 1.0 }
    } else {
        let total = tokens.len() as f64;
        let positive = positive_words.len() as f64 / total;
        let negative = negative_words.len() as f64 / total;
        SentimentScores { positive, negative, neutral: 1.0 - positive - negative }
    };

    let overall_sentiment = match score {
        s if s > 0 => SentimentLabel::Positive,
        s if s < 0 => SentimentLabel::Negative,
        _ => SentimentLabel::Neutral,
    };

    SentimentAnalysis {
        score,
        sentiment_scores,
        overall_sentiment,
        positive_words,
        negative_words,
    }
}
