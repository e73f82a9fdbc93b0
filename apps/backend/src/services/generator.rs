//! Client for the upstream quiz generator.
//!
//! The generator is an opaque text service: it receives a topic and a
//! difficulty and answers with a body shaped like
//! `{ "questions": string | ParsedQuestion[] }`, possibly wrapped in a
//! fenced json block.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use quiz_core::Difficulty;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Generator not configured")]
    NotConfigured,
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Generator returned status {0}")]
    Status(u16),
}

/// Source of raw quiz text.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Return the raw response body for a quiz on `topic`.
    async fn generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<String, GeneratorError>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
    difficulty: Difficulty,
}

/// Generator reached over HTTP.
pub struct HttpGenerator {
    client: Client,
    url: String,
}

impl HttpGenerator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, GeneratorError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl QuizGenerator for HttpGenerator {
    async fn generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<String, GeneratorError> {
        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest { topic, difficulty })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// Stand-in used when no generator URL is configured.
pub struct UnconfiguredGenerator;

#[async_trait]
impl QuizGenerator for UnconfiguredGenerator {
    async fn generate(
        &self,
        _topic: &str,
        _difficulty: Difficulty,
    ) -> Result<String, GeneratorError> {
        Err(GeneratorError::NotConfigured)
    }
}

/// Build the generator described by the configuration.
pub fn from_config(config: &Config) -> Result<Arc<dyn QuizGenerator>, GeneratorError> {
    match &config.generator_url {
        Some(url) => Ok(Arc::new(HttpGenerator::new(
            url.clone(),
            config.generator_timeout,
        )?)),
        None => {
            tracing::warn!("GENERATOR_URL not set, quiz generation is disabled");
            Ok(Arc::new(UnconfiguredGenerator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_generator_fails() {
        let result = UnconfiguredGenerator
            .generate("Rust", Difficulty::Beginner)
            .await;
        assert!(matches!(result, Err(GeneratorError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_unreachable_generator_fails() {
        let generator =
            HttpGenerator::new("http://127.0.0.1:9/generate", Duration::from_secs(1)).unwrap();
        let result = generator.generate("Rust", Difficulty::Advanced).await;
        assert!(matches!(result, Err(GeneratorError::Request(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateRequest {
            topic: "Python",
            difficulty: Difficulty::Intermediate,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "topic": "Python", "difficulty": "intermediate" })
        );
    }

    #[test]
    fn test_status_error_display() {
        assert_eq!(
            GeneratorError::Status(503).to_string(),
            "Generator returned status 503"
        );
    }
}
