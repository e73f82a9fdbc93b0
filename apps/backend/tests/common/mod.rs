//! Common test utilities for integration tests.
//!
//! The generator is replaced by an in-process stub so the tests need no
//! network access.

pub mod fixtures;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use quiz_backend::services::generator::{GeneratorError, QuizGenerator};
use quiz_backend::{app, AppState};
use quiz_core::Difficulty;

/// Generator answering every request with the same outcome.
pub enum StubGenerator {
    Body(String),
    Unavailable,
}

#[async_trait]
impl QuizGenerator for StubGenerator {
    async fn generate(
        &self,
        _topic: &str,
        _difficulty: Difficulty,
    ) -> Result<String, GeneratorError> {
        match self {
            Self::Body(body) => Ok(body.clone()),
            Self::Unavailable => Err(GeneratorError::Status(503)),
        }
    }
}

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context whose generator returns `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::with_generator(StubGenerator::Body(body.into()))
    }

    /// Context whose generator always fails.
    pub fn unavailable() -> Self {
        Self::with_generator(StubGenerator::Unavailable)
    }

    fn with_generator(generator: StubGenerator) -> Self {
        let state = AppState {
            generator: Arc::new(generator),
        };
        Self { app: app(state) }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
