/*!
 * Mock provider implementation for testing.
 *
 * The mock speaks the same request/response types as the Anthropic client
 * and plays back a script of response texts:
 * - `MockProvider::scripted(..)` - Returns the scripted texts in order, repeating the last one
 * - `MockProvider::failing()` - Always fails with an error
 *
 * Every request is recorded so tests can inspect the conversation that was sent.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::anthropic::{AnthropicRequest, AnthropicResponse};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Play back responses in order; the last one repeats once the script runs out
    Scripted(Vec<String>),
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Requests received so far
    requests: Arc<Mutex<Vec<AnthropicRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that plays back `responses` in order
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MockBehavior::Scripted(responses.into_iter().map(Into::into).collect()))
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Snapshot of all requests received
    pub fn requests(&self) -> Vec<AnthropicRequest> {
        self.requests.lock().clone()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
            requests: Arc::clone(&self.requests),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    type Request = AnthropicRequest;
    type Response = AnthropicResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request);

        match &self.behavior {
            MockBehavior::Scripted(responses) => {
                let text = responses
                    .get(count)
                    .or_else(|| responses.last())
                    .cloned()
                    .unwrap_or_default();
                Ok(AnthropicResponse::from_text(text))
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated provider failure".to_string(),
                status_code: 500,
            }),
        }
    }

    fn extract_text(response: &Self::Response) -> String {
        response
            .content
            .first()
            .map(|c| c.text.clone())
            .unwrap_or_default()
    }
}
