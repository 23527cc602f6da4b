/*!
 * Continuation-aware document translation.
 *
 * A single completion is capped at `max_output_tokens`, so long documents
 * come back truncated. The translator keeps the conversation going with a
 * short "continue" turn until the closing marker shows up or the iteration
 * budget runs out, stitching the partial outputs together along the way.
 */

use log::{debug, warn};

use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::providers::Provider;
use crate::providers::anthropic::{AnthropicMessage, AnthropicRequest, AnthropicResponse};

use super::chunk::{Chunk, merge_chunk};
use super::prompts::{CONTINUE_PROMPT, MARKDOWN_DOCUMENT, PromptTemplate, TARGET_LANGUAGE};

/// Sampling temperature used for every request
const TEMPERATURE: f32 = 0.0;

/// Protocol state of one document translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    /// A request is outstanding
    AwaitingResponse,
    /// A partial chunk was merged and a continuation is due
    Accumulating,
    /// The closing marker was seen
    Done,
    /// The iteration budget ran out before the closing marker
    Exhausted,
}

/// Whether the returned text is the whole translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Complete,
    Exhausted,
}

/// Result of translating one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// Merged translation text
    pub text: String,
    /// Completion status
    pub status: Completion,
    /// Number of completion requests issued
    pub requests: usize,
}

impl TranslationOutcome {
    pub fn is_complete(&self) -> bool {
        self.status == Completion::Complete
    }
}

/// Settings that shape the request loop
#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    /// Model identifier
    pub model: String,
    /// Output token budget per request
    pub max_output_tokens: u32,
    /// Maximum requests per document
    pub max_iterations: usize,
}

impl From<&Config> for TranslatorSettings {
    fn from(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            max_iterations: config.max_iterations,
        }
    }
}

/// Translates Markdown documents through a completion provider
#[derive(Debug)]
pub struct DocumentTranslator<P> {
    provider: P,
    settings: TranslatorSettings,
    template: PromptTemplate,
}

impl<P> DocumentTranslator<P>
where
    P: Provider<Request = AnthropicRequest, Response = AnthropicResponse>,
{
    /// Create a translator using the default Markdown prompt
    pub fn new(provider: P, settings: TranslatorSettings) -> Self {
        Self {
            provider,
            settings,
            template: PromptTemplate::markdown_translator(),
        }
    }

    /// Use a different prompt template
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn settings(&self) -> &TranslatorSettings {
        &self.settings
    }

    /// Translate `markdown` into `target_language`.
    ///
    /// Returns the merged text even when the iteration budget ran out; use
    /// [`Self::translate_with_outcome`] to tell the two apart.
    pub async fn translate(&self, markdown: &str, target_language: &str) -> Result<String, TranslationError> {
        Ok(self.translate_with_outcome(markdown, target_language).await?.text)
    }

    /// Translate `markdown` and report whether the closing marker was reached
    pub async fn translate_with_outcome(
        &self,
        markdown: &str,
        target_language: &str,
    ) -> Result<TranslationOutcome, TranslationError> {
        let prompt = self
            .template
            .render(&[(MARKDOWN_DOCUMENT, markdown), (TARGET_LANGUAGE, target_language)])?;

        let mut conversation = vec![AnthropicMessage::user(prompt)];
        let mut result = String::new();
        let mut requests = 0;
        let mut state = TranslationState::AwaitingResponse;

        while requests < self.settings.max_iterations {
            debug!("Translation state {:?}, request {}/{}", state, requests + 1, self.settings.max_iterations);

            let request = AnthropicRequest::new(&self.settings.model, self.settings.max_output_tokens)
                .messages(conversation.clone())
                .temperature(TEMPERATURE);
            let response = self.provider.complete(request).await?;
            requests += 1;

            let content = P::extract_text(&response);
            let chunk = Chunk::from_response(&content);
            merge_chunk(&mut result, &chunk.text);

            if chunk.complete {
                state = TranslationState::Done;
                break;
            }

            state = TranslationState::Accumulating;
            debug!("Response {} is partial ({} chars so far), state {:?}", requests, result.len(), state);
            conversation.push(AnthropicMessage::assistant(content));
            conversation.push(AnthropicMessage::user(CONTINUE_PROMPT));
            state = TranslationState::AwaitingResponse;
        }

        let status = if state == TranslationState::Done {
            Completion::Complete
        } else {
            state = TranslationState::Exhausted;
            warn!(
                "Translation stopped after {} request(s) without a closing marker; output is incomplete",
                requests
            );
            Completion::Exhausted
        };
        debug!("Translation finished in state {:?}", state);

        Ok(TranslationOutcome {
            text: result,
            status,
            requests,
        })
    }
}
