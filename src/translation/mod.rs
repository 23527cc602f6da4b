/*!
 * Translation of Markdown documents using an LLM completion provider.
 *
 * - `core`: Continuation-aware translator driving the request loop
 * - `chunk`: Extraction of translated chunks and seam merging
 * - `prompts`: Prompt template with strict placeholder rendering
 * - `record`: Persisted translation header and change-detection gate
 */

// Re-export main types for easier usage
pub use self::core::{Completion, DocumentTranslator, TranslationOutcome, TranslationState, TranslatorSettings};
pub use self::prompts::PromptTemplate;
pub use self::record::{GateDecision, Reason, TranslationRecord, assess, should_translate};

// Submodules
pub mod chunk;
pub mod core;
pub mod prompts;
pub mod record;
