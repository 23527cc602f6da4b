/*!
 * Prompt templates for Markdown translation.
 *
 * Templates use `{{NAME}}` placeholders. Rendering is strict: every
 * placeholder needs a value and every supplied value needs a placeholder,
 * otherwise rendering fails with `TranslationError::Template`.
 */

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::TranslationError;

/// Regex for matching `{{NAME}}` placeholders
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid placeholder regex")
});

/// Placeholder for the source document
pub const MARKDOWN_DOCUMENT: &str = "MARKDOWN_DOCUMENT";

/// Placeholder for the target language name
pub const TARGET_LANGUAGE: &str = "TARGET_LANGUAGE";

/// Opening delimiter the model wraps its translation in
pub const OPEN_MARKER: &str = "<translated_document>";

/// Closing delimiter marking a finished translation
pub const CLOSE_MARKER: &str = "</translated_document>";

/// User turn asking the model to resume inside the open delimiter
pub const CONTINUE_PROMPT: &str = "continue with <translated_document>";

/// Instruction template for translating a Markdown document.
pub const MARKDOWN_TRANSLATOR: &str = r#"You are tasked with translating a technical Markdown document from English to a specified target language. Your goal is to produce an accurate and natural-sounding translation while preserving the original Markdown formatting and technical terminology.

Here is the Markdown document to be translated:

<markdown_document>
{{MARKDOWN_DOCUMENT}}
</markdown_document>

The target language for this translation is:

<target_language>
{{TARGET_LANGUAGE}}
</target_language>

Please follow these guidelines when translating:

1. Preserve all Markdown syntax and formatting, including headings, lists, code blocks, and links.
2. Maintain the original structure and organization of the document.
3. Translate the content accurately, ensuring that the meaning and tone of the original text are preserved.
4. For technical terms, consider the following:
   a. If there is a widely accepted translation in the target language, use it.
   b. If no standard translation exists, you may keep the original English term and provide a translation in parentheses the first time it appears.
   c. For acronyms, provide the full translated term with the original acronym in parentheses on first use.
5. Do not translate content within code blocks or code snippets.
6. Ensure that any placeholders or variables in the original text remain unchanged.
7. Adapt any culture-specific examples or references to be appropriate for the target language audience, if necessary.

Before you begin the translation, take a moment to review the entire document and identify any potential challenges or areas that may require special attention.

Please provide your translation inside <translated_document> tags. Ensure that the translated document maintains the original Markdown formatting and structure."#;

/// A prompt template with named placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default Markdown translator template.
    pub fn markdown_translator() -> Self {
        Self::new(MARKDOWN_TRANSLATOR)
    }

    /// Names of all placeholders in the template, sorted and deduplicated.
    pub fn placeholders(&self) -> BTreeSet<&str> {
        PLACEHOLDER_REGEX
            .captures_iter(&self.template)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Render the template with the given values.
    ///
    /// Substitution is a single pass over the template, so placeholder-like
    /// text inside a value is inserted literally.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, TranslationError> {
        let values: HashMap<&str, &str> = values.iter().copied().collect();
        let placeholders = self.placeholders();

        let missing: Vec<&str> = placeholders
            .iter()
            .filter(|name| !values.contains_key(*name))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(TranslationError::Template(format!(
                "no value supplied for placeholder(s): {}",
                missing.join(", ")
            )));
        }

        let mut unused: Vec<&str> = values
            .keys()
            .filter(|name| !placeholders.contains(*name))
            .copied()
            .collect();
        if !unused.is_empty() {
            unused.sort_unstable();
            return Err(TranslationError::Template(format!(
                "template has no placeholder(s) named: {}",
                unused.join(", ")
            )));
        }

        let rendered = PLACEHOLDER_REGEX.replace_all(&self.template, |caps: &Captures| {
            values.get(&caps[1]).copied().unwrap_or_default().to_string()
        });
        Ok(rendered.into_owned())
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::markdown_translator()
    }
}
