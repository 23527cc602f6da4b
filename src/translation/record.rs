/*!
 * Persisted translation records and the change-detection gate.
 *
 * A record is a three line header carrying the fingerprint of the source
 * document it was produced from, followed by the translated body:
 *
 * ```text
 * ---
 * original: <fingerprint>
 * ---
 * <translated markdown>
 * ```
 */

use crate::fingerprint;

/// Header fence line
const HEADER_FENCE: &str = "---";

/// Key of the header line carrying the source fingerprint
const ORIGINAL_KEY: &str = "original";

/// A translated document together with the fingerprint of its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    /// Fingerprint of the source content at translation time
    pub fingerprint: String,
    /// Translated Markdown body
    pub body: String,
}

impl TranslationRecord {
    /// Create a record for `body` translated from `source_content`
    pub fn for_source(source_content: &str, body: impl Into<String>) -> Self {
        Self {
            fingerprint: fingerprint::compute(source_content),
            body: body.into(),
        }
    }

    /// Render the header and body as written to disk
    pub fn render(&self) -> String {
        format!(
            "{HEADER_FENCE}\n{ORIGINAL_KEY}: {}\n{HEADER_FENCE}\n{}",
            self.fingerprint, self.body
        )
    }

    /// Parse a previously written record.
    ///
    /// Only the second line is authoritative: it must read `original: <value>`
    /// with a non-empty value. Anything else yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = text.splitn(4, '\n');
        let _opening = lines.next()?;
        let meta = lines.next()?;

        let (key, value) = meta.split_once(':')?;
        if key.trim() != ORIGINAL_KEY {
            return None;
        }
        let fingerprint = value.trim();
        if fingerprint.is_empty() {
            return None;
        }

        let body = match lines.next() {
            Some(closing) if closing.trim_end() == HEADER_FENCE => lines.next().unwrap_or_default(),
            Some(_) | None => "",
        };

        Some(Self {
            fingerprint: fingerprint.to_string(),
            body: body.to_string(),
        })
    }
}

/// Why a document has to be translated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// No previous translation exists
    Missing,
    /// The previous translation has an unreadable header
    Malformed,
    /// The source changed since the previous translation
    Changed,
}

/// Outcome of the change-detection gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The recorded fingerprint matches the current source
    Skip,
    /// The document must be (re)translated
    Translate(Reason),
}

impl GateDecision {
    pub fn needs_translation(self) -> bool {
        matches!(self, GateDecision::Translate(_))
    }
}

/// Decide whether `source_content` needs translating given the existing record.
///
/// A malformed record counts as no record at all.
pub fn assess(source_content: &str, existing_record: Option<&str>) -> GateDecision {
    let Some(existing) = existing_record else {
        return GateDecision::Translate(Reason::Missing);
    };

    let Some(record) = TranslationRecord::parse(existing) else {
        return GateDecision::Translate(Reason::Malformed);
    };

    if record.fingerprint == fingerprint::compute(source_content) {
        GateDecision::Skip
    } else {
        GateDecision::Translate(Reason::Changed)
    }
}

/// Returns true unless `existing_record` was produced from identical content
pub fn should_translate(source_content: &str, existing_record: Option<&str>) -> bool {
    assess(source_content, existing_record).needs_translation()
}
