/*!
 * Extraction of translated chunks from model responses and merging of
 * consecutive chunks into one document.
 */

use super::prompts::{CLOSE_MARKER, OPEN_MARKER};

/// Translated text pulled out of a single response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Trimmed translated text
    pub text: String,
    /// Whether the closing marker was seen
    pub complete: bool,
}

impl Chunk {
    /// Classify a raw response.
    ///
    /// The response is complete iff it contains the closing marker. The text
    /// starts after the opening marker when one is present and stops at the
    /// first closing marker that follows.
    pub fn from_response(response: &str) -> Self {
        let complete = response.contains(CLOSE_MARKER);

        let body = match response.split_once(OPEN_MARKER) {
            Some((_, after_open)) => after_open,
            None => response,
        };
        let text = match body.split_once(CLOSE_MARKER) {
            Some((before_close, _)) => before_close,
            None => body,
        };

        Self {
            text: text.trim().to_string(),
            complete,
        }
    }
}

/// Append `chunk` to `accumulated` on a fresh line.
///
/// When the chunk starts with the exact last line of `accumulated`, that line
/// is dropped first so the seam is not duplicated. Only the last line is
/// considered; longer overlaps are kept as-is.
pub fn merge_chunk(accumulated: &mut String, chunk: &str) {
    if chunk.is_empty() {
        return;
    }
    if accumulated.is_empty() {
        accumulated.push_str(chunk);
        return;
    }

    let last_line_start = accumulated.rfind('\n').map_or(0, |idx| idx + 1);
    let last_line = &accumulated[last_line_start..];

    if !last_line.is_empty() && chunk.starts_with(last_line) {
        accumulated.truncate(last_line_start);
        if accumulated.ends_with('\n') {
            accumulated.pop();
        }
    }

    if !accumulated.is_empty() {
        accumulated.push('\n');
    }
    accumulated.push_str(chunk);
}
