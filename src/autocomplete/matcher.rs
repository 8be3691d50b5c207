/// Character range of the matched part of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Start position (0-indexed, in characters not bytes)
    pub start: usize,
    /// Length of match in characters
    pub len: usize,
}

impl HighlightSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

pub struct SuggestionMatcher;

impl SuggestionMatcher {
    /// Candidates containing `query` case-insensitively, in their original
    /// order. An empty query matches nothing.
    pub fn filter(query: &str, candidates: &[String]) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();
        candidates
            .iter()
            .filter(|candidate| candidate.to_lowercase().contains(&query_lower))
            .cloned()
            .collect()
    }

    /// First case-insensitive occurrence of `query` in `text`
    pub fn highlight_span(text: &str, query: &str) -> Option<HighlightSpan> {
        if query.is_empty() {
            return None;
        }

        let text_lower = text.to_lowercase();
        let byte_pos = text_lower.find(&query.to_lowercase())?;

        // Lowercasing can change the char count of some scripts, so clamp to the original
        let text_len = text.chars().count();
        let start = text_lower[..byte_pos].chars().count().min(text_len);
        let len = query.chars().count().min(text_len - start);

        Some(HighlightSpan { start, len })
    }

    /// Split `text` into the parts before, inside and after `span`
    pub fn split_highlight(text: &str, span: HighlightSpan) -> (&str, &str, &str) {
        let start = byte_offset(text, span.start);
        let end = byte_offset(text, span.end()).max(start);
        (&text[..start], &text[start..end], &text[end..])
    }
}

fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(byte_pos, _)| byte_pos)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
