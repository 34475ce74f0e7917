//! Marker/terminator extraction over completion text.
//!
//! This is a plain substring scan, not a parser. For each occurrence of the
//! marker it collects the text up to the next terminator (or end of text).
//! The scan resumes right after the marker, not after the collected span, so
//! a marker inside a span is found again on the next round.
//!
//! The terminator is a single character. An answer that itself contains the
//! terminator (a newline inside an answer, say) is cut short there.

/// Collect every `marker … terminator` span of `text`, left to right.
///
/// Returns an empty vector when the marker never occurs. Spans may be empty
/// and are returned untouched.
pub fn extract_spans(text: &str, marker: &str, terminator: char) -> Vec<String> {
    let mut spans = Vec::new();
    if marker.is_empty() {
        return spans;
    }

    let mut remaining = text;
    while let Some(pos) = remaining.find(marker) {
        remaining = &remaining[pos + marker.len()..];
        let span = match remaining.find(terminator) {
            Some(end) => &remaining[..end],
            None => remaining,
        };
        spans.push(span.to_string());
    }

    spans
}
