use serde::Serialize;

/// A byte-range text replacement scoped to one tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    /// Byte offset of the start of the replaced span.
    pub start_byte: usize,
    /// Byte offset one past the end of the replaced span.
    pub end_byte: usize,
    /// Text spliced in place of the span.
    pub new_text: String,
}

/// Splices `edits` into `source` and returns the new document text.
///
/// Edits produced by one rule pass over one tree are disjoint. An
/// overlapping pair indicates a defective rule, so the later edit is dropped
/// (first wins) rather than corrupting the document.
pub(super) fn splice(source: &str, edits: &[Edit]) -> String {
    let mut sorted: Vec<&Edit> = edits.iter().collect();
    sorted.sort_by(|a, b| match a.start_byte.cmp(&b.start_byte) {
        std::cmp::Ordering::Equal => b.end_byte.cmp(&a.end_byte),
        other => other,
    });

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in sorted {
        if edit.start_byte < cursor || edit.end_byte > source.len() {
            continue;
        }
        out.push_str(&source[cursor..edit.start_byte]);
        out.push_str(&edit.new_text);
        cursor = edit.end_byte;
    }
    out.push_str(&source[cursor..]);
    out
}
