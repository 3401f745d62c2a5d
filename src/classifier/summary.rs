// Summary and tag assembly
use super::normalize::{collapse_whitespace, is_space};
use crate::domain::DocumentType;

/// Emitted when the content is blank.
pub const SUMMARY_PLACEHOLDER: &str = "Summary unavailable.";

const ELLIPSIS: &str = "...";

/// Whitespace-collapsed, trimmed content, cut to `max_chars` characters with
/// a trailing ellipsis when longer.
pub fn summarize(content: &str, max_chars: usize) -> String {
    let collapsed = collapse_whitespace(content);
    let cleaned = collapsed.trim_matches(is_space);
    if cleaned.is_empty() {
        return SUMMARY_PLACEHOLDER.to_string();
    }

    if cleaned.chars().count() <= max_chars {
        return cleaned.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut summary: String = cleaned.chars().take(keep).collect();
    summary.push_str(ELLIPSIS);
    summary
}

/// `[document_type]`, plus the topical tag of `top_type` when `top_score`
/// reaches `tag_score`. The topical tag follows the top-ranked type even when
/// the document itself fell back to `GENERAL`.
pub fn suggest_tags(
    document_type: DocumentType,
    top_type: DocumentType,
    top_score: u32,
    tag_score: u32,
) -> Vec<String> {
    let mut tags = vec![document_type.to_string()];

    if top_score >= tag_score
        && let Some(tag) = top_type.topical_tag()
        && !tags.iter().any(|t| t == tag)
    {
        tags.push(tag.to_string());
    }

    tags
}
