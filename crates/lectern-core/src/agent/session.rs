//! Deterministic session-key derivation.
//!
//! Session keys scope a generation to a specific page (and, for
//! personalization, proficiency pair). They carry no state of their
//! own; uniqueness per distinct tuple is the only invariant.

use lectern_types::proficiency::Proficiency;

/// Session key for a summarization of the given page.
pub fn summary_session_key(page_id: &str) -> String {
    format!("summary:{page_id}")
}

/// Session key for a personalization of the given page at the given
/// proficiency pair.
pub fn personalization_session_key(
    page_id: &str,
    programming: Proficiency,
    ai: Proficiency,
) -> String {
    format!("personalize:{page_id}:{programming}:{ai}")
}
