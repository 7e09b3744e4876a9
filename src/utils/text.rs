//! Text display helpers
//!
//! List rows have limited width, so patient names and appointment notes are
//! cut down before rendering. Truncation counts characters rather than
//! bytes so accented names ("José", "Conceição") never split mid-character.

use crate::constants::ELLIPSIS;

/// Truncate text to `max_len` characters, appending "..." when it was cut.
///
/// Text at or under the limit is returned unchanged. `max_len` does not
/// count the marker, so a truncated result is always `max_len + 3`
/// characters; with `max_len` of 0 only the marker remains.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_len).collect();
    format!("{kept}{ELLIPSIS}")
}
