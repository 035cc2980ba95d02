// SPDX-License-Identifier: MPL-2.0
//! A single wheel entry and its derived link status.

use crate::config::MAX_CHOICE_TEXT_LEN;

/// Opaque identifier for a choice. Assigned by the store, never reused
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceId(pub(crate) u64);

impl ChoiceId {
    /// Returns the raw value, for display/debugging only.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A user-entered option with derived link status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_link: bool,
}

impl Choice {
    pub(crate) fn new(id: ChoiceId, text: &str) -> Self {
        let text = clamp_text(text);
        let is_link = looks_like_link(&text);
        Self { id, text, is_link }
    }

    #[must_use]
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the label looks like something we can navigate to.
    #[must_use]
    pub fn is_link(&self) -> bool {
        self.is_link
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = clamp_text(text);
        self.is_link = looks_like_link(&self.text);
    }

    /// The URL to open for a link choice, prefixing `https://` when the
    /// label has no scheme.
    #[must_use]
    pub fn link_url(&self) -> String {
        if self.text.starts_with("http") {
            self.text.clone()
        } else {
            format!("https://{}", self.text)
        }
    }
}

/// Link heuristic carried over unchanged from the original behavior:
/// an "http" prefix or a ".com" substring counts as a link. It misses
/// `.org`/`.net` and misfires on ordinary text containing ".com"; the
/// ambiguity is intentional and preserved.
#[must_use]
pub fn looks_like_link(text: &str) -> bool {
    text.starts_with("http") || text.contains(".com")
}

/// Truncates on a character boundary to the configured label cap.
fn clamp_text(text: &str) -> String {
    text.chars().take(MAX_CHOICE_TEXT_LEN).collect()
}
