//! Review state enumeration with wire-label mapping
//!
//! The remote side knows nothing about states — it only sees label strings.
//! This module is the single place where those strings live; the rest of the
//! crate works with [`ReviewState`] and never compares raw strings.

/// Review state of a pull request, cycling forward on each toolbar click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ReviewState {
    /// No review label attached
    None = 0,
    /// Review has been requested
    Requested = 1,
    /// Review is in progress
    InReview = 2,
    /// Review finished
    Done = 3,
}

/// Cycle order: `None → Requested → InReview → Done → None`
const CYCLE: [ReviewState; 4] = [
    ReviewState::None,
    ReviewState::Requested,
    ReviewState::InReview,
    ReviewState::Done,
];

impl ReviewState {
    /// The wire label for this state, or `None` for the unlabeled state.
    ///
    /// Labels are the original Japanese review labels and are non-ASCII;
    /// anything that puts one in a URL path must percent-encode it.
    #[inline]
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Requested => Some("レビュー依頼"),
            Self::InReview => Some("レビュー中"),
            Self::Done => Some("レビュー完了"),
        }
    }

    /// Parse a wire label; unrecognized labels are not review labels.
    #[inline]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "レビュー依頼" => Some(Self::Requested),
            "レビュー中" => Some(Self::InReview),
            "レビュー完了" => Some(Self::Done),
            _ => None,
        }
    }

    /// The state immediately following this one in the cycle, wrapping
    /// `Done → None`.
    #[inline]
    pub const fn next(&self) -> Self {
        CYCLE[(*self as usize + 1) % CYCLE.len()]
    }

    /// Human-readable name (for logs and CLI output)
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Requested => "requested",
            Self::InReview => "in-review",
            Self::Done => "done",
        }
    }
}
