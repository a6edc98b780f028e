//! Static feedback list served on `/feedback`.
//!
//! Placeholder content; not backed by the data API.

/// One feedback card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEntry {
    /// Stable identifier.
    pub id: u32,
    /// Card title.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Category badge.
    pub category: &'static str,
}

/// Entries shown on the feedback board.
pub const FEEDBACK_ENTRIES: [FeedbackEntry; 2] = [
    FeedbackEntry {
        id: 1,
        title: "Improve the dark mode design",
        description: "The dark mode has some contrast issues on smaller screens.",
        category: "Feature Request",
    },
    FeedbackEntry {
        id: 2,
        title: "Add multi-language support",
        description: "Allow users to switch languages dynamically.",
        category: "Enhancement",
    },
];
