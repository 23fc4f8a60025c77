//! Application messages

/// Application messages
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Star rating
    RatingChanged(f32),
    RatingCompleted,

    // Heart rating (custom content)
    HeartsChanged(f32),
    HeartsCompleted,

    // Settings
    DraggingToggled(bool),
    TappingToggled(bool),
    MaxRatingSelected(u32),
    DarkModeToggled(bool),

    /// Clear both ratings
    Reset,
}
