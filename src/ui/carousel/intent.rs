use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Move to the next slide, wrapping after the last one.
    Advance,
    /// Move to the previous slide, wrapping before the first one.
    Previous,
    /// Select a slide directly. Indices past the end are ignored.
    JumpTo { index: usize },
    /// Stop automatic advancement (pointer entered the slides).
    Pause,
    /// Allow automatic advancement again unless motion is reduced.
    Resume,
    SetReducedMotion { enabled: bool },
    /// Move keyboard focus to an indicator. Indices past the end are ignored.
    Focus { index: usize },
    Blur,
    /// Confirm key on the focused indicator.
    Activate,
}

impl Intent for CarouselIntent {}
