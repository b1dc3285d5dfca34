use std::time::Duration;

use crate::ui::carousel::slides::{Slide, SLIDES, SLIDE_COUNT};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    /// Active slide, always below [`SLIDE_COUNT`].
    pub index: usize,
    /// Whether the autoplay timer should be live.
    pub playing: bool,
    /// Explicitly paused, e.g. while hovered.
    pub paused: bool,
    pub reduced_motion: bool,
    /// Indicator holding keyboard focus.
    pub focused: Option<usize>,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(0, false)
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    /// Autoplay is armed unless motion is reduced.
    pub fn new(index: usize, reduced_motion: bool) -> Self {
        Self {
            index: index.min(SLIDE_COUNT - 1),
            playing: !reduced_motion,
            paused: false,
            reduced_motion,
            focused: None,
        }
    }

    pub fn slide(&self) -> &'static Slide {
        &SLIDES[self.index]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == index
    }

    /// Share of the pipeline completed, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / SLIDE_COUNT as f64
    }

    /// Transition length for this state; reduced motion collapses it.
    pub fn transition(&self, base: Duration) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            base
        }
    }
}
