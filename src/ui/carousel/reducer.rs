use crate::ui::carousel::intent::CarouselIntent;
use crate::ui::carousel::slides::SLIDE_COUNT;
use crate::ui::carousel::state::CarouselState;
use crate::ui::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Advance => CarouselState {
                index: (state.index + 1) % SLIDE_COUNT,
                ..state
            },
            CarouselIntent::Previous => CarouselState {
                index: (state.index + SLIDE_COUNT - 1) % SLIDE_COUNT,
                ..state
            },
            CarouselIntent::JumpTo { index } if index < SLIDE_COUNT => {
                CarouselState { index, ..state }
            }
            CarouselIntent::JumpTo { .. } => state,
            CarouselIntent::Pause => CarouselState {
                paused: true,
                playing: false,
                ..state
            },
            CarouselIntent::Resume => CarouselState {
                paused: false,
                playing: !state.reduced_motion,
                ..state
            },
            CarouselIntent::SetReducedMotion { enabled } => CarouselState {
                reduced_motion: enabled,
                playing: !enabled && !state.paused,
                ..state
            },
            CarouselIntent::Focus { index } if index < SLIDE_COUNT => CarouselState {
                focused: Some(index),
                ..state
            },
            CarouselIntent::Focus { .. } => state,
            CarouselIntent::Blur => CarouselState {
                focused: None,
                ..state
            },
            CarouselIntent::Activate => match state.focused {
                Some(index) => CarouselState { index, ..state },
                None => state,
            },
        }
    }
}
