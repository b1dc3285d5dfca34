//! Tests for the carousel state machine.

use parscade::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState, SLIDE_COUNT};
use parscade::ui::mvi::Reducer;
use std::time::Duration;

fn reduce(state: CarouselState, intent: CarouselIntent) -> CarouselState {
    CarouselReducer::reduce(state, intent)
}

fn at(index: usize) -> CarouselState {
    CarouselState::new(index, false)
}

// -- Navigation ---------------------------------------------------------------

#[test]
fn advance_steps_forward_and_wraps() {
    let mut state = at(0);
    let mut seen = Vec::new();
    for _ in 0..SLIDE_COUNT + 1 {
        state = reduce(state, CarouselIntent::Advance);
        seen.push(state.index);
    }
    assert_eq!(seen, [1, 2, 3, 0, 1]);
}

#[test]
fn previous_wraps_to_last() {
    let state = reduce(at(0), CarouselIntent::Previous);
    assert_eq!(state.index, SLIDE_COUNT - 1);
    assert_eq!(reduce(state, CarouselIntent::Previous).index, SLIDE_COUNT - 2);
}

#[test]
fn jump_to_selects_any_valid_index() {
    for index in 0..SLIDE_COUNT {
        let state = reduce(at(1), CarouselIntent::JumpTo { index });
        assert_eq!(state.index, index);
        assert!(state.is_selected(index));
    }
}

#[test]
fn jump_to_out_of_range_is_noop() {
    let before = at(2);
    for index in [SLIDE_COUNT, SLIDE_COUNT + 1, usize::MAX] {
        assert_eq!(reduce(before.clone(), CarouselIntent::JumpTo { index }), before);
    }
}

#[test]
fn navigation_keeps_playback_flags() {
    let state = reduce(at(0), CarouselIntent::Pause);
    let state = CarouselReducer::reduce_all(
        state,
        [
            CarouselIntent::Advance,
            CarouselIntent::JumpTo { index: 3 },
            CarouselIntent::Previous,
        ],
    );
    assert_eq!(state.index, 2);
    assert!(state.paused);
    assert!(!state.playing);
}

#[test]
fn new_clamps_index() {
    assert_eq!(CarouselState::new(99, false).index, SLIDE_COUNT - 1);
}

// -- Playback -----------------------------------------------------------------

#[test]
fn starts_playing_unless_reduced() {
    assert!(CarouselState::new(0, false).playing);
    assert!(!CarouselState::new(0, true).playing);
}

#[test]
fn pause_then_resume_restores_playing() {
    let paused = reduce(at(1), CarouselIntent::Pause);
    assert!(paused.paused);
    assert!(!paused.playing);

    let resumed = reduce(paused, CarouselIntent::Resume);
    assert!(!resumed.paused);
    assert!(resumed.playing);
    assert_eq!(resumed.index, 1);
}

#[test]
fn resume_under_reduced_motion_stays_stopped() {
    let state = CarouselReducer::reduce_all(
        CarouselState::new(0, true),
        [CarouselIntent::Pause, CarouselIntent::Resume],
    );
    assert!(!state.paused);
    assert!(!state.playing);
}

#[test]
fn reduced_motion_toggle_respects_pause() {
    let state = reduce(at(0), CarouselIntent::SetReducedMotion { enabled: true });
    assert!(state.reduced_motion);
    assert!(!state.playing);

    let state = reduce(state, CarouselIntent::SetReducedMotion { enabled: false });
    assert!(state.playing);

    let state = CarouselReducer::reduce_all(
        state,
        [
            CarouselIntent::Pause,
            CarouselIntent::SetReducedMotion { enabled: true },
            CarouselIntent::SetReducedMotion { enabled: false },
        ],
    );
    assert!(!state.playing, "still hovered, so still paused");
}

#[test]
fn transition_collapses_under_reduced_motion() {
    let base = Duration::from_millis(500);
    assert_eq!(at(0).transition(base), base);
    assert_eq!(CarouselState::new(0, true).transition(base), Duration::ZERO);
}

#[test]
fn progress_is_share_of_pipeline() {
    assert_eq!(at(0).progress(), 0.25);
    assert_eq!(at(3).progress(), 1.0);
}

// -- Focus --------------------------------------------------------------------

#[test]
fn activate_selects_focused_indicator() {
    let state = CarouselReducer::reduce_all(
        at(0),
        [CarouselIntent::Focus { index: 2 }, CarouselIntent::Activate],
    );
    assert_eq!(state.index, 2);
    assert_eq!(state.focused, Some(2));
}

#[test]
fn activate_without_focus_is_noop() {
    assert_eq!(reduce(at(1), CarouselIntent::Activate), at(1));
}

#[test]
fn focus_out_of_range_and_blur() {
    let state = reduce(at(0), CarouselIntent::Focus { index: SLIDE_COUNT });
    assert_eq!(state.focused, None);

    let state = reduce(state, CarouselIntent::Focus { index: 1 });
    assert_eq!(state.index, 0, "focus alone does not navigate");
    assert_eq!(reduce(state, CarouselIntent::Blur).focused, None);
}
