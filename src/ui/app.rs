use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;

use crate::config::Config;
use crate::store::{UiSnapshot, UiStore};
use crate::ui::a11y::{AccessibleNode, Role};
use crate::ui::announcement::{ANNOUNCEMENT_TEXT, DISMISS_LABEL};
use crate::ui::carousel::{
    AutoplayTimer, CarouselIntent, CarouselReducer, CarouselState, SLIDES, SLIDE_COUNT,
};
use crate::ui::events::AppEvent;
use crate::ui::header::MENU_ITEMS;
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::{compute_layout, contains, ScreenLayout};
use crate::ui::mvi::Reducer;

/// Focusable controls outside the carousel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChromeControl {
    DismissAnnouncement,
    MenuToggle,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FocusTarget {
    Chrome(ChromeControl),
    Indicator(usize),
}

/// Progress bar animation between two fill levels.
#[derive(Clone, Copy, Debug)]
struct Transition {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl Transition {
    fn fraction_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
        };
        self.from + (self.to - self.from) * eased
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application context: owns the UI store, the carousel state and the
/// autoplay timer, and routes every event to them.
pub struct App {
    should_quit: bool,
    /// Autoplay may only be armed between `start` and `shutdown`.
    started: bool,
    size: Option<(u16, u16)>,
    store: UiStore,
    /// Carousel view state (MVI pattern).
    carousel: CarouselState,
    /// Autoplay timer (resource, managed outside MVI).
    autoplay: AutoplayTimer,
    events: UnboundedSender<AppEvent>,
    transition_base: Duration,
    transition: Option<Transition>,
    chrome_focus: Option<ChromeControl>,
    /// Last pointer cell seen, re-tested whenever the layout moves.
    pointer: Option<(u16, u16)>,
    pointer_over_slides: bool,
}

impl App {
    pub fn new(config: &Config, store: UiStore, events: UnboundedSender<AppEvent>) -> Self {
        let snapshot = store.snapshot();
        Self {
            should_quit: false,
            started: false,
            size: None,
            carousel: CarouselState::new(snapshot.carousel_index, snapshot.reduced_motion),
            store,
            autoplay: AutoplayTimer::new(config.carousel.autoplay_interval()),
            events,
            transition_base: config.carousel.transition(),
            transition: None,
            chrome_focus: None,
            pointer: None,
            pointer_over_slides: false,
        }
    }

    /// Arm autoplay unless motion is reduced. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        self.started = true;
        self.reconcile_autoplay(false);
        tracing::info!(
            reduced_motion = self.carousel.reduced_motion,
            autoplay = self.carousel.playing,
            "Showcase started"
        );
    }

    /// Teardown: the timer is cancelled so nothing updates the store
    /// after the carousel is gone.
    pub fn shutdown(&mut self) {
        self.started = false;
        self.autoplay.cancel();
        self.store.set_carousel_autoplay(false);
        tracing::info!("Showcase stopped");
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn snapshot(&self) -> UiSnapshot {
        self.store.snapshot()
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Mouse(mouse) => handle_mouse(self, mouse),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::AutoplayTick { generation } => self.on_autoplay_tick(generation),
            AppEvent::MotionPreferenceChanged(reduce) => {
                tracing::info!(reduce, "Host motion preference changed");
                self.set_reduced_motion(reduce);
            }
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    fn on_autoplay_tick(&mut self, generation: u64) {
        if !self.autoplay.accepts(generation) {
            tracing::trace!(generation, "Dropping stale autoplay tick");
            return;
        }
        self.dispatch_carousel(CarouselIntent::Advance);
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.refresh_hover();
    }

    /// Track the pointer. It hovers the slides only where no overlay
    /// (the open menu) is drawn on top of them.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        self.refresh_hover();
    }

    fn refresh_hover(&mut self) {
        let over = match (self.pointer, self.layout()) {
            (Some((column, row)), Some(layout)) => {
                contains(layout.carousel.slides, column, row)
                    && !layout.menu.is_some_and(|menu| contains(menu, column, row))
            }
            _ => false,
        };
        self.set_pointer_over_slides(over);
    }

    /// Regions of the last known terminal size.
    pub fn layout(&self) -> Option<ScreenLayout> {
        self.size
            .map(|(cols, rows)| self.layout_for(Rect::new(0, 0, cols, rows)))
    }

    pub fn layout_for(&self, area: Rect) -> ScreenLayout {
        let snapshot = self.store.snapshot();
        compute_layout(
            area,
            !snapshot.announcement_dismissed,
            snapshot.mobile_menu_open,
        )
    }

    /// Run a carousel intent, then mirror the result into the store and
    /// reconcile the autoplay timer with it.
    pub fn dispatch_carousel(&mut self, intent: CarouselIntent) {
        let previous = self.carousel.clone();
        let rearm = matches!(intent, CarouselIntent::Resume);
        dispatch_mvi!(self, carousel, CarouselReducer, intent);

        if self.carousel.index != previous.index {
            tracing::debug!(from = previous.index, to = self.carousel.index, "Slide changed");
            self.store.set_carousel_index(self.carousel.index);
            self.begin_transition(previous.progress());
        }
        if self.carousel.focused.is_some() {
            self.chrome_focus = None;
        }
        self.reconcile_autoplay(rearm || !previous.playing);
    }

    /// Select a slide. Out-of-range indices are ignored and the
    /// autoplay interval is left running as it was.
    pub fn jump_to(&mut self, index: usize) {
        self.dispatch_carousel(CarouselIntent::JumpTo { index });
    }

    fn reconcile_autoplay(&mut self, restart: bool) {
        if self.started && self.carousel.playing {
            if restart || !self.autoplay.is_running() {
                self.autoplay.start(self.events.clone());
            }
        } else if self.autoplay.is_running() {
            self.autoplay.cancel();
        }
        self.store.set_carousel_autoplay(self.carousel.playing && self.started);
    }

    /// Animate the progress bar from wherever it currently is.
    fn begin_transition(&mut self, previous_progress: f64) {
        let now = Instant::now();
        let duration = self.carousel.transition(self.transition_base);
        if duration.is_zero() {
            self.transition = None;
            return;
        }
        let from = self
            .transition
            .map_or(previous_progress, |t| t.fraction_at(now));
        self.transition = Some(Transition {
            from,
            to: self.carousel.progress(),
            started: now,
            duration,
        });
    }

    /// Animated progress bar fill at `now`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        match self.transition {
            Some(transition) => transition.fraction_at(now),
            None => self.carousel.progress(),
        }
    }

    /// True while a slide change is still animating.
    pub fn is_settling(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(now))
    }

    /// Pointer entering the slide viewport pauses autoplay; leaving resumes it.
    pub fn set_pointer_over_slides(&mut self, over: bool) {
        if self.pointer_over_slides == over {
            return;
        }
        self.pointer_over_slides = over;
        let intent = if over {
            CarouselIntent::Pause
        } else {
            CarouselIntent::Resume
        };
        self.dispatch_carousel(intent);
    }

    pub fn pointer_over_slides(&self) -> bool {
        self.pointer_over_slides
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.store.set_reduced_motion(enabled);
        if enabled {
            self.transition = None;
        }
        self.dispatch_carousel(CarouselIntent::SetReducedMotion { enabled });
    }

    pub fn toggle_reduced_motion(&mut self) {
        let enabled = !self.store.snapshot().reduced_motion;
        self.set_reduced_motion(enabled);
    }

    pub fn dismiss_announcement(&mut self) {
        self.store.dismiss_announcement();
        if self.chrome_focus == Some(ChromeControl::DismissAnnouncement) {
            self.chrome_focus = Some(ChromeControl::MenuToggle);
        }
        self.refresh_hover();
    }

    pub fn toggle_menu(&mut self) {
        let open = !self.store.snapshot().mobile_menu_open;
        self.store.set_mobile_menu_open(open);
        self.refresh_hover();
    }

    pub fn close_menu(&mut self) {
        self.store.set_mobile_menu_open(false);
        self.refresh_hover();
    }

    /// Focus stops in tab order.
    pub fn focus_order(&self) -> Vec<FocusTarget> {
        let mut order = Vec::with_capacity(SLIDE_COUNT + 2);
        if !self.store.snapshot().announcement_dismissed {
            order.push(FocusTarget::Chrome(ChromeControl::DismissAnnouncement));
        }
        order.push(FocusTarget::Chrome(ChromeControl::MenuToggle));
        order.extend((0..SLIDE_COUNT).map(FocusTarget::Indicator));
        order
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.chrome_focus
            .map(FocusTarget::Chrome)
            .or(self.carousel.focused.map(FocusTarget::Indicator))
    }

    pub fn focus(&mut self, target: FocusTarget) {
        match target {
            FocusTarget::Chrome(control) => {
                if self.carousel.focused.is_some() {
                    self.dispatch_carousel(CarouselIntent::Blur);
                }
                self.chrome_focus = Some(control);
            }
            FocusTarget::Indicator(index) => {
                self.dispatch_carousel(CarouselIntent::Focus { index });
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let next = match self
            .focused()
            .and_then(|current| order.iter().position(|target| *target == current))
        {
            Some(position) => (position as isize + step).rem_euclid(len),
            None if step >= 0 => 0,
            None => len - 1,
        };
        self.focus(order[next as usize]);
    }

    pub fn blur(&mut self) {
        self.chrome_focus = None;
        if self.carousel.focused.is_some() {
            self.dispatch_carousel(CarouselIntent::Blur);
        }
    }

    /// Confirm key on whatever holds focus.
    pub fn activate_focused(&mut self) {
        match self.focused() {
            Some(FocusTarget::Chrome(ChromeControl::DismissAnnouncement)) => {
                self.dismiss_announcement()
            }
            Some(FocusTarget::Chrome(ChromeControl::MenuToggle)) => self.toggle_menu(),
            Some(FocusTarget::Indicator(_)) => self.dispatch_carousel(CarouselIntent::Activate),
            None => {}
        }
    }

    /// Controls and landmarks in focus order.
    pub fn accessibility_tree(&self) -> Vec<AccessibleNode> {
        let snapshot = self.store.snapshot();
        let focused = self.focused();
        let mut nodes = Vec::new();

        if !snapshot.announcement_dismissed {
            nodes.push(AccessibleNode::new(Role::Banner, ANNOUNCEMENT_TEXT));
            nodes.push(AccessibleNode::new(Role::Button, DISMISS_LABEL).focusable(
                focused == Some(FocusTarget::Chrome(ChromeControl::DismissAnnouncement)),
            ));
        }

        nodes.push(AccessibleNode::new(Role::Navigation, "Main"));
        let menu_label = if snapshot.mobile_menu_open {
            "Close menu"
        } else {
            "Open menu"
        };
        nodes.push(
            AccessibleNode::new(Role::Button, menu_label)
                .focusable(focused == Some(FocusTarget::Chrome(ChromeControl::MenuToggle)))
                .selected(snapshot.mobile_menu_open),
        );
        if snapshot.mobile_menu_open {
            nodes.extend(
                MENU_ITEMS
                    .iter()
                    .map(|item| AccessibleNode::new(Role::Link, *item)),
            );
        }

        nodes.push(AccessibleNode::new(Role::Region, "Pipeline carousel"));
        nodes.push(AccessibleNode::new(Role::Heading, self.carousel.slide().title));
        for (index, slide) in SLIDES.iter().enumerate() {
            nodes.push(
                AccessibleNode::new(Role::Button, slide.control_label())
                    .focusable(focused == Some(FocusTarget::Indicator(index)))
                    .selected(self.carousel.is_selected(index)),
            );
        }
        nodes.push(
            AccessibleNode::new(Role::ProgressBar, "Pipeline progress")
                .value(format!("{} of {}", self.carousel.index + 1, SLIDE_COUNT)),
        );

        nodes
    }
}
