//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use parscade::config::Config;
use parscade::store::{MemoryStorage, UiStore, STORE_KEY};
use parscade::ui::app::App;
use parscade::ui::events::{AppEvent, EventHandler};
use std::time::Duration;

/// Autoplay interval used by the default configuration.
pub const INTERVAL: Duration = Duration::from_millis(4000);

/// Default configuration, as if no config file existed.
pub fn test_config() -> Config {
    Config::default()
}

/// Persisted envelope with both fields set.
pub fn persisted_json(dismissed: bool, reduced_motion: bool) -> String {
    format!(
        r#"{{"state":{{"isAnnouncementDismissed":{dismissed},"reducedMotion":{reduced_motion}}},"version":0}}"#
    )
}

/// Storage pre-seeded with a persisted envelope.
pub fn seeded_storage(dismissed: bool, reduced_motion: bool) -> MemoryStorage {
    MemoryStorage::new().with_entry(STORE_KEY, &persisted_json(dismissed, reduced_motion))
}

pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub storage: MemoryStorage,
}

impl Harness {
    /// App over fresh in-memory storage, not yet started.
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new(), false)
    }

    pub fn with_storage(storage: MemoryStorage, host_reduced_motion: bool) -> Self {
        let events = EventHandler::new();
        let store = UiStore::load(Box::new(storage.clone()), host_reduced_motion);
        let app = App::new(&test_config(), store, events.sender());
        Self {
            app,
            events,
            storage,
        }
    }

    /// Started app with a known terminal size, so mouse events hit-test.
    pub fn started() -> Self {
        let mut harness = Self::new();
        harness.app.on_resize(100, 40);
        harness.app.start();
        harness
    }

    /// Feed every queued event to the app.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.events.try_next() {
            self.app.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Let paused time run forward, then deliver whatever fired.
    pub async fn advance(&mut self, by: Duration) -> usize {
        tokio::time::sleep(by).await;
        self.drain()
    }

    pub fn index(&self) -> usize {
        self.app.carousel().index
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app.handle_event(AppEvent::Key(press_key(code)));
    }

    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.app.handle_event(AppEvent::Mouse(mouse_event(kind, column, row)));
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }
}

/// Create a key press event with no modifiers.
pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
