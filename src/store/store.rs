use tokio::sync::watch;

use crate::store::state::{PersistedEnvelope, PersistedFields, PersistedUi, UiSnapshot};
use crate::store::storage::KeyValueStorage;
use crate::ui::carousel::SLIDE_COUNT;

/// Storage key of the persisted subset.
pub const STORE_KEY: &str = "parscade-ui-store";
pub const STORE_VERSION: u32 = 0;

/// Single source of truth for cross-component UI flags.
///
/// Owned by the application and lent to handlers; observers follow
/// changes through [`UiStore::subscribe`]. Mutating the persisted subset
/// (`announcement_dismissed`, `reduced_motion`) writes it through to
/// storage immediately.
pub struct UiStore {
    tx: watch::Sender<UiSnapshot>,
    storage: Box<dyn KeyValueStorage>,
    host_reduced_motion: bool,
}

impl UiStore {
    /// Restore the persisted subset from `storage`.
    ///
    /// Missing, unreadable or malformed data falls back to defaults, with
    /// `reduced_motion` taken from the host.
    pub fn load(storage: Box<dyn KeyValueStorage>, host_reduced_motion: bool) -> Self {
        let defaults = PersistedUi::defaults(host_reduced_motion);
        let persisted = read_persisted(storage.as_ref())
            .map(|fields| fields.merge_onto(defaults))
            .unwrap_or(defaults);
        tracing::debug!(?persisted, "UI store loaded");

        let (tx, _rx) = watch::channel(UiSnapshot::from_persisted(persisted));
        Self {
            tx,
            storage,
            host_reduced_motion,
        }
    }

    pub fn snapshot(&self) -> UiSnapshot {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiSnapshot> {
        self.tx.subscribe()
    }

    pub fn dismiss_announcement(&mut self) {
        if self.update(|state| state.announcement_dismissed = true) {
            self.persist();
        }
    }

    /// Turning reduced motion on also stops autoplay.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        let changed = self.update(|state| {
            state.reduced_motion = enabled;
            if enabled {
                state.carousel_autoplay = false;
            }
        });
        if changed {
            self.persist();
        }
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        self.update(|state| state.mobile_menu_open = open);
    }

    /// Out-of-range indices are ignored.
    pub fn set_carousel_index(&mut self, index: usize) {
        if index >= SLIDE_COUNT {
            tracing::debug!(index, "Ignoring out-of-range carousel index");
            return;
        }
        self.update(|state| state.carousel_index = index);
    }

    /// Autoplay cannot be switched on while reduced motion is active.
    pub fn set_carousel_autoplay(&mut self, playing: bool) {
        self.update(|state| state.carousel_autoplay = playing && !state.reduced_motion);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.update(|state| state.loading = loading);
    }

    /// Forget the persisted subset and return to first-run defaults.
    pub fn reset(&mut self) {
        if let Err(err) = self.storage.remove(STORE_KEY) {
            tracing::warn!(error = %err, "Failed to clear persisted UI state");
        }
        let fresh = UiSnapshot::from_persisted(PersistedUi::defaults(self.host_reduced_motion));
        self.tx.send_replace(fresh);
    }

    /// Apply `mutate` and notify subscribers if anything changed.
    fn update<F>(&mut self, mutate: F) -> bool
    where
        F: FnOnce(&mut UiSnapshot),
    {
        self.tx.send_if_modified(|state| {
            let before = *state;
            mutate(state);
            *state != before
        })
    }

    fn persist(&mut self) {
        let envelope = PersistedEnvelope {
            state: PersistedFields::from(self.snapshot().persisted()),
            version: STORE_VERSION,
        };
        let encoded = match serde_json::to_string(&envelope) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to encode UI state");
                return;
            }
        };
        if let Err(err) = self.storage.set(STORE_KEY, &encoded) {
            tracing::warn!(error = %err, "Failed to persist UI state");
        }
    }
}

fn read_persisted(storage: &dyn KeyValueStorage) -> Option<PersistedFields> {
    let raw = match storage.get(STORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %err, "Persisted UI state unreadable, using defaults");
            return None;
        }
    };
    match serde_json::from_str::<PersistedEnvelope>(&raw) {
        Ok(envelope) => Some(envelope.state),
        Err(err) => {
            tracing::warn!(error = %err, "Persisted UI state malformed, using defaults");
            None
        }
    }
}
