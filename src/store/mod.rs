//! Observable UI state with a durably persisted subset.

mod state;
mod storage;
mod store;

pub use state::{PersistedUi, UiSnapshot};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{UiStore, STORE_KEY, STORE_VERSION};
