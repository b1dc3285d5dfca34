//! State/intent/reducer primitives shared by the interactive widgets.
//!
//! ```text
//! key, click, timer tick
//!         │
//!      Intent ──→ Reducer ──→ State ──→ frame + accessibility tree
//! ```
//!
//! A reducer only computes the next state. Whoever dispatched the intent
//! compares old and new state and drives the timers and storage that
//! depend on it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
