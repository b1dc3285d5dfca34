//! Parscade pipeline showcase.
//!
//! A terminal rendition of the Parscade marketing front page: an
//! announcement bar, a navigation header, and the auto-advancing
//! pipeline carousel, all driven by a single observable UI state store.

pub mod config;
pub mod error;
pub mod logging;
pub mod motion;
pub mod store;
pub mod ui;
