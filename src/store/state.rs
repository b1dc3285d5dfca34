use serde::{Deserialize, Serialize};

/// Every UI flag shared between components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiSnapshot {
    pub announcement_dismissed: bool,
    pub reduced_motion: bool,
    pub mobile_menu_open: bool,
    /// Active pipeline slide, always below the slide count.
    pub carousel_index: usize,
    pub carousel_autoplay: bool,
    pub loading: bool,
}

impl UiSnapshot {
    /// Fresh session state seeded from the persisted subset.
    pub fn from_persisted(persisted: PersistedUi) -> Self {
        Self {
            announcement_dismissed: persisted.announcement_dismissed,
            reduced_motion: persisted.reduced_motion,
            mobile_menu_open: false,
            carousel_index: 0,
            carousel_autoplay: !persisted.reduced_motion,
            loading: false,
        }
    }

    pub fn persisted(&self) -> PersistedUi {
        PersistedUi {
            announcement_dismissed: self.announcement_dismissed,
            reduced_motion: self.reduced_motion,
        }
    }
}

/// The fields that survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedUi {
    pub announcement_dismissed: bool,
    pub reduced_motion: bool,
}

impl PersistedUi {
    pub fn defaults(host_reduced_motion: bool) -> Self {
        Self {
            announcement_dismissed: false,
            reduced_motion: host_reduced_motion,
        }
    }
}

/// On-disk envelope: `{"state": {...}, "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PersistedEnvelope {
    pub state: PersistedFields,
    #[serde(default)]
    pub version: u32,
}

/// Stored field names are stable; missing ones fall back to defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct PersistedFields {
    #[serde(
        rename = "isAnnouncementDismissed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub announcement_dismissed: Option<bool>,
    #[serde(
        rename = "reducedMotion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reduced_motion: Option<bool>,
}

impl PersistedFields {
    pub fn merge_onto(&self, defaults: PersistedUi) -> PersistedUi {
        PersistedUi {
            announcement_dismissed: self
                .announcement_dismissed
                .unwrap_or(defaults.announcement_dismissed),
            reduced_motion: self.reduced_motion.unwrap_or(defaults.reduced_motion),
        }
    }
}

impl From<PersistedUi> for PersistedFields {
    fn from(value: PersistedUi) -> Self {
        Self {
            announcement_dismissed: Some(value.announcement_dismissed),
            reduced_motion: Some(value.reduced_motion),
        }
    }
}
