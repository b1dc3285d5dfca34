//! Accessibility tree.
//!
//! A flat list of the controls and landmarks on screen, in focus order,
//! named the way assistive technology and automated checks look them up:
//! by role and label.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Banner,
    Button,
    Navigation,
    Link,
    Region,
    Heading,
    ProgressBar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibleNode {
    pub role: Role,
    pub label: String,
    pub focusable: bool,
    pub focused: bool,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AccessibleNode {
    pub fn new(role: Role, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
            focusable: false,
            focused: false,
            selected: false,
            value: None,
        }
    }

    /// Mark as a focus stop, currently focused or not.
    pub fn focusable(mut self, focused: bool) -> Self {
        self.focusable = true;
        self.focused = focused;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// First node with `role` whose label equals `label`, ignoring ASCII case.
pub fn find<'a>(nodes: &'a [AccessibleNode], role: Role, label: &str) -> Option<&'a AccessibleNode> {
    nodes
        .iter()
        .find(|node| node.role == role && node.label.eq_ignore_ascii_case(label))
}

/// All nodes with `role`, in document order.
pub fn by_role(nodes: &[AccessibleNode], role: Role) -> Vec<&AccessibleNode> {
    nodes.iter().filter(|node| node.role == role).collect()
}
