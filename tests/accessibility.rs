//! Accessible names, keyboard operation and what reaches the screen.

mod common;

use common::*;
use crossterm::event::KeyCode;
use parscade::ui::a11y::{by_role, find, Role};
use parscade::ui::app::{ChromeControl, FocusTarget};
use parscade::ui::carousel::{SLIDES, SLIDE_COUNT};
use parscade::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen_text(harness: &Harness, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, &harness.app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

// -- Tree ---------------------------------------------------------------------

#[test]
fn every_indicator_has_a_step_label() {
    let harness = Harness::new();
    let tree = harness.app.accessibility_tree();
    for title in ["Ingest", "Extract", "Validate", "Deliver"] {
        let node = find(&tree, Role::Button, &format!("Go to {title} step"))
            .unwrap_or_else(|| panic!("missing indicator for {title}"));
        assert!(node.focusable);
    }
}

#[test]
fn only_active_indicator_is_selected() {
    let mut harness = Harness::new();
    harness.app.jump_to(2);
    let tree = harness.app.accessibility_tree();

    let selected: Vec<&str> = by_role(&tree, Role::Button)
        .into_iter()
        .filter(|node| node.label.starts_with("Go to") && node.selected)
        .map(|node| node.label.as_str())
        .collect();
    assert_eq!(selected, ["Go to Validate step"]);

    let heading = by_role(&tree, Role::Heading);
    assert_eq!(heading[0].label, "Validate");
    let progress = find(&tree, Role::ProgressBar, "Pipeline progress").unwrap();
    assert_eq!(progress.value.as_deref(), Some("3 of 4"));
}

#[test]
fn announcement_nodes_follow_dismissal() {
    let mut harness = Harness::new();
    let tree = harness.app.accessibility_tree();
    assert_eq!(by_role(&tree, Role::Banner).len(), 1);
    assert!(find(&tree, Role::Button, "Dismiss announcement").is_some());

    harness.press(KeyCode::Char('x'));
    let tree = harness.app.accessibility_tree();
    assert!(by_role(&tree, Role::Banner).is_empty());
    assert!(find(&tree, Role::Button, "Dismiss announcement").is_none());
}

#[test]
fn menu_links_appear_when_open() {
    let mut harness = Harness::new();
    let tree = harness.app.accessibility_tree();
    assert!(find(&tree, Role::Button, "Open menu").is_some());
    assert!(by_role(&tree, Role::Link).is_empty());

    harness.press(KeyCode::Char('m'));
    let tree = harness.app.accessibility_tree();
    let menu = find(&tree, Role::Button, "Close menu").unwrap();
    assert!(menu.selected);
    let links: Vec<&str> = by_role(&tree, Role::Link)
        .into_iter()
        .map(|node| node.label.as_str())
        .collect();
    assert_eq!(links, ["Product", "Pricing", "Docs", "About", "Contact"]);
}

#[test]
fn tree_serializes_for_dump() {
    let harness = Harness::new();
    let json = serde_json::to_value(harness.app.accessibility_tree()).unwrap();
    let nodes = json.as_array().unwrap();
    assert!(nodes
        .iter()
        .any(|node| node["role"] == "button" && node["label"] == "Go to Deliver step"));
    assert!(nodes.iter().any(|node| node["role"] == "progressbar"));
}

// -- Keyboard -----------------------------------------------------------------

#[test]
fn tab_walks_chrome_then_indicators_in_slide_order() {
    let mut harness = Harness::new();
    let mut visited = Vec::new();
    for _ in 0..SLIDE_COUNT + 2 {
        harness.press(KeyCode::Tab);
        visited.push(harness.app.focused().unwrap());
    }
    assert_eq!(
        visited,
        [
            FocusTarget::Chrome(ChromeControl::DismissAnnouncement),
            FocusTarget::Chrome(ChromeControl::MenuToggle),
            FocusTarget::Indicator(0),
            FocusTarget::Indicator(1),
            FocusTarget::Indicator(2),
            FocusTarget::Indicator(3),
        ]
    );

    // Wraps back to the first stop.
    harness.press(KeyCode::Tab);
    assert_eq!(
        harness.app.focused(),
        Some(FocusTarget::Chrome(ChromeControl::DismissAnnouncement))
    );
}

#[test]
fn back_tab_starts_from_last_indicator() {
    let mut harness = Harness::new();
    harness.press(KeyCode::BackTab);
    assert_eq!(harness.app.focused(), Some(FocusTarget::Indicator(3)));
    harness.press(KeyCode::BackTab);
    assert_eq!(harness.app.focused(), Some(FocusTarget::Indicator(2)));
}

#[test]
fn enter_on_focused_indicator_navigates() {
    let mut harness = Harness::new();
    harness.app.focus(FocusTarget::Indicator(2));
    assert_eq!(harness.index(), 0, "focus alone does not navigate");

    harness.press(KeyCode::Enter);
    assert_eq!(harness.index(), 2);
    assert_eq!(harness.app.snapshot().carousel_index, 2);

    let tree = harness.app.accessibility_tree();
    let node = find(&tree, Role::Button, "Go to Validate step").unwrap();
    assert!(node.focused);
    assert!(node.selected);
}

#[test]
fn space_activates_like_enter() {
    let mut harness = Harness::new();
    harness.app.focus(FocusTarget::Indicator(3));
    harness.press(KeyCode::Char(' '));
    assert_eq!(harness.index(), 3);
}

#[test]
fn enter_on_chrome_controls() {
    let mut harness = Harness::new();
    harness.app.focus(FocusTarget::Chrome(ChromeControl::MenuToggle));
    harness.press(KeyCode::Enter);
    assert!(harness.app.snapshot().mobile_menu_open);

    harness.app.focus(FocusTarget::Chrome(ChromeControl::DismissAnnouncement));
    harness.press(KeyCode::Enter);
    assert!(harness.app.snapshot().announcement_dismissed);
    assert_eq!(
        harness.app.focused(),
        Some(FocusTarget::Chrome(ChromeControl::MenuToggle)),
        "focus moves off the removed button"
    );
}

#[test]
fn dismissed_announcement_leaves_tab_order() {
    let mut harness = Harness::with_storage(seeded_storage(true, false), false);
    harness.press(KeyCode::Tab);
    assert_eq!(
        harness.app.focused(),
        Some(FocusTarget::Chrome(ChromeControl::MenuToggle))
    );
}

#[test]
fn escape_closes_menu_then_blurs() {
    let mut harness = Harness::new();
    harness.app.focus(FocusTarget::Indicator(1));
    harness.press(KeyCode::Char('m'));

    harness.press(KeyCode::Esc);
    assert!(!harness.app.snapshot().mobile_menu_open);
    assert!(harness.app.focused().is_some());

    harness.press(KeyCode::Esc);
    assert_eq!(harness.app.focused(), None);
}

#[test]
fn ctrl_c_and_q_quit() {
    let mut harness = Harness::new();
    harness
        .app
        .handle_event(parscade::ui::events::AppEvent::Key(ctrl_key('c')));
    assert!(harness.app.should_quit());

    let mut harness = Harness::new();
    harness.press(KeyCode::Char('q'));
    assert!(harness.app.should_quit());
}

// -- Rendering ----------------------------------------------------------------

#[test]
fn renders_active_slide_and_indicators() {
    let mut harness = Harness::new();
    harness.app.jump_to(1);
    let text = screen_text(&harness, 100, 40);

    assert!(text.contains("New: Multi-language document parsing now available!"));
    assert!(text.contains("Parscade"));
    assert!(text.contains(SLIDES[1].subtitle));
    for slide in SLIDES.iter() {
        assert!(text.contains(slide.title), "indicator for {}", slide.title);
    }
    assert!(text.contains("Q: Quit"));
}

#[test]
fn focused_indicator_is_bracketed() {
    let mut harness = Harness::new();
    harness.app.focus(FocusTarget::Indicator(3));
    let text = screen_text(&harness, 100, 40);
    assert!(text.contains("[ Deliver ]"));
}

#[test]
fn open_menu_is_drawn() {
    let mut harness = Harness::new();
    harness.app.toggle_menu();
    let text = screen_text(&harness, 100, 40);
    assert!(text.contains("Navigate"));
    assert!(text.contains("Contact"));
}

#[test]
fn dismissed_announcement_is_not_drawn() {
    let harness = Harness::with_storage(seeded_storage(true, false), false);
    let text = screen_text(&harness, 100, 40);
    assert!(!text.contains("Multi-language document parsing"));
}

#[test]
fn tiny_terminal_renders_without_panicking() {
    let harness = Harness::new();
    for (width, height) in [(1, 1), (10, 3), (20, 8)] {
        let _ = screen_text(&harness, width, height);
    }
}
