use crate::ui::app::App;
use crate::ui::carousel::{CarouselIntent, SLIDE_COUNT};
use crate::ui::layout::contains;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Esc => {
            if app.snapshot().mobile_menu_open {
                app.close_menu();
            } else {
                app.blur();
            }
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Left => app.dispatch_carousel(CarouselIntent::Previous),
        KeyCode::Right => app.dispatch_carousel(CarouselIntent::Advance),
        KeyCode::Char('x') | KeyCode::Char('X') => app.dismiss_announcement(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_menu(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.toggle_reduced_motion(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // 1-based slide shortcut; 0 and digits past the end do nothing.
            let digit = ch.to_digit(10).unwrap_or(0) as usize;
            if (1..=SLIDE_COUNT).contains(&digit) {
                app.jump_to(digit - 1);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let Some(layout) = app.layout() else {
        return;
    };
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => app.pointer_moved(column, row),
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_moved(column, row);

            if layout
                .dismiss_button
                .is_some_and(|rect| contains(rect, column, row))
            {
                app.dismiss_announcement();
                return;
            }
            if contains(layout.menu_button, column, row) {
                app.toggle_menu();
                return;
            }
            let clicked = layout
                .carousel
                .indicators
                .iter()
                .position(|rect| contains(*rect, column, row));
            if let Some(index) = clicked {
                // Clicking a control focuses it, like a browser button.
                app.dispatch_carousel(CarouselIntent::Focus { index });
                app.jump_to(index);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
