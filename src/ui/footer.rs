use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, PRIMARY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints and the build version.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, reduced_motion: bool) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key = Style::default().fg(PRIMARY);
        let motion = if reduced_motion { "off" } else { "on" };

        let mut spans = Vec::new();
        for (i, (keys, action)) in [
            ("Tab", "Focus".to_string()),
            ("Enter", "Select".to_string()),
            ("←/→", "Slide".to_string()),
            ("M", "Menu".to_string()),
            ("X", "Dismiss".to_string()),
            ("R", format!("Motion ({motion})")),
            ("Q", "Quit".to_string()),
        ]
        .into_iter()
        .enumerate()
        {
            spans.push(Span::styled(if i == 0 { " " } else { " │ " }, dim));
            spans.push(Span::styled(keys, key));
            spans.push(Span::styled(format!(": {action}"), dim));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(Line::from(format!(" v{VERSION} ")).right_aligned()),
        )
    }
}
