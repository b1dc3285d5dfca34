use crate::ui::theme::{HEADER_TEXT, SECONDARY};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const ANNOUNCEMENT_TEXT: &str = "New: Multi-language document parsing now available!";
pub const DISMISS_LABEL: &str = "Dismiss announcement";

pub fn announcement_bar() -> Paragraph<'static> {
    let style = Style::default().fg(HEADER_TEXT).bg(SECONDARY);
    Paragraph::new(Line::from(vec![
        Span::styled(ANNOUNCEMENT_TEXT, style.add_modifier(Modifier::BOLD)),
        Span::styled("  Learn more →", style),
    ]))
    .style(style)
    .alignment(Alignment::Center)
}

pub fn dismiss_button(focused: bool) -> Paragraph<'static> {
    let mut style = Style::default().fg(HEADER_TEXT).bg(SECONDARY);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Paragraph::new(Span::styled("[x]", style))
}
