use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

/// Pages listed in the navigation menu.
pub const MENU_ITEMS: [&str; 5] = ["Product", "Pricing", "Docs", "About", "Contact"];
pub const MENU_BUTTON_WIDTH: u16 = 8;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(PRIMARY)),
            Span::styled(
                "Parscade",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Document parsing pipelines", Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    pub fn menu_button(&self, open: bool, focused: bool) -> Paragraph<'static> {
        let label = if open { " Close " } else { " Menu " };
        let mut style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Paragraph::new(Span::styled(label, style))
    }

    pub fn menu(&self) -> List<'static> {
        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|item| ListItem::new(Span::styled(*item, Style::default().fg(HEADER_TEXT))))
            .collect();
        List::new(items).block(
            Block::default()
                .title(" Navigate ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PRIMARY)),
        )
    }
}
