use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::carousel::slides::{Slide, SLIDES};
use crate::ui::carousel::state::CarouselState;
use crate::ui::layout::CarouselLayout;
use crate::ui::theme::{
    ACCENT_AMBER, ACCENT_TEAL, FOCUS_RING, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY,
    SECONDARY, TRACK,
};

const ACCENTS: [Color; 4] = [PRIMARY, SECONDARY, ACCENT_TEAL, ACCENT_AMBER];

/// What the carousel looks like at one instant.
pub struct CarouselFrame<'a> {
    pub state: &'a CarouselState,
    /// Progress bar fill, animated towards `state.progress()`.
    pub progress: f64,
    /// A slide change is still animating in.
    pub settling: bool,
}

pub fn render_carousel(frame: &mut Frame<'_>, layout: &CarouselLayout, view: &CarouselFrame<'_>) {
    let state = view.state;
    let slide = state.slide();
    let accent = ACCENTS[state.index % ACCENTS.len()];

    if layout.slides.height > 0 {
        let block = Block::default()
            .title(Span::styled(" Pipeline ", Style::default().fg(accent)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(layout.slides);
        frame.render_widget(block, layout.slides);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(icon_tile(slide, accent), columns[0]);
        frame.render_widget(slide_body(slide, view.settling), columns[1]);
    }

    for (index, (rect, slide)) in layout.indicators.iter().zip(SLIDES.iter()).enumerate() {
        if rect.height == 0 {
            continue;
        }
        let selected = state.is_selected(index);
        let focused = state.focused == Some(index);
        frame.render_widget(indicator(slide, selected, focused), *rect);
    }

    if layout.progress.height > 0 {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent).bg(TRACK))
            .ratio(view.progress.clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, layout.progress);
    }
}

fn icon_tile(slide: &Slide, accent: Color) -> Paragraph<'static> {
    let style = Style::default().fg(HEADER_TEXT).bg(accent).add_modifier(Modifier::BOLD);
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", slide.icon), style)),
        Line::from(""),
    ])
}

fn slide_body(slide: &Slide, settling: bool) -> Paragraph<'static> {
    let mut title = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let mut subtitle = Style::default().fg(PRIMARY);
    let mut text = Style::default().fg(MUTED_TEXT);
    if settling {
        title = title.add_modifier(Modifier::DIM);
        subtitle = subtitle.add_modifier(Modifier::DIM);
        text = text.add_modifier(Modifier::DIM);
    }

    let mut lines = vec![
        Line::from(Span::styled(slide.title, title)),
        Line::from(Span::styled(slide.subtitle, subtitle)),
        Line::from(""),
        Line::from(Span::styled(slide.description, text)),
        Line::from(""),
    ];
    for pair in slide.features.chunks(2) {
        let cells: Vec<Span> = pair
            .iter()
            .map(|feature| Span::styled(format!("• {feature:<24}"), text))
            .collect();
        lines.push(Line::from(cells));
    }

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

fn indicator(slide: &Slide, selected: bool, focused: bool) -> Paragraph<'static> {
    let label = if focused {
        format!("[ {} ]", slide.title)
    } else {
        format!("  {}  ", slide.title)
    };
    let mut style = if selected {
        Style::default().fg(Color::White).bg(PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).bg(TRACK)
    };
    if focused {
        style = style.fg(FOCUS_RING);
    }
    Paragraph::new(Span::styled(label, style))
}
