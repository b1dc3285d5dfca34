use ratatui::layout::Rect;

use crate::ui::carousel::{SLIDES, SLIDE_COUNT};
use crate::ui::header::{MENU_BUTTON_WIDTH, MENU_ITEMS};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const DISMISS_WIDTH: u16 = 3;
const MENU_WIDTH: u16 = 20;
const INDICATOR_GAP: u16 = 2;
/// Rows below the slides: spacer, indicators, spacer, progress bar.
const CAROUSEL_CHROME_HEIGHT: u16 = 4;

/// Screen regions shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub announcement: Option<Rect>,
    pub dismiss_button: Option<Rect>,
    pub header: Rect,
    pub menu_button: Rect,
    pub menu: Option<Rect>,
    pub body: Rect,
    pub carousel: CarouselLayout,
    pub footer: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Slide viewport; the pointer hovering here pauses autoplay.
    pub slides: Rect,
    pub indicators: [Rect; SLIDE_COUNT],
    pub progress: Rect,
}

pub fn compute_layout(area: Rect, announcement_visible: bool, menu_open: bool) -> ScreenLayout {
    let mut top = area.y;
    let mut remaining = area.height;

    let announcement = (announcement_visible && remaining > 0).then(|| {
        let rect = Rect::new(area.x, top, area.width, 1);
        top += 1;
        remaining -= 1;
        rect
    });
    let dismiss_button = announcement.map(|bar| {
        let width = DISMISS_WIDTH.min(bar.width);
        Rect::new(bar.right().saturating_sub(width + 1), bar.y, width, 1)
    });

    let header_height = HEADER_HEIGHT.min(remaining);
    let header = Rect::new(area.x, top, area.width, header_height);
    top += header_height;
    remaining -= header_height;

    let menu_width = MENU_BUTTON_WIDTH.min(header.width);
    let menu_button = Rect::new(
        header.right().saturating_sub(menu_width + 1),
        header.y + u16::from(header_height == HEADER_HEIGHT),
        menu_width,
        header_height.min(1),
    );

    let footer_height = FOOTER_HEIGHT.min(remaining);
    let footer = Rect::new(
        area.x,
        top + remaining - footer_height,
        area.width,
        footer_height,
    );
    let body = Rect::new(area.x, top, area.width, remaining - footer_height);

    let menu = menu_open.then(|| {
        let width = MENU_WIDTH.min(body.width);
        let height = (MENU_ITEMS.len() as u16 + 2).min(body.height);
        Rect::new(body.right().saturating_sub(width), body.y, width, height)
    });

    ScreenLayout {
        announcement,
        dismiss_button,
        header,
        menu_button,
        menu,
        body,
        carousel: carousel_layout(body),
        footer,
    }
}

fn carousel_layout(body: Rect) -> CarouselLayout {
    let chrome = CAROUSEL_CHROME_HEIGHT.min(body.height);
    let slides = Rect::new(body.x, body.y, body.width, body.height - chrome);
    let indicator_row = body.y + slides.height + chrome.min(1);
    let progress_row = body.bottom().saturating_sub(1);

    let widths: Vec<u16> = SLIDES
        .iter()
        .map(|slide| slide.title.chars().count() as u16 + 4)
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + INDICATOR_GAP * (SLIDE_COUNT as u16 - 1);
    let mut x = body.x + body.width.saturating_sub(total) / 2;
    let visible = chrome >= 2;
    let indicators = std::array::from_fn(|i| {
        let width = widths[i].min(body.right().saturating_sub(x));
        let rect = Rect::new(x, indicator_row, width, u16::from(visible));
        x = x.saturating_add(widths[i] + INDICATOR_GAP).min(body.right());
        rect
    });

    let progress = Rect::new(
        body.x + 2.min(body.width),
        progress_row,
        body.width.saturating_sub(4),
        u16::from(chrome >= CAROUSEL_CHROME_HEIGHT),
    );

    CarouselLayout {
        slides,
        indicators,
        progress,
    }
}

/// True if the terminal cell at (`column`, `row`) lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.width > 0
        && rect.height > 0
        && column >= rect.x
        && column < rect.right()
        && row >= rect.y
        && row < rect.bottom()
}
