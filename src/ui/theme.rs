use ratatui::style::Color;

pub const PRIMARY: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const SECONDARY: Color = Color::Rgb(0x7c, 0x3a, 0xed);
pub const ACCENT_TEAL: Color = Color::Rgb(0x14, 0xb8, 0xa6);
pub const ACCENT_AMBER: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const TRACK: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FOCUS_RING: Color = Color::Rgb(0xfa, 0xcc, 0x15);
