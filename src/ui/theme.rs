use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const ACCENT_TEXT: Color = Color::Rgb(0x17, 0x17, 0x17);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADING_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SECONDARY_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
