use ratatui::style::{Color, Style};

use listpick::picker::PickerStyle;

// Accent colors
pub const ACCENT_GOLD: Color = Color::Rgb(219, 171, 121); // #DBAB79
pub const ACCENT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const ACCENT_MINT: Color = Color::Rgb(161, 193, 129); // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136); // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Picker styling in the demo palette.
pub fn picker_style(indicator: &str) -> PickerStyle {
    PickerStyle {
        label: Style::new().fg(TEXT_WHITE),
        value: Style::new().fg(TEXT_DIM),
        chevron: Style::new().fg(TEXT_DIM),
        row: Style::new().fg(TEXT_WHITE),
        cursor: Style::new().fg(ACCENT_MINT).bold(),
        indicator: indicator.to_string(),
        indicator_style: Style::new().fg(ACCENT_BLUE).bold(),
        header: Style::new().fg(TEXT_DIM),
        footer: Style::new().fg(TEXT_DIM).italic(),
    }
}
