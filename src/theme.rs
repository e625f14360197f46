// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Card colors
    pub author: Color,
    pub role: Color,
    pub timestamp: Color,
    pub body: Color,
    pub link: Color,
    pub comment: Color,

    // Form colors
    pub placeholder: Color,
    pub publish: Color,
    pub publish_disabled: Color,
    pub validation: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            author: Color::White,
            role: Color::DarkGray,
            timestamp: Color::Gray,
            body: Color::White,
            link: Color::Cyan,
            comment: Color::White,
            placeholder: Color::DarkGray,
            publish: Color::Green,
            publish_disabled: Color::DarkGray,
            validation: Color::Red,
            border: Color::DarkGray,
            border_focused: Color::Green,
            highlight: Color::Yellow,
            status_bar: Color::Gray,
            selection: Color::Green,
            selection_fg: Color::Black,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            author: Color::Rgb(0xf8, 0xf8, 0xf2),   // foreground
            role: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            timestamp: Color::Rgb(0x62, 0x72, 0xa4), // comment
            body: Color::Rgb(0xf8, 0xf8, 0xf2),     // foreground
            link: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            comment: Color::Rgb(0xf8, 0xf8, 0xf2),  // foreground
            placeholder: Color::Rgb(0x62, 0x72, 0xa4), // comment
            publish: Color::Rgb(0x50, 0xfa, 0x7b),  // green
            publish_disabled: Color::Rgb(0x44, 0x47, 0x5a), // current line
            validation: Color::Rgb(0xff, 0x55, 0x55), // red
            border: Color::Rgb(0x62, 0x72, 0xa4),   // comment
            border_focused: Color::Rgb(0x50, 0xfa, 0x7b), // green
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            status_bar: Color::Rgb(0x62, 0x72, 0xa4), // comment
            selection: Color::Rgb(0x44, 0x47, 0x5a), // current line
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2), // foreground
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            author: Color::Rgb(0xec, 0xef, 0xf4),   // snow storm
            role: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night
            timestamp: Color::Rgb(0x4c, 0x56, 0x6a), // polar night
            body: Color::Rgb(0xd8, 0xde, 0xe9),     // snow storm
            link: Color::Rgb(0x88, 0xc0, 0xd0),     // frost cyan
            comment: Color::Rgb(0xd8, 0xde, 0xe9),  // snow storm
            placeholder: Color::Rgb(0x4c, 0x56, 0x6a), // polar night
            publish: Color::Rgb(0xa3, 0xbe, 0x8c),  // aurora green
            publish_disabled: Color::Rgb(0x3b, 0x42, 0x52), // polar night
            validation: Color::Rgb(0xbf, 0x61, 0x6a), // aurora red
            border: Color::Rgb(0x4c, 0x56, 0x6a),   // polar night
            border_focused: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            status_bar: Color::Rgb(0x4c, 0x56, 0x6a), // polar night
            selection: Color::Rgb(0x43, 0x4c, 0x5e), // polar night
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4), // snow storm
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            author: Color::Rgb(0xeb, 0xdb, 0xb2),   // fg
            role: Color::Rgb(0x92, 0x83, 0x74),     // gray
            timestamp: Color::Rgb(0x92, 0x83, 0x74), // gray
            body: Color::Rgb(0xeb, 0xdb, 0xb2),     // fg
            link: Color::Rgb(0x83, 0xa5, 0x98),     // aqua
            comment: Color::Rgb(0xeb, 0xdb, 0xb2),  // fg
            placeholder: Color::Rgb(0x92, 0x83, 0x74), // gray
            publish: Color::Rgb(0xb8, 0xbb, 0x26),  // green
            publish_disabled: Color::Rgb(0x50, 0x49, 0x45), // bg2
            validation: Color::Rgb(0xfb, 0x49, 0x34), // red
            border: Color::Rgb(0x92, 0x83, 0x74),   // gray
            border_focused: Color::Rgb(0xb8, 0xbb, 0x26), // green
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            status_bar: Color::Rgb(0x92, 0x83, 0x74), // gray
            selection: Color::Rgb(0x50, 0x49, 0x45), // bg2
            selection_fg: Color::Rgb(0xeb, 0xdb, 0xb2), // fg
        }
    }

    /// Get the border color for a panel based on focus state
    pub fn panel_border(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("dracula").name, "dracula");
        assert_eq!(Theme::by_name("NORD").name, "nord");
        assert_eq!(Theme::by_name("does-not-exist").name, "auto");
    }
}
