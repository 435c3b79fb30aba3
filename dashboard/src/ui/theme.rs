use ratatui::style::{Color, Modifier, Style};

/// Warm terminal theme.
///
/// - amber foreground on a near-black background
/// - green / yellow / red reserved for the prediction outcome
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(12, 10, 8);
    pub const FG: Color = Color::Rgb(255, 191, 0);
    pub const FG_DIM: Color = Color::Rgb(190, 140, 40);
    pub const FG_MUTED: Color = Color::Rgb(110, 100, 90);

    pub const ACCENT_GREEN: Color = Color::Rgb(80, 250, 120);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 230, 0);
    pub const ACCENT_RED: Color = Color::Rgb(255, 70, 70);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Border of the focused widget.
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Self::BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Selected list entry.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }
}
