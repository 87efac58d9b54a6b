use ratatui::style::{Color, Modifier, Style};

pub struct Palette;

impl Palette {
    pub const TEAL: Color = Color::Rgb(45, 212, 191);
    pub const LEAF: Color = Color::Rgb(132, 204, 22);
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const GRAY: Color = Color::Rgb(107, 114, 128);
    pub const DARK_GRAY: Color = Color::Rgb(55, 65, 81);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const SOFT: Color = Color::Rgb(203, 213, 225);
}

pub struct Spinners;

impl Spinners {
    pub const BRAILLE: &'static [&'static str] =
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

pub struct Theme;

impl Theme {
    #[must_use]
    pub const fn user() -> Style {
        Style::new().fg(Palette::WHITE)
    }

    #[must_use]
    pub const fn bot() -> Style {
        Style::new().fg(Palette::SOFT)
    }

    #[must_use]
    pub const fn bot_marker() -> Style {
        Style::new().fg(Palette::LEAF)
    }

    #[must_use]
    pub const fn notice() -> Style {
        Style::new().fg(Palette::RED)
    }

    #[must_use]
    pub const fn accent() -> Style {
        Style::new().fg(Palette::TEAL)
    }

    #[must_use]
    pub const fn accent_bold() -> Style {
        Style::new().fg(Palette::TEAL).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub const fn warning() -> Style {
        Style::new().fg(Palette::AMBER)
    }

    #[must_use]
    pub const fn muted() -> Style {
        Style::new().fg(Palette::GRAY)
    }

    #[must_use]
    pub const fn border() -> Style {
        Style::new().fg(Palette::DARK_GRAY)
    }

    #[must_use]
    pub const fn button() -> Style {
        Style::new()
            .fg(Palette::TEAL)
            .add_modifier(Modifier::BOLD)
    }
}
