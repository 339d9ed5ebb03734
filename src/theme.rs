//! Portfolio palette and widget styling.
//!
//! Colors mirror the deck's artwork: cream paper, near-black ink, a warm
//! accent for interactive highlights.

use iced::widget::{button, container};
use iced::{Background, Color, Shadow, Theme, Vector};

pub mod palette {
    use iced::Color;

    pub const CREAM: Color = Color { r: 0.961, g: 0.949, b: 0.922, a: 1.0 };
    pub const DARK: Color = Color { r: 0.102, g: 0.102, b: 0.102, a: 1.0 };
    pub const ACCENT: Color = Color { r: 0.878, g: 0.482, b: 0.329, a: 1.0 };
    pub const GRAY: Color = Color { r: 0.420, g: 0.420, b: 0.420, a: 1.0 };
    pub const LIGHT: Color = Color { r: 0.980, g: 0.980, b: 0.973, a: 1.0 };

    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color { a: alpha, ..color }
    }
}

/// The deck artwork is light; the surrounding chrome follows the configured
/// mode.
pub fn app_theme(mode: crate::config::ThemeMode) -> Theme {
    match mode {
        crate::config::ThemeMode::Day => Theme::Light,
        crate::config::ThemeMode::Night => Theme::Dark,
    }
}

/// The artboard card: fallback background color plus a paper shadow.
pub fn artboard(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        border: iced::border::rounded(2),
        shadow: Shadow {
            color: palette::with_alpha(Color::BLACK, 0.25),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 40.0,
        },
        ..container::Style::default()
    }
}

/// Fixed header: transparent at the top of the document, near-opaque cream
/// once scrolled past the collapse threshold.
pub fn header(collapsed: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: collapsed
            .then_some(Background::Color(palette::with_alpha(palette::CREAM, 0.95))),
        shadow: if collapsed {
            Shadow {
                color: palette::with_alpha(Color::BLACK, 0.08),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 6.0,
            }
        } else {
            Shadow::default()
        },
        ..container::Style::default()
    }
}

/// Header section links: ink for the active section, gray otherwise.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = match (active, status) {
            (true, _) => palette::DARK,
            (false, button::Status::Hovered | button::Status::Pressed) => palette::DARK,
            (false, _) => palette::GRAY,
        };
        button::Style {
            background: None,
            text_color,
            ..button::Style::default()
        }
    }
}

/// Collapsible menu entries: inverted card when active, faint wash on hover.
pub fn menu_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = if active {
            (Some(Background::Color(palette::DARK)), Color::WHITE)
        } else if matches!(status, button::Status::Hovered) {
            (
                Some(Background::Color(palette::with_alpha(palette::DARK, 0.05))),
                palette::DARK,
            )
        } else {
            (None, palette::DARK)
        };
        button::Style {
            background,
            text_color,
            border: iced::border::rounded(8),
            ..button::Style::default()
        }
    }
}

/// Progress-rail dots.
pub fn nav_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if active {
            palette::ACCENT
        } else if matches!(status, button::Status::Hovered) {
            palette::with_alpha(palette::DARK, 0.4)
        } else {
            palette::with_alpha(palette::DARK, 0.2)
        };
        button::Style {
            background: Some(Background::Color(background)),
            border: iced::border::rounded(6),
            ..button::Style::default()
        }
    }
}

/// Hotspots: invisible at rest, faint accent tint on hover so the region is
/// discoverable without cluttering the artwork.
pub fn hotspot(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette::with_alpha(palette::ACCENT, 0.10)))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: Color::TRANSPARENT,
        border: iced::border::rounded(4),
        ..button::Style::default()
    }
}

/// Floating scroll-to-top control.
pub fn scroll_top(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT,
        _ => palette::DARK,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: iced::border::rounded(24),
        shadow: Shadow {
            color: palette::with_alpha(Color::BLACK, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..button::Style::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::DARK)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Footer contact pills.
pub fn footer_link(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT,
        _ => palette::with_alpha(Color::WHITE, 0.1),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: iced::border::rounded(20),
        ..button::Style::default()
    }
}

/// Full-window loading backdrop.
pub fn loading_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CREAM)),
        text_color: Some(palette::DARK),
        ..container::Style::default()
    }
}
