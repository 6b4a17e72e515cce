//! Day/night palettes for the book backdrop and page overlays.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

/// Colors the book view draws with. Overlay colors are opaque; the view
/// scales their alpha by the current overlay values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookPalette {
    pub backdrop: Color,
    pub blank_page: Color,
    pub shade: Color,
    pub shine: Color,
    pub curl: Color,
}

impl Theme {
    pub fn palette(self) -> BookPalette {
        match self {
            Theme::Light => BookPalette {
                backdrop: Color::from_rgb8(0xe8, 0xe2, 0xd6),
                blank_page: Color::from_rgb8(0xfb, 0xf8, 0xf1),
                shade: Color::from_rgb8(0x2a, 0x22, 0x18),
                shine: Color::WHITE,
                curl: Color::from_rgb8(0xf4, 0xee, 0xe2),
            },
            Theme::Dark => BookPalette {
                backdrop: Color::from_rgb8(0x1b, 0x1d, 0x22),
                blank_page: Color::from_rgb8(0xf1, 0xec, 0xe0),
                shade: Color::BLACK,
                shine: Color::from_rgb8(0xff, 0xf8, 0xe8),
                curl: Color::from_rgb8(0xe6, 0xdf, 0xcf),
            },
        }
    }
}

/// Copy of `color` with its alpha replaced.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_mode_maps_to_dark() {
        assert_eq!(Theme::from(ThemeMode::Night), Theme::Dark);
        assert_eq!(IcedTheme::from(Theme::Light), IcedTheme::Light);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(with_alpha(Color::BLACK, 1.4).a, 1.0);
        assert_eq!(with_alpha(Color::WHITE, 0.25).a, 0.25);
    }
}
