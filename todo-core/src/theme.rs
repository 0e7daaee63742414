//! Color scheme and palette handed to the screen at construction.

use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Palette used by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    /// Completed titles and placeholder text.
    pub muted: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
    pub border: Rgb,
    pub danger: Rgb,
}

impl Theme {
    pub const DARK: Theme = Theme {
        background: Rgb(0, 0, 0),
        surface: Rgb(24, 24, 24),
        text: Rgb(255, 255, 255),
        muted: Rgb(128, 128, 128),
        button: Rgb(255, 255, 255),
        button_text: Rgb(0, 0, 0),
        border: Rgb(128, 128, 128),
        danger: Rgb(255, 0, 0),
    };

    pub const LIGHT: Theme = Theme {
        background: Rgb(255, 255, 255),
        surface: Rgb(240, 240, 240),
        text: Rgb(51, 51, 51),
        muted: Rgb(128, 128, 128),
        button: Rgb(51, 51, 51),
        button_text: Rgb(255, 255, 255),
        border: Rgb(128, 128, 128),
        danger: Rgb(255, 0, 0),
    };

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::LIGHT,
            ColorScheme::Dark => Self::DARK,
        }
    }
}

/// Current scheme together with its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    scheme: ColorScheme,
    theme: Theme,
}

impl ThemeState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            theme: Theme::for_scheme(scheme),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Flip between light and dark, returning the new scheme.
    pub fn toggle(&mut self) -> ColorScheme {
        self.set(self.scheme.toggled());
        self.scheme
    }

    pub(crate) fn set(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
        self.theme = Theme::for_scheme(scheme);
    }
}
