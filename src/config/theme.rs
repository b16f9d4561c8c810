//! Theme and Styling Configuration
//!
//! crtterm ships a fixed set of themes. The active theme is persisted by
//! name in the settings store; an absent name means [`Theme::Default`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Built-in terminal themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Green-on-black phosphor look
    #[default]
    Default,
    /// Dark text on a warm paper background
    Cream,
}

impl Theme {
    /// Every theme, in the order `theme` lists them
    pub const ALL: [Theme; 2] = [Theme::Default, Theme::Cream];

    /// Name used on the command line and in settings
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Cream => "cream",
        }
    }

    /// Look up a theme by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.name() == name)
    }

    /// Comma separated list of theme names
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(Theme::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether this theme is stored in settings (default is stored as absent)
    pub fn is_default(&self) -> bool {
        matches!(self, Theme::Default)
    }

    /// Color palette for this theme
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Default => Palette {
                background: Color::from_rgb(8, 12, 8),
                foreground: Color::from_rgb(200, 235, 200),
                prompt: Color::from_rgb(120, 230, 120),
                folder: Color::from_rgb(110, 170, 255),
                file: Color::from_rgb(200, 235, 200),
                error: Color::from_rgb(255, 110, 100),
                muted: Color::from_rgb(110, 140, 110),
                scanline: Color::from_rgba(0, 0, 0, 70),
            },
            Theme::Cream => Palette {
                background: Color::from_rgb(245, 238, 215),
                foreground: Color::from_rgb(70, 52, 35),
                prompt: Color::from_rgb(150, 80, 30),
                folder: Color::from_rgb(40, 90, 150),
                file: Color::from_rgb(70, 52, 35),
                error: Color::from_rgb(180, 40, 30),
                muted: Color::from_rgb(140, 120, 95),
                scanline: Color::from_rgba(90, 60, 20, 30),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_name(s).ok_or_else(|| Error::ThemeNotFound {
            theme_name: s.to_string(),
        })
    }
}

/// Colors used by the terminal view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub prompt: Color,
    pub folder: Color,
    pub file: Color,
    pub error: Color,
    pub muted: Color,
    /// Interlace line color drawn over the transcript
    pub scanline: Color,
}

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Components as 8-bit channels
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }
}
