use gpui::Hsla;
use serde::{Deserialize, Serialize};

use crate::data_types::hex_color::from_u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    /// Anything that is not `dark` falls back to the light palette.
    #[serde(other)]
    Light,
}

/// Fixed colors of a theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Hsla,
    pub secondary: Hsla,
    pub tertiary: Hsla,
    pub background: Hsla,
    /// Axis labels and tooltip text.
    pub text: Hsla,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                primary: from_u32(0x64ffda),
                secondary: from_u32(0xff6b35),
                tertiary: from_u32(0x4caf50),
                background: from_u32(0x1a1a2e),
                text: gpui::white(),
            },
            Theme::Light => Palette {
                primary: from_u32(0x1976d2),
                secondary: from_u32(0xf57c00),
                tertiary: from_u32(0x388e3c),
                background: from_u32(0xffffff),
                text: gpui::black(),
            },
        }
    }
}
