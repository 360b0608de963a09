//! Light and dark palettes for the page
//! The accent can be overridden from config with a hex colour.

use ratatui::style::Color;

use crate::content::{TechCategory, Tone};

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,           // Active borders, current section, selected card
    pub accent_bright: Color,    // Gradient headings
    pub text: Color,             // Primary text
    pub text_dim: Color,         // Paragraphs, hints
    pub bg: Color,               // Page background
    pub bg_alt: Color,           // Alternating section background (about, contact)
    pub bg_selected: Color,      // Selection background
    pub inactive: Color,         // Inactive borders, track of the progress bar
    pub warning: Color,          // Status messages
    pub dark: bool,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(96, 165, 250),         // blue-400
            accent_bright: Color::Rgb(167, 139, 250), // violet-400
            text: Color::Rgb(243, 244, 246),
            text_dim: Color::Rgb(156, 163, 175),
            bg: Color::Rgb(17, 24, 39),
            bg_alt: Color::Rgb(31, 41, 55),
            bg_selected: Color::Rgb(55, 65, 81),
            inactive: Color::Rgb(75, 85, 99),
            warning: Color::Rgb(250, 204, 21),
            dark: true,
        }
    }

    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(37, 99, 235),          // blue-600
            accent_bright: Color::Rgb(147, 51, 234),  // purple-600
            text: Color::Rgb(17, 24, 39),
            text_dim: Color::Rgb(75, 85, 99),
            bg: Color::Rgb(255, 255, 255),
            bg_alt: Color::Rgb(249, 250, 251),
            bg_selected: Color::Rgb(229, 231, 235),
            inactive: Color::Rgb(209, 213, 219),
            warning: Color::Rgb(202, 138, 4),
            dark: false,
        }
    }

    /// Palette for the current mode, with the configured accent applied
    pub fn for_mode(dark: bool, accent: Option<&str>) -> Self {
        let mut theme = if dark { Self::dark() } else { Self::light() };
        if let Some(hex) = accent {
            match Self::parse_hex_color(hex) {
                Some(color) => theme.accent = color,
                None => tracing::warn!("Ignoring invalid accent colour {:?}", hex),
            }
        }
        theme
    }

    /// Foreground for a technology tag on a project card
    pub fn tech(&self, category: TechCategory) -> Color {
        let (light, dark) = match category {
            TechCategory::Frontend => ((37, 99, 235), (96, 165, 250)),
            TechCategory::Backend => ((22, 163, 74), (74, 222, 128)),
            TechCategory::Database => ((234, 88, 12), (251, 146, 60)),
            TechCategory::Auth => ((147, 51, 234), (192, 132, 252)),
            TechCategory::Realtime => ((219, 39, 119), (244, 114, 182)),
            TechCategory::State => ((79, 70, 229), (129, 140, 248)),
            TechCategory::Tools => ((202, 138, 4), (250, 204, 21)),
            TechCategory::Other => ((75, 85, 99), (156, 163, 175)),
        };
        let (r, g, b) = if self.dark { dark } else { light };
        Color::Rgb(r, g, b)
    }

    /// Heading colour for a skill group
    pub fn tone(&self, tone: Tone) -> Color {
        let category = match tone {
            Tone::Blue => TechCategory::Frontend,
            Tone::Green => TechCategory::Backend,
            Tone::Purple => TechCategory::Auth,
            Tone::Orange => TechCategory::Database,
        };
        self.tech(category)
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    pub fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(Theme::parse_hex_color("#FFC107"), Some(Color::Rgb(255, 193, 7)));
        assert_eq!(Theme::parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Theme::parse_hex_color("#12"), None);
        assert_eq!(Theme::parse_hex_color("#zzzzzz"), None);
        assert_eq!(Theme::parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_accent_override() {
        let theme = Theme::for_mode(false, Some("#123456"));
        assert!(!theme.dark);
        assert_eq!(theme.accent, Color::Rgb(0x12, 0x34, 0x56));

        let theme = Theme::for_mode(true, Some("nope"));
        assert_eq!(theme.accent, Theme::dark().accent);
    }

    #[test]
    fn test_tech_colours_follow_mode() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.tech(TechCategory::Frontend), light.tech(TechCategory::Frontend));
        assert_eq!(dark.tone(Tone::Green), dark.tech(TechCategory::Backend));
    }
}
