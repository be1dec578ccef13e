//! Theme definitions for homefeed
//!
//! Provides three built-in themes: Light, Dark, and Transparent.
//! Each theme defines colors for all UI elements.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub active_bg: Color,

    // Surfaces
    pub hero_bg: Color,
    pub footer_bg: Color,
    pub border: Color,

    // Buttons
    pub button_bg: Color,
    pub button_fg: Color,
    pub badge: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            // Base
            bg: Color::Rgb(245, 245, 245),       // #f5f5f5
            fg: Color::Rgb(51, 51, 51),          // #333333
            fg_dim: Color::Rgb(128, 128, 128),   // #808080

            // Accent (green)
            accent: Color::Rgb(53, 228, 70),     // #35e446
            active_bg: Color::Rgb(45, 215, 2),   // #2dd702

            // Surfaces
            hero_bg: Color::Rgb(231, 44, 56),    // #e72c38
            footer_bg: Color::Rgb(225, 225, 225), // #e1e1e1
            border: Color::Rgb(0, 0, 0),

            // Buttons
            button_bg: Color::Rgb(0, 123, 255),  // #007bff
            button_fg: Color::Rgb(255, 255, 255),
            badge: Color::Rgb(0, 0, 0),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            // Base
            bg: Color::Rgb(40, 40, 40),          // #282828
            fg: Color::Rgb(235, 219, 178),       // #ebdbb2
            fg_dim: Color::Rgb(146, 131, 116),   // #928374

            // Accent
            accent: Color::Rgb(184, 187, 38),    // #b8bb26
            active_bg: Color::Rgb(121, 116, 14), // #79740e

            // Surfaces
            hero_bg: Color::Rgb(157, 0, 6),      // #9d0006
            footer_bg: Color::Rgb(60, 56, 54),   // #3c3836
            border: Color::Rgb(168, 153, 132),   // #a89984

            // Buttons
            button_bg: Color::Rgb(69, 133, 136), // #458588
            button_fg: Color::Rgb(235, 219, 178),
            badge: Color::Rgb(250, 189, 47),     // #fabd2f
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            // Base - use terminal defaults
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            // Accent
            accent: Color::Green,
            active_bg: Color::Green,

            // Surfaces
            hero_bg: Color::Red,
            footer_bg: Color::Reset,
            border: Color::DarkGray,

            // Buttons
            button_bg: Color::Blue,
            button_fg: Color::White,
            badge: Color::Yellow,
        }
    }

    // Style helpers for common UI patterns

    /// Background fill for whole screens
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Screen label style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Profile name under an avatar
    pub fn profile_name(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge text drawn over an avatar
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.badge)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for circular buttons and avatars
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Green divider under the carousel
    pub fn divider(&self) -> Style {
        Style::default().fg(self.accent).bg(self.bg)
    }

    /// Hero panel fill
    pub fn hero(&self) -> Style {
        Style::default()
            .fg(Color::Rgb(255, 255, 255))
            .bg(self.hero_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Footer bar fill
    pub fn footer(&self) -> Style {
        Style::default().fg(self.fg).bg(self.footer_bg)
    }

    /// Footer icon for the mounted route
    pub fn footer_active(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.active_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Keyboard cursor in the footer
    pub fn footer_cursor(&self) -> Style {
        self.footer().add_modifier(Modifier::UNDERLINED)
    }

    /// Back button on placeholder screens
    pub fn button(&self) -> Style {
        Style::default().fg(self.button_fg).bg(self.button_bg)
    }

    /// Keyboard focus on a focusable section
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let light = Theme::from_name(ThemeName::Light);
        assert_eq!(light.bg, Color::Rgb(245, 245, 245));

        let dark = Theme::from_name(ThemeName::Dark);
        assert_eq!(dark.bg, Color::Rgb(40, 40, 40));

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert_eq!(transparent.bg, Color::Reset);
    }

    #[test]
    fn test_active_differs_from_plain_footer() {
        for name in [ThemeName::Light, ThemeName::Dark, ThemeName::Transparent] {
            let theme = Theme::from_name(name);
            assert_ne!(theme.footer_active(), theme.footer());
        }
    }
}
