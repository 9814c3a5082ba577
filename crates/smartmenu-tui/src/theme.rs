//! Ratatui styles derived from the configured palette.

use ratatui::style::{Color, Modifier, Style};
use smartmenu_core::config::{HexColor, ThemeConfig};

fn rgb(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Resolved colors for the sign-in screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub surface: Color,
    pub overlay: Color,
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            primary: rgb(config.primary),
            secondary: rgb(config.secondary),
            accent: rgb(config.accent),
            surface: rgb(config.surface),
            overlay: rgb(config.overlay),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn brand(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn field_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
        } else {
            self.muted()
        }
    }

    pub fn button(&self, focused: bool, enabled: bool) -> Style {
        let base = Style::default().fg(self.surface).bg(self.primary);
        match (enabled, focused) {
            (false, _) => base.bg(Color::DarkGray),
            (true, true) => base.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (true, false) => base,
        }
    }

    pub fn link(&self, focused: bool) -> Style {
        let base = Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED);
        if focused {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn spinner(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn dialog(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.overlay)
    }
}
