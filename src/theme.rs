use iced::{Color, Theme, theme::Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label for the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to dark mode",
            ThemeMode::Dark => "Switch to light mode",
        }
    }

    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }

    /// Stored preference first, then the desktop setting, then dark.
    pub fn initial(stored: Option<ThemeMode>) -> Self {
        stored.unwrap_or_else(Self::detect)
    }

    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => ThemeMode::Dark,
        }
    }
}

const PRIMARY_LIGHT: Color = Color::from_rgb8(0x25, 0x63, 0xEB);
const PRIMARY_DARK: Color = Color::from_rgb8(0x60, 0xA5, 0xFA);

pub fn resolve_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::custom(
            "Folio Light".to_string(),
            Palette {
                primary: PRIMARY_LIGHT,
                ..Palette::LIGHT
            },
        ),
        ThemeMode::Dark => Theme::custom(
            "Folio Dark".to_string(),
            Palette {
                background: Color::from_rgb8(0x11, 0x18, 0x27),
                text: Color::from_rgb8(0xF3, 0xF4, 0xF6),
                primary: PRIMARY_DARK,
                ..Palette::DARK
            },
        ),
    }
}

pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().background.base.color.r < 0.5
}
