use iced::{
    Background, Border, Color, Shadow, Theme, Vector,
    widget::{button, container, text},
};

use crate::theme::is_dark;

pub mod font_size {
    pub const DISPLAY: f32 = 44.0;
    pub const TITLE: f32 = 30.0;
    pub const HEADING: f32 = 20.0;
    pub const SUBHEADING: f32 = 17.0;
    pub const BODY: f32 = 15.0;
    pub const SMALL: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
    pub const GLYPH: f32 = 34.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 6.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const XXL: f32 = 32.0;
    pub const PAGE_X: f32 = 48.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const XL: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

fn secondary_text(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb8(0xD1, 0xD5, 0xDB)
    } else {
        Color::from_rgb8(0x4B, 0x55, 0x63)
    }
}

pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(secondary_text(theme)),
    }
}

pub fn primary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().primary.base.color),
    }
}

pub fn danger_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

pub fn success_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().success.base.color),
    }
}

// --- Header ---

/// Transparent at the top of the page, solid once scrolled.
pub fn header_container(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        if !scrolled {
            return container::Style::default();
        }
        let palette = theme.extended_palette();
        container::Style {
            background: Some(
                Color {
                    a: 0.85,
                    ..palette.background.base.color
                }
                .into(),
            ),
            shadow: Shadow {
                color: Color {
                    a: 0.12,
                    ..Color::BLACK
                },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        }
    }
}

pub fn nav_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.base.color,
        _ => palette.background.base.text,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.primary.base.color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: Some(palette.background.weak.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

// --- Sections ---

pub fn section_plain(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        ..Default::default()
    }
}

pub fn section_tinted(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..Default::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb8(0x11, 0x18, 0x27).into()),
        text_color: Some(Color::from_rgb8(0x9C, 0xA3, 0xAF)),
        ..Default::default()
    }
}

// --- Cards ---

pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color {
                a: 0.08,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.06,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

pub fn avatar_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// --- Badges ---

pub fn topic_chip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.weak.color.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette.primary.weak.text),
        ..Default::default()
    }
}

pub fn overflow_chip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Round swatch in a repository's language color.
pub fn language_dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// --- Skill bars ---

pub fn bar_track(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn bar_fill(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.base.color.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// --- Banners ---

pub fn error_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.danger.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette.danger.base.color,
            radius: radius::MD.into(),
        },
        text_color: Some(palette.danger.weak.text),
        ..Default::default()
    }
}

pub fn notice_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

// --- Buttons ---

pub fn solid_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => Color::from_rgb8(0x9C, 0xA3, 0xAF),
        _ => palette.primary.base.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.12,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

pub fn outlined_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    match status {
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.strong.color,
            border: Border {
                radius: radius::LG.into(),
                width: 1.0,
                color: palette.primary.base.color,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.weak.color,
            border: Border {
                radius: radius::LG.into(),
                width: 1.0,
                color: palette.primary.strong.color,
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: Border {
                radius: radius::LG.into(),
                width: 1.0,
                color: palette.primary.base.color,
            },
            ..Default::default()
        },
    }
}

pub fn link_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.base.color,
        _ => secondary_text(theme),
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Footer links sit on the fixed dark footer in both themes.
pub fn footer_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        _ => Color::from_rgb8(0x9C, 0xA3, 0xAF),
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
