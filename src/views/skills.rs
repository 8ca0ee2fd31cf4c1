use iced::{
    Alignment, Element, Length,
    widget::{column, container, row, rule, space, text},
};

use crate::{
    app::message::Message,
    core::{
        content::{SKILL_CATEGORIES, Skill, SkillCategory},
        display::{proficiency_label, proficiency_ratio},
        navigation::{CATEGORY_PADDING, GRID_GAP, PageLayout, SKILL_CARD_HEIGHT, SKILL_COLUMNS},
    },
    styles::{self, font_size, spacing},
};

use super::{grid, section_frame, section_heading};

const BAR_HEIGHT: f32 = 8.0;

/// Skill counts per category, in display order.
pub fn skill_counts() -> Vec<usize> {
    SKILL_CATEGORIES.iter().map(|c| c.skills.len()).collect()
}

pub fn view<'a>(height: f32) -> Element<'a, Message> {
    let mut categories = column![].spacing(GRID_GAP * 2.0);
    for category in SKILL_CATEGORIES {
        categories = categories.push(category_panel(category));
    }

    section_frame(
        column![
            section_heading(
                "Minhas Habilidades",
                "Tecnologias e ferramentas que eu utilizo para criar aplicações web e mobile de alta qualidade.",
            ),
            categories,
        ],
        height,
        styles::section_plain,
    )
}

fn category_panel(category: &'static SkillCategory) -> Element<'static, Message> {
    let cards = category.skills.iter().map(skill_card).collect();

    container(
        column![
            text(category.name).size(font_size::HEADING),
            rule::horizontal(1),
            grid(cards, SKILL_COLUMNS),
        ]
        .spacing(spacing::MD),
    )
    .padding(CATEGORY_PADDING)
    .width(Length::Fill)
    .height(PageLayout::category_height(category.skills.len()))
    .style(styles::panel)
    .into()
}

fn skill_card(skill: &'static Skill) -> Element<'static, Message> {
    let level = skill.proficiency.level();

    container(
        column![
            text(skill.glyph)
                .size(font_size::GLYPH)
                .style(styles::primary_text),
            text(skill.name).size(font_size::SUBHEADING),
            proficiency_bar(level),
            text(proficiency_label(level))
                .size(font_size::CAPTION)
                .style(styles::muted_text),
        ]
        .spacing(spacing::XS)
        .align_x(Alignment::Center),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .height(SKILL_CARD_HEIGHT)
    .style(styles::card)
    .into()
}

fn proficiency_bar(level: u8) -> Element<'static, Message> {
    let filled = (proficiency_ratio(level) * 100.0).round() as u16;
    let mut bar = row![
        container(space())
            .width(Length::FillPortion(filled.max(1)))
            .height(BAR_HEIGHT)
            .style(styles::bar_fill),
    ];
    if filled < 100 {
        bar = bar.push(space().width(Length::FillPortion(100 - filled)));
    }

    container(bar)
        .width(Length::Fill)
        .height(BAR_HEIGHT)
        .style(styles::bar_track)
        .into()
}
