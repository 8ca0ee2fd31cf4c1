use iced::{
    Alignment, Element, Length,
    widget::{button, container, row, space, text, tooltip},
};

use crate::{
    app::message::Message,
    core::{content::BRAND, navigation::Section},
    styles::{self, font_size, spacing},
    theme::ThemeMode,
};

pub const HEADER_HEIGHT: f32 = 64.0;

pub fn view<'a>(mode: ThemeMode, scrolled: bool, active: Section) -> Element<'a, Message> {
    let brand = button(
        text(BRAND)
            .size(font_size::HEADING)
            .style(styles::primary_text),
    )
    .padding(0)
    .style(styles::nav_button)
    .on_press(Message::NavigateTo(Section::Home));

    let mut nav = row![].spacing(spacing::XL).align_y(Alignment::Center);
    for section in Section::ALL {
        let label = text(section.label()).size(font_size::BODY);
        let label = if section == active {
            label.style(styles::primary_text)
        } else {
            label
        };
        nav = nav.push(
            button(label)
                .padding([spacing::XXS, 0.0])
                .style(styles::nav_button)
                .on_press(Message::NavigateTo(section)),
        );
    }

    let theme_toggle = tooltip(
        button(
            text(mode.toggle_glyph())
                .size(font_size::SUBHEADING)
                .center()
                .width(Length::Fill),
        )
        .width(36)
        .height(36)
        .padding(spacing::XS)
        .style(styles::icon_button)
        .on_press(Message::ToggleTheme),
        text(mode.toggle_label()).size(font_size::CAPTION),
        tooltip::Position::Bottom,
    );

    let padding_y = if scrolled { spacing::SM } else { spacing::LG };

    container(
        row![brand, space().width(Length::Fill), nav, theme_toggle]
            .spacing(spacing::XL)
            .align_y(Alignment::Center),
    )
    .padding([padding_y, spacing::PAGE_X])
    .width(Length::Fill)
    .center_y(HEADER_HEIGHT)
    .style(styles::header_container(scrolled))
    .into()
}
