use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, text},
};

use crate::{
    app::message::Message,
    core::navigation::Section,
    styles::{self, font_size, spacing},
};

use super::social_buttons;

pub fn view<'a>(height: f32) -> Element<'a, Message> {
    let actions = row![
        button(text("Ver Projetos").size(font_size::BODY))
            .padding([spacing::MD, spacing::XL])
            .style(styles::solid_button)
            .on_press(Message::NavigateTo(Section::Projects)),
        button(text("Contato").size(font_size::BODY))
            .padding([spacing::MD, spacing::XL])
            .style(styles::outlined_button)
            .on_press(Message::NavigateTo(Section::Contact)),
    ]
    .spacing(spacing::LG);

    let pitch = column![
        text("Mobile & Web Developer").size(font_size::DISPLAY),
        text(
            "Criando experiências digitais impressionantes com React, React Native e Firebase. \
             Especialista em desenvolvimento de aplicativos móveis e publicação em lojas.",
        )
        .size(font_size::HEADING)
        .style(styles::muted_text),
        actions,
        social_buttons(styles::icon_button),
    ]
    .spacing(spacing::XL)
    .width(Length::FillPortion(3));

    let showcase = container(
        column![
            container(
                text("</>")
                    .size(font_size::DISPLAY)
                    .style(styles::primary_text),
            )
            .center_x(Length::Fill)
            .center_y(220)
            .style(styles::avatar_placeholder),
            text("Desenvolvedor Full Stack").size(font_size::HEADING),
            text(
                "Especialista em React & React Native com experiência em publicação de apps em App Store e Google Play.",
            )
            .size(font_size::BODY)
            .style(styles::muted_text),
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::XL)
    .width(Length::FillPortion(2))
    .style(styles::card);

    container(
        row![pitch, showcase]
            .spacing(spacing::XXL * 2.0)
            .align_y(Alignment::Center),
    )
    .padding([spacing::XXL, spacing::PAGE_X])
    .width(Length::Fill)
    .center_y(height)
    .style(styles::section_plain)
    .into()
}
