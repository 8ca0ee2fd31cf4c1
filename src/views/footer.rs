use chrono::Datelike;
use iced::{
    Color, Element, Length,
    widget::{button, column, container, row, rule, text},
};

use crate::{
    app::message::Message,
    core::{
        content::{BRAND, EMAIL, SERVICES},
        navigation::Section,
    },
    styles::{self, font_size, spacing},
};

use super::social_buttons;

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(font_size::SUBHEADING)
        .color(Color::WHITE)
        .into()
}

pub fn view<'a>() -> Element<'a, Message> {
    let about = column![
        text(BRAND).size(font_size::HEADING).color(Color::WHITE),
        text("Desenvolvedor Mobile & Web especializado em React, React Native e Firebase.")
            .size(font_size::SMALL),
        social_buttons(styles::footer_link),
    ]
    .spacing(spacing::MD)
    .width(Length::FillPortion(2));

    let mut links = column![heading("Links")].spacing(spacing::XS);
    for section in Section::ALL {
        links = links.push(
            button(text(section.footer_label()).size(font_size::SMALL))
                .padding(0)
                .style(styles::footer_link)
                .on_press(Message::NavigateTo(section)),
        );
    }

    let mut services = column![heading("Serviços")].spacing(spacing::XS);
    for service in SERVICES {
        services = services.push(text(service.title).size(font_size::SMALL));
    }

    let contact = column![
        heading("Contato"),
        button(text(EMAIL).size(font_size::SMALL))
            .padding(0)
            .style(styles::footer_link)
            .on_press(Message::OpenLink(format!("mailto:{EMAIL}"))),
        text("Brasil").size(font_size::SMALL),
    ]
    .spacing(spacing::XS);

    let year = chrono::Local::now().year();
    let bottom = row![
        text(format!("© {year} {BRAND}. Todos os direitos reservados."))
            .size(font_size::CAPTION)
            .width(Length::Fill),
        text("Desenvolvido com Rust e iced").size(font_size::CAPTION),
    ];

    container(
        column![
            row![
                about,
                links.width(Length::Fill),
                services.width(Length::Fill),
                contact.width(Length::Fill),
            ]
            .spacing(spacing::XXL),
            rule::horizontal(1),
            bottom,
        ]
        .spacing(spacing::XL),
    )
    .padding([spacing::XXL, spacing::PAGE_X])
    .width(Length::Fill)
    .style(styles::footer)
    .into()
}
