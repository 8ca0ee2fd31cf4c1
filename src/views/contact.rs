use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, text, text_editor, text_input},
};

use crate::{
    app::message::{ContactMessage, Message},
    core::{
        content::CONTACT_DETAILS,
        contact::{ContactForm, Field, SubmitStatus},
    },
    styles::{self, font_size, spacing},
};

use super::{section_frame, section_heading, social_buttons};

/// About five lines of body text.
const MESSAGE_EDITOR_HEIGHT: f32 = 124.0;

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Seu nome",
        Field::Email => "seu@email.com",
        Field::Subject => "Assunto da mensagem",
        Field::Message => "Sua mensagem...",
    }
}

pub fn view<'a>(form: &'a ContactForm, height: f32) -> Element<'a, Message> {
    section_frame(
        column![
            section_heading(
                "Entre em Contato",
                "Tem um projeto em mente ou quer conversar? Entre em contato comigo!",
            ),
            row![info_panel(), form_panel(form)]
                .spacing(spacing::XXL)
                .align_y(Alignment::Start),
        ]
        .spacing(spacing::XXL),
        height,
        styles::section_plain,
    )
}

fn info_panel<'a>() -> Element<'a, Message> {
    let mut details = column![].spacing(spacing::LG);
    for detail in CONTACT_DETAILS {
        details = details.push(
            column![
                text(detail.label)
                    .size(font_size::SMALL)
                    .style(styles::muted_text),
                text(detail.value).size(font_size::BODY),
            ]
            .spacing(spacing::XXS),
        );
    }

    container(
        column![
            text("Informações de Contato").size(font_size::HEADING),
            details,
            text("Siga-me").size(font_size::SUBHEADING),
            social_buttons(styles::icon_button),
        ]
        .spacing(spacing::XL),
    )
    .padding(spacing::XL)
    .width(Length::FillPortion(2))
    .style(styles::panel)
    .into()
}

fn form_panel(form: &ContactForm) -> Element<'_, Message> {
    let editable = form.is_editable();
    let invalid = form.error.as_ref().and_then(|e| e.field());

    let mut fields = column![].spacing(spacing::LG);
    for field in Field::ALL {
        let input: Element<'_, Message> = if field == Field::Message {
            let mut editor = text_editor(form.message_editor())
                .placeholder(placeholder(field))
                .padding(spacing::MD)
                .size(font_size::BODY)
                .height(MESSAGE_EDITOR_HEIGHT);
            if editable {
                editor = editor
                    .on_action(|action| Message::Contact(ContactMessage::MessageEdited(action)));
            }
            editor.into()
        } else {
            let mut input = text_input(placeholder(field), form.fields.get(field))
                .padding(spacing::MD)
                .size(font_size::BODY);
            if editable {
                input = input.on_input(move |value| {
                    Message::Contact(ContactMessage::FieldChanged(field, value))
                });
            }
            input.into()
        };

        let label = text(field.label()).size(font_size::SMALL);
        let label = if invalid == Some(field) {
            label.style(styles::danger_text)
        } else {
            label
        };
        fields = fields.push(column![label, input].spacing(spacing::XS));
    }

    if let Some(ref error) = form.error {
        fields = fields.push(
            text(error.to_string())
                .size(font_size::SMALL)
                .style(styles::danger_text),
        );
    }

    let caption = match form.status {
        SubmitStatus::Idle => "Enviar Mensagem",
        SubmitStatus::Submitting => "Enviando...",
        SubmitStatus::Success => "Mensagem Enviada!",
    };
    let mut caption = text(caption).size(font_size::BODY).center().width(Length::Fill);
    if form.status == SubmitStatus::Success {
        caption = caption.style(styles::success_text);
    }
    let mut submit = button(caption)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::solid_button);
    if editable {
        submit = submit.on_press(Message::Contact(ContactMessage::Submit));
    }

    container(
        column![
            text("Envie uma Mensagem").size(font_size::HEADING),
            fields,
            submit,
        ]
        .spacing(spacing::XL),
    )
    .padding(spacing::XL)
    .width(Length::FillPortion(3))
    .style(styles::panel)
    .into()
}
