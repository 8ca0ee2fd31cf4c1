pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;

use iced::{
    Alignment, Element, Length, Theme,
    widget::{button, column, container, row, space, text, tooltip},
};

use crate::{
    app::message::Message,
    core::{
        content::SOCIAL_LINKS,
        navigation::{GRID_GAP, SECTION_PADDING},
    },
    styles::{self, font_size, spacing},
};

/// Centered title plus one-line pitch opening every content section.
pub fn section_heading<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(font_size::TITLE),
        text(subtitle)
            .size(font_size::SUBHEADING)
            .style(styles::muted_text)
            .center(),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Wraps a section at the exact height the page layout reserved for it.
pub fn section_frame<'a>(
    content: impl Into<Element<'a, Message>>,
    height: f32,
    style: fn(&Theme) -> container::Style,
) -> Element<'a, Message> {
    container(content)
        .padding([SECTION_PADDING, spacing::PAGE_X])
        .width(Length::Fill)
        .height(height)
        .clip(true)
        .style(style)
        .into()
}

/// Lays cards out left to right, `columns` per row, padding the last row so
/// every cell keeps the same width.
pub fn grid<'a>(items: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = column![].spacing(GRID_GAP);
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        let mut cells: Vec<Element<'a, Message>> = items.by_ref().take(columns).collect();
        while cells.len() < columns {
            cells.push(space().width(Length::Fill).into());
        }
        rows = rows.push(row(cells).spacing(GRID_GAP));
    }
    rows.width(Length::Fill).into()
}

pub fn social_buttons<'a>(
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = SOCIAL_LINKS
        .iter()
        .map(|link| {
            tooltip(
                button(
                    text(link.icon.glyph())
                        .size(font_size::SMALL)
                        .center()
                        .width(Length::Fill),
                )
                .width(40)
                .height(40)
                .padding(spacing::SM)
                .style(style)
                .on_press(Message::OpenLink(link.url.to_string())),
                text(link.name).size(font_size::CAPTION),
                tooltip::Position::Bottom,
            )
            .into()
        })
        .collect();
    row(buttons).spacing(spacing::MD).into()
}
