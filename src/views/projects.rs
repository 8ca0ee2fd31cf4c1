use std::sync::Arc;

use iced::{
    Alignment, Element, Length, Task,
    widget::{button, column, container, row, space, text},
};

use crate::{
    app::message::{Message, ProjectsMessage},
    core::{
        display::{
            DESCRIPTION_MAX_CHARS, clamp_description, format_date, hex_color, language_color,
            topic_preview,
        },
        navigation::{PROJECT_CARD_HEIGHT, PROJECT_COLUMNS, STATUS_HEIGHT},
        repository::Repository,
        source::{Fetched, Source, load_repositories},
    },
    styles::{self, font_size, spacing},
};

use super::{grid, section_frame, section_heading};

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Loaded(Vec<Repository>),
    Empty,
    Failed(String),
}

pub struct ProjectsState {
    pub phase: Phase,
    pub generation: u64,
    in_flight: Option<iced::task::Handle>,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            generation: 0,
            in_flight: None,
        }
    }
}

impl ProjectsState {
    /// Starts a fresh fetch, cancelling whatever the previous activation left
    /// running.
    pub fn activate(&mut self, source: Arc<dyn Source>) -> Task<Message> {
        self.deactivate();
        self.generation += 1;
        self.phase = Phase::Loading;

        let generation = self.generation;
        let (task, handle) = Task::perform(
            async move { load_repositories(source.as_ref()).await },
            move |outcome| Message::Projects(ProjectsMessage::Loaded(generation, outcome)),
        )
        .abortable();
        self.in_flight = Some(handle.abort_on_drop());
        task
    }

    pub fn deactivate(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Returns `false` when the outcome belongs to an earlier activation.
    pub fn apply(&mut self, generation: u64, outcome: Fetched<Vec<Repository>>) -> bool {
        if generation != self.generation {
            log::debug!(
                "Dropping repositories from activation {generation}, current is {}",
                self.generation
            );
            return false;
        }
        self.in_flight = None;
        if outcome.is_failed() {
            log::warn!("Repository list unavailable, showing error state");
        }
        self.phase = match outcome {
            Fetched::Loaded(repos) => Phase::Loaded(repos),
            Fetched::Empty => Phase::Empty,
            Fetched::Failed(reason) => Phase::Failed(reason),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Number of cards on screen, `None` while a status message shows instead.
    pub fn card_count(&self) -> Option<usize> {
        match &self.phase {
            Phase::Loaded(repos) => Some(repos.len()),
            _ => None,
        }
    }
}

pub fn view<'a>(state: &'a ProjectsState, height: f32) -> Element<'a, Message> {
    let refresh = if state.is_loading() {
        button(text("Carregando...").size(font_size::SMALL))
            .padding([spacing::XS, 14.0])
            .style(styles::outlined_button)
    } else {
        button(text("Atualizar").size(font_size::SMALL))
            .padding([spacing::XS, 14.0])
            .style(styles::outlined_button)
            .on_press(Message::Projects(ProjectsMessage::Refresh))
    };

    let heading = column![
        section_heading(
            "Meus Projetos",
            "Confira meus projetos recentes no GitHub. Criados com React, React Native e outras tecnologias.",
        ),
        container(refresh).center_x(Length::Fill),
    ]
    .spacing(spacing::SM);

    let body: Element<'_, Message> = match &state.phase {
        Phase::Loading => status_box(
            column![
                text("⟳").size(font_size::TITLE).style(styles::primary_text),
                text("Carregando repositórios...").size(font_size::BODY),
            ]
            .spacing(spacing::SM)
            .align_x(Alignment::Center),
            styles::notice_banner,
        ),
        Phase::Failed(reason) => status_box(
            column![
                text("Erro ao carregar repositórios. Por favor, tente novamente.")
                    .size(font_size::BODY),
                text(reason.as_str()).size(font_size::CAPTION),
                text("Por favor, verifique se o nome de usuário GitHub está configurado corretamente.")
                    .size(font_size::SMALL),
            ]
            .spacing(spacing::XS)
            .align_x(Alignment::Center),
            styles::error_banner,
        ),
        Phase::Empty => status_box(
            text(
                "Nenhum repositório encontrado. Verifique se o nome de usuário GitHub está configurado corretamente.",
            )
            .size(font_size::BODY)
            .style(styles::muted_text),
            styles::notice_banner,
        ),
        Phase::Loaded(repos) => grid(repos.iter().map(repo_card).collect(), PROJECT_COLUMNS),
    };

    section_frame(column![heading, body], height, styles::section_tinted)
}

fn status_box<'a>(
    content: impl Into<Element<'a, Message>>,
    style: fn(&iced::Theme) -> container::Style,
) -> Element<'a, Message> {
    container(content)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .center_y(STATUS_HEIGHT)
        .style(style)
        .into()
}

fn repo_card(repo: &Repository) -> Element<'_, Message> {
    let mut links = row![
        button(text("GitHub").size(font_size::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::link_button)
            .on_press(Message::OpenLink(repo.html_url.clone())),
    ]
    .spacing(spacing::XXS);
    if let Some(ref homepage) = repo.homepage {
        links = links.push(
            button(text("Site ↗").size(font_size::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::link_button)
                .on_press(Message::OpenLink(homepage.clone())),
        );
    }

    let header = row![
        text(repo.name.as_str())
            .size(font_size::HEADING)
            .width(Length::Fill),
        links,
    ]
    .align_y(Alignment::Center);

    let description = text(clamp_description(
        repo.description_or_default(),
        DESCRIPTION_MAX_CHARS,
    ))
        .size(font_size::SMALL)
        .style(styles::muted_text);

    let preview = topic_preview(&repo.topics);
    let mut topics = row![].spacing(spacing::XS);
    for topic in preview.shown {
        topics = topics.push(
            container(text(topic.as_str()).size(font_size::CAPTION))
                .padding([2.0, spacing::SM])
                .style(styles::topic_chip),
        );
    }
    if let Some(more) = preview.overflow_label() {
        topics = topics.push(
            container(text(more).size(font_size::CAPTION))
                .padding([2.0, spacing::SM])
                .style(styles::overflow_chip),
        );
    }

    let mut stats = row![
        text(format!("★ {}", repo.stargazers_count)).size(font_size::SMALL),
        text(format!("⑂ {}", repo.forks_count)).size(font_size::SMALL),
        space().width(Length::Fill),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);
    if let Some(ref language) = repo.language {
        let color = hex_color(language_color(language));
        stats = stats.push(
            row![
                container(space())
                    .width(10)
                    .height(10)
                    .style(styles::language_dot(color)),
                text(language.as_str()).size(font_size::SMALL),
            ]
            .spacing(spacing::XS)
            .align_y(Alignment::Center),
        );
    }

    let mut content = column![header, description, topics, space().height(Length::Fill), stats]
        .spacing(spacing::SM)
        .height(Length::Fill);
    if let Some(updated) = repo.updated_at {
        let updated = format_date(updated.with_timezone(&chrono::Local));
        content = content.push(
            text(format!("Atualizado em {updated}"))
                .size(font_size::CAPTION)
                .style(styles::muted_text),
        );
    }

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(PROJECT_CARD_HEIGHT)
        .clip(true)
        .style(styles::card)
        .into()
}
