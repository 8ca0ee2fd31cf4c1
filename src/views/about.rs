use std::sync::Arc;

use iced::{
    Alignment, ContentFit, Element, Length, Task,
    widget::{column, container, image, row, text},
};

use crate::{
    app::message::{AboutMessage, Message},
    core::{
        content::{ABOUT_PARAGRAPHS, SERVICES, Service},
        profile::Profile,
        source::{Fetched, Source, load_profile},
    },
    styles::{self, font_size, spacing},
};

use super::{grid, section_frame, section_heading};

const AVATAR_SIZE: f32 = 280.0;
const SERVICE_COLUMNS: usize = 2;

#[derive(Debug, Clone, Default)]
pub enum Avatar {
    #[default]
    Placeholder,
    /// URL known, bytes still downloading.
    Pending(String),
    Ready(image::Handle),
}

#[derive(Default)]
pub struct AboutState {
    pub profile: Option<Profile>,
    pub avatar: Avatar,
    pub generation: u64,
    in_flight: Option<iced::task::Handle>,
}

impl AboutState {
    pub fn activate(&mut self, source: Arc<dyn Source>) -> Task<Message> {
        self.deactivate();
        self.generation += 1;
        self.profile = None;
        self.avatar = Avatar::Placeholder;

        let generation = self.generation;
        self.track(Task::perform(
            async move { load_profile(source.as_ref()).await },
            move |outcome| Message::About(AboutMessage::ProfileLoaded(generation, outcome)),
        ))
    }

    pub fn deactivate(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Records the profile and starts the avatar download. Failures leave the
    /// placeholder in place.
    pub fn apply_profile(
        &mut self,
        generation: u64,
        outcome: Fetched<Profile>,
        source: Arc<dyn Source>,
    ) -> Task<Message> {
        if generation != self.generation {
            log::debug!("Dropping profile from activation {generation}");
            return Task::none();
        }
        self.in_flight = None;

        let Fetched::Loaded(profile) = outcome else {
            return Task::none();
        };
        let url = profile.avatar_url.clone();
        self.profile = Some(profile);
        if url.trim().is_empty() {
            return Task::none();
        }

        self.avatar = Avatar::Pending(url.clone());
        self.track(Task::perform(
            async move { source.avatar(&url).await.map_err(|e| e.to_string()) },
            move |result| Message::About(AboutMessage::AvatarLoaded(generation, result)),
        ))
    }

    pub fn apply_avatar(&mut self, generation: u64, result: Result<Vec<u8>, String>) {
        if generation != self.generation || !matches!(self.avatar, Avatar::Pending(_)) {
            return;
        }
        self.in_flight = None;
        self.avatar = match result {
            Ok(bytes) if !bytes.is_empty() => Avatar::Ready(image::Handle::from_bytes(bytes)),
            Ok(_) => Avatar::Placeholder,
            Err(e) => {
                log::warn!("Avatar download failed: {e}");
                Avatar::Placeholder
            }
        };
    }

    pub fn avatar_url(&self) -> Option<&str> {
        match &self.avatar {
            Avatar::Pending(url) => Some(url),
            _ => self.profile.as_ref().map(|p| p.avatar_url.as_str()),
        }
    }

    fn track(&mut self, task: Task<Message>) -> Task<Message> {
        let (task, handle) = task.abortable();
        self.in_flight = Some(handle.abort_on_drop());
        task
    }
}

pub fn view<'a>(state: &'a AboutState, height: f32) -> Element<'a, Message> {
    let portrait: Element<'a, Message> = match &state.avatar {
        Avatar::Ready(handle) => image(handle.clone())
            .width(AVATAR_SIZE)
            .height(AVATAR_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        Avatar::Placeholder | Avatar::Pending(_) => container(
            text("Foto de Perfil")
                .size(font_size::BODY)
                .style(styles::muted_text),
        )
        .center_x(AVATAR_SIZE)
        .center_y(AVATAR_SIZE)
        .style(styles::avatar_placeholder)
        .into(),
    };

    let mut story = column![text("Olá, prazer em conhecê-lo!").size(font_size::HEADING)]
        .spacing(spacing::LG)
        .width(Length::Fill);
    for paragraph in ABOUT_PARAGRAPHS {
        story = story.push(
            text(*paragraph)
                .size(font_size::BODY)
                .style(styles::muted_text),
        );
    }
    if let Some(ref profile) = state.profile {
        story = story.push(profile_stats(profile));
    }

    let intro = row![container(portrait).style(styles::card).padding(spacing::SM), story]
        .spacing(spacing::XXL)
        .align_y(Alignment::Center);

    let services = column![
        text("Meus Serviços")
            .size(font_size::TITLE)
            .width(Length::Fill)
            .center(),
        grid(SERVICES.iter().map(service_card).collect(), SERVICE_COLUMNS),
    ]
    .spacing(spacing::XL);

    section_frame(
        column![
            section_heading(
                "Sobre Mim",
                "Desenvolvedor apaixonado por criar aplicações modernas e intuitivas.",
            ),
            intro,
            services,
        ]
        .spacing(spacing::XXL),
        height,
        styles::section_tinted,
    )
}

fn profile_stats(profile: &Profile) -> Element<'_, Message> {
    row![
        text(profile.display_name())
            .size(font_size::SUBHEADING)
            .style(styles::primary_text),
        text(format!("{} repositórios", profile.public_repos)).size(font_size::SMALL),
        text(format!("{} seguidores", profile.followers)).size(font_size::SMALL),
        text(format!("{} seguindo", profile.following)).size(font_size::SMALL),
    ]
    .spacing(spacing::LG)
    .align_y(Alignment::Center)
    .into()
}

fn service_card(service: &'static Service) -> Element<'static, Message> {
    container(
        column![
            text(service.title)
                .size(font_size::SUBHEADING)
                .style(styles::primary_text),
            text(service.description)
                .size(font_size::SMALL)
                .style(styles::muted_text),
        ]
        .spacing(spacing::SM),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::card)
    .into()
}
