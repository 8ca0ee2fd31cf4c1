pub mod message;

use std::{path::PathBuf, sync::Arc, time::Duration};

use iced::{
    Element, Length, Subscription, Task, Theme,
    time::Instant,
    widget::{Id, column, operation, scrollable, stack},
};

use crate::{
    adapters::GithubSource,
    config::FolioConfig,
    core::{
        contact::{ContactForm, RESET_DELAY, SUBMIT_DELAY, simulate_delivery},
        launcher,
        navigation::{HEADER_SOLID_AFTER, PageLayout, Section, SmoothScroll},
        source::Source,
    },
    theme::{ThemeMode, resolve_theme},
    views::{self, about::AboutState, projects::ProjectsState},
};

pub use message::Message;
use message::{AboutMessage, ContactMessage, ProjectsMessage};

pub const APP_NAME: &str = "Folio";

const SCROLL_TICK: Duration = Duration::from_millis(16);

fn page_id() -> Id {
    Id::new("page")
}

pub struct App {
    source: Arc<dyn Source>,
    config: FolioConfig,
    config_path: PathBuf,
    theme_mode: ThemeMode,
    theme: Theme,
    projects: ProjectsState,
    about: AboutState,
    contact: ContactForm,
    scroll_y: f32,
    scroll: Option<SmoothScroll>,
    /// Anchor to jump to once the repository list has settled the layout.
    start_at: Option<Section>,
}

impl App {
    pub fn new(start_at: Option<Section>) -> (Self, Task<Message>) {
        let config_path = FolioConfig::config_path();
        let config = FolioConfig::load_from(&config_path);
        let (mut app, task) =
            Self::with_source(Arc::new(GithubSource::default()), config, config_path);
        app.start_at = start_at.filter(|section| *section != Section::Home);
        (app, task)
    }

    pub fn with_source(
        source: Arc<dyn Source>,
        config: FolioConfig,
        config_path: PathBuf,
    ) -> (Self, Task<Message>) {
        let theme_mode = ThemeMode::initial(config.theme());
        log::info!("Starting in {} mode", theme_mode.as_str());

        let mut app = Self {
            source,
            config,
            config_path,
            theme_mode,
            theme: resolve_theme(theme_mode),
            projects: ProjectsState::default(),
            about: AboutState::default(),
            contact: ContactForm::default(),
            scroll_y: 0.0,
            scroll: None,
            start_at: None,
        };

        let init_task = Task::batch([
            app.projects.activate(app.source.clone()),
            app.about.activate(app.source.clone()),
        ]);
        (app, init_task)
    }

    pub fn title(&self) -> String {
        let section = self.layout().section_at(self.scroll_y);
        format!("{APP_NAME} - {}", section.label())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(section) => {
                let target = self.layout().anchor_offset(section);
                log::debug!("Scrolling to {} at {target}", section.anchor());
                self.scroll = Some(SmoothScroll::new(self.scroll_y, target, Instant::now()));
            }
            Message::ScrollTick(now) => {
                let Some(scroll) = self.scroll else {
                    return Task::none();
                };
                let y = scroll.position(now);
                if scroll.is_finished(now) {
                    self.scroll = None;
                }
                self.scroll_y = y;
                return operation::scroll_to(page_id(), scrollable::AbsoluteOffset { x: 0.0, y });
            }
            Message::Scrolled(y) => {
                // A position the animation did not produce means the user took over.
                if self.scroll.is_some() && (y - self.scroll_y).abs() > 1.0 {
                    self.scroll = None;
                }
                self.scroll_y = y;
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.theme = resolve_theme(self.theme_mode);
                self.config.set_theme(self.theme_mode);
                log::info!("Theme set to {}", self.theme_mode.as_str());

                let config = self.config.clone();
                let path = self.config_path.clone();
                return Task::perform(async move { config.save_to(&path) }, Message::ThemeSaved);
            }
            Message::ThemeSaved(result) => {
                if let Err(e) = result {
                    log::error!("Failed to save theme preference: {e}");
                }
            }
            Message::OpenLink(url) => {
                if let Err(e) = launcher::open_url(&url) {
                    log::error!("Failed to open {url}: {e}");
                }
            }
            Message::Projects(msg) => return self.update_projects(msg),
            Message::About(msg) => return self.update_about(msg),
            Message::Contact(msg) => return self.update_contact(msg),
        }
        Task::none()
    }

    fn update_projects(&mut self, msg: ProjectsMessage) -> Task<Message> {
        match msg {
            ProjectsMessage::Refresh => {
                if !self.projects.is_loading() {
                    return self.projects.activate(self.source.clone());
                }
            }
            ProjectsMessage::Loaded(generation, outcome) => {
                if self.projects.apply(generation, outcome) {
                    if let Some(section) = self.start_at.take() {
                        return Task::done(Message::NavigateTo(section));
                    }
                }
            }
        }
        Task::none()
    }

    fn update_about(&mut self, msg: AboutMessage) -> Task<Message> {
        match msg {
            AboutMessage::ProfileLoaded(generation, outcome) => {
                return self
                    .about
                    .apply_profile(generation, outcome, self.source.clone());
            }
            AboutMessage::AvatarLoaded(generation, result) => {
                self.about.apply_avatar(generation, result);
            }
        }
        Task::none()
    }

    fn update_contact(&mut self, msg: ContactMessage) -> Task<Message> {
        match msg {
            ContactMessage::FieldChanged(field, value) => {
                self.contact.set(field, value);
            }
            ContactMessage::MessageEdited(action) => {
                self.contact.edit_message(action);
            }
            ContactMessage::Submit => match self.contact.submit() {
                Ok(()) => {
                    log::info!("Contact form submitted");
                    return Task::perform(simulate_delivery(SUBMIT_DELAY), |()| {
                        Message::Contact(ContactMessage::SubmitElapsed)
                    });
                }
                Err(e) => log::debug!("Contact form rejected: {e}"),
            },
            ContactMessage::SubmitElapsed => {
                if self.contact.finish_submit() {
                    return Task::perform(simulate_delivery(RESET_DELAY), |()| {
                        Message::Contact(ContactMessage::ResetElapsed)
                    });
                }
            }
            ContactMessage::ResetElapsed => {
                self.contact.reset();
            }
        }
        Task::none()
    }

    fn layout(&self) -> PageLayout {
        PageLayout::new(self.projects.card_count(), &views::skills::skill_counts())
    }

    pub fn view(&self) -> Element<'_, Message> {
        let layout = self.layout();

        let sections = column![
            views::hero::view(layout.height(Section::Home)),
            views::projects::view(&self.projects, layout.height(Section::Projects)),
            views::skills::view(layout.height(Section::Skills)),
            views::about::view(&self.about, layout.height(Section::About)),
            views::contact::view(&self.contact, layout.height(Section::Contact)),
            views::footer::view(),
        ]
        .width(Length::Fill);

        let page = scrollable(sections)
            .id(page_id())
            .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
            .width(Length::Fill)
            .height(Length::Fill);

        let header = views::header::view(
            self.theme_mode,
            self.scroll_y > HEADER_SOLID_AFTER,
            layout.section_at(self.scroll_y),
        );

        stack![page, header].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.scroll.is_some() {
            iced::time::every(SCROLL_TICK).map(Message::ScrollTick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Option<Theme> {
        Some(self.theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            contact::{Field, SubmitStatus},
            source::{
                Fetched,
                testing::{StaticSource, profile, repo},
            },
        },
        theme::is_dark,
        views::projects::Phase,
    };

    fn app_with(config: FolioConfig) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let source = StaticSource {
            repositories: Some(vec![repo(1, "a")]),
            profile: Some(profile()),
            ..StaticSource::failing(500)
        };
        let (app, _task) =
            App::with_source(Arc::new(source), config, dir.path().join("config.toml"));
        (app, dir)
    }

    fn stored(mode: ThemeMode) -> FolioConfig {
        let mut config = FolioConfig::default();
        config.set_theme(mode);
        config
    }

    #[test]
    fn boot_starts_both_fetches() {
        let (app, _dir) = app_with(stored(ThemeMode::Dark));
        assert!(app.projects.is_loading());
        assert_eq!(app.projects.generation, 1);
        assert_eq!(app.about.generation, 1);
        assert!(app.scroll.is_none());
    }

    #[test]
    fn toggle_switches_palette_and_remembers_choice() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Light));
        assert!(app.theme().is_some_and(|t| !is_dark(&t)));

        let _task = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(app.theme().is_some_and(|t| is_dark(&t)));
        assert_eq!(app.config.theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Dark));
        let _task = app.update(Message::Projects(ProjectsMessage::Refresh));
        assert_eq!(app.projects.generation, 1);

        let _task = app.update(Message::Projects(ProjectsMessage::Loaded(
            1,
            Fetched::Loaded(vec![repo(1, "a"), repo(2, "b"), repo(3, "c")]),
        )));
        assert_eq!(app.projects.card_count(), Some(3));

        let _task = app.update(Message::Projects(ProjectsMessage::Refresh));
        assert_eq!(app.projects.generation, 2);
        assert_eq!(app.projects.phase, Phase::Loading);
    }

    #[test]
    fn navigation_targets_section_below_header() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Dark));
        let _task = app.update(Message::NavigateTo(Section::Skills));
        let expected = app.layout().anchor_offset(Section::Skills);
        let scroll = app.scroll.unwrap();
        assert_eq!(scroll.to, expected);
        assert_eq!(scroll.from, 0.0);

        let _task = app.update(Message::ScrollTick(scroll.started + scroll.duration));
        assert!(app.scroll.is_none());
        assert_eq!(app.scroll_y, expected);
        assert_eq!(app.layout().section_at(app.scroll_y), Section::Skills);
    }

    #[test]
    fn start_anchor_waits_for_repositories() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Dark));
        app.start_at = Some(Section::About);
        let _task = app.update(Message::Projects(ProjectsMessage::Loaded(7, Fetched::Empty)));
        assert_eq!(app.start_at, Some(Section::About));

        let _task = app.update(Message::Projects(ProjectsMessage::Loaded(1, Fetched::Empty)));
        assert_eq!(app.start_at, None);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Dark));
        let _task = app.update(Message::NavigateTo(Section::Contact));
        let _task = app.update(Message::Scrolled(300.0));
        assert!(app.scroll.is_none());
        assert_eq!(app.scroll_y, 300.0);
    }

    #[test]
    fn contact_form_runs_through_its_cycle() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Dark));
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Subject, "Oi"),
            (Field::Message, "Tudo bem?"),
        ] {
            let _task = app.update(Message::Contact(ContactMessage::FieldChanged(
                field,
                value.into(),
            )));
        }

        // Each step schedules exactly one timer for the next.
        let reset_early = app.update(Message::Contact(ContactMessage::ResetElapsed));
        assert_eq!(reset_early.units(), 0);

        let timer = app.update(Message::Contact(ContactMessage::Submit));
        assert_eq!(timer.units(), 1);
        assert_eq!(app.contact.status, SubmitStatus::Submitting);

        let again = app.update(Message::Contact(ContactMessage::Submit));
        assert_eq!(again.units(), 0);
        assert_eq!(app.contact.status, SubmitStatus::Submitting);

        let timer = app.update(Message::Contact(ContactMessage::SubmitElapsed));
        assert_eq!(timer.units(), 1);
        assert_eq!(app.contact.status, SubmitStatus::Success);

        let done = app.update(Message::Contact(ContactMessage::ResetElapsed));
        assert_eq!(done.units(), 0);
        assert_eq!(app.contact.status, SubmitStatus::Idle);
        assert!(app.contact.fields.name.is_empty());
    }

    #[test]
    fn invalid_submission_schedules_nothing() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Dark));
        let task = app.update(Message::Contact(ContactMessage::Submit));
        assert_eq!(task.units(), 0);
        assert_eq!(app.contact.status, SubmitStatus::Idle);
        assert!(app.contact.error.is_some());
    }

    #[test]
    fn profile_result_leads_to_avatar_download() {
        let (mut app, _dir) = app_with(stored(ThemeMode::Dark));
        let _task = app.update(Message::About(AboutMessage::ProfileLoaded(
            1,
            Fetched::Loaded(profile()),
        )));
        assert_eq!(app.about.avatar_url(), Some("https://avatars.example/u/1"));

        let _task = app.update(Message::About(AboutMessage::AvatarLoaded(
            1,
            Err("Unexpected HTTP status: 404".into()),
        )));
        assert!(matches!(app.about.avatar, views::about::Avatar::Placeholder));
    }
}
