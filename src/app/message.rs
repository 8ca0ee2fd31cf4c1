use crate::core::{
    contact::Field,
    navigation::Section,
    profile::Profile,
    repository::Repository,
    source::Fetched,
};

#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Section),
    Scrolled(f32),
    ScrollTick(iced::time::Instant),

    ToggleTheme,
    ThemeSaved(Result<(), String>),

    OpenLink(String),

    Projects(ProjectsMessage),
    About(AboutMessage),
    Contact(ContactMessage),
}

/// Fetch results carry the activation they belong to; anything else is stale.
#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    Refresh,
    Loaded(u64, Fetched<Vec<Repository>>),
}

#[derive(Debug, Clone)]
pub enum AboutMessage {
    ProfileLoaded(u64, Fetched<Profile>),
    AvatarLoaded(u64, Result<Vec<u8>, String>),
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    FieldChanged(Field, String),
    MessageEdited(iced::widget::text_editor::Action),
    Submit,
    SubmitElapsed,
    ResetElapsed,
}
