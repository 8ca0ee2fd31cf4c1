mod adapters;
mod app;
mod config;
mod core;
mod styles;
mod theme;
mod views;

use iced::application;

use crate::{
    app::{APP_NAME, App},
    core::navigation::Section,
};

fn main() -> iced::Result {
    if std::env::var_os("WGPU_POWER_PREF").is_none() {
        unsafe { std::env::set_var("WGPU_POWER_PREF", "low") };
    }

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .init();

    log::info!("Starting {APP_NAME}");

    // `folio '#about'` opens at that section.
    let start_at = std::env::args().nth(1).and_then(|arg| {
        let section = Section::from_anchor(&arg);
        if section.is_none() {
            log::warn!("Unknown section {arg}, starting at the top");
        }
        section
    });

    application(move || App::new(start_at), App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}
