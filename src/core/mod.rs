pub mod contact;
pub mod content;
pub mod display;
pub mod launcher;
pub mod navigation;
pub mod profile;
pub mod repository;
pub mod source;
