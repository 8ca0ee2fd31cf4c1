pub mod github;

pub use github::GithubSource;
