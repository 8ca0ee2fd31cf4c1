use super::{profile::Profile, repository::Repository};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;

/// Read-only remote feed backing the projects and about sections.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Most recently updated repositories, forks already removed.
    async fn repositories(&self) -> Result<Vec<Repository>>;

    async fn profile(&self) -> Result<Profile>;

    async fn avatar(&self, url: &str) -> Result<Vec<u8>>;
}

/// Outcome of a fetch as seen by a view. Keeps "nothing there" apart from
/// "could not ask".
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> Fetched<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }
}

pub async fn load_repositories(source: &dyn Source) -> Fetched<Vec<Repository>> {
    match source.repositories().await {
        Ok(repos) if repos.is_empty() => Fetched::Empty,
        Ok(repos) => {
            log::debug!("Fetched {} repositories", repos.len());
            Fetched::Loaded(repos)
        }
        Err(e) => {
            log::error!("Error fetching repositories: {e}");
            Fetched::Failed(e.to_string())
        }
    }
}

pub async fn load_profile(source: &dyn Source) -> Fetched<Profile> {
    match source.profile().await {
        Ok(profile) => {
            log::debug!("Fetched profile for {}", profile.login);
            Fetched::Loaded(profile)
        }
        Err(e) => {
            log::error!("Error fetching profile: {e}");
            Fetched::Failed(e.to_string())
        }
    }
}

/// Never fails: any error is logged and comes back as an empty list.
pub async fn fetch_repositories(source: &dyn Source) -> Vec<Repository> {
    match load_repositories(source).await {
        Fetched::Loaded(repos) => repos,
        Fetched::Empty | Fetched::Failed(_) => Vec::new(),
    }
}

/// Never fails: any error is logged and comes back as `None`.
pub async fn fetch_profile(source: &dyn Source) -> Option<Profile> {
    match load_profile(source).await {
        Fetched::Loaded(profile) => Some(profile),
        Fetched::Empty | Fetched::Failed(_) => None,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{StaticSource, profile, repo};
    use super::*;

    #[tokio::test]
    async fn failures_become_empty_or_absent() {
        for status in [403, 404, 500, 502] {
            let source = StaticSource::failing(status);
            assert!(fetch_repositories(&source).await.is_empty());
            assert!(fetch_profile(&source).await.is_none());
        }
    }

    #[tokio::test]
    async fn classified_outcomes_keep_failure_apart_from_empty() {
        let empty = StaticSource {
            repositories: Some(Vec::new()),
            ..StaticSource::failing(500)
        };
        assert_eq!(load_repositories(&empty).await, Fetched::Empty);

        let failing = StaticSource::failing(500);
        let outcome = load_repositories(&failing).await;
        assert!(outcome.is_failed());
        assert_eq!(
            outcome,
            Fetched::Failed("Unexpected HTTP status: 500".into())
        );
    }

    #[tokio::test]
    async fn loaded_results_pass_through() {
        let source = StaticSource {
            repositories: Some(vec![repo(1, "a"), repo(3, "c")]),
            profile: Some(profile()),
            ..StaticSource::failing(500)
        };
        let repos = fetch_repositories(&source).await;
        assert_eq!(repos.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(fetch_profile(&source).await, Some(profile()));
    }
}
