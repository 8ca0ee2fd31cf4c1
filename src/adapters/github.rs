use crate::core::{
    profile::Profile,
    repository::{Repository, without_forks},
    source::{Result, Source, SourceError},
};

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_USERNAME: &str = "vitororigens";

/// Repositories shown on the page, newest activity first.
pub const PAGE_SIZE: u32 = 6;

const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated client for the public GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubSource {
    base_url: String,
    username: String,
}

impl Default for GithubSource {
    fn default() -> Self {
        Self::with_base_url(GITHUB_API_URL, GITHUB_USERNAME)
    }
}

impl GithubSource {
    pub fn with_base_url(base_url: &str, username: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn repos_url(&self) -> String {
        format!("{}/users/{}/repos", self.base_url, self.username)
    }

    fn profile_url(&self) -> String {
        format!("{}/users/{}", self.base_url, self.username)
    }
}

impl From<ureq::Error> for SourceError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => SourceError::Status(code),
            ureq::Error::Io(io) => SourceError::Io(io),
            other => SourceError::Transport(other.to_string()),
        }
    }
}

fn get_text(url: &str, query: &[(&str, String)]) -> Result<String> {
    let mut request = ureq::get(url)
        .header("Accept", ACCEPT)
        .header("User-Agent", USER_AGENT);
    for (key, value) in query {
        request = request.query(*key, value);
    }

    let resp = request.call()?;
    resp.into_body()
        .read_to_string()
        .map_err(|e| SourceError::Transport(format!("Failed to read response body: {e}")))
}

fn get_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = ureq::get(url).header("User-Agent", USER_AGENT).call()?;
    resp.into_body()
        .read_to_vec()
        .map_err(|e| SourceError::Transport(format!("Failed to read response body: {e}")))
}

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| SourceError::Other(format!("Task join error: {e}")))?
}

#[async_trait::async_trait]
impl Source for GithubSource {
    async fn repositories(&self) -> Result<Vec<Repository>> {
        let url = self.repos_url();
        let body = blocking(move || {
            get_text(
                &url,
                &[
                    ("sort", "updated".to_string()),
                    ("per_page", PAGE_SIZE.to_string()),
                ],
            )
        })
        .await?;

        let repos: Vec<Repository> = parse(&body)?;
        let total = repos.len();
        let repos = without_forks(repos);
        log::debug!(
            "GitHub returned {total} repositories for {}, {} after dropping forks",
            self.username(),
            repos.len()
        );
        Ok(repos)
    }

    async fn profile(&self) -> Result<Profile> {
        let url = self.profile_url();
        let body = blocking(move || get_text(&url, &[])).await?;
        parse(&body)
    }

    async fn avatar(&self, url: &str) -> Result<Vec<u8>> {
        let url = url.to_string();
        blocking(move || get_bytes(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;
    use crate::core::source::{Fetched, fetch_profile, fetch_repositories, load_repositories};

    const REPOS: &str = r#"[
        {"id": 1, "name": "a", "fork": false},
        {"id": 2, "name": "b", "fork": true},
        {"id": 3, "name": "c", "fork": false}
    ]"#;

    const PROFILE: &str = r#"{
        "login": "octo",
        "name": "Octo Cat",
        "avatar_url": "https://avatars.example/u/1",
        "bio": null,
        "html_url": "https://github.com/octo",
        "public_repos": 3,
        "followers": 10,
        "following": 2
    }"#;

    fn repos_query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".into(), "updated".into()),
            Matcher::UrlEncoded("per_page".into(), "6".into()),
        ])
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn repositories_drop_forks_in_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/octo/repos")
            .match_query(repos_query())
            .match_header("accept", ACCEPT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPOS)
            .create_async()
            .await;

        let source = GithubSource::with_base_url(&server.url(), "octo");
        let repos = fetch_repositories(&source).await;

        mock.assert_async().await;
        let ids: Vec<u64> = repos.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(repos[0].name, "a");
        assert_eq!(repos[1].name, "c");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_statuses_become_empty() {
        for status in [403, 404, 500] {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("GET", "/users/octo/repos")
                .match_query(Matcher::Any)
                .with_status(status)
                .with_body(r#"{"message": "nope"}"#)
                .create_async()
                .await;

            let source = GithubSource::with_base_url(&server.url(), "octo");
            assert!(fetch_repositories(&source).await.is_empty());
            assert_eq!(
                load_repositories(&source).await,
                Fetched::Failed(format!("Unexpected HTTP status: {status}"))
            );
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_body_becomes_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/octo/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let source = GithubSource::with_base_url(&server.url(), "octo");
        assert!(fetch_repositories(&source).await.is_empty());
        assert!(matches!(
            source.repositories().await,
            Err(SourceError::Parse(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn transport_failure_becomes_empty_and_absent() {
        // Nothing listens on port 1.
        let source = GithubSource::with_base_url("http://127.0.0.1:1", "octo");
        assert!(fetch_repositories(&source).await.is_empty());
        assert!(fetch_profile(&source).await.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn profile_parses_and_failures_are_absent() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/octo")
            .with_status(200)
            .with_body(PROFILE)
            .create_async()
            .await;
        let source = GithubSource::with_base_url(&server.url(), "octo");
        let profile = fetch_profile(&source).await.unwrap();
        assert_eq!(profile.avatar_url, "https://avatars.example/u/1");
        assert_eq!(profile.display_name(), "Octo Cat");

        let mut failing = mockito::Server::new_async().await;
        failing
            .mock("GET", "/users/octo")
            .with_status(404)
            .create_async()
            .await;
        let source = GithubSource::with_base_url(&failing.url(), "octo");
        assert!(fetch_profile(&source).await.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn avatar_returns_raw_bytes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/u/1")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body([0x89u8, b'P', b'N', b'G'])
            .create_async()
            .await;

        let source = GithubSource::default();
        let bytes = source
            .avatar(&format!("{}/u/1", server.url()))
            .await
            .unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn default_points_at_public_api() {
        let source = GithubSource::default();
        assert_eq!(source.username(), GITHUB_USERNAME);
        assert_eq!(
            source.repos_url(),
            format!("https://api.github.com/users/{GITHUB_USERNAME}/repos")
        );
        assert_eq!(
            GithubSource::with_base_url("http://localhost:8080/", "x").profile_url(),
            "http://localhost:8080/users/x"
        );
    }
}
