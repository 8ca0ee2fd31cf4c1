use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Public metadata of a single hosted repository, as returned by the
/// repository-listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(desc) if !desc.trim().is_empty() => desc,
            _ => "Nenhuma descrição disponível.",
        }
    }
}

/// Drops forks, keeping the remaining entries in source order.
pub fn without_forks(repos: Vec<Repository>) -> Vec<Repository> {
    repos.into_iter().filter(|repo| !repo.fork).collect()
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
