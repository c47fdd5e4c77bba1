use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

use super::{CommandError, search::SearchQuery};

pub const DEFAULT_ENDPOINT: &str = "https://api.urbandictionary.com/v0/define";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub example: String,
}

#[derive(Deserialize, Debug)]
struct DefineResponse {
    list: Vec<Definition>,
}

/// Anything that can turn a search into a list of definitions.
#[serenity::async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn define(&self, query: &SearchQuery) -> anyhow::Result<Vec<Definition>>;
}

/// Urban Dictionary over HTTP.
pub struct UrbanClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UrbanClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    fn request(&self, query: &SearchQuery) -> reqwest::Result<reqwest::Request> {
        // The form encoder writes spaces as `+`, giving the `+`-joined term on
        // the wire while any `+` the user typed stays escaped.
        self.http
            .get(&self.endpoint)
            .query(&[("term", query.phrase())])
            .build()
    }
}

#[serenity::async_trait]
impl DefinitionSource for UrbanClient {
    async fn define(&self, query: &SearchQuery) -> anyhow::Result<Vec<Definition>> {
        let body = self
            .http
            .execute(self.request(query)?)
            .await?
            .error_for_status()?
            .text()
            .await?;
        decode(&body)
    }
}

pub fn decode(body: &str) -> anyhow::Result<Vec<Definition>> {
    let response: DefineResponse =
        serde_json::from_str(body).context("unexpected definition response")?;
    Ok(response.list)
}

/// Picks the definition at `position`, returning it with the total count.
pub fn select(
    definitions: &[Definition],
    position: usize,
) -> Result<(&Definition, usize), CommandError> {
    if definitions.is_empty() {
        return Err(CommandError::NoResults);
    }
    definitions
        .get(position)
        .map(|d| (d, definitions.len()))
        .ok_or(CommandError::DefinitionIndexOutOfRange(position + 1))
}

pub fn render(definition: &Definition, position: usize, total: usize) -> String {
    format!(
        "**Definition #{} out of {}:\n**{}\n\n**Example:\n**{}",
        position + 1,
        total,
        definition.definition,
        definition.example
    )
}
