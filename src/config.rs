use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::engine::{Paginator, urban};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Configuration {
    pub authentication: Authentication,
    pub discord: Discord,
    pub urban: Urban,
}
impl Configuration {
    const FILENAME: &str = "config.toml";

    pub fn load() -> anyhow::Result<Self> {
        let config = if let Ok(file) = std::fs::read_to_string(Self::FILENAME) {
            Self::parse(&file)?
        } else {
            Self::default()
        };
        config.save()?;

        Ok(config)
    }

    fn parse(file: &str) -> anyhow::Result<Self> {
        toml::from_str(file).context("failed to load config")
    }

    fn save(&self) -> anyhow::Result<()> {
        Ok(std::fs::write(
            Self::FILENAME,
            toml::to_string_pretty(self)?,
        )?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Authentication {
    pub discord_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Discord {
    /// Longest message the bot will send before splitting into several
    pub page_length: usize,
}

impl Default for Discord {
    fn default() -> Self {
        Self {
            page_length: Paginator::DEFAULT_PAGE_LENGTH,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Urban {
    pub endpoint: String,
    /// Requests taking longer than this are abandoned
    pub timeout_ms: u64,
}

impl Default for Urban {
    fn default() -> Self {
        Self {
            endpoint: urban::DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 10_000,
        }
    }
}
