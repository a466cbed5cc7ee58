use anyhow::Result;
use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("poi-moderation.default.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub places: Option<Places>,
    pub identity: Option<Identity>,
    pub ip_lookup: Option<IpLookup>,
    pub sync: Option<Synchronization>,
}

impl Config {
    pub fn embedded_default() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG_FILE)
    }

    pub fn parse(toml_string: &str) -> Result<Self> {
        Ok(toml::from_str(toml_string)?)
    }

    /// Takes every section that is missing in `self` from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            places: self.places.or(fallback.places),
            identity: self.identity.or(fallback.identity),
            ip_lookup: self.ip_lookup.or(fallback.ip_lookup),
            sync: self.sync.or(fallback.sync),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Places {
    pub api_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Identity {
    pub api_url: String,
    pub api_key: String,
    pub token: String,
    pub db: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IpLookup {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Synchronization {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub poll_interval: Option<Duration>,
}
