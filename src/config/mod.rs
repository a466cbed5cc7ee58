use anyhow::{anyhow, Result};
use gloo_net::http::Request;
use std::time::Duration;

use poi_core::usecases::SYNC_POLL_INTERVAL;

mod raw;

/// Optional deployment specific configuration,
/// served from the same origin as the app.
const CUSTOM_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub places: Places,
    pub identity: Identity,
    pub ip_lookup: IpLookup,
    pub sync: Synchronization,
}

impl Config {
    /// Fetches the custom configuration and completes it with the defaults.
    pub async fn load() -> Result<Self> {
        let custom = fetch_custom_config().await;
        Self::from_toml_or_default(custom.as_deref())
    }

    pub fn from_toml_or_default(custom: Option<&str>) -> Result<Self> {
        let default = raw::Config::embedded_default()?;
        let raw_config = match custom.map(raw::Config::parse) {
            Some(Ok(custom)) => custom.or(default),
            Some(Err(err)) => {
                log::warn!("Ignoring malformed {CUSTOM_CONFIG_PATH}: {err}");
                default
            }
            None => default,
        };
        Self::try_from(raw_config)
    }
}

async fn fetch_custom_config() -> Option<String> {
    let response = match Request::get(CUSTOM_CONFIG_PATH).send().await {
        Ok(response) => response,
        Err(err) => {
            log::info!("{CUSTOM_CONFIG_PATH} not available ({err}) => load default configuration");
            return None;
        }
    };
    if !response.ok() {
        log::info!(
            "{CUSTOM_CONFIG_PATH} not found ({}) => load default configuration",
            response.status()
        );
        return None;
    }
    response
        .text()
        .await
        .map_err(|err| log::warn!("Unable to read {CUSTOM_CONFIG_PATH}: {err}"))
        .ok()
}

#[derive(Debug, Clone)]
pub struct Places {
    /// Base URL of the moderation backend
    pub api_url: String,
    /// Value of the `X-API-KEY` header
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct Identity {
    /// Base URL of the ERP backend
    pub api_url: String,
    pub api_key: String,
    pub token: String,
    /// Database name sent along with the login credentials
    pub db: String,
}

#[derive(Debug, Clone)]
pub struct IpLookup {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Synchronization {
    pub poll_interval: Duration,
}

fn required(value: String, name: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(anyhow!("Missing '{name}' configuration"));
    }
    Ok(value.to_owned())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            places,
            identity,
            ip_lookup,
            sync,
        } = from;

        let raw::Places { api_url, api_key } =
            places.ok_or_else(|| anyhow!("Missing 'places' configuration"))?;
        let places = Places {
            api_url: required(api_url, "places.api-url")?,
            api_key,
        };

        let raw::Identity {
            api_url,
            api_key,
            token,
            db,
        } = identity.ok_or_else(|| anyhow!("Missing 'identity' configuration"))?;
        let identity = Identity {
            api_url: required(api_url, "identity.api-url")?,
            api_key,
            token,
            db: required(db, "identity.db")?,
        };

        let raw::IpLookup { url } =
            ip_lookup.ok_or_else(|| anyhow!("Missing 'ip-lookup' configuration"))?;
        let ip_lookup = IpLookup {
            url: required(url, "ip-lookup.url")?,
        };

        let raw::Synchronization { poll_interval } = sync.unwrap_or_default();
        let poll_interval = poll_interval.unwrap_or(SYNC_POLL_INTERVAL);
        if poll_interval.is_zero() {
            return Err(anyhow!("The sync poll interval must not be zero"));
        }
        let sync = Synchronization { poll_interval };

        Ok(Self {
            places,
            identity,
            ip_lookup,
            sync,
        })
    }
}
