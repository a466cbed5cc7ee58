use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use poi_core::gateways;

mod identity;
mod ip;
mod places;

pub use self::{identity::*, ip::*, places::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("{0}")]
    Api(#[from] poi_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Malformed(format!("{err}")),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

impl From<Error> for gateways::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Fetch(msg) => Self::Fetch(msg),
            Error::Malformed(msg) => Self::Malformed(msg),
            Error::Status(status) => Self::Status(status),
            Error::Api(err) => Self::Api(err.to_string()),
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(into_error(response).await)
    }
}

/// Like [`into_json`] for endpoints whose response body is irrelevant.
pub async fn into_ok(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(into_error(response).await)
    }
}

async fn into_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<poi_boundary::Error>().await {
        Ok(err) if !err.message.is_empty() => poi_boundary::Error {
            http_status: status,
            ..err
        }
        .into(),
        _ => Error::Status(status),
    }
}
