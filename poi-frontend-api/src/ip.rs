use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use poi_boundary::IpAddress;
use poi_core::gateways::{self, IpLookup};

use crate::{into_json, Result};

/// "What is my IP" service answering with `{ "ip": "…" }`.
#[derive(Debug, Clone, Copy)]
pub struct IpApi {
    url: &'static str,
}

impl IpApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }
    pub async fn public_ip(&self) -> Result<String> {
        let response = Request::get(self.url)
            .credentials(RequestCredentials::Omit)
            .send()
            .await?;
        let IpAddress { ip } = into_json(response).await?;
        Ok(ip)
    }
}

#[async_trait(?Send)]
impl IpLookup for IpApi {
    async fn public_ip(&self) -> gateways::Result<String> {
        Ok(self.public_ip().await?)
    }
}
