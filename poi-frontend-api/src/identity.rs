use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use poi_boundary as json;
use poi_core::gateways::{self, IdentityGateway};
use poi_entities::{partner::Partner, user::User};

use crate::{into_json, Result};

/// Identity (ERP) backend API
#[derive(Debug, Clone, Copy)]
pub struct IdentityApi {
    url: &'static str,
    api_key: &'static str,
    token: &'static str,
    db: &'static str,
}

impl IdentityApi {
    #[must_use]
    pub const fn new(
        url: &'static str,
        api_key: &'static str,
        token: &'static str,
        db: &'static str,
    ) -> Self {
        Self {
            url,
            api_key,
            token,
            db,
        }
    }
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.url.trim_end_matches('/'))
    }
    fn add_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("api-key", self.api_key)
            .header("token", self.token)
            .header("Content-Type", "application/json")
    }
    /// Returns `None` if the backend refused the credentials.
    pub async fn login(&self, login: &str, password: &str) -> Result<Option<json::User>> {
        let url = self.endpoint("login");
        let credentials = json::Credentials {
            db: self.db.to_owned(),
            login: login.to_owned(),
            password: password.to_owned(),
        };
        let response = self
            .add_headers(Request::post(&url))
            .json(&credentials)?
            .send()
            .await?;
        if matches!(response.status(), 400 | 401 | 403) {
            log::debug!("Login refused with status {}", response.status());
            return Ok(None);
        }
        let response: json::LoginResponse = into_json(response).await?;
        Ok(response.into_user())
    }
    async fn search_partners(&self, domain: &str) -> Result<Vec<json::Partner>> {
        let url = self.endpoint(&format!(
            "res.partner/search?domain={}",
            utf8_percent_encode(domain, NON_ALPHANUMERIC)
        ));
        let response = self.add_headers(Request::get(&url)).send().await?;
        let value = into_json::<serde_json::Value>(response).await?;
        Ok(json::parse_list(value).items)
    }
    pub async fn partner_by_matricule(&self, matricule: &str) -> Result<Option<json::Partner>> {
        let domain = format!("[('matricule','=','{}')]", quote(matricule));
        Ok(self.search_partners(&domain).await?.into_iter().next())
    }
    pub async fn partner_by_id(&self, id: i64) -> Result<Option<json::Partner>> {
        let domain = format!("[('id','=',{id})]");
        Ok(self.search_partners(&domain).await?.into_iter().next())
    }
}

/// Escapes a value for a single-quoted domain literal.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[async_trait(?Send)]
impl IdentityGateway for IdentityApi {
    async fn login(&self, login: &str, password: &str) -> gateways::Result<Option<User>> {
        Ok(self.login(login, password).await?.map(Into::into))
    }
    async fn partner_by_matricule(&self, matricule: &str) -> gateways::Result<Option<Partner>> {
        Ok(self.partner_by_matricule(matricule).await?.map(Into::into))
    }
    async fn partner_by_id(&self, id: i64) -> gateways::Result<Option<Partner>> {
        Ok(self.partner_by_id(id).await?.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_domain_literals() {
        assert_eq!(quote("MAT-001"), "MAT-001");
        assert_eq!(quote("O'Neil"), "O\\'Neil");
        assert_eq!(quote("a\\b"), "a\\\\b");
    }
}
