use async_trait::async_trait;
use poi_entities::{partner::Partner, user::User};

use super::Result;

#[async_trait(?Send)]
pub trait IdentityGateway {
    /// Returns `None` if the backend answered without a usable user record.
    async fn login(&self, login: &str, password: &str) -> Result<Option<User>>;
    async fn partner_by_matricule(&self, matricule: &str) -> Result<Option<Partner>>;
    async fn partner_by_id(&self, id: i64) -> Result<Option<Partner>>;
}

/// "What is my IP" service.
#[async_trait(?Send)]
pub trait IpLookup {
    async fn public_ip(&self) -> Result<String>;
}
