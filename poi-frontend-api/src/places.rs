use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};

use poi_boundary as json;
use poi_core::{
    gateways::{self, PlaceFilter, PlaceGateway},
    pagination::Batch,
};
use poi_entities::{
    history::ValidationHistoryEntry,
    place::{Place, PlaceId},
    sync::SyncReport,
    user::UserId,
};

use crate::{into_json, into_ok, Result};

/// Moderation backend API
#[derive(Debug, Clone, Copy)]
pub struct PlacesApi {
    url: &'static str,
    api_key: &'static str,
}

impl PlacesApi {
    #[must_use]
    pub const fn new(url: &'static str, api_key: &'static str) -> Self {
        Self { url, api_key }
    }
    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.url.trim_end_matches('/'))
    }
    fn add_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("X-API-KEY", self.api_key)
            .header("Content-Type", "application/json")
    }
    async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.add_headers(Request::get(url)).send().await?;
        into_json(response).await
    }
    async fn get_list<T>(&self, url: &str) -> Result<json::List<T>>
    where
        T: DeserializeOwned,
    {
        let value = self.get::<serde_json::Value>(url).await?;
        let list = json::parse_list(value);
        if list.skipped() > 0 {
            log::warn!("Skipped {} malformed rows of {url}", list.skipped());
        }
        Ok(list)
    }
    async fn get_places(&self, url: &str) -> Result<Batch<Place>> {
        let json::List { items, fetched } = self.get_list::<json::Place>(url).await?;
        let items = items.into_iter().map(Into::into).collect();
        Ok(Batch { items, fetched })
    }
    async fn get_history(&self, url: &str) -> Result<Batch<ValidationHistoryEntry>> {
        let json::List { items, fetched } =
            self.get_list::<json::ValidationHistoryEntry>(url).await?;
        let items = items.into_iter().map(Into::into).collect();
        Ok(Batch { items, fetched })
    }
    async fn post<D>(&self, url: &str, data: &D) -> Result<()>
    where
        D: Serialize,
    {
        let response = self
            .add_headers(Request::post(url))
            .json(data)?
            .send()
            .await?;
        into_ok(response).await
    }
    pub async fn pending_places(&self, skip: usize, limit: usize) -> Result<Batch<Place>> {
        let url = self.endpoint(&format!("pois/pending?skip={skip}&limit={limit}"));
        self.get_places(&url).await
    }
    pub async fn search_places(&self, filter: &PlaceFilter) -> Result<Vec<Place>> {
        let query = query_string(&filter.query_params());
        let url = if query.is_empty() {
            self.endpoint("pois/search")
        } else {
            self.endpoint(&format!("pois/search?{query}"))
        };
        Ok(self.get_places(&url).await?.items)
    }
    pub async fn all_places(&self) -> Result<Vec<Place>> {
        Ok(self.get_places(&self.endpoint("pois")).await?.items)
    }
    pub async fn approve_place(&self, id: PlaceId, approval: &json::ApprovePlace) -> Result<()> {
        let url = self.endpoint(&format!("pois/{id}/approve"));
        self.post(&url, approval).await
    }
    pub async fn reject_place(&self, id: PlaceId, rejection: &json::RejectPlace) -> Result<()> {
        let url = self.endpoint(&format!("pois/{id}/reject"));
        self.post(&url, rejection).await
    }
    pub async fn trigger_sync(&self) -> Result<()> {
        let url = self.endpoint("pois/sync-from-odoo");
        let response = self.add_headers(Request::post(&url)).send().await?;
        into_ok(response).await
    }
    pub async fn sync_status(&self) -> Result<SyncReport> {
        let url = self.endpoint("pois/sync-status");
        let status = self.get::<json::SyncStatus>(&url).await?;
        Ok(status.into())
    }
    pub async fn validation_history(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Batch<ValidationHistoryEntry>> {
        let url = self.endpoint(&format!("validation-history?skip={skip}&limit={limit}"));
        self.get_history(&url).await
    }
    pub async fn place_history(&self, id: PlaceId) -> Result<Vec<ValidationHistoryEntry>> {
        let url = self.endpoint(&format!("validation-history/{id}"));
        Ok(self.get_history(&url).await?.items)
    }
}

fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait(?Send)]
impl PlaceGateway for PlacesApi {
    async fn pending_places(&self, skip: usize, limit: usize) -> gateways::Result<Batch<Place>> {
        Ok(self.pending_places(skip, limit).await?)
    }
    async fn search_places(&self, filter: &PlaceFilter) -> gateways::Result<Vec<Place>> {
        Ok(self.search_places(filter).await?)
    }
    async fn all_places(&self) -> gateways::Result<Vec<Place>> {
        Ok(self.all_places().await?)
    }
    async fn approve_place(
        &self,
        id: PlaceId,
        validated_by: UserId,
        ip_address: Option<&str>,
    ) -> gateways::Result<()> {
        let approval = json::ApprovePlace {
            validated_by: validated_by.into(),
            ip_address: ip_address.map(ToOwned::to_owned),
        };
        Ok(self.approve_place(id, &approval).await?)
    }
    async fn reject_place(
        &self,
        id: PlaceId,
        rejection_reason: &str,
        validated_by: UserId,
        ip_address: Option<&str>,
    ) -> gateways::Result<()> {
        let rejection = json::RejectPlace {
            rejection_reason: rejection_reason.to_owned(),
            validated_by: validated_by.into(),
            ip_address: ip_address.map(ToOwned::to_owned),
        };
        Ok(self.reject_place(id, &rejection).await?)
    }
    async fn trigger_sync(&self) -> gateways::Result<()> {
        Ok(self.trigger_sync().await?)
    }
    async fn sync_status(&self) -> gateways::Result<SyncReport> {
        Ok(self.sync_status().await?)
    }
    async fn validation_history(
        &self,
        skip: usize,
        limit: usize,
    ) -> gateways::Result<Batch<ValidationHistoryEntry>> {
        Ok(self.validation_history(skip, limit).await?)
    }
    async fn place_history(&self, id: PlaceId) -> gateways::Result<Vec<ValidationHistoryEntry>> {
        Ok(self.place_history(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_search_query() {
        assert_eq!(
            query_string(&[("locality", "Grand-Bassam"), ("search", "café & thé")]),
            "locality=Grand%2DBassam&search=caf%C3%A9%20%26%20th%C3%A9"
        );
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn endpoint_without_double_slash() {
        let api = PlacesApi::new("http://127.0.0.1:8001/", "key");
        assert_eq!(
            api.endpoint("pois/pending"),
            "http://127.0.0.1:8001/api/pois/pending"
        );
    }
}
