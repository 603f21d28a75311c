use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::core::record::Record;
use crate::providers::error::ProviderError;
use crate::providers::namesilo::types::*;

#[derive(Debug, Clone)]
pub struct NameSiloConfig {
    pub api_key: String,
    pub api_url: String,
}

impl NameSiloConfig {
    pub const DEFAULT_API_URL: &'static str = "https://www.namesilo.com/api";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: Self::DEFAULT_API_URL.to_string(),
        }
    }
}

pub struct NameSiloProvider {
    config: NameSiloConfig,
    client: Client,
}

impl NameSiloProvider {
    pub fn new(config: NameSiloConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { config, client })
    }

    /// Runs one API operation against `zone` and returns the reply once its
    /// code says the operation succeeded.
    async fn call(
        &self,
        operation: &str,
        zone: &str,
        params: &[(&str, String)],
    ) -> Result<Reply, ProviderError> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), operation);
        let response = self
            .client
            .get(url)
            .query(&[
                ("version", "1"),
                ("type", "xml"),
                ("key", self.config.api_key.as_str()),
                ("domain", zone.trim_end_matches('.')),
            ])
            .query(params)
            .send()
            .await?;
        response.error_for_status_ref()?;

        let body = response.text().await?;
        let parsed: NameSiloResponse = quick_xml::de::from_str(&body)?;
        let reply = parsed.reply;
        debug!(operation, code = %reply.code, detail = %reply.detail, "namesilo reply");

        match reply.code.as_str() {
            SUCCESS => Ok(reply),
            INVALID_API_KEY => Err(ProviderError::Credential(reply.detail)),
            _ => Err(ProviderError::Api {
                code: reply.code,
                message: reply.detail,
            }),
        }
    }

    pub async fn list_resource_records(
        &self,
        zone: &str,
    ) -> Result<Vec<ResourceRecord>, ProviderError> {
        let reply = self.call("dnsListRecords", zone, &[]).await?;
        Ok(reply.resource_record)
    }

    /// Adds a record and returns the id NameSilo assigned to it.
    pub async fn add_resource_record(
        &self,
        zone: &str,
        record: &Record,
    ) -> Result<String, ProviderError> {
        if !is_supported(&record.record_type) {
            return Err(ProviderError::UnsupportedType(record.record_type.to_string()));
        }
        let reply = self
            .call("dnsAddRecord", zone, &to_add_params(record, zone))
            .await?;
        reply
            .record_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProviderError::Parse("dnsAddRecord reply without record_id".into()))
    }

    pub async fn delete_resource_record(&self, zone: &str, id: &str) -> Result<(), ProviderError> {
        self.call("dnsDeleteRecord", zone, &[("rrid", id.to_string())])
            .await
            .map(|_| ())
    }
}
