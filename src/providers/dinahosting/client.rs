use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::core::record::Record;
use crate::providers::dinahosting::types::*;
use crate::providers::error::ProviderError;

#[derive(Debug, Clone)]
pub struct DinahostingConfig {
    pub username: String,
    pub password: String,
    pub api_url: String,
}

impl DinahostingConfig {
    pub const DEFAULT_API_URL: &'static str = "https://dinahosting.com/special/api.php";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            api_url: Self::DEFAULT_API_URL.to_string(),
        }
    }
}

pub struct DinahostingProvider {
    config: DinahostingConfig,
    client: Client,
}

impl DinahostingProvider {
    pub fn new(config: DinahostingConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { config, client })
    }

    /// Sends one API command for `zone` and returns the `data` member of a
    /// successful response.
    async fn command(
        &self,
        zone: &str,
        command: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, ProviderError> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("AUTH_USER", self.config.username.as_str()),
                ("AUTH_PWD", self.config.password.as_str()),
                ("domain", zone.trim_end_matches('.')),
                ("responseType", "json"),
                ("command", command),
            ])
            .query(params)
            .send()
            .await?;
        response.error_for_status_ref()?;

        let body: DinahostingResponse = response.json().await?;
        debug!(
            command,
            code = body.response_code,
            tr_id = %body.tr_id,
            "dinahosting response"
        );
        if body.response_code != SUCCESS {
            return Err(ProviderError::Api {
                code: body.response_code.to_string(),
                message: body.message,
            });
        }
        Ok(body.data)
    }

    pub async fn zone_records(&self, zone: &str) -> Result<Vec<ZoneRecord>, ProviderError> {
        let data = self.command(zone, "Domain_Zone_GetAll", &[]).await?;
        if data.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(data)?)
    }

    pub async fn add_zone_record(&self, zone: &str, record: &Record) -> Result<(), ProviderError> {
        let (command, params) = to_command("Add", record, zone)?;
        self.command(zone, &command, &params).await.map(|_| ())
    }

    pub async fn delete_zone_record(&self, zone: &str, record: &Record) -> Result<(), ProviderError> {
        let (command, params) = to_command("Delete", record, zone)?;
        self.command(zone, &command, &params).await.map(|_| ())
    }
}
