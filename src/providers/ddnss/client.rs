use reqwest::{Client, redirect::Policy};
use std::time::Duration;
use tracing::debug;

use crate::core::record::{Record, RecordType, absolute_name};
use crate::providers::ddnss::scrape::{ListedHost, is_update_confirmed, listed_hosts};
use crate::providers::error::ProviderError;

const ACME_CHALLENGE_LABEL: &str = "_acme-challenge.";

#[derive(Debug, Clone)]
pub struct DdnssConfig {
    pub api_token: String,
    /// Web interface login, only needed for listing.
    pub username: String,
    pub password: String,
    pub api_url: String,
}

impl DdnssConfig {
    pub const DEFAULT_API_URL: &'static str = "https://ddnss.de";

    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            username: String::new(),
            password: String::new(),
            api_url: Self::DEFAULT_API_URL.to_string(),
        }
    }
}

/// What an update request does to a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Set(Record),
    ClearTxt,
}

pub struct DdnssProvider {
    config: DdnssConfig,
    client: Client,
}

impl DdnssProvider {
    pub fn new(config: DdnssConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .timeout(timeout)
            .build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// The host ddnss knows about for a record: the absolute name with any
    /// ACME challenge label removed, since TXT values live on the host itself.
    pub fn update_host(name: &str, zone: &str) -> String {
        let domain = absolute_name(name, zone);
        match domain.strip_prefix(ACME_CHALLENGE_LABEL) {
            Some(host) => host.to_string(),
            None => domain,
        }
    }

    fn update_params(update: &Update) -> Result<Vec<(&'static str, String)>, ProviderError> {
        Ok(match update {
            Update::Set(record) => match record.record_type {
                RecordType::TXT => vec![("txtm", "1".into()), ("txt", record.value.clone())],
                RecordType::A => vec![("ip", record.value.clone())],
                RecordType::AAAA => vec![("ipv6", record.value.clone())],
                ref other => return Err(ProviderError::UnsupportedType(other.to_string())),
            },
            Update::ClearTxt => vec![("txtm", "2".into())],
        })
    }

    pub async fn update(&self, host: &str, update: &Update) -> Result<(), ProviderError> {
        if host.is_empty() {
            return Err(ProviderError::Parse("empty ddnss host".into()));
        }
        let params = Self::update_params(update)?;
        let response = self
            .client
            .get(self.url("/upd.php"))
            .query(&[
                ("key", self.config.api_token.as_str()),
                ("host", host),
                ("verbose", "true"),
            ])
            .query(&params)
            .send()
            .await?;
        response.error_for_status_ref()?;
        let body = response.text().await?;

        if is_update_confirmed(&body)? {
            debug!(host, "ddnss update confirmed");
            Ok(())
        } else {
            Err(ProviderError::Api {
                code: "update".into(),
                message: format!("ddnss did not confirm the update of {host}: {}", body.trim()),
            })
        }
    }

    /// Logs into the web interface and scrapes the host list.
    pub async fn hosts(&self) -> Result<Vec<ListedHost>, ProviderError> {
        if self.config.username.is_empty() || self.config.password.is_empty() {
            return Err(ProviderError::Credential(
                "listing ddnss hosts needs a username and password".into(),
            ));
        }

        let form = reqwest::multipart::Form::new()
            .text("action", "login")
            .text("username", self.config.username.clone())
            .text("passwd", self.config.password.clone());
        let login = self
            .client
            .post(self.url("/do.php"))
            .multipart(form)
            .send()
            .await?;
        login.error_for_status_ref()?;
        debug!(status = %login.status(), "ddnss login");

        let response = self
            .client
            .get(self.url("/ua/vhosts_list.php"))
            .send()
            .await?;
        response.error_for_status_ref()?;
        let body = response.text().await?;
        listed_hosts(&body)
    }
}
