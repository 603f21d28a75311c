use std::env;
use std::time::Duration;

use crate::error::Error;
use crate::providers::ddnss::DdnssConfig;
use crate::providers::dinahosting::DinahostingConfig;
use crate::providers::namesilo::NameSiloConfig;

#[derive(Debug, Clone)]
pub enum ProviderConfig {
    NameSilo(NameSiloConfig),
    Dinahosting(DinahostingConfig),
    Ddnss(DdnssConfig),
    Memory { zone: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    /// Zone used when a command does not name one.
    pub zone: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source; `from_env` passes
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let var = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::ConfigError(format!("{key} is not set")))
        };
        let api_url = lookup("DNS_API_URL").filter(|v| !v.is_empty());
        let zone = lookup("DNS_ZONE").filter(|v| !v.is_empty());

        let provider_name = var("DNS_PROVIDER")?.to_ascii_lowercase();
        let provider = match provider_name.as_str() {
            "namesilo" => {
                let mut c = NameSiloConfig::new(var("NAMESILO_API_KEY")?);
                if let Some(url) = api_url {
                    c.api_url = url;
                }
                ProviderConfig::NameSilo(c)
            }
            "dinahosting" => {
                let mut c = DinahostingConfig::new(
                    var("DINAHOSTING_USERNAME")?,
                    var("DINAHOSTING_PASSWORD")?,
                );
                if let Some(url) = api_url {
                    c.api_url = url;
                }
                ProviderConfig::Dinahosting(c)
            }
            "ddnss" => {
                let mut c = DdnssConfig::new(var("DDNSS_API_TOKEN")?);
                c.username = lookup("DDNSS_USERNAME").unwrap_or_default();
                c.password = lookup("DDNSS_PASSWORD").unwrap_or_default();
                if let Some(url) = api_url {
                    c.api_url = url;
                }
                ProviderConfig::Ddnss(c)
            }
            "memory" => ProviderConfig::Memory {
                zone: zone.clone().unwrap_or_else(|| String::from("example.com")),
            },
            other => {
                return Err(Error::ConfigError(format!(
                    "unknown DNS_PROVIDER {other:?}, expected namesilo, dinahosting, ddnss or memory"
                )));
            }
        };

        Ok(Config {
            provider,
            zone,
            http_timeout: Duration::from_secs(
                lookup("HTTP_TIMEOUT")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
        })
    }

    /// Makes `zone` the configured zone. The memory provider starts out
    /// holding it, so commands against an explicit zone find it.
    pub fn with_zone(mut self, zone: &str) -> Self {
        if let ProviderConfig::Memory { zone: seeded } = &mut self.provider {
            *seeded = zone.to_string();
        }
        self.zone = Some(zone.to_string());
        self
    }
}

pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                provider: ProviderConfig::Memory {
                    zone: String::from("example.com"),
                },
                zone: Some(String::from("example.com")),
                http_timeout: Duration::from_secs(30),
            }
        }
    }
}
