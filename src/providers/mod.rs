//! Vendor bindings implementing [`DNSProvider`].

pub mod ddnss;
pub mod dinahosting;
pub mod error;
pub mod memory;
pub mod namesilo;

use crate::config::{Config, ProviderConfig};
use crate::core::provider::DNSProvider;
use crate::error::Error;
use std::sync::Arc;

use ddnss::DdnssProvider;
use dinahosting::DinahostingProvider;
use memory::MemoryProvider;
use namesilo::NameSiloProvider;

/// Builds the provider selected by `config`.
pub fn from_config(config: Config) -> Result<Arc<dyn DNSProvider>, Error> {
    let timeout = config.http_timeout;
    let provider: Arc<dyn DNSProvider> = match config.provider {
        ProviderConfig::NameSilo(c) => Arc::new(NameSiloProvider::new(c, timeout)?),
        ProviderConfig::Dinahosting(c) => Arc::new(DinahostingProvider::new(c, timeout)?),
        ProviderConfig::Ddnss(c) => Arc::new(DdnssProvider::new(c, timeout)?),
        ProviderConfig::Memory { zone } => Arc::new(MemoryProvider::new(&zone)),
    };
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_selects_provider() {
        let provider = from_config(Config::default()).unwrap();
        assert_eq!(provider.name(), "memory");

        let config = Config {
            provider: ProviderConfig::NameSilo(namesilo::NameSiloConfig::new("key")),
            ..Config::default()
        };
        assert_eq!(from_config(config).unwrap().name(), "namesilo");
    }
}
