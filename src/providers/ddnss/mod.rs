//! ddnss.de provider implementation
//!
//! Updates go through the dynamic-DNS update URL. Reading records back needs
//! the web interface login, since ddnss has no listing API.
//!
//! The host list only shows addresses, so TXT records are never listed. A
//! `set_records` call with TXT records therefore writes them again on every
//! run instead of leaving them unchanged.

pub mod client;
pub mod scrape;

#[cfg(test)]
mod tests;

pub use client::{DdnssConfig, DdnssProvider, Update};

use crate::core::provider::DNSProvider;
use crate::core::record::{Record, RecordType, absolute_name, relative_name};
use crate::error::Error;
use async_trait::async_trait;
use std::net::IpAddr;
use tracing::debug;

fn in_zone(host: &str, zone: &str) -> bool {
    let zone = absolute_name("@", zone);
    host == zone || host.ends_with(&format!(".{zone}"))
}

#[async_trait]
impl DNSProvider for DdnssProvider {
    fn name(&self) -> &'static str {
        "ddnss"
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error> {
        let hosts = self.hosts().await?;
        let records = hosts
            .iter()
            .filter(|host| in_zone(&host.hostname, zone))
            .flat_map(|host| {
                host.addresses.iter().map(|addr| {
                    let record_type = match addr {
                        IpAddr::V4(_) => RecordType::A,
                        IpAddr::V6(_) => RecordType::AAAA,
                    };
                    Record::new(relative_name(&host.hostname, zone), record_type, addr.to_string())
                })
            })
            .collect();
        Ok(records)
    }

    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record, Error> {
        let host = DdnssProvider::update_host(&record.name, zone);
        self.update(&host, &Update::Set(record.clone())).await?;
        Ok(record.clone())
    }

    async fn delete_record(&self, zone: &str, record: &Record) -> Result<(), Error> {
        let host = DdnssProvider::update_host(&record.name, zone);
        match record.record_type {
            RecordType::TXT => Ok(self.update(&host, &Update::ClearTxt).await?),
            // A host always carries an address; the following create replaces it
            RecordType::A | RecordType::AAAA => {
                debug!(host = %host, record = %record, "ddnss: address removal is a no-op");
                Ok(())
            }
            ref other => Err(Error::UnsupportedType(other.to_string())),
        }
    }
}
