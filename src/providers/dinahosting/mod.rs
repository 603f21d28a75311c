//! Dinahosting provider implementation (JSON over HTTP, one command per
//! record type). Dinahosting does not expose record ids, so records are
//! addressed by hostname and value.

pub mod client;
pub mod types;


pub use client::{DinahostingConfig, DinahostingProvider};
pub use types::ZoneRecord;

use crate::core::provider::DNSProvider;
use crate::core::record::Record;
use crate::error::Error;
use async_trait::async_trait;

#[async_trait]
impl DNSProvider for DinahostingProvider {
    fn name(&self) -> &'static str {
        "dinahosting"
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error> {
        let records = self.zone_records(zone).await?;
        Ok(records.iter().map(types::to_dns_record).collect())
    }

    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record, Error> {
        self.add_zone_record(zone, record).await?;
        Ok(record.clone())
    }

    async fn delete_record(&self, zone: &str, record: &Record) -> Result<(), Error> {
        Ok(self.delete_zone_record(zone, record).await?)
    }
}
