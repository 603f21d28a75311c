//! NameSilo provider implementation (XML over HTTP)

pub mod client;
pub mod types;


pub use client::{NameSiloConfig, NameSiloProvider};
pub use types::ResourceRecord;

use crate::core::provider::DNSProvider;
use crate::core::record::Record;
use crate::error::Error;
use async_trait::async_trait;
use types::to_dns_record;

#[async_trait]
impl DNSProvider for NameSiloProvider {
    fn name(&self) -> &'static str {
        "namesilo"
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error> {
        let records = self.list_resource_records(zone).await?;
        Ok(records.iter().map(|rr| to_dns_record(rr, zone)).collect())
    }

    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record, Error> {
        let id = self.add_resource_record(zone, record).await?;
        Ok(record.clone().with_id(id))
    }

    async fn delete_record(&self, zone: &str, record: &Record) -> Result<(), Error> {
        if record.has_id() {
            return Ok(self.delete_resource_record(zone, &record.id).await?);
        }

        // Deleting needs the record id, so look the record up by key
        let key = record.key(zone);
        let records = self.list_records(zone).await?;
        let existing = records
            .iter()
            .find(|r| r.key(zone) == key)
            .ok_or_else(|| Error::NotFound(format!("record [{record}] in zone {zone}")))?;
        Ok(self.delete_resource_record(zone, &existing.id).await?)
    }
}
