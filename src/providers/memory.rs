//! In-process zone store implementing [`DNSProvider`], used for dry runs and
//! as the reference behavior other providers are tested against.

use crate::core::provider::DNSProvider;
use crate::core::record::{Record, absolute_name};
use crate::error::Error;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

#[derive(Default)]
struct Zones {
    records: HashMap<String, Vec<Record>>,
    next_id: u64,
}

impl Zones {
    fn assign(&mut self, zone: &str, record: &Record) -> Record {
        self.next_id += 1;
        let created = Record {
            id: self.next_id.to_string(),
            ..record.clone()
        };
        self.records
            .entry(zone_key(zone))
            .or_default()
            .push(created.clone());
        created
    }
}

#[derive(Default)]
pub struct MemoryProvider {
    zones: Mutex<Zones>,
}

fn zone_key(zone: &str) -> String {
    absolute_name("@", zone)
}

impl MemoryProvider {
    pub fn new(zone: &str) -> Self {
        Self::with_records(zone, Vec::new())
    }

    /// Seeds `zone` with `records`, giving each a fresh id.
    pub fn with_records(zone: &str, records: Vec<Record>) -> Self {
        let mut zones = Zones::default();
        zones.records.entry(zone_key(zone)).or_default();
        for record in &records {
            zones.assign(zone, record);
        }
        Self {
            zones: Mutex::new(zones),
        }
    }

    fn zones(&self) -> std::sync::MutexGuard<'_, Zones> {
        self.zones
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DNSProvider for MemoryProvider {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error> {
        self.zones()
            .records
            .get(&zone_key(zone))
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("zone {zone}")))
    }

    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record, Error> {
        let created = self.zones().assign(zone, record);
        debug!(zone, id = %created.id, "memory: stored record");
        Ok(created)
    }

    async fn delete_record(&self, zone: &str, record: &Record) -> Result<(), Error> {
        let mut zones = self.zones();
        let records = zones
            .records
            .get_mut(&zone_key(zone))
            .ok_or_else(|| Error::NotFound(format!("zone {zone}")))?;

        let position = if record.has_id() {
            records.iter().position(|r| r.id == record.id)
        } else {
            let key = record.key(zone);
            records.iter().position(|r| r.key(zone) == key)
        };
        match position {
            Some(idx) => {
                records.remove(idx);
                Ok(())
            }
            None => Err(Error::NotFound(format!("record [{record}] in zone {zone}"))),
        }
    }
}
