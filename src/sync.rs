use crate::core::provider::DNSProvider;
use crate::core::record::Record;
use crate::error::Error;
use crate::plan::plan;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Host-facing entry points: list, append, set and delete records of a zone
/// through one [`DNSProvider`].
///
/// Calls are sequential and nothing is cached between them. Callers that
/// share a zone should serialize through [`crate::lock::ZoneLocks`].
pub struct Synchronizer {
    provider: Arc<dyn DNSProvider>,
    cancel: CancellationToken,
}

impl Synchronizer {
    pub fn new(provider: Arc<dyn DNSProvider>) -> Self {
        Self {
            provider,
            cancel: CancellationToken::new(),
        }
    }

    /// Aborts in-flight and pending vendor calls once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    async fn guarded<T, F>(&self, fut: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Error::Cancelled),
            res = fut => res,
        }
    }

    async fn fetch(&self, zone: &str) -> Result<Vec<Record>, Error> {
        self.guarded(self.provider.list_records(zone))
            .await
            .map_err(|e| wrap(e, |e| Error::fetch(zone, e)))
    }

    async fn create(&self, zone: &str, record: &Record) -> Result<Record, Error> {
        let created = self
            .guarded(self.provider.create_record(zone, record))
            .await
            .map_err(|e| wrap(e, |e| Error::create(record, e)))?;
        debug!(zone, record = %created, id = %created.id, "created record");
        Ok(created)
    }

    async fn delete(&self, zone: &str, record: &Record) -> Result<(), Error> {
        self.guarded(self.provider.delete_record(zone, record))
            .await
            .map_err(|e| wrap(e, |e| Error::delete(record, e)))?;
        debug!(zone, record = %record, id = %record.id, "deleted record");
        Ok(())
    }

    pub async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error> {
        self.fetch(zone).await
    }

    /// Creates every record without looking at the zone first.
    pub async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            created.push(self.create(zone, record).await?);
        }
        info!(zone, created = created.len(), "appended records");
        Ok(created)
    }

    /// Converges the zone towards `desired`.
    ///
    /// Old versions of changed records are deleted first, then changed and
    /// new records are created, both in input order. The first failure stops
    /// the run and nothing already applied is rolled back; calling again
    /// recomputes the diff from fresh state.
    ///
    /// Returns the unchanged records in zone order followed by the created
    /// ones in desired order.
    pub async fn set_records(&self, zone: &str, desired: &[Record]) -> Result<Vec<Record>, Error> {
        let existing = self.fetch(zone).await?;
        let plan = plan(zone, &existing, desired)?;
        if plan.is_noop() {
            debug!(zone, unchanged = plan.unchanged.len(), "records already in sync");
            return Ok(plan.unchanged);
        }
        debug!(
            zone,
            unchanged = plan.unchanged.len(),
            deletions = plan.deletions.len(),
            creations = plan.creations.len(),
            "planned record changes"
        );

        for record in &plan.deletions {
            self.delete(zone, record).await.inspect_err(|e| {
                warn!(zone, error = %e, "aborting record sync");
            })?;
        }

        let mut applied = plan.unchanged;
        for record in &plan.creations {
            let created = self.create(zone, record).await.inspect_err(|e| {
                warn!(zone, error = %e, "aborting record sync");
            })?;
            applied.push(created);
        }

        info!(
            zone,
            deleted = plan.deletions.len(),
            created = plan.creations.len(),
            "synchronized records"
        );
        Ok(applied)
    }

    /// Deletes every record and returns the ones removed.
    pub async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error> {
        let mut deleted = Vec::with_capacity(records.len());
        for record in records {
            self.delete(zone, record).await?;
            deleted.push(record.clone());
        }
        info!(zone, deleted = deleted.len(), "deleted records");
        Ok(deleted)
    }
}

/// Adds operation context to a vendor error; cancellation passes through.
fn wrap(err: Error, context: impl FnOnce(Error) -> Error) -> Error {
    match err {
        Error::Cancelled => Error::Cancelled,
        other => context(other),
    }
}
