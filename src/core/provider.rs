use crate::core::record::Record;
use crate::error::Error;
use async_trait::async_trait;

/// Vendor API client: the three calls every DNS provider binding offers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// All records currently in `zone`.
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error>;

    /// Creates `record` and returns it carrying the vendor-assigned id, if
    /// the vendor assigns one.
    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record, Error>;

    async fn delete_record(&self, zone: &str, record: &Record) -> Result<(), Error>;
}
