use crate::core::record::Record;
use thiserror::Error;

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Credential error: {0}")]
    CredentialError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedType(String),

    #[error("Failed to fetch records for zone {zone}: {source}")]
    FetchError {
        zone: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Record id {id} does not exist in zone {zone}")]
    UnknownRecord { zone: String, id: String },

    #[error("Failed to delete record [{record}]: {source}")]
    DeleteError {
        record: Record,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed to create record [{record}]: {source}")]
    CreateError {
        record: Record,
        #[source]
        source: Box<Error>,
    },

    #[error("Operation cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn fetch(zone: &str, source: Error) -> Self {
        Error::FetchError {
            zone: zone.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn delete(record: &Record, source: Error) -> Self {
        Error::DeleteError {
            record: record.clone(),
            source: Box::new(source),
        }
    }

    pub(crate) fn create(record: &Record, source: Error) -> Self {
        Error::CreateError {
            record: record.clone(),
            source: Box::new(source),
        }
    }
}
