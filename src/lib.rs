//! DNS record management over several vendor APIs (NameSilo, Dinahosting,
//! ddnss) behind one provider trait, with a synchronizer that converges a
//! zone towards a desired record set.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod lock;
pub mod plan;
pub mod providers;
pub mod sync;

pub use crate::core::provider::DNSProvider;
pub use crate::core::record::{Record, RecordType};
pub use crate::error::Error;
pub use crate::lock::ZoneLocks;
pub use crate::sync::Synchronizer;
