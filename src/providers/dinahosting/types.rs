use serde::Deserialize;

use crate::core::record::{Record, RecordType, relative_name};
use crate::providers::error::ProviderError;

pub const SUCCESS: i32 = 1000;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DinahostingResponse {
    #[serde(default)]
    pub tr_id: String,
    pub response_code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub command: String,
}

/// One entry of `Domain_Zone_GetAll`. Which field holds the payload depends
/// on the record type.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub destination_hostname: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub text: String,
}

impl ZoneRecord {
    pub fn value(&self) -> &str {
        [
            &self.destination_hostname,
            &self.ip,
            &self.address,
            &self.text,
        ]
        .into_iter()
        .find(|v| !v.is_empty())
        .map(String::as_str)
        .unwrap_or_default()
    }
}

pub fn to_dns_record(zr: &ZoneRecord) -> Record {
    let name = if zr.hostname.is_empty() {
        String::from("@")
    } else {
        zr.hostname.clone()
    };
    Record::new(name, RecordType::from(zr.record_type.as_str()), zr.value())
}

/// Per-type command suffix and the parameter that carries the value.
fn command_shape(record_type: &RecordType) -> Result<(&'static str, &'static str), ProviderError> {
    match record_type {
        RecordType::A => Ok(("TypeA", "ip")),
        RecordType::AAAA => Ok(("TypeAAAA", "ip")),
        RecordType::CNAME => Ok(("TypeCNAME", "destinationHost")),
        RecordType::TXT => Ok(("TypeTXT", "text")),
        other => Err(ProviderError::UnsupportedType(other.to_string())),
    }
}

/// Builds the command name and parameters for adding (`Add`) or removing
/// (`Delete`) `record` in `zone`.
pub fn to_command(
    action: &str,
    record: &Record,
    zone: &str,
) -> Result<(String, Vec<(&'static str, String)>), ProviderError> {
    let (suffix, value_param) = command_shape(&record.record_type)?;
    let params = vec![
        ("hostname", relative_name(&record.name, zone)),
        (value_param, record.value.clone()),
    ];
    Ok((format!("Domain_Zone_{action}{suffix}"), params))
}
