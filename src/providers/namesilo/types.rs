use serde::Deserialize;

use crate::core::record::{Record, RecordType, relative_name};

/// Envelope of every NameSilo XML reply. The `<request>` echo is ignored.
#[derive(Deserialize, Debug)]
pub struct NameSiloResponse {
    pub reply: Reply,
}

#[derive(Deserialize, Debug)]
pub struct Reply {
    pub code: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub resource_record: Vec<ResourceRecord>,
    #[serde(default)]
    pub record_id: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResourceRecord {
    pub record_id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub host: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub distance: Option<u16>,
}

pub const SUCCESS: &str = "300";
pub const INVALID_API_KEY: &str = "110";

pub fn is_supported(record_type: &RecordType) -> bool {
    matches!(
        record_type,
        RecordType::A
            | RecordType::AAAA
            | RecordType::CNAME
            | RecordType::MX
            | RecordType::TXT
            | RecordType::SRV
            | RecordType::CAA
    )
}

pub fn to_dns_record(rr: &ResourceRecord, zone: &str) -> Record {
    Record::new(
        relative_name(&rr.host, zone),
        RecordType::from(rr.record_type.as_str()),
        rr.value.clone(),
    )
    .with_id(rr.record_id.clone())
    .with_ttl(rr.ttl.unwrap_or_default())
    .with_priority(rr.distance.unwrap_or_default())
}

/// Query parameters for `dnsAddRecord`. NameSilo wants the host relative to
/// the domain, with the apex sent as an empty string.
pub fn to_add_params(record: &Record, zone: &str) -> Vec<(&'static str, String)> {
    let host = relative_name(&record.name, zone);
    let mut params = vec![
        ("rrtype", record.record_type.to_string()),
        ("rrhost", if host == "@" { String::new() } else { host }),
        ("rrvalue", record.value.clone()),
    ];
    if let Some(ttl) = record.ttl {
        params.push(("rrttl", ttl.to_string()));
    }
    if let Some(priority) = record.priority {
        params.push(("rrdistance", priority.to_string()));
    }
    params
}
