use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    #[default]
    A,
    AAAA,
    CNAME,
    TXT,
    MX,
    NS,
    SRV,
    CAA,
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::Other(other) => other,
        }
    }

    /// Types whose payload is preceded by a priority/distance field.
    pub fn has_priority(&self) -> bool {
        matches!(self, RecordType::MX | RecordType::SRV)
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "TXT" => RecordType::TXT,
            "MX" => RecordType::MX,
            "NS" => RecordType::NS,
            "SRV" => RecordType::SRV,
            "CAA" => RecordType::CAA,
            other => RecordType::Other(other.to_string()),
        }
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        RecordType::from(s.as_str())
    }
}

impl From<RecordType> for String {
    fn from(t: RecordType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record normalized across providers.
///
/// An empty `id` means the record has not been created yet, or that the
/// provider does not assign ids at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl Record {
    pub fn new(name: impl Into<String>, record_type: RecordType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = (ttl > 0).then_some(ttl);
        self
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = (priority > 0).then_some(priority);
        self
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Identity of this record inside `zone`, used to match records when no
    /// id is available.
    pub fn key(&self, zone: &str) -> RecordKey {
        RecordKey {
            name: absolute_name(&self.name, zone),
            record_type: self.record_type.clone(),
            value: self.value.clone(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ttl) = self.ttl {
            write!(f, " {ttl}")?;
        }
        write!(f, " {}", self.record_type)?;
        if let Some(priority) = self.priority {
            write!(f, " {priority}")?;
        }
        write!(f, " {}", self.value)
    }
}

/// Parses `name [ttl] TYPE [priority] value`. The value is the remainder of
/// the line and may contain spaces.
impl FromStr for Record {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidInput(format!("cannot parse record: {line:?}"));

        let (name, rest) = split_token(line).ok_or_else(invalid)?;
        let (mut token, mut rest) = split_token(rest).ok_or_else(invalid)?;

        let mut ttl = 0;
        if let Ok(parsed) = token.parse::<u32>() {
            ttl = parsed;
            (token, rest) = split_token(rest).ok_or_else(invalid)?;
        }
        let record_type = RecordType::from(token);

        let mut priority = 0;
        if record_type.has_priority() {
            if let Some((first, remainder)) = split_token(rest) {
                if let Ok(parsed) = first.parse::<u16>() {
                    priority = parsed;
                    rest = remainder;
                }
            }
        }

        let value = rest.trim();
        if value.is_empty() {
            return Err(invalid());
        }

        Ok(Record::new(name, record_type, value)
            .with_ttl(ttl)
            .with_priority(priority))
    }
}

fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(idx) => Some((&s[..idx], &s[idx..])),
        None => Some((s, "")),
    }
}

/// Matching key for a record within a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub name: String,
    pub record_type: RecordType,
    pub value: String,
}

impl RecordKey {
    /// True when name and type agree, regardless of value.
    pub fn same_slot(&self, other: &RecordKey) -> bool {
        self.name == other.name && self.record_type == other.record_type
    }
}

fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Builds the fully qualified name (lowercase, without trailing dot) of
/// `name` inside `zone`. `@` and the empty string denote the apex. Names that
/// already end in the zone are left as they are.
pub fn absolute_name(name: &str, zone: &str) -> String {
    let zone = normalize(zone);
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "@" {
        return zone;
    }
    let name = normalize(trimmed);
    if zone.is_empty() || trimmed.ends_with('.') {
        return name;
    }
    if name == zone || name.ends_with(&format!(".{zone}")) {
        return name;
    }
    format!("{name}.{zone}")
}

/// Inverse of [`absolute_name`]: the apex becomes `@`, names outside the
/// zone are returned unchanged.
pub fn relative_name(name: &str, zone: &str) -> String {
    let zone = normalize(zone);
    let name = normalize(name);
    if name == zone {
        return String::from("@");
    }
    match name.strip_suffix(&format!(".{zone}")) {
        Some(relative) if !zone.is_empty() => relative.to_string(),
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_a_record() {
        let rec: Record = "test A 1.2.3.4".parse().unwrap();
        assert_eq!(rec.record_type, RecordType::A);
        assert_eq!(rec.name, "test");
        assert_eq!(rec.value, "1.2.3.4");
        assert_eq!(rec.ttl, None);
        assert!(!rec.has_id());
    }

    #[test]
    fn test_parse_ttl_and_txt_with_spaces() {
        let rec: Record = "_acme-challenge 300 txt some token value".parse().unwrap();
        assert_eq!(rec.record_type, RecordType::TXT);
        assert_eq!(rec.ttl, Some(300));
        assert_eq!(rec.value, "some token value");
    }

    #[test]
    fn test_parse_mx_priority() {
        let rec: Record = "@ MX 10 mail.example.com".parse().unwrap();
        assert_eq!(rec.record_type, RecordType::MX);
        assert_eq!(rec.priority, Some(10));
        assert_eq!(rec.value, "mail.example.com");
        assert_eq!(rec.to_string(), "@ MX 10 mail.example.com");
    }

    #[test]
    fn test_parse_invalid_record() {
        assert_matches!("test A".parse::<Record>(), Err(Error::InvalidInput(_)));
        assert_matches!("".parse::<Record>(), Err(Error::InvalidInput(_)));
        assert_matches!("test 300".parse::<Record>(), Err(Error::InvalidInput(_)));
    }

    #[test]
    fn test_record_type_is_case_insensitive() {
        assert_eq!(RecordType::from("aaaa"), RecordType::AAAA);
        assert_eq!(RecordType::from("https"), RecordType::Other("HTTPS".into()));
        assert_eq!(String::from(RecordType::CNAME), "CNAME");
    }

    #[test]
    fn test_zero_ttl_and_priority_mean_unset() {
        let rec = Record::new("a", RecordType::MX, "mx").with_ttl(0).with_priority(0);
        assert_eq!(rec.ttl, None);
        assert_eq!(rec.priority, None);
    }

    #[test]
    fn test_absolute_name() {
        assert_eq!(absolute_name("test", "example.com."), "test.example.com");
        assert_eq!(absolute_name("@", "example.com"), "example.com");
        assert_eq!(absolute_name("", "example.com"), "example.com");
        assert_eq!(absolute_name("Test.Example.com.", "example.com"), "test.example.com");
        assert_eq!(absolute_name("test.example.com", "example.com"), "test.example.com");
        assert_eq!(absolute_name("other.org.", "example.com"), "other.org");
    }

    #[test]
    fn test_relative_name() {
        assert_eq!(relative_name("test.example.com", "example.com"), "test");
        assert_eq!(relative_name("example.com.", "example.com"), "@");
        assert_eq!(relative_name("a.b.example.com", "example.com."), "a.b");
        assert_eq!(relative_name("other.org", "example.com"), "other.org");
    }

    #[test]
    fn test_keys_match_across_name_forms() {
        let relative = Record::new("test", RecordType::A, "1.1.1.1");
        let absolute = Record::new("test.example.com.", RecordType::A, "1.1.1.1").with_id("5");
        assert_eq!(relative.key("example.com"), absolute.key("example.com"));

        let changed = Record::new("test", RecordType::A, "2.2.2.2");
        let key = changed.key("example.com");
        assert_ne!(key, relative.key("example.com"));
        assert!(key.same_slot(&relative.key("example.com")));
    }

    #[test]
    fn test_json_shape() {
        let rec = Record::new("test", RecordType::TXT, "abc").with_id("7").with_ttl(3600);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "7", "name": "test", "type": "TXT", "value": "abc", "ttl": 3600})
        );
        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }
}
