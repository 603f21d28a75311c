use crate::error::Error;
use thiserror::Error;

/// Failures raised inside a vendor binding before they are mapped onto the
/// crate-wide [`Error`].
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedType(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<quick_xml::de::DeError> for ProviderError {
    fn from(err: quick_xml::de::DeError) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

pub fn map_error(e: ProviderError) -> Error {
    use ProviderError::*;
    match e {
        Http(err) => Error::ProviderError(err.to_string()),
        Api { code, message } => Error::ProviderError(format!("{code}: {message}")),
        Credential(msg) => Error::CredentialError(msg),
        Parse(msg) => Error::ProviderError(msg),
        UnsupportedType(msg) => Error::UnsupportedType(msg),
        NotFound(msg) => Error::NotFound(msg),
    }
}

impl From<ProviderError> for Error {
    fn from(e: ProviderError) -> Self {
        map_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error_variants() {
        use ProviderError::*;

        let err = map_error(Api {
            code: "110".into(),
            message: "Invalid API Key".into(),
        });
        assert!(matches!(err, Error::ProviderError(msg) if msg == "110: Invalid API Key"));
        let err = map_error(Credential("fail".to_string()));
        assert!(matches!(err, Error::CredentialError(_)));
        let err = map_error(Parse("bad".to_string()));
        assert!(matches!(err, Error::ProviderError(_)));
        let err = map_error(UnsupportedType("SRV".to_string()));
        assert!(matches!(err, Error::UnsupportedType(_)));
        let err = map_error(NotFound("gone".to_string()));
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_parse_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ProviderError::from(json_err), ProviderError::Parse(_)));
    }
}
