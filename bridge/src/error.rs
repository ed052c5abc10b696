//! Error types for translation and the plugin-boundary plumbing.

/// Raised when an SDK object cannot be translated.
///
/// Unknown enum values and unrecognised brand strings are not errors; they
/// translate to `None`. The only failure is a field the SDK guarantees that
/// turns out to be missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("{entity} is missing required field `{field}`")]
    MissingRequiredField {
        entity: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error("Failed to encode API value: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("Invalid log filter '{filter}': {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("Tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = MappingError::MissingRequiredField {
            entity: "Reader",
            field: "serialNumber",
        };
        assert_eq!(error.to_string(), "Reader is missing required field `serialNumber`");
    }

    #[test]
    fn test_mapping_error_is_transparent_in_bridge_error() {
        let error: BridgeError = MappingError::MissingRequiredField {
            entity: "Reader",
            field: "serialNumber",
        }
        .into();
        assert_eq!(error.to_string(), "Reader is missing required field `serialNumber`");
        assert!(matches!(error, BridgeError::Mapping(_)));
    }
}
