use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountOptError {
    #[error("malformed mount specification '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("invalid field '{field}' must be a key=value pair")]
    MissingValue { key: String, field: String },

    #[error("unexpected key '{key}' in '{field}'")]
    UnknownKey { key: String, field: String },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("target is required")]
    MissingTarget,

    #[error("type is required")]
    MissingType,

    #[error("cannot mix '{family}-*' options with mount type '{kind}'")]
    ConflictingOptions { family: String, kind: String },
}

impl MountOptError {
    /// The key that triggered the error, if the failure is tied to one field.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingValue { key, .. }
            | Self::UnknownKey { key, .. }
            | Self::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }

    pub(crate) fn invalid_value(key: &str, value: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
