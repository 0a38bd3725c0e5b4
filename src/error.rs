use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Crate-wide error type
// =============================================================================

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported variant: '{tag}'")]
    UnsupportedVariant { tag: String },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    pub fn unsupported_variant(tag: impl Into<String>) -> Self {
        Self::UnsupportedVariant { tag: tag.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_variant_message() {
        let err = Error::unsupported_variant("boat");
        assert_eq!(err.to_string(), "unsupported variant: 'boat'");
    }

    #[test]
    fn test_config_read_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::ConfigRead {
            path: PathBuf::from("showcase.toml"),
            source: io,
        };

        assert!(err.to_string().contains("showcase.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
