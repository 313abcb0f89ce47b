/// Convenience result type used across counterstrip.
pub type CounterResult<T> = Result<T, CounterError>;

/// Top-level error taxonomy used by the registry, compositors and dispatcher.
#[derive(thiserror::Error, Debug)]
pub enum CounterError {
    /// Themes root is missing, not a directory, or unreadable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Requested theme is not known to the registry.
    #[error("unknown theme: '{0}'")]
    UnknownTheme(String),

    /// A theme has no asset for one of the requested digits.
    #[error("asset not found: theme '{theme}' has no asset for digit '{digit}'")]
    AssetNotFound {
        /// Theme that was searched.
        theme: String,
        /// Digit character without a matching asset.
        digit: char,
    },

    /// Caller supplied an out-of-range or malformed parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CounterError {
    /// Build a [`CounterError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`CounterError::UnknownTheme`] value.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme(name.into())
    }

    /// Build a [`CounterError::AssetNotFound`] value.
    pub fn asset_not_found(theme: impl Into<String>, digit: char) -> Self {
        Self::AssetNotFound {
            theme: theme.into(),
            digit,
        }
    }

    /// Build a [`CounterError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
