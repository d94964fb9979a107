//! Error types for fleet ingestion and configuration.
//!
//! The analytics functions themselves are total over validated input and never
//! return errors. Everything that can fail happens at the boundary: reading a
//! fleet file, checking asset invariants, or loading a `FleetConfig`.

use std::fmt;

/// Result type for fleet operations
pub type FleetResult<T> = Result<T, FleetError>;

/// Structured context for fleet errors.
///
/// Records where the error occurred and which asset or field was involved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "ingest_records", "load_config")
    pub operation: Option<String>,
    /// The asset identifier if the error concerns a single asset
    pub asset_id: Option<String>,
    /// The offending field (e.g., "availability")
    pub field: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the asset identifier.
    pub fn with_asset_id(mut self, id: impl ToString) -> Self {
        self.asset_id = Some(id.to_string());
        self
    }

    /// Set the offending field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref id) = self.asset_id {
            parts.push(format!("asset={}", id));
        }
        if let Some(ref field) = self.field {
            parts.push(format!("field={}", field));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for fleet operations
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// An asset record violates a data-model invariant.
    #[error("Invalid asset: {message} {context}")]
    InvalidAsset {
        message: String,
        context: ErrorContext,
    },

    /// Malformed JSON or TOML input.
    #[error("Parse error: {message} {context}")]
    ParseError {
        message: String,
        context: ErrorContext,
    },

    /// Bad thresholds, buckets, or an unusable config location.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// File could not be read.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },
}

impl FleetError {
    /// Create an invalid-asset error with context.
    pub fn invalid_asset_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::InvalidAsset {
            message: message.into(),
            context,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a parse error with context.
    pub fn parse_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ParseError {
            message: message.into(),
            context,
        }
    }

    /// Create a configuration error with context.
    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context,
        }
    }

    /// Create an I/O error with context.
    pub fn io_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Io {
            message: message.into(),
            context,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::InvalidAsset { context, .. } => context,
            Self::ParseError { context, .. } => context,
            Self::ConfigurationError { context, .. } => context,
            Self::Io { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidAsset { context, .. }
            | Self::ParseError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::Io { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        FleetError::parse_with_context(
            err.to_string(),
            ErrorContext::default().with_details(format!("line={}, column={}", err.line(), err.column())),
        )
    }
}

impl From<toml::de::Error> for FleetError {
    fn from(err: toml::de::Error) -> Self {
        FleetError::parse(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display_lists_set_fields() {
        let ctx = ErrorContext::new("ingest_records")
            .with_asset_id("CC2019216")
            .with_field("availability");
        assert_eq!(
            ctx.to_string(),
            "[operation=ingest_records, asset=CC2019216, field=availability]"
        );
    }

    #[test]
    fn test_empty_context_display() {
        assert_eq!(ErrorContext::default().to_string(), "[]");
    }

    #[test]
    fn test_with_operation_overrides_context() {
        let err = FleetError::configuration_with_context(
            "bad bucket",
            ErrorContext::new("validate_config").with_field("age_buckets"),
        )
        .with_operation("load_config");
        assert_eq!(err.context().operation.as_deref(), Some("load_config"));
        assert!(err.to_string().starts_with("Configuration error: bad bucket"));
    }

    #[test]
    fn test_json_error_converts_to_parse_error() {
        let err: FleetError = serde_json::from_str::<Vec<u32>>("[1, 2,")
            .unwrap_err()
            .into();
        assert!(matches!(err, FleetError::ParseError { .. }));
        assert!(err.context().details.as_deref().unwrap_or("").contains("line=1"));
    }
}
