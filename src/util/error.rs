// FollowCheck - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.
//
// Depends on core::model only for the DocumentRole vocabulary type.

use crate::core::model::DocumentRole;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all FollowCheck operations.
/// Every variant is recoverable; only the binary turns one into an exit code.
#[derive(Debug)]
pub enum FollowCheckError {
    /// Document text is not valid JSON.
    Parse(ParseError),

    /// Document is valid JSON but has the wrong shape.
    Schema(SchemaError),

    /// Reconciliation requested without both documents.
    Precondition(PreconditionError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Document file exceeds the configured size limit.
    DocumentTooLarge { path: PathBuf, size: u64, max_size: u64 },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for FollowCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Schema(e) => write!(f, "{e}"),
            Self::Precondition(e) => write!(f, "{e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::DocumentTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes. \
                 Raise [input] max_document_bytes in config.toml if this is intended.",
                path.display()
            ),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for FollowCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::Precondition(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::DocumentTooLarge { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Document text failed to parse as JSON.
#[derive(Debug)]
pub struct ParseError {
    pub role: DocumentRole,
    pub source: serde_json::Error,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to read {} file: {}", self.role, self.source)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<ParseError> for FollowCheckError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Document parsed but does not have the expected structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub role: DocumentRole,

    /// Locator of the offending node, e.g. `$[0].string_list_data[3].value`.
    pub path: String,

    /// What was expected at `path`.
    pub reason: &'static str,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid structure in {} file at '{}': {}",
            self.role, self.path, self.reason
        )
    }
}

impl std::error::Error for SchemaError {}

impl From<SchemaError> for FollowCheckError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

// ---------------------------------------------------------------------------
// Precondition errors
// ---------------------------------------------------------------------------

/// Reconciliation was attempted without both documents loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionError {
    /// Roles whose document is absent (never empty).
    pub missing: Vec<DocumentRole>,
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(DocumentRole::label).collect();
        write!(
            f,
            "Both documents required: load the {} file{} first.",
            names.join(" and "),
            if names.len() > 1 { "s" } else { "" }
        )
    }
}

impl std::error::Error for PreconditionError {}

impl From<PreconditionError> for FollowCheckError {
    fn from(e: PreconditionError) -> Self {
        Self::Precondition(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for FollowCheckError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for FollowCheckError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for FollowCheck results.
pub type Result<T> = std::result::Result<T, FollowCheckError>;
