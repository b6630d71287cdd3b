//! Error type shared by every FHIR codec.

use thiserror::Error;

/// Errors raised while mapping FHIR model types to and from their JSON shape.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A 1..1 or 1..* element is absent.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// More than one type-suffixed key was present for a single choice element.
    #[error("multiple values for polymorphic field `{field}`: {}", .keys.join(", "))]
    MultipleChoiceValues { field: String, keys: Vec<String> },

    /// A choice type was decoded without its type-suffixed key.
    #[error("choice type `{0}` can only be read through a type-suffixed key")]
    UntypedChoice(&'static str),

    #[error("expected a JSON object for {0}")]
    ExpectedObject(String),

    #[error("resourceType `{found}` does not match `{expected}`")]
    ResourceTypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("unknown resourceType `{0}`")]
    UnknownResourceType(String),

    #[error("missing resourceType property")]
    MissingResourceType,

    /// A primitive value whose lexical form does not match its FHIR type.
    #[error("invalid {kind} value: {value}")]
    InvalidPrimitive { kind: &'static str, value: String },

    /// Wraps another error with the element path it occurred at.
    #[error("{path}: {source}")]
    At {
        path: String,
        #[source]
        source: Box<CodecError>,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Prefixes the error path with `segment`.
    ///
    /// Nested calls build paths outside-in, so `e.at("given[1]").at("name[0]")`
    /// reports `name[0].given[1]`.
    pub fn at(self, segment: impl std::fmt::Display) -> Self {
        match self {
            CodecError::At { path, source } => CodecError::At {
                path: format!("{segment}.{path}"),
                source,
            },
            other => CodecError::At {
                path: segment.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the innermost error, skipping path context.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            CodecError::At { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the element path if one was recorded.
    pub fn path(&self) -> Option<&str> {
        match self {
            CodecError::At { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Builds an [`CodecError::InvalidPrimitive`] for a FHIR primitive kind.
    pub fn invalid(kind: &'static str, value: impl std::fmt::Display) -> Self {
        CodecError::InvalidPrimitive {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
