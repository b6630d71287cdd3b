use meridian_serde_support::CodecError;

/// Errors raised while reading or writing FHIR content.
#[derive(Debug)]
pub enum SerdeError {
    /// Malformed JSON text, or a model error surfaced through `serde_json`
    Json(serde_json::Error),

    /// Malformed XML text
    #[cfg(feature = "xml")]
    Xml(quick_xml::Error),

    /// The content parsed but does not fit the FHIR model
    Codec(CodecError),

    /// IO error while reading input or writing output
    Io(std::io::Error),

    /// A format name or media type that is not JSON or XML
    UnsupportedFormat(String),

    /// Custom error message
    Custom(String),
}

impl SerdeError {
    /// The model error behind this one, if there is one.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            SerdeError::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for SerdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeError::Json(e) => write!(f, "JSON error: {}", e),
            #[cfg(feature = "xml")]
            SerdeError::Xml(e) => write!(f, "XML error: {}", e),
            SerdeError::Codec(e) => write!(f, "FHIR error: {}", e),
            SerdeError::Io(e) => write!(f, "IO error: {}", e),
            SerdeError::UnsupportedFormat(name) => write!(f, "unsupported format `{}`", name),
            SerdeError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SerdeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerdeError::Json(e) => Some(e),
            #[cfg(feature = "xml")]
            SerdeError::Xml(e) => Some(e),
            SerdeError::Codec(e) => Some(e),
            SerdeError::Io(e) => Some(e),
            SerdeError::UnsupportedFormat(_) | SerdeError::Custom(_) => None,
        }
    }
}

impl From<serde_json::Error> for SerdeError {
    fn from(err: serde_json::Error) -> Self {
        SerdeError::Json(err)
    }
}

#[cfg(feature = "xml")]
impl From<quick_xml::Error> for SerdeError {
    fn from(err: quick_xml::Error) -> Self {
        SerdeError::Xml(err)
    }
}

impl From<CodecError> for SerdeError {
    fn from(err: CodecError) -> Self {
        SerdeError::Codec(err)
    }
}

impl From<std::io::Error> for SerdeError {
    fn from(err: std::io::Error) -> Self {
        SerdeError::Io(err)
    }
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for FHIR serialization operations
pub type Result<T> = std::result::Result<T, SerdeError>;
