use thiserror::Error;

/// Errors returned by the document parser and geometry extractor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed GeoJSON: {0}")]
    Malformed(String),

    #[error("document has no `type` member")]
    MissingType,

    #[error("unknown document type `{0}`")]
    UnknownType(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("bbox must be an array of 4 numbers")]
    InvalidBbox,
}

impl ParseError {
    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        ParseError::InvalidGeometry(reason.into())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Malformed(err.to_string())
    }
}
