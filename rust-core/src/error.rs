use thiserror::Error;

/// Errors raised while building or rendering a diagram.
///
/// Every failure is local to a single diagram build; nothing here is retried.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// An incline needs exactly one of {width+height, width+angle, height+angle}
    #[error("invalid incline parameters: {0}")]
    InvalidInclineParameters(String),

    /// A point was built from a sequence that does not hold exactly two values
    #[error("point requires exactly two components, got {0}")]
    InvalidPoint(usize),

    #[error("cannot divide a point by zero")]
    DivisionByZero,

    #[error("invalid slope direction '{0}', expected '+' or '-'")]
    InvalidSlopeDirection(String),

    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown figure '{0}'")]
    UnknownFigure(String),

    #[error("unknown theme preset '{0}'")]
    UnknownPreset(String),

    #[error("unknown motion '{0}'")]
    UnknownMotion(String),

    #[error("failed to parse theme: {0}")]
    Theme(#[from] toml::de::Error),

    #[error("failed to serialize display list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write SVG: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("png rendering failed: {0}")]
    Png(String),
}
