use std::io;
use thiserror::Error;

/// Errors for scheme construction, decoding and file io.
#[derive(Debug, Error)]
pub enum Base16Error {
    /// Color count outside `16..=32`.
    #[error("scheme must have at least 16 colors and at most 32 colors, got {0}")]
    InvalidColorCount(usize),
    /// Key is not a color name for the detected mode,
    /// or lies outside the defined slots.
    #[error("malformed color key {0:?}")]
    MalformedColorKey(String),
    /// Two keys that only differ by case.
    #[error("duplicate color key {0:?}")]
    DuplicateColorKey(String),
    /// `scheme` or `author` is missing.
    #[error("missing required key {0:?}")]
    MissingRequiredKey(&'static str),
    /// set_color() for a slot the scheme doesn't have.
    #[error("unknown color name {0:?}")]
    UnknownColorName(String),
    /// The text is not a flat string mapping.
    #[error("invalid scheme file: {0}")]
    Format(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
