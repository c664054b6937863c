use thiserror::Error;

/// Errors raised while constructing theory values.
///
/// Negative lookups (no chord, no scale, out-of-range interval) are never
/// errors; they come back as `None` or an empty slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("a pattern needs at least one interval")]
    EmptyPattern,

    #[error("invalid key range {min}..={max}: max must be greater than min")]
    InvalidRange { min: i128, max: i128 },

    #[error("key range {min}..={max} is wider than {limit} keys")]
    RangeTooWide { min: i128, max: i128, limit: usize },

    #[error("unknown pitch name: {0}")]
    UnknownPitchName(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
