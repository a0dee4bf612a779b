use crate::space::ColorSpace;

/// All error types that can occur when building or transforming colors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A channel value lies outside the bounds declared by its model.
    #[error("{space} channel `{channel}` must be within {min}..={max}, got {value}")]
    RangeViolation {
        space: ColorSpace,
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A list-based constructor received the wrong number of values.
    #[error("{space} expects {expected} channel values, got {found}")]
    ArityMismatch {
        space: ColorSpace,
        expected: usize,
        found: usize,
    },

    /// An interpolation factor or step count is outside its valid domain.
    #[error("invalid interpolation step: {0}")]
    InvalidStep(String),

    /// A random sampling range is inverted or exceeds the channel bounds.
    #[error("invalid random range for {space} channel `{channel}`: {min}..={max}")]
    InvalidRandomRange {
        space: ColorSpace,
        channel: &'static str,
        min: f64,
        max: f64,
    },

    /// A warmer/cooler adjustment amount is not usable.
    #[error("invalid hue adjustment amount: {0}")]
    InvalidAmount(f64),

    /// Failed to parse a color from a hex or comma-separated string.
    #[error("invalid color string: {0}")]
    InvalidColorString(String),

    /// A channel index does not exist in the model.
    #[error("{space} has no channel at index {index}")]
    UnknownChannel { space: ColorSpace, index: usize },
}

impl Error {
    /// Create a new range violation error
    pub fn range(space: ColorSpace, channel: &'static str, value: f64, min: f64, max: f64) -> Self {
        Error::RangeViolation {
            space,
            channel,
            value,
            min,
            max,
        }
    }

    /// Create a new arity mismatch error
    pub fn arity(space: ColorSpace, expected: usize, found: usize) -> Self {
        Error::ArityMismatch {
            space,
            expected,
            found,
        }
    }

    /// Create a new invalid random range error
    pub fn random_range(space: ColorSpace, channel: &'static str, min: f64, max: f64) -> Self {
        Error::InvalidRandomRange {
            space,
            channel,
            min,
            max,
        }
    }

    /// Create a new invalid color string error
    pub fn color_string(input: &str) -> Self {
        Error::InvalidColorString(input.to_string())
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
