//! Error types for carousel construction
//!
//! Only construction can fail. Navigation that runs past either end
//! without wrap-around is a defined no-op, not an error.

use core::fmt;

/// Errors that can occur while building a carousel
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarouselError {
    /// `loop` and `infinite` were both requested
    LoopAndInfinite,

    /// A numeric option is outside its accepted range
    InvalidValue {
        field: &'static str,
        value: u32,
    },

    /// The host element has no slides to show
    NoSlides,

    /// The options document could not be parsed
    InvalidOptions(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::LoopAndInfinite => {
                write!(f, "a carousel cannot be both looped and infinite")
            }
            CarouselError::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {}", field, value)
            }
            CarouselError::NoSlides => write!(f, "Carousel has no slides"),
            CarouselError::InvalidOptions(msg) => write!(f, "Invalid carousel options: {}", msg),
        }
    }
}

impl std::error::Error for CarouselError {}

impl From<serde_json::Error> for CarouselError {
    fn from(e: serde_json::Error) -> Self {
        CarouselError::InvalidOptions(e.to_string())
    }
}
