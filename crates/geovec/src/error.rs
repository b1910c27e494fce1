//! Error type for reading vectors from text.

use alloc::string::String;
use core::fmt;

/// Errors from parsing a vector out of text.
#[derive(Debug)]
pub enum ParseVectorError {
    /// Fewer components than the vector has.
    MissingComponent { index: usize },
    /// A component did not parse as the scalar type.
    InvalidComponent { index: usize, text: String },
    /// More components, or other text, after the last one.
    TrailingInput,
    /// An opening parenthesis without its closing one, or the reverse.
    UnbalancedParen,
    /// Input ended before the component was read.
    #[cfg(feature = "std")]
    UnexpectedEof { index: usize },
    /// Reading the input or writing the prompt failed.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

fn component_name(index: usize) -> &'static str {
    match index {
        0 => "x",
        1 => "y",
        2 => "z",
        _ => "?",
    }
}

impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComponent { index } => {
                write!(f, "missing component `{}`", component_name(*index))
            }
            Self::InvalidComponent { index, text } => {
                write!(f, "invalid value {text:?} for component `{}`", component_name(*index))
            }
            Self::TrailingInput => write!(f, "unexpected input after last component"),
            Self::UnbalancedParen => write!(f, "unbalanced parenthesis"),
            #[cfg(feature = "std")]
            Self::UnexpectedEof { index } => {
                write!(f, "input ended before component `{}`", component_name(*index))
            }
            #[cfg(feature = "std")]
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl core::error::Error for ParseVectorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ParseVectorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_component() {
        let e = ParseVectorError::InvalidComponent { index: 1, text: "abc".into() };
        assert_eq!(e.to_string(), "invalid value \"abc\" for component `y`");
        let e = ParseVectorError::MissingComponent { index: 2 };
        assert_eq!(e.to_string(), "missing component `z`");
    }
}
