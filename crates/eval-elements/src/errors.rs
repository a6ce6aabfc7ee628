//! Failure reasons surfaced when converting a capture into a value.

use thiserror::Error;

/// Why a variable produced no value for its capture.
///
/// None of these abort a parse; the scanner decides whether to backtrack.
///
/// # Examples
/// ```
/// use eval_elements::MapError;
/// let err = MapError::Conversion { variable: "count".into() };
/// assert_eq!(err.to_string(), "variable `count` could not convert its capture");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The context handed over is not the type the variable was built for.
    #[error("variable `{variable}` expects a context of type `{expected}`")]
    ContextMismatch {
        /// Name of the variable.
        variable: String,
        /// Type name of the expected context.
        expected: &'static str,
    },
    /// The map function rejected the input.
    #[error("variable `{variable}` could not convert its capture")]
    Conversion {
        /// Name of the variable.
        variable: String,
    },
    /// The capture evaluated to nothing and the variable does not accept nil.
    #[error("variable `{variable}` does not accept a nil value")]
    NilRejected {
        /// Name of the variable.
        variable: String,
    },
}

impl MapError {
    /// Name of the variable that failed.
    #[must_use]
    pub fn variable(&self) -> &str {
        match self {
            Self::ContextMismatch { variable, .. }
            | Self::Conversion { variable }
            | Self::NilRejected { variable } => variable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_context_mismatch() {
        let err = MapError::ContextMismatch {
            variable: "body".into(),
            expected: "Calculator",
        };
        assert_eq!(
            err.to_string(),
            "variable `body` expects a context of type `Calculator`"
        );
        assert_eq!(err.variable(), "body");
    }

    #[test]
    fn formats_nil_rejection() {
        let err = MapError::NilRejected {
            variable: "rhs".into(),
        };
        assert_eq!(err.to_string(), "variable `rhs` does not accept a nil value");
    }
}
