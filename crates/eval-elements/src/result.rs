//! Outcome of a single element match attempt.

use std::collections::BTreeMap;
use std::fmt;

/// Progress reported by a [`MatchElement`](crate::MatchElement) for one
/// input prefix.
///
/// Every scanner consuming these values must handle all four variants; the
/// enum is deliberately not `#[non_exhaustive]`.
///
/// # Examples
///
/// ```
/// use eval_elements::MatchResult;
///
/// let result: MatchResult = MatchResult::exact(2, "if".to_string());
/// assert!(result.is_match());
/// assert_eq!(result.length(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<V = String> {
    /// The prefix can never grow into text accepted by the element.
    NoMatch,
    /// The prefix is a strict prefix of the accepted text; more input may
    /// complete it.
    PossibleMatch,
    /// The element consumes exactly `length` characters of the prefix.
    ExactMatch {
        /// Number of characters consumed, never more than the prefix holds.
        length: usize,
        /// Value produced by the element, the literal text for keywords.
        output: V,
        /// Named sub-bindings, empty for simple elements.
        variables: BTreeMap<String, V>,
    },
    /// The element is a placeholder accepting any input.
    AnyMatch {
        /// Whether the caller should prefer the minimal capture.
        shortest: bool,
    },
}

impl<V> MatchResult<V> {
    /// Build an [`ExactMatch`](Self::ExactMatch) without sub-bindings.
    #[must_use]
    pub const fn exact(length: usize, output: V) -> Self {
        Self::ExactMatch {
            length,
            output,
            variables: BTreeMap::new(),
        }
    }

    /// Whether the element accepted the prefix, either exactly or as a
    /// placeholder.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::ExactMatch { .. } | Self::AnyMatch { .. })
    }

    /// Whether the prefix may still complete into a match.
    #[must_use]
    pub const fn is_possible(&self) -> bool {
        matches!(self, Self::PossibleMatch)
    }

    /// Consumed length of an exact match.
    #[must_use]
    pub const fn length(&self) -> Option<usize> {
        match self {
            Self::ExactMatch { length, .. } => Some(*length),
            _ => None,
        }
    }

    /// Convert the produced values, keeping the variant and length intact.
    #[must_use]
    pub fn map_output<W>(self, mut f: impl FnMut(V) -> W) -> MatchResult<W> {
        match self {
            Self::NoMatch => MatchResult::NoMatch,
            Self::PossibleMatch => MatchResult::PossibleMatch,
            Self::AnyMatch { shortest } => MatchResult::AnyMatch { shortest },
            Self::ExactMatch {
                length,
                output,
                variables,
            } => MatchResult::ExactMatch {
                length,
                output: f(output),
                variables: variables
                    .into_iter()
                    .map(|(name, value)| (name, f(value)))
                    .collect(),
            },
        }
    }
}

impl<V> fmt::Display for MatchResult<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => f.write_str("no match"),
            Self::PossibleMatch => f.write_str("possible match"),
            Self::ExactMatch { length, .. } => write!(f, "exact match of {length} characters"),
            Self::AnyMatch { shortest: true } => f.write_str("any match (shortest)"),
            Self::AnyMatch { shortest: false } => f.write_str("any match (longest)"),
        }
    }
}
