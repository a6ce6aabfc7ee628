//! Literal keyword elements and their structural roles.
//!
//! A [`Keyword`] anchors a pattern on fixed text. Keywords tagged as opening
//! or closing statements let a scanner track nesting depth of paired
//! delimiters without comparing against a hardcoded bracket set.

use crate::element::MatchElement;
use crate::result::MatchResult;
use std::fmt;

/// Structural role of a [`Keyword`] inside a pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum KeywordType {
    /// Ordinary static text with no pairing semantics.
    #[default]
    Generic,
    /// First keyword of a semantically paired couple, e.g. `(`.
    OpeningStatement,
    /// Second keyword of a semantically paired couple, e.g. `)`.
    ClosingStatement,
}

impl KeywordType {
    /// Change in nesting depth caused by passing a keyword of this type.
    ///
    /// # Examples
    ///
    /// ```
    /// use eval_elements::KeywordType;
    ///
    /// assert_eq!(KeywordType::OpeningStatement.depth_delta(), 1);
    /// assert_eq!(KeywordType::ClosingStatement.depth_delta(), -1);
    /// assert_eq!(KeywordType::Generic.depth_delta(), 0);
    /// ```
    #[must_use]
    pub const fn depth_delta(self) -> isize {
        match self {
            Self::Generic => 0,
            Self::OpeningStatement => 1,
            Self::ClosingStatement => -1,
        }
    }

    /// Whether the keyword takes part in delimiter pairing.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        !matches!(self, Self::Generic)
    }

    /// Return the role as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::OpeningStatement => "opening_statement",
            Self::ClosingStatement => "closing_statement",
        }
    }
}

impl fmt::Display for KeywordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed literal text inside a pattern.
///
/// The name is trimmed once at construction; incoming prefixes are compared
/// verbatim. Two keywords are equal when both name and type agree.
///
/// # Examples
///
/// ```
/// use eval_elements::{Keyword, KeywordType};
///
/// let keyword = Keyword::new("  (  ");
/// assert_eq!(keyword.name(), "(");
/// assert_eq!(keyword.kind(), KeywordType::Generic);
/// assert_ne!(keyword, Keyword::open("("));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawKeyword")
)]
pub struct Keyword {
    name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: KeywordType,
}

impl Keyword {
    /// Create a generic keyword.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self::with_type(name, KeywordType::Generic)
    }

    /// Create a keyword with an explicit structural role.
    #[must_use]
    pub fn with_type(name: impl AsRef<str>, kind: KeywordType) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            kind,
        }
    }

    /// Create the opening keyword of a delimiter pair.
    #[must_use]
    pub fn open(name: impl AsRef<str>) -> Self {
        Self::with_type(name, KeywordType::OpeningStatement)
    }

    /// Create the closing keyword of a delimiter pair.
    #[must_use]
    pub fn close(name: impl AsRef<str>) -> Self {
        Self::with_type(name, KeywordType::ClosingStatement)
    }

    /// The trimmed literal text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structural role.
    #[must_use]
    pub const fn kind(&self) -> KeywordType {
        self.kind
    }
}

/// Opening keyword of a delimiter pair, usually a bracket such as `[`.
#[expect(non_snake_case, reason = "mirrors the element name used in patterns")]
#[must_use]
pub fn OpenKeyword(name: impl AsRef<str>) -> Keyword {
    Keyword::open(name)
}

/// Closing keyword of a delimiter pair, usually a bracket such as `]`.
#[expect(non_snake_case, reason = "mirrors the element name used in patterns")]
#[must_use]
pub fn CloseKeyword(name: impl AsRef<str>) -> Keyword {
    Keyword::close(name)
}

impl MatchElement for Keyword {
    fn matches(&self, prefix: &str, _is_last: bool) -> MatchResult {
        // A longer prefix still matches; the surplus belongs to the next element.
        if prefix.starts_with(self.name.as_str()) {
            MatchResult::exact(self.name.chars().count(), self.name.clone())
        } else if self.name.starts_with(prefix) {
            MatchResult::PossibleMatch
        } else {
            MatchResult::NoMatch
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Keyword {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Keyword {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Deserialisation shape; routes through the trimming constructor.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawKeyword {
    name: String,
    #[serde(default, rename = "type")]
    kind: KeywordType,
}

#[cfg(feature = "serde")]
impl From<RawKeyword> for Keyword {
    fn from(raw: RawKeyword) -> Self {
        Self::with_type(raw.name, raw.kind)
    }
}
