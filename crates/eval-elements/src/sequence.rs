//! Ordered element sequences built with `+`.
//!
//! ```
//! use eval_elements::{CloseKeyword, OpenKeyword, Variable};
//!
//! let group = OpenKeyword("(") + Variable::<String, ()>::new("body") + CloseKeyword(")");
//! assert_eq!(group.len(), 3);
//! assert!(group.is_balanced());
//! ```

use crate::element::MatchElement;
use crate::erased::{ErasedVariable, EvaluationContext};
use crate::keyword::Keyword;
use crate::result::MatchResult;
use crate::variable::Variable;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::sync::Arc;

/// One entry of a [`Sequence`].
#[derive(Clone)]
pub enum Element {
    /// Literal text.
    Keyword(Keyword),
    /// Placeholder with its result type erased.
    Variable(Arc<dyn ErasedVariable>),
}

impl Element {
    /// The keyword, if this entry is one.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Self::Keyword(keyword) => Some(keyword),
            Self::Variable(_) => None,
        }
    }

    /// The variable, if this entry is one.
    #[must_use]
    pub fn as_variable(&self) -> Option<&dyn ErasedVariable> {
        match self {
            Self::Variable(variable) => Some(&**variable),
            Self::Keyword(_) => None,
        }
    }
}

impl MatchElement for Element {
    fn matches(&self, prefix: &str, is_last: bool) -> MatchResult {
        match self {
            Self::Keyword(keyword) => keyword.matches(prefix, is_last),
            Self::Variable(variable) => variable.matches(prefix, is_last),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => f.debug_tuple("Keyword").field(keyword).finish(),
            Self::Variable(variable) => f
                .debug_struct("Variable")
                .field("name", &variable.name())
                .field("options", &variable.options())
                .finish(),
        }
    }
}

impl From<Keyword> for Element {
    fn from(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl<T: 'static, E: EvaluationContext> From<Variable<T, E>> for Element {
    fn from(variable: Variable<T, E>) -> Self {
        Self::Variable(Arc::new(variable))
    }
}

impl From<Arc<dyn ErasedVariable>> for Element {
    fn from(variable: Arc<dyn ErasedVariable>) -> Self {
        Self::Variable(variable)
    }
}

/// Ordered elements a scanner walks through.
#[derive(Debug, Clone, Default)]
pub struct Sequence(Vec<Element>);

impl Sequence {
    /// An empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an element.
    pub fn push(&mut self, element: impl Into<Element>) {
        self.0.push(element.into());
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.0.get(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    /// Iterate over the elements paired with the `is_last` flag to pass to
    /// [`MatchElement::matches`].
    pub fn with_last(&self) -> impl Iterator<Item = (&Element, bool)> + '_ {
        let last = self.0.len().saturating_sub(1);
        self.0
            .iter()
            .enumerate()
            .map(move |(index, element)| (element, index == last))
    }

    /// The keywords, in order.
    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> + '_ {
        self.0.iter().filter_map(Element::as_keyword)
    }

    /// The variables, in order.
    pub fn variables(&self) -> impl Iterator<Item = &dyn ErasedVariable> + '_ {
        self.0.iter().filter_map(Element::as_variable)
    }

    /// Net nesting depth after passing every keyword.
    #[must_use]
    pub fn nesting_depth(&self) -> isize {
        self.keywords().map(|keyword| keyword.kind().depth_delta()).sum()
    }

    /// Whether every closing keyword follows a matching opening one and the
    /// depth returns to zero.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0_isize;
        for keyword in self.keywords() {
            depth += keyword.kind().depth_delta();
            if depth < 0 {
                return false;
            }
        }
        depth == 0
    }

    /// Consume the sequence, returning its elements.
    #[must_use]
    pub fn into_inner(self) -> Vec<Element> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<I: Into<Element>> FromIterator<I> for Sequence {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<R: Into<Element>> Add<R> for Sequence {
    type Output = Self;

    fn add(mut self, rhs: R) -> Self {
        self.push(rhs);
        self
    }
}

impl<R: Into<Element>> AddAssign<R> for Sequence {
    fn add_assign(&mut self, rhs: R) {
        self.push(rhs);
    }
}

impl<R: Into<Element>> Add<R> for Element {
    type Output = Sequence;

    fn add(self, rhs: R) -> Sequence {
        Sequence(vec![self, rhs.into()])
    }
}

impl<R: Into<Element>> Add<R> for Keyword {
    type Output = Sequence;

    fn add(self, rhs: R) -> Sequence {
        Element::from(self) + rhs
    }
}

impl<T: 'static, E: EvaluationContext, R: Into<Element>> Add<R> for Variable<T, E> {
    type Output = Sequence;

    fn add(self, rhs: R) -> Sequence {
        Element::from(self) + rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::{CloseKeyword, KeywordType, OpenKeyword};
    use rstest::rstest;

    fn group() -> Sequence {
        OpenKeyword("(") + Variable::<String, ()>::new("body").with_interpreted(false)
            + CloseKeyword(")")
    }

    #[test]
    fn plus_builds_sequence_in_order() {
        let sequence = group();
        assert_eq!(sequence.len(), 3);
        assert_eq!(
            sequence.get(0).and_then(Element::as_keyword).map(Keyword::kind),
            Some(KeywordType::OpeningStatement)
        );
        assert_eq!(
            sequence.get(1).and_then(Element::as_variable).map(ErasedVariable::name),
            Some("body")
        );
        assert_eq!(
            sequence.get(2).and_then(Element::as_keyword).map(Keyword::name),
            Some(")")
        );
    }

    #[test]
    fn plus_assign_appends() {
        let mut sequence = Sequence::new();
        assert!(sequence.is_empty());
        sequence += Keyword::new("not");
        sequence += Variable::<bool, ()>::new("operand");
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.variables().count(), 1);
        assert_eq!(sequence.keywords().count(), 1);
    }

    #[test]
    fn flags_only_final_element_as_last() {
        let flags: Vec<bool> = group().with_last().map(|(_, last)| last).collect();
        assert_eq!(flags, vec![false, false, true]);
        assert_eq!(Sequence::new().with_last().count(), 0);
    }

    #[test]
    fn elements_dispatch_matches() {
        let results: Vec<MatchResult> = group()
            .with_last()
            .zip(["(", "x", ")"])
            .map(|((element, last), prefix)| element.matches(prefix, last))
            .collect();
        assert_eq!(
            results,
            vec![
                MatchResult::exact(1, "(".to_string()),
                MatchResult::AnyMatch { shortest: true },
                MatchResult::exact(1, ")".to_string()),
            ]
        );
    }

    #[rstest]
    #[case(vec![OpenKeyword("("), CloseKeyword(")")], 0, true)]
    #[case(vec![OpenKeyword("("), OpenKeyword("(")], 2, false)]
    #[case(vec![CloseKeyword(")"), OpenKeyword("(")], 0, false)]
    #[case(vec![Keyword::new("if"), Keyword::new("then")], 0, true)]
    fn tracks_nesting(
        #[case] keywords: Vec<Keyword>,
        #[case] depth: isize,
        #[case] balanced: bool,
    ) {
        let sequence: Sequence = keywords.into_iter().collect();
        assert_eq!(sequence.nesting_depth(), depth);
        assert_eq!(sequence.is_balanced(), balanced);
    }

    #[test]
    fn debug_names_variables() {
        let rendered = format!("{:?}", group());
        assert!(rendered.contains("Keyword(Keyword { name: \"(\""));
        assert!(rendered.contains("name: \"body\""));
    }

    #[test]
    fn iterates_by_reference_and_value() {
        let sequence = group();
        assert_eq!((&sequence).into_iter().count(), 3);
        assert_eq!(sequence.into_inner().len(), 3);
    }
}
