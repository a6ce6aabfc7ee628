//! Element-matching primitives for incremental, pattern-based expression
//! recognition.
//!
//! A scanner composes [`Keyword`]s and [`Variable`]s into ordered
//! [`Sequence`]s and feeds each element successively longer prefixes of the
//! input. Every element answers with a [`MatchResult`] telling the scanner
//! whether to keep growing the prefix, accept it, or abandon the element.
//! Variables defer the conversion of their captured text to a map function
//! bound to an [`EvaluationContext`].
//!
//! # Examples
//!
//! ```
//! use eval_elements::{CloseKeyword, MatchElement, MatchResult, OpenKeyword, Variable};
//!
//! let open = OpenKeyword("(");
//! let body = Variable::<String, ()>::new("body").with_interpreted(false);
//! let close = CloseKeyword(")");
//!
//! assert_eq!(open.matches("(", false), MatchResult::exact(1, "(".to_string()));
//! assert_eq!(body.matches("x", false), MatchResult::AnyMatch { shortest: true });
//! assert_eq!(close.matches(")", true), MatchResult::exact(1, ")".to_string()));
//! assert_eq!(body.resolve("x", &()), Ok("x".to_string()));
//! ```

mod element;
mod erased;
mod errors;
mod keyword;
mod options;
mod result;
mod sequence;
mod variable;

pub use element::MatchElement;
pub use erased::{ErasedVariable, EvaluationContext};
pub use errors::MapError;
pub use keyword::{CloseKeyword, Keyword, KeywordType, OpenKeyword};
pub use options::VariableOptions;
pub use result::MatchResult;
pub use sequence::{Element, Sequence};
pub use variable::{MapInput, Variable};
