//! The capability shared by every pattern element.

use crate::result::MatchResult;
use std::sync::Arc;

/// A building block a scanner composes into ordered sequences.
///
/// `matches` is called with successively longer prefixes of the input. The
/// `is_last` flag is `true` only when the element closes its containing
/// sequence; keywords and variables ignore it, richer elements may branch on
/// it.
///
/// Implementations must be deterministic and free of side effects so a
/// single element can be shared across concurrent parse sessions.
///
/// # Examples
///
/// ```
/// use eval_elements::{Keyword, MatchElement, MatchResult};
///
/// let keyword = Keyword::new("in");
/// assert_eq!(keyword.matches("i", false), MatchResult::PossibleMatch);
/// ```
pub trait MatchElement: Send + Sync {
    /// Classify `prefix` against this element.
    fn matches(&self, prefix: &str, is_last: bool) -> MatchResult;
}

impl<T: MatchElement + ?Sized> MatchElement for &T {
    fn matches(&self, prefix: &str, is_last: bool) -> MatchResult {
        (**self).matches(prefix, is_last)
    }
}

impl<T: MatchElement + ?Sized> MatchElement for Box<T> {
    fn matches(&self, prefix: &str, is_last: bool) -> MatchResult {
        (**self).matches(prefix, is_last)
    }
}

impl<T: MatchElement + ?Sized> MatchElement for Arc<T> {
    fn matches(&self, prefix: &str, is_last: bool) -> MatchResult {
        (**self).matches(prefix, is_last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Element that only accepts once it closes the sequence.
    struct Terminator;

    impl MatchElement for Terminator {
        fn matches(&self, prefix: &str, is_last: bool) -> MatchResult {
            if is_last {
                MatchResult::exact(prefix.chars().count(), prefix.to_string())
            } else {
                MatchResult::NoMatch
            }
        }
    }

    fn classify_last(element: impl MatchElement) -> MatchResult {
        element.matches("", true)
    }

    #[test]
    fn forwards_through_pointer_types() {
        let boxed: Box<dyn MatchElement> = Box::new(Terminator);
        let shared: Arc<dyn MatchElement> = Arc::new(Terminator);

        assert_eq!(boxed.matches("abc", false), MatchResult::NoMatch);
        assert_eq!(
            shared.matches("abc", true),
            MatchResult::exact(3, "abc".to_string())
        );
        assert_eq!(classify_last(&Terminator), MatchResult::exact(0, String::new()));
    }

    #[test]
    fn elements_can_be_shared_across_threads() {
        let shared: Arc<dyn MatchElement> = Arc::new(Terminator);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let element = Arc::clone(&shared);
                std::thread::spawn(move || element.matches("x", true))
            })
            .collect();

        for handle in handles {
            let Ok(result) = handle.join() else {
                panic!("matching thread panicked");
            };
            assert_eq!(result, MatchResult::exact(1, "x".to_string()));
        }
    }
}
