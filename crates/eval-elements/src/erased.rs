//! Type-erased access to variables and the evaluation context boundary.
//!
//! A scanner holding variables of many result types stores them as
//! [`ErasedVariable`] trait objects and hands them contexts as `&dyn Any`.
//! The only runtime type check happens when that context is narrowed back to
//! the type the variable was built for.

use crate::element::MatchElement;
use crate::errors::MapError;
use crate::options::VariableOptions;
use crate::variable::{MapInput, Variable};
use std::any::Any;

/// The interpreter side of the boundary: turns a captured expression into a
/// semantic value.
///
/// # Examples
///
/// ```
/// use eval_elements::EvaluationContext;
/// use std::any::Any;
///
/// struct Booleans;
///
/// impl EvaluationContext for Booleans {
///     fn evaluate(&self, expression: &str) -> Option<Box<dyn Any>> {
///         let value: bool = expression.parse().ok()?;
///         Some(Box::new(value))
///     }
/// }
///
/// assert!(Booleans.evaluate("maybe").is_none());
/// ```
pub trait EvaluationContext: 'static {
    /// Evaluate `expression`, yielding `None` when it has no value.
    fn evaluate(&self, expression: &str) -> Option<Box<dyn Any>>;
}

/// Context that evaluates nothing, for patterns without interpreted
/// variables.
impl EvaluationContext for () {
    fn evaluate(&self, _expression: &str) -> Option<Box<dyn Any>> {
        None
    }
}

/// Object-safe view of a [`Variable`] with its result type erased.
pub trait ErasedVariable: MatchElement {
    /// Identifier used when reporting captures.
    fn name(&self) -> &str;

    /// All policy flags.
    fn options(&self) -> VariableOptions;

    /// Whether the minimal capture is preferred.
    fn shortest(&self) -> bool {
        self.options().shortest
    }

    /// Whether the capture is evaluated before mapping.
    fn interpreted(&self) -> bool {
        self.options().interpreted
    }

    /// Whether an absent evaluation result is passed to the map.
    fn accepts_nil_value(&self) -> bool {
        self.options().accepts_nil_value
    }

    /// Run the map against a type-erased context, boxing the result.
    fn perform_map(&self, input: MapInput<'_>, context: &dyn Any) -> Option<Box<dyn Any>>;

    /// Convert a raw capture, applying the evaluation policy.
    ///
    /// # Errors
    ///
    /// See [`Variable::resolve`].
    fn resolve(&self, raw: &str, context: &dyn Any) -> Result<Box<dyn Any>, MapError>;
}

impl<T: 'static, E: EvaluationContext> ErasedVariable for Variable<T, E> {
    fn name(&self) -> &str {
        Self::name(self)
    }

    fn options(&self) -> VariableOptions {
        Self::options(self)
    }

    fn perform_map(&self, input: MapInput<'_>, context: &dyn Any) -> Option<Box<dyn Any>> {
        let value = self.try_perform_map(input, context).ok()?;
        Some(Box::new(value))
    }

    fn resolve(&self, raw: &str, context: &dyn Any) -> Result<Box<dyn Any>, MapError> {
        Self::resolve(self, raw, context).map(|value| Box::new(value) as Box<dyn Any>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::MatchResult;
    use std::sync::Arc;

    struct Words;

    impl EvaluationContext for Words {
        fn evaluate(&self, expression: &str) -> Option<Box<dyn Any>> {
            let count = expression.split_whitespace().count();
            (count > 0).then(|| Box::new(count) as Box<dyn Any>)
        }
    }

    fn erased() -> Vec<Arc<dyn ErasedVariable>> {
        let count: Arc<dyn ErasedVariable> = Arc::new(Variable::<usize, Words>::new("count"));
        let text: Arc<dyn ErasedVariable> =
            Arc::new(Variable::<String, Words>::new("text").with_interpreted(false));
        vec![count, text]
    }

    #[test]
    fn exposes_policy_flags() {
        let variable: Box<dyn ErasedVariable> = Box::new(
            Variable::<usize, Words>::new("count")
                .with_shortest(false)
                .with_accepts_nil_value(true),
        );
        assert_eq!(variable.name(), "count");
        assert!(!variable.shortest());
        assert!(variable.interpreted());
        assert!(variable.accepts_nil_value());
        assert_eq!(
            variable.matches("a b", false),
            MatchResult::AnyMatch { shortest: false }
        );
    }

    #[test]
    fn resolves_heterogeneous_variables() {
        let values: Vec<_> = erased()
            .iter()
            .map(|variable| variable.resolve("two words", &Words))
            .collect();

        let [Ok(count), Ok(text)] = values.as_slice() else {
            panic!("expected both variables to resolve: {values:?}");
        };
        assert_eq!(count.downcast_ref::<usize>(), Some(&2));
        assert_eq!(text.downcast_ref::<String>().map(String::as_str), Some("two words"));
    }

    #[test]
    fn erased_perform_map_checks_context() {
        for variable in erased() {
            assert!(variable.perform_map(MapInput::Text("x"), &()).is_none());
            assert!(matches!(
                variable.resolve("x", &()),
                Err(MapError::ContextMismatch { .. })
            ));
        }
    }

    #[test]
    fn erased_perform_map_boxes_value() {
        let variable: Arc<dyn ErasedVariable> = Arc::new(Variable::<usize, Words>::new("count"));
        let value = variable.perform_map(MapInput::Value(&5_usize), &Words);
        assert_eq!(value.and_then(|v| v.downcast::<usize>().ok()).map(|v| *v), Some(5));
    }

    #[test]
    fn unit_context_evaluates_nothing() {
        assert!(().evaluate("1").is_none());
        let variable = Variable::<String, ()>::new("v");
        assert!(matches!(
            variable.resolve("1", &()),
            Err(MapError::NilRejected { .. })
        ));
    }
}
