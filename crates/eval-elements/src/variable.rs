//! Placeholder elements capturing runs of input.
//!
//! A [`Variable`] never rejects text while matching: it always answers
//! [`MatchResult::AnyMatch`] with its greediness policy. Turning the captured
//! text into a typed value happens afterwards, through a stored map function
//! bound to the evaluation context type `E`.

use crate::element::MatchElement;
use crate::erased::EvaluationContext;
use crate::errors::MapError;
use crate::options::VariableOptions;
use crate::result::MatchResult;
use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// Input handed to a variable's map function.
#[derive(Debug, Clone, Copy)]
pub enum MapInput<'a> {
    /// The raw captured substring of an uninterpreted variable.
    Text(&'a str),
    /// The value an evaluation context produced for the capture.
    Value(&'a dyn Any),
    /// The capture evaluated to nothing and the variable accepts nil.
    Nil,
}

impl<'a> MapInput<'a> {
    /// The raw capture, when the input is text.
    #[must_use]
    pub const fn as_text(self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow an evaluated value as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(self) -> Option<&'a T> {
        match self {
            Self::Value(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Whether the input stands for an absent evaluation result.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Checked conversion into `T`.
    ///
    /// Evaluated values convert when they hold a `T`; raw text converts only
    /// when `T` is [`String`]. Nil never converts.
    ///
    /// # Examples
    ///
    /// ```
    /// use eval_elements::MapInput;
    ///
    /// assert_eq!(MapInput::Text("abc").cast::<String>(), Some("abc".to_string()));
    /// assert_eq!(MapInput::Value(&7_i64).cast::<i64>(), Some(7));
    /// assert_eq!(MapInput::Value(&7_i64).cast::<u8>(), None);
    /// ```
    #[must_use]
    pub fn cast<T: Any + Clone>(self) -> Option<T> {
        match self {
            Self::Text(text) => {
                let owned = text.to_string();
                (&owned as &dyn Any).downcast_ref::<T>().cloned()
            }
            Self::Value(value) => value.downcast_ref::<T>().cloned(),
            Self::Nil => None,
        }
    }
}

impl<'a> From<&'a str> for MapInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

type MapFn<T, E> = dyn Fn(MapInput<'_>, &E) -> Option<T> + Send + Sync;

fn share<T, E, F>(map: F) -> Arc<MapFn<T, E>>
where
    F: Fn(MapInput<'_>, &E) -> Option<T> + Send + Sync + 'static,
{
    Arc::new(map)
}

fn cast_input<T: Any + Clone, E>(input: MapInput<'_>, _context: &E) -> Option<T> {
    input.cast::<T>()
}

/// Named placeholder converting its capture into a `T` with the help of an
/// evaluation context `E`.
///
/// Variables are immutable. Cloning shares the map function, and
/// [`mapped`](Self::mapped) derives a new variable instead of changing this
/// one.
///
/// # Examples
///
/// ```
/// use eval_elements::{MapInput, MatchElement, MatchResult, Variable};
///
/// let number = Variable::<i64, ()>::with_map("n", |input, _| input.as_text()?.parse().ok());
/// let doubled = number.mapped(|n| n.checked_mul(2));
///
/// assert_eq!(doubled.matches("anything", false), MatchResult::AnyMatch { shortest: true });
/// assert_eq!(doubled.perform_map(MapInput::Text("21"), &()), Some(42));
/// assert_eq!(doubled.perform_map(MapInput::Text("21"), &"wrong context"), None);
/// ```
pub struct Variable<T, E> {
    name: String,
    options: VariableOptions,
    map: Arc<MapFn<T, E>>,
}

impl<T: 'static, E: 'static> Variable<T, E> {
    /// Create a variable with default options whose map performs a checked
    /// conversion of the input into `T`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self
    where
        T: Clone,
    {
        Self::with_options(name, VariableOptions::default(), cast_input::<T, E>)
    }

    /// Create a variable with default options and a custom map.
    #[must_use]
    pub fn with_map<F>(name: impl Into<String>, map: F) -> Self
    where
        F: Fn(MapInput<'_>, &E) -> Option<T> + Send + Sync + 'static,
    {
        Self::with_options(name, VariableOptions::default(), map)
    }

    /// Create a variable from explicit options and a map.
    #[must_use]
    pub fn with_options<F>(name: impl Into<String>, options: VariableOptions, map: F) -> Self
    where
        F: Fn(MapInput<'_>, &E) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            options,
            map: share(map),
        }
    }

    /// Identifier used by the scanner when reporting captures.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All policy flags.
    #[must_use]
    pub const fn options(&self) -> VariableOptions {
        self.options
    }

    /// Whether the minimal capture is preferred.
    #[must_use]
    pub const fn shortest(&self) -> bool {
        self.options.shortest
    }

    /// Whether the capture is evaluated before mapping.
    #[must_use]
    pub const fn interpreted(&self) -> bool {
        self.options.interpreted
    }

    /// Whether an absent evaluation result is passed to the map.
    #[must_use]
    pub const fn accepts_nil_value(&self) -> bool {
        self.options.accepts_nil_value
    }

    /// Copy of this variable with a different greediness policy.
    #[must_use]
    pub fn with_shortest(&self, shortest: bool) -> Self {
        self.with_policy(self.options.with_shortest(shortest))
    }

    /// Copy of this variable with a different evaluation policy.
    #[must_use]
    pub fn with_interpreted(&self, interpreted: bool) -> Self {
        self.with_policy(self.options.with_interpreted(interpreted))
    }

    /// Copy of this variable with a different nil acceptance policy.
    #[must_use]
    pub fn with_accepts_nil_value(&self, accepts_nil_value: bool) -> Self {
        self.with_policy(self.options.with_accepts_nil_value(accepts_nil_value))
    }

    fn with_policy(&self, options: VariableOptions) -> Self {
        Self {
            name: self.name.clone(),
            options,
            map: Arc::clone(&self.map),
        }
    }

    /// Derive a variable whose map runs this one's first and then
    /// `transform`.
    ///
    /// When the original map yields nothing, `transform` is not invoked.
    #[must_use]
    pub fn mapped<K, F>(&self, transform: F) -> Variable<K, E>
    where
        K: 'static,
        F: Fn(T) -> Option<K> + Send + Sync + 'static,
    {
        let base = Arc::clone(&self.map);
        Variable {
            name: self.name.clone(),
            options: self.options,
            map: share(move |input, context: &E| base(input, context).and_then(&transform)),
        }
    }

    /// Run the map against a context of the bound type.
    #[must_use]
    pub fn map_value(&self, input: MapInput<'_>, context: &E) -> Option<T> {
        (self.map)(input, context)
    }

    /// Run the map against a type-erased context.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ContextMismatch`] when `context` is not an `E` and
    /// [`MapError::Conversion`] when the map yields nothing.
    pub fn try_perform_map(&self, input: MapInput<'_>, context: &dyn Any) -> Result<T, MapError> {
        let context = self.narrow(context)?;
        self.convert(input, context)
    }

    /// Run the map against a type-erased context, discarding the failure
    /// reason.
    #[must_use]
    pub fn perform_map(&self, input: MapInput<'_>, context: &dyn Any) -> Option<T> {
        self.try_perform_map(input, context).ok()
    }

    fn narrow<'c>(&self, context: &'c dyn Any) -> Result<&'c E, MapError> {
        context.downcast_ref::<E>().ok_or_else(|| {
            log::debug!(
                "variable `{}` received a context that is not `{}`",
                self.name,
                type_name::<E>()
            );
            MapError::ContextMismatch {
                variable: self.name.clone(),
                expected: type_name::<E>(),
            }
        })
    }

    fn convert(&self, input: MapInput<'_>, context: &E) -> Result<T, MapError> {
        self.map_value(input, context).ok_or_else(|| {
            log::trace!("variable `{}` rejected its input {input:?}", self.name);
            MapError::Conversion {
                variable: self.name.clone(),
            }
        })
    }
}

impl<T: 'static, E: EvaluationContext> Variable<T, E> {
    /// Convert a raw capture into a value, applying the evaluation policy.
    ///
    /// Uninterpreted variables map the raw text. Interpreted variables first
    /// evaluate it through the context; an absent result is mapped as
    /// [`MapInput::Nil`] when nil is accepted and rejected otherwise, without
    /// running the map.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ContextMismatch`] for a context of the wrong type,
    /// [`MapError::NilRejected`] for a rejected absent evaluation, and
    /// [`MapError::Conversion`] when the map yields nothing.
    pub fn resolve(&self, raw: &str, context: &dyn Any) -> Result<T, MapError> {
        let context = self.narrow(context)?;
        if !self.options.interpreted {
            return self.convert(MapInput::Text(raw), context);
        }
        match context.evaluate(raw) {
            Some(value) => self.convert(MapInput::Value(&*value), context),
            None if self.options.accepts_nil_value => self.convert(MapInput::Nil, context),
            None => {
                log::trace!("variable `{}` evaluated `{raw}` to nil", self.name);
                Err(MapError::NilRejected {
                    variable: self.name.clone(),
                })
            }
        }
    }
}

impl<T, E> MatchElement for Variable<T, E> {
    fn matches(&self, _prefix: &str, _is_last: bool) -> MatchResult {
        MatchResult::AnyMatch {
            shortest: self.options.shortest,
        }
    }
}

impl<T, E> Clone for Variable<T, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            options: self.options,
            map: Arc::clone(&self.map),
        }
    }
}

impl<T, E> fmt::Debug for Variable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
