//! Evaluation policy flags carried by every variable.

/// Policy a scanner and interpreter read from a [`Variable`](crate::Variable).
///
/// The defaults capture as little text as possible, evaluate the capture
/// through the context, and reject captures that evaluate to nothing.
///
/// # Examples
///
/// ```
/// use eval_elements::VariableOptions;
///
/// let options = VariableOptions::default().with_interpreted(false);
/// assert!(options.shortest);
/// assert!(!options.interpreted);
/// assert!(!options.accepts_nil_value);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct VariableOptions {
    /// Prefer the minimal capture instead of consuming as much as possible.
    pub shortest: bool,
    /// Evaluate the raw capture through the context before mapping it.
    pub interpreted: bool,
    /// Feed an absent evaluation result into the map instead of failing.
    pub accepts_nil_value: bool,
}

impl VariableOptions {
    /// The default policy, usable in `const` contexts.
    pub const DEFAULT: Self = Self {
        shortest: true,
        interpreted: true,
        accepts_nil_value: false,
    };

    /// Replace the greediness policy.
    #[must_use]
    pub const fn with_shortest(self, shortest: bool) -> Self {
        Self { shortest, ..self }
    }

    /// Replace the evaluation policy.
    #[must_use]
    pub const fn with_interpreted(self, interpreted: bool) -> Self {
        Self {
            interpreted,
            ..self
        }
    }

    /// Replace the nil acceptance policy.
    #[must_use]
    pub const fn with_accepts_nil_value(self, accepts_nil_value: bool) -> Self {
        Self {
            accepts_nil_value,
            ..self
        }
    }
}

impl Default for VariableOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_shortest_interpreted_and_rejects_nil() {
        let options = VariableOptions::default();
        assert!(options.shortest);
        assert!(options.interpreted);
        assert!(!options.accepts_nil_value);
    }

    #[test]
    fn builders_replace_single_flag() {
        let options = VariableOptions::DEFAULT
            .with_shortest(false)
            .with_accepts_nil_value(true);
        assert_eq!(
            options,
            VariableOptions {
                shortest: false,
                interpreted: true,
                accepts_nil_value: true,
            }
        );
    }
}
