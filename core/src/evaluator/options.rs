//! Configuration options for the operator engine.

use crate::types::WordSize;

/// Configuration options for operator evaluation.
///
/// # Example
///
/// ```
/// use ferrogo_core::{evaluator::EvaluatorOptions, types::WordSize};
///
/// let options = EvaluatorOptions {
///     word_size: WordSize::W32,
///     ..EvaluatorOptions::default()
/// };
/// assert!(options.warn_on_constant_truncation);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Width of `int`, `uint` and `uintptr`.
    ///
    /// Default: `WordSize::W64`
    pub word_size: WordSize,

    /// Log a warning when an untyped integer constant does not fit in `int`
    /// and is truncated during normalization.
    ///
    /// Default: true
    pub warn_on_constant_truncation: bool,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            word_size: WordSize::default(),
            warn_on_constant_truncation: true,
        }
    }
}
