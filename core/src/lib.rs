//! Operator evaluation engine for a Go-like tree-walking interpreter.
//!
//! - [`syntax`]: operator tokens.
//! - [`types`]: storage kinds, type descriptors and the interning registry.
//! - [`values`]: runtime values, exact untyped constants and typed objects.
//! - [`evaluator`]: the [`OperatorEngine`](evaluator::OperatorEngine).

pub mod evaluator;
pub mod syntax;
pub mod types;
pub mod values;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_shift_semantics() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
