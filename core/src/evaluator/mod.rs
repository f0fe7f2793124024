//! Operator evaluation engine.
//!
//! The engine computes binary operators on already type-checked [`Object`]s.
//! An untyped constant paired with a typed operand first takes that operand's
//! type. Every operation then resolves the left operand's type through the
//! [`TypeRegistry`], computes at that type's exact width and signedness, and
//! returns a fresh Object carrying the left operand's type (or, for
//! comparisons, the caller's result type).
//!
//! ## Design Principles
//!
//! - **Never panic**: operand combinations the type checker should have
//!   rejected surface as [`InternalError`]s, not aborts.
//! - **Width-exact**: integer results wrap at the declared width of the
//!   result type.
//! - **Two error classes**: the interpreted program can recover from a
//!   [`RuntimeError`] but never from an [`InternalError`].
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use ferrogo_core::{
//!     evaluator::OperatorEngine,
//!     syntax::Token,
//!     types::{Kind, TypeRegistry},
//!     values::{Object, Value},
//! };
//!
//! let arena = Bump::new();
//! let registry = TypeRegistry::new(&arena);
//! let engine = OperatorEngine::new(registry);
//!
//! let int8 = registry.basic(Kind::Int8);
//! let left = Object::new(Value::Int8(120), int8);
//! let right = Object::new(Value::Int8(10), int8);
//!
//! let sum = engine.evaluate_binary(&left, &right, Token::Add).unwrap();
//! assert_eq!(sum.value, Value::Int8(-126));
//! ```

mod arithmetic;
mod bitwise;
mod comparison;
mod dispatch;
mod error;
mod normalize;
mod options;
mod word;


pub use dispatch::base_operator_for;
pub use error::{EvalError, InternalError, OperatorClass, RuntimeError};
pub use normalize::{normalize, represent, untyped};
pub use options::EvaluatorOptions;

use crate::{
    syntax::Token,
    types::{Kind, TypeDescriptor, TypeRegistry},
    values::Object,
};

/// Evaluates operators against a type registry.
///
/// The engine holds no mutable state; one instance may serve every
/// expression evaluated against the same registry.
#[derive(Debug, Clone)]
pub struct OperatorEngine<'t> {
    registry: &'t TypeRegistry<'t>,
    options: EvaluatorOptions,
}

impl<'t> OperatorEngine<'t> {
    /// Create an engine with default options.
    pub fn new(registry: &'t TypeRegistry<'t>) -> Self {
        Self::with_options(registry, EvaluatorOptions::default())
    }

    pub fn with_options(registry: &'t TypeRegistry<'t>, options: EvaluatorOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'t TypeRegistry<'t> {
        self.registry
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Give an untyped constant its default type.
    pub fn normalize(&self, obj: &Object<'t>) -> Result<Object<'t>, InternalError> {
        normalize(self.registry, &self.options, obj)
    }

    /// Give an untyped constant the type of the typed operand it is paired
    /// with.
    pub fn represent(
        &self,
        obj: &Object<'t>,
        ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, InternalError> {
        represent(self.registry, &self.options, obj, ty)
    }

    /// Type both operands of a binary operator. An untyped constant facing a
    /// typed operand takes that operand's type; two untyped constants take
    /// their defaults. Also resolves the storage kind of the resulting left
    /// operand.
    fn operands(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
    ) -> Result<(Object<'t>, Object<'t>, Kind), InternalError> {
        let (left, right) = match (left.is_untyped(), right.is_untyped()) {
            (true, false) => (self.represent(left, right.ty)?, right.clone()),
            (false, true) => (left.clone(), self.represent(right, left.ty)?),
            _ => (self.normalize(left)?, self.normalize(right)?),
        };
        let kind = self.registry.storage_kind(left.ty);
        Ok((left, right, kind))
    }

    fn invalid_operands(&self, op: Token, left: &Object<'t>, right: &Object<'t>) -> InternalError {
        InternalError::InvalidOperands {
            op,
            left: left.ty.to_string(),
            right: right.ty.to_string(),
        }
    }
}
