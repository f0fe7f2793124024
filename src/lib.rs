//! ferrogo - operator evaluation for a Go-like interpreter
//!
//! # Overview
//!
//! The crate evaluates binary operators on type-checked runtime values with
//! the width, signedness and overflow rules of the language:
//!
//! - Arithmetic: `+ - * / %`
//! - Bitwise and shifts: `& | ^ &^ << >>`
//! - Comparisons: `< > <= >= == !=`
//!
//! Untyped constants are given their default type before any operator runs.
//! Integer division by zero is a recoverable [`RuntimeError`]; operands the
//! type checker should have rejected produce an [`InternalError`].
//!
//! # Quick Start
//!
//! ```
//! use ferrogo::{Bump, Constant, Kind, Object, OperatorEngine, Token, TypeRegistry, Value};
//!
//! let arena = Bump::new();
//! let registry = TypeRegistry::new(&arena);
//! let engine = OperatorEngine::new(registry);
//!
//! let x = Object::new(Value::Int8(-8), registry.basic(Kind::Int8));
//! let one = ferrogo::evaluator::untyped(registry, Kind::UntypedInt, Constant::int(1));
//!
//! let shifted = engine.evaluate_binary(&x, &one, Token::Shr).unwrap();
//! assert_eq!(shifted.value, Value::Int8(-4));
//!
//! let less = engine
//!     .evaluate_comparison(&x, &shifted, Token::Lss, registry.bool())
//!     .unwrap();
//! assert_eq!(less.value, Value::Bool(true));
//! ```
//!
//! # Compound assignment
//!
//! [`base_operator_for`] maps `x op= y` to the operator it applies:
//!
//! ```
//! use ferrogo::{Token, base_operator_for};
//!
//! assert_eq!(base_operator_for(Token::AndNotAssign), Some(Token::AndNot));
//! assert_eq!(base_operator_for(Token::Assign), None);
//! ```

pub use bumpalo::Bump;

// Re-export public API from ferrogo_core
pub use ferrogo_core::evaluator::{
    self, EvalError, EvaluatorOptions, InternalError, OperatorClass, OperatorEngine, RuntimeError,
    base_operator_for,
};
pub use ferrogo_core::syntax::{self, Token};
pub use ferrogo_core::types::{self, DeclSite, Kind, TypeDescriptor, TypeRegistry, WordSize};
pub use ferrogo_core::values::{self, Constant, Handle, Object, Value};
