//! Operator evaluation errors.
//!
//! Many error conditions (mismatched operand types, ordering booleans, taking
//! the remainder of floats, etc.) are rejected by the type checker and can
//! only reach the engine if an earlier stage is broken.
//!
//! # Error Categories
//!
//! - **Runtime errors**: language-level failures of a well-typed program
//!   (e.g., integer division by zero). The host may recover from these and
//!   report them as a panic of the interpreted program.
//!
//! - **Internal errors**: violated invariants between the engine and its
//!   collaborators. These abort evaluation and must never be recovered from
//!   as if the program had failed on its own.

use thiserror::Error;

use crate::{syntax::Token, types::Kind};

/// Error returned by every operator entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl EvalError {
    /// Whether the interpreted program may recover from this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EvalError::Runtime(_))
    }
}

/// Recoverable runtime errors of the interpreted program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Integer division or remainder with a zero divisor.
    #[error("runtime error: integer divide by zero (operator `{op}`)")]
    DivisionByZero { op: Token },

    /// Shift by a negative typed count.
    #[error("runtime error: negative shift amount {count}")]
    NegativeShiftCount { count: i64 },
}

/// The family of operators an entry point accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorClass {
    Binary,
    Comparison,
}

impl core::fmt::Display for OperatorClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OperatorClass::Binary => write!(f, "binary"),
            OperatorClass::Comparison => write!(f, "comparison"),
        }
    }
}

/// Internal consistency faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("operator `{op}` is not defined on operands of type {left} and {right}")]
    InvalidOperands {
        op: Token,
        left: String,
        right: String,
    },

    #[error("untyped nil cannot be used as a value ({context})")]
    UntypedNil { context: &'static str },

    #[error("`{op}` is not a {class} operator")]
    UnsupportedOperator { op: Token, class: OperatorClass },

    #[error("kind {kind} has no storage of its own")]
    NoStorage { kind: Kind },

    #[error("cannot write a {written} into a {slot} slot")]
    SlotMismatch {
        slot: &'static str,
        written: &'static str,
    },

    #[error("{kind} constant holds mismatched value {value}")]
    ConstantMismatch { kind: Kind, value: String },

    #[error("invalid shift count {count}")]
    InvalidShiftCount { count: String },

    #[error("cannot convert a value of type {from} to {to}")]
    NotConvertible { from: String, to: String },

    #[error("a value of type {ty} cannot be compared with nil")]
    NotNillable { ty: String },

    #[error("comparison result type {ty} is not a boolean type")]
    NonBooleanResult { ty: String },

    #[error("value {value} is not represented as type {ty}")]
    RepresentationMismatch { ty: String, value: String },
}
