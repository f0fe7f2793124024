//! Shared harness for the operator integration tests.

#![allow(dead_code)]

use ferrogo::{
    Bump, Constant, EvalError, Kind, Object, OperatorEngine, Token, TypeRegistry, Value,
    evaluator::untyped,
};

/// An operand described independently of any registry.
#[derive(Debug, Clone)]
pub enum Operand {
    Typed(Value),
    Untyped(Kind, Constant),
}

pub fn typed(value: Value) -> Operand {
    Operand::Typed(value)
}

pub fn untyped_int(value: i64) -> Operand {
    Operand::Untyped(Kind::UntypedInt, Constant::int(value))
}

/// Untyped float constant `numer / denom`.
pub fn untyped_ratio(numer: i64, denom: i64) -> Operand {
    let constant = Constant::ratio(numer, denom).expect("zero denominator");
    Operand::Untyped(Kind::UntypedFloat, constant)
}

pub fn nil() -> Operand {
    Operand::Untyped(Kind::UntypedNil, Constant::Nil)
}

pub struct Harness<'a> {
    pub registry: &'a TypeRegistry<'a>,
    pub engine: OperatorEngine<'a>,
}

impl<'a> Harness<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        let registry = TypeRegistry::new(arena);
        Self {
            registry,
            engine: OperatorEngine::new(registry),
        }
    }

    pub fn object(&self, operand: &Operand) -> Object<'a> {
        match operand {
            Operand::Typed(value) => {
                let kind = value.kind().expect("typed operand without a kind");
                self.registry
                    .object(self.registry.basic(kind), value.clone())
                    .expect("operand does not match its kind")
            }
            Operand::Untyped(kind, constant) => untyped(self.registry, *kind, constant.clone()),
        }
    }

    /// Evaluate `left op right`. Comparisons are typed as plain `bool`.
    pub fn eval(&self, left: &Operand, op: &str, right: &Operand) -> Result<Value, EvalError> {
        let op: Token = op.parse().expect("unknown operator spelling");
        let (left, right) = (self.object(left), self.object(right));
        let result = if op.is_comparison() {
            self.engine
                .evaluate_comparison(&left, &right, op, self.registry.bool())
        } else {
            self.engine.evaluate_binary(&left, &right, op)
        };
        result.map(|obj| obj.value)
    }
}

macro_rules! test_case {
    (
        name: $name:ident,
        left: $left:expr,
        op: $op:literal,
        right: $right:expr,
        value: $expected:block $(,)?
    ) => {
        #[test]
        fn $name() {
            let arena = ferrogo::Bump::new();
            let harness = $crate::cases::Harness::new(&arena);
            let result = harness.eval(&$left, $op, &$right);
            pretty_assertions::assert_eq!(result, $expected);
        }
    };
}
