//! Token dispatch.

use tracing::{debug, error, trace};

use crate::{
    evaluator::{EvalError, InternalError, OperatorClass, OperatorEngine},
    syntax::Token,
    types::TypeDescriptor,
    values::Object,
};

type BinaryFn<'t> =
    fn(&OperatorEngine<'t>, &Object<'t>, &Object<'t>) -> Result<Object<'t>, EvalError>;

type ComparisonFn<'t> = fn(
    &OperatorEngine<'t>,
    &Object<'t>,
    &Object<'t>,
    &'t TypeDescriptor<'t>,
) -> Result<Object<'t>, EvalError>;

fn binary_operator<'t>(op: Token) -> Option<BinaryFn<'t>> {
    let f: BinaryFn<'t> = match op {
        Token::Add => OperatorEngine::add,
        Token::Sub => OperatorEngine::subtract,
        Token::Mul => OperatorEngine::multiply,
        Token::Quo => OperatorEngine::quotient,
        Token::Rem => OperatorEngine::remainder,
        Token::And => OperatorEngine::and,
        Token::Or => OperatorEngine::or,
        Token::Xor => OperatorEngine::xor,
        Token::AndNot => OperatorEngine::and_not,
        Token::Shl => OperatorEngine::shift_left,
        Token::Shr => OperatorEngine::shift_right,
        _ => return None,
    };
    Some(f)
}

fn comparison_operator<'t>(op: Token) -> Option<ComparisonFn<'t>> {
    let f: ComparisonFn<'t> = match op {
        Token::Lss => OperatorEngine::less,
        Token::Gtr => OperatorEngine::greater,
        Token::Leq => OperatorEngine::less_equal,
        Token::Geq => OperatorEngine::greater_equal,
        Token::Eql => OperatorEngine::equal,
        Token::Neq => OperatorEngine::not_equal,
        _ => return None,
    };
    Some(f)
}

/// The operator a compound assignment applies: `x += y` is `x = x + y`.
/// `None` for tokens that are not compound assignments.
pub fn base_operator_for(op: Token) -> Option<Token> {
    let base = match op {
        Token::AddAssign => Token::Add,
        Token::SubAssign => Token::Sub,
        Token::MulAssign => Token::Mul,
        Token::QuoAssign => Token::Quo,
        Token::RemAssign => Token::Rem,
        Token::AndAssign => Token::And,
        Token::OrAssign => Token::Or,
        Token::XorAssign => Token::Xor,
        Token::AndNotAssign => Token::AndNot,
        Token::ShlAssign => Token::Shl,
        Token::ShrAssign => Token::Shr,
        _ => return None,
    };
    Some(base)
}

impl<'t> OperatorEngine<'t> {
    /// Evaluate an arithmetic, bitwise or shift operator.
    pub fn evaluate_binary(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        op: Token,
    ) -> Result<Object<'t>, EvalError> {
        trace!(op = %op, left = %left.ty, right = %right.ty, "Evaluating binary operator");

        let result = match binary_operator(op) {
            Some(f) => f(self, left, right),
            None => Err(InternalError::UnsupportedOperator {
                op,
                class: OperatorClass::Binary,
            }
            .into()),
        };
        report(op, result)
    }

    /// Evaluate a comparison. The result has type `result_ty`, the static
    /// type of the comparison expression.
    pub fn evaluate_comparison(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        op: Token,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        trace!(
            op = %op,
            left = %left.ty,
            right = %right.ty,
            result = %result_ty,
            "Evaluating comparison"
        );

        let result = match comparison_operator(op) {
            Some(f) => f(self, left, right, result_ty),
            None => Err(InternalError::UnsupportedOperator {
                op,
                class: OperatorClass::Comparison,
            }
            .into()),
        };
        report(op, result)
    }
}

fn report<'t>(op: Token, result: Result<Object<'t>, EvalError>) -> Result<Object<'t>, EvalError> {
    match &result {
        Err(EvalError::Internal(err)) => error!(op = %op, error = %err, "Internal operator fault"),
        Err(EvalError::Runtime(err)) => debug!(op = %op, error = %err, "Runtime error"),
        Ok(_) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compound_assignment_table() {
        let pairs = [
            (Token::AddAssign, Token::Add),
            (Token::SubAssign, Token::Sub),
            (Token::MulAssign, Token::Mul),
            (Token::QuoAssign, Token::Quo),
            (Token::RemAssign, Token::Rem),
            (Token::AndAssign, Token::And),
            (Token::OrAssign, Token::Or),
            (Token::XorAssign, Token::Xor),
            (Token::AndNotAssign, Token::AndNot),
            (Token::ShlAssign, Token::Shl),
            (Token::ShrAssign, Token::Shr),
        ];
        for (compound, base) in pairs {
            assert_eq!(base_operator_for(compound), Some(base));
        }
        let compound = Token::ALL.iter().filter(|t| base_operator_for(**t).is_some());
        assert_eq!(compound.count(), pairs.len());
    }

    #[test]
    fn test_non_compound_tokens() {
        assert_eq!(base_operator_for(Token::Assign), None);
        assert_eq!(base_operator_for(Token::Define), None);
        assert_eq!(base_operator_for(Token::Add), None);
        assert_eq!(base_operator_for(Token::Eql), None);
    }

    #[test]
    fn test_tables_are_disjoint() {
        for token in Token::ALL {
            let binary = binary_operator(token).is_some();
            let comparison = comparison_operator(token).is_some();
            assert!(!(binary && comparison), "{token} is in both tables");
            assert_eq!(comparison, token.is_comparison(), "{token}");
        }
    }
}
