//! Operator tokens handed to the engine by the evaluator.
//!
//! Spellings follow the source language (`&^` is "and not", `&^=` its
//! compound-assignment form).

use core::fmt;
use core::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    // Arithmetic.
    Add,
    Sub,
    Mul,
    Quo,
    Rem,

    // Bitwise.
    And,
    Or,
    Xor,
    AndNot,
    Shl,
    Shr,

    // Comparison.
    Lss,
    Gtr,
    Leq,
    Geq,
    Eql,
    Neq,

    // Logical. Short-circuiting is the evaluator's job, never the engine's.
    LAnd,
    LOr,

    // Compound assignment.
    AddAssign,
    SubAssign,
    MulAssign,
    QuoAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    AndNotAssign,
    ShlAssign,
    ShrAssign,

    // Plain assignment and short variable declaration.
    Assign,
    Define,
}

impl Token {
    pub const ALL: [Token; 32] = [
        Token::Add,
        Token::Sub,
        Token::Mul,
        Token::Quo,
        Token::Rem,
        Token::And,
        Token::Or,
        Token::Xor,
        Token::AndNot,
        Token::Shl,
        Token::Shr,
        Token::Lss,
        Token::Gtr,
        Token::Leq,
        Token::Geq,
        Token::Eql,
        Token::Neq,
        Token::LAnd,
        Token::LOr,
        Token::AddAssign,
        Token::SubAssign,
        Token::MulAssign,
        Token::QuoAssign,
        Token::RemAssign,
        Token::AndAssign,
        Token::OrAssign,
        Token::XorAssign,
        Token::AndNotAssign,
        Token::ShlAssign,
        Token::ShrAssign,
        Token::Assign,
        Token::Define,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Quo => "/",
            Token::Rem => "%",
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::AndNot => "&^",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::Lss => "<",
            Token::Gtr => ">",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::Eql => "==",
            Token::Neq => "!=",
            Token::LAnd => "&&",
            Token::LOr => "||",
            Token::AddAssign => "+=",
            Token::SubAssign => "-=",
            Token::MulAssign => "*=",
            Token::QuoAssign => "/=",
            Token::RemAssign => "%=",
            Token::AndAssign => "&=",
            Token::OrAssign => "|=",
            Token::XorAssign => "^=",
            Token::AndNotAssign => "&^=",
            Token::ShlAssign => "<<=",
            Token::ShrAssign => ">>=",
            Token::Assign => "=",
            Token::Define => ":=",
        }
    }

    /// Returns true for the tokens of ordered and equality comparisons.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Token::Lss | Token::Gtr | Token::Leq | Token::Geq | Token::Eql | Token::Neq
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not the spelling of any operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator `{0}`")]
pub struct UnknownToken(pub String);

impl FromStr for Token {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .iter()
            .copied()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}
