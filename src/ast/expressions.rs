use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Binary operators, including assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Operator of the additive tier for a token, if any.
    pub fn additive(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            _ => None,
        }
    }

    /// Operator of the multiplicative tier for a token, if any.
    pub fn multiplicative(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Assign => 0,
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: i32,
}

/// Variable Expression
/// Represents a reference to a parameter or local variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
}

// COMPLEX

/// Binary Expression
/// Arithmetic or assignment. For assignment the left side is always a
/// `Variable`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Call(CallExpr),
    Variable(VariableExpr),
    Number(NumberExpr),
    /// A bare `;`.
    Empty,
}

impl Expr {
    pub fn number(value: i32) -> Self {
        Expr::Number(NumberExpr { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(VariableExpr { name: name.into() })
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: callee.into(),
            arguments,
        })
    }
}

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Binary(binary) => binary.operator.precedence(),
            _ => u8::MAX,
        }
    }
}

fn write_operand(f: &mut std::fmt::Formatter<'_>, operand: &Expr, parenthesize: bool) -> std::fmt::Result {
    if parenthesize {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(BinaryExpr { operator, left, right }) => {
                // Both tiers are left-associative, so only a right operand of
                // equal strength needs parentheses.
                write_operand(f, left, operator.precedence() > left.precedence())?;
                write!(f, " {} ", operator)?;
                write_operand(f, right, operator.precedence() >= right.precedence())
            }
            Expr::Call(CallExpr { callee, arguments }) => {
                write!(f, "{}(", callee)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
            Expr::Variable(VariableExpr { name }) => write!(f, "{}", name),
            Expr::Number(NumberExpr { value }) => write!(f, "{}", value),
            Expr::Empty => Ok(()),
        }
    }
}
