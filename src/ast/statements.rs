use std::fmt::Display;

use super::expressions::Expr;

/// Return Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression followed by `;`, including the bare `;`.
    Expression(Expr),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn is_return(&self) -> bool {
        matches!(self, Stmt::Return(_))
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(expression) => write!(f, "{};", expression),
            Stmt::Return(ReturnStmt { value }) => write!(f, "return {};", value),
        }
    }
}
