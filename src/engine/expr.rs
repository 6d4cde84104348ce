//! The closed set of expression shapes the resolver understands.
//!
//! Syntax trees are lowered into [`Expr`] by the scanner before any
//! resolution happens, so the engine never touches tree-sitter nodes.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Raw literal text between the quotes, escape sequences untouched.
    StringLiteral(String),

    /// A bare identifier referring to a previously declared variable.
    Name(String),

    /// Left-associative `+` concatenation.
    Concat(Box<Expr>, Box<Expr>),

    /// A method invocation, optionally qualified by a receiver expression.
    Call {
        receiver: Option<String>,
        method: String,
        arguments: Vec<Expr>,
    },

    /// Any shape outside the grammar above. `kind` is the syntax node kind.
    Other { kind: String },
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn concat(left: Expr, right: Expr) -> Self {
        Self::Concat(Box::new(left), Box::new(right))
    }

    pub fn call(receiver: Option<&str>, method: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Self::Call {
            receiver: receiver.map(str::to_string),
            method: method.into(),
            arguments,
        }
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::StringLiteral(_) => "string_literal",
            Self::Name(_) => "name",
            Self::Concat(..) => "concat",
            Self::Call { .. } => "call",
            Self::Other { kind } => kind,
        }
    }
}
