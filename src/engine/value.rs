//! Result of resolving an expression.

use super::UnresolvedSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Resolved(String),
    Unresolved(UnresolvedSource),
}

impl Value {
    pub fn resolved(value: impl Into<String>) -> Self {
        Self::Resolved(value.into())
    }

    pub fn unresolved(source: UnresolvedSource) -> Self {
        Self::Unresolved(source)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Resolved(s) => Some(s),
            Self::Unresolved(_) => None,
        }
    }
}
