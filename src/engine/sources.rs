/// Why an expression could not be reduced to a literal string.
///
/// Only used for trace logging and assertions; never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedSource {
    IdentifierNotFound,
    UnsupportedExpression,
    UnsupportedCall,
    MissingArgument,
    DepthExceeded,
}

impl UnresolvedSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdentifierNotFound => "identifier_not_found",
            Self::UnsupportedExpression => "unsupported_expression",
            Self::UnsupportedCall => "unsupported_call",
            Self::MissingArgument => "missing_argument",
            Self::DepthExceeded => "depth_exceeded",
        }
    }
}

impl std::fmt::Display for UnresolvedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
