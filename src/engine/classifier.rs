use tracing::trace;

use crate::engine::{Expr, ExtractionContext, Resolver, UnresolvedSource, Value};

/// A named variable binding with an initializer, as found in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub initializer: Expr,
    /// 1-based line of the declarator, for diagnostics only.
    pub line: usize,
}

impl Declaration {
    pub fn new(name: impl Into<String>, initializer: Expr) -> Self {
        Self {
            name: name.into(),
            initializer,
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// The receiver and method names that identify a "compile a pattern" call.
///
/// Matching is purely textual and case-sensitive: `java.util.regex.Pattern`
/// or a static import of `compile` do not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCall {
    pub receiver: String,
    pub method: String,
}

impl CompileCall {
    pub fn new(receiver: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            method: method.into(),
        }
    }

    pub fn matches(&self, receiver: Option<&str>, method: &str) -> bool {
        method == self.method && receiver == Some(self.receiver.as_str())
    }
}

impl Default for CompileCall {
    fn default() -> Self {
        Self::new("Pattern", "compile")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Constant,
    Pattern,
    Unresolved(UnresolvedSource),
}

pub struct Classifier {
    resolver: Resolver,
    compile_call: CompileCall,
}

impl Classifier {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            compile_call: CompileCall::default(),
        }
    }

    pub fn with_compile_call(mut self, compile_call: CompileCall) -> Self {
        self.compile_call = compile_call;
        self
    }

    /// Route one declaration into exactly one of the context's tables.
    pub fn classify(&self, decl: &Declaration, ctx: &mut ExtractionContext) -> Classification {
        let classification = match &decl.initializer {
            Expr::StringLiteral(value) => {
                ctx.record_constant(&decl.name, value.clone());
                Classification::Constant
            }
            Expr::Call {
                receiver,
                method,
                arguments,
            } if self.compile_call.matches(receiver.as_deref(), method) => {
                match arguments.first() {
                    Some(pattern_arg) => {
                        match self.resolver.resolve(pattern_arg, ctx.constants()) {
                            Value::Resolved(pattern) => {
                                ctx.record_pattern(&decl.name, pattern);
                                Classification::Pattern
                            }
                            Value::Unresolved(source) => {
                                ctx.record_unresolved(&decl.name);
                                Classification::Unresolved(source)
                            }
                        }
                    }
                    None => {
                        ctx.record_unresolved(&decl.name);
                        Classification::Unresolved(UnresolvedSource::MissingArgument)
                    }
                }
            }
            Expr::Call { .. } => {
                ctx.record_unresolved(&decl.name);
                Classification::Unresolved(UnresolvedSource::UnsupportedCall)
            }
            Expr::Name(_) | Expr::Concat(..) | Expr::Other { .. } => {
                ctx.record_unresolved(&decl.name);
                Classification::Unresolved(UnresolvedSource::UnsupportedExpression)
            }
        };

        trace!(
            name = %decl.name,
            line = decl.line,
            initializer = decl.initializer.kind(),
            ?classification,
            "classified declaration"
        );
        classification
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Resolver::new())
    }
}
