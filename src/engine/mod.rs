pub mod classifier;
pub mod context;
pub mod expr;
pub mod normalize;
pub mod sources;
pub mod value;

pub use classifier::{Classification, Classifier, CompileCall, Declaration};
pub use context::{ConstantTable, ExtractionContext, PatternTable};
pub use expr::Expr;
pub use normalize::normalize_pattern;
pub use sources::UnresolvedSource;
pub use value::Value;

pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Folds an [`Expr`] down to a literal string using only the constants
/// recorded so far.
///
/// Resolution is pure: it reads the constant table snapshot and never
/// looks ahead for declarations that have not been processed yet.
#[derive(Debug, Clone)]
pub struct Resolver {
    max_depth: usize,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn resolve(&self, expr: &Expr, constants: &ConstantTable) -> Value {
        self.resolve_with_depth(expr, constants, 0)
    }

    fn resolve_with_depth(&self, expr: &Expr, constants: &ConstantTable, depth: usize) -> Value {
        if depth >= self.max_depth {
            return Value::unresolved(UnresolvedSource::DepthExceeded);
        }

        match expr {
            Expr::StringLiteral(value) => Value::resolved(value.clone()),
            Expr::Name(name) => match constants.get(name) {
                Some(value) => Value::resolved(value.clone()),
                None => Value::unresolved(UnresolvedSource::IdentifierNotFound),
            },
            Expr::Concat(left, right) => {
                let left = match self.resolve_with_depth(left, constants, depth + 1) {
                    Value::Resolved(s) => s,
                    unresolved => return unresolved,
                };
                let right = match self.resolve_with_depth(right, constants, depth + 1) {
                    Value::Resolved(s) => s,
                    unresolved => return unresolved,
                };
                Value::Resolved(left + &right)
            }
            Expr::Call { .. } => Value::unresolved(UnresolvedSource::UnsupportedCall),
            Expr::Other { .. } => Value::unresolved(UnresolvedSource::UnsupportedExpression),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ResolverBuilder {
    max_depth: usize,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            max_depth: self.max_depth,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants(pairs: &[(&str, &str)]) -> ConstantTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolver_default_depth() {
        assert_eq!(Resolver::new().max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(Resolver::builder().build().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_resolver_builder_custom_depth() {
        let resolver = Resolver::builder().with_max_depth(10).build();
        assert_eq!(resolver.max_depth(), 10);
    }

    #[test]
    fn test_resolves_string_literal() {
        let value = Resolver::new().resolve(&Expr::string("\\\\w+"), &ConstantTable::new());
        assert_eq!(value, Value::resolved("\\\\w+"));
    }

    #[test]
    fn test_resolves_known_name() {
        let table = constants(&[("DIGITS", "[0-9]")]);
        let value = Resolver::new().resolve(&Expr::name("DIGITS"), &table);
        assert_eq!(value.as_str(), Some("[0-9]"));
    }

    #[test]
    fn test_unknown_name_is_unresolved() {
        let value = Resolver::new().resolve(&Expr::name("MISSING"), &ConstantTable::new());
        assert_eq!(value, Value::unresolved(UnresolvedSource::IdentifierNotFound));
    }

    #[test]
    fn test_concat_left_then_right() {
        let table = constants(&[("MID", "-")]);
        let expr = Expr::concat(
            Expr::concat(Expr::string("a"), Expr::name("MID")),
            Expr::string("b"),
        );
        assert_eq!(Resolver::new().resolve(&expr, &table).as_str(), Some("a-b"));
    }

    #[test]
    fn test_concat_fails_if_either_side_fails() {
        let table = ConstantTable::new();
        let resolver = Resolver::new();

        let left_bad = Expr::concat(Expr::name("NOPE"), Expr::string("b"));
        let right_bad = Expr::concat(Expr::string("a"), Expr::other("field_access"));

        assert!(!resolver.resolve(&left_bad, &table).is_resolved());
        assert_eq!(
            resolver.resolve(&right_bad, &table),
            Value::unresolved(UnresolvedSource::UnsupportedExpression)
        );
    }

    #[test]
    fn test_calls_and_other_shapes_are_unresolved() {
        let table = ConstantTable::new();
        let resolver = Resolver::new();
        assert_eq!(
            resolver.resolve(&Expr::call(None, "build", vec![]), &table),
            Value::unresolved(UnresolvedSource::UnsupportedCall)
        );
        assert_eq!(
            resolver.resolve(&Expr::other("ternary_expression"), &table),
            Value::unresolved(UnresolvedSource::UnsupportedExpression)
        );
    }

    #[test]
    fn test_depth_limit() {
        let resolver = Resolver::builder().with_max_depth(0).build();
        let value = resolver.resolve(&Expr::string("a"), &ConstantTable::new());
        assert_eq!(value, Value::unresolved(UnresolvedSource::DepthExceeded));
    }

    #[test]
    fn test_long_concat_chain_within_depth() {
        let expr = (0..600).fold(Expr::string(""), |acc, i| {
            Expr::concat(acc, Expr::string(i.to_string()))
        });
        let value = Resolver::new().resolve(&expr, &ConstantTable::new());
        assert!(value.is_resolved());
        assert!(value.as_str().unwrap_or_default().ends_with("598599"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let table = constants(&[("A", "x"), ("B", "y")]);
        let expr = Expr::concat(Expr::name("A"), Expr::name("B"));
        let resolver = Resolver::new();
        assert_eq!(resolver.resolve(&expr, &table), resolver.resolve(&expr, &table));
    }
}
