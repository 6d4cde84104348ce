use tree_sitter::Node;

use crate::engine::Expr;
use crate::utils::java_string_contents;

pub(crate) fn node_text(node: &Node, source: &[u8]) -> String {
    String::from_utf8_lossy(&source[node.start_byte()..node.end_byte()]).to_string()
}

/// Lower a Java expression node into an [`Expr`].
///
/// Anything outside literal / identifier / `+` / method call becomes
/// [`Expr::Other`], as does anything nested deeper than `max_depth`.
pub fn lower_expression(node: &Node, source: &[u8], max_depth: usize) -> Expr {
    lower(node, source, 0, max_depth)
}

fn lower(node: &Node, source: &[u8], depth: usize, max_depth: usize) -> Expr {
    if depth >= max_depth {
        return Expr::other(node.kind());
    }

    match node.kind() {
        "string_literal" => {
            let text = node_text(node, source);
            match java_string_contents(&text) {
                Some(raw) => Expr::string(raw),
                None => Expr::other("text_block"),
            }
        }
        "identifier" => Expr::name(node_text(node, source)),
        "binary_expression" => lower_binary(node, source, depth, max_depth),
        "method_invocation" => lower_call(node, source, depth, max_depth),
        kind => Expr::other(kind),
    }
}

fn lower_binary(node: &Node, source: &[u8], depth: usize, max_depth: usize) -> Expr {
    let operator = node
        .child_by_field_name("operator")
        .map(|op| node_text(&op, source));
    let left = node.child_by_field_name("left");
    let right = node.child_by_field_name("right");

    match (operator.as_deref(), left, right) {
        (Some("+"), Some(left), Some(right)) => Expr::concat(
            lower(&left, source, depth + 1, max_depth),
            lower(&right, source, depth + 1, max_depth),
        ),
        _ => Expr::other(node.kind()),
    }
}

fn lower_call(node: &Node, source: &[u8], depth: usize, max_depth: usize) -> Expr {
    let Some(name) = node.child_by_field_name("name") else {
        return Expr::other(node.kind());
    };

    let receiver = node
        .child_by_field_name("object")
        .map(|object| node_text(&object, source).trim().to_string());

    let arguments = match node.child_by_field_name("arguments") {
        Some(args) => lower_arguments(&args, source, depth + 1, max_depth),
        None => Vec::new(),
    };

    Expr::Call {
        receiver,
        method: node_text(&name, source),
        arguments,
    }
}

fn lower_arguments(args: &Node, source: &[u8], depth: usize, max_depth: usize) -> Vec<Expr> {
    let mut lowered = Vec::new();
    let mut cursor = args.walk();
    for arg in args.named_children(&mut cursor) {
        // comments are extras and show up as named children
        if !arg.is_extra() {
            lowered.push(lower(&arg, source, depth, max_depth));
        }
    }
    lowered
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Tree;

    fn parse_java(source: &str) -> Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    /// Lower the initializer of the first declarator in `class T { ... }`.
    fn lower_initializer(body: &str) -> Expr {
        let source = format!("class T {{ {body} }}");
        let tree = parse_java(&source);
        let declarator = find_first_node_of_kind(tree.root_node(), "variable_declarator")
            .expect("should find a declarator");
        let value = declarator.child_by_field_name("value").unwrap();
        lower_expression(&value, source.as_bytes(), 64)
    }

    fn find_first_node_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = find_first_node_of_kind(child, kind) {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn test_string_literal_keeps_escapes() {
        assert_eq!(
            lower_initializer(r#"String s = "\\d+";"#),
            Expr::string(r"\\d+")
        );
    }

    #[test]
    fn test_identifier() {
        assert_eq!(lower_initializer("String s = OTHER;"), Expr::name("OTHER"));
    }

    #[test]
    fn test_concat_is_left_associative() {
        assert_eq!(
            lower_initializer(r#"String s = "a" + B + "c";"#),
            Expr::concat(
                Expr::concat(Expr::string("a"), Expr::name("B")),
                Expr::string("c")
            )
        );
    }

    #[test]
    fn test_non_plus_operator_is_other() {
        assert_eq!(
            lower_initializer("int n = 3 * 4;"),
            Expr::other("binary_expression")
        );
    }

    #[test]
    fn test_pattern_compile_call() {
        assert_eq!(
            lower_initializer(r#"Pattern p = Pattern.compile("x" + Y, Pattern.CASE_INSENSITIVE);"#),
            Expr::call(
                Some("Pattern"),
                "compile",
                vec![
                    Expr::concat(Expr::string("x"), Expr::name("Y")),
                    Expr::other("field_access"),
                ]
            )
        );
    }

    #[test]
    fn test_qualified_receiver_text() {
        match lower_initializer(r#"Object p = java.util.regex.Pattern.compile("a");"#) {
            Expr::Call {
                receiver, method, ..
            } => {
                assert_eq!(receiver.as_deref(), Some("java.util.regex.Pattern"));
                assert_eq!(method, "compile");
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn test_unqualified_call_has_no_receiver() {
        assert_eq!(
            lower_initializer("String s = build();"),
            Expr::call(None, "build", vec![])
        );
    }

    #[test]
    fn test_comments_in_arguments_are_skipped() {
        assert_eq!(
            lower_initializer(r#"Pattern p = Pattern.compile(/* digits */ "[0-9]");"#),
            Expr::call(Some("Pattern"), "compile", vec![Expr::string("[0-9]")])
        );
    }

    #[test]
    fn test_parenthesized_is_other() {
        assert_eq!(
            lower_initializer(r#"String s = ("a");"#),
            Expr::other("parenthesized_expression")
        );
    }

    #[test]
    fn test_other_shapes() {
        assert_eq!(
            lower_initializer("Object o = new Object();"),
            Expr::other("object_creation_expression")
        );
        assert_eq!(
            lower_initializer("char c = 'a';"),
            Expr::other("character_literal")
        );
    }

    #[test]
    fn test_depth_cap_lowers_to_other() {
        let source = r#"class T { String s = "a" + "b"; }"#;
        let tree = parse_java(source);
        let value = find_first_node_of_kind(tree.root_node(), "binary_expression").unwrap();
        assert_eq!(
            lower_expression(&value, source.as_bytes(), 0),
            Expr::other("binary_expression")
        );
    }
}
