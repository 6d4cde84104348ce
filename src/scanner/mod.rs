mod lowering;

use std::path::Path;
use tracing::{debug, trace};
use tree_sitter::{Node, Parser, Tree};

use crate::engine::{Declaration, DEFAULT_MAX_DEPTH};
use crate::error::ParserError;
pub use lowering::lower_expression;
use lowering::node_text;

/// Declarator node kinds that bind a name to an initializer.
const DECLARATOR_KINDS: &[&str] = &["variable_declarator", "resource"];

/// Parses Java source and collects the declarations with initializers.
pub struct JavaScanner {
    parser: Parser,
    max_depth: usize,
}

impl JavaScanner {
    pub fn new() -> Result<Self, ParserError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|_| ParserError::language_setup_failed("java"))?;
        Ok(Self {
            parser,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse `source`, rejecting trees that contain syntax errors.
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<Tree, ParserError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParserError::parse_failed(path))?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column, message) = match first_error_node(root) {
                Some(node) => {
                    let position = node.start_position();
                    let message = if node.is_missing() {
                        format!("missing {}", node.kind())
                    } else {
                        "unexpected input".to_string()
                    };
                    (position.row + 1, position.column + 1, message)
                }
                None => (0, 0, "invalid syntax".to_string()),
            };
            return Err(ParserError::syntax_error(path, line, column, message));
        }

        Ok(tree)
    }

    pub fn scan_source(
        &mut self,
        source: &str,
        path: &Path,
    ) -> Result<Vec<Declaration>, ParserError> {
        trace!(path = %path.display(), "scanning source");
        let tree = self.parse(source, path)?;
        let declarations = collect_declarations(&tree, source.as_bytes(), self.max_depth);
        debug!(
            path = %path.display(),
            declarations = declarations.len(),
            "scan complete"
        );
        Ok(declarations)
    }
}

/// Every declarator with an initializer, in pre-order document order.
pub fn collect_declarations(tree: &Tree, source: &[u8], max_depth: usize) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    let mut cursor = tree.walk();

    loop {
        let node = cursor.node();
        if DECLARATOR_KINDS.contains(&node.kind()) {
            if let Some(declaration) = declaration_from_node(&node, source, max_depth) {
                declarations.push(declaration);
            }
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return declarations;
            }
        }
    }
}

fn declaration_from_node(node: &Node, source: &[u8], max_depth: usize) -> Option<Declaration> {
    let name = node.child_by_field_name("name")?;
    let value = node.child_by_field_name("value")?;
    let initializer = lower_expression(&value, source, max_depth);
    Some(
        Declaration::new(node_text(&name, source), initializer)
            .at_line(node.start_position().row + 1),
    )
}

fn first_error_node<'a>(node: Node<'a>) -> Option<Node<'a>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(found) = first_error_node(child) {
                return Some(found);
            }
        }
    }
    None
}
