// Python docstring extraction using tree-sitter

use crate::error::{Error, Result};
use crate::model::DocumentationMap;
use crate::parser::docstring::{clean_docstring, literal_value};
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Label used in syntax errors for text that did not come from a file
const INLINE_SOURCE: &str = "<source>";

/// Extracts top-level function and class docstrings from Python source
pub struct DocParser {
    parser: Parser,
}

impl DocParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_python::language();
        parser
            .set_language(&language)
            .map_err(|e| Error::parser(format!("Failed to set Python language: {}", e)))?;
        Ok(Self { parser })
    }

    /// Read a file as UTF-8 and extract its docstrings
    pub fn extract_file(&mut self, path: &Path) -> Result<DocumentationMap> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        })?;

        self.extract_from(&normalize_newlines(&source), path)
    }

    /// Extract docstrings from Python source text
    pub fn extract(&mut self, source: &str) -> Result<DocumentationMap> {
        self.extract_from(source, Path::new(INLINE_SOURCE))
    }

    fn extract_from(&mut self, source: &str, origin: &Path) -> Result<DocumentationMap> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parser("Failed to parse source"))?;

        let root = tree.root_node();
        if let Some((bad, message)) = first_invalid(root) {
            let position = bad.start_position();
            return Err(Error::syntax(
                origin,
                position.row + 1,
                position.column + 1,
                message,
            ));
        }

        let bytes = source.as_bytes();
        let mut docs = DocumentationMap::new();

        // Only the module's direct children; nested scopes are never visited
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let Some(definition) = unwrap_definition(child) else {
                continue;
            };
            let Some(name) = definition
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(bytes).ok())
            else {
                continue;
            };
            if let Some(doc) = definition
                .child_by_field_name("body")
                .and_then(|body| body_docstring(body, bytes))
            {
                docs.insert(name, doc);
            }
        }

        Ok(docs)
    }
}

/// Python reads source in universal-newline mode
fn normalize_newlines(source: &str) -> String {
    if source.contains('\r') {
        source.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        source.to_string()
    }
}

/// Function or class definition behind a top-level statement, decorators peeled off.
///
/// Coroutines (`async def`) are not plain function definitions and are skipped.
fn unwrap_definition(node: Node) -> Option<Node> {
    let definition = match node.kind() {
        "decorated_definition" => node.child_by_field_name("definition")?,
        _ => node,
    };

    match definition.kind() {
        "function_definition" if !has_async_keyword(definition) => Some(definition),
        "class_definition" => Some(definition),
        _ => None,
    }
}

/// Check if a function_definition node has an async keyword
fn has_async_keyword(node: Node) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == "async");
    found
}

/// Docstring of a definition body: a first statement that is only a string literal
fn body_docstring(body: Node, source: &[u8]) -> Option<String> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment")?;

    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }

    let expr = first.named_child(0)?;
    let raw = match expr.kind() {
        "string" => literal_value(expr.utf8_text(source).ok()?)?,
        "concatenated_string" => {
            let mut parts = String::new();
            let mut inner = expr.walk();
            for part in expr.named_children(&mut inner) {
                if part.kind() == "string" {
                    parts.push_str(&literal_value(part.utf8_text(source).ok()?)?);
                }
            }
            parts
        }
        _ => return None,
    };

    let doc = clean_docstring(&raw);
    if doc.is_empty() {
        None
    } else {
        Some(doc)
    }
}

/// First node Python 3 would reject, in document order, with the reason.
///
/// tree-sitter recovers from more than ERROR and MISSING nodes: it also
/// accepts Python 2 statements, empty definition bodies and comprehensions
/// over a bare tuple.
fn first_invalid(node: Node) -> Option<(Node, String)> {
    if let Some(message) = rejection(node) {
        return Some((node, message));
    }

    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_invalid);
    found
}

fn rejection(node: Node) -> Option<String> {
    if node.is_missing() {
        return Some(format!("expected `{}`", node.kind()));
    }
    if node.is_error() {
        return Some("invalid syntax".to_string());
    }

    match node.kind() {
        "print_statement" | "exec_statement" => Some(format!(
            "Python 2 `{}` statement",
            node.kind().trim_end_matches("_statement")
        )),
        "function_definition" | "class_definition" => {
            let has_statements = node
                .child_by_field_name("body")
                .is_some_and(|body| {
                    let mut cursor = body.walk();
                    let found = body
                        .named_children(&mut cursor)
                        .any(|n| n.kind() != "comment");
                    found
                });
            (!has_statements).then(|| "expected an indented block".to_string())
        }
        // `x for x in a, b` needs parentheses around the iterable
        "for_in_clause" => {
            let mut cursor = node.walk();
            let iterables = node.children_by_field_name("right", &mut cursor).count();
            (iterables > 1).then(|| "invalid syntax".to_string())
        }
        // generator expressions are always bracketed in valid source
        "generator_expression" => node
            .child(0)
            .is_some_and(|open| open.kind() != "(")
            .then(|| "Generator expression must be parenthesized".to_string()),
        _ => None,
    }
}
