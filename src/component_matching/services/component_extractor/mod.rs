//! Component extraction from React source files
//!
//! Source is parsed with the tree-sitter TSX grammar, which accepts plain
//! JavaScript, JSX and TypeScript alike. The syntax tree is walked once in
//! pre-order; every function declaration, function-valued variable and
//! class that qualifies as a component becomes one `ComponentRecord`, in
//! the order the walk reaches it.

mod complexity;
mod jsx_structure;
mod props;


use crate::component_matching::domain::{
    ComponentKind, ComponentProp, ComponentRecord, SourceSpan, StructureNode,
};
use tree_sitter::{Language, Node, Parser};

/// Base classes a class component may extend, optionally qualified
/// (`React.Component`)
const BASE_COMPONENT_TYPES: [&str; 2] = ["Component", "PureComponent"];

/// Recoverable conditions met while extracting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The file is not valid JS/TS/JSX; nothing was extracted
    UnparsableSource,
    /// A component's rendered structure could not be resolved statically
    UnresolvedStructure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionDiagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub component: Option<String>,
    /// 1-based line the condition was detected at, when known
    pub line: Option<usize>,
}

/// Outcome of extracting one file
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub components: Vec<ComponentRecord>,
    pub diagnostics: Vec<ExtractionDiagnostic>,
}

impl Extraction {
    fn unparsable(message: String, line: Option<usize>) -> Self {
        Self {
            components: Vec::new(),
            diagnostics: vec![ExtractionDiagnostic {
                kind: DiagnosticKind::UnparsableSource,
                message,
                component: None,
                line,
            }],
        }
    }

    pub fn is_unparsable(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnparsableSource)
    }
}

/// Extracts component records from source text
///
/// Pure: the extractor never touches the file system, the path is only
/// recorded in each record's span.
pub struct ComponentExtractor {
    language: Language,
}

impl ComponentExtractor {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::language_tsx(),
        }
    }

    /// Extracts every component defined in `source`
    ///
    /// Never fails: a file with syntax errors yields no components and a
    /// single `UnparsableSource` diagnostic.
    pub fn extract(&self, source: &str, file_path: &str) -> Extraction {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&self.language) {
            return Extraction::unparsable(format!("TSX grammar could not be loaded: {}", e), None);
        }

        let Some(tree) = parser.parse(source, None) else {
            return Extraction::unparsable("parser produced no syntax tree".to_string(), None);
        };

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error_line(root);
            let message = match line {
                Some(line) => format!("syntax error near line {}", line),
                None => "syntax error".to_string(),
            };
            return Extraction::unparsable(message, line);
        }

        let mut walker = ComponentWalker {
            source,
            file_path,
            extraction: Extraction::default(),
        };
        walker.walk(root);
        walker.extraction
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the component records of one file, discarding diagnostics
///
/// # Arguments
/// * `source` - Full source text of the file
/// * `file_path` - Path recorded in each record's span
///
/// # Returns
/// Records in order of first appearance; empty for unparsable input
pub fn extract_components(source: &str, file_path: &str) -> Vec<ComponentRecord> {
    ComponentExtractor::new()
        .extract(source, file_path)
        .components
}

struct ComponentWalker<'s> {
    source: &'s str,
    file_path: &'s str,
    extraction: Extraction,
}

impl<'s> ComponentWalker<'s> {
    fn walk(&mut self, root: Node) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            self.visit(node);

            let mut cursor = node.walk();
            let children: Vec<Node> = node.named_children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }

    fn visit(&mut self, node: Node) {
        match node.kind() {
            "function_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.try_function_component(name, node, node);
                }
            }
            "variable_declarator" => {
                let name = node
                    .child_by_field_name("name")
                    .filter(|n| n.kind() == "identifier");
                let value = node
                    .child_by_field_name("value")
                    .filter(|v| is_function_expression(v.kind()));
                if let (Some(name), Some(value)) = (name, value) {
                    self.try_function_component(name, value, node);
                }
            }
            "class_declaration" => self.try_class_component(node),
            _ => {}
        }
    }

    fn try_function_component(&mut self, name: Node, function: Node, span_node: Node) {
        let body = function.child_by_field_name("body").unwrap_or(function);
        if !jsx_structure::contains_element(body) {
            return;
        }

        let name = text(name, self.source).to_string();
        let props = props::extract_props(function, self.source);
        let structure = jsx_structure::resolve_function_structure(function, self.source);
        let complexity = complexity::cyclomatic_complexity(function);
        self.push_record(
            name,
            ComponentKind::FunctionComponent,
            props,
            structure,
            complexity,
            span_node,
        );
    }

    fn try_class_component(&mut self, class: Node) {
        let Some(name) = class.child_by_field_name("name") else {
            return;
        };
        if !extends_base_component(class, self.source) {
            return;
        }

        let name = text(name, self.source).to_string();
        let structure = jsx_structure::resolve_class_structure(class, self.source);
        let complexity = complexity::cyclomatic_complexity(class);
        self.push_record(
            name,
            ComponentKind::ClassComponent,
            Vec::new(),
            structure,
            complexity,
            class,
        );
    }

    fn push_record(
        &mut self,
        name: String,
        kind: ComponentKind,
        props: Vec<ComponentProp>,
        structure: Option<StructureNode>,
        complexity: u32,
        span_node: Node,
    ) {
        let span = self.span_of(span_node);
        if structure.is_none() {
            self.extraction.diagnostics.push(ExtractionDiagnostic {
                kind: DiagnosticKind::UnresolvedStructure,
                message: format!(
                    "{} does not return a JSX element literal; its structure is unknown",
                    name
                ),
                component: Some(name.clone()),
                line: Some(span.start_line),
            });
        }

        let source_text = text(span_node, self.source).to_string();
        self.extraction.components.push(ComponentRecord::new(
            name,
            kind,
            props,
            structure,
            complexity,
            span,
            source_text,
        ));
    }

    fn span_of(&self, node: Node) -> SourceSpan {
        let start = node.start_position();
        let end = node.end_position();
        SourceSpan {
            file: self.file_path.to_string(),
            start_line: start.row + 1,
            end_line: end.row + 1,
            start_column: start.column,
            end_column: end.column,
        }
    }
}

fn is_function_expression(kind: &str) -> bool {
    matches!(kind, "arrow_function" | "function_expression" | "function")
}

/// True when the class has an `extends` clause naming a base component
fn extends_base_component(class: Node, source: &str) -> bool {
    let mut cursor = class.walk();
    let heritage = class
        .named_children(&mut cursor)
        .find(|c| c.kind() == "class_heritage");
    let Some(heritage) = heritage else {
        return false;
    };

    let mut cursor = heritage.walk();
    let extends = heritage
        .named_children(&mut cursor)
        .find(|c| c.kind() == "extends_clause");
    let Some(extends) = extends else {
        return false;
    };

    let superclass = extends
        .child_by_field_name("value")
        .or_else(|| extends.named_child(0));
    let Some(superclass) = superclass else {
        return false;
    };

    let name = text(superclass, source);
    let last_segment = name.rsplit('.').next().unwrap_or(name).trim();
    BASE_COMPONENT_TYPES.contains(&last_segment)
}

fn first_error_line(root: Node) -> Option<usize> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node.start_position().row + 1);
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

pub(crate) fn text<'s>(node: Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Removes the surrounding quotes of a string literal
pub(crate) fn unquote(literal: &str) -> &str {
    let bytes = literal.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' || first == b'\'' || first == b'`') && first == last {
            return &literal[1..literal.len() - 1];
        }
    }
    literal
}
