use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Opaque identifier assigned to a component record at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(String);

impl ComponentId {
    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a component was declared in source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    FunctionComponent,
    ClassComponent,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::FunctionComponent => "FunctionComponent",
            ComponentKind::ClassComponent => "ClassComponent",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal default value of a destructured prop
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PropDefault {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl std::fmt::Display for PropDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropDefault::String(s) => write!(f, "'{}'", s),
            PropDefault::Number(n) => write!(f, "{}", n),
            PropDefault::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A prop accepted by a user component
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProp {
    pub name: String,
    /// False only when the destructured binding carries an explicit default
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<PropDefault>,
}

impl ComponentProp {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            default_value: None,
        }
    }

    pub fn optional(name: impl Into<String>, default_value: Option<PropDefault>) -> Self {
        Self {
            name: name.into(),
            required: false,
            default_value,
        }
    }
}

/// Extracted value of a JSX attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// String literal value, quotes removed
    Text(String),
    /// Attribute written without a value (`<input disabled />`)
    Present,
    /// Any `{...}` expression container
    Expression,
    /// Anything else (nested elements, empty containers)
    Unknown,
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeValue::Text(text) => serializer.serialize_str(text),
            AttributeValue::Present => serializer.serialize_bool(true),
            AttributeValue::Expression => serializer.serialize_str("expression"),
            AttributeValue::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

/// One element of a component's rendered structure
///
/// Only element-typed children are kept; text and expression children
/// carry no structural signal and are pruned during extraction.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureNode {
    pub element_type: String,
    pub attributes: BTreeMap<String, AttributeValue>,
    pub children: Vec<StructureNode>,
}

impl StructureNode {
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_child(mut self, child: StructureNode) -> Self {
        self.children.push(child);
        self
    }

    /// Element tag names in depth-first order, each listed once
    pub fn element_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        self.collect_element_types(&mut types);
        types
    }

    fn collect_element_types(&self, types: &mut Vec<String>) {
        if !types.iter().any(|t| t == &self.element_type) {
            types.push(self.element_type.clone());
        }
        for child in &self.children {
            child.collect_element_types(types);
        }
    }

    /// Depth of the tree (a lone element has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }
}

/// Location of a component in its source file
///
/// Lines are 1-based, columns 0-based. A span that could not be resolved
/// has every bound set to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub file: String,
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

impl SourceSpan {
    pub fn unresolved(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            start_line: 0,
            end_line: 0,
            start_column: 0,
            end_column: 0,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.start_line > 0 && self.end_line >= self.start_line
    }

    pub fn lines_of_code(&self) -> usize {
        if self.is_resolved() {
            self.end_line - self.start_line + 1
        } else {
            0
        }
    }
}

impl std::fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.start_line)
    }
}

/// Normalized structural description of one extracted UI component
///
/// Records are created once per matching pass and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    id: ComponentId,
    name: String,
    kind: ComponentKind,
    props: Vec<ComponentProp>,
    structure: Option<StructureNode>,
    complexity: u32,
    span: SourceSpan,
    source_text: String,
}

impl ComponentRecord {
    pub fn new(
        name: String,
        kind: ComponentKind,
        props: Vec<ComponentProp>,
        structure: Option<StructureNode>,
        complexity: u32,
        span: SourceSpan,
        source_text: String,
    ) -> Self {
        Self {
            id: ComponentId::generate(),
            name,
            kind,
            props,
            structure,
            complexity: complexity.max(1),
            span,
            source_text,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn props(&self) -> &[ComponentProp] {
        &self.props
    }

    /// Root of the rendered structure, `None` when it could not be resolved
    pub fn structure(&self) -> Option<&StructureNode> {
        self.structure.as_ref()
    }

    pub fn complexity(&self) -> u32 {
        self.complexity
    }

    pub fn span(&self) -> &SourceSpan {
        &self.span
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn lines_of_code(&self) -> usize {
        self.span.lines_of_code()
    }

    /// Flattened element tag names of the structure tree
    pub fn element_types(&self) -> Vec<String> {
        self.structure
            .as_ref()
            .map(StructureNode::element_types)
            .unwrap_or_default()
    }

    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.props.iter().map(|p| p.name.as_str())
    }
}
