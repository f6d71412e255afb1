use super::{text, unquote};
use crate::component_matching::domain::{AttributeValue, StructureNode};
use tree_sitter::Node;

/// True if any element literal occurs under `node`
///
/// Fragments (`<>...</>`) are not elements themselves but their
/// children are searched.
pub(super) fn contains_element(node: Node) -> bool {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if is_element(current) {
            return true;
        }
        let mut cursor = current.walk();
        stack.extend(current.named_children(&mut cursor));
    }
    false
}

/// Resolves the structure tree of a function or arrow component
///
/// Uses the first `return` whose argument is an element literal,
/// searching depth-first in source order. Later returns are ignored even
/// when they render a different shape. A concise arrow body counts as the
/// returned value.
pub(super) fn resolve_function_structure(function: Node, source: &str) -> Option<StructureNode> {
    let body = function.child_by_field_name("body")?;
    if body.kind() != "statement_block" {
        let value = unwrap_parentheses(body);
        if is_element(value) {
            return Some(build_node(value, source));
        }
    }
    first_returned_element(body).map(|element| build_node(element, source))
}

/// Resolves the structure tree of a class component from its `render` method
pub(super) fn resolve_class_structure(class: Node, source: &str) -> Option<StructureNode> {
    let body = class.child_by_field_name("body")?;
    let mut cursor = body.walk();
    let render = body.named_children(&mut cursor).find(|member| {
        member.kind() == "method_definition"
            && member
                .child_by_field_name("name")
                .is_some_and(|name| text(name, source) == "render")
    })?;

    let render_body = render.child_by_field_name("body")?;
    first_returned_element(render_body).map(|element| build_node(element, source))
}

fn first_returned_element(node: Node) -> Option<Node> {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == "return_statement" {
            let mut cursor = current.walk();
            let argument = current
                .named_children(&mut cursor)
                .find(|c| c.kind() != "comment");
            if let Some(argument) = argument.map(unwrap_parentheses) {
                if is_element(argument) {
                    return Some(argument);
                }
            }
        }

        let mut cursor = current.walk();
        let children: Vec<Node> = current.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

fn unwrap_parentheses(mut node: Node) -> Node {
    while node.kind() == "parenthesized_expression" {
        let mut cursor = node.walk();
        let inner = node
            .named_children(&mut cursor)
            .find(|c| c.kind() != "comment");
        match inner {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

fn is_element(node: Node) -> bool {
    match node.kind() {
        "jsx_self_closing_element" => true,
        "jsx_element" => !is_fragment(node),
        _ => false,
    }
}

fn is_fragment(node: Node) -> bool {
    node.kind() == "jsx_element"
        && opening_element(node).map_or(true, |open| open.child_by_field_name("name").is_none())
}

fn opening_element(element: Node) -> Option<Node> {
    let mut cursor = element.walk();
    let open = element
        .named_children(&mut cursor)
        .find(|c| c.kind() == "jsx_opening_element");
    open
}

fn build_node(element: Node, source: &str) -> StructureNode {
    let tag = if element.kind() == "jsx_element" {
        opening_element(element)
    } else {
        Some(element)
    };

    let element_type = tag
        .and_then(|t| t.child_by_field_name("name"))
        .map(|name| text(name, source).to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut node = StructureNode::new(element_type);
    if let Some(tag) = tag {
        let mut cursor = tag.walk();
        for attribute in tag
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "jsx_attribute")
        {
            if let Some((name, value)) = read_attribute(attribute, source) {
                node.attributes.insert(name, value);
            }
        }
    }

    if element.kind() == "jsx_element" {
        collect_children(element, source, &mut node.children);
    }
    node
}

/// Appends the element children of `parent`, looking through fragments
fn collect_children(parent: Node, source: &str, children: &mut Vec<StructureNode>) {
    let mut cursor = parent.walk();
    for child in parent.named_children(&mut cursor) {
        if is_element(child) {
            children.push(build_node(child, source));
        } else if is_fragment(child) {
            collect_children(child, source, children);
        }
    }
}

/// Reads a plain-named attribute; namespaced ones (`xlink:href`) are skipped
fn read_attribute(attribute: Node, source: &str) -> Option<(String, AttributeValue)> {
    let name = attribute.named_child(0)?;
    if name.kind() == "jsx_namespace_name" {
        return None;
    }
    let value = match attribute.named_child(1) {
        None => AttributeValue::Present,
        Some(value) => match value.kind() {
            "string" => AttributeValue::Text(unquote(text(value, source)).to_string()),
            "jsx_expression" if value.named_child_count() > 0 => AttributeValue::Expression,
            _ => AttributeValue::Unknown,
        },
    };
    Some((text(name, source).to_string(), value))
}
