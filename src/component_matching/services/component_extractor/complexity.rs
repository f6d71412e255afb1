use tree_sitter::Node;

const BRANCHING_KINDS: [&str; 6] = [
    "if_statement",
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
    "ternary_expression",
];

const SHORT_CIRCUIT_OPERATORS: [&str; 3] = ["&&", "||", "??"];

/// Estimates cyclomatic complexity: 1 plus one per branching construct
///
/// Walks the whole subtree, nested functions included.
pub(super) fn cyclomatic_complexity(node: Node) -> u32 {
    let mut complexity = 1;
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        if is_branch(current) {
            complexity += 1;
        }
        let mut cursor = current.walk();
        stack.extend(current.named_children(&mut cursor));
    }
    complexity
}

fn is_branch(node: Node) -> bool {
    let kind = node.kind();
    if BRANCHING_KINDS.contains(&kind) {
        return true;
    }
    kind == "binary_expression"
        && node
            .child_by_field_name("operator")
            .is_some_and(|op| SHORT_CIRCUIT_OPERATORS.contains(&op.kind()))
}
