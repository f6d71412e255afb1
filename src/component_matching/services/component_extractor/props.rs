use super::{text, unquote};
use crate::component_matching::domain::{ComponentProp, PropDefault};
use std::iter::Peekable;
use std::str::Chars;
use tree_sitter::Node;

/// Reads the props of a function component from its first parameter
///
/// A destructured parameter yields one prop per key; a plain identifier
/// yields a single prop named after it. Anything else yields no props.
pub(super) fn extract_props(function: Node, source: &str) -> Vec<ComponentProp> {
    if let Some(parameter) = function.child_by_field_name("parameter") {
        return pattern_props(parameter, source);
    }

    let Some(parameters) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut cursor = parameters.walk();
    let first = parameters
        .named_children(&mut cursor)
        .find(|c| c.kind() != "comment");

    match first {
        Some(param) if matches!(param.kind(), "required_parameter" | "optional_parameter") => param
            .child_by_field_name("pattern")
            .map(|pattern| pattern_props(pattern, source))
            .unwrap_or_default(),
        Some(param) => pattern_props(param, source),
        None => Vec::new(),
    }
}

fn pattern_props(pattern: Node, source: &str) -> Vec<ComponentProp> {
    match pattern.kind() {
        "identifier" => vec![ComponentProp::required(text(pattern, source))],
        "object_pattern" => destructured_props(pattern, source),
        _ => Vec::new(),
    }
}

fn destructured_props(pattern: Node, source: &str) -> Vec<ComponentProp> {
    let mut props = Vec::new();
    let mut cursor = pattern.walk();

    for entry in pattern.named_children(&mut cursor) {
        match entry.kind() {
            "shorthand_property_identifier_pattern" => {
                props.push(ComponentProp::required(text(entry, source)));
            }
            "object_assignment_pattern" => {
                let Some(left) = entry.child_by_field_name("left") else {
                    continue;
                };
                let default_value = entry
                    .child_by_field_name("right")
                    .and_then(|right| literal_default(right, source));
                props.push(ComponentProp::optional(text(left, source), default_value));
            }
            "pair_pattern" => {
                let Some(key) = entry.child_by_field_name("key") else {
                    continue;
                };
                let name = unquote(text(key, source));
                match entry.child_by_field_name("value") {
                    Some(value) if value.kind() == "assignment_pattern" => {
                        let default_value = value
                            .child_by_field_name("right")
                            .and_then(|right| literal_default(right, source));
                        props.push(ComponentProp::optional(name, default_value));
                    }
                    _ => props.push(ComponentProp::required(name)),
                }
            }
            // rest elements (`...rest`) are not individual props
            _ => {}
        }
    }
    props
}

/// Captures string, number and boolean literal defaults
fn literal_default(node: Node, source: &str) -> Option<PropDefault> {
    let literal = text(node, source);
    match node.kind() {
        "string" => Some(PropDefault::String(decode_escapes(unquote(literal)))),
        "number" => parse_number(literal).map(PropDefault::Number),
        "true" => Some(PropDefault::Boolean(true)),
        "false" => Some(PropDefault::Boolean(false)),
        _ => None,
    }
}

/// Parses a JS numeric literal: decimal, `0x`/`0o`/`0b` prefixes and `_`
/// separators. BigInt literals (`10n`) are not captured.
fn parse_number(literal: &str) -> Option<f64> {
    let digits: String = literal.chars().filter(|c| *c != '_').collect();
    let radix = match digits.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return digits.parse::<f64>().ok(),
    };
    u64::from_str_radix(&digits[2..], radix)
        .ok()
        .map(|value| value as f64)
}

/// Decodes the escape sequences of a JS string literal body
fn decode_escapes(body: &str) -> String {
    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            decoded.push('\\');
            break;
        };
        match escape {
            'n' => decoded.push('\n'),
            't' => decoded.push('\t'),
            'r' => decoded.push('\r'),
            'b' => decoded.push('\u{8}'),
            'f' => decoded.push('\u{c}'),
            'v' => decoded.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => decoded.push('\0'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                push_code_point(&mut decoded, u32::from_str_radix(&hex, 16).ok());
            }
            'u' => {
                let unit = read_unicode_escape(&mut chars);
                match unit {
                    Some(high @ 0xD800..=0xDBFF) => {
                        let low = read_low_surrogate(&mut chars);
                        let combined =
                            low.map(|low| 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00));
                        push_code_point(&mut decoded, combined);
                    }
                    other => push_code_point(&mut decoded, other),
                }
            }
            // line continuation
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            // `\'`, `\"`, `\\` and any other escaped character stand for themselves
            other => decoded.push(other),
        }
    }
    decoded
}

/// Reads `XXXX` or `{X...}` after a `\u`
fn read_unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    let hex: String = if chars.peek() == Some(&'{') {
        chars.next();
        chars.by_ref().take_while(|c| *c != '}').collect()
    } else {
        chars.by_ref().take(4).collect()
    };
    u32::from_str_radix(&hex, 16).ok()
}

/// Consumes a `\uXXXX` low surrogate if one follows
fn read_low_surrogate(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    let mut lookahead = chars.clone();
    if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
        return None;
    }
    let low = read_unicode_escape(&mut lookahead)?;
    if (0xDC00..=0xDFFF).contains(&low) {
        *chars = lookahead;
        Some(low)
    } else {
        None
    }
}

fn push_code_point(out: &mut String, code_point: Option<u32>) {
    out.push(
        code_point
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_radix_and_separators() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("1.5e2"), Some(150.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("0x10"), Some(16.0));
        assert_eq!(parse_number("0XfF"), Some(255.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("1_000"), Some(1000.0));
        assert_eq!(parse_number("10n"), None);
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_escapes(r"it\'s"), "it's");
        assert_eq!(decode_escapes(r#"say \"hi\""#), "say \"hi\"");
        assert_eq!(decode_escapes(r"a\\b"), "a\\b");
        assert_eq!(decode_escapes(r"line\nnext\tcol"), "line\nnext\tcol");
        assert_eq!(decode_escapes(r"caf\u00e9"), "café");
        assert_eq!(decode_escapes(r"\u{1F600}"), "😀");
        assert_eq!(decode_escapes(r"\uD83D\uDE00"), "😀");
        assert_eq!(decode_escapes(r"\x41"), "A");
        assert_eq!(decode_escapes(r"\d"), "d");
        assert_eq!(decode_escapes("plain"), "plain");
    }

    #[test]
    fn test_decode_escapes_malformed() {
        assert_eq!(decode_escapes(r"\uZZZZ"), "\u{FFFD}");
        assert_eq!(decode_escapes(r"\uD83D"), "\u{FFFD}");
        assert_eq!(decode_escapes("trailing\\"), "trailing\\");
    }
}
