//! Factor scores used by the structural matcher
//!
//! Every function returns a score in 0..=100 and never rounds.

use crate::component_matching::domain::StructureSignature;

const CONTAINMENT_SCORE: f64 = 80.0;
const INSUFFICIENT_SIGNAL_SCORE: f64 = 50.0;

/// Lowercases a name and strips everything but ASCII letters and digits
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Edit distance between two strings, counted in chars
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Name similarity after normalization
///
/// 100 for equal names, 80 when one contains the other, otherwise the
/// Levenshtein ratio.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_name(a);
    let b = normalize_name(b);

    if a == b {
        return 100.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return CONTAINMENT_SCORE;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    let distance = levenshtein_distance(&a, &b) as f64;
    ((1.0 - distance / max_len as f64) * 100.0).max(0.0)
}

/// Jaccard index of two tag sets, 0 when either is empty
pub fn element_type_similarity(user_types: &[String], catalog_types: &[String]) -> f64 {
    if user_types.is_empty() || catalog_types.is_empty() {
        return 0.0;
    }

    let intersection = user_types
        .iter()
        .filter(|t| catalog_types.contains(t))
        .count();
    let union = catalog_types.len()
        + user_types
            .iter()
            .filter(|t| !catalog_types.contains(t))
            .count();

    intersection as f64 / union as f64 * 100.0
}

/// Case-insensitive substring match in either direction
pub fn prop_names_match(prop: &str, pattern: &str) -> bool {
    let prop = prop.to_lowercase();
    let pattern = pattern.to_lowercase();
    prop.contains(&pattern) || pattern.contains(&prop)
}

/// Share of user props matching some catalog prop pattern
///
/// Divided by the larger of the two counts; 100 when both sides are
/// empty, 0 when exactly one is.
pub fn prop_similarity<'a>(
    user_props: impl IntoIterator<Item = &'a str>,
    catalog_patterns: &[String],
) -> f64 {
    let user_props: Vec<&str> = user_props.into_iter().collect();

    match (user_props.is_empty(), catalog_patterns.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let matched = user_props
        .iter()
        .filter(|prop| {
            catalog_patterns
                .iter()
                .any(|pattern| prop_names_match(prop, pattern))
        })
        .count();

    matched as f64 / user_props.len().max(catalog_patterns.len()) as f64 * 100.0
}

/// Ratio of the smaller complexity to the larger, 50 if either is 0
pub fn complexity_similarity(user: u32, catalog: u32) -> f64 {
    if user == 0 || catalog == 0 {
        return INSUFFICIENT_SIGNAL_SCORE;
    }
    f64::from(user.min(catalog)) / f64::from(user.max(catalog)) * 100.0
}

/// Catalog entries carry no code; complexity is estimated from the
/// signature as `1 + |element types| + |prop patterns|`
pub fn estimate_catalog_complexity(signature: &StructureSignature) -> u32 {
    let estimate = 1 + signature.element_types().len() + signature.prop_patterns().len();
    u32::try_from(estimate).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_matching::domain::ChildrenPattern;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Primary_Button-2"), "primarybutton2");
        assert_eq!(normalize_name("UI.Card"), "uicard");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_name_similarity_tiers() {
        assert_eq!(name_similarity("TextField", "text-field"), 100.0);
        assert_eq!(name_similarity("CustomButton", "Button"), 80.0);
        assert_eq!(name_similarity("Card", "ProductCard"), 80.0);
        // card vs cart: one substitution out of four
        assert_eq!(name_similarity("Card", "Cart"), 75.0);
        assert_eq!(name_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_name_similarity_empty_names() {
        assert_eq!(name_similarity("", "__"), 100.0);
        assert_eq!(name_similarity("", "Button"), 80.0);
    }

    #[test]
    fn test_element_type_similarity() {
        let user = strings(&["div", "img", "h3"]);
        let catalog = strings(&["div", "img", "h3", "p"]);
        assert_eq!(element_type_similarity(&user, &catalog), 75.0);
        assert_eq!(
            element_type_similarity(&strings(&["button"]), &strings(&["button"])),
            100.0
        );
    }

    #[test]
    fn test_element_type_similarity_empty_side_is_zero() {
        let user = strings(&["div"]);
        let score = element_type_similarity(&user, &[]);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
        assert_eq!(element_type_similarity(&[], &user), 0.0);
    }

    #[test]
    fn test_prop_similarity() {
        let catalog = strings(&["onClick", "label", "disabled", "variant"]);
        assert_eq!(prop_similarity(["label", "onclick"], &catalog), 50.0);
        assert_eq!(prop_similarity(["buttonLabel"], &strings(&["label"])), 100.0);
        assert_eq!(prop_similarity(["icon"], &strings(&["label"])), 0.0);
    }

    #[test]
    fn test_prop_similarity_empty_sides() {
        assert_eq!(prop_similarity(Vec::<&str>::new(), &[]), 100.0);
        assert_eq!(prop_similarity(["label"], &[]), 0.0);
        assert_eq!(prop_similarity(Vec::<&str>::new(), &strings(&["label"])), 0.0);
    }

    #[test]
    fn test_complexity_similarity() {
        assert_eq!(complexity_similarity(3, 3), 100.0);
        assert_eq!(complexity_similarity(1, 4), 25.0);
        assert_eq!(complexity_similarity(0, 4), 50.0);
    }

    #[test]
    fn test_estimate_catalog_complexity() {
        let signature = StructureSignature::new(
            strings(&["button"]),
            strings(&["onClick", "label"]),
            ChildrenPattern::Text,
        );
        assert_eq!(estimate_catalog_complexity(&signature), 4);
    }
}
