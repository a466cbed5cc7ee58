// Display labels of the category codes the mobile app submits.
const LABELS: &[(&str, &str)] = &[
    ("university", "Université"),
    ("school", "École"),
    ("restaurant", "Restaurant"),
    ("hospital", "Hôpital"),
    ("hotel", "Hôtel"),
    ("park", "Parc"),
    ("museum", "Musée"),
    ("shopping", "Commerce"),
    ("office", "Bureau"),
    ("art_school", "École d'art"),
];

/// Human readable label of a category code.
///
/// Unknown codes are returned unchanged.
pub fn category_label(code: &str) -> &str {
    LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |&(_, label)| label)
}

/// All known categories as `(code, label)` pairs, e.g. for filter selects.
pub fn known_categories() -> impl Iterator<Item = (&'static str, &'static str)> {
    LABELS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_has_label() {
        assert_eq!(category_label("hospital"), "Hôpital");
        assert_eq!(category_label("art_school"), "École d'art");
    }

    #[test]
    fn unknown_code_falls_back_to_raw_value() {
        assert_eq!(category_label("bakery"), "bakery");
        assert_eq!(category_label(""), "");
    }
}
