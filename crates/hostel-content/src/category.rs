//! Category matching and grouping

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::Categorized;

/// How two category labels are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMatching {
    /// Byte-for-byte equality; only the empty string counts as absent
    #[default]
    Exact,
    /// Trimmed and case-folded; blank labels count as absent
    Normalized,
}

impl CategoryMatching {
    /// Comparison key for a category, or `None` when it is absent
    pub fn key(&self, category: Option<&str>) -> Option<String> {
        let raw = category?;
        match self {
            CategoryMatching::Exact if raw.is_empty() => None,
            CategoryMatching::Exact => Some(raw.to_string()),
            CategoryMatching::Normalized => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            }
        }
    }

    /// Display label for a present category
    pub fn label(&self, raw: &str) -> String {
        match self {
            CategoryMatching::Exact => raw.to_string(),
            CategoryMatching::Normalized => raw.trim().to_string(),
        }
    }

    /// Whether `category` selects into the bucket named `selected`
    pub fn matches(&self, category: Option<&str>, selected: &str) -> bool {
        match (self.key(category), self.key(Some(selected))) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Items sharing one category, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<T> {
    pub category: String,
    pub items: Vec<T>,
}

/// Partition items by category.
///
/// Items without a category land in the `fallback` bucket. Groups appear
/// in first-occurrence order and keep their items in input order, so the
/// concatenation of all groups is a permutation of the input.
pub fn group_by_category<T: Categorized>(
    items: impl IntoIterator<Item = T>,
    matching: CategoryMatching,
    fallback: &str,
) -> Vec<CategoryGroup<T>> {
    let mut groups: Vec<CategoryGroup<T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let (key, label) = match matching.key(item.category()) {
            Some(key) => {
                let label = item.category().map(|c| matching.label(c)).unwrap_or_default();
                (key, label)
            }
            None => (
                matching
                    .key(Some(fallback))
                    .unwrap_or_else(|| fallback.to_string()),
                fallback.to_string(),
            ),
        };

        match index.get(&key) {
            Some(&position) => groups[position].items.push(item),
            None => {
                index.insert(key, groups.len());
                groups.push(CategoryGroup {
                    category: label,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged(u32, Option<&'static str>);

    impl Categorized for Tagged {
        fn category(&self) -> Option<&str> {
            self.1
        }
    }

    #[test]
    fn exact_keys() {
        let m = CategoryMatching::Exact;
        assert_eq!(m.key(Some("Rooms")), Some("Rooms".to_string()));
        assert_eq!(m.key(Some(" Rooms ")), Some(" Rooms ".to_string()));
        assert_eq!(m.key(Some("")), None);
        assert_eq!(m.key(None), None);
    }

    #[test]
    fn normalized_keys() {
        let m = CategoryMatching::Normalized;
        assert_eq!(m.key(Some(" Rooms ")), Some("rooms".to_string()));
        assert_eq!(m.key(Some("   ")), None);
        assert_eq!(m.label("  Study Area "), "Study Area");
    }

    #[test]
    fn exact_matching_is_case_sensitive() {
        assert!(CategoryMatching::Exact.matches(Some("Rooms"), "Rooms"));
        assert!(!CategoryMatching::Exact.matches(Some("rooms"), "Rooms"));
        assert!(CategoryMatching::Normalized.matches(Some("rooms "), "Rooms"));
        assert!(!CategoryMatching::Normalized.matches(None, "Rooms"));
    }

    #[test]
    fn groups_in_first_occurrence_order() {
        let items = vec![
            Tagged(1, Some("Safety")),
            Tagged(2, None),
            Tagged(3, Some("Food")),
            Tagged(4, Some("Safety")),
            Tagged(5, Some("")),
        ];

        let groups = group_by_category(items, CategoryMatching::Exact, "Other");
        let summary: Vec<(&str, Vec<u32>)> = groups
            .iter()
            .map(|g| (g.category.as_str(), g.items.iter().map(|t| t.0).collect()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Safety", vec![1, 4]),
                ("Other", vec![2, 5]),
                ("Food", vec![3]),
            ]
        );
    }

    #[test]
    fn literal_other_shares_the_fallback_bucket() {
        let items = vec![Tagged(1, Some("Other")), Tagged(2, None)];
        let groups = group_by_category(items, CategoryMatching::Exact, "Other");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn exact_grouping_keeps_case_variants_apart() {
        let items = vec![Tagged(1, Some("Food")), Tagged(2, Some("food"))];
        let groups = group_by_category(items.clone(), CategoryMatching::Exact, "Other");
        assert_eq!(groups.len(), 2);

        let groups = group_by_category(items, CategoryMatching::Normalized, "Other");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Food");
    }

    #[test]
    fn empty_input_has_no_groups() {
        let groups = group_by_category(Vec::<Tagged>::new(), CategoryMatching::Exact, "Other");
        assert!(groups.is_empty());
    }
}
