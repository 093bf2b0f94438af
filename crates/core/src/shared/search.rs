/// Records that can be narrowed by the free-text search box of a section.
pub trait Searchable {
    /// An empty term matches every record.
    fn matches_search(&self, term: &str) -> bool;
}

/// Keeps matching records in their original order.
pub fn filter_by_search<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_search(term))
        .cloned()
        .collect()
}

/// Case-insensitive substring test used by most search predicates.
pub fn contains_ci(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Named(&'static str);

    impl Searchable for Named {
        fn matches_search(&self, term: &str) -> bool {
            contains_ci(self.0, term)
        }
    }

    #[test]
    fn test_filter_keeps_order_and_empty_matches_all() {
        let items = [Named("Empresa ABC"), Named("TechSolutions"), Named("abc digital")];
        assert_eq!(filter_by_search(&items, "").len(), 3);
        assert_eq!(
            filter_by_search(&items, "ABC"),
            vec![Named("Empresa ABC"), Named("abc digital")]
        );
        assert!(filter_by_search(&items, "xyz").is_empty());
    }

    #[test]
    fn test_contains_ci_handles_accents() {
        assert!(contains_ci("São Paulo", "SÃO"));
        assert!(contains_ci("Negociação", "negociação"));
    }
}
