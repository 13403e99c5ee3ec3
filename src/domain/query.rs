//! Query state and the filter/sort rules that derive the visible list.

use std::{cmp::Ordering, fmt, str::FromStr};

use icu_collator::{Collator, CollatorOptions};
use thiserror::Error;
use tracing::warn;

use super::entities::{Budget, Category, Destination, Security};

/// Select value meaning "no restriction".
pub const ALL_VALUE: &str = "all";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("unknown {kind} filter value: {value:?}")]
    UnknownCategory { kind: &'static str, value: String },
}

/// Either no restriction or exactly one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter<T> {
    All,
    Only(T),
}

impl<T> Default for CategoryFilter<T> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<T: Category> CategoryFilter<T> {
    pub fn admits(&self, category: T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_VALUE,
            CategoryFilter::Only(category) => category.value(),
        }
    }
}

impl<T: Category> FromStr for CategoryFilter<T> {
    type Err = QueryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_VALUE {
            return Ok(CategoryFilter::All);
        }
        T::from_value(value)
            .map(CategoryFilter::Only)
            .ok_or_else(|| QueryParseError::UnknownCategory {
                kind: T::KIND,
                value: value.to_string(),
            })
    }
}

pub type BudgetFilter = CategoryFilter<Budget>;
pub type SecurityFilter = CategoryFilter<Security>;

pub fn budget_filter_label(filter: BudgetFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All Budgets",
        CategoryFilter::Only(budget) => budget.label(),
    }
}

pub fn security_filter_label(filter: SecurityFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All Levels",
        CategoryFilter::Only(security) => security.label(),
    }
}

/// Sorting options for the visible list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Rating,
    Reviews,
    Name,
    /// Keeps catalogue load order; any unrecognized sort value lands here.
    Catalogue,
}

impl SortKey {
    /// Keys offered in the sort select.
    pub const OPTIONS: [SortKey; 3] = [SortKey::Rating, SortKey::Reviews, SortKey::Name];

    pub fn from_value(value: &str) -> Self {
        match value {
            "rating" => SortKey::Rating,
            "reviews" => SortKey::Reviews,
            "name" => SortKey::Name,
            _ => SortKey::Catalogue,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::Name => "name",
            SortKey::Catalogue => "catalogue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "Highest Rating",
            SortKey::Reviews => "Most Reviews",
            SortKey::Name => "Name (A-Z)",
            SortKey::Catalogue => "Catalogue Order",
        }
    }

    pub fn compare(&self, a: &Destination, b: &Destination) -> Ordering {
        match self {
            SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
            SortKey::Reviews => b.reviews.cmp(&a.reviews),
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Catalogue => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .inspect_err(|err| warn!("name collator unavailable, using case-folded order: {err}"))
            .ok();
}

/// Root-locale collation: accents and case are secondary to the base
/// letters, and on case-only ties lowercase sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_compare(a, b),
    })
}

fn fold_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

/// The four inputs that drive the visible list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogueQuery {
    pub search_term: String,
    pub budget: BudgetFilter,
    pub security: SecurityFilter,
    pub sort_by: SortKey,
}

impl CatalogueQuery {
    pub fn matches(&self, destination: &Destination) -> bool {
        self.matches_term(destination)
            && self.budget.admits(destination.budget)
            && self.security.admits(destination.security)
    }

    fn matches_term(&self, destination: &Destination) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        destination.name.to_lowercase().contains(&needle)
            || destination.region.to_lowercase().contains(&needle)
    }

    pub fn is_default(&self) -> bool {
        *self == CatalogueQuery::default()
    }
}

/// Positions in `destinations` that pass the query, in display order.
///
/// Filtering keeps catalogue order and the sort is stable, so equal keys
/// stay in load order.
pub fn visible_indices(destinations: &[Destination], query: &CatalogueQuery) -> Vec<usize> {
    let mut visible: Vec<usize> = destinations
        .iter()
        .enumerate()
        .filter(|(_, destination)| query.matches(destination))
        .map(|(idx, _)| idx)
        .collect();
    visible.sort_by(|&a, &b| query.sort_by.compare(&destinations[a], &destinations[b]));
    visible
}

pub fn visible_destinations<'a>(
    destinations: &'a [Destination],
    query: &CatalogueQuery,
) -> Vec<&'a Destination> {
    visible_indices(destinations, query)
        .into_iter()
        .map(|idx| &destinations[idx])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample;

    fn fixture() -> Vec<Destination> {
        vec![
            sample(1, "Hunza Valley", "Gilgit-Baltistan", 4.8, 245, Budget::Medium, Security::High),
            sample(2, "Skardu", "Gilgit-Baltistan", 4.9, 189, Budget::Medium, Security::High),
            sample(3, "Lahore", "Punjab", 4.6, 567, Budget::Low, Security::Medium),
            sample(4, "Swat Valley", "Khyber Pakhtunkhwa", 4.7, 156, Budget::Low, Security::Medium),
            sample(5, "Karachi", "Sindh", 4.3, 423, Budget::Medium, Security::Medium),
            sample(6, "Naran Kaghan", "Khyber Pakhtunkhwa", 4.5, 234, Budget::Medium, Security::High),
        ]
    }

    fn names(list: &[&Destination]) -> Vec<String> {
        list.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn filter_values_parse_from_select_options() {
        assert_eq!("all".parse::<BudgetFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "low".parse::<BudgetFilter>(),
            Ok(CategoryFilter::Only(Budget::Low))
        );
        assert_eq!(
            "high".parse::<SecurityFilter>(),
            Ok(CategoryFilter::Only(Security::High))
        );
        assert_eq!(
            "cheap".parse::<BudgetFilter>(),
            Err(QueryParseError::UnknownCategory {
                kind: "budget",
                value: "cheap".to_string()
            })
        );
    }

    #[test]
    fn filter_value_is_the_select_value() {
        for value in ["all", "low", "medium", "high"] {
            let filter: SecurityFilter = value.parse().unwrap();
            assert_eq!(filter.value(), value);
        }
        assert_eq!(budget_filter_label(CategoryFilter::All), "All Budgets");
        assert_eq!(security_filter_label(CategoryFilter::Only(Security::Low)), "Basic Security");
    }

    #[test]
    fn unknown_sort_value_falls_back_to_catalogue_order() {
        assert_eq!(SortKey::from_value("price"), SortKey::Catalogue);
        let destinations = fixture();
        let query = CatalogueQuery {
            sort_by: SortKey::from_value("price"),
            ..CatalogueQuery::default()
        };
        let visible = visible_destinations(&destinations, &query);
        let ids: Vec<_> = visible.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn default_query_sorts_whole_catalogue_by_rating() {
        let destinations = fixture();
        let visible = visible_destinations(&destinations, &CatalogueQuery::default());
        assert_eq!(
            names(&visible),
            vec!["Skardu", "Hunza Valley", "Swat Valley", "Lahore", "Naran Kaghan", "Karachi"]
        );
    }

    #[test]
    fn search_matches_name_or_region_ignoring_case() {
        let destinations = fixture();
        let mut query = CatalogueQuery {
            search_term: "skardu".to_string(),
            ..CatalogueQuery::default()
        };
        assert_eq!(names(&visible_destinations(&destinations, &query)), vec!["Skardu"]);

        query.search_term = "KHYBER".to_string();
        assert_eq!(
            names(&visible_destinations(&destinations, &query)),
            vec!["Swat Valley", "Naran Kaghan"]
        );
    }

    #[test]
    fn lowercasing_the_term_does_not_change_results() {
        let destinations = fixture();
        for term in ["Valley", "GILGIT", "sWaT", "Punjab", "ä", "Lahore Fort"] {
            let original = CatalogueQuery {
                search_term: term.to_string(),
                ..CatalogueQuery::default()
            };
            let lowered = CatalogueQuery {
                search_term: term.to_lowercase(),
                ..CatalogueQuery::default()
            };
            assert_eq!(
                visible_destinations(&destinations, &original),
                visible_destinations(&destinations, &lowered),
                "term {term:?}"
            );
        }
    }

    #[test]
    fn budget_filter_keeps_only_matching_entries_in_rating_order() {
        let destinations = fixture();
        let query = CatalogueQuery {
            budget: CategoryFilter::Only(Budget::Low),
            ..CatalogueQuery::default()
        };
        assert_eq!(
            names(&visible_destinations(&destinations, &query)),
            vec!["Swat Valley", "Lahore"]
        );
    }

    #[test]
    fn filters_combine_with_and() {
        let destinations = fixture();
        let query = CatalogueQuery {
            search_term: "valley".to_string(),
            budget: CategoryFilter::Only(Budget::Medium),
            security: CategoryFilter::Only(Security::High),
            sort_by: SortKey::Rating,
        };
        assert_eq!(names(&visible_destinations(&destinations, &query)), vec!["Hunza Valley"]);
    }

    #[test]
    fn sort_by_reviews_is_descending() {
        let destinations = fixture();
        let query = CatalogueQuery {
            sort_by: SortKey::Reviews,
            ..CatalogueQuery::default()
        };
        let reviews: Vec<_> = visible_destinations(&destinations, &query)
            .iter()
            .map(|d| d.reviews)
            .collect();
        assert_eq!(reviews, vec![567, 423, 245, 234, 189, 156]);
    }

    #[test]
    fn sort_by_name_is_alphabetical() {
        let destinations = fixture();
        let query = CatalogueQuery {
            sort_by: SortKey::Name,
            ..CatalogueQuery::default()
        };
        assert_eq!(
            names(&visible_destinations(&destinations, &query)),
            vec!["Hunza Valley", "Karachi", "Lahore", "Naran Kaghan", "Skardu", "Swat Valley"]
        );
    }

    #[test]
    fn name_comparison_ignores_case_before_breaking_ties() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_names("lahore", "Lahore"), Ordering::Less);
        assert_eq!(compare_names("Lahore", "Lahore"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut names = vec!["Zhob", "Ōrmara", "Ayubia"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Ayubia", "Ōrmara", "Zhob"]);
        assert_eq!(compare_names("Ōrmara", "Ormara"), Ordering::Greater);
        assert_eq!(compare_names("Ōrmara", "Pasni"), Ordering::Less);
    }

    #[test]
    fn fallback_comparison_folds_case() {
        assert_eq!(fold_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(fold_compare("lahore", "Lahore"), Ordering::Less);
    }

    #[test]
    fn equal_keys_keep_catalogue_order() {
        let destinations = vec![
            sample(10, "First", "A", 4.0, 50, Budget::Low, Security::Low),
            sample(11, "Second", "B", 4.5, 50, Budget::Low, Security::Low),
            sample(12, "Third", "C", 4.0, 50, Budget::Low, Security::Low),
            sample(13, "Fourth", "D", 4.5, 10, Budget::Low, Security::Low),
        ];
        let by_rating = CatalogueQuery::default();
        let ids: Vec<_> = visible_destinations(&destinations, &by_rating)
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![11, 13, 10, 12]);

        let by_reviews = CatalogueQuery {
            sort_by: SortKey::Reviews,
            ..CatalogueQuery::default()
        };
        let ids: Vec<_> = visible_destinations(&destinations, &by_reviews)
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![10, 11, 12, 13]);
    }

    #[test]
    fn visible_list_is_a_matching_subset() {
        let destinations = fixture();
        let terms = ["", "a", "valley", "sindh", "zzz-no-match"];
        let budgets = ["all", "low", "medium", "high"];
        for term in terms {
            for budget in budgets {
                for security in budgets {
                    for sort in ["rating", "reviews", "name"] {
                        let query = CatalogueQuery {
                            search_term: term.to_string(),
                            budget: budget.parse().unwrap(),
                            security: security.parse().unwrap(),
                            sort_by: SortKey::from_value(sort),
                        };
                        let visible = visible_destinations(&destinations, &query);
                        for destination in &visible {
                            assert!(destinations.contains(destination));
                            assert!(query.matches(destination));
                        }
                        let expected = destinations.iter().filter(|d| query.matches(d)).count();
                        assert_eq!(visible.len(), expected);
                        assert_eq!(visible, visible_destinations(&destinations, &query));
                    }
                }
            }
        }
    }

    #[test]
    fn unmatched_term_yields_empty_list() {
        let destinations = fixture();
        let query = CatalogueQuery {
            search_term: "zzz-no-match".to_string(),
            ..CatalogueQuery::default()
        };
        assert!(visible_destinations(&destinations, &query).is_empty());
        assert!(!query.is_default());
    }
}
