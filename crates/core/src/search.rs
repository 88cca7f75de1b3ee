//! Catalog lookup by category or item name.
//!
//! Matching is case-insensitive substring containment, evaluated per category
//! in catalog order:
//!
//! 1. a query contained in the category name selects the whole category;
//! 2. otherwise only the items whose names contain the query are kept, and a
//!    category with no such items is dropped.
//!
//! The query is trimmed first. A blank query matches nothing, so a stray empty
//! transcript never dumps the whole catalog back to the caller.

use crate::domain::catalog::Catalog;
use crate::domain::product::Category;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryResult {
    /// Matching categories, in catalog order. Never empty.
    Matches(Vec<Category>),
    NotFound,
}

impl QueryResult {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn categories(&self) -> &[Category] {
        match self {
            Self::Matches(categories) => categories,
            Self::NotFound => &[],
        }
    }
}

pub fn search(catalog: &Catalog, query: &str) -> QueryResult {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return QueryResult::NotFound;
    }

    let matches: Vec<Category> = catalog
        .categories()
        .iter()
        .filter_map(|category| match_category(category, &needle))
        .collect();

    if matches.is_empty() {
        QueryResult::NotFound
    } else {
        QueryResult::Matches(matches)
    }
}

fn match_category(category: &Category, needle: &str) -> Option<Category> {
    if category.name.to_lowercase().contains(needle) {
        return Some(category.clone());
    }

    let items: Vec<_> = category
        .items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(needle))
        .cloned()
        .collect();

    (!items.is_empty()).then(|| Category::new(category.name.clone(), items))
}

impl Catalog {
    pub fn search(&self, query: &str) -> QueryResult {
        search(self, query)
    }
}
