//! Pure query functions over a project collection
//!
//! None of these functions allocate new records or reorder the input; they
//! return references into the collection they were given.

use super::models::{CategoryFilter, ProjectRecord};

/// A catalog query: category restriction plus free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl CatalogQuery {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Build a query from raw request values, applying the lenient category
    /// policy.
    pub fn from_raw(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: category
                .map(CategoryFilter::parse_lenient)
                .unwrap_or_default(),
            search: search.unwrap_or_default().to_string(),
        }
    }
}

/// Filter a collection by category and search text
///
/// # Arguments
///
/// * `projects` - Collection in display order
/// * `category` - Category restriction (`All` is a no-op)
/// * `search` - Free text, trimmed before use; blank disables search
///
/// # Returns
///
/// Matching records in their original relative order
pub fn filter<'a>(
    projects: &'a [ProjectRecord],
    category: CategoryFilter,
    search: &str,
) -> Vec<&'a ProjectRecord> {
    let needle = normalize_search(search);

    projects
        .iter()
        .filter(|p| category.admits(p.category))
        .filter(|p| match needle.as_deref() {
            Some(needle) => matches_search(p, needle),
            None => true,
        })
        .collect()
}

/// Run a [`CatalogQuery`] against a collection.
pub fn run<'a>(projects: &'a [ProjectRecord], query: &CatalogQuery) -> Vec<&'a ProjectRecord> {
    filter(projects, query.category, &query.search)
}

/// Category restriction only, no search.
pub fn by_category(projects: &[ProjectRecord], category: CategoryFilter) -> Vec<&ProjectRecord> {
    filter(projects, category, "")
}

/// Lowercased, trimmed search term, or `None` when search is disabled.
fn normalize_search(search: &str) -> Option<String> {
    let trimmed = search.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Check whether a record matches an already-lowercased search term
///
/// Title, description and each tag are tested on their own; tags are never
/// joined, so a term cannot match across a tag boundary.
pub fn matches_search(project: &ProjectRecord, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// First record whose slug equals `slug`, in collection order.
pub fn find_by_slug<'a>(projects: &'a [ProjectRecord], slug: &str) -> Option<&'a ProjectRecord> {
    projects.iter().find(|p| p.slug == slug)
}

/// Position of the record with `slug`, if any.
pub fn position_of(projects: &[ProjectRecord], slug: &str) -> Option<usize> {
    projects.iter().position(|p| p.slug == slug)
}

/// Record following `index`, wrapping from the last record to the first
///
/// Returns `None` only for an empty collection or an out-of-range index.
pub fn next_after(projects: &[ProjectRecord], index: usize) -> Option<&ProjectRecord> {
    if index >= projects.len() {
        return None;
    }
    projects.get((index + 1) % projects.len())
}

/// Record following the one with `slug`, wrapping around at the end.
pub fn next_after_slug<'a>(projects: &'a [ProjectRecord], slug: &str) -> Option<&'a ProjectRecord> {
    position_of(projects, slug).and_then(|index| next_after(projects, index))
}

/// Slugs that occur more than once, in order of their second occurrence.
pub fn duplicate_slugs(projects: &[ProjectRecord]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    projects
        .iter()
        .filter(|p| !seen.insert(p.slug.as_str()))
        .map(|p| p.slug.as_str())
        .collect()
}
