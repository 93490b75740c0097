//! Record fixtures for catalog unit tests

use super::models::{Category, ProjectRecord};
use chrono::NaiveDate;

/// Minimal record whose title and description only contain `slug`.
pub fn record(id: &str, slug: &str, category: Category, tags: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        slug: slug.to_string(),
        title: format!("Project {slug}"),
        description: format!("Description of {slug}"),
        excerpt: String::new(),
        category,
        image: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        client: String::new(),
        duration: String::new(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        challenge: String::new(),
        solution: String::new(),
        results: Vec::new(),
        tools: Vec::new(),
        testimonial: None,
        gallery: Vec::new(),
    }
}
