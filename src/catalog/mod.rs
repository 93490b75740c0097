//! Project catalog query engine
//!
//! Holds the fixed collection of project case studies and answers the
//! queries the site needs: category + free-text filtering, slug lookup and
//! circular "next project" navigation.

pub mod data;
pub mod models;
pub mod query;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use models::{
    category_options, Category, CategoryFilter, CategoryOption, ProjectRecord, ProjectResult,
    ProjectSummary, Testimonial, Tool, ToolCategory,
};
pub use query::CatalogQuery;
pub use store::Catalog;
