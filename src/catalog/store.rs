//! Shared, immutable project catalog

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::data;
use super::models::{CategoryFilter, ProjectRecord};
use super::query::{self, CatalogQuery};
use crate::error::{Error, Result};

/// Read-only project collection shared by every request
///
/// Cloning is cheap; all clones point at the same records. Slug uniqueness
/// is checked once when the catalog is built.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Arc<[ProjectRecord]>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        if let Some(slug) = query::duplicate_slugs(&projects).first() {
            return Err(Error::DuplicateSlug((*slug).to_string()));
        }

        debug!("Catalog built with {} projects", projects.len());
        Ok(Self {
            projects: projects.into(),
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(data::builtin_projects()?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let catalog = Self::new(data::load_projects_file(path)?)?;
        info!(
            "Loaded {} projects from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Catalog from `path` when given, otherwise the builtin dataset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn filter(&self, category: CategoryFilter, search: &str) -> Vec<&ProjectRecord> {
        query::filter(&self.projects, category, search)
    }

    pub fn query(&self, query: &CatalogQuery) -> Vec<&ProjectRecord> {
        query::run(&self.projects, query)
    }

    pub fn by_category(&self, category: CategoryFilter) -> Vec<&ProjectRecord> {
        query::by_category(&self.projects, category)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        query::find_by_slug(&self.projects, slug)
    }

    pub fn next_after_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        query::next_after_slug(&self.projects, slug)
    }

    /// Record with `slug` together with the record to link as "next".
    pub fn detail(&self, slug: &str) -> Result<(&ProjectRecord, &ProjectRecord)> {
        let index = query::position_of(&self.projects, slug)
            .ok_or_else(|| Error::NotFound(format!("project '{slug}'")))?;
        let next = query::next_after(&self.projects, index)
            .ok_or_else(|| Error::Internal(format!("no next project for '{slug}'")))?;
        Ok((&self.projects[index], next))
    }
}
