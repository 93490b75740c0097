//! Catalog sources: the embedded dataset and catalog files on disk

use std::path::Path;

use super::models::ProjectRecord;
use crate::error::{Error, Result};

const BUILTIN_CATALOG: &str = include_str!("../../assets/projects.yaml");

/// The six case studies shipped with the site, in display order.
pub fn builtin_projects() -> Result<Vec<ProjectRecord>> {
    parse_yaml(BUILTIN_CATALOG)
}

pub fn parse_yaml(content: &str) -> Result<Vec<ProjectRecord>> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn parse_json(content: &str) -> Result<Vec<ProjectRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// Load a catalog file, choosing the format from its extension
///
/// `.json` is parsed as JSON; `.yaml`, `.yml` and anything else as YAML.
pub fn load_projects_file(path: &Path) -> Result<Vec<ProjectRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&content),
        _ => parse_yaml(&content),
    }
}
